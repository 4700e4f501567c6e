//! Closed expression and statement algebra for generated member bodies.
//!
//! Generated code is always built from these values rather than from strings,
//! so tests can inspect exactly what a member will do and renderers never
//! need to re-parse their own output.

use serde::{Deserialize, Serialize};

use crate::error::NoopError;

/// Host source text supplied as an override, carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideExpr(pub String);

impl OverrideExpr {
    /// Wraps host source text.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// Source text as supplied by the host.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "literal", content = "value", rename_all = "camelCase")]
pub enum Literal {
    /// The absent value of an optional (`nil`).
    Nil,
    /// An integer literal.
    Integer(i64),
    /// A text literal.
    String(String),
    /// A boolean literal.
    Bool(bool),
}

/// A labelled argument or tuple element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Labeled {
    /// Label, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Value expression.
    pub value: Expr,
}

/// A value expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "expr", rename_all = "camelCase")]
pub enum Expr {
    /// A literal.
    Literal {
        /// Literal value.
        literal: Literal,
    },
    /// An initializer call such as `Date()` or `URL(string: "...")`.
    Construct {
        /// Type being constructed.
        type_name: String,
        /// Arguments in call order.
        arguments: Vec<Labeled>,
    },
    /// Unwraps an optional, terminating when it is absent (`expr!`).
    ForceUnwrap {
        /// Optional-valued operand.
        operand: Box<Expr>,
    },
    /// A tuple value.
    Tuple {
        /// Elements in order, labels preserved.
        elements: Vec<Labeled>,
    },
    /// An empty ordered collection (`[]`).
    EmptySequence,
    /// An empty keyed collection (`[:]`).
    EmptyMapping,
    /// A closure that does nothing (`{}`).
    EmptyClosure,
    /// Host-supplied override text.
    Override {
        /// Verbatim source.
        source: OverrideExpr,
    },
}

impl Expr {
    /// `nil`
    #[must_use]
    pub const fn nil() -> Self {
        Self::Literal {
            literal: Literal::Nil,
        }
    }

    /// An integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal {
            literal: Literal::Integer(value),
        }
    }

    /// A text literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal {
            literal: Literal::String(value.into()),
        }
    }

    /// A boolean literal.
    #[must_use]
    pub const fn bool(value: bool) -> Self {
        Self::Literal {
            literal: Literal::Bool(value),
        }
    }

    /// A no-argument initializer call.
    #[must_use]
    pub fn construct(type_name: impl Into<String>) -> Self {
        Self::Construct {
            type_name: type_name.into(),
            arguments: Vec::new(),
        }
    }

    /// Override text carried verbatim.
    #[must_use]
    pub const fn override_source(source: OverrideExpr) -> Self {
        Self::Override { source }
    }
}

/// A statement in a generated body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "stmt", rename_all = "camelCase")]
pub enum Stmt {
    /// Returns a value.
    Return {
        /// Returned value.
        value: Expr,
    },
    /// Terminates the process unconditionally.
    Abort {
        /// Message attached to the termination.
        message: String,
    },
    /// Raises a typed failure through the member's failure channel.
    Raise {
        /// Failure raised.
        error: NoopError,
    },
}

/// Statements forming a generated body; empty for members that do nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Body(pub Vec<Stmt>);

impl Body {
    /// A body with no statements.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// A body returning `value`.
    #[must_use]
    pub fn returning(value: Expr) -> Self {
        Self(vec![Stmt::Return { value }])
    }

    /// A body that aborts with a message naming `type_name`.
    #[must_use]
    pub fn aborting(type_name: &str) -> Self {
        Self(vec![Stmt::Abort {
            message: format!("Cannot generate default value for type '{type_name}'"),
        }])
    }

    /// A body raising [`NoopError::DefaultValueUnavailable`] for `type_name`.
    #[must_use]
    pub fn raising(type_name: &str) -> Self {
        Self(vec![Stmt::Raise {
            error: NoopError::DefaultValueUnavailable {
                type_name: type_name.to_owned(),
            },
        }])
    }

    /// Statements in order.
    #[must_use]
    pub const fn statements(&self) -> &[Stmt] {
        self.0.as_slice()
    }

    /// Whether the body has no statements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value returned by the body, if it consists of a single return.
    #[must_use]
    pub const fn returned_value(&self) -> Option<&Expr> {
        match self.0.as_slice() {
            [Stmt::Return { value }] => Some(value),
            _ => None,
        }
    }

    /// Whether the body terminates the process.
    #[must_use]
    pub fn aborts(&self) -> bool {
        self.0.iter().any(|stmt| matches!(stmt, Stmt::Abort { .. }))
    }

    /// Failure the body raises, if any.
    #[must_use]
    pub fn raised_error(&self) -> Option<&NoopError> {
        self.0.iter().find_map(|stmt| match stmt {
            Stmt::Raise { error } => Some(error),
            _ => None,
        })
    }
}
