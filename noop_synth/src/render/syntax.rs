//! Source spellings of individual expressions, statements and signature parts.

use std::fmt;

use crate::error::NoopError;
use crate::expr::{Expr, Labeled, Literal, Stmt};
use crate::model::{Effects, GenericClause, Parameter, Visibility};

use super::escape::quote;

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Restricted => "fileprivate",
            Self::Internal => "internal",
            Self::Public => "public",
        })
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(&quote(value)),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

fn write_labeled_list(f: &mut fmt::Formatter<'_>, items: &[Labeled]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        if let Some(label) = &item.label {
            write!(f, "{label}: ")?;
        }
        write!(f, "{}", item.value)?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { literal } => write!(f, "{literal}"),
            Self::Construct {
                type_name,
                arguments,
            } => {
                write!(f, "{type_name}(")?;
                write_labeled_list(f, arguments)?;
                f.write_str(")")
            }
            Self::ForceUnwrap { operand } => write!(f, "{operand}!"),
            Self::Tuple { elements } => {
                f.write_str("(")?;
                write_labeled_list(f, elements)?;
                f.write_str(")")
            }
            Self::EmptySequence => f.write_str("[]"),
            Self::EmptyMapping => f.write_str("[:]"),
            Self::EmptyClosure => f.write_str("{}"),
            Self::Override { source } => f.write_str(source.as_str().trim()),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Return { value } => write!(f, "return {value}"),
            Self::Abort { message } => write!(f, "fatalError({})", quote(message)),
            Self::Raise { error } => match error {
                NoopError::DefaultValueUnavailable { type_name } => write!(
                    f,
                    "throw NoopError.defaultValueUnavailable(typeName: {})",
                    quote(type_name)
                ),
            },
        }
    }
}

/// Parenthesised parameter list.
pub(super) struct ParameterList<'a>(pub &'a [Parameter]);

impl fmt::Display for ParameterList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, parameter) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&parameter.first_name)?;
            if let Some(second) = &parameter.second_name {
                write!(f, " {second}")?;
            }
            write!(f, ": ")?;
            for attribute in &parameter.attributes {
                write!(f, "{attribute} ")?;
            }
            write!(f, "{}", parameter.ty)?;
        }
        f.write_str(")")
    }
}

/// ` async throws` style suffix; empty when the signature has no effects.
pub(super) struct EffectList(pub Effects);

impl fmt::Display for EffectList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.suspending {
            f.write_str(" async")?;
        }
        if self.0.failable {
            f.write_str(" throws")?;
        }
        Ok(())
    }
}

/// `<T: P, U>` generic parameter list; empty when there are none.
pub(super) struct GenericParameters<'a>(pub Option<&'a GenericClause>);

impl fmt::Display for GenericParameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(clause) = self.0.filter(|clause| !clause.parameters.is_empty()) else {
            return Ok(());
        };
        f.write_str("<")?;
        for (index, parameter) in clause.parameters.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&parameter.name)?;
            if let Some(constraint) = &parameter.constraint {
                write!(f, ": {constraint}")?;
            }
        }
        f.write_str(">")
    }
}

/// ` where A == B` suffix; empty when there are no requirements.
pub(super) struct WhereClause<'a>(pub Option<&'a GenericClause>);

impl fmt::Display for WhereClause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(clause) = self.0.filter(|clause| !clause.where_requirements.is_empty()) else {
            return Ok(());
        };
        write!(f, " where {}", clause.where_requirements.join(", "))
    }
}
