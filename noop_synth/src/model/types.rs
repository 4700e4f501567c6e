//! Structural type descriptors for requirement signatures.
//!
//! Hosts decode their own type syntax into [`TypeDescriptor`] before handing
//! a declaration to the synthesizer. Only the shapes the resolver reasons about
//! get a dedicated variant; everything else travels as [`TypeDescriptor::Unknown`]
//! with its raw spelling so it can still be reported and re-rendered.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A recursive structural type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeDescriptor {
    /// A named type such as `Int` or `MyStruct`.
    Scalar {
        /// Type name as written.
        name: String,
    },
    /// An optional wrapper (`T?`).
    Optional {
        /// Wrapped type.
        wrapped: Box<TypeDescriptor>,
    },
    /// An ordered collection (`[T]`).
    Sequence {
        /// Element type.
        element: Box<TypeDescriptor>,
    },
    /// A keyed collection (`[K: V]`).
    Mapping {
        /// Key type.
        key: Box<TypeDescriptor>,
        /// Value type.
        value: Box<TypeDescriptor>,
    },
    /// A tuple with optionally labelled elements.
    Tuple {
        /// Elements in declaration order.
        elements: Vec<TupleElementType>,
    },
    /// A closure taking no arguments and returning nothing (`() -> Void`).
    NoArgVoidFunction,
    /// An opaque existential such as `some Store`.
    Opaque {
        /// Constraint the opaque type conforms to.
        constraint: String,
    },
    /// Any shape the host could not decode structurally.
    Unknown {
        /// Raw spelling of the type.
        raw: String,
    },
}

/// One element of a [`TypeDescriptor::Tuple`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TupleElementType {
    /// Element label, if the tuple names it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Element type.
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

impl TypeDescriptor {
    /// Builds a [`TypeDescriptor::Scalar`].
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Scalar { name: name.into() }
    }

    /// Builds a [`TypeDescriptor::Optional`] around `wrapped`.
    #[must_use]
    pub fn optional(wrapped: Self) -> Self {
        Self::Optional {
            wrapped: Box::new(wrapped),
        }
    }

    /// Builds a [`TypeDescriptor::Sequence`] of `element`.
    #[must_use]
    pub fn sequence(element: Self) -> Self {
        Self::Sequence {
            element: Box::new(element),
        }
    }

    /// Builds a [`TypeDescriptor::Mapping`] from `key` to `value`.
    #[must_use]
    pub fn mapping(key: Self, value: Self) -> Self {
        Self::Mapping {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Builds a [`TypeDescriptor::Tuple`] from `(label, type)` pairs.
    #[must_use]
    pub fn tuple<I, L>(elements: I) -> Self
    where
        I: IntoIterator<Item = (Option<L>, Self)>,
        L: Into<String>,
    {
        Self::Tuple {
            elements: elements
                .into_iter()
                .map(|(label, ty)| TupleElementType {
                    label: label.map(Into::into),
                    ty,
                })
                .collect(),
        }
    }

    /// Builds a [`TypeDescriptor::Opaque`] constrained by `constraint`.
    #[must_use]
    pub fn opaque(constraint: impl Into<String>) -> Self {
        Self::Opaque {
            constraint: constraint.into(),
        }
    }

    /// Builds a [`TypeDescriptor::Unknown`] carrying `raw`.
    #[must_use]
    pub fn unknown(raw: impl Into<String>) -> Self {
        Self::Unknown { raw: raw.into() }
    }

    /// Returns the trimmed textual form used for override lookup and
    /// diagnostics.
    #[must_use]
    pub fn spelling(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar { name } => f.write_str(name.trim()),
            Self::Optional { wrapped } => match wrapped.as_ref() {
                // `() -> Void?` would bind the `?` to the return type.
                Self::NoArgVoidFunction | Self::Opaque { .. } => write!(f, "({wrapped})?"),
                Self::Unknown { raw } if !is_type_path(raw.trim()) => write!(f, "({wrapped})?"),
                _ => write!(f, "{wrapped}?"),
            },
            Self::Sequence { element } => write!(f, "[{element}]"),
            Self::Mapping { key, value } => write!(f, "[{key}: {value}]"),
            Self::Tuple { elements } => {
                f.write_str("(")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    if let Some(label) = &element.label {
                        write!(f, "{label}: ")?;
                    }
                    write!(f, "{}", element.ty)?;
                }
                f.write_str(")")
            }
            Self::NoArgVoidFunction => f.write_str("() -> Void"),
            Self::Opaque { constraint } => write!(f, "some {}", constraint.trim()),
            Self::Unknown { raw } => f.write_str(raw.trim()),
        }
    }
}

/// Whether `spelling` is a dotted name such as `Foundation.Date`, which takes a
/// `?` suffix without parentheses.
fn is_type_path(spelling: &str) -> bool {
    !spelling.is_empty()
        && spelling
            .chars()
            .all(|c| c == '_' || c == '.' || c.is_alphanumeric())
}
