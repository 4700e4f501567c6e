//! Default value resolution for structural types.
//!
//! Containers and optionals always have a universal empty or absent value, so
//! they resolve without inspecting their element types. Only named types
//! depend on the builtin table or on caller overrides, which confines
//! unresolvable cases to unknown scalars, tuples containing them, and
//! function shapes other than `() -> Void`.

mod builtins;

use crate::expr::{Expr, Labeled};
use crate::model::{TupleElementType, TypeDescriptor};
use crate::overrides::OverrideTable;

pub use builtins::{DEFAULT_PLACEHOLDER_URL, builtin_default};

/// Outcome of resolving a type's default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A value expression of the requested type.
    Value(Expr),
    /// The type is void; no return expression is needed.
    NoValue,
    /// No safe default is known.
    Unresolved,
}

impl Resolution {
    /// The resolved expression, if any.
    #[must_use]
    pub fn into_value(self) -> Option<Expr> {
        match self {
            Self::Value(expr) => Some(expr),
            Self::NoValue | Self::Unresolved => None,
        }
    }

    /// Whether resolution failed.
    #[must_use]
    pub const fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }
}

/// Resolves default values against an override table.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    overrides: &'a OverrideTable,
    placeholder_url: &'a str,
}

impl<'a> Resolver<'a> {
    /// A resolver consulting `overrides` before the builtin table.
    #[must_use]
    pub const fn new(overrides: &'a OverrideTable) -> Self {
        Self {
            overrides,
            placeholder_url: DEFAULT_PLACEHOLDER_URL,
        }
    }

    /// Uses `url` as the literal for `URL` placeholders.
    #[must_use]
    pub const fn with_placeholder_url(mut self, url: &'a str) -> Self {
        self.placeholder_url = url;
        self
    }

    /// Resolves the default value of `ty`.
    ///
    /// Rules apply in a fixed order and the first match wins: optionals are
    /// absent, scalars consult overrides then the builtin table, containers
    /// are empty, tuples resolve element-wise, `() -> Void` is an empty
    /// closure and opaque types resolve through their constraint.
    #[must_use]
    pub fn resolve(&self, ty: &TypeDescriptor) -> Resolution {
        match ty {
            TypeDescriptor::Optional { .. } => Resolution::Value(Expr::nil()),
            TypeDescriptor::Scalar { name } => self.resolve_scalar(name),
            TypeDescriptor::Sequence { .. } => Resolution::Value(Expr::EmptySequence),
            TypeDescriptor::Mapping { .. } => Resolution::Value(Expr::EmptyMapping),
            TypeDescriptor::Tuple { elements } => self.resolve_tuple(elements),
            TypeDescriptor::NoArgVoidFunction => Resolution::Value(Expr::EmptyClosure),
            TypeDescriptor::Opaque { constraint } => self.resolve_scalar(constraint),
            TypeDescriptor::Unknown { .. } => Resolution::Unresolved,
        }
    }

    fn resolve_scalar(&self, written: &str) -> Resolution {
        let name = written.trim();
        if let Some(replacement) = self.overrides.get(name) {
            return Resolution::Value(Expr::override_source(replacement.clone()));
        }
        builtin_default(name, self.placeholder_url)
    }

    fn resolve_tuple(&self, elements: &[TupleElementType]) -> Resolution {
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            // A void element has no expression to place in the tuple.
            let Resolution::Value(value) = self.resolve(&element.ty) else {
                return Resolution::Unresolved;
            };
            values.push(Labeled {
                label: element.label.clone(),
                value,
            });
        }
        Resolution::Value(Expr::Tuple { elements: values })
    }
}

/// Resolves `ty` against `overrides` using the default URL placeholder.
///
/// # Examples
///
/// ```
/// use noop_synth::expr::Expr;
/// use noop_synth::model::TypeDescriptor;
/// use noop_synth::overrides::OverrideTable;
/// use noop_synth::resolve::{Resolution, resolve};
///
/// let overrides = OverrideTable::new();
/// let resolution = resolve(&TypeDescriptor::scalar("Int"), &overrides);
/// assert_eq!(resolution, Resolution::Value(Expr::integer(0)));
/// ```
#[must_use]
pub fn resolve(ty: &TypeDescriptor, overrides: &OverrideTable) -> Resolution {
    Resolver::new(overrides).resolve(ty)
}

#[cfg(test)]
mod tests;
