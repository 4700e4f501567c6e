//! Turns interface requirements into concrete, inert members.
//!
//! Properties become getter-only computed properties returning their default.
//! Methods keep their signature (parameters, effects and generic clause) and
//! return their default, do nothing when they return nothing, or fail loudly
//! when no default exists: failable methods raise [`NoopError`], everything
//! else aborts.
//!
//! [`NoopError`]: crate::NoopError

use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::expr::Body;
use crate::model::{
    Effects, GenericClause, MethodRequirement, Parameter, PropertyRequirement, TypeDescriptor,
    Visibility,
};
use crate::resolve::{Resolution, Resolver};

/// A getter-only property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMember {
    /// Access level.
    pub visibility: Visibility,
    /// Property name.
    pub name: String,
    /// Property type.
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    /// Body of the getter.
    pub getter: Body,
}

/// A method implementing a requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodMember {
    /// Access level.
    pub visibility: Visibility,
    /// Method name.
    pub name: String,
    /// Generic clause carried over from the requirement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generics: Option<GenericClause>,
    /// Parameters with attributes removed.
    pub parameters: Vec<Parameter>,
    /// Declared return type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeDescriptor>,
    /// Effect markers carried over from the requirement.
    pub effects: Effects,
    /// Method body.
    pub body: Body,
}

/// The trivial no-argument constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initializer {
    /// Access level.
    pub visibility: Visibility,
}

/// A member of a synthesized implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "camelCase")]
pub enum Member {
    /// A computed property.
    Property(PropertyMember),
    /// A method.
    Method(MethodMember),
    /// The constructor.
    Initializer(Initializer),
}

impl Member {
    /// Member name; constructors are named `init`.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Property(property) => &property.name,
            Self::Method(method) => &method.name,
            Self::Initializer(_) => "init",
        }
    }

    /// Access level of the member.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        match self {
            Self::Property(PropertyMember { visibility, .. })
            | Self::Method(MethodMember { visibility, .. })
            | Self::Initializer(Initializer { visibility }) => *visibility,
        }
    }

    /// The property, if this member is one.
    #[must_use]
    pub const fn as_property(&self) -> Option<&PropertyMember> {
        match self {
            Self::Property(property) => Some(property),
            _ => None,
        }
    }

    /// The method, if this member is one.
    #[must_use]
    pub const fn as_method(&self) -> Option<&MethodMember> {
        match self {
            Self::Method(method) => Some(method),
            _ => None,
        }
    }
}

/// Synthesizes members at a fixed visibility using a shared resolver.
#[derive(Debug, Clone, Copy)]
pub struct MemberSynthesizer<'a> {
    resolver: Resolver<'a>,
    visibility: Visibility,
}

impl<'a> MemberSynthesizer<'a> {
    /// Members produced will use `visibility` and resolve through `resolver`.
    #[must_use]
    pub const fn new(resolver: Resolver<'a>, visibility: Visibility) -> Self {
        Self {
            resolver,
            visibility,
        }
    }

    /// Builds a getter-only property for `requirement`.
    ///
    /// An unresolvable type yields an `unresolvedDefaultValue` warning anchored
    /// at the type and a getter that aborts, since properties have no failure
    /// channel.
    #[must_use]
    pub fn property(&self, requirement: &PropertyRequirement) -> (PropertyMember, Option<Diagnostic>) {
        let annotation = &requirement.annotation;
        let (getter, diagnostic) = match self.resolver.resolve(&annotation.ty) {
            Resolution::Value(value) => (Body::returning(value), None),
            Resolution::NoValue => (Body::empty(), None),
            Resolution::Unresolved => {
                let type_name = annotation.ty.spelling();
                tracing::debug!(
                    property = %requirement.name,
                    type_name = %type_name,
                    "no default value; property getter aborts"
                );
                (
                    Body::aborting(&type_name),
                    Some(Diagnostic::unresolved_default_value(
                        &type_name,
                        annotation.anchor,
                    )),
                )
            }
        };
        let member = PropertyMember {
            visibility: self.visibility,
            name: requirement.name.clone(),
            ty: annotation.ty.clone(),
            getter,
        };
        (member, diagnostic)
    }

    /// Builds a method for `requirement`, preserving its signature.
    ///
    /// Failable methods whose return type cannot be resolved raise
    /// [`crate::NoopError::DefaultValueUnavailable`] without any diagnostic;
    /// other unresolved methods abort and report `unresolvedDefaultValue`.
    #[must_use]
    pub fn method(&self, requirement: &MethodRequirement) -> (MethodMember, Option<Diagnostic>) {
        let (body, diagnostic) = self.method_body(requirement);
        let member = MethodMember {
            visibility: self.visibility,
            name: requirement.name.clone(),
            generics: requirement.generics.clone(),
            parameters: requirement.parameters.iter().map(normalize_parameter).collect(),
            return_type: requirement
                .return_type
                .as_ref()
                .map(|annotation| annotation.ty.clone()),
            effects: requirement.effects,
            body,
        };
        (member, diagnostic)
    }

    fn method_body(&self, requirement: &MethodRequirement) -> (Body, Option<Diagnostic>) {
        let Some(annotation) = &requirement.return_type else {
            return (Body::empty(), None);
        };
        match self.resolver.resolve(&annotation.ty) {
            Resolution::Value(value) => (Body::returning(value), None),
            Resolution::NoValue => (Body::empty(), None),
            Resolution::Unresolved if requirement.effects.failable => {
                let type_name = annotation.ty.spelling();
                tracing::debug!(
                    method = %requirement.name,
                    type_name = %type_name,
                    "no default value; failable method raises"
                );
                (Body::raising(&type_name), None)
            }
            Resolution::Unresolved => {
                let type_name = annotation.ty.spelling();
                tracing::debug!(
                    method = %requirement.name,
                    type_name = %type_name,
                    "no default value; method aborts"
                );
                (
                    Body::aborting(&type_name),
                    Some(Diagnostic::unresolved_default_value(
                        &type_name,
                        annotation.anchor,
                    )),
                )
            }
        }
    }

    /// The trivial constructor at this synthesizer's visibility.
    #[must_use]
    pub const fn initializer(&self) -> Initializer {
        Initializer {
            visibility: self.visibility,
        }
    }
}

/// Drops attributes and specifiers, which carry no meaning for a body that
/// ignores its arguments.
fn normalize_parameter(parameter: &Parameter) -> Parameter {
    Parameter {
        attributes: Vec::new(),
        ..parameter.clone()
    }
}
