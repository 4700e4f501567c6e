//! Declarations handed to the synthesizer by its host.

use serde::{Deserialize, Serialize};

use super::types::TypeDescriptor;

/// Opaque host reference used to position diagnostics.
///
/// The synthesizer never interprets anchors; it only copies them onto the
/// diagnostics it emits so the host can map them back to source positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Anchor(pub u64);

/// Access level of a declaration.
///
/// Variants are ordered from narrowest to widest so that `min` selects the
/// most restrictive level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    /// Visible only within the declaring file.
    Restricted,
    /// Visible within the declaring module.
    #[default]
    Internal,
    /// Visible to every client.
    Public,
}

impl Visibility {
    /// Returns the narrowest of `declared`, or [`Visibility::Internal`] when the
    /// declaration states none.
    #[must_use]
    pub fn narrowest<'a, I>(declared: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        declared.into_iter().copied().min().unwrap_or_default()
    }
}

/// A declaration the host wants a no-op implementation for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "declaration", rename_all = "camelCase")]
pub enum Declaration {
    /// An interface (protocol) declaration.
    Interface(InterfaceDeclaration),
    /// Any other construct, such as a struct or class.
    Other {
        /// Keyword naming the construct (`struct`, `class`, ...).
        kind: String,
        /// Declared name.
        name: String,
        /// Location of the declaration.
        #[serde(default)]
        anchor: Anchor,
    },
}

impl Declaration {
    /// Host-side anchor of the declaration.
    #[must_use]
    pub const fn anchor(&self) -> Anchor {
        match self {
            Self::Interface(interface) => interface.anchor,
            Self::Other { anchor, .. } => *anchor,
        }
    }

    /// Decodes a declaration from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SynthError::Json`] when `input` is not a valid
    /// declaration document.
    #[cfg(feature = "serde_json")]
    pub fn from_json(input: &str) -> Result<Self, crate::SynthError> {
        Ok(serde_json::from_str(input)?)
    }
}

impl From<InterfaceDeclaration> for Declaration {
    fn from(interface: InterfaceDeclaration) -> Self {
        Self::Interface(interface)
    }
}

/// An interface and its ordered requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDeclaration {
    /// Interface name, unique within its compilation unit.
    pub name: String,
    /// Visibility modifiers as written on the interface.
    #[serde(default)]
    pub visibility: Vec<Visibility>,
    /// Requirements in declaration order.
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    /// Location of the declaration.
    #[serde(default)]
    pub anchor: Anchor,
}

impl InterfaceDeclaration {
    /// Creates an interface with no modifiers or requirements.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Vec::new(),
            requirements: Vec::new(),
            anchor: Anchor::default(),
        }
    }

    /// Visibility the generated implementation and its members use.
    #[must_use]
    pub fn effective_visibility(&self) -> Visibility {
        Visibility::narrowest(&self.visibility)
    }
}

/// A member an implementation must provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "requirement", rename_all = "camelCase")]
pub enum Requirement {
    /// A property requirement.
    Property(PropertyRequirement),
    /// A method requirement.
    Method(MethodRequirement),
}

impl Requirement {
    /// Declared member name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Property(property) => &property.name,
            Self::Method(method) => &method.name,
        }
    }
}

/// A type as written at a particular location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAnnotation {
    /// Structural form of the type.
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    /// Location of the written type.
    #[serde(default)]
    pub anchor: Anchor,
}

impl TypeAnnotation {
    /// Pairs `ty` with the location it was written at.
    #[must_use]
    pub const fn new(ty: TypeDescriptor, anchor: Anchor) -> Self {
        Self { ty, anchor }
    }
}

/// Accessors a property requirement declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mutability {
    /// `{ get }`
    #[default]
    Get,
    /// `{ get set }`
    GetSet,
}

/// `var name: Type { get }` style requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRequirement {
    /// Property name.
    pub name: String,
    /// Declared type.
    pub annotation: TypeAnnotation,
    /// Declared accessors.
    #[serde(default)]
    pub mutability: Mutability,
    /// Location of the requirement.
    #[serde(default)]
    pub anchor: Anchor,
}

/// Effect markers of a method signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Effects {
    /// `async`
    pub suspending: bool,
    /// `throws`
    pub failable: bool,
}

/// One parameter of a method requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Argument label, or the sole name when no second name is given.
    pub first_name: String,
    /// Local parameter name following the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_name: Option<String>,
    /// Parameter type.
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    /// Attributes and specifiers attached to the type (`@escaping`, `inout`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
}

impl Parameter {
    /// Creates a parameter with a single name.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            first_name: name.into(),
            second_name: None,
            ty,
            attributes: Vec::new(),
        }
    }

    /// Adds a local name after the argument label.
    #[must_use]
    pub fn with_second_name(mut self, name: impl Into<String>) -> Self {
        self.second_name = Some(name.into());
        self
    }
}

/// A generic parameter such as `T: Codable`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericParameter {
    /// Parameter name.
    pub name: String,
    /// Inline constraint, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
}

/// Generic parameters and `where` requirements of a method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericClause {
    /// Generic parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<GenericParameter>,
    /// `where` requirements as written, such as `T.Element == Int`.
    #[serde(default)]
    pub where_requirements: Vec<String>,
}

/// `func name(...) -> Type` style requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRequirement {
    /// Method name.
    pub name: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Declared return type; `None` for methods returning nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeAnnotation>,
    /// Effect markers.
    #[serde(default)]
    pub effects: Effects,
    /// Generic clause, if the requirement declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generics: Option<GenericClause>,
    /// Location of the requirement.
    #[serde(default)]
    pub anchor: Anchor,
}
