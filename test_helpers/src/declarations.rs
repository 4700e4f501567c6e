//! Builders for interface declarations and override arguments.
//!
//! Anchors are allocated sequentially so tests can predict where diagnostics
//! point. The interface itself sits at anchor 1. Each requirement takes the
//! next anchor, and its type annotation the one after that.
//!
//! # Examples
//!
//! ```
//! use noop_synth::model::{Anchor, TypeDescriptor};
//! use noop_synth_test_helpers::declarations::InterfaceBuilder;
//!
//! let interface = InterfaceBuilder::new("Clock")
//!     .property("now", TypeDescriptor::scalar("Date"))
//!     .build_interface();
//! assert_eq!(interface.anchor, Anchor(1));
//! assert_eq!(interface.requirements.len(), 1);
//! ```

use noop_synth::model::{
    Anchor, Declaration, Effects, GenericClause, GenericParameter, InterfaceDeclaration,
    MethodRequirement, Mutability, Parameter, PropertyRequirement, Requirement, TypeAnnotation,
    TypeDescriptor, Visibility,
};
use noop_synth::overrides::{OverrideArgument, OverrideEntry, OverrideKey};

/// Anchor of every interface built by [`InterfaceBuilder`].
pub const INTERFACE_ANCHOR: Anchor = Anchor(1);

/// First anchor handed out by [`overrides`] to mapping keys.
pub const OVERRIDE_KEY_BASE: u64 = 100;

/// Incrementally assembles an [`InterfaceDeclaration`].
#[derive(Debug, Clone)]
pub struct InterfaceBuilder {
    declaration: InterfaceDeclaration,
    next_anchor: u64,
}

impl InterfaceBuilder {
    /// Starts an interface called `name` with no modifiers or requirements.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let mut declaration = InterfaceDeclaration::new(name);
        declaration.anchor = INTERFACE_ANCHOR;
        Self {
            declaration,
            next_anchor: INTERFACE_ANCHOR.0 + 1,
        }
    }

    /// Adds an access modifier to the interface.
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.declaration.visibility.push(visibility);
        self
    }

    /// Adds a read-only property requirement.
    #[must_use]
    pub fn property(self, name: &str, ty: TypeDescriptor) -> Self {
        self.property_with(name, ty, Mutability::Get)
    }

    /// Adds a read-write property requirement.
    #[must_use]
    pub fn settable_property(self, name: &str, ty: TypeDescriptor) -> Self {
        self.property_with(name, ty, Mutability::GetSet)
    }

    fn property_with(mut self, name: &str, ty: TypeDescriptor, mutability: Mutability) -> Self {
        let (anchor, type_anchor) = self.allocate();
        self.declaration
            .requirements
            .push(Requirement::Property(PropertyRequirement {
                name: name.to_owned(),
                annotation: TypeAnnotation::new(ty, type_anchor),
                mutability,
                anchor,
            }));
        self
    }

    /// Adds a plain method requirement with no parameters.
    #[must_use]
    pub fn method(self, name: &str, return_type: Option<TypeDescriptor>) -> Self {
        self.method_with(MethodBuilder::new(name).returning_opt(return_type))
    }

    /// Adds the method described by `method`.
    #[must_use]
    pub fn method_with(mut self, method: MethodBuilder) -> Self {
        let (anchor, type_anchor) = self.allocate();
        self.declaration
            .requirements
            .push(Requirement::Method(MethodRequirement {
                name: method.name,
                parameters: method.parameters,
                return_type: method
                    .return_type
                    .map(|ty| TypeAnnotation::new(ty, type_anchor)),
                effects: method.effects,
                generics: method.generics,
                anchor,
            }));
        self
    }

    /// Finishes the interface.
    #[must_use]
    pub fn build_interface(self) -> InterfaceDeclaration {
        self.declaration
    }

    /// Finishes the interface wrapped as a [`Declaration`].
    #[must_use]
    pub fn build(self) -> Declaration {
        Declaration::Interface(self.declaration)
    }

    const fn allocate(&mut self) -> (Anchor, Anchor) {
        let anchor = self.next_anchor;
        self.next_anchor += 2;
        (Anchor(anchor), Anchor(anchor + 1))
    }
}

/// Describes a method requirement before it is added to an interface.
#[derive(Debug, Clone)]
pub struct MethodBuilder {
    name: String,
    parameters: Vec<Parameter>,
    return_type: Option<TypeDescriptor>,
    effects: Effects,
    generics: Option<GenericClause>,
}

impl MethodBuilder {
    /// A method named `name` returning nothing.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            parameters: Vec::new(),
            return_type: None,
            effects: Effects::default(),
            generics: None,
        }
    }

    /// Sets the declared return type.
    #[must_use]
    pub fn returning(self, ty: TypeDescriptor) -> Self {
        self.returning_opt(Some(ty))
    }

    fn returning_opt(mut self, ty: Option<TypeDescriptor>) -> Self {
        self.return_type = ty;
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Marks the method `async`.
    #[must_use]
    pub fn suspending(mut self) -> Self {
        self.effects.suspending = true;
        self
    }

    /// Marks the method `throws`.
    #[must_use]
    pub fn failable(mut self) -> Self {
        self.effects.failable = true;
        self
    }

    /// Adds a generic parameter, creating the clause on first use.
    #[must_use]
    pub fn generic(mut self, name: &str, constraint: Option<&str>) -> Self {
        self.generics
            .get_or_insert_with(GenericClause::default)
            .parameters
            .push(GenericParameter {
                name: name.to_owned(),
                constraint: constraint.map(str::to_owned),
            });
        self
    }

    /// Adds a `where` requirement, creating the clause on first use.
    #[must_use]
    pub fn where_requirement(mut self, requirement: &str) -> Self {
        self.generics
            .get_or_insert_with(GenericClause::default)
            .where_requirements
            .push(requirement.to_owned());
        self
    }
}

/// A mapping argument whose keys are string literals.
///
/// Keys are anchored from [`OVERRIDE_KEY_BASE`] upwards in entry order.
#[must_use]
pub fn overrides<'a, I>(pairs: I) -> OverrideArgument
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    OverrideArgument::mapping(pairs.into_iter().zip(OVERRIDE_KEY_BASE..).map(
        |((type_name, value), anchor)| {
            OverrideEntry::new(OverrideKey::literal(type_name, Anchor(anchor)), value)
        },
    ))
}

/// A declaration that is not an interface.
#[must_use]
pub fn other_declaration(kind: &str, name: &str) -> Declaration {
    Declaration::Other {
        kind: kind.to_owned(),
        name: name.to_owned(),
        anchor: INTERFACE_ANCHOR,
    }
}
