//! Input model: interface declarations and structural type descriptors.

mod declaration;
mod types;

pub use declaration::{
    Anchor, Declaration, Effects, GenericClause, GenericParameter, InterfaceDeclaration,
    MethodRequirement, Mutability, Parameter, PropertyRequirement, Requirement, TypeAnnotation,
    Visibility,
};
pub use types::{TupleElementType, TypeDescriptor};
