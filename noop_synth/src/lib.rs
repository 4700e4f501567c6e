//! Synthesizes inert default implementations of declared interfaces.
//!
//! A host decodes an interface (protocol) into a [`model::Declaration`] and
//! calls [`synthesize`]. The result describes a `Noop<Interface>` type whose
//! members return safe placeholder values, do nothing, or fail loudly when no
//! placeholder exists, together with diagnostics explaining each gap.
//!
//! ```
//! use noop_synth::model::{Anchor, Effects, InterfaceDeclaration, MethodRequirement,
//!     Requirement, TypeAnnotation, TypeDescriptor};
//! use noop_synth::overrides::OverrideArgument;
//! use noop_synth::synthesize;
//!
//! let mut store = InterfaceDeclaration::new("Store");
//! store.requirements.push(Requirement::Method(MethodRequirement {
//!     name: "load".to_owned(),
//!     parameters: Vec::new(),
//!     return_type: Some(TypeAnnotation::new(TypeDescriptor::scalar("Session"), Anchor(2))),
//!     effects: Effects { suspending: true, failable: true },
//!     generics: None,
//!     anchor: Anchor(1),
//! }));
//!
//! let synthesis = synthesize(&store.into(), &OverrideArgument::Absent);
//! // Failable members surface missing defaults as a typed error, silently.
//! assert!(synthesis.diagnostics.is_empty());
//! ```

pub mod config;
pub mod diagnostic;
mod error;
pub mod expr;
pub mod member;
pub mod model;
pub mod overrides;
pub mod render;
pub mod resolve;
pub mod synthesize;

pub use config::SynthesisOptions;
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use error::{NoopError, SynthError};
pub use synthesize::{Synthesis, SynthesizedImplementation, Synthesizer, synthesize};
