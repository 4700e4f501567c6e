//! Assembles a complete no-op implementation for an interface.
//!
//! [`Synthesizer::synthesize`] is the entry point hosts call once per
//! declaration. It never fails: misuse and synthesis gaps are returned as
//! diagnostics next to whatever implementation could be produced.

use serde::{Deserialize, Serialize};

use crate::config::SynthesisOptions;
use crate::diagnostic::Diagnostic;
use crate::member::{Member, MemberSynthesizer};
use crate::model::{Declaration, InterfaceDeclaration, Requirement, Visibility};
use crate::overrides::{self, OverrideArgument};
use crate::resolve::Resolver;

/// The generated implementing type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizedImplementation {
    /// Name of the generated type.
    pub name: String,
    /// Interface the type conforms to.
    pub conforms_to: String,
    /// Access level of the type.
    pub visibility: Visibility,
    /// Members in requirement order, followed by the constructor.
    pub members: Vec<Member>,
}

impl SynthesizedImplementation {
    /// Looks a member up by name; the constructor is named `init`.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.name() == name)
    }
}

/// Result of one synthesis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synthesis {
    /// The implementation, absent when the declaration was not an interface.
    pub implementation: Option<SynthesizedImplementation>,
    /// Diagnostics in the order they were produced.
    pub diagnostics: Vec<Diagnostic>,
}

impl Synthesis {
    /// Whether any diagnostic has error severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Encodes the result as JSON for hosts in another process.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SynthError::Json`] if serialization fails.
    #[cfg(feature = "serde_json")]
    pub fn to_json(&self) -> Result<String, crate::SynthError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Synthesizes implementations using a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    options: SynthesisOptions,
}

impl Synthesizer {
    /// A synthesizer using `options`.
    #[must_use]
    pub const fn new(options: SynthesisOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    #[must_use]
    pub const fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Synthesizes a no-op implementation of `declaration`.
    ///
    /// Non-interface declarations produce a single `notAnInterface` error and
    /// no implementation; the override argument is not examined in that case.
    #[must_use]
    pub fn synthesize(&self, declaration: &Declaration, argument: &OverrideArgument) -> Synthesis {
        match declaration {
            Declaration::Interface(interface) => self.synthesize_interface(interface, argument),
            Declaration::Other { kind, name, anchor } => {
                tracing::debug!(%kind, %name, "declaration is not an interface");
                Synthesis {
                    implementation: None,
                    diagnostics: vec![Diagnostic::not_an_interface(kind, *anchor)],
                }
            }
        }
    }

    fn synthesize_interface(
        &self,
        interface: &InterfaceDeclaration,
        argument: &OverrideArgument,
    ) -> Synthesis {
        let (table, mut diagnostics) = overrides::build(argument);
        let visibility = interface.effective_visibility();
        tracing::debug!(
            interface = %interface.name,
            requirements = interface.requirements.len(),
            overrides = table.len(),
            ?visibility,
            "synthesizing no-op implementation"
        );

        let resolver = Resolver::new(&table).with_placeholder_url(&self.options.placeholder_url);
        let synthesizer = MemberSynthesizer::new(resolver, visibility);
        let mut members = Vec::with_capacity(interface.requirements.len() + 1);
        for requirement in &interface.requirements {
            let (member, diagnostic) = match requirement {
                Requirement::Property(property) => {
                    let (member, diagnostic) = synthesizer.property(property);
                    (Member::Property(member), diagnostic)
                }
                Requirement::Method(method) => {
                    let (member, diagnostic) = synthesizer.method(method);
                    (Member::Method(member), diagnostic)
                }
            };
            members.push(member);
            diagnostics.extend(diagnostic);
        }
        members.push(Member::Initializer(synthesizer.initializer()));

        Synthesis {
            implementation: Some(SynthesizedImplementation {
                name: format!("{}{}", self.options.type_prefix, interface.name),
                conforms_to: interface.name.clone(),
                visibility,
                members,
            }),
            diagnostics,
        }
    }
}

/// Synthesizes `declaration` with default options.
///
/// # Examples
///
/// ```
/// use noop_synth::model::{Anchor, InterfaceDeclaration, PropertyRequirement, Mutability,
///     Requirement, TypeAnnotation, TypeDescriptor};
/// use noop_synth::overrides::OverrideArgument;
/// use noop_synth::synthesize;
///
/// let mut counter = InterfaceDeclaration::new("Counter");
/// counter.requirements.push(Requirement::Property(PropertyRequirement {
///     name: "count".to_owned(),
///     annotation: TypeAnnotation::new(TypeDescriptor::scalar("Int"), Anchor(1)),
///     mutability: Mutability::Get,
///     anchor: Anchor(0),
/// }));
/// let synthesis = synthesize(&counter.into(), &OverrideArgument::Absent);
/// assert!(synthesis.diagnostics.is_empty());
/// let implementation = synthesis.implementation.expect("interfaces always synthesize");
/// assert_eq!(implementation.name, "NoopCounter");
/// ```
#[must_use]
pub fn synthesize(declaration: &Declaration, argument: &OverrideArgument) -> Synthesis {
    Synthesizer::default().synthesize(declaration, argument)
}
