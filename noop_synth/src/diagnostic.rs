//! Diagnostics reported while synthesizing an implementation.
//!
//! Diagnostics are values, never errors: every synthesis run completes and
//! returns whatever it produced alongside the diagnostics it collected. The
//! host decides how to surface them and whether an error blocks its build.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Anchor;

/// Category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// Synthesis was requested for something other than an interface.
    NotAnInterface,
    /// The override argument was not a mapping literal.
    InvalidOverrideArgument,
    /// An override key was not a string literal.
    InvalidOverrideKey,
    /// A type had no builtin default and no override.
    UnresolvedDefaultValue,
    /// Any other problem with the input.
    Other,
}

impl DiagnosticKind {
    /// Stable identifier for host-side filtering.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::NotAnInterface => "notAnInterface",
            Self::InvalidOverrideArgument => "invalidOverrideArgument",
            Self::InvalidOverrideKey => "invalidOverrideKey",
            Self::UnresolvedDefaultValue => "unresolvedDefaultValue",
            Self::Other => "other",
        }
    }
}

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    /// The input is misused.
    Error,
    /// Synthesis produced a member that fails at runtime.
    Warning,
}

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Category.
    pub kind: DiagnosticKind,
    /// Seriousness.
    pub severity: Severity,
    /// Human-readable explanation.
    pub message: String,
    /// Host location the diagnostic refers to.
    pub anchor: Anchor,
}

impl Diagnostic {
    /// Synthesis was applied to a non-interface `kind` declaration.
    #[must_use]
    pub fn not_an_interface(kind: &str, anchor: Anchor) -> Self {
        Self {
            kind: DiagnosticKind::NotAnInterface,
            severity: Severity::Error,
            message: format!(
                "noop implementations can only be synthesized for protocols, not for a {kind}"
            ),
            anchor,
        }
    }

    /// The override argument is not a mapping literal.
    #[must_use]
    pub fn invalid_override_argument(anchor: Anchor) -> Self {
        Self {
            kind: DiagnosticKind::InvalidOverrideArgument,
            severity: Severity::Error,
            message: "the 'overrides' argument must be a dictionary literal such as \
                      [\"String\": \"value\", \"Int\": 0]"
                .to_owned(),
            anchor,
        }
    }

    /// An override key is not a string literal.
    #[must_use]
    pub fn invalid_override_key(anchor: Anchor) -> Self {
        Self {
            kind: DiagnosticKind::InvalidOverrideKey,
            severity: Severity::Error,
            message: "'overrides' keys must be string literals naming a type".to_owned(),
            anchor,
        }
    }

    /// No default value exists for `type_name`.
    #[must_use]
    pub fn unresolved_default_value(type_name: &str, anchor: Anchor) -> Self {
        Self {
            kind: DiagnosticKind::UnresolvedDefaultValue,
            severity: Severity::Warning,
            message: format!(
                "could not determine a default value for type '{type_name}'; a fatal error \
                 will be inserted. Supply one through the 'overrides' argument."
            ),
            anchor,
        }
    }

    /// Any other input problem.
    #[must_use]
    pub fn other(message: impl Into<String>, anchor: Anchor) -> Self {
        Self {
            kind: DiagnosticKind::Other,
            severity: Severity::Error,
            message: message.into(),
            anchor,
        }
    }

    /// Whether the diagnostic has error severity.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{severity}[{}]: {}", self.kind.id(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::{Diagnostic, DiagnosticKind, Severity};
    use crate::model::Anchor;

    #[test]
    fn unresolved_default_is_a_warning_naming_the_type() {
        let diagnostic = Diagnostic::unresolved_default_value("Session", Anchor(7));
        assert_eq!(diagnostic.kind, DiagnosticKind::UnresolvedDefaultValue);
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(diagnostic.anchor, Anchor(7));
        assert!(diagnostic.message.contains("'Session'"));
        assert!(!diagnostic.is_error());
    }

    #[test]
    fn display_includes_kind_identifier() {
        let diagnostic = Diagnostic::invalid_override_key(Anchor(1));
        assert!(
            diagnostic
                .to_string()
                .starts_with("error[invalidOverrideKey]:")
        );
    }
}
