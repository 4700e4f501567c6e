//! Caller-supplied default values keyed by type name.
//!
//! The host passes the `overrides` argument exactly as it appeared in source:
//! absent, an explicit "no overrides" marker, a mapping literal, or something
//! else entirely. [`build`] validates it into an [`OverrideTable`], reporting
//! malformed pieces without giving up on the rest.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::expr::OverrideExpr;
use crate::model::Anchor;

/// Key of one mapping entry as written by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key", rename_all = "camelCase")]
pub enum OverrideKey {
    /// A plain string literal naming a type.
    StringLiteral {
        /// Literal contents.
        value: String,
        /// Location of the key.
        #[serde(default)]
        anchor: Anchor,
    },
    /// Any other expression in key position.
    Expression {
        /// Source text of the expression.
        source: String,
        /// Location of the key.
        #[serde(default)]
        anchor: Anchor,
    },
}

impl OverrideKey {
    /// A string literal key.
    #[must_use]
    pub fn literal(value: impl Into<String>, anchor: Anchor) -> Self {
        Self::StringLiteral {
            value: value.into(),
            anchor,
        }
    }

    /// A non-literal key.
    #[must_use]
    pub fn expression(source: impl Into<String>, anchor: Anchor) -> Self {
        Self::Expression {
            source: source.into(),
            anchor,
        }
    }
}

/// One `key: value` pair of a mapping literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    /// Entry key.
    pub key: OverrideKey,
    /// Replacement expression.
    pub value: OverrideExpr,
}

impl OverrideEntry {
    /// Pairs `key` with the source of its replacement value.
    #[must_use]
    pub fn new(key: OverrideKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: OverrideExpr::new(value),
        }
    }
}

/// The raw `overrides` argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "argument", rename_all = "camelCase")]
pub enum OverrideArgument {
    /// No argument was given.
    #[default]
    Absent,
    /// The argument explicitly states there are no overrides (`nil`).
    NoOverrides {
        /// Location of the argument.
        #[serde(default)]
        anchor: Anchor,
    },
    /// A mapping literal.
    Mapping {
        /// Entries in source order.
        entries: Vec<OverrideEntry>,
        /// Location of the argument.
        #[serde(default)]
        anchor: Anchor,
    },
    /// Anything that is not a mapping literal.
    Other {
        /// Source text of the argument.
        source: String,
        /// Location of the argument.
        #[serde(default)]
        anchor: Anchor,
    },
}

impl OverrideArgument {
    /// A mapping literal anchored at the default location.
    #[must_use]
    pub fn mapping<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = OverrideEntry>,
    {
        Self::Mapping {
            entries: entries.into_iter().collect(),
            anchor: Anchor::default(),
        }
    }

    /// Decodes an argument from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SynthError::Json`] when `input` is not a valid
    /// argument document.
    #[cfg(feature = "serde_json")]
    pub fn from_json(input: &str) -> Result<Self, crate::SynthError> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Validated lookup from type name to replacement expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: HashMap<String, OverrideExpr>,
}

impl OverrideTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` for `type_name`, replacing any previous entry.
    pub fn insert(&mut self, type_name: &str, value: OverrideExpr) {
        self.entries.insert(type_name.trim().to_owned(), value);
    }

    /// Replacement registered for `type_name`, matched on its trimmed form.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&OverrideExpr> {
        self.entries.get(type_name.trim())
    }

    /// Number of registered overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no overrides are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for OverrideTable
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key.as_ref(), OverrideExpr::new(value));
        }
        table
    }
}

/// Validates `argument` into an [`OverrideTable`].
///
/// Non-mapping arguments yield an empty table and an
/// `invalidOverrideArgument` error. Within a mapping, entries whose key is not
/// a string literal are skipped with an `invalidOverrideKey` error while the
/// remaining entries are still collected; repeated keys keep the last value.
///
/// # Examples
///
/// ```
/// use noop_synth::model::Anchor;
/// use noop_synth::overrides::{OverrideArgument, OverrideEntry, OverrideKey, build};
///
/// let argument = OverrideArgument::mapping([
///     OverrideEntry::new(OverrideKey::literal("Int", Anchor(1)), "42"),
///     OverrideEntry::new(OverrideKey::expression("typeName", Anchor(2)), "0"),
/// ]);
/// let (table, diagnostics) = build(&argument);
/// assert_eq!(table.get("Int").map(|value| value.as_str()), Some("42"));
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[must_use]
pub fn build(argument: &OverrideArgument) -> (OverrideTable, Vec<Diagnostic>) {
    match argument {
        OverrideArgument::Absent | OverrideArgument::NoOverrides { .. } => {
            (OverrideTable::new(), Vec::new())
        }
        OverrideArgument::Other { anchor, .. } => (
            OverrideTable::new(),
            vec![Diagnostic::invalid_override_argument(*anchor)],
        ),
        OverrideArgument::Mapping { entries, .. } => build_from_entries(entries),
    }
}

fn build_from_entries(entries: &[OverrideEntry]) -> (OverrideTable, Vec<Diagnostic>) {
    let mut table = OverrideTable::new();
    let mut diagnostics = Vec::new();
    for entry in entries {
        match &entry.key {
            OverrideKey::StringLiteral { value, .. } => {
                table.insert(value, entry.value.clone());
            }
            OverrideKey::Expression { source, anchor } => {
                tracing::warn!(key = %source, "ignoring override with non-literal key");
                diagnostics.push(Diagnostic::invalid_override_key(*anchor));
            }
        }
    }
    (table, diagnostics)
}
