//! Layered options for synthesis and rendering.
//!
//! Options are gathered with `figment` in increasing precedence: built-in
//! defaults, an optional TOML file, then `NOOP_SYNTH_*` environment variables.

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::SynthError;
use crate::resolve::DEFAULT_PLACEHOLDER_URL;

/// Prefix recognised for environment overrides.
pub const ENV_PREFIX: &str = "NOOP_SYNTH_";

/// Tunable behaviour of the synthesizer and the reference renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisOptions {
    /// Prepended to the interface name to name the generated type.
    pub type_prefix: String,
    /// Literal used to construct `URL` placeholders.
    pub placeholder_url: String,
    /// Spaces per indentation level in rendered source.
    pub indent_width: usize,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            type_prefix: "Noop".to_owned(),
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_owned(),
            indent_width: 4,
        }
    }
}

impl SynthesisOptions {
    /// Loads options from defaults and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Config`] when an environment value cannot be
    /// decoded.
    pub fn load() -> Result<Self, SynthError> {
        Self::extract(Self::figment())
    }

    /// Loads options from defaults, the TOML file at `path` (when it exists)
    /// and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Config`] when the file is malformed or a value
    /// cannot be decoded.
    pub fn load_from(path: &Utf8Path) -> Result<Self, SynthError> {
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_std_path()))
            .merge(Env::prefixed(ENV_PREFIX));
        Self::extract(figment)
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    fn extract(figment: Figment) -> Result<Self, SynthError> {
        let options: Self = figment.extract()?;
        tracing::debug!(?options, "loaded synthesis options");
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::SynthesisOptions;
    use crate::SynthError;
    use anyhow::{Result, ensure};
    use camino::Utf8Path;
    use rstest::rstest;
    use test_helpers::figment::with_jail;

    #[rstest]
    fn defaults_apply_without_sources() -> Result<()> {
        let options = with_jail(|_| Ok(SynthesisOptions::load()))??;
        ensure!(options == SynthesisOptions::default());
        ensure!(options.type_prefix == "Noop");
        ensure!(options.placeholder_url == "https://apple.com");
        Ok(())
    }

    #[rstest]
    fn environment_overrides_file() -> Result<()> {
        let options = with_jail(|jail| {
            jail.create_file("noop.toml", "type_prefix = \"Fake\"\nindent_width = 2\n")?;
            jail.set_env("NOOP_SYNTH_TYPE_PREFIX", "Stub");
            Ok(SynthesisOptions::load_from(Utf8Path::new("noop.toml")))
        })??;
        ensure!(options.type_prefix == "Stub", "env wins: {options:?}");
        ensure!(options.indent_width == 2, "file applies: {options:?}");
        Ok(())
    }

    #[rstest]
    fn missing_file_falls_back_to_defaults() -> Result<()> {
        let options =
            with_jail(|_| Ok(SynthesisOptions::load_from(Utf8Path::new("absent.toml"))))??;
        ensure!(options == SynthesisOptions::default());
        Ok(())
    }

    #[rstest]
    fn malformed_value_is_a_config_error() -> Result<()> {
        let result = with_jail(|jail| {
            jail.set_env("NOOP_SYNTH_INDENT_WIDTH", "wide");
            Ok(SynthesisOptions::load())
        })?;
        ensure!(
            matches!(result, Err(SynthError::Config(_))),
            "expected config error, got {result:?}"
        );
        Ok(())
    }
}
