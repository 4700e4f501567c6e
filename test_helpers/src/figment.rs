//! Running option-loading code inside a `figment::Jail`.
//!
//! The jail gives each test a scratch working directory and restores the
//! process environment afterwards, so configuration files and
//! `NOOP_SYNTH_*` variables never leak between tests.

use anyhow::{Context, Result, anyhow};

/// Runs `f` inside a [`figment::Jail`] and hands back whatever it returned.
///
/// Return the value under test from the closure and assert on it outside, so
/// assertions can use `anyhow` freely. Errors that are part of the behaviour
/// under test can be returned as the value itself, e.g. `Ok(load())`.
///
/// # Errors
///
/// Returns an error when the jail cannot be set up or the closure fails.
///
/// # Examples
///
/// ```
/// use noop_synth_test_helpers::figment::with_jail;
///
/// let prefix = with_jail(|jail| {
///     jail.set_env("NOOP_SYNTH_DOC_EXAMPLE", "Stub");
///     Ok(std::env::var("NOOP_SYNTH_DOC_EXAMPLE").ok())
/// })?;
/// assert_eq!(prefix.as_deref(), Some("Stub"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!("figment jail failed: {err}"))?;
    output.context("jail closure returned no value")
}
