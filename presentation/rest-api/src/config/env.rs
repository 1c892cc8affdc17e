use std::str::FromStr;

use anyhow::{Context, anyhow};

/// Reads a variable that must be present and non-blank.
pub fn required(var: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<String> {
    var(key)
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("{} environment variable must be set", key))
}

/// Parses an optional variable, falling back to `default` when unset.
pub fn parsed_or<T>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match var(key).filter(|value| !value.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{} has invalid value '{}': {}", key, raw, e)),
        None => Ok(default),
    }
}

/// Lookup backed by the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
