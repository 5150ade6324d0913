use thiserror::Error;

/// Structural deviation detected while loading a descriptor.
///
/// Any malformed field is fatal at load time; the consuming pipeline is
/// expected to abort startup with this error. There is no partial-success
/// mode and nothing to retry.
#[derive(Debug, Error)]
#[error("malformed descriptor: invalid value for {key}: {reason} (value: {value})")]
pub struct MalformedConfig {
    pub key: String,
    pub value: String,
    pub reason: String,
}

impl MalformedConfig {
    pub(super) fn invalid<K, V, R>(key: K, value: V, reason: R) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(super) fn missing(key: &str) -> Self {
        Self::invalid(key, "(absent)", "required field is missing")
    }
}

impl From<config::ConfigError> for MalformedConfig {
    fn from(err: config::ConfigError) -> Self {
        MalformedConfig::invalid("descriptor", "(document)", err.to_string())
    }
}
