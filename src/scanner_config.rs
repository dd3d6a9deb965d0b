#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::EntityKind;
#[cfg(feature = "serde")]
use crate::Result;

/// The configuration of a scanner.
///
/// All kinds are reported by default. Definitions of a disabled kind are not reported, but they
/// still form the scope of the definitions nested in them.
///
/// With the `serde` feature the configuration can be read from JSON, e.g.
/// `{ "disabled_kinds": ["describe", "context"] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerConfig {
    /// The kinds that are not reported.
    pub disabled_kinds: Vec<EntityKind>,
}

impl ScannerConfig {
    /// Creates a configuration that reports all kinds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether tags of the given kind are reported.
    #[inline]
    pub fn is_enabled(&self, kind: EntityKind) -> bool {
        !self.disabled_kinds.contains(&kind)
    }

    /// Reads a configuration from a JSON string.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration from a JSON reader.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_all_kinds() {
        let config = ScannerConfig::new();
        assert!(EntityKind::ALL.iter().all(|kind| config.is_enabled(*kind)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let config =
            ScannerConfig::from_json_str(r#"{ "disabled_kinds": ["describe", "singleton_method"] }"#)
                .unwrap();
        assert!(!config.is_enabled(EntityKind::Describe));
        assert!(!config.is_enabled(EntityKind::SingletonMethod));
        assert!(config.is_enabled(EntityKind::Context));

        let config = ScannerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ScannerConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_invalid_json() {
        let err = ScannerConfig::from_json_str(r#"{ "disabled_kinds": ["variable"] }"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid scanner configuration"));
    }
}
