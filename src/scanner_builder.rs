use crate::{EntityKind, Scanner, ScannerConfig};

/// A builder for creating a scanner.
#[derive(Debug, Clone, Default)]
pub struct ScannerBuilder {
    config: ScannerConfig,
}

impl ScannerBuilder {
    /// Creates a new scanner builder that reports all kinds.
    pub fn new() -> Self {
        Self {
            config: ScannerConfig::default(),
        }
    }

    /// Replaces the configuration of the scanner builder.
    pub fn with_config(mut self, config: ScannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Stops reporting tags of the given kind.
    pub fn disable_kind(mut self, kind: EntityKind) -> Self {
        if self.config.is_enabled(kind) {
            self.config.disabled_kinds.push(kind);
        }
        self
    }

    /// Disables multiple kinds.
    pub fn disable_kinds(self, kinds: &[EntityKind]) -> Self {
        kinds
            .iter()
            .fold(self, |builder, kind| builder.disable_kind(*kind))
    }

    /// Reports tags of the given kind again.
    pub fn enable_kind(mut self, kind: EntityKind) -> Self {
        self.config.disabled_kinds.retain(|k| *k != kind);
        self
    }

    /// Builds the scanner from the scanner builder.
    pub fn build(self) -> Scanner {
        Scanner::new(self.config)
    }
}
