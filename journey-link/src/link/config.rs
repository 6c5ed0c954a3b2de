//! Link builder configuration.

use std::fmt;
use std::str::FromStr;

use super::schema::ParamSchema;

/// Default host of the journey planner.
pub const DEFAULT_HOST: &str = "www.sbb.ch";

/// Which flavour of the form is being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVariant {
    /// Stations, date, time and moment; encoded URL only
    Minimal,
    /// All trip options; encoded and decoded URLs
    #[default]
    Advanced,
}

impl FormVariant {
    /// The query parameters this variant emits.
    pub fn schema(&self) -> ParamSchema {
        match self {
            Self::Minimal => ParamSchema::minimal(),
            Self::Advanced => ParamSchema::advanced(),
        }
    }

    /// Whether the decoded debug URL is produced.
    pub fn includes_decoded(&self) -> bool {
        matches!(self, Self::Advanced)
    }
}

/// Error returned when parsing an unknown variant name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form variant: {0} (expected \"minimal\" or \"advanced\")")]
pub struct InvalidVariant(String);

impl FromStr for FormVariant {
    type Err = InvalidVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "advanced" => Ok(Self::Advanced),
            _ => Err(InvalidVariant(s.to_string())),
        }
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minimal => f.write_str("minimal"),
            Self::Advanced => f.write_str("advanced"),
        }
    }
}

/// Configuration for the link builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    /// Host of the journey planner, without scheme
    pub host: String,
    pub variant: FormVariant,
}

impl LinkConfig {
    /// Set a custom host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the form variant.
    pub fn with_variant(mut self, variant: FormVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            variant: FormVariant::default(),
        }
    }
}
