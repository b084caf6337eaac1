//! Window identifiers as they arrive from configuration or bindings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Unknown window type: {0}")]
    UnknownKind(String),
}

/// Window shape identifier without parameters
///
/// Numeric ids follow the order below, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowKind {
    Bartlett,
    BartlettHann,
    Blackman,
    Cosine,
    Gauss,
    Hamming,
    Hann,
    Lanczos,
    Rectangular,
    Triangular,
}

impl WindowKind {
    /// All kinds in id order
    pub const ALL: [WindowKind; 10] = [
        WindowKind::Bartlett,
        WindowKind::BartlettHann,
        WindowKind::Blackman,
        WindowKind::Cosine,
        WindowKind::Gauss,
        WindowKind::Hamming,
        WindowKind::Hann,
        WindowKind::Lanczos,
        WindowKind::Rectangular,
        WindowKind::Triangular,
    ];

    /// Numeric identifier (1..=10)
    pub fn id(&self) -> u8 {
        match self {
            WindowKind::Bartlett => 1,
            WindowKind::BartlettHann => 2,
            WindowKind::Blackman => 3,
            WindowKind::Cosine => 4,
            WindowKind::Gauss => 5,
            WindowKind::Hamming => 6,
            WindowKind::Hann => 7,
            WindowKind::Lanczos => 8,
            WindowKind::Rectangular => 9,
            WindowKind::Triangular => 10,
        }
    }

    /// Canonical lower-case name
    pub fn name(&self) -> &'static str {
        match self {
            WindowKind::Bartlett => "bartlett",
            WindowKind::BartlettHann => "bartlett-hann",
            WindowKind::Blackman => "blackman",
            WindowKind::Cosine => "cosine",
            WindowKind::Gauss => "gauss",
            WindowKind::Hamming => "hamming",
            WindowKind::Hann => "hann",
            WindowKind::Lanczos => "lanczos",
            WindowKind::Rectangular => "rectangular",
            WindowKind::Triangular => "triangular",
        }
    }

    /// Default shape parameter, for the kinds that take one
    pub fn default_alpha(&self) -> Option<f64> {
        match self {
            WindowKind::Blackman => Some(0.16),
            WindowKind::Gauss => Some(0.25),
            _ => None,
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for WindowKind {
    type Error = WindowError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        WindowKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == id)
            .ok_or_else(|| WindowError::UnknownKind(id.to_string()))
    }
}

impl FromStr for WindowKind {
    type Err = WindowError;

    /// Accepts canonical names (case-insensitive, `_` or `-` separators)
    /// and numeric ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u8>() {
            return WindowKind::try_from(id);
        }

        let normalized = trimmed.to_ascii_lowercase().replace('_', "-");
        let normalized = match normalized.as_str() {
            "bartletthann" => "bartlett-hann",
            "hanning" => "hann",
            "rect" | "boxcar" => "rectangular",
            "gaussian" => "gauss",
            other => other,
        };

        WindowKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| WindowError::UnknownKind(s.to_string()))
    }
}
