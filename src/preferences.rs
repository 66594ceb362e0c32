//! # User Preferences
//!
//! What the caller wants from a build: a price band and a usage profile. The
//! core does not check that `min_price <= max_price`; that belongs to
//! whoever collects the input.
//!
//! ```rust
//! use pcgen::preferences::{Usage, UserPreferences};
//!
//! let usage: Usage = "video editing".parse().unwrap();
//! assert_eq!(usage, Usage::VideoEditing);
//! assert_eq!(usage.to_string(), "video-editing");
//!
//! let prefs = UserPreferences::new(usage.suggested_min_price(), 25_000.0, usage);
//! assert!(prefs.contains_price(20_000.0));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::GeneticError;

/// The intended use of a machine.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Usage {
    Office,
    Gaming,
    GraphicDesign,
    VideoEditing,
    WebBrowsing,
    Education,
    Architecture,
}

impl Usage {
    pub const ALL: [Usage; 7] = [
        Usage::Office,
        Usage::Gaming,
        Usage::GraphicDesign,
        Usage::VideoEditing,
        Usage::WebBrowsing,
        Usage::Education,
        Usage::Architecture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Usage::Office => "office",
            Usage::Gaming => "gaming",
            Usage::GraphicDesign => "graphic-design",
            Usage::VideoEditing => "video-editing",
            Usage::WebBrowsing => "web-browsing",
            Usage::Education => "education",
            Usage::Architecture => "architecture",
        }
    }

    /// A sensible lower price bound for the profile, used to prefill input forms.
    pub fn suggested_min_price(&self) -> f64 {
        match self {
            Usage::Office => 8_000.0,
            Usage::Gaming => 10_000.0,
            Usage::GraphicDesign => 15_000.0,
            Usage::VideoEditing => 18_000.0,
            Usage::WebBrowsing => 5_000.0,
            Usage::Education => 8_000.0,
            Usage::Architecture => 20_000.0,
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Usage {
    type Err = GeneticError;

    /// Accepts the kebab-case tag in any case; spaces and underscores may
    /// stand in for dashes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        Usage::ALL
            .iter()
            .copied()
            .find(|usage| usage.as_str() == normalized)
            .ok_or_else(|| GeneticError::UnknownUsage(s.to_string()))
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct UserPreferences {
    pub min_price: f64,
    pub max_price: f64,
    pub usage: Usage,
}

impl UserPreferences {
    pub fn new(min_price: f64, max_price: f64, usage: Usage) -> Self {
        Self {
            min_price,
            max_price,
            usage,
        }
    }

    /// Inclusive on both ends.
    pub fn contains_price(&self, price: f64) -> bool {
        self.min_price <= price && price <= self.max_price
    }
}
