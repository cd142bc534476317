// ============================================================================
// Converter Configuration
// Scale table and input normalisation settings for a converter
// ============================================================================

use crate::english::{max_exponent, SCALES};
use crate::numeral::DEFAULT_GROUPING_SEPARATOR;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`NumberConverter`](super::NumberConverter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConverterConfig {
    /// Scale words by base-1000 chunk position; entry 0 is the empty units
    /// scale. The length sets the magnitude ceiling.
    pub scales: Vec<String>,

    /// Readability separator stripped from input before parsing
    /// None means separators are rejected like any other non-digit
    pub grouping_separator: Option<char>,
}

impl ConverterConfig {
    /// Create the default English configuration
    pub fn new() -> Self {
        Self {
            scales: SCALES.iter().map(|s| (*s).to_owned()).collect(),
            grouping_separator: Some(DEFAULT_GROUPING_SEPARATOR),
        }
    }

    /// Builder method: Replace the scale table
    pub fn with_scales<I, S>(mut self, scales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scales = scales.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: Append one scale word above the current highest
    pub fn with_additional_scale(mut self, scale: impl Into<String>) -> Self {
        self.scales.push(scale.into());
        self
    }

    /// Builder method: Set the grouping separator
    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = Some(separator);
        self
    }

    /// Builder method: Disable separator stripping
    pub fn without_grouping_separator(mut self) -> Self {
        self.grouping_separator = None;
        self
    }

    /// Exponent of the smallest power of ten this configuration cannot name.
    pub fn max_exponent(&self) -> usize {
        max_exponent(self.scales.len())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        // Units scale must come first and be unnamed
        match self.scales.first() {
            None => return Err("Scale table cannot be empty".to_string()),
            Some(units) if !units.is_empty() => {
                return Err("First scale entry must be empty".to_string());
            }
            Some(_) => {}
        }

        for (position, scale) in self.scales.iter().enumerate().skip(1) {
            if scale.is_empty() {
                return Err(format!("Scale at position {} cannot be empty", position));
            }
            if !scale.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(format!(
                    "Scale '{}' must be a single lower-case word",
                    scale
                ));
            }
        }

        if let Some(sep) = self.grouping_separator {
            if sep.is_ascii_digit() || sep == '.' || sep == '-' {
                return Err(format!("Grouping separator '{}' is reserved", sep));
            }
        }

        Ok(())
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
