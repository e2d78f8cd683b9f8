//! Matching configuration.
//!
//! Message texts and leniency policy for the compatibility engine. The
//! defaults reproduce the academy's Spanish UI; hosts may override them
//! from a TOML table:
//!
//! ```
//! use tutor_schedule::config::{IncompleteDayPolicy, MatchConfig};
//!
//! let config = MatchConfig::from_toml_str(r#"
//!     separator = " | "
//!     incomplete_course_days = "flag"
//! "#).unwrap();
//! assert_eq!(config.separator, " | ");
//! assert_eq!(config.incomplete_course_days, IncompleteDayPolicy::Flag);
//! assert_eq!(config.missing_label, "sin horario");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What to do with a course day whose start or end is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncompleteDayPolicy {
    /// The day imposes no constraint.
    #[default]
    Skip,
    /// The day is reported as an issue for every tutor.
    Flag,
}

/// Compatibility engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Summary shown when a tutor covers every course day.
    pub compatible_message: String,
    /// Issue text for a day the tutor has no window for.
    pub missing_label: String,
    /// Issue text for an incomplete course day (only with `Flag`).
    pub incomplete_label: String,
    /// Word introducing the tutor's window in a conflict.
    pub tutor_label: String,
    /// Joins issue texts in the summary.
    pub separator: String,
    /// Handling of half-filled course days.
    pub incomplete_course_days: IncompleteDayPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            compatible_message: "Disponible para todos los días y horarios del curso".to_string(),
            missing_label: "sin horario".to_string(),
            incomplete_label: "horario incompleto".to_string(),
            tutor_label: "tutor".to_string(),
            separator: " · ".to_string(),
            incomplete_course_days: IncompleteDayPolicy::Skip,
        }
    }
}

impl MatchConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML table. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the summary separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the affirmative summary.
    pub fn with_compatible_message(mut self, message: impl Into<String>) -> Self {
        self.compatible_message = message.into();
        self
    }

    /// Sets the incomplete-course-day policy.
    pub fn with_incomplete_course_days(mut self, policy: IncompleteDayPolicy) -> Self {
        self.incomplete_course_days = policy;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.missing_label.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: "missing_label must not be empty".to_string(),
            });
        }
        if self.compatible_message.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: "compatible_message must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = MatchConfig::default();
        assert_eq!(c.missing_label, "sin horario");
        assert_eq!(c.separator, " · ");
        assert_eq!(c.incomplete_course_days, IncompleteDayPolicy::Skip);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(MatchConfig::from_toml_str("").unwrap(), MatchConfig::default());
    }

    #[test]
    fn test_toml_rejects_bad_values() {
        assert!(matches!(
            MatchConfig::from_toml_str("incomplete_course_days = \"sometimes\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            MatchConfig::from_toml_str("missing_label = \"  \""),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_builder() {
        let c = MatchConfig::new()
            .with_separator("; ")
            .with_compatible_message("OK")
            .with_incomplete_course_days(IncompleteDayPolicy::Flag);
        assert_eq!(c.separator, "; ");
        assert_eq!(c.compatible_message, "OK");
        assert_eq!(c.incomplete_course_days, IncompleteDayPolicy::Flag);
    }
}
