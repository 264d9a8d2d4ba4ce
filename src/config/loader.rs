//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the employer's
//! overtime policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::MINUTES_PER_DAY;

use super::types::{EmployerMetadata, EngineConfig, PolicyConfig};

/// Loads and provides access to the overtime policy configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── employer.yaml   # Employer name
/// └── policy.yaml     # Currency, rates, allowances, thresholds and caps
/// ```
///
/// # Example
///
/// ```no_run
/// use overtime_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Pay cap: {}", loader.policy().payslip_period.pay_cap);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The payslip period days fall outside 1..=31
    /// - A weekday minute threshold exceeds one day
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let employer_path = path.join("employer.yaml");
        let employer = Self::load_yaml::<EmployerMetadata>(&employer_path)?;

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PolicyConfig>(&policy_path)?;
        Self::validate(&policy, &policy_path)?;

        debug!(path = %path.display(), employer = %employer.name, "Loaded overtime policy");

        Ok(Self {
            config: EngineConfig::new(employer, policy),
        })
    }

    /// Creates a loader around an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(policy: &PolicyConfig, path: &Path) -> EngineResult<()> {
        let period = &policy.payslip_period;
        for (field, day) in [("start_day", period.start_day), ("end_day", period.end_day)] {
            if !(1..=31).contains(&day) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("payslip_period.{} must be between 1 and 31, got {}", field, day),
                });
            }
        }

        let weekday = &policy.weekday;
        for (field, minutes) in [
            ("standard_day_minutes", weekday.standard_day_minutes),
            ("break_minutes", weekday.break_minutes),
            ("minimum_claim_minutes", weekday.minimum_claim_minutes),
        ] {
            if minutes > MINUTES_PER_DAY {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!(
                        "weekday.{} must be at most {} minutes, got {}",
                        field, MINUTES_PER_DAY, minutes
                    ),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the employer metadata.
    pub fn employer(&self) -> &EmployerMetadata {
        self.config.employer()
    }

    /// Returns the overtime policy.
    pub fn policy(&self) -> &PolicyConfig {
        self.config.policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn write_config_dir(name: &str, policy_yaml: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("overtime-engine-{}-{}", name, uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("employer.yaml"), "name: Test Sdn Bhd\n").unwrap();
        fs::write(dir.join("policy.yaml"), policy_yaml).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.employer().name, "Default Employer");
        assert_eq!(loader.policy(), &PolicyConfig::default());
    }

    #[test]
    fn test_default_loader_uses_builtin_policy() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.policy().rates.weekend_hourly, Decimal::from(20));
        assert_eq!(loader.policy().currency, "RM");
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("employer.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = write_config_dir("invalid", "rates: [not, a, map");

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_out_of_range_period_day() {
        let yaml = r#"
currency: RM
rates: { weekend_hourly: 20, weekday_overtime: 13 }
meal_allowance: { amount: 13, weekend_threshold_hours: 4 }
weekday: { standard_day_minutes: 510, break_minutes: 30, minimum_claim_minutes: 60 }
public_holiday: { leave_cap_hours: 8 }
payslip_period: { start_day: 32, end_day: 28, pay_cap: 1200 }
"#;
        let dir = write_config_dir("bad-day", yaml);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("start_day"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_weekday_minutes_beyond_one_day() {
        let yaml = r#"
currency: RM
rates: { weekend_hourly: 20, weekday_overtime: 13 }
meal_allowance: { amount: 13, weekend_threshold_hours: 4 }
weekday: { standard_day_minutes: 4294967295, break_minutes: 30, minimum_claim_minutes: 60 }
public_holiday: { leave_cap_hours: 8 }
payslip_period: { start_day: 29, end_day: 28, pay_cap: 1200 }
"#;
        let dir = write_config_dir("huge-day", yaml);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("standard_day_minutes"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_custom_rates() {
        let yaml = r#"
currency: RM
rates: { weekend_hourly: "22.50", weekday_overtime: 15 }
meal_allowance: { amount: 10, weekend_threshold_hours: 4 }
weekday: { standard_day_minutes: 480, break_minutes: 30, minimum_claim_minutes: 30 }
public_holiday: { leave_cap_hours: 8 }
payslip_period: { start_day: 26, end_day: 25, pay_cap: 1500 }
"#;
        let dir = write_config_dir("custom", yaml);
        let loader = ConfigLoader::load(&dir).unwrap();

        assert_eq!(loader.policy().rates.weekend_hourly, Decimal::new(2250, 2));
        assert_eq!(loader.policy().weekday.overtime_start_minutes(), 510);
        assert_eq!(loader.policy().payslip_period.start_day, 26);
        assert_eq!(loader.employer().name, "Test Sdn Bhd");
    }
}
