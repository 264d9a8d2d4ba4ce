//! Configuration loading and management for the Overtime Engine.
//!
//! This module loads the employer's overtime policy (rates, allowances,
//! thresholds and the payslip period cap) from YAML files, and supplies the
//! fixed default policy when no configuration directory is given.
//!
//! # Example
//!
//! ```no_run
//! use overtime_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy for: {}", config.employer().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EmployerMetadata, EngineConfig, MealAllowanceRules, OvertimeRates, PayslipPeriodRules,
    PolicyConfig, PublicHolidayRules, WeekdayRules,
};
