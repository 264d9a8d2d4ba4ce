//! Configuration types for overtime interpretation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every structure also
//! implements [`Default`] with the employer's fixed policy values, so the
//! engine behaves identically with or without a configuration directory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the employer whose policy is encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerMetadata {
    /// The employer name.
    pub name: String,
}

impl Default for EmployerMetadata {
    fn default() -> Self {
        Self {
            name: "Default Employer".to_string(),
        }
    }
}

/// Hourly overtime rates.
///
/// The weekday rate and the weekend/holiday rate are deliberately separate
/// values and must not be unified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRates {
    /// Flat hourly rate for weekend and public holiday work.
    pub weekend_hourly: Decimal,
    /// Hourly rate for weekday overtime.
    pub weekday_overtime: Decimal,
}

impl Default for OvertimeRates {
    fn default() -> Self {
        Self {
            weekend_hourly: Decimal::from(20),
            weekday_overtime: Decimal::from(13),
        }
    }
}

/// Meal allowance rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealAllowanceRules {
    /// The flat meal allowance amount.
    pub amount: Decimal,
    /// Minimum weekend/holiday shift length (hours) that earns the allowance.
    pub weekend_threshold_hours: Decimal,
}

impl Default for MealAllowanceRules {
    fn default() -> Self {
        Self {
            amount: Decimal::from(13),
            weekend_threshold_hours: Decimal::from(4),
        }
    }
}

/// Weekday overtime rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayRules {
    /// Length of the standard workday in minutes (8.5h).
    pub standard_day_minutes: u32,
    /// Mandatory break taken after the standard day before overtime starts.
    pub break_minutes: u32,
    /// Overtime shorter than this is forfeited entirely.
    pub minimum_claim_minutes: u32,
}

impl WeekdayRules {
    /// Minutes after clock-in at which overtime starts accruing.
    pub fn overtime_start_minutes(&self) -> u32 {
        self.standard_day_minutes.saturating_add(self.break_minutes)
    }
}

impl Default for WeekdayRules {
    fn default() -> Self {
        Self {
            standard_day_minutes: 510,
            break_minutes: 30,
            minimum_claim_minutes: 60,
        }
    }
}

/// Public holiday rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHolidayRules {
    /// Maximum hours converted to replacement leave.
    pub leave_cap_hours: Decimal,
}

impl Default for PublicHolidayRules {
    fn default() -> Self {
        Self {
            leave_cap_hours: Decimal::from(8),
        }
    }
}

/// Payslip period window and cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipPeriodRules {
    /// Day of the previous month on which the period starts.
    pub start_day: u32,
    /// Day of the selected month on which the period ends.
    pub end_day: u32,
    /// Maximum overtime payable for one period.
    pub pay_cap: Decimal,
}

impl Default for PayslipPeriodRules {
    fn default() -> Self {
        Self {
            start_day: 29,
            end_day: 28,
            pay_cap: Decimal::from(1200),
        }
    }
}

/// The complete overtime policy, loaded from `policy.yaml`.
///
/// # Example
///
/// ```
/// use overtime_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(policy.rates.weekend_hourly, Decimal::from(20));
/// assert_eq!(policy.rates.weekday_overtime, Decimal::from(13));
/// assert_eq!(policy.weekday.overtime_start_minutes(), 540);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Currency label used in breakdown strings (e.g., "RM").
    pub currency: String,
    /// Hourly rates.
    pub rates: OvertimeRates,
    /// Meal allowance rules.
    pub meal_allowance: MealAllowanceRules,
    /// Weekday overtime rules.
    pub weekday: WeekdayRules,
    /// Public holiday rules.
    pub public_holiday: PublicHolidayRules,
    /// Payslip period rules.
    pub payslip_period: PayslipPeriodRules,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            currency: "RM".to_string(),
            rates: OvertimeRates::default(),
            meal_allowance: MealAllowanceRules::default(),
            weekday: WeekdayRules::default(),
            public_holiday: PublicHolidayRules::default(),
            payslip_period: PayslipPeriodRules::default(),
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    employer: EmployerMetadata,
    policy: PolicyConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(employer: EmployerMetadata, policy: PolicyConfig) -> Self {
        Self { employer, policy }
    }

    /// Returns the employer metadata.
    pub fn employer(&self) -> &EmployerMetadata {
        &self.employer
    }

    /// Returns the overtime policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}
