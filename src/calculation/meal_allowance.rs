//! Meal allowance calculation.
//!
//! Weekend and public holiday shifts earn the allowance once the whole shift
//! reaches the hour threshold. Weekday overtime always earns it, because the
//! minimum-claim rule has already been met when weekday overtime is payable.

use rust_decimal::Decimal;

use crate::config::MealAllowanceRules;

use super::shift_duration::minutes_to_hours;

/// Meal allowance for a weekend or public holiday shift of `elapsed_minutes`.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::weekend_meal_allowance;
/// use overtime_engine::config::MealAllowanceRules;
/// use rust_decimal::Decimal;
///
/// let rules = MealAllowanceRules::default();
/// assert_eq!(weekend_meal_allowance(240, &rules), Decimal::from(13));
/// assert_eq!(weekend_meal_allowance(239, &rules), Decimal::ZERO);
/// ```
pub fn weekend_meal_allowance(elapsed_minutes: u32, rules: &MealAllowanceRules) -> Decimal {
    if minutes_to_hours(elapsed_minutes) >= rules.weekend_threshold_hours {
        rules.amount
    } else {
        Decimal::ZERO
    }
}

/// Meal allowance for payable weekday overtime.
pub fn weekday_meal_allowance(rules: &MealAllowanceRules) -> Decimal {
    rules.amount
}
