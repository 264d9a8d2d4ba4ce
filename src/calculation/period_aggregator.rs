//! Payslip period aggregation.
//!
//! A payslip period for month `M` runs from the 29th of the month before `M`
//! through the 28th of `M`, both inclusive. Entries are filtered by date into
//! the window and their results summed; the payable total is capped.

use std::cmp::min;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::{PayslipPeriodRules, PolicyConfig};
use crate::models::{PayslipMonth, PayslipPeriod, TimeEntry};

/// Computes the inclusive date window of the payslip period for `month`.
///
/// A start day that does not exist in the previous month (the 29th after a
/// common-year February is the only case with the default rules) moves the
/// start to the first day of `month`. An end day past the end of `month` is
/// clamped to its last day.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::payslip_window;
/// use overtime_engine::config::PayslipPeriodRules;
/// use overtime_engine::models::PayslipMonth;
///
/// let (start, end) = payslip_window("2025-01".parse().unwrap(), &PayslipPeriodRules::default());
/// assert_eq!(start.to_string(), "2024-12-29");
/// assert_eq!(end.to_string(), "2025-01-28");
/// ```
pub fn payslip_window(month: PayslipMonth, rules: &PayslipPeriodRules) -> (NaiveDate, NaiveDate) {
    let start = month
        .previous()
        .day(rules.start_day)
        .unwrap_or_else(|| month.first_day());
    let end = month.day(rules.end_day).unwrap_or_else(|| month.last_day());
    (start, end)
}

/// Summarizes classified entries over the payslip period for `month`.
///
/// Entries without a result count towards `count` but contribute nothing to
/// the totals. Never fails: empty input yields a zeroed summary, and sums
/// saturate at [`Decimal::MAX`].
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{classify_entry, summarize};
/// use overtime_engine::config::PolicyConfig;
/// use overtime_engine::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// let entry = TimeEntry::new(
///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     "08:00".parse().ok(),
///     "18:00".parse().ok(),
/// );
/// let entries = vec![classify_entry(&entry, &policy)];
///
/// let period = summarize(&entries, "2025-01".parse().unwrap(), &policy);
/// assert_eq!(period.count, 1);
/// assert_eq!(period.total_pay, Decimal::from(26));
/// ```
pub fn summarize(entries: &[TimeEntry], month: PayslipMonth, policy: &PolicyConfig) -> PayslipPeriod {
    let rules = &policy.payslip_period;
    let (start_date, end_date) = payslip_window(month, rules);

    let in_range: Vec<&TimeEntry> = entries
        .iter()
        .filter(|entry| entry.date >= start_date && entry.date <= end_date)
        .collect();

    let (total_hours, total_pay) = in_range
        .iter()
        .filter_map(|entry| entry.result.as_ref())
        .fold((Decimal::ZERO, Decimal::ZERO), |(hours, pay), result| {
            (hours.saturating_add(result.hours), pay.saturating_add(result.total_pay))
        });

    PayslipPeriod {
        month,
        start_date,
        end_date,
        total_hours,
        total_pay,
        capped_pay: min(total_pay, rules.pay_cap),
        count: in_range.len(),
    }
}
