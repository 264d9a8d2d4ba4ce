//! Overtime Engine
//!
//! This crate classifies a worker's daily clock-in/clock-out times into overtime
//! pay categories and aggregates classified days into capped payslip-period totals.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod store;
