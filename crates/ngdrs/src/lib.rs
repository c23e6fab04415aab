//! Case narrative synthesis for the National Gender Data Reporting System.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
