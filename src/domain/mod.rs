//! Core domain types and logic.

pub mod series;
pub mod returns;
pub mod signal;
pub mod position;
pub mod engine;
pub mod stats;
pub mod config;
pub mod config_validation;
pub mod error;
