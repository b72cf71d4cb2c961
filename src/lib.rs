//! Compares a baseline and an optimized Lighthouse report and prints the
//! differences as plain text.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
