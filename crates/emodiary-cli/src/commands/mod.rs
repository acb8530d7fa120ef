pub mod analyze;
pub mod cbt;
pub mod common;
pub mod config;
pub mod quiz;
