//! Demo driver for the fruit stock: configuration plus the fixed script.

pub mod config;
pub mod script;

pub use config::DemoConfig;
