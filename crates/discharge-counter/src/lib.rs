//! Korean conscript service-time progression and the badge built from it.

pub mod badge;
pub mod clock;
pub mod config;
pub mod error;
pub mod resolver;
pub mod service;
pub mod telemetry;
