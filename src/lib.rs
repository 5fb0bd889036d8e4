// Domain layer - sparse engine, rules, patterns
pub mod domain;

// Application layer - session, pacing and view state
pub mod application;

// Settings
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Accounting, Cell, Coord, Delta, LifeEngine, Pattern, Region, Rule, presets};
pub use application::{Camera, Command, Scheduler, Session};
pub use config::{ConfigError, LifeConfig};
