mod cell;
mod coord;
mod engine;
mod rules;
mod patterns;
pub mod soup;

pub use cell::Cell;
pub use coord::{Coord, Region};
pub use engine::{Accounting, Delta, LifeEngine};
pub use rules::{Rule, ConwayRule, HighLifeRule, SeedsRule, DayAndNightRule, all_rules, default_rule};
pub use patterns::{Pattern, presets};
