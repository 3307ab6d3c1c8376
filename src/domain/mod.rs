mod age_grid;
mod cell;
mod error;
mod grid;
mod patterns;
mod rules;
mod stats;

pub use age_grid::AgeGrid;
pub use cell::Cell;
pub use error::EngineError;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rules::{ConwayRule, DayAndNightRule, HighLifeRule, Rule, SeedsRule, all_rules, default_rule};
pub use stats::Statistics;
