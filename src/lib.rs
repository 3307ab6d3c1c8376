// Domain layer - Core simulation types
pub mod domain;

// Application layer - The generation engine coordinating domain state
pub mod application;

// Re-exports for convenience
pub use application::GenerationEngine;
pub use domain::{
    AgeGrid, Cell, ConwayRule, EngineError, Grid, Pattern, Rule, Statistics, all_rules,
    default_rule, presets,
};
