mod engine;

pub use engine::GenerationEngine;
