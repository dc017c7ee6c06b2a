//! Geometric utilities: random ball configurations for tests, benchmarks and demos.

pub mod ball_generation;

pub use ball_generation::{RandomBallGenerationError, generate_random_balls_seeded, split_balls};
