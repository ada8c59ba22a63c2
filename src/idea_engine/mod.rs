//! Core idea engine: seeded randomness, catalogs, scoring, and generation.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: scores, ideas, request and bundle structs |
//! | `random`     | 32-bit LCG with uniform floats, choice and Fisher-Yates shuffle |
//! | `catalogs`   | Static template lists and per-keyword score baselines |
//! | `classifier` | First-match-wins mapping from template text to a type keyword |
//! | `helpers`    | Shared builders: topic fill, score jitter, audience pick |
//! | `generator`  | Entry points `generate()` and `generate_bundle()` |
//! | `products`   | Digital, physical and prompt generators |

pub mod catalogs;
pub mod classifier;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod products;
pub mod random;

pub use generator::{generate, generate_bundle};
pub use models::{
    Category, GeneratedBundle, GenerationRequest, Idea, Scores, TypeKeyword,
};
pub use random::SeededRandom;
