//! # passive_gen
//!
//! A fully offline, deterministic generator of product ideas and AI prompts
//! for any topic.
//!
//! For a topic string the library produces scored digital-product ideas,
//! physical / print-on-demand ideas, and ready-to-paste AI prompts. Every idea
//! carries four 1-10 ratings (ease, demand, differentiation, time-to-ship) and
//! short notes on why it sells, what it includes, and who it is for.
//!
//! ## How it works
//!
//! 1. Build a [`GenerationRequest`] with a topic, an optional seed and a count,
//!    or call [`generate`] with all three directly.
//! 2. The engine seeds a 32-bit LCG, shuffles the built-in template catalogs,
//!    fills in the topic, and jitters a per-type score baseline.
//! 3. The returned [`GeneratedBundle`] can be handed to
//!    [`write_output_files`] to get markdown documents and a JSON export.
//!
//! ## Key features
//!
//! - **Deterministic**: the same `(topic, seed, count)` always yields the same
//!   ideas, scores and prompts. Only the timestamp changes.
//! - **Clamped counts**: any requested count is clamped to `1..=100`; lists
//!   are further capped by catalog size (30 digital, 30 physical, 25 prompts).
//! - **No validation of the topic**: it is substituted verbatim.
//!
//! ## Quick start
//!
//! ```rust
//! use passive_gen::{generate, generate_bundle, GenerationRequest};
//!
//! // Fixed seed, reproducible:
//! let bundle = generate("dog training", 42, 5);
//! for idea in &bundle.digital_ideas {
//!     println!("{} (ease {}/10)", idea.title, idea.scores.ease);
//! }
//!
//! // Random seed, recorded in the bundle:
//! let bundle = generate_bundle(GenerationRequest::new("woodworking").with_count(3));
//! println!("seed used: {}", bundle.seed);
//! ```

pub mod idea_engine;
pub mod writer;

// Convenience re-exports so callers can use `passive_gen::generate` directly
// without reaching into `idea_engine::`.
pub use idea_engine::{
    generate, generate_bundle, Category, GeneratedBundle, GenerationRequest, Idea, Scores,
    SeededRandom, TypeKeyword,
};
pub use writer::{export_templates, write_output_files, WriteError};
