//! Per-category generators.
//!
//! Each module turns a slice of its catalog into output for one section of the
//! bundle. The scored categories share this signature:
//!
//! ```ignore
//! pub fn generate(rng: &mut SeededRandom, topic: &str, count: usize) -> Vec<Idea>
//! ```
//!
//! `generator.rs` calls them in a fixed order: digital, physical, prompts.

/// Downloadable products: courses, templates, guides, dashboards.
pub mod digital;
/// Physical and print-on-demand products.
pub mod physical;
/// Unscored AI prompts.
pub mod prompts;
