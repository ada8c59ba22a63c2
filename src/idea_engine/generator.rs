use chrono::Utc;
use rand::Rng;

use crate::idea_engine::{
    models::{GeneratedBundle, GenerationRequest, MAX_COUNT, MIN_COUNT},
    products,
    random::SeededRandom,
};

/// Upper bound (exclusive) for seeds picked when the caller gives none.
pub const RANDOM_SEED_LIMIT: u64 = 1_000_000;

/// Generate the full bundle for `topic`.
///
/// Draw order is digital ideas, then physical ideas, then prompts. Everything
/// except `generated_at` is a pure function of `(topic, seed, requested_count)`.
pub fn generate(topic: &str, seed: u64, requested_count: usize) -> GeneratedBundle {
    let mut rng = SeededRandom::new(seed);
    let count = requested_count.clamp(MIN_COUNT, MAX_COUNT);

    let digital_ideas = products::digital::generate(&mut rng, topic, count);
    let physical_ideas = products::physical::generate(&mut rng, topic, count);
    let prompts = products::prompts::generate(&mut rng, topic, count);

    tracing::debug!(
        topic,
        seed,
        requested_count,
        count,
        digital = digital_ideas.len(),
        physical = physical_ideas.len(),
        prompts = prompts.len(),
        "generated bundle"
    );

    GeneratedBundle {
        topic: topic.to_string(),
        seed,
        count,
        digital_ideas,
        physical_ideas,
        prompts,
        generated_at: Utc::now(),
    }
}

/// Resolve the request's seed (random when absent) and generate.
pub fn generate_bundle(request: GenerationRequest) -> GeneratedBundle {
    let seed = request
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen_range(0..RANDOM_SEED_LIMIT));
    generate(&request.topic, seed, request.count)
}
