//! Shared builder functions used by the product and prompt generators.
//!
//! Every category does the same groundwork: shuffle a catalog, slice it, fill
//! in the topic, jitter a score baseline and pick an audience line. These
//! helpers keep that work in one place so the category files only hold their
//! own wording.
//!
//! ## RNG ordering
//!
//! `pick_templates()` consumes `len - 1` draws for the shuffle and
//! `jittered_scores()` consumes exactly four, in the order ease, demand,
//! differentiation, time-to-ship. `audience()` consumes none. Changing any of
//! this breaks reproducibility for existing seeds.

use crate::idea_engine::{
    catalogs::{self, TOPIC_PLACEHOLDER},
    models::{Idea, Scores, TypeKeyword},
    random::SeededRandom,
};

/// Replace every placeholder with `topic`, verbatim and in a single pass.
pub fn fill_topic(template: &str, topic: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, topic)
}

/// Shuffle the whole catalog, then keep the first `count` entries.
///
/// Returns fewer than `count` when the catalog is smaller.
pub fn pick_templates(
    rng: &mut SeededRandom,
    catalog: &[&'static str],
    count: usize,
) -> Vec<&'static str> {
    let mut shuffled = rng.shuffle(catalog);
    shuffled.truncate(count);
    shuffled
}

fn jitter(rng: &mut SeededRandom, base: u8) -> u8 {
    let raw = f64::from(base) + rng.next_f64() * 2.0 - 1.0;
    raw.clamp(1.0, 10.0).round() as u8
}

/// Baseline for `keyword` with up to ±1 of noise per dimension.
pub fn jittered_scores(rng: &mut SeededRandom, keyword: TypeKeyword) -> Scores {
    let base = catalogs::baseline(keyword);
    let ease = jitter(rng, base.ease);
    let demand = jitter(rng, base.demand);
    let differentiation = jitter(rng, base.differentiation);
    let time_to_ship = jitter(rng, base.time_to_ship);
    Scores { ease, demand, differentiation, time_to_ship }
}

/// Pick the audience line from the title's UTF-16 code-unit sum.
///
/// Independent of the RNG: the same title maps to the same audience for
/// every seed.
pub fn audience(title: &str, topic: &str) -> String {
    let hash: u64 = title.encode_utf16().map(u64::from).sum();
    match hash % 6 {
        0 => format!("{topic} professionals looking to streamline their workflow"),
        1 => format!("Beginners in {topic} who need structured guidance"),
        2 => format!("Teams wanting to standardize {topic} processes"),
        3 => format!("Entrepreneurs scaling their {topic} business"),
        4 => format!("People seeking to transition into {topic}"),
        _ => format!("Existing {topic} practitioners wanting to offer more value"),
    }
}

/// Assemble one [`Idea`]. Scores are drawn here, before any text is built.
pub fn idea(
    rng: &mut SeededRandom,
    template: &str,
    topic: &str,
    keyword: TypeKeyword,
    why_it_will_sell: impl FnOnce(TypeKeyword) -> String,
    what_is_included: impl FnOnce(TypeKeyword) -> String,
) -> Idea {
    let title = fill_topic(template, topic);
    let scores = jittered_scores(rng, keyword);
    let who_is_it_for = audience(&title, topic);
    Idea {
        why_it_will_sell: why_it_will_sell(keyword),
        what_is_included: what_is_included(keyword),
        who_is_it_for,
        title,
        scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_topic_replaces_every_occurrence_verbatim() {
        assert_eq!(fill_topic("{topic} and {topic}", "a$&b"), "a$&b and a$&b");
        assert_eq!(fill_topic("no placeholder", "x"), "no placeholder");
        assert_eq!(fill_topic("{topic} kit", ""), " kit");
    }

    #[test]
    fn fill_topic_does_not_reexpand() {
        assert_eq!(fill_topic("x {topic} y", "{topic}"), "x {topic} y");
    }

    #[test]
    fn audience_uses_code_unit_sum() {
        // "a" = 97, 97 % 6 = 1
        assert_eq!(audience("a", "chess"), "Beginners in chess who need structured guidance");
        // "f" = 102, 102 % 6 = 0
        assert_eq!(
            audience("f", "chess"),
            "chess professionals looking to streamline their workflow"
        );
        // "e" = 101, 101 % 6 = 5
        assert_eq!(
            audience("e", "chess"),
            "Existing chess practitioners wanting to offer more value"
        );
        // U+1F600 is a surrogate pair: 0xD83D + 0xDE00 = 112_189, % 6 = 1
        assert_eq!(audience("\u{1F600}", "go"), "Beginners in go who need structured guidance");
    }

    #[test]
    fn jittered_scores_stay_near_baseline_and_in_bounds() {
        let mut rng = SeededRandom::new(5);
        for _ in 0..500 {
            for keyword in TypeKeyword::ALL {
                let base = catalogs::baseline(keyword).dimensions();
                let got = jittered_scores(&mut rng, keyword).dimensions();
                for (b, g) in base.iter().zip(got.iter()) {
                    assert!((1..=10).contains(g), "{keyword}: {g} out of bounds");
                    assert!(b.abs_diff(*g) <= 1, "{keyword}: {g} too far from {b}");
                }
            }
        }
    }

    #[test]
    fn jittered_scores_consume_four_draws() {
        let mut rng = SeededRandom::new(11);
        jittered_scores(&mut rng, TypeKeyword::Course);
        let mut reference = SeededRandom::new(11);
        for _ in 0..4 {
            reference.next_f64();
        }
        assert_eq!(rng.next_f64(), reference.next_f64());
    }

    #[test]
    fn pick_templates_caps_at_catalog_size() {
        let catalog = ["a {topic}", "b {topic}", "c {topic}"];
        let picked = pick_templates(&mut SeededRandom::new(1), &catalog, 10);
        assert_eq!(picked.len(), 3);
        let picked = pick_templates(&mut SeededRandom::new(1), &catalog, 2);
        assert_eq!(picked.len(), 2);
    }
}
