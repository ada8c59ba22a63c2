use crate::idea_engine::{catalogs::PROMPT_TEMPLATES, helpers, random::SeededRandom};

/// Shuffle the prompt catalog, keep `count`, fill in the topic. No scoring,
/// so only the shuffle draws are consumed.
pub fn generate(rng: &mut SeededRandom, topic: &str, count: usize) -> Vec<String> {
    helpers::pick_templates(rng, PROMPT_TEMPLATES, count)
        .into_iter()
        .map(|template| helpers::fill_topic(template, topic))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_are_capped_by_the_catalog() {
        let prompts = generate(&mut SeededRandom::new(3), "SEO", 100);
        assert_eq!(prompts.len(), PROMPT_TEMPLATES.len());
    }

    #[test]
    fn prompts_draw_only_for_the_shuffle() {
        let mut rng = SeededRandom::new(21);
        generate(&mut rng, "SEO", 3);
        let mut reference = SeededRandom::new(21);
        for _ in 0..PROMPT_TEMPLATES.len() - 1 {
            reference.next_f64();
        }
        assert_eq!(rng.next_f64(), reference.next_f64());
    }
}
