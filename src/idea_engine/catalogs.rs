//! Built-in template catalogs and score baselines.
//!
//! Order is significant: it is the pre-shuffle order the generator's
//! Fisher-Yates pass runs over, so reordering entries changes every bundle.

use crate::idea_engine::models::{Scores, TypeKeyword};

/// Token replaced by the topic in every template.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

pub static DIGITAL_TEMPLATES: &[&str] = &[
    "Complete {topic} starter guide in PDF",
    "{topic} video course with 10+ modules",
    "{topic} Excel template and spreadsheet toolkit",
    "Daily {topic} checklist and planning system",
    "{topic} directory of 100+ resources",
    "Premium {topic} email templates",
    "{topic} brand identity kit (logos, fonts, colors)",
    "Automated {topic} pricing calculator",
    "{topic} swipe file and copywriting templates",
    "{topic} habit tracker and progress app",
    "Step-by-step {topic} implementation roadmap",
    "{topic} scripts and pitch decks",
    "Advanced {topic} case studies collection",
    "{topic} certification course materials",
    "Done-for-you {topic} content calendar",
    "{topic} tools comparison spreadsheet",
    "Interview series: {topic} experts talk",
    "{topic} podcast episode transcripts",
    "Component library for {topic} projects",
    "{topic} ROI calculator and metrics tracker",
    "Customizable {topic} Notion templates",
    "{topic} troubleshooting and FAQ database",
    "Premium {topic} stock photos and graphics",
    "{topic} automation scripts and code snippets",
    "Complete {topic} business plan templates",
    "{topic} sales pipeline and CRM setup guide",
    "Advanced {topic} metrics dashboard",
    "{topic} team training program materials",
    "Exclusive {topic} industry report and analysis",
    "Done-with-you {topic} audit checklist",
];

pub static PHYSICAL_TEMPLATES: &[&str] = &[
    "{topic} motivational printable wall art",
    "Personalized {topic} t-shirt design",
    "{topic} coffee mug with witty quote",
    "Custom {topic} notebook and journal",
    "{topic} enamel pin collection",
    "Premium {topic} tote bag design",
    "Engraved {topic} wooden sign",
    "{topic} sticker sheet assortment",
    "Aesthetic {topic} phone wallpaper pack",
    "Custom {topic} leather bookmark",
    "Digital {topic} planner printables",
    "{topic} throw pillow cover design",
    "Professional {topic} business cards",
    "{topic} desk mat with calendars",
    "Funny {topic} greeting cards set",
    "Premium {topic} passport holder",
    "{topic} canvas tote and accessories",
    "Printable {topic} habit tracker",
    "{topic} themed jigsaw puzzle",
    "Custom {topic} wall calendar design",
    "{topic} hoodie and apparel collection",
    "Laser-engraved {topic} gift box set",
    "{topic} mindfulness card deck",
    "Personalized {topic} mug and tumbler",
    "{topic} phone case with designs",
    "Aesthetic {topic} desk organizer",
    "{topic} limited edition poster series",
    "Custom {topic} event tickets template",
    "{topic} branded merchandise bundle",
    "Luxury {topic} packaging and labels",
];

pub static PROMPT_TEMPLATES: &[&str] = &[
    "Create a 30-day action plan for someone new to {topic}. Include weekly milestones and daily tasks.",
    "I'm a beginner in {topic}. What are the top 5 mistakes people make and how to avoid them?",
    "Generate 10 unique business ideas within {topic} that can be started with minimal budget.",
    "Explain {topic} concepts using simple analogies that a 10-year-old would understand.",
    "Create a comparison matrix of the best tools and software for {topic} professionals.",
    "Write a compelling pitch for a {topic} product or service that would appeal to [specific audience].",
    "What are the emerging trends in {topic} for 2024-2025? How should professionals adapt?",
    "Create a step-by-step tutorial for the most common {topic} task beginners struggle with.",
    "Generate 20 SEO-optimized blog post titles about {topic} that would rank in Google.",
    "Interview questions: What would you ask a {topic} expert to learn their best strategies?",
    "Create a {topic} content calendar for a month with specific post ideas and angles.",
    "How can someone transition their career into {topic}? What skills and education matter most?",
    "Generate a list of {topic} communities, forums, and places where professionals gather.",
    "What are the most common customer pain points in {topic}? How do solutions address them?",
    "Create a {topic} glossary of 30 essential terms every professional should know.",
    "Brainstorm 15 viral content ideas for a {topic} brand on TikTok and Instagram.",
    "What certifications and credentials matter most in {topic}? Which are worth pursuing?",
    "Design a lead magnet for a {topic} business. What would make people eager to download it?",
    "Create an email sequence to nurture leads interested in {topic} solutions.",
    "What are the best {topic} podcasts, YouTube channels, and resources to stay updated?",
    "Generate 5 case studies of successful {topic} businesses and what made them successful.",
    "Create a competitive analysis framework for {topic} products and services.",
    "What are the top pricing strategies used in the {topic} industry? How to position your offer?",
    "Design a customer journey map for a typical {topic} buyer.",
    "Generate 10 unique angles for selling {topic} products that competitors aren't using.",
];

/// Baseline scores per type keyword, before jitter.
pub static SCORE_BASELINES: &[(TypeKeyword, Scores)] = &[
    (TypeKeyword::Template,  Scores::new(9, 7, 5, 10)),
    (TypeKeyword::Course,    Scores::new(5, 8, 7, 4)),
    (TypeKeyword::Printable, Scores::new(8, 6, 4, 9)),
    (TypeKeyword::Apparel,   Scores::new(7, 7, 5, 7)),
    (TypeKeyword::Plugin,    Scores::new(3, 9, 8, 3)),
    (TypeKeyword::Guide,     Scores::new(7, 6, 6, 8)),
    (TypeKeyword::Toolkit,   Scores::new(6, 8, 7, 6)),
    (TypeKeyword::Analytics, Scores::new(4, 9, 8, 5)),
    (TypeKeyword::Community, Scores::new(4, 8, 8, 5)),
    (TypeKeyword::Default,   Scores::new(6, 6, 6, 6)),
];

const DEFAULT_BASELINE: Scores = Scores::new(6, 6, 6, 6);

/// Baseline for `keyword`, falling back to the `default` row.
pub fn baseline(keyword: TypeKeyword) -> Scores {
    SCORE_BASELINES
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, scores)| *scores)
        .unwrap_or(DEFAULT_BASELINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_non_empty_and_sized() {
        assert_eq!(DIGITAL_TEMPLATES.len(), 30);
        assert_eq!(PHYSICAL_TEMPLATES.len(), 30);
        assert_eq!(PROMPT_TEMPLATES.len(), 25);
    }

    #[test]
    fn catalog_ends_are_pinned() {
        assert_eq!(DIGITAL_TEMPLATES[0], "Complete {topic} starter guide in PDF");
        assert_eq!(DIGITAL_TEMPLATES[29], "Done-with-you {topic} audit checklist");
        assert_eq!(PHYSICAL_TEMPLATES[0], "{topic} motivational printable wall art");
        assert_eq!(PHYSICAL_TEMPLATES[29], "Luxury {topic} packaging and labels");
        assert_eq!(
            PROMPT_TEMPLATES[0],
            "Create a 30-day action plan for someone new to {topic}. Include weekly milestones and daily tasks."
        );
        assert_eq!(
            PROMPT_TEMPLATES[24],
            "Generate 10 unique angles for selling {topic} products that competitors aren't using."
        );
    }

    #[test]
    fn baselines_keep_their_lookup_order() {
        let order: Vec<&str> = SCORE_BASELINES.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            order,
            [
                "template", "course", "printable", "apparel", "plugin",
                "guide", "toolkit", "analytics", "community", "default",
            ]
        );
    }

    #[test]
    fn every_template_carries_the_placeholder() {
        for template in DIGITAL_TEMPLATES.iter().chain(PHYSICAL_TEMPLATES).chain(PROMPT_TEMPLATES) {
            assert!(
                template.contains(TOPIC_PLACEHOLDER),
                "template without placeholder: {template}"
            );
        }
    }

    #[test]
    fn every_keyword_has_a_baseline_row() {
        for keyword in TypeKeyword::ALL {
            assert!(
                SCORE_BASELINES.iter().any(|(k, _)| *k == keyword),
                "missing baseline for {keyword}"
            );
        }
        assert_eq!(baseline(TypeKeyword::Template), Scores::new(9, 7, 5, 10));
        assert_eq!(baseline(TypeKeyword::Default), DEFAULT_BASELINE);
    }

    #[test]
    fn baselines_are_within_score_bounds() {
        for (keyword, scores) in SCORE_BASELINES {
            for value in scores.dimensions() {
                assert!((1..=10).contains(&value), "{keyword} baseline {value} out of range");
            }
        }
    }
}
