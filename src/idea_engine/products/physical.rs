use crate::idea_engine::{
    catalogs::PHYSICAL_TEMPLATES,
    classifier::physical_keyword,
    helpers,
    models::{Idea, TypeKeyword},
    random::SeededRandom,
};

fn why_it_will_sell(topic: &str) -> String {
    format!(
        "{topic} enthusiasts love branded merchandise and gifts. Print-on-demand lets you test \
         demand without inventory risk while maintaining 200-400% margins."
    )
}

fn what_is_included(keyword: TypeKeyword) -> String {
    let text = match keyword {
        TypeKeyword::Printable =>
            "Digital files (PDF + PNG), print-ready, multiple color options, and resizing guide",
        TypeKeyword::Apparel =>
            "Design files, mockups in multiple colors, sizing chart, and seller tips",
        _ => "Product with packaging, care instructions, and seller optimization guide",
    };
    text.to_string()
}

pub fn generate(rng: &mut SeededRandom, topic: &str, count: usize) -> Vec<Idea> {
    helpers::pick_templates(rng, PHYSICAL_TEMPLATES, count)
        .into_iter()
        .map(|template| {
            helpers::idea(
                rng,
                template,
                topic,
                physical_keyword(template),
                |_| why_it_will_sell(topic),
                what_is_included,
            )
        })
        .collect()
}
