use crate::idea_engine::{
    catalogs::DIGITAL_TEMPLATES,
    classifier::digital_keyword,
    helpers,
    models::{Idea, TypeKeyword},
    random::SeededRandom,
};

fn why_it_will_sell(keyword: TypeKeyword, topic: &str) -> String {
    match keyword {
        TypeKeyword::Course =>
            "People are willing to pay $97-$297 for comprehensive courses. With video content, \
             you can reach global audiences and update material easily."
                .to_string(),
        TypeKeyword::Template =>
            "Templates save customers 10+ hours. They're willing to pay $27-$97 for done-for-you \
             frameworks that accelerate their work."
                .to_string(),
        TypeKeyword::Guide => format!(
            "Digital guides have high perceived value despite low production cost. \
             Proven expertise in {topic} commands premium pricing."
        ),
        TypeKeyword::Toolkit =>
            "Bundled resources create more value perception than individual items. Customers \
             get comprehensive solutions they can't find elsewhere."
                .to_string(),
        TypeKeyword::Analytics => format!(
            "Data-driven professionals will pay $49-$199 for tools that save time and provide \
             actionable insights for {topic}."
        ),
        TypeKeyword::Plugin => format!(
            "Professional plugins have recurring revenue potential and high demand in {topic} \
             communities."
        ),
        TypeKeyword::Community => format!(
            "Communities create switching costs and recurring revenue. {topic} professionals \
             need peer support and exclusive knowledge."
        ),
        _ => format!(
            "This offers direct value to {topic} practitioners who are willing to invest in \
             tools that save time or increase revenue."
        ),
    }
}

fn what_is_included(keyword: TypeKeyword) -> String {
    let text = match keyword {
        TypeKeyword::Course =>
            "Video lessons, worksheets, templates, community access, and lifetime updates",
        TypeKeyword::Template =>
            "Multiple customizable files, setup guide, video tutorial, and one year of free updates",
        TypeKeyword::Guide     => "PDF guide, checklist, case studies, resources, and email support",
        TypeKeyword::Toolkit   => "20+ templates, calculators, scripts, and video walkthrough",
        TypeKeyword::Analytics =>
            "Automated calculations, real-time reporting, export options, and custom alerts",
        TypeKeyword::Plugin =>
            "Installation guide, documentation, example usage, and technical support",
        TypeKeyword::Community =>
            "Private Discord/Slack, weekly calls, resource library, and peer feedback",
        TypeKeyword::Printable =>
            "High-res files (300dpi), multiple formats (PDF, PNG), source file, and resizing guide",
        TypeKeyword::Apparel =>
            "Design files, sizing guide, care instructions, and design consultation",
        TypeKeyword::Default => "Complete resource with setup guide, examples, and ongoing support",
    };
    text.to_string()
}

pub fn generate(rng: &mut SeededRandom, topic: &str, count: usize) -> Vec<Idea> {
    helpers::pick_templates(rng, DIGITAL_TEMPLATES, count)
        .into_iter()
        .map(|template| {
            helpers::idea(
                rng,
                template,
                topic,
                digital_keyword(template),
                |keyword| why_it_will_sell(keyword, topic),
                what_is_included,
            )
        })
        .collect()
}
