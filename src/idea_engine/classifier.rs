use crate::idea_engine::models::TypeKeyword;

/// Ordered `(needles, keyword)` rules. The first rule with any needle found in
/// the template wins. Matching is case-sensitive.
type Rules = &'static [(&'static [&'static str], TypeKeyword)];

static DIGITAL_RULES: Rules = &[
    (&["course", "training"],        TypeKeyword::Course),
    (&["template", "spreadsheet"],   TypeKeyword::Template),
    (&["guide", "roadmap"],          TypeKeyword::Guide),
    (&["toolkit"],                   TypeKeyword::Toolkit),
    (&["calculator", "dashboard"],   TypeKeyword::Analytics),
    (&["plugin"],                    TypeKeyword::Plugin),
    (&["community"],                 TypeKeyword::Community),
];

static PHYSICAL_RULES: Rules = &[
    (&["printable"],                      TypeKeyword::Printable),
    (&["t-shirt", "apparel", "hoodie"],   TypeKeyword::Apparel),
    (&["mug", "tumbler"],                 TypeKeyword::Apparel),
];

fn first_match(rules: Rules, template: &str) -> TypeKeyword {
    rules
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| template.contains(*needle)))
        .map(|(_, keyword)| *keyword)
        .unwrap_or(TypeKeyword::Default)
}

/// Classify a digital-product template (before topic substitution).
pub fn digital_keyword(template: &str) -> TypeKeyword {
    first_match(DIGITAL_RULES, template)
}

/// Classify a physical-product template (before topic substitution).
pub fn physical_keyword(template: &str) -> TypeKeyword {
    first_match(PHYSICAL_RULES, template)
}
