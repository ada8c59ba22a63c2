//! Markdown rendering for a [`GeneratedBundle`].
//!
//! Every document states the topic, seed and count so a reader can reproduce
//! the run.

use crate::idea_engine::models::{Category, GeneratedBundle, Idea};

/// Characters of each prompt shown in the README preview.
const PROMPT_PREVIEW_CHARS: usize = 70;

struct Storefront {
    heading: &'static str,
    tips: &'static str,
    legend: &'static str,
}

fn storefront(category: Category) -> Storefront {
    match category {
        Category::Digital => Storefront {
            heading: "Digital Product Ideas (Gumroad)",
            tips: "## Tips for Gumroad Success

- **Price Range**: $9-$49 for courses, $5-$27 for templates and guides
- **Packaging**: Bundle your best work to increase perceived value
- **Marketing**: Share free previews on Twitter, Reddit, and relevant communities
- **Email**: Build an email list for repeat customers and product launches
- **Product Pages**: Write compelling descriptions focusing on results, not features
",
            legend: "- **Ease (1-10)**: How much effort to create and launch. 10 = minimal effort (templates), 1 = maximum (custom plugins)
- **Demand (1-10)**: How much customers want this type of product. Based on market research and competition
- **Differentiation (1-10)**: How unique your offering is compared to competitors
- **Time-to-Ship (1-10)**: How quickly you can launch. 10 = days, 1 = months of development
",
        },
        Category::Physical => Storefront {
            heading: "Physical Product Ideas (Etsy)",
            tips: "## Tips for Etsy Success

- **Print-on-Demand**: Use services like Printful, Merch by Amazon, or Printable to avoid inventory
- **Pricing Strategy**: Mark up 3-4x your production cost
- **Tags & SEO**: Use all 13 tag slots with relevant keywords for discoverability
- **Shipping**: Offer digital downloads where possible for instant delivery and margin
- **Reviews**: Excellent customer service builds repeat customers and trust
- **Trends**: Monitor Etsy's trending searches for seasonal opportunities
",
            legend: "- **Ease (1-10)**: How much design/production effort. 10 = simple print-on-demand, 1 = hand-crafted custom items
- **Demand (1-10)**: Buyer enthusiasm for this product category
- **Differentiation (1-10)**: How unique your designs/approach is
- **Time-to-Ship (1-10)**: How fast you can turn around orders. 10 = instant digital, 1 = hand-made
",
        },
    }
}

fn quick_reference_row(index: usize, idea: &Idea) -> String {
    let s = idea.scores;
    format!(
        "| {} | {} | {} | {} | {} | {} |",
        index + 1, idea.title, s.ease, s.demand, s.differentiation, s.time_to_ship
    )
}

fn detailed_section(index: usize, idea: &Idea) -> String {
    let s = idea.scores;
    format!(
        "
## {n}. {title}

**Scores:** Ease: {ease}/10 | Demand: {demand}/10 | Differentiation: {diff}/10 | Time-to-Ship: {ship}/10

**Why it will sell:** {why}

**What's included:** {what}

**Who it's for:** {who}
",
        n = index + 1,
        title = idea.title,
        ease = s.ease,
        demand = s.demand,
        diff = s.differentiation,
        ship = s.time_to_ship,
        why = idea.why_it_will_sell,
        what = idea.what_is_included,
        who = idea.who_is_it_for,
    )
}

/// Idea document for one category (`digital_ideas.md` / `physical_ideas.md`).
pub fn ideas_document(bundle: &GeneratedBundle, category: Category) -> String {
    let ideas = bundle.ideas(category);
    let front = storefront(category);

    let table: Vec<String> = ideas
        .iter()
        .enumerate()
        .map(|(i, idea)| quick_reference_row(i, idea))
        .collect();
    let details: Vec<String> = ideas
        .iter()
        .enumerate()
        .map(|(i, idea)| detailed_section(i, idea))
        .collect();

    format!(
        "# {heading} for \"{topic}\"

Generated with seed: {seed} | Total ideas: {count}

## Quick Reference

| # | Idea | Ease | Demand | Diff | Speed |
|---|------|------|--------|------|-------|
{table}

## Detailed Ideas

{details}

{tips}
## Understanding the Scores

{legend}",
        heading = front.heading,
        topic = bundle.topic,
        seed = bundle.seed,
        count = bundle.count,
        table = table.join("\n"),
        details = details.join("\n"),
        tips = front.tips,
        legend = front.legend,
    )
}

/// `prompts.md`.
pub fn prompts_document(bundle: &GeneratedBundle) -> String {
    let prompts: Vec<String> = bundle
        .prompts
        .iter()
        .enumerate()
        .map(|(i, prompt)| format!("\n### Prompt {}\n\n{}", i + 1, prompt))
        .collect();

    format!(
        "# AI Prompts for \"{topic}\"

Generated with seed: {seed} | Total prompts: {count}

These prompts work with any general-purpose chat assistant.

{prompts}

## How to Use These Prompts

1. **Direct Copy-Paste**: Use these prompts as-is or modify them slightly for your needs
2. **Iterate**: Ask follow-up questions to refine outputs
3. **Combine**: Merge multiple prompts to create comprehensive guides
4. **Personalize**: Replace [specific audience] with real target demographics
5. **Batch Processing**: Use with API access to generate content at scale
6. **Variations**: Change wording to adapt for different models

## Pro Tips

- Ask for long-form analysis when you need depth, and for lists when brainstorming
- Keep a running document of the prompts that gave the best results
- Always fact-check generated content, especially claims about the {topic} industry
",
        topic = bundle.topic,
        seed = bundle.seed,
        count = bundle.count,
        prompts = prompts.join("\n"),
    )
}

fn rounded_average(ideas: &[Idea], pick: impl Fn(&Idea) -> u8) -> u32 {
    if ideas.is_empty() {
        return 0;
    }
    let sum: u32 = ideas.iter().map(|idea| u32::from(pick(idea))).sum();
    (f64::from(sum) / ideas.len() as f64).round() as u32
}

fn title_preview(ideas: &[Idea]) -> String {
    let mut lines: Vec<String> = ideas.iter().take(5).map(|idea| format!("- {}", idea.title)).collect();
    if ideas.len() > 5 {
        lines.push(format!("- ... and {} more", ideas.len() - 5));
    }
    lines.join("\n")
}

fn prompt_preview(prompts: &[String]) -> String {
    prompts
        .iter()
        .take(3)
        .map(|prompt| {
            let head: String = prompt.chars().take(PROMPT_PREVIEW_CHARS).collect();
            format!("- {head}...")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Command line that regenerates `bundle` exactly.
pub fn reproduce_command(bundle: &GeneratedBundle) -> String {
    format!(
        "passive-gen \"{}\" --out ./out --seed {} --count {}",
        bundle.topic, bundle.seed, bundle.count
    )
}

/// `README.md`: overview, previews, and how to reproduce the run.
pub fn readme(bundle: &GeneratedBundle) -> String {
    let digital = &bundle.digital_ideas;
    let avg_ease = rounded_average(digital, |idea| idea.scores.ease);
    let avg_demand = rounded_average(digital, |idea| idea.scores.demand);

    format!(
        "# Generated Content for Topic: \"{topic}\"

Generated on: {generated_at}
Seed: {seed}
Count: {count} ideas per category

## Files

- **digital_ideas.md** - {n_digital} digital product ideas with scoring
- **physical_ideas.md** - {n_physical} physical/POD product ideas with scoring
- **prompts.md** - {n_prompts} AI prompts tailored to your topic
- **bundle.json** - Complete data export in JSON format for programmatic use

## Quick Summary

### Digital Ideas
Average Ease: {avg_ease}/10 | Average Demand: {avg_demand}/10

{digital_preview}

### Physical Ideas (Print-on-Demand)
{physical_preview}

### AI Prompts
{prompt_preview}
_See prompts.md for full prompt text._

## How to Use This Report

### Step 1: Review & Sort
Sort ideas by your preferred combination of scores:
- **Quick wins**: High Ease + High Time-to-Ship (launch in days)
- **Evergreen**: High Demand + High Differentiation (sustainable business)
- **Ambitious**: Lower Ease but High Demand (longer build, bigger payoff)

### Step 2: Validate
For your top 3-5 ideas:
1. Search \"{topic}\" on Gumroad and Etsy
2. Check competitor pricing and reviews
3. Validate demand using Google Trends, Keyword Tool, Reddit searches
4. Estimate your production time and costs

### Step 3: Create & Launch
1. Start with 1-2 ideas that excite you most
2. Use the AI prompts to generate marketing copy and content
3. Create a landing page or product listing
4. Share with 10-20 trusted connections for feedback
5. Iterate based on feedback before major launch

### Step 4: Scale
Once one product works:
1. Refine and improve based on customer feedback
2. Launch 2-3 more ideas from this list
3. Build an email list for product launches
4. Create bundle/package deals to increase revenue per customer

## About the Scores

Each idea is rated on four dimensions (1-10 scale):

| Metric | Low | High | Examples |
|--------|-----|------|----------|
| **Ease** | Requires custom coding | Downloadable template | 1 = AI plugin, 10 = Google Sheet template |
| **Demand** | Niche/specialized | Wide audience interest | 1 = ultra-niche, 10 = broad appeal |
| **Differentiation** | Common/saturated market | Unique positioning | 1 = oversaturated, 10 = novel approach |
| **Time-to-Ship** | Many months | Days to weeks | 1 = 6-month build, 10 = available today |

## Reproducibility

To regenerate the exact same content, use:
```bash
{command}
```

The same topic, seed and count always produce the same ideas and prompts.

## Next Steps

1. Review all ideas above
2. Star your top 3 in each category
3. Validate 1-2 ideas with market research
4. Sketch out a launch plan for your top pick
5. Start creating! Pick the quickest win first

---

Generated by **passive-gen** v{version}
",
        topic = bundle.topic,
        generated_at = bundle.generated_at.to_rfc3339(),
        seed = bundle.seed,
        count = bundle.count,
        n_digital = bundle.digital_ideas.len(),
        n_physical = bundle.physical_ideas.len(),
        n_prompts = bundle.prompts.len(),
        avg_ease = avg_ease,
        avg_demand = avg_demand,
        digital_preview = title_preview(digital),
        physical_preview = title_preview(&bundle.physical_ideas),
        prompt_preview = prompt_preview(&bundle.prompts),
        command = reproduce_command(bundle),
        version = env!("CARGO_PKG_VERSION"),
    )
}
