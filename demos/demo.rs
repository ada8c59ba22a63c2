//! End-to-end demo of the idea engine.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Reproducibility**: the same topic is generated twice with seed 42 to
//!    show the lead idea and its scores match exactly.
//! 2. **Full bundle**: one bundle is printed section by section: digital
//!    ideas with scores, physical ideas, then prompts.
//!
//! ## Key concepts demonstrated
//!
//! - `generate(topic, seed, count)` is a pure function of its inputs apart
//!   from the timestamp.
//! - `GenerationRequest::new(topic)` picks a random seed and records it in
//!   the bundle, so any run can be replayed.

use passive_gen::{generate, generate_bundle, Category, GeneratedBundle, GenerationRequest};

fn print_section(bundle: &GeneratedBundle, category: Category) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{category} ideas]  topic: {}  seed: {}", bundle.topic, bundle.seed);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (i, idea) in bundle.ideas(category).iter().enumerate() {
        let s = idea.scores;
        println!("  {}. {}", i + 1, idea.title);
        println!(
            "     ease {}  demand {}  diff {}  ship {}",
            s.ease, s.demand, s.differentiation, s.time_to_ship
        );
        println!("     for: {}", idea.who_is_it_for);
    }
    println!();
}

fn main() {
    // ── Reproducibility ────────────────────────────────────────────────────
    println!();
    println!("══ Same seed, same output ══");
    println!();
    let a = generate("dog training", 42, 5);
    let b = generate("dog training", 42, 5);
    println!("  run 1: {}  {:?}", a.digital_ideas[0].title, a.digital_ideas[0].scores);
    println!("  run 2: {}  {:?}", b.digital_ideas[0].title, b.digital_ideas[0].scores);
    println!("  identical: {}", a.same_content(&b));
    println!();

    // ── Full bundle ────────────────────────────────────────────────────────
    let bundle = generate_bundle(GenerationRequest::new("home coffee roasting").with_count(4));
    print_section(&bundle, Category::Digital);
    print_section(&bundle, Category::Physical);

    println!("══ Prompts ══");
    for (i, prompt) in bundle.prompts.iter().enumerate() {
        println!("  {}. {prompt}", i + 1);
    }
    println!();
    println!(
        "Replay with: passive-gen \"{}\" --out ./out --seed {} --count {}",
        bundle.topic, bundle.seed, bundle.count
    );
}
