use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use passive_gen::idea_engine::models::DEFAULT_COUNT;
use passive_gen::writer::{
    self, BUNDLE_FILE, DEFAULT_TEMPLATES_FILE, DIGITAL_FILE, PHYSICAL_FILE, PROMPTS_FILE,
    README_FILE,
};
use passive_gen::{generate_bundle, GenerationRequest};

/// Generate passive income product ideas and AI prompts for any topic
#[derive(Parser, Debug)]
#[command(name = "passive-gen")]
#[command(version)]
#[command(after_help = "EXAMPLES:
  passive-gen \"digital marketing\" --out ./output
  passive-gen \"dog training\" --out ./ideas --seed 42
  passive-gen \"freelance writing\" --out ./gen --count 20
  passive-gen --templates my-templates.json")]
struct Cli {
    /// The topic to generate ideas for (e.g. "digital marketing")
    #[arg(required_unless_present = "templates")]
    topic: Option<String>,

    /// Output directory for generated files
    #[arg(short, long, env = "PASSIVE_GEN_OUT", required_unless_present = "templates")]
    out: Option<PathBuf>,

    /// Seed for deterministic generation (random when omitted)
    #[arg(long, env = "PASSIVE_GEN_SEED")]
    seed: Option<u64>,

    /// Number of ideas per category (clamped to 100)
    #[arg(
        long,
        env = "PASSIVE_GEN_COUNT",
        default_value_t = DEFAULT_COUNT as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    count: u32,

    /// Export the built-in templates to a JSON file and exit
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = DEFAULT_TEMPLATES_FILE)]
    templates: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "passive_gen=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if let Some(path) = cli.templates {
        writer::export_templates(&path)
            .with_context(|| format!("exporting templates to {}", path.display()))?;
        println!("{} Templates exported to {}", style("✓").green(), path.display());
        return Ok(());
    }

    let (Some(topic), Some(out_dir)) = (cli.topic, cli.out) else {
        bail!("TOPIC and --out are required");
    };

    let request = GenerationRequest::new(topic)
        .with_seed_opt(cli.seed)
        .with_count(cli.count as usize);

    println!("{} Generating ideas for topic: \"{}\"", style("→").cyan(), request.topic);
    println!("  Output directory: {}", out_dir.display());

    let bundle = generate_bundle(request);
    println!("  Seed: {}", bundle.seed);
    println!("  Ideas per category: {}", bundle.count);
    println!();

    writer::write_output_files(&bundle, &out_dir)
        .with_context(|| format!("writing output to {}", out_dir.display()))?;

    println!("{} Generation complete", style("✓").green());
    println!("  Generated files:");
    println!("  - {DIGITAL_FILE} ({} ideas)", bundle.digital_ideas.len());
    println!("  - {PHYSICAL_FILE} ({} ideas)", bundle.physical_ideas.len());
    println!("  - {PROMPTS_FILE} ({} prompts)", bundle.prompts.len());
    println!("  - {BUNDLE_FILE} (full data export)");
    println!("  - {README_FILE} (overview and tips)");
    println!();
    println!(
        "To regenerate with the same results: passive-gen \"{}\" --out {} --seed {} --count {}",
        bundle.topic,
        out_dir.display(),
        bundle.seed,
        bundle.count
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} Error: {err:#}", style("✗").red());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};

    use clap::error::ErrorKind;

    use super::*;

    const ENV_VARS: [&str; 3] = ["PASSIVE_GEN_OUT", "PASSIVE_GEN_SEED", "PASSIVE_GEN_COUNT"];

    // Env vars are process-wide; every parse runs under this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clean_env() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
        guard
    }

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("passive-gen").chain(args.iter().copied()))
    }

    #[test]
    fn topic_and_out_use_defaults() {
        let _env = clean_env();
        let cli = parse(&["t", "--out", "d"]).unwrap();
        assert_eq!(cli.topic.as_deref(), Some("t"));
        assert_eq!(cli.out, Some(PathBuf::from("d")));
        assert_eq!(cli.count, 10);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.templates, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn zero_count_is_a_usage_error() {
        let _env = clean_env();
        let err = parse(&["t", "--out", "d", "--count", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn large_count_parses_and_is_left_to_the_engine() {
        let _env = clean_env();
        let cli = parse(&["t", "--out", "d", "--count", "500"]).unwrap();
        assert_eq!(cli.count, 500);
    }

    #[test]
    fn no_arguments_is_rejected() {
        let _env = clean_env();
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn topic_without_out_is_rejected() {
        let _env = clean_env();
        let err = parse(&["t"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn bare_templates_flag_uses_default_file() {
        let _env = clean_env();
        let cli = parse(&["--templates"]).unwrap();
        assert_eq!(cli.templates, Some(PathBuf::from(DEFAULT_TEMPLATES_FILE)));
        assert_eq!(cli.topic, None);
        assert_eq!(cli.out, None);

        let cli = parse(&["--templates", "mine.json"]).unwrap();
        assert_eq!(cli.templates, Some(PathBuf::from("mine.json")));
    }

    #[test]
    fn env_vars_fill_out_seed_and_count() {
        let _env = clean_env();
        std::env::set_var("PASSIVE_GEN_OUT", "env-out");
        std::env::set_var("PASSIVE_GEN_SEED", "42");
        std::env::set_var("PASSIVE_GEN_COUNT", "7");

        let cli = parse(&["t"]).unwrap();
        assert_eq!(cli.out, Some(PathBuf::from("env-out")));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.count, 7);

        // Flags win over the environment.
        let cli = parse(&["t", "--out", "d", "--seed", "1", "--count", "2"]).unwrap();
        assert_eq!(cli.out, Some(PathBuf::from("d")));
        assert_eq!(cli.seed, Some(1));
        assert_eq!(cli.count, 2);

        std::env::set_var("PASSIVE_GEN_COUNT", "0");
        assert!(parse(&["t"]).is_err());

        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn run_writes_the_reproducible_bundle() {
        let _env = clean_env();
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("ideas");
        let out_arg = out.to_str().unwrap();
        let cli = parse(&["dog training", "--out", out_arg, "--seed", "42", "--count", "5"]).unwrap();
        run(cli).unwrap();

        let json = std::fs::read_to_string(out.join(BUNDLE_FILE)).unwrap();
        let bundle: passive_gen::GeneratedBundle = serde_json::from_str(&json).unwrap();
        assert!(bundle.same_content(&passive_gen::generate("dog training", 42, 5)));
        for name in [DIGITAL_FILE, PHYSICAL_FILE, PROMPTS_FILE, README_FILE] {
            assert!(out.join(name).is_file(), "{name} missing");
        }
    }

    #[test]
    fn run_exports_templates_only() {
        let _env = clean_env();
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_TEMPLATES_FILE);
        let cli = parse(&["--templates", path.to_str().unwrap()]).unwrap();
        run(cli).unwrap();
        assert!(path.is_file());
        assert!(!tmp.path().join(BUNDLE_FILE).exists());
    }
}
