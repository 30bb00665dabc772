use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use coloranim::{
    BuildManifest, BuildOutcome, InMemorySink, KNOWN_PROPERTIES, ParameterValues,
    generate_animator, generate_hue_animator, hue_animator_diagnostic, run_build_pass,
    sample_controller,
};

#[derive(Parser, Debug)]
#[command(name = "coloranim", version)]
struct Cli {
    /// Log generation steps to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a build pass and write the report as JSON.
    Generate(GenerateArgs),
    /// Validate every animator in a manifest without generating anything.
    Check(CheckArgs),
    /// Evaluate one generated controller at the given parameter values.
    Preview(PreviewArgs),
    /// List the well-known animatable shader properties.
    Properties,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input manifest JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output report JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input manifest JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input manifest JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Name of the object owning the animator.
    #[arg(long)]
    object: String,

    /// Parameter value as NAME=VALUE; unset parameters read 0.5.
    #[arg(long = "param", value_parser = parse_param)]
    params: Vec<(String, f32)>,
}

const PREVIEW_DEFAULT: f32 = 0.5;

fn parse_param(s: &str) -> Result<(String, f32), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let value: f32 = value
        .trim()
        .parse()
        .map_err(|e| format!("bad value for '{name}': {e}"))?;
    if !value.is_finite() {
        return Err(format!("value for '{name}' must be finite, got {value}"));
    }
    Ok((name.trim().to_string(), value))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Check(args) => cmd_check(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Properties => cmd_properties(),
    }
}

fn load(path: &Path) -> anyhow::Result<BuildManifest> {
    BuildManifest::from_path(path).with_context(|| format!("load manifest '{}'", path.display()))
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let manifest = load(&args.in_path)?;
    let mut sink = InMemorySink::new();
    let report = run_build_pass(&manifest, &mut sink);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = std::fs::File::create(&args.out)
        .with_context(|| format!("create report '{}'", args.out.display()))?;
    serde_json::to_writer_pretty(f, &report)
        .with_context(|| format!("write report '{}'", args.out.display()))?;

    for skipped in &report.skipped {
        eprintln!("skipped {}: {}", skipped.owner_name, skipped.reason);
    }
    eprintln!(
        "generated {} controller(s), {} asset(s); wrote {}",
        report.generated.len(),
        report.persisted.len(),
        args.out.display()
    );
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let manifest = load(&args.in_path)?;
    let mut invalid = 0usize;

    for config in &manifest.animators {
        let owner = manifest.object_name(config.owner);
        match coloranim::diagnostic(config, &manifest.scene) {
            None => println!("{owner}: ok, {}", coloranim::summary(config)),
            Some(msg) => {
                invalid += 1;
                println!("{owner}: {msg}");
            }
        }
    }
    for config in &manifest.hue_animators {
        let owner = manifest.object_name(config.owner);
        match hue_animator_diagnostic(config, &manifest.scene) {
            None => println!("{owner}: ok, hue cycle on '{}'", config.parameter),
            Some(msg) => {
                invalid += 1;
                println!("{owner}: {msg}");
            }
        }
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} animator(s) failed validation");
    }
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let manifest = load(&args.in_path)?;
    let owner = manifest
        .scene
        .find(&args.object)
        .with_context(|| format!("no object named '{}'", args.object))?;

    let outcome = if let Some(config) = manifest.animators.iter().find(|a| a.owner == owner) {
        generate_animator(&manifest.scene, manifest.root, config)
    } else if let Some(config) = manifest.hue_animators.iter().find(|a| a.owner == owner) {
        generate_hue_animator(&manifest.scene, manifest.root, config)
    } else {
        anyhow::bail!("'{}' owns no animator", args.object);
    };
    let generated = match outcome {
        BuildOutcome::Generated(g) => g,
        BuildOutcome::Skipped(reason) => anyhow::bail!("'{}': {reason}", args.object),
    };

    let mut params: ParameterValues = generated
        .controller
        .parameters
        .iter()
        .map(|p| (p.name.clone(), PREVIEW_DEFAULT))
        .collect();
    params.extend(args.params);

    let values = sample_controller(&generated.controller, &params)?;
    let by_name: BTreeMap<String, f32> = values
        .into_iter()
        .map(|(binding, v)| (binding.to_string(), v))
        .collect();
    println!("{}", serde_json::to_string_pretty(&by_name)?);
    Ok(())
}

fn cmd_properties() -> anyhow::Result<()> {
    for p in KNOWN_PROPERTIES {
        println!("{:<22} {:?}  {}", p.name, p.mode(), p.label);
    }
    Ok(())
}
