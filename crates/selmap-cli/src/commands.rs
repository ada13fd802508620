use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde_json::json;
use tracing::debug;

use selmap_diff::{diff_with, DiffKind, DiffSequence};
use selmap_project::{OffsetPolicy, ProjectedSelection, Projector, Selection};

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Diff(args) => cmd_diff(args, cli.format, &config),
        Command::Project(args) => cmd_project(args, cli.format, &config),
    }
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn cmd_diff(args: DiffArgs, format: OutputFormat, config: &CliConfig) -> anyhow::Result<()> {
    let old = read_text(&args.old)?;
    let new = read_text(&args.new)?;
    let diffs = diff_with(&old, &new, &config.diff);

    match format {
        OutputFormat::Json => println!("{}", diffs.to_json_pretty()?),
        OutputFormat::Text => {
            println!("{}", render_diff(&diffs));
            let stats = diffs.stats();
            if diffs.is_identity() {
                println!("No changes.");
            } else {
                println!(
                    "{} chars inserted(+), {} chars deleted(-)",
                    stats.inserted.to_string().green(),
                    stats.deleted.to_string().red()
                );
            }
        }
    }
    Ok(())
}

fn render_diff(diffs: &DiffSequence) -> String {
    diffs
        .iter()
        .map(|op| match op.kind {
            DiffKind::Equal => op.text.normal().to_string(),
            DiffKind::Insert => op.text.green().underline().to_string(),
            DiffKind::Delete => op.text.red().strikethrough().to_string(),
        })
        .collect()
}

fn cmd_project(args: ProjectArgs, format: OutputFormat, config: &CliConfig) -> anyhow::Result<()> {
    let old = read_text(&args.old)?;
    let new = read_text(&args.new)?;

    let diffs = match &args.diff {
        Some(path) => {
            let raw = read_text(path)?;
            DiffSequence::from_json(&raw)
                .with_context(|| format!("decoding diff {}", path.display()))?
        }
        None => diff_with(&old, &new, &config.diff),
    };
    let projector = match &args.diff {
        Some(_) => Projector::checked(&diffs, &old, &new)?,
        None => Projector::new(&diffs),
    };
    let policy = if args.strict { OffsetPolicy::Reject } else { config.policy };
    let projector = projector.with_policy(policy);

    let selection = Selection::new(args.start, args.end.unwrap_or(args.start));
    let projected = projector.project_range(selection)?;
    debug!(?selection, start = projected.start, end = projected.end, "projected selection");

    match format {
        OutputFormat::Json => {
            let target = projected.as_selection();
            let out = json!({
                "source": projected.source,
                "clamped": projected.source != selection,
                "target": target,
                "span_missing": projected.is_span_missing(),
                "inverted": projected.is_inverted(),
                "text": target.slice(&new),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => print_projection(&old, &new, selection, &projected),
    }
    Ok(())
}

fn print_projection(old: &str, new: &str, requested: Selection, projected: &ProjectedSelection) {
    let source = projected.source;
    println!("{}", "Old selection".bold());
    println!("  Start: {}", source.start());
    println!("  End: {}", source.end());
    if source != requested {
        let note = format!(
            "clamped from {}..{} to the {} chars of the old text",
            requested.start(),
            requested.end(),
            old.chars().count()
        );
        println!("  {}", note.yellow());
    }
    println!("  Text: {:?}", source.slice(old));

    println!("{}", "New selection".bold());
    println!("  Start: {}", projected.start);
    println!("  End: {}", projected.end);
    let missing = if projected.is_span_missing() {
        "true".white().on_red().to_string()
    } else {
        "false".to_string()
    };
    println!("  Span missing: {}", missing);
    if projected.is_inverted() {
        println!("  {}", "endpoints inverted by surrounding edits".yellow());
    }

    let target = projected.as_selection();
    println!();
    print!("{}", Selection::new(0, target.start()).slice(new));
    if !target.is_empty() {
        print!("{}", target.slice(new).white().on_red());
    }
    println!("{}", Selection::new(target.end(), usize::MAX).slice(new));
}
