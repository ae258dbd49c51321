//! Course catalog command-line entry point.
//!
//! # Responsibility
//! - Load a course file (or the embedded data set) into a catalog.
//! - Run one query/mutation and print text or JSON.

use anyhow::{Context, Result};
use catalog_core::{
    default_log_level, describe_oldest, init_logging, normalize_category, CatalogService, Level,
    CATEGORY_NOT_FOUND,
};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::{self, Write};
use std::path::PathBuf;

/// Data set used when `--file` is not given.
const EMBEDDED_COURSES: &str = include_str!("../data/cursos.csv");

#[derive(Debug, Parser)]
#[command(
    name = "catalog_cli",
    version,
    about = "Load a course file grouped by category and query it"
)]
struct Args {
    /// Course file with `category : name : dd/mm/yyyy : level` lines
    #[arg(long)]
    file: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long)]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render every category and its courses
    Show,
    /// List category names
    Categories,
    /// Count courses in a category (-1 when absent)
    Count { category: String },
    /// Report the earliest published course
    Oldest,
    /// Delete a category's courses of one level, then render
    Delete { category: String, level: Level },
    /// Render, report oldest, delete two category/level pairs, render again
    Demo,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let mut service = CatalogService::new();
    match &args.file {
        Some(path) => service
            .load_path(path)
            .with_context(|| format!("failed to load `{}`", path.display()))?,
        None => service
            .load_lines("embedded", EMBEDDED_COURSES.lines())
            .context("failed to load embedded course data")?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut service, args.command.unwrap_or(Command::Demo), args.json, &mut out)
}

fn run<W: Write>(
    service: &mut CatalogService,
    command: Command,
    as_json: bool,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Show if as_json => print_json(out, &json!(service.catalog()))?,
        Command::Show => service.print(out)?,
        Command::Categories => {
            let categories = service.catalog().categories();
            if as_json {
                print_json(out, &json!(categories))?;
            } else {
                for category in categories {
                    writeln!(out, "{category}")?;
                }
            }
        }
        Command::Count { category } => {
            let key = normalize_category(&category);
            let count = service.catalog().count_in(&key);
            if as_json {
                print_json(out, &json!({ "category": key, "count": count }))?;
            } else if count == CATEGORY_NOT_FOUND {
                writeln!(out, "{key}: not found ({count})")?;
            } else {
                writeln!(out, "{key}: {count}")?;
            }
        }
        Command::Oldest if as_json => {
            print_json(out, &json!(service.catalog().oldest_course()))?
        }
        Command::Oldest => writeln!(
            out,
            "Oldest course: {}",
            describe_oldest(service.catalog())
        )?,
        Command::Delete { category, level } => {
            let removed = service
                .delete_by_level(&category, level)
                .with_context(|| format!("failed to delete {level} courses"))?;
            if as_json {
                print_json(
                    out,
                    &json!({ "removed": removed, "catalog": service.catalog() }),
                )?;
            } else {
                let names = removed.into_iter().collect::<Vec<_>>().join(", ");
                writeln!(out, "Deleted = [{names}]\n")?;
                service.print(out)?;
            }
        }
        Command::Demo => service.run_demo(out)?,
    }
    Ok(())
}

fn print_json<W: Write>(out: &mut W, value: &serde_json::Value) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to encode JSON")?;
    writeln!(out)?;
    Ok(())
}
