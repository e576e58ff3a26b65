use anyhow::{Context, Result, bail};
use chrono::{Local, Utc};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::str::FromStr;
use stride::cli;
use stride::config::Config;
use stride::context::{AppContext, StandardContext};
use stride::export;
use stride::model::compiler;
use stride::model::{Category, RoadmapItem};
use stride::store::History;
use strum::IntoEnumIterator;

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    // Global flags may appear anywhere; extract them before dispatching.
    let mut root: Option<PathBuf> = None;
    let mut verbose = false;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" | "help" => {
                cli::print_help();
                return Ok(());
            }
            "-r" | "--root" => {
                if i + 1 >= args.len() {
                    bail!("--root requires a path");
                }
                root = Some(PathBuf::from(args.remove(i + 1)));
                args.remove(i);
            }
            "-v" | "--verbose" => {
                verbose = true;
                args.remove(i);
            }
            _ => i += 1,
        }
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let ctx = StandardContext::new(root);
    let config = Config::load_or_default(&ctx)?;

    match args.first().map(String::as_str) {
        Some("compile") => cmd_compile(&ctx, &config, &args[1..]),
        Some("history") => cmd_history(&ctx),
        Some("export") => cmd_export(&ctx, &config, &args[1..]),
        Some("clear") => cmd_clear(&ctx),
        Some(other) => {
            cli::print_help();
            bail!("Unknown command '{}'", other);
        }
        None => {
            cli::print_help();
            Ok(())
        }
    }
}

fn take_value(args: &[String], i: &mut usize, flag: &str) -> Result<String> {
    if *i + 1 >= args.len() {
        bail!("{} requires a value", flag);
    }
    let value = args[*i + 1].clone();
    *i += 2;
    Ok(value)
}

fn category_list() -> String {
    Category::iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn resolve_out_dir(out_dir: Option<PathBuf>, config: &Config) -> PathBuf {
    out_dir
        .or_else(|| config.export_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn cmd_compile(ctx: &dyn AppContext, config: &Config, args: &[String]) -> Result<()> {
    let mut plan_path: Option<PathBuf> = None;
    let mut goal: Option<String> = None;
    let mut deadline: Option<String> = None;
    let mut category: Option<Category> = None;
    let mut out_dir: Option<PathBuf> = None;
    let mut to_stdout = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-g" | "--goal" => goal = Some(take_value(args, &mut i, "--goal")?),
            "-d" | "--deadline" => deadline = Some(take_value(args, &mut i, "--deadline")?),
            "-c" | "--category" => {
                let raw = take_value(args, &mut i, "--category")?;
                let parsed = Category::from_str(&raw).map_err(|e| {
                    anyhow::anyhow!("{}. Valid categories: {}", e, category_list())
                })?;
                category = Some(parsed);
            }
            "-o" | "--out" => out_dir = Some(PathBuf::from(take_value(args, &mut i, "--out")?)),
            "--stdout" => {
                to_stdout = true;
                i += 1;
            }
            other if plan_path.is_none() && !other.starts_with('-') => {
                plan_path = Some(PathBuf::from(other));
                i += 1;
            }
            other => bail!("Unexpected argument '{}'", other),
        }
    }

    let plan_path = plan_path.ok_or_else(|| anyhow::anyhow!("compile requires a plan file"))?;
    let goal = goal.ok_or_else(|| anyhow::anyhow!("compile requires --goal"))?;
    if goal.trim().is_empty() {
        bail!("--goal must not be empty");
    }

    let plan = std::fs::read_to_string(&plan_path)
        .with_context(|| format!("Failed to read plan file '{}'", plan_path.display()))?;

    let item = RoadmapItem::new(
        goal,
        category.unwrap_or(config.default_category),
        deadline,
        plan,
        Utc::now().timestamp_millis(),
    );

    let now = Local::now().naive_local();
    let doc = compiler::compile_roadmap(&item, now)?;

    if to_stdout {
        println!("{}", doc.to_ics());
    } else {
        let dir = resolve_out_dir(out_dir, config);
        let path = export::save_document(&doc, &item.goal, &dir)?;
        println!("Exported {} events to {}", doc.events.len(), path.display());
    }

    History::add(ctx, item, config.max_history)?;
    Ok(())
}

fn cmd_history(ctx: &dyn AppContext) -> Result<()> {
    let history = History::load(ctx);
    if history.is_empty() {
        println!("No roadmaps stored yet.");
        return Ok(());
    }
    for (index, item) in history.roadmaps.iter().enumerate() {
        let created = chrono::DateTime::from_timestamp_millis(item.timestamp)
            .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "????-??-??".to_string());
        let deadline = item
            .deadline
            .as_deref()
            .map(|d| format!("  (by {})", d))
            .unwrap_or_default();
        println!(
            "[{}] {}  {:<15}  {}{}",
            index, created, item.category, item.goal, deadline
        );
    }
    Ok(())
}

fn cmd_export(ctx: &dyn AppContext, config: &Config, args: &[String]) -> Result<()> {
    let mut index: Option<usize> = None;
    let mut out_dir: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--out" => out_dir = Some(PathBuf::from(take_value(args, &mut i, "--out")?)),
            other if index.is_none() => {
                index = Some(
                    other
                        .parse()
                        .map_err(|_| anyhow::anyhow!("'{}' is not a history index", other))?,
                );
                i += 1;
            }
            other => bail!("Unexpected argument '{}'", other),
        }
    }

    let index = index.ok_or_else(|| anyhow::anyhow!("export requires a history index"))?;
    let history = History::load(ctx);
    let item = history
        .get(index)
        .ok_or_else(|| anyhow::anyhow!("No roadmap at index {} (run 'stride history')", index))?;

    let now = Local::now().naive_local();
    let doc = compiler::compile_roadmap(item, now)?;
    let dir = resolve_out_dir(out_dir, config);
    let path = export::save_document(&doc, &item.goal, &dir)?;
    println!("Exported {} events to {}", doc.events.len(), path.display());
    Ok(())
}

fn cmd_clear(ctx: &dyn AppContext) -> Result<()> {
    History::clear(ctx)?;
    println!("History cleared.");
    Ok(())
}
