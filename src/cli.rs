// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

use crate::model::Category;
use strum::IntoEnumIterator;

pub fn print_help() {
    println!(
        "Stride v{} - Compile goal roadmaps into day-by-day calendar plans",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    stride compile <plan.md> --goal <text> [OPTIONS]");
    println!("    stride history");
    println!("    stride export <index> [--out <dir>]");
    println!("    stride clear");
    println!("    stride --help");
    println!();
    println!("OPTIONS:");
    println!("    -g, --goal <text>          The goal the plan works towards (required).");
    println!("    -d, --deadline <date>      Target date, YYYY-MM-DD. Default: 30 days out.");
    println!("    -c, --category <name>      Goal category (see list below).");
    println!("    -o, --out <dir>            Directory to write the .ics file into.");
    println!("    --stdout                   Print the calendar instead of writing a file.");
    println!("    -r, --root <path>          Use a different directory for config and data.");
    println!("    -v, --verbose              Enable debug logging.");
    println!("    -h, --help                 Show this help message.");
    println!();
    println!("COMPILE COMMAND:");
    println!("    stride compile plan.md --goal \"Learn piano\"             30-day calendar");
    println!("    stride compile plan.md -g \"Learn piano\" -d 2026-03-01   Until the deadline");
    println!("    stride compile plan.md -g \"Learn piano\" --stdout        Print to stdout");
    println!();
    println!("    The plan file is scanned for '## Day N' headers followed by '-' or '*'");
    println!("    bullets. Days without recognized tasks still get a reminder event.");
    println!();
    println!("EXPORT COMMAND:");
    println!("    stride history                 List stored roadmaps (newest first)");
    println!("    stride export 0                Re-export the most recent roadmap as of today");
    println!("    stride export 2 --out ~/cal    Write to a specific directory");
    println!();
    println!("CATEGORIES:");
    let names: Vec<String> = Category::iter().map(|c| c.to_string()).collect();
    println!("    {}", names.join(", "));
    println!();
    println!("MORE INFO:");
    println!("    Repository: https://codeberg.org/strideai/stride");
    println!("    License:    GPL-3.0");
}
