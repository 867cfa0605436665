use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use snipfmt::converting::{convert_to_markdown, format_document};
use snipfmt::document::load;
use snipfmt::problem::report;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("snipfmt")
        .version(VERSION)
        .propagate_version(true)
        .about("Reformat C++ code blocks embedded in LaTeX documents.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("format")
                .about("Normalize a LaTeX document and reformat its code blocks")
                .arg(
                    Arg::new("backup")
                        .long("backup")
                        .action(ArgAction::SetTrue)
                        .help("Save a copy of the original file alongside it before overwriting."),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .action(ArgAction::SetTrue)
                        .help("Show what would change without writing anything."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write the result here instead of back over the input file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The LaTeX document whose code blocks you want reformatted."),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a LaTeX document to Markdown")
                .arg(
                    Arg::new("title")
                        .long("title")
                        .default_value("Competitive Programming Notes")
                        .help("Title placed at the top of the generated Markdown."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Where to write the Markdown. Defaults to the input with a .md extension."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The LaTeX document you want converted."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("format", submatches)) => {
            if let Some(filename) = submatches.get_one::<String>("filename") {
                let filename = Path::new(filename);
                let backup = submatches.get_flag("backup");
                let dry_run = submatches.get_flag("dry-run");
                let output = submatches
                    .get_one::<String>("output")
                    .map(PathBuf::from);
                run_format(filename, backup, dry_run, output);
            }
        }
        Some(("convert", submatches)) => {
            if let Some(filename) = submatches.get_one::<String>("filename") {
                let filename = Path::new(filename);
                let title = submatches
                    .get_one::<String>("title")
                    .cloned()
                    .unwrap_or_default();
                let output = submatches
                    .get_one::<String>("output")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| filename.with_extension("md"));
                run_convert(filename, &title, &output);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: snipfmt [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn run_format(filename: &Path, backup: bool, dry_run: bool, output: Option<PathBuf>) {
    let content = match load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        }
    };

    let (result, unterminated) = match format_document(&content) {
        Ok(outcome) => outcome,
        Err(error) => {
            eprintln!(
                "{}",
                report(filename, &content, error.offset(), &error.message())
            );
            exit(1);
        }
    };

    if let Some(warning) = unterminated {
        eprintln!(
            "{}",
            report(filename, &content, warning.offset(), &warning.message())
        );
    }

    if dry_run {
        preview_changes(&content, &result);
        return;
    }

    if backup {
        let saved = backup_path(filename);
        if let Err(error) = std::fs::copy(filename, &saved) {
            eprintln!("error: failed writing {}: {}", saved.display(), error);
            exit(1);
        }
        info!("Saved original to {}", saved.display());
    }

    let target = output.unwrap_or_else(|| filename.to_path_buf());
    if let Err(error) = std::fs::write(&target, &result) {
        eprintln!("error: failed writing {}: {}", target.display(), error);
        exit(1);
    }
    info!("Wrote {}", target.display());
}

fn run_convert(filename: &Path, title: &str, output: &Path) {
    let content = match load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        }
    };

    let (result, unterminated) = match convert_to_markdown(&content, title) {
        Ok(outcome) => outcome,
        Err(error) => {
            eprintln!(
                "{}",
                report(filename, &content, error.offset(), &error.message())
            );
            exit(1);
        }
    };

    if let Some(warning) = unterminated {
        eprintln!(
            "{}",
            report(filename, &content, warning.offset(), &warning.message())
        );
    }

    let blocks = result.matches("```").count() / 2;
    let headings = result
        .lines()
        .filter(|line| line.starts_with('#'))
        .count();
    info!("Converted {} code blocks and {} headings", blocks, headings);

    if let Err(error) = std::fs::write(output, &result) {
        eprintln!("error: failed writing {}: {}", output.display(), error);
        exit(1);
    }
    info!("Wrote {}", output.display());
}

fn backup_path(filename: &Path) -> PathBuf {
    let mut name = filename
        .as_os_str()
        .to_os_string();
    name.push(".backup");
    PathBuf::from(name)
}

/// Print the first few changed lines, old in red and new in green.
/// Pairs lines up by index, so an inserted blank line shifts the rest
/// of the preview; good enough for a quick look before committing.
fn preview_changes(before: &str, after: &str) {
    const LIMIT: usize = 10;

    let old_lines: Vec<&str> = before
        .lines()
        .collect();
    let new_lines: Vec<&str> = after
        .lines()
        .collect();

    let mut shown = 0;
    let count = old_lines
        .len()
        .max(new_lines.len());
    for i in 0..count {
        let old = old_lines
            .get(i)
            .copied()
            .unwrap_or("");
        let new = new_lines
            .get(i)
            .copied()
            .unwrap_or("");
        if old == new {
            continue;
        }
        println!("{} {}", "-".red(), old.red());
        println!("{} {}", "+".green(), new.green());
        shown += 1;
        if shown == LIMIT {
            println!("...");
            break;
        }
    }

    if shown == 0 {
        println!("No changes.");
    }
}
