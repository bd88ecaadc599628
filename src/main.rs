use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use crossterm::tty::IsTty;

use linesift::{ColorSpec, PatternSet, compile, highlight, sources};

/// Default highlight pair: bold red, attribute reset.
const HIGHLIGHT_START: &str = "\x1b[1;31m";
const HIGHLIGHT_RESET: &str = "\x1b[0m";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to search for; every given pattern must match
    #[arg(short = 'e', long = "regexp", value_name = "PATTERN")]
    patterns: Vec<String>,

    /// Add a built-in named pattern (e.g. digits, word)
    #[arg(short = 'p', long = "preset", value_name = "NAME")]
    presets: Vec<String>,

    /// Ignore case distinctions in patterns
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// When to color matching text
    #[arg(long, value_enum, default_value = "auto", value_name = "WHEN")]
    color: ColorWhen,

    /// Files to search; standard input when none are given
    #[arg(value_name = "FILE")]
    files: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("linesift: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether any line matched.
fn run(args: &Args) -> Result<bool> {
    let mut pattern_sources = args.patterns.clone();
    for name in &args.presets {
        let source = sources::lookup(name).with_context(|| {
            format!(
                "unknown preset: {name} (available: {})",
                sources::names().join(", ")
            )
        })?;
        pattern_sources.push(source.to_string());
    }
    if pattern_sources.is_empty() {
        bail!("no pattern given (use -e or -p)");
    }

    let set = compile(&pattern_sources, args.ignore_case)?;
    let color = match args.color {
        ColorWhen::Always => true,
        ColorWhen::Never => false,
        ColorWhen::Auto => io::stdout().is_tty(),
    };

    let mut matched = false;
    if args.files.is_empty() {
        matched = search(io::stdin().lock(), None, &set, color)?;
    } else {
        let show_names = args.files.len() > 1;
        for path in &args.files {
            let file = File::open(path).with_context(|| format!("cannot open {path}"))?;
            let name = show_names.then_some(path.as_str());
            matched |= search(BufReader::new(file), name, &set, color)?;
        }
    }
    Ok(matched)
}

/// Filter one input stream, printing matching lines to standard output.
/// Returns whether any line matched.
fn search(
    reader: impl BufRead,
    name: Option<&str>,
    set: &PatternSet,
    color: bool,
) -> Result<bool> {
    let spec = ColorSpec::new(HIGHLIGHT_START, HIGHLIGHT_RESET);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut matched = false;

    for line in reader.lines() {
        let line = line.context("read error")?;
        if !set.is_match(&line) {
            continue;
        }
        matched = true;
        let rendered = if color {
            highlight(&line, set, spec)?
        } else {
            line
        };
        match name {
            Some(name) => writeln!(out, "{name}:{rendered}")?,
            None => writeln!(out, "{rendered}")?,
        }
    }
    Ok(matched)
}
