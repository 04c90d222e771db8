//! CLI entry point for stdl

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use stdl::output::{print_paths_json, print_usage, print_usage_json, write_path};
use stdl::walk::presets;
use stdl::{
    ExtensionFilter, KbSize, Walker, date_range, dir_usage, hms_to_seconds, parse_date,
    parse_human_duration, readable_size_to_bytes, seconds_to_hms, yield_dirs_in, yield_files_in,
};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

/// Media extension presets
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    Audio,
    Image,
    Video,
}

impl Preset {
    fn extensions(self) -> &'static [&'static str] {
        match self {
            Preset::Audio => presets::AUDIO,
            Preset::Image => presets::IMAGE,
            Preset::Video => presets::VIDEO,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "stdl")]
#[command(about = "Duration, directory walking and byte size helpers")]
#[command(version)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins if set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format a second count as HH:MM:SS
    Hms {
        #[arg(allow_hyphen_values = true)]
        seconds: f64,

        /// Include milliseconds (HH:MM:SS.mmm)
        #[arg(long)]
        ms: bool,
    },

    /// Parse HH:MM:SS text back into seconds
    Seconds {
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Accept fractional seconds (HH:MM:SS.mmm)
        #[arg(long)]
        ms: bool,

        /// Also accept spans such as "1h 30m" or "90s"
        #[arg(long, conflicts_with = "ms")]
        human: bool,
    },

    /// List files below a directory, breadth first
    Files {
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Only list files with this extension (can be used multiple times)
        #[arg(short = 'e', long = "ext")]
        ext: Vec<String>,

        /// Add a preset list of media extensions
        #[arg(long, value_enum)]
        preset: Option<Preset>,

        /// Only scan the top directory
        #[arg(long = "no-recursive")]
        no_recursive: bool,

        /// Print paths as found instead of absolute paths
        #[arg(long)]
        relative: bool,

        /// Output a JSON array
        #[arg(long)]
        json: bool,
    },

    /// List directories below a directory, breadth first
    Dirs {
        #[arg(default_value = ".")]
        path: PathBuf,

        #[arg(long = "no-recursive")]
        no_recursive: bool,

        #[arg(long)]
        relative: bool,

        #[arg(long)]
        json: bool,
    },

    /// Count files, directories and bytes below a directory
    Usage {
        #[arg(default_value = ".")]
        path: PathBuf,

        #[arg(long)]
        json: bool,

        /// Control color output: auto, always, never
        #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
        color: ColorMode,
    },

    /// Convert a size such as "1.5 MB" to bytes
    Size {
        text: String,

        /// Use 1000-byte kilobytes instead of 1024
        #[arg(long)]
        decimal: bool,
    },

    /// Print each day from START up to, but not including, END
    Days { start: String, end: String },
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args.command) {
        eprintln!("stdl: {:#}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Hms { seconds, ms } => {
            println!("{}", seconds_to_hms(seconds, ms)?);
        }
        Command::Seconds { text, ms, human } => {
            let seconds = if human {
                parse_human_duration(&text)?
            } else {
                hms_to_seconds(&text, ms)?
            };
            println!("{}", seconds);
        }
        Command::Files {
            path,
            ext,
            preset,
            no_recursive,
            relative,
            json,
        } => {
            let mut filter = ExtensionFilter::new(&ext);
            if let Some(preset) = preset {
                for suffix in preset.extensions() {
                    filter.insert(suffix);
                }
            }
            let filter = (!filter.is_empty()).then_some(filter);
            let walker = yield_files_in(&path, filter, !no_recursive, !relative);
            emit(walker, json).with_context(|| format!("listing files in {}", path.display()))?;
        }
        Command::Dirs {
            path,
            no_recursive,
            relative,
            json,
        } => {
            let walker = yield_dirs_in(&path, !no_recursive, !relative);
            emit(walker, json)
                .with_context(|| format!("listing directories in {}", path.display()))?;
        }
        Command::Usage { path, json, color } => {
            let usage = dir_usage(&path)
                .with_context(|| format!("measuring {}", path.display()))?;
            if json {
                print_usage_json(&path, &usage)?;
            } else {
                print_usage(&path, &usage, should_use_color(color))?;
            }
        }
        Command::Size { text, decimal } => {
            let kb = if decimal {
                KbSize::Decimal
            } else {
                KbSize::Binary
            };
            println!("{}", readable_size_to_bytes(&text, kb)?);
        }
        Command::Days { start, end } => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for day in date_range(start, end) {
                writeln!(out, "{}", day.format("%Y-%m-%d"))?;
            }
        }
    }
    Ok(())
}

/// Stream paths line by line, or collect them for a JSON array.
fn emit(walker: Walker, json: bool) -> Result<()> {
    if json {
        let paths = walker.collect_paths()?;
        print_paths_json(&paths)?;
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in walker {
        write_path(&mut out, &path?)?;
    }
    Ok(())
}
