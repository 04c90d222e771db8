//! Console and JSON rendering for the `stdl` binary

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::size::DirUsage;

/// Usage summary as emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct UsageReport<'a> {
    pub root: &'a Path,
    #[serde(flatten)]
    pub usage: &'a DirUsage,
    pub readable: String,
}

/// Print one path per line.
pub fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "{}", path.display())
}

/// Print paths as a pretty JSON array of strings.
pub fn print_paths_json(paths: &[PathBuf]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(paths).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

pub fn print_usage(root: &Path, usage: &DirUsage, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_usage(&mut stdout, root, usage)
}

/// Render a usage summary, bold headings and a cyan total.
pub fn write_usage<W: WriteColor>(out: &mut W, root: &Path, usage: &DirUsage) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    out.set_color(&bold)?;
    writeln!(out, "{}", root.display())?;
    out.reset()?;

    writeln!(out, "Files:        {}", format_number(usage.files as u64))?;
    writeln!(out, "Directories:  {}", format_number(usage.directories as u64))?;

    let mut total = ColorSpec::new();
    total.set_fg(Some(Color::Cyan));
    write!(out, "Size:         ")?;
    out.set_color(&total)?;
    write!(out, "{}", usage.readable())?;
    out.reset()?;
    writeln!(out, " ({} bytes)", format_number(usage.bytes))?;
    Ok(())
}

pub fn print_usage_json(root: &Path, usage: &DirUsage) -> io::Result<()> {
    let report = UsageReport {
        root,
        usage,
        readable: usage.readable(),
    };
    let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

/// Format a number with thousand separators.
fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
