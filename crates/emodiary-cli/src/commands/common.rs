//! Helpers shared by the CLI commands.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use emodiary_core::{load_entries, parse_entries, Config, DiaryEntry, OutputFormat};
use serde::Serialize;

/// Where entries come from and how they are ordered.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Entries file (JSON array); "-" reads stdin. Defaults to journal.path
    #[arg(long, short)]
    pub file: Option<PathBuf>,
    /// The file lists newest entries first
    #[arg(long)]
    pub newest_first: bool,
    /// Print JSON regardless of output.format
    #[arg(long)]
    pub json: bool,
}

impl SourceArgs {
    /// Load entries in oldest-to-newest order.
    pub fn load(&self, config: &Config) -> Result<Vec<DiaryEntry>, Box<dyn std::error::Error>> {
        let path = self
            .file
            .clone()
            .or_else(|| config.journal_path())
            .ok_or("no entries file: pass --file or set journal.path")?;

        let mut entries = if path.as_os_str() == "-" {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            parse_entries(&raw)?
        } else {
            load_entries(&path)?
        };

        let reversed = self.newest_first || config.journal.newest_first;
        if reversed {
            entries.reverse();
        }
        tracing::debug!(path = %path.display(), count = entries.len(), reversed, "entries ready");
        Ok(entries)
    }

    pub fn format(&self, config: &Config) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            config.output.format
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Horizontal bar for a 0-100 percentage.
pub fn bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(0, 10), "..........");
        assert_eq!(bar(50, 10), "#####.....");
        assert_eq!(bar(100, 4), "####");
        assert_eq!(bar(250, 4), "####");
    }
}
