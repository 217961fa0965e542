use crate::report::Format;
use anyhow::{Context, Result};
use mac_proto::MacAddress;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing::{debug, info, warn};

#[derive(Debug, Default, Serialize)]
pub struct CheckSummary {
    pub checked: usize,
    pub invalid: Vec<LineError>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct LineError {
    pub line: usize,
    pub input: String,
    pub kind: &'static str,
    pub error: String,
}

pub fn handle(file: Option<&str>, format: Format) -> Result<bool> {
    let summary = match file {
        Some(path) => {
            let reader = BufReader::new(
                File::open(path).with_context(|| format!("Failed to open {}", path))?,
            );
            info!("Checking addresses from {}", path);
            check_lines(reader)?
        }
        None => {
            info!("Checking addresses from standard input");
            check_lines(std::io::stdin().lock())?
        }
    };

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        Format::Text => {
            for failure in &summary.invalid {
                println!("line {}: {}", failure.line, failure.error);
            }
            println!(
                "{} addresses checked, {} invalid",
                summary.checked,
                summary.invalid.len()
            );
        }
    }

    Ok(summary.invalid.is_empty())
}

/// Validate one address per line, skipping blank lines and `#` comments
///
/// Each line is trimmed first; the address itself must then match the
/// strict grammar.
pub fn check_lines<R: BufRead>(reader: R) -> Result<CheckSummary> {
    let mut summary = CheckSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", index + 1))?;
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }

        summary.checked += 1;
        match MacAddress::from_text(entry) {
            Ok(mac) => debug!("line {}: {}", index + 1, mac),
            Err(e) => {
                warn!("line {}: {}", index + 1, e);
                summary.invalid.push(LineError {
                    line: index + 1,
                    input: entry.to_string(),
                    kind: e.kind(),
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(summary)
}
