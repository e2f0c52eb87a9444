use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use thaid::config::Config;
use thaid::id::{self, FirstDigitPolicy, ThaiIdGenerator, ID_LENGTH};
use thaid::logger::Logger;
use thaid::{log_info, log_warning};

#[derive(Serialize)]
struct SingleId {
    id: String,
}

#[derive(Serialize)]
struct IdBatch {
    ids: Vec<String>,
}

#[derive(Serialize)]
struct ValidationReport {
    id: String,
    #[serde(rename = "isValid")]
    is_valid: bool,
    message: String,
}

pub fn run_generate(
    count: usize,
    formatted: bool,
    first_digit: Option<FirstDigitPolicy>,
    seed: Option<u64>,
    config: &Config,
    json: bool,
    logger: &Logger,
) -> Result<()> {
    // The engine takes any count; the bound is this caller's policy.
    if count < 1 || count > config.max_count {
        bail!("count must be between 1 and {}", config.max_count);
    }
    let policy = first_digit.unwrap_or(config.first_digit);
    let formatted = formatted || config.formatted;
    let mut generator = match seed {
        Some(seed) => {
            log_info!(logger, "Seeding generator with {}", seed);
            ThaiIdGenerator::seeded(seed, policy)
        }
        None => ThaiIdGenerator::new(policy),
    };
    log_info!(logger, "Generating {} ID(s)...", count);
    let ids: Vec<String> = if formatted {
        (0..count).map(|_| generator.generate_formatted()).collect()
    } else {
        generator.generate_many(count)
    };

    if json {
        if ids.len() == 1 {
            let out = SingleId {
                id: ids[0].clone(),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&IdBatch { ids })?);
        }
    } else {
        for id in &ids {
            println!("{}", id);
        }
    }
    Ok(())
}

pub fn run_validate(
    ids: Vec<String>,
    file: Option<&Path>,
    json: bool,
    logger: &Logger,
) -> Result<()> {
    let mut inputs = ids;
    if let Some(path) = file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read ID file '{}'", path.display()))?;
        let before = inputs.len();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            inputs.push(line.to_string());
        }
        log_info!(
            logger,
            "Read {} ID(s) from {}",
            inputs.len() - before,
            path.display()
        );
    }
    if inputs.is_empty() {
        bail!("no IDs to validate");
    }

    let reports: Vec<ValidationReport> = inputs.iter().map(|raw| check_id(raw)).collect();
    let invalid = reports.iter().filter(|r| !r.is_valid).count();
    if invalid > 0 {
        log_warning!(logger, "{} of {} ID(s) failed validation", invalid, reports.len());
    }

    if json {
        if reports.len() == 1 {
            println!("{}", serde_json::to_string_pretty(&reports[0])?);
        } else {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    } else {
        for report in &reports {
            let verdict = if report.is_valid { "valid" } else { "invalid" };
            println!("{}\t{}\t{}", report.id, verdict, report.message);
        }
    }
    Ok(())
}

pub fn run_format(raw: &str, json: bool) -> Result<()> {
    let formatted =
        id::format_thai_id(raw).with_context(|| format!("cannot format '{}'", raw))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&SingleId { id: formatted })?);
    } else {
        println!("{}", formatted);
    }
    Ok(())
}

// One report per input. Invalidity is a normal result, never an error; the
// echoed id is the formatted rendition only when the cleaned input has the
// right length, otherwise the original string unchanged.
fn check_id(raw: &str) -> ValidationReport {
    let cleaned = id::strip_id(raw);
    let cleaned_len = cleaned.chars().count();
    let is_valid = id::validate_thai_id(raw);
    let shown = if cleaned_len == ID_LENGTH {
        id::format_thai_id(raw).unwrap_or_else(|_| raw.to_string())
    } else {
        raw.to_string()
    };
    let message = if is_valid {
        "valid Thai national ID".to_string()
    } else if cleaned_len != ID_LENGTH {
        format!("expected 13 digits, got {}", cleaned_len)
    } else if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        "ID must contain only digits".to_string()
    } else {
        "check digit does not match".to_string()
    };
    ValidationReport {
        id: shown,
        is_valid,
        message,
    }
}
