// ABOUTME: CLI for the wodparse library: parse workout text from arg, file, or stdin
// ABOUTME: Emits a human summary or pretty JSON; exit code reflects usability

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Command-line front end for the workout parser.
//!
//! Usage:
//! ```bash
//! # Parse inline text
//! wodparse "20 min AMRAP
//! 10 Pull-ups"
//!
//! # Parse a file as JSON
//! wodparse --file wod.txt --json
//!
//! # Parse stdin
//! cat wod.txt | wodparse
//! ```

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use wodparse::models::{ConfidenceLevel, ParsedWorkoutResult};
use wodparse::WorkoutParser;

#[derive(Parser)]
#[command(
    name = "wodparse",
    about = "Parse free-form workout descriptions into structured workouts",
    long_about = "Parses workout text into a structured, confidence-scored representation.\n\
                  Reads from the TEXT argument, --file, or stdin, in that order of preference."
)]
struct CliArgs {
    /// Workout text to parse (reads stdin when omitted and --file is not set)
    text: Option<String>,

    /// Read workout text from a file
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// Emit the full result as pretty-printed JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging (debug level)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(usable) => {
            if usable {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(args: &CliArgs) -> Result<bool> {
    let text = read_input(args)?;
    debug!(bytes = text.len(), "read workout text");

    let parser = WorkoutParser::new();
    let result = parser.parse(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result);
    }
    Ok(result.is_usable)
}

fn read_input(args: &CliArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}

fn print_summary(result: &ParsedWorkoutResult) {
    let status = if result.success { "ok" } else { "failed" };
    let level = match result.confidence_level {
        ConfidenceLevel::Perfect => "Perfect",
        ConfidenceLevel::High => "High",
        ConfidenceLevel::Medium => "Medium",
        ConfidenceLevel::Low => "Low",
    };
    println!(
        "parse: {status}  confidence: {:.0}/100 ({level})",
        result.confidence
    );

    if let Some(workout) = result.workout.as_ref().or(result.partial_result.as_ref()) {
        if let Some(name) = &workout.name {
            println!("name: {name}");
        }
        println!("type: {:?}", workout.workout_type);
        if let Some(cap) = workout.time_cap_seconds {
            println!("time cap: {}:{:02}", cap / 60, cap % 60);
        }
        if let Some(rounds) = workout.round_count {
            println!("rounds: {rounds}");
        }
        if let Some(interval) = workout.interval {
            println!(
                "interval: {}s work / {}s rest",
                interval.work_seconds, interval.rest_seconds
            );
        }
        if let Some(scheme) = &workout.rep_scheme {
            println!(
                "rep scheme: {:?} ({:?}, {} total)",
                scheme.reps, scheme.scheme_type, scheme.total_reps
            );
        }
        for movement in &workout.movements {
            let name = movement.identity.as_ref().map_or_else(
                || format!("{} (unrecognized)", movement.line.movement_text),
                |id| id.display_name.clone(),
            );
            let reps = movement
                .line
                .reps
                .map_or_else(String::new, |r| format!("{r} "));
            println!("  - {reps}{name}");
        }
    }

    for error in &result.errors {
        println!("error [{:?}] line {}: {}", error.error_type, error.line_number, error.message);
    }
    for warning in &result.warnings {
        let line = warning.line.map_or_else(String::new, |l| format!(" line {l}"));
        println!("warning [{:?}]{line}: {}", warning.code, warning.message);
        if let Some(suggestion) = &warning.suggestion {
            println!("  suggestion: {suggestion}");
        }
    }
}
