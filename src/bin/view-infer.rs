//! # View Inference CLI
//!
//! A command-line utility that reads JSON payload files and prints the view
//! types the inference engine suggests for each.
//!
//! ## Usage
//!
//! ### Analyze a Single Payload
//!
//! ```bash
//! cargo run --bin view-infer payloads/sites.json
//! ```
//!
//! ### Analyze All Payloads in a Directory
//!
//! ```bash
//! cargo run --bin view-infer ./payloads/ --limit 5
//! ```
//!
//! ## Output Example
//!
//! ```text
//! Analyzing payload file: payloads/sites.json
//!   1. map (0.80): Array of objects with lat/lon fields
//!   2. datatable (0.50): Array of objects, default table fallback
//!
//! Shape Summary:
//!   Kind: array
//!   GeoJSON: no
//!   Tabular: yes
//!   Time series: no
//!   Hierarchical: no
//!   Numeric heavy: no
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: Every file was read and analyzed
//! - `1`: Bad arguments, or a file could not be read or parsed
//!
//! Set `RUST_LOG=debug` to see the engine's classification trace.

use serde_json::Value;
use std::env;
use std::fs;
use std::path::Path;
use std::process;
use view_inference::{InferenceError, InferenceResult, ShapeProfile, ViewInferrer};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("view-infer");

    let (path, inferrer) = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Usage: {} <payload-file-or-directory> [--limit N]", program);
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {} payloads/sites.json", program);
            eprintln!("  {} ./payloads/ --limit 5", program);
            process::exit(1);
        }
    };

    let path = Path::new(&path);
    if path.is_file() {
        analyze_single_file(path, &inferrer);
    } else if path.is_dir() {
        analyze_directory(path, &inferrer);
    } else {
        eprintln!(
            "Error: '{}' is not a valid file or directory",
            path.display()
        );
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> InferenceResult<(String, ViewInferrer)> {
    let mut path = None;
    let mut builder = ViewInferrer::builder();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--limit" => {
                let value = iter
                    .next()
                    .ok_or_else(|| InferenceError::invalid_arguments("--limit needs a value"))?;
                let limit = value.parse::<usize>().map_err(|_| {
                    InferenceError::invalid_arguments(format!("invalid limit '{}'", value))
                })?;
                builder = builder.with_default_limit(limit);
            }
            other if path.is_none() => path = Some(other.to_string()),
            other => {
                return Err(InferenceError::invalid_arguments(format!(
                    "unexpected argument '{}'",
                    other
                )));
            }
        }
    }

    let path = path.ok_or_else(|| InferenceError::invalid_arguments("missing payload path"))?;
    Ok((path, builder.build()?))
}

fn analyze_single_file(file_path: &Path, inferrer: &ViewInferrer) {
    println!("Analyzing payload file: {}", file_path.display());

    match load_payload(file_path) {
        Ok(payload) => {
            print_suggestions(&payload, inferrer, "  ");
            print_shape_summary(&ShapeProfile::of(&payload), "");
        }
        Err(e) => {
            eprintln!("❌ Failed to analyze payload: {}", e);
            process::exit(1);
        }
    }
}

fn analyze_directory(dir_path: &Path, inferrer: &ViewInferrer) {
    println!("Analyzing payloads in directory: {}", dir_path.display());

    let entries = match fs::read_dir(dir_path) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading directory: {}", e);
            process::exit(1);
        }
    };

    let mut paths: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut analyzed_count = 0;
    let mut error_count = 0;

    for path in &paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("\nAnalyzing: {}", name);

        match load_payload(path) {
            Ok(payload) => {
                print_suggestions(&payload, inferrer, "    ");
                print_shape_summary(&ShapeProfile::of(&payload), "    ");
                analyzed_count += 1;
            }
            Err(e) => {
                eprintln!("  ❌ Invalid - {}", e);
                error_count += 1;
            }
        }
    }

    println!("\nAnalysis Summary:");
    println!("  Analyzed payloads: {}", analyzed_count);
    println!("  Invalid payloads: {}", error_count);

    if error_count > 0 {
        process::exit(1);
    }
}

fn load_payload(file_path: &Path) -> InferenceResult<Value> {
    let content = fs::read_to_string(file_path)?;
    Ok(serde_json::from_str(&content)?)
}

fn print_suggestions(payload: &Value, inferrer: &ViewInferrer, indent: &str) {
    let suggestions = inferrer.suggest(payload);
    if suggestions.is_empty() {
        println!("{}(no suggestions requested)", indent);
    }
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!("{}{}. {}", indent, i + 1, suggestion);
    }
}

fn print_shape_summary(profile: &ShapeProfile, indent: &str) {
    for line in shape_summary_lines(profile) {
        println!("{}{}", indent, line);
    }
}

fn shape_summary_lines(profile: &ShapeProfile) -> Vec<String> {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    vec![
        String::new(),
        "Shape Summary:".to_string(),
        format!("  Kind: {}", profile.kind),
        format!("  GeoJSON: {}", yes_no(profile.geojson)),
        format!("  Tabular: {}", yes_no(profile.tabular)),
        format!("  Time series: {}", yes_no(profile.time_series)),
        format!("  Hierarchical: {}", yes_no(profile.hierarchical)),
        format!("  Numeric heavy: {}", yes_no(profile.numeric_heavy)),
    ]
}
