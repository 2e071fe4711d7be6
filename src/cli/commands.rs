//! CLI command implementation
//!
//! Flow: validate flags → read both CSV sources into rows → run the
//! search pipeline → render. Criteria range checks happen here, at the
//! boundary; the core accepts any syntactically valid criteria.

use std::path::Path;

use crate::assemble::Row;
use crate::engine::SearchPipeline;
use crate::model::SearchCriteria;
use crate::observability::{Logger, Severity};

use super::args::Cli;
use super::errors::{CliError, CliResult};
use super::render;

/// Main CLI entry point
///
/// Parses arguments and executes one search. This is the only function
/// that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let payload = execute(&cli).map_err(|e| {
        if cli.verbose {
            Logger::log(
                Severity::Error,
                "search_failed",
                &[("code", e.code_str()), ("detail", e.message())],
            );
        }
        e
    })?;

    render::write_stdout(&payload)
}

/// Validates flags, loads the sources, runs the pipeline, and returns
/// the rendered payload.
fn execute(cli: &Cli) -> CliResult<String> {
    validate(cli)?;

    let restaurant_rows = read_rows(&cli.restaurant_file)?;
    let cuisine_rows = read_rows(&cli.cuisine_file)?;

    let criteria = build_criteria(cli);
    let pipeline = SearchPipeline::new().with_limit(cli.limit);
    let outcome = pipeline.run(&criteria, &restaurant_rows, &cuisine_rows)?;

    if cli.verbose {
        Logger::log(
            Severity::Info,
            "search_completed",
            &[
                ("matched", &outcome.matched_count.to_string()),
                ("returned", &outcome.len().to_string()),
            ],
        );
    }

    if cli.json {
        Ok(render::format_json(&outcome))
    } else {
        Ok(render::format_table(&outcome.restaurants))
    }
}

/// Criteria range and file checks.
fn validate(cli: &Cli) -> CliResult<()> {
    if let Some(rating) = cli.rating {
        if !(1..=5).contains(&rating) {
            return Err(CliError::validation(format!(
                "rating must be between 1 and 5, got {}",
                rating
            )));
        }
    }
    if let Some(distance) = cli.distance {
        if distance <= 0.0 {
            return Err(CliError::validation(format!(
                "{} is an invalid positive distance",
                distance
            )));
        }
    }
    if let Some(price) = cli.price {
        if price <= 0.0 {
            return Err(CliError::validation(format!(
                "{} is an invalid positive price",
                price
            )));
        }
    }

    check_csv_path(&cli.restaurant_file)?;
    check_csv_path(&cli.cuisine_file)?;

    Ok(())
}

/// A source path must carry a .csv extension and exist.
fn check_csv_path(path: &Path) -> CliResult<()> {
    if path.extension().map_or(true, |ext| ext != "csv") {
        return Err(CliError::validation(format!(
            "{} is not a CSV file",
            path.display()
        )));
    }
    if !path.exists() {
        return Err(CliError::file_not_found(path));
    }

    Ok(())
}

/// Reads a CSV file into header-keyed rows.
fn read_rows(path: &Path) -> CliResult<Vec<Row>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();

    for result in reader.deserialize() {
        let row: Row = result?;
        rows.push(row);
    }

    Ok(rows)
}

fn build_criteria(cli: &Cli) -> SearchCriteria {
    SearchCriteria {
        name: cli.name.clone(),
        max_distance: cli.distance,
        max_price: cli.price,
        min_rating: cli.rating,
        cuisine: cli.cuisine.clone(),
    }
}
