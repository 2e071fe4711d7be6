//! Result rendering
//!
//! Two output shapes:
//! - a fixed-width table for humans (the default)
//! - a JSON envelope for machines (`--json`)
//!
//! Rendering accepts any ordered record sequence and imposes no
//! ordering of its own.

use std::fmt::Write as _;
use std::io::{self, Write};

use serde_json::json;

use crate::engine::SearchOutcome;
use crate::model::Restaurant;

use super::errors::CliResult;

/// Renders records as a fixed-width table.
pub fn format_table(restaurants: &[Restaurant]) -> String {
    let mut out = String::new();

    out.push('\n');
    let _ = writeln!(
        out,
        "{:<40}{:<20}{:<15}{:<19}{:<8}",
        "Name", "Rating (stars)", "Distance (mi)", "Avg. Price ($)", "Cuisine"
    );

    for r in restaurants {
        let _ = writeln!(
            out,
            "{:<40}{:<20}{:<15}{:<19}{:<8}",
            r.name, r.rating, r.distance, r.price, r.cuisine
        );
    }

    out.push('\n');
    out
}

/// Renders the outcome as a JSON envelope.
pub fn format_json(outcome: &SearchOutcome) -> String {
    json!({
        "status": "ok",
        "data": {
            "restaurants": outcome.restaurants,
            "matched_count": outcome.matched_count,
            "limit_applied": outcome.limit_applied,
        }
    })
    .to_string()
}

/// Writes a rendered payload to stdout, newline-terminated.
pub fn write_stdout(payload: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    stdout.write_all(payload.as_bytes())?;
    if !payload.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;

    Ok(())
}
