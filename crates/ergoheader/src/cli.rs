//! CLI output helpers
//!
//! Formats simulation frames and configuration for the terminal.

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use ergoheader_core::{Frame, SiteConfig, VisibilityMode};
use ergoheader_web::render::Part;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug)]
pub enum CliError {
    UnknownPart { part: String },
    EmptyScript { path: String },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::UnknownPart { part } => write!(
                f,
                "Unknown part '{}' (expected header, title, footer or all)",
                part
            ),
            CliError::EmptyScript { path } => {
                write!(f, "Script {} contains no commands", path)
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Parse the `--part` argument
pub fn parse_part(value: &str) -> Result<Part, CliError> {
    match value {
        "header" => Ok(Part::Header),
        "title" => Ok(Part::Title),
        "footer" => Ok(Part::Footer),
        "all" => Ok(Part::All),
        other => Err(CliError::UnknownPart {
            part: other.to_string(),
        }),
    }
}

// ============================================================================
// Formatting
// ============================================================================

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "-"
    }
}

/// Format simulation frames as table (human) or JSON
pub fn format_frames(frames: &[Frame], json: bool, no_color: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(frames).context("Failed to serialize frames as JSON");
    }

    if frames.is_empty() {
        return Ok("No steps.".to_string());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers = [
        "Line", "Step", "Offset", "Up dist", "Up", "Past", "Hover", "Mode", "Menu",
    ];
    if no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }

    for frame in frames {
        let mode = frame.mode.to_string();
        let mode_cell = match (no_color, frame.mode) {
            (false, VisibilityMode::Minimized) => Cell::new(mode).fg(Color::Yellow),
            _ => Cell::new(mode),
        };

        table.add_row(Row::from(vec![
            Cell::new(frame.line),
            Cell::new(&frame.action),
            Cell::new(frame.header.last_scroll_y),
            Cell::new(frame.header.scroll_up_distance),
            Cell::new(yes_no(frame.header.is_scrolling_up)),
            Cell::new(yes_no(frame.header.is_minimized)),
            Cell::new(yes_no(frame.header.is_header_hovered)),
            mode_cell,
            Cell::new(frame.menu.to_string()),
        ]));
    }

    Ok(table.to_string())
}

/// Format the effective configuration as TOML (human) or JSON
pub fn format_config(config: &SiteConfig, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(config).context("Failed to serialize config as JSON")
    } else {
        toml::to_string_pretty(config).context("Failed to serialize config as TOML")
    }
}
