//! XYZ geometry loading.
//!
//! The first two lines (atom count and comment) are always discarded. Every
//! later line of the form `symbol x y z` becomes `symbol  Z\tx\ty\tz`; lines
//! with fewer than four tokens are dropped and unknown symbols get atomic
//! number 0. Coordinates are copied as text and never parsed.

use crate::domain::{BuilderError, LoadResult};
use crate::elements::{UNKNOWN_ATOMIC_NUMBER, atomic_number};
use crate::serialization::normalize_line_endings;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

pub const GEOMETRY_HEADER_LINES: usize = 2;
pub const MIN_GEOMETRY_TOKENS: usize = 4;

/// Pre-formatted coordinate lines ready for the `$DATA` block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeometryText(String);

impl GeometryText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.0.lines().count()
    }
}

impl Display for GeometryText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeometrySummary {
    pub atoms: usize,
    pub dropped_lines: usize,
    pub unknown_elements: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedGeometry {
    pub text: GeometryText,
    pub summary: GeometrySummary,
}

pub fn format_geometry_line(symbol: &str, x: &str, y: &str, z: &str) -> String {
    format!("{symbol}  {}\t{x}\t{y}\t{z}", atomic_number(symbol))
}

pub fn parse_geometry_source(source: &str) -> ParsedGeometry {
    let normalized = normalize_line_endings(source);
    let mut summary = GeometrySummary::default();
    let mut lines = Vec::new();

    for (index, line) in normalized.lines().enumerate().skip(GEOMETRY_HEADER_LINES) {
        let parts = line.split_whitespace().collect::<Vec<_>>();
        if parts.len() < MIN_GEOMETRY_TOKENS {
            if !parts.is_empty() {
                summary.dropped_lines += 1;
                debug!(
                    line = index + 1,
                    tokens = parts.len(),
                    "dropping geometry line with too few tokens"
                );
            }
            continue;
        }

        let symbol = parts[0];
        if atomic_number(symbol) == UNKNOWN_ATOMIC_NUMBER {
            summary.unknown_elements += 1;
            warn!(
                line = index + 1,
                symbol, "unknown element symbol, writing atomic number 0"
            );
        }

        lines.push(format_geometry_line(symbol, parts[1], parts[2], parts[3]));
    }

    summary.atoms = lines.len();
    ParsedGeometry {
        text: GeometryText(lines.join("\n")),
        summary,
    }
}

pub fn load_geometry_file(path: &Path) -> LoadResult<ParsedGeometry> {
    let source = fs::read_to_string(path).map_err(|source| {
        BuilderError::io_system(
            "IO.GEOMETRY_READ",
            format!(
                "failed to read geometry file '{}': {}",
                path.display(),
                source
            ),
        )
    })?;

    let parsed = parse_geometry_source(&source);
    info!(
        path = %path.display(),
        atoms = parsed.summary.atoms,
        dropped = parsed.summary.dropped_lines,
        "loaded geometry"
    );
    Ok(parsed)
}
