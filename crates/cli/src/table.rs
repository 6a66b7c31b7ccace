//! Point table I/O: `index,type,x,y` rows, optionally preceded by a summary row.
//!
//! Import is lenient: rows with fewer than four fields, the header row, unknown
//! roles, and non-numeric coordinates are skipped and counted, never fatal.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use anyhow::{Context, Result};
use fence::geom2::{Point, PointSet, Role, TaggedPoint};
use polars::prelude::*;

/// Parsed table plus the number of data rows that were rejected.
#[derive(Debug, Default)]
pub struct Loaded {
    pub points: PointSet,
    pub skipped: usize,
}

pub fn load_points(path: &Path) -> Result<Loaded> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_table(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_table(text: &str) -> Result<Loaded> {
    // Summary and blank rows have fewer than four fields.
    let body: Vec<&str> = text
        .lines()
        .filter(|l| l.split(',').count() >= 4)
        .collect();
    if body.is_empty() {
        return Ok(Loaded::default());
    }
    let df = CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|o| o.with_truncate_ragged_lines(true))
        .into_reader_with_file_handle(Cursor::new(body.join("\n").into_bytes()))
        .finish()?;

    let first = df.column("column_1")?.str()?;
    let kind = df.column("column_2")?.str()?;
    let xs = df.column("column_3")?.str()?;
    let ys = df.column("column_4")?.str()?;

    let mut out = Loaded::default();
    for (((idx, ty), x), y) in first.into_iter().zip(kind).zip(xs).zip(ys) {
        if idx.is_some_and(|s| s.trim().eq_ignore_ascii_case("index")) {
            continue;
        }
        match parse_row(ty, x, y) {
            Some(tp) => out.points.push(tp),
            None => out.skipped += 1,
        }
    }
    Ok(out)
}

fn parse_row(ty: Option<&str>, x: Option<&str>, y: Option<&str>) -> Option<TaggedPoint> {
    let role = Role::parse(ty?)?;
    let x = parse_coord(x?)?;
    let y = parse_coord(y?)?;
    Some(TaggedPoint::new(role, Point::new(x, y)))
}

fn parse_coord(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Write the table in insertion order with 1-based indices.
///
/// `summary`, when given, is written first followed by a blank line.
pub fn save_points(path: &Path, points: &[TaggedPoint], summary: Option<&str>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating table dir {}", parent.display()))?;
        }
    }
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if let Some(line) = summary {
        writeln!(file, "{line}")?;
        writeln!(file)?;
    }
    let mut df = to_frame(points)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn to_frame(points: &[TaggedPoint]) -> PolarsResult<DataFrame> {
    let index: Vec<u32> = (1..=points.len() as u32).collect();
    let kind: Vec<&str> = points.iter().map(|p| p.role().as_str()).collect();
    // Display keeps integral coordinates integral ("4", not "4.0").
    let xs: Vec<String> = points.iter().map(|p| p.point().x.to_string()).collect();
    let ys: Vec<String> = points.iter().map(|p| p.point().y.to_string()).collect();
    df!(
        "index" => index,
        "type" => kind,
        "x" => xs,
        "y" => ys
    )
}
