//! Parser for the flat fitness dataset.
//!
//! The dataset is a comma-separated file with a header row. Columns are
//! located by header name, so extra columns and column order don't matter:
//! `Goal,Diet_Type,Meal_Type,Food_Item,Category,Calories (kcal),...`
//!
//! Fields may be double-quoted; a doubled quote inside a quoted field is a
//! literal quote. Records never span lines.

use crate::error::{DataLoadError, Result};
use crate::types::{columns, FitnessRecord};
use rayon::prelude::*;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read the whole file as UTF-8, dropping a leading byte-order mark.
fn read_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    Ok(content
        .strip_prefix('\u{feff}')
        .map(str::to_string)
        .unwrap_or(content))
}

/// Split one CSV line into trimmed fields
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Positions of the required columns within a header row
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    width: usize,
    positions: [usize; columns::REQUIRED.len()],
}

impl ColumnLayout {
    /// Locate every required column in `header`
    pub fn from_header(header: &[String], file: &str) -> Result<Self> {
        let mut positions = [0; columns::REQUIRED.len()];
        for (slot, name) in positions.iter_mut().zip(columns::REQUIRED) {
            *slot = header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DataLoadError::MissingColumn {
                    file: file.to_string(),
                    column: name.to_string(),
                })?;
        }
        Ok(Self {
            width: header.len(),
            positions,
        })
    }

    fn field<'a>(&self, fields: &'a [String], column: usize) -> &'a str {
        &fields[self.positions[column]]
    }
}

/// Parse a numeric cell; an empty cell is a missing value (NaN)
fn parse_number(raw: &str, column: &str, file: &str, line: usize) -> Result<f64> {
    if raw.is_empty() {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid {}: '{}' ({})", column, raw, e),
    })
}

/// Parse a single data line into a record
fn parse_record(line: &str, line_no: usize, layout: &ColumnLayout, file: &str) -> Result<FitnessRecord> {
    let fields = split_line(line);
    if fields.len() != layout.width {
        return Err(DataLoadError::FieldCountMismatch {
            expected: layout.width,
            found: fields.len(),
            line: line_no,
        });
    }

    // Index order matches columns::REQUIRED
    let text = |i: usize| layout.field(&fields, i).to_string();
    let number = |i: usize| parse_number(layout.field(&fields, i), columns::REQUIRED[i], file, line_no);

    Ok(FitnessRecord {
        goal: text(0),
        diet_type: text(1),
        meal_type: text(2),
        food_item: text(3),
        category: text(4),
        calories: number(5)?,
        protein: number(6)?,
        carbohydrates: number(7)?,
        fat: number(8)?,
        exercise: text(9),
        calories_burned: number(10)?,
        duration: number(11)?,
        intensity: number(12)?,
        heart_rate: number(13)?,
    })
}

/// Parse dataset text (header + rows) into records in file order
pub fn parse_records(content: &str, file: &str) -> Result<Vec<FitnessRecord>> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines.next().ok_or_else(|| DataLoadError::EmptyFile {
        file: file.to_string(),
    })?;
    let layout = ColumnLayout::from_header(&split_line(header), file)?;

    // Rows are independent; rayon keeps the input order when collecting
    let rows: Vec<(usize, &str)> = lines.collect();
    rows.par_iter()
        .map(|&(line_no, line)| parse_record(line, line_no, &layout, file))
        .collect()
}

/// Parse the dataset file at `path`
pub fn parse_dataset(path: &Path) -> Result<Vec<FitnessRecord>> {
    let content = read_text(path)?;
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    parse_records(&content, &file)
}
