//! Table parsing for simulation output files
//!
//! The simulation writes plain text tables: one header line, then one row per line with
//! whitespace separated values. The header line is always consumed and discarded; column
//! names come from the [`TableSchema`] instead.

use crate::common::data_structures::{Table, TableSchema};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name reported in errors for tables that were not read from disk
const IN_MEMORY_SOURCE: &str = "<input>";

/// Errors that can occur during table parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file {}: {source}", file.display())]
    FileRead {
        file: PathBuf,
        source: std::io::Error,
    },

    #[error("Input file {} is empty (expected at least a header line)", file.display())]
    Empty { file: PathBuf },

    #[error("{}:{line}: expected {expected} columns, found {found}", file.display())]
    ColumnCount {
        file: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{}:{line}: value '{value}' in column '{column}' is not a number", file.display())]
    InvalidNumber {
        file: PathBuf,
        line: usize,
        column: &'static str,
        value: String,
    },
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Reads a whitespace delimited table from disk
///
/// # Arguments
/// * `file_path` - Path to the table
/// * `schema` - Column layout the file is expected to follow
///
/// # Returns
/// * `Ok(Table)` - Every data row of the file, in file order
/// * `Err(ParsingError)` - If the file could not be read or a row is malformed
pub fn parse_table(file_path: &Path, schema: &TableSchema) -> Result<Table> {
    let text = fs::read_to_string(file_path).map_err(|source| ParsingError::FileRead {
        file: file_path.to_path_buf(),
        source,
    })?;

    let table = parse_lines(&text, schema, file_path)?;
    log::debug!(
        "Loaded {} rows from {}",
        table.row_count(),
        file_path.display()
    );
    Ok(table)
}

/// Parses a table that is already in memory, using the same rules as [`parse_table`]
pub fn parse_table_str(text: &str, schema: &TableSchema) -> Result<Table> {
    parse_lines(text, schema, Path::new(IN_MEMORY_SOURCE))
}

fn parse_lines(text: &str, schema: &TableSchema, file: &Path) -> Result<Table> {
    // Line numbers are counted before blank lines are dropped.
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    // The first non-blank line is the header, whatever it contains.
    if lines.next().is_none() {
        return Err(ParsingError::Empty {
            file: file.to_path_buf(),
        });
    }

    let mut table = Table::new(schema);
    let mut row = Vec::with_capacity(schema.width());

    for (index, line) in lines {
        let line_number = index + 1;

        row.clear();
        for (column, field) in line.split_whitespace().enumerate() {
            let Some(&name) = schema.columns.get(column) else {
                return Err(ParsingError::ColumnCount {
                    file: file.to_path_buf(),
                    line: line_number,
                    expected: schema.width(),
                    found: line.split_whitespace().count(),
                });
            };

            let value = field
                .parse::<f64>()
                .map_err(|_| ParsingError::InvalidNumber {
                    file: file.to_path_buf(),
                    line: line_number,
                    column: name,
                    value: field.to_string(),
                })?;
            row.push(value);
        }

        if row.len() != schema.width() {
            return Err(ParsingError::ColumnCount {
                file: file.to_path_buf(),
                line: line_number,
                expected: schema.width(),
                found: row.len(),
            });
        }

        table.push_row(&row);
    }

    Ok(table)
}
