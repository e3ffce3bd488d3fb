use crate::common::style::SeriesStyle;

/// Column layout of a statistics table.
///
/// Column names are supplied by the schema and never read from the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    /// Names of the columns, in file order
    pub columns: &'static [&'static str],
}

/// Averages written by the simulation: occupation probability, flow probability
/// and mean size of the largest cluster.
pub const AVERAGES_SCHEMA: TableSchema = TableSchema {
    columns: &["p", "p_flow", "s_max"],
};

/// Cluster size distribution: cluster size and number of clusters of that size.
pub const DISTRIBUTION_SCHEMA: TableSchema = TableSchema {
    columns: &["s", "n"],
};

impl TableSchema {
    /// Number of fields every data line must hold
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

/// An in-memory, column-major table of floating point values.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl Table {
    /// Creates an empty table with the columns of the given schema
    pub fn new(schema: &TableSchema) -> Self {
        Self {
            names: schema.columns.iter().map(|name| name.to_string()).collect(),
            columns: vec![Vec::new(); schema.width()],
        }
    }

    /// Appends a row. The caller guarantees `row.len()` matches the column count.
    pub(crate) fn push_row(&mut self, row: &[f64]) {
        debug_assert_eq!(row.len(), self.columns.len());
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.push(*value);
        }
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    /// Returns the values of a named column in row order
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .map(|index| self.columns[index].as_slice())
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Zips two named columns into `(x, y)` points, preserving row order.
    ///
    /// # Returns
    /// * `Some(points)` - One point per row
    /// * `None` - If either column does not exist
    pub fn points(&self, x: &str, y: &str) -> Option<Vec<(f64, f64)>> {
        let xs = self.column(x)?;
        let ys = self.column(y)?;
        Some(xs.iter().copied().zip(ys.iter().copied()).collect())
    }
}

/// A lattice size whose averages table has been read from disk
#[derive(Debug, Clone)]
pub struct LoadedSeries {
    /// Legend label, e.g. `L = 10`
    pub label: String,
    /// Marker glyph and color shared by both average figures
    pub style: SeriesStyle,
    /// Table with the `p`, `p_flow` and `s_max` columns
    pub table: Table,
}

/// A single occupation probability whose distribution table has been read from disk
#[derive(Debug, Clone)]
pub struct LoadedDistribution {
    pub probability: f64,
    pub style: SeriesStyle,
    /// Table with the `s` and `n` columns
    pub table: Table,
}
