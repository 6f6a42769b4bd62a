// ---------------------------------------------------------------------------
// CorrelationTable – named columns of a comparison CSV
// ---------------------------------------------------------------------------

/// A correlation comparison table: one column per expansion factor.
///
/// Values are stored column-major since every consumer walks a whole column
/// at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationTable {
    /// Column labels in file order.
    pub columns: Vec<String>,
    /// `values[c][r]` is row `r` of column `c`; every column has the same length.
    pub values: Vec<Vec<f64>>,
    /// Position in the file of the first retained data row.
    pub first_row: usize,
}

impl CorrelationTable {
    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Iterate `(label, values)` pairs in file order.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .zip(self.values.iter())
            .map(|(name, vals)| (name.as_str(), vals.as_slice()))
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}

// ---------------------------------------------------------------------------
// SamplePair – measured vs expected potential
// ---------------------------------------------------------------------------

/// Two sequences sampled at matching indices.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePair {
    pub measured: Vec<f64>,
    pub expected: Vec<f64>,
}

impl SamplePair {
    pub fn len(&self) -> usize {
        self.measured.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measured.is_empty()
    }
}
