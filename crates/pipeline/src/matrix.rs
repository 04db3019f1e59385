//! Row-oriented sparse matrices.
//!
//! Only non-zero cells are stored, each row as a column-sorted list. The
//! two wrappers give the user×item and item×feature matrices distinct
//! types so they cannot be swapped at a call site.

use crate::vocabulary::FEATURE_COUNT;

/// Sparse matrix with column-sorted rows
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    n_rows: usize,
    n_cols: usize,
    rows: Vec<Vec<(usize, f32)>>,
}

impl SparseMatrix {
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            rows: vec![Vec::new(); n_rows],
        }
    }

    /// Add `value` to a cell, creating it if absent.
    ///
    /// # Panics
    /// If `row` or `col` is out of bounds.
    pub fn add(&mut self, row: usize, col: usize, value: f32) {
        assert!(row < self.n_rows && col < self.n_cols, "cell ({}, {}) out of bounds", row, col);
        let cells = &mut self.rows[row];
        match cells.binary_search_by_key(&col, |&(c, _)| c) {
            Ok(pos) => cells[pos].1 += value,
            Err(pos) => cells.insert(pos, (col, value)),
        }
    }

    /// Overwrite a cell
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(row < self.n_rows && col < self.n_cols, "cell ({}, {}) out of bounds", row, col);
        let cells = &mut self.rows[row];
        match cells.binary_search_by_key(&col, |&(c, _)| c) {
            Ok(pos) => cells[pos].1 = value,
            Err(pos) => cells.insert(pos, (col, value)),
        }
    }

    /// Value of a cell, zero when not stored or out of bounds
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.rows
            .get(row)
            .and_then(|cells| {
                cells
                    .binary_search_by_key(&col, |&(c, _)| c)
                    .ok()
                    .map(|pos| cells[pos].1)
            })
            .unwrap_or(0.0)
    }

    /// Stored cells of a row as (column, value)
    pub fn row(&self, row: usize) -> &[(usize, f32)] {
        self.rows.get(row).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Iterate all stored cells as (row, column, value)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, cells)| cells.iter().map(move |&(c, v)| (r, c, v)))
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Number of stored cells
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(|r| r.len()).sum()
    }

    /// Fraction of cells stored, in percent; zero for an empty shape
    pub fn density_percent(&self) -> f64 {
        let cells = self.n_rows * self.n_cols;
        if cells == 0 {
            0.0
        } else {
            self.nnz() as f64 / cells as f64 * 100.0
        }
    }
}

/// Users × items interaction counts
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionMatrix(SparseMatrix);

impl InteractionMatrix {
    pub fn new(n_users: usize, n_items: usize) -> Self {
        Self(SparseMatrix::new(n_users, n_items))
    }

    /// Record one interaction; repeats accumulate in the same cell
    pub fn record(&mut self, user: usize, item: usize) {
        self.0.add(user, item, 1.0);
    }

    pub fn n_users(&self) -> usize {
        self.0.shape().0
    }

    pub fn n_items(&self) -> usize {
        self.0.shape().1
    }

    /// Items a user has interacted with
    pub fn items_of(&self, user: usize) -> impl Iterator<Item = usize> + '_ {
        self.0.row(user).iter().map(|&(item, _)| item)
    }

    pub fn as_sparse(&self) -> &SparseMatrix {
        &self.0
    }
}

/// Items × one-hot feature vocabulary
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFeatureMatrix(SparseMatrix);

impl ItemFeatureMatrix {
    pub fn new(n_items: usize) -> Self {
        Self(SparseMatrix::new(n_items, FEATURE_COUNT))
    }

    /// Mark feature columns as present for an item
    pub fn set_features(&mut self, item: usize, columns: &[usize]) {
        for &col in columns {
            self.0.set(item, col, 1.0);
        }
    }

    /// Feature columns present for an item
    pub fn features_of(&self, item: usize) -> impl Iterator<Item = usize> + '_ {
        self.0.row(item).iter().map(|&(col, _)| col)
    }

    /// Items with at least one feature
    pub fn encoded_items(&self) -> usize {
        (0..self.n_items()).filter(|&i| !self.0.row(i).is_empty()).count()
    }

    pub fn n_items(&self) -> usize {
        self.0.shape().0
    }

    pub fn n_features(&self) -> usize {
        self.0.shape().1
    }

    pub fn as_sparse(&self) -> &SparseMatrix {
        &self.0
    }
}
