//! src/matrix.rs
//! -------------
//! Row-major R x C matrices with cofactor inversion and the 4x4 affine
//! transform constructors.

use thiserror::Error;

use crate::algebra::{approx_eq, Tuple};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("a matrix needs at least one row and one column")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows { row: usize, expected: usize, found: usize },
    #[error("cannot multiply a {}x{} matrix by a {}x{} one", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch { left: (usize, usize), right: (usize, usize) },
    #[error("{rows}x{columns} matrix is not square")]
    NotSquare { rows: usize, columns: usize },
    #[error("expected a 4x4 transform, got {rows}x{columns}")]
    NotATransform { rows: usize, columns: usize },
    #[error("cannot take a submatrix of a 1x1 matrix")]
    TooSmall,
    #[error("matrix is not invertible")]
    NotInvertible,
    #[error("index ({row}, {column}) is outside the matrix")]
    OutOfBounds { row: usize, column: usize },
}

/// Immutable matrix; equality is approximate per element.
#[derive(Clone, Debug)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn new(input: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let rows = input.len();
        let columns = input.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(MatrixError::Empty);
        }
        if let Some((row, r)) = input.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(MatrixError::RaggedRows { row, expected: columns, found: r.len() });
        }
        Ok(Self { rows, columns, data: input.into_iter().flatten().collect() })
    }

    /// Build from a fixed-size array literal; the shape is checked at compile time.
    pub fn from_rows<const R: usize, const C: usize>(input: [[f64; C]; R]) -> Self {
        Self { rows: R, columns: C, data: input.iter().flatten().copied().collect() }
    }

    pub fn identity() -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_transform(&self) -> bool {
        self.rows == 4 && self.columns == 4
    }

    pub fn at(&self, row: usize, column: usize) -> Result<f64, MatrixError> {
        if row >= self.rows || column >= self.columns {
            return Err(MatrixError::OutOfBounds { row, column });
        }
        Ok(self.get(row, column))
    }

    fn get(&self, row: usize, column: usize) -> f64 {
        self.data[row * self.columns + column]
    }

    fn with(mut self, row: usize, column: usize, v: f64) -> Self {
        self.data[row * self.columns + column] = v;
        self
    }

    /// Row `i` of a 4-column matrix as a tuple.
    pub fn row(&self, i: usize) -> Result<Tuple, MatrixError> {
        if self.columns != 4 {
            return Err(MatrixError::NotATransform { rows: self.rows, columns: self.columns });
        }
        if i >= self.rows {
            return Err(MatrixError::OutOfBounds { row: i, column: 0 });
        }
        Ok(Tuple::new(self.get(i, 0), self.get(i, 1), self.get(i, 2), self.get(i, 3)))
    }

    /// Matrix product. The left row count must match the right column count,
    /// and the inner dimensions must agree.
    pub fn times(&self, m: &Matrix) -> Result<Matrix, MatrixError> {
        if self.rows != m.columns || self.columns != m.rows {
            return Err(MatrixError::DimensionMismatch {
                left: (self.rows, self.columns),
                right: (m.rows, m.columns),
            });
        }
        let mut data = Vec::with_capacity(self.rows * m.columns);
        for i in 0..self.rows {
            for j in 0..m.columns {
                data.push((0..self.columns).map(|k| self.get(i, k) * m.get(k, j)).sum());
            }
        }
        Ok(Matrix { rows: self.rows, columns: m.columns, data })
    }

    /// Each output component is the dot product of a row with `t`.
    pub fn times_tuple(&self, t: Tuple) -> Result<Tuple, MatrixError> {
        if !self.is_transform() {
            return Err(MatrixError::NotATransform { rows: self.rows, columns: self.columns });
        }
        let dot = |i: usize| {
            self.get(i, 0) * t.x
                + self.get(i, 1) * t.y
                + self.get(i, 2) * t.z
                + self.get(i, 3) * t.w
        };
        Ok(Tuple::new(dot(0), dot(1), dot(2), dot(3)))
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.columns {
            for i in 0..self.rows {
                data.push(self.get(i, j));
            }
        }
        Matrix { rows: self.columns, columns: self.rows, data }
    }

    pub fn submatrix(&self, row: usize, column: usize) -> Result<Matrix, MatrixError> {
        if row >= self.rows || column >= self.columns {
            return Err(MatrixError::OutOfBounds { row, column });
        }
        if self.rows < 2 || self.columns < 2 {
            return Err(MatrixError::TooSmall);
        }
        let data = (0..self.rows)
            .filter(|&i| i != row)
            .flat_map(|i| (0..self.columns).filter(move |&j| j != column).map(move |j| (i, j)))
            .map(|(i, j)| self.get(i, j))
            .collect();
        Ok(Matrix { rows: self.rows - 1, columns: self.columns - 1, data })
    }

    pub fn minor(&self, row: usize, column: usize) -> Result<f64, MatrixError> {
        self.submatrix(row, column)?.determinant()
    }

    pub fn cofactor(&self, row: usize, column: usize) -> Result<f64, MatrixError> {
        let minor = self.minor(row, column)?;
        Ok(if (row + column) % 2 == 0 { minor } else { -minor })
    }

    /// Closed form for 2x2, Laplace expansion along row 0 above that.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        if self.rows != self.columns {
            return Err(MatrixError::NotSquare { rows: self.rows, columns: self.columns });
        }
        match self.rows {
            1 => Ok(self.get(0, 0)),
            2 => Ok(self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0)),
            _ => (0..self.columns).try_fold(0.0, |acc, j| -> Result<f64, MatrixError> {
                Ok(acc + self.get(0, j) * self.cofactor(0, j)?)
            }),
        }
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant().is_ok_and(f64::is_normal)
    }

    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let det = self.determinant()?;
        if !det.is_normal() {
            return Err(MatrixError::NotInvertible);
        }
        if self.rows == 1 {
            return Ok(Matrix { rows: 1, columns: 1, data: vec![1.0 / det] });
        }
        let n = self.rows;
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                // transposed write: inverse[j][i] = cofactor(i, j) / det
                data[j * n + i] = self.cofactor(i, j)? / det;
            }
        }
        Ok(Matrix { rows: n, columns: n, data })
    }

    // ── elementary transforms ──────────────────────────────────────────────

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self::identity().with(0, 3, x).with(1, 3, y).with(2, 3, z)
    }

    pub fn scaling(x: f64, y: f64, z: f64) -> Self {
        Self::identity().with(0, 0, x).with(1, 1, y).with(2, 2, z)
    }

    pub fn rotation_x(r: f64) -> Self {
        let (sin, cos) = r.sin_cos();
        Self::identity().with(1, 1, cos).with(1, 2, -sin).with(2, 1, sin).with(2, 2, cos)
    }

    pub fn rotation_y(r: f64) -> Self {
        let (sin, cos) = r.sin_cos();
        Self::identity().with(0, 0, cos).with(0, 2, sin).with(2, 0, -sin).with(2, 2, cos)
    }

    pub fn rotation_z(r: f64) -> Self {
        let (sin, cos) = r.sin_cos();
        Self::identity().with(0, 0, cos).with(0, 1, -sin).with(1, 0, sin).with(1, 1, cos)
    }

    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        Self::identity()
            .with(0, 1, xy)
            .with(0, 2, xz)
            .with(1, 0, yx)
            .with(1, 2, yz)
            .with(2, 0, zx)
            .with(2, 1, zy)
    }

    // ── fluent chain: each call applies after everything before it ─────────

    pub fn translate(&self, x: f64, y: f64, z: f64) -> Result<Self, MatrixError> {
        Self::translation(x, y, z).times(self)
    }

    pub fn scale(&self, x: f64, y: f64, z: f64) -> Result<Self, MatrixError> {
        Self::scaling(x, y, z).times(self)
    }

    pub fn rotate_x(&self, r: f64) -> Result<Self, MatrixError> {
        Self::rotation_x(r).times(self)
    }

    pub fn rotate_y(&self, r: f64) -> Result<Self, MatrixError> {
        Self::rotation_y(r).times(self)
    }

    pub fn rotate_z(&self, r: f64) -> Result<Self, MatrixError> {
        Self::rotation_z(r).times(self)
    }

    pub fn shear(
        &self,
        xy: f64,
        xz: f64,
        yx: f64,
        yz: f64,
        zx: f64,
        zy: f64,
    ) -> Result<Self, MatrixError> {
        Self::shearing(xy, xz, yx, yz, zx, zy).times(self)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Matrix {
    fn eq(&self, m: &Self) -> bool {
        self.rows == m.rows
            && self.columns == m.columns
            && self.data.iter().zip(&m.data).all(|(a, b)| approx_eq(*a, *b))
    }
}
