//! Dense symmetric counter matrix.

use crate::domain::PlayerId;
use crate::error::{PairForgeError, Result};

/// Symmetric `n x n` counter matrix indexed by player.
///
/// `increment` always touches both `(a, b)` and `(b, a)`, so the matrix stays
/// symmetric by construction. The diagonal is never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMatrix {
    size: usize,
    cells: Vec<u32>,
}

impl PairMatrix {
    /// Creates an all-zero matrix for `size` players.
    pub fn new(size: usize) -> Self {
        PairMatrix {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Builds a matrix from row vectors, checking shape and symmetry.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(PairForgeError::InvalidSnapshot(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            cells.extend_from_slice(row);
        }
        let matrix = PairMatrix { size, cells };
        if let Some((a, b)) = matrix.first_asymmetry() {
            return Err(PairForgeError::InvalidSnapshot(format!(
                "matrix is not symmetric at ({}, {})",
                a, b
            )));
        }
        Ok(matrix)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, a: PlayerId, b: PlayerId) -> u32 {
        self.cells[a.index() * self.size + b.index()]
    }

    /// Adds one to the `(a, b)` and `(b, a)` cells.
    #[inline]
    pub fn increment(&mut self, a: PlayerId, b: PlayerId) {
        let (a, b) = (a.index(), b.index());
        self.cells[a * self.size + b] += 1;
        self.cells[b * self.size + a] += 1;
    }

    /// Row-major copy of the matrix.
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.size.max(1)).map(<[u32]>::to_vec).collect()
    }

    /// Largest counter over all unordered pairs.
    pub fn max_pair(&self) -> u32 {
        self.upper_triangle().max().unwrap_or(0)
    }

    /// Number of unordered pairs whose counter exceeds `threshold`.
    pub fn count_above(&self, threshold: u32) -> usize {
        self.upper_triangle().filter(|&c| c > threshold).count()
    }

    pub fn is_symmetric(&self) -> bool {
        self.first_asymmetry().is_none()
    }

    fn upper_triangle(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.size).flat_map(move |i| {
            ((i + 1)..self.size).map(move |j| self.cells[i * self.size + j])
        })
    }

    fn first_asymmetry(&self) -> Option<(usize, usize)> {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.cells[i * self.size + j] != self.cells[j * self.size + i] {
                    return Some((i, j));
                }
            }
        }
        None
    }
}
