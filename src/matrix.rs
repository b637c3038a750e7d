use std::ops::{Index, IndexMut};

/// Traceback tag stored per DP cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trace {
    /// Pre-fill sentinel; never observed once the filler has run.
    #[default]
    Uninitialized,
    AlignmentEnd,
    Match,
    VerticalGap,   // consume profile 2 only
    HorizontalGap, // consume profile 1 only
}

/// Dense row-major grid with `rows = len(profile 2) + 1` and
/// `cols = len(profile 1) + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct DpMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

pub type ScoreMatrix = DpMatrix<f64>;
pub type TracebackMatrix = DpMatrix<Trace>;

impl<T: Copy> DpMatrix<T> {
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<(usize, usize)> for DpMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DpMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.cols + col]
    }
}

impl ScoreMatrix {
    /// Position of the first maximal cell in row-major order.
    pub fn argmax(&self) -> (usize, usize) {
        let mut best = 0;
        for (i, &score) in self.data.iter().enumerate() {
            if score > self.data[best] {
                best = i;
            }
        }
        (best / self.cols, best % self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let mut m = DpMatrix::new(2, 3, 0.0);
        m.set(1, 2, 4.0);
        m[(0, 1)] = 1.5;
        assert_eq!(m.row(0), &[0.0, 1.5, 0.0]);
        assert_eq!(m.row(1), &[0.0, 0.0, 4.0]);
        assert_eq!(m.get(1, 2), 4.0);
    }

    #[test]
    fn test_argmax_prefers_first_maximum() {
        let mut m = ScoreMatrix::new(3, 3, 0.0);
        m[(1, 2)] = 5.0;
        m[(2, 0)] = 5.0;
        assert_eq!(m.argmax(), (1, 2));
    }

    #[test]
    fn test_argmax_of_flat_matrix_is_origin() {
        assert_eq!(ScoreMatrix::new(4, 2, 0.0).argmax(), (0, 0));
    }

    #[test]
    fn test_traceback_defaults_to_uninitialized() {
        let m = TracebackMatrix::new(2, 2, Trace::default());
        assert!(m.iter().all(|&t| t == Trace::Uninitialized));
    }
}
