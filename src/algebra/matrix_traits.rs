use crate::algebra::MatrixShape;

/// Matrices with a fixed number of rows and columns
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// orientation of the data relative to its storage
    fn shape(&self) -> MatrixShape;
    /// `(nrows, ncols)`
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true if `self.nrows() == self.ncols()`
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
