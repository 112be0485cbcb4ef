#![allow(non_snake_case)]

use crate::algebra::*;

impl<T> CscMatrix<T>
where
    T: ScalarT,
{
    /// `CscMatrix` constructor.
    ///
    /// __Example usage__ : To construct the 3 x 3 matrix
    /// ```text
    /// A = [4.  1.  0.]
    ///     [1.  3.  0.]
    ///     [0.  0.  2.]
    /// ```
    ///
    /// ```
    /// use numerica::algebra::CscMatrix;
    ///
    /// let A : CscMatrix<f64> = CscMatrix::new(
    ///    3,                       // m
    ///    3,                       // n
    ///    vec![0, 2, 4, 5],        //colptr
    ///    vec![0, 1, 0, 1, 2],     //rowval
    ///    vec![4., 1., 1., 3., 2.] //nzval
    ///  );
    ///
    /// // optional correctness check
    /// assert!(A.check_format().is_ok());
    /// ```
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__
    /// ensure that rows indices are all in bounds or that data is arranged
    /// such that entries within each column appear in order of increasing
    /// row index.   Use [`check_format`](CscMatrix::check_format) for that.
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// allocate space for a sparse matrix with `nnz` elements
    pub fn spalloc(m: usize, n: usize, nnz: usize) -> Self {
        let mut colptr = vec![0; n + 1];
        let rowval = vec![0; nnz];
        let nzval = vec![T::zero(); nnz];
        colptr[n] = nnz;

        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let colptr = (0usize..=n).collect();
        let rowval = (0usize..n).collect();
        let nzval = vec![T::one(); n];

        CscMatrix::new(n, n, colptr, rowval, nzval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// Conjugate transpose view
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.is_empty()
            || (self.colptr.len() - 1) != self.n
            || self.colptr[self.n] != self.rowval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for colptr monotonicity
        if self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        //check for row values out of bounds
        if !self.rowval.iter().all(|r| r < &self.m) {
            return Err(SparseFormatError::BadRowval);
        }

        //check for rowval monotonicity within each column
        for col in 0..self.n {
            let rng = self.colptr[col]..self.colptr[col + 1];
            if self.rowval[rng].windows(2).any(|c| c[0] >= c[1]) {
                return Err(SparseFormatError::BadRowOrdering);
            }
        }

        Ok(())
    }

    /// Returns the value at the given (row,col) index as an Option.
    /// Returns None if the given index is not a structural nonzero.
    ///
    /// # Panics
    /// Panics if the given index is out of bounds.
    pub fn get_entry(&self, idx: (usize, usize)) -> Option<T> {
        let (row, col) = idx;
        assert!(row < self.nrows() && col < self.ncols());

        let first = self.colptr[col];
        let last = self.colptr[col + 1];
        let rows_in_this_column = &self.rowval[first..last];
        match rows_in_this_column.binary_search(&row) {
            Ok(idx) => Some(self.nzval[first + idx]),
            Err(_) => None,
        }
    }

    /// Dense copy of the matrix.  Entries that are not structural
    /// nonzeros are zero in the result.
    ///
    /// # Panics
    /// Panics if a row index is out of bounds.  Matrices that pass
    /// [`check_format`](CscMatrix::check_format) never panic here.
    pub fn to_dense(&self) -> Matrix<T> {
        let mut M = Matrix::zeros(self.size());
        for col in 0..self.n {
            let rng = self.colptr[col]..self.colptr[col + 1];
            for (&row, &val) in self.rowval[rng.clone()].iter().zip(&self.nzval[rng]) {
                // repeated entries are summed
                M[(row, col)] += val;
            }
        }
        M
    }

    /// Cholesky factorization of this matrix, computed on a dense
    /// copy.  See [`Cholesky::new`].
    ///
    /// # Errors
    /// The matrix data is checked with [`check_format`](CscMatrix::check_format)
    /// first, and a failure is returned as
    /// [`SparseFormat`](DenseFactorizationError::SparseFormat).
    pub fn cholesky(&self) -> Result<Cholesky<T>, DenseFactorizationError> {
        self.check_format()?;
        Cholesky::new(&self.to_dense())
    }
}

impl<T> From<&CscMatrix<T>> for Matrix<T>
where
    T: ScalarT,
{
    fn from(A: &CscMatrix<T>) -> Self {
        A.to_dense()
    }
}

impl<T> ShapedMatrix for CscMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
    fn is_square(&self) -> bool {
        self.m == self.n
    }
}

#[cfg(test)]
fn test_matrix_5x6() -> CscMatrix<f64> {
    // A =
    //[ ⋅   4.0    ⋅    ⋅   12.0]
    //[1.0  5.0    ⋅    ⋅     ⋅ ]
    //[ ⋅   6.0    ⋅    ⋅   13.0]
    //[2.0  7.0  10.0   ⋅     ⋅ ]
    //[ ⋅   8.0  11.0   ⋅   14.0]
    //[3.0  9.0    ⋅    ⋅     ⋅ ]

    CscMatrix::new(
        6,                                                                 // m
        5,                                                                 // n
        vec![0, 3, 9, 11, 11, 14],                                         // colptr
        vec![1, 3, 5, 0, 1, 2, 3, 4, 5, 3, 4, 0, 2, 4],                    // rowval
        vec![1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 13., 14.], // nzval
    )
}

#[test]
fn test_csc_get_entry() {
    let A = test_matrix_5x6();

    assert_eq!(A.get_entry((1, 0)).unwrap(), 1.);
    assert_eq!(A.get_entry((5, 0)).unwrap(), 3.);
    assert_eq!(A.get_entry((0, 1)).unwrap(), 4.);
    assert_eq!(A.get_entry((3, 1)).unwrap(), 7.);
    assert_eq!(A.get_entry((5, 1)).unwrap(), 9.);
    assert_eq!(A.get_entry((3, 2)).unwrap(), 10.);
    assert_eq!(A.get_entry((4, 2)).unwrap(), 11.);
    assert_eq!(A.get_entry((4, 4)).unwrap(), 14.);

    assert!(A.get_entry((0, 0)).is_none());
    assert!(A.get_entry((4, 0)).is_none());
    assert!(A.get_entry((2, 2)).is_none());
    assert!(A.get_entry((1, 3)).is_none());
    assert!(A.get_entry((2, 3)).is_none());
    assert!(A.get_entry((4, 3)).is_none());
    assert!(A.get_entry((3, 4)).is_none());
}

#[test]
fn test_csc_to_dense() {
    let A = test_matrix_5x6();
    let M = A.to_dense();

    assert_eq!(M.size(), (6, 5));
    for col in 0..A.n {
        for row in 0..A.m {
            assert_eq!(M[(row, col)], A.get_entry((row, col)).unwrap_or(0.));
        }
    }
    assert_eq!(Matrix::from(&A), M);
}

#[test]
fn test_csc_check_format() {
    let A = test_matrix_5x6();
    assert!(A.check_format().is_ok());

    let mut B = A.clone();
    B.rowval.swap(0, 1);
    assert_eq!(B.check_format(), Err(SparseFormatError::BadRowOrdering));

    let mut B = A.clone();
    B.rowval[0] = 6;
    assert_eq!(B.check_format(), Err(SparseFormatError::BadRowval));

    let mut B = A.clone();
    B.colptr[1] = 10;
    assert_eq!(B.check_format(), Err(SparseFormatError::BadColptr));

    let mut B = A;
    B.nzval.pop();
    assert_eq!(
        B.check_format(),
        Err(SparseFormatError::IncompatibleDimension)
    );
}

#[test]
fn test_csc_cholesky_bad_format() {
    // out of range row index in the last column
    let A = CscMatrix::<f64>::new(2, 2, vec![0, 1, 2], vec![0, 2], vec![1., 1.]);
    assert_eq!(
        A.cholesky(),
        Err(DenseFactorizationError::SparseFormat(
            SparseFormatError::BadRowval
        ))
    );

    // unsorted rows within a column
    let A = CscMatrix::<f64>::new(2, 2, vec![0, 2, 3], vec![1, 0, 1], vec![1., 4., 3.]);
    assert_eq!(
        A.cholesky(),
        Err(DenseFactorizationError::SparseFormat(
            SparseFormatError::BadRowOrdering
        ))
    );

    let A = CscMatrix::<f64>::new(2, 2, vec![0, 2, 3], vec![0, 1, 1], vec![4., 1., 3.]);
    assert!(A.cholesky().is_ok());
}

#[test]
fn test_csc_identity() {
    let I = CscMatrix::<f64>::identity(4);
    assert_eq!(I.nnz(), 4);
    assert!(I.check_format().is_ok());
    assert_eq!(I.to_dense(), Matrix::identity(4));

    let Z = CscMatrix::<f64>::spalloc(3, 2, 0);
    assert_eq!(Z.nnz(), 0);
    assert_eq!(Z.to_dense(), Matrix::zeros((3, 2)));
}
