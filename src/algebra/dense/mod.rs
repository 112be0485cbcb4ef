mod types;
pub use self::types::*;
mod core;

mod blaslike_traits;
pub use blaslike_traits::*;
mod gemm;
mod gemv;
mod trsm;

mod settings;
pub use settings::*;
mod cholesky;
pub use cholesky::*;
