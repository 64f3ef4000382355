//! Error types for the polycommit crate

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolycommitError {
    #[error("field order must be at least 2")]
    InvalidFieldOrder,

    #[error("element has no multiplicative inverse")]
    NonInvertibleElement,

    #[error("division by the zero polynomial")]
    ZeroPolynomialDivisor,

    #[error("polynomial division left a nonzero remainder")]
    InexactDivision,

    #[error("commitment basis has {basis} elements but the polynomial has {coefficients} coefficients")]
    BasisTooSmall { basis: usize, coefficients: usize },

    #[error("interpolation needs matching nonempty point and value lists (got {points} points, {values} values)")]
    InterpolationShape { points: usize, values: usize },
}

pub type Result<T> = std::result::Result<T, PolycommitError>;
