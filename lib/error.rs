//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Every failure here is a local validation failure detected at the boundary of
//! a constructor or operation; none of them are transient.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;
use crate::MAX_DIM;

pub type BoxResult<T> = Result<T, BoxError>;

/// Returned when an operation requiring a fixed number of spatial dimensions
/// encounters a value of a different arity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("expected {expected} spatial dimension(s); got {got}")]
pub struct DimError {
    pub expected: usize,
    pub got: usize,
}

impl DimError {
    pub(crate) fn check(expected: usize, got: usize) -> Result<(), Self> {
        (expected == got).then_some(()).ok_or(Self { expected, got })
    }
}

/// Returned when box side lengths are invalid.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum GeometryError {
    /// Returned when the number of side lengths is 0 or greater than
    /// [`MAX_DIM`].
    #[error("a box must have between 1 and 3 side lengths; got {0}")]
    BadDimension(usize),

    /// Returned when a side length is non-positive or non-finite.
    #[error("side lengths must be positive and finite; got {length} on axis {axis}")]
    BadLength { axis: usize, length: f64 },
}

impl GeometryError {
    pub(crate) fn check_dim(dim: usize) -> Result<(), Self> {
        (1..=MAX_DIM).contains(&dim).then_some(()).ok_or(Self::BadDimension(dim))
    }

    pub(crate) fn check_length(axis: usize, length: f64) -> Result<(), Self> {
        (length.is_finite() && length > 0.0)
            .then_some(())
            .ok_or(Self::BadLength { axis, length })
    }
}

/// Returned from all fallible operations in this crate.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum BoxError {
    /// [`GeometryError`]
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),

    /// Returned when a particle mass is non-positive or non-finite.
    #[error("particle mass must be positive and finite; got {0}")]
    InvalidMass(f64),

    /// [`DimError`]
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(#[from] DimError),

    /// Returned when a quantum number is negative.
    #[error("quantum numbers must be non-negative; got {value} on axis {axis}")]
    InvalidQuantumNumber { axis: usize, value: i64 },

    /// Returned when a quantum-number range has `min > max`.
    #[error("empty quantum-number range [{min}, {max}] on axis {axis}")]
    EmptyRange { axis: usize, min: u32, max: u32 },

    /// Returned when a comparison tolerance is negative or non-finite.
    #[error("tolerances must be non-negative and finite; got {0}")]
    InvalidTolerance(f64),

    /// Returned when a sampling grid has fewer than two points along an axis.
    #[error("sampling grids require at least 2 points per axis; got {0}")]
    TooFewPoints(usize),
}

impl BoxError {
    pub(crate) fn check_mass(mass: f64) -> BoxResult<()> {
        (mass.is_finite() && mass > 0.0)
            .then_some(())
            .ok_or(Self::InvalidMass(mass))
    }

    pub(crate) fn check_quantum_number(axis: usize, value: i64)
        -> BoxResult<u32>
    {
        u32::try_from(value)
            .map_err(|_| Self::InvalidQuantumNumber { axis, value })
    }

    pub(crate) fn check_range(axis: usize, min: u32, max: u32)
        -> BoxResult<()>
    {
        (min <= max).then_some(()).ok_or(Self::EmptyRange { axis, min, max })
    }

    pub(crate) fn check_tolerance(tol: f64) -> BoxResult<()> {
        (tol.is_finite() && tol >= 0.0)
            .then_some(())
            .ok_or(Self::InvalidTolerance(tol))
    }

    pub(crate) fn check_points(npoints: usize) -> BoxResult<()> {
        (npoints >= 2).then_some(()).ok_or(Self::TooFewPoints(npoints))
    }

    /// Return `true` if `self` is `InvalidGeometry`.
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::InvalidGeometry(..))
    }

    /// Return `true` if `self` is `DimensionMismatch`.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch(..))
    }

    /// Return `true` if `self` is `EmptyRange`.
    pub fn is_empty_range(&self) -> bool {
        matches!(self, Self::EmptyRange { .. })
    }
}
