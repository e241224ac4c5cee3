//! Evaluation of the analytic eigenfunctions of the particle in a box.
//!
//! The eigenfunction for quantum numbers *n*<sub>d</sub> is a product of
//! one-dimensional standing waves,
//! ```text
//!           ┌──────
//! ψ(x) = Π ╲│2 / L_d  sin(n_d π x_d / L_d)
//!        d
//! ```
//! for points inside the box (0 ≤ *x*<sub>d</sub> ≤ *L*<sub>d</sub>) and
//! vanishes outside. Only the sampled values are computed here; rendering is
//! left to the caller.
//!
//! ```
//! use pibox::{ BoxGeometry, wavefunction::sample_1d, utils::wf_norm };
//!
//! let line = BoxGeometry::line(2.0).unwrap();
//! let (x, psi) = sample_1d(&line, &[3].into(), 1001).unwrap();
//! assert!((wf_norm(&psi, x[1] - x[0]) - 1.0).abs() < 1e-4);
//! ```

use std::f64::consts::PI;
use ndarray as nd;
use crate::{
    eigen::QuantumState,
    error::{ BoxError, BoxResult, DimError },
    geometry::BoxGeometry,
};

/// Evaluate a single one-dimensional eigenfunction of a box of length `length`
/// at `x`.
pub fn eigenfunction_1d(length: f64, n: u32, x: f64) -> f64 {
    if (0.0..=length).contains(&x) {
        (2.0 / length).sqrt() * (f64::from(n) * PI * x / length).sin()
    } else {
        0.0
    }
}

/// An eigenfunction bound to a particular box.
#[derive(Clone, Debug)]
pub struct Wavefunction<'a> {
    geometry: &'a BoxGeometry,
    state: QuantumState,
}

impl<'a> Wavefunction<'a> {
    /// Create a new `Wavefunction`, failing with
    /// [`BoxError::DimensionMismatch`] if `state` does not have one quantum
    /// number per box dimension.
    pub fn new(geometry: &'a BoxGeometry, state: QuantumState) -> BoxResult<Self> {
        DimError::check(geometry.dim(), state.dim())?;
        Ok(Self { geometry, state })
    }

    /// Get a reference to the quantum state.
    pub fn state(&self) -> &QuantumState { &self.state }

    /// Evaluate the eigenfunction at a point, which must have one coordinate
    /// per box dimension.
    pub fn eval(&self, point: &[f64]) -> BoxResult<f64> {
        DimError::check(self.geometry.dim(), point.len())?;
        let psi: f64
            = self.geometry.lengths().iter()
            .zip(self.state.numbers())
            .zip(point)
            .map(|((&l, &n), &x)| eigenfunction_1d(l, n, x))
            .product();
        Ok(psi)
    }

    /// Evaluate the probability density at a point.
    pub fn density(&self, point: &[f64]) -> BoxResult<f64> {
        self.eval(point).map(|psi| psi * psi)
    }
}

// sampling grid spanning [0, length] along one axis
fn axis_grid(length: f64, npoints: usize) -> BoxResult<nd::Array1<f64>> {
    BoxError::check_points(npoints)?;
    Ok(nd::Array1::linspace(0.0, length, npoints))
}

/// Sample an eigenfunction of a one-dimensional box on `npoints` evenly spaced
/// points spanning the box, returning the coordinate and wavefunction arrays.
pub fn sample_1d(geometry: &BoxGeometry, state: &QuantumState, npoints: usize)
    -> BoxResult<(nd::Array1<f64>, nd::Array1<f64>)>
{
    DimError::check(1, geometry.dim())?;
    DimError::check(1, state.dim())?;
    let l = geometry.lengths()[0];
    let n = state.numbers()[0];
    let x = axis_grid(l, npoints)?;
    let psi = x.mapv(|xk| eigenfunction_1d(l, n, xk));
    Ok((x, psi))
}

/// Sample an eigenfunction of a two-dimensional box on an evenly spaced grid of
/// `npoints.0` × `npoints.1` points, returning the coordinate arrays along
/// each axis and the wavefunction array indexed as `[ix, iy]`.
pub fn sample_2d(
    geometry: &BoxGeometry,
    state: &QuantumState,
    npoints: (usize, usize),
) -> BoxResult<(nd::Array1<f64>, nd::Array1<f64>, nd::Array2<f64>)>
{
    DimError::check(2, geometry.dim())?;
    DimError::check(2, state.dim())?;
    let (lx, ly) = (geometry.lengths()[0], geometry.lengths()[1]);
    let (nx, ny) = (state.numbers()[0], state.numbers()[1]);
    let x = axis_grid(lx, npoints.0)?;
    let y = axis_grid(ly, npoints.1)?;
    let psi_x = x.mapv(|xk| eigenfunction_1d(lx, nx, xk));
    let psi_y = y.mapv(|yk| eigenfunction_1d(ly, ny, yk));
    let psi: nd::Array2<f64>
        = nd::Array2::from_shape_fn(
            (npoints.0, npoints.1),
            |(i, j)| psi_x[i] * psi_y[j],
        );
    Ok((x, y, psi))
}

/// Square the values of a sampled wavefunction.
pub fn probability_density<S, D>(psi: &nd::ArrayBase<S, D>) -> nd::Array<f64, D>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    psi.mapv(|p| p * p)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use crate::utils::{ trapz_2d, wf_dot, wf_norm };
    use super::*;

    #[test]
    fn one_dimensional_normalized() {
        let line = BoxGeometry::line(1.5).unwrap();
        for n in 1..=4 {
            let (x, psi) = sample_1d(&line, &[n].into(), 4001).unwrap();
            assert_abs_diff_eq!(wf_norm(&psi, x[1] - x[0]), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn one_dimensional_orthogonal() {
        let line = BoxGeometry::line(1.0).unwrap();
        let (x, psi1) = sample_1d(&line, &[1].into(), 4001).unwrap();
        let (_, psi3) = sample_1d(&line, &[3].into(), 4001).unwrap();
        assert_abs_diff_eq!(wf_dot(&psi1, &psi3, x[1] - x[0]), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn boundary_values_vanish() {
        let line = BoxGeometry::line(2.0).unwrap();
        let (_, psi) = sample_1d(&line, &[2].into(), 101).unwrap();
        assert_abs_diff_eq!(psi[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(psi[100], 0.0, epsilon = 1e-12);
        assert_eq!(eigenfunction_1d(2.0, 1, -0.1), 0.0);
        assert_eq!(eigenfunction_1d(2.0, 1, 2.1), 0.0);
    }

    #[test]
    fn two_dimensional_density_integrates_to_one() {
        let rect = BoxGeometry::rect(1.0, 2.0).unwrap();
        let (x, y, psi) = sample_2d(&rect, &[2, 1].into(), (801, 801)).unwrap();
        let rho = probability_density(&psi);
        let total = trapz_2d(&rho, x[1] - x[0], y[1] - y[0]);
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-5);
        assert_eq!(psi.dim(), (801, 801));
    }

    #[test]
    fn point_evaluation() {
        let cube = BoxGeometry::cube(3, 1.0).unwrap();
        let wf = Wavefunction::new(&cube, [1, 1, 1].into()).unwrap();
        let expected = 2.0_f64.sqrt().powi(3);
        assert_abs_diff_eq!(wf.eval(&[0.5, 0.5, 0.5]).unwrap(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(
            wf.density(&[0.5, 0.5, 0.5]).unwrap(), 8.0, epsilon = 1e-12);
        assert!(wf.eval(&[0.5, 0.5]).unwrap_err().is_dimension_mismatch());
    }

    #[test]
    fn sampling_errors() {
        let rect = BoxGeometry::rect(1.0, 1.0).unwrap();
        assert!(sample_1d(&rect, &[1, 1].into(), 10).unwrap_err()
            .is_dimension_mismatch());
        assert_eq!(
            sample_2d(&rect, &[1, 1].into(), (1, 10)).unwrap_err(),
            BoxError::TooFewPoints(1),
        );
        assert!(Wavefunction::new(&rect, [1].into()).is_err());
    }
}
