//! Validated descriptions of the box and the particle inside it.
//!
//! Both types are immutable after construction; all lengths are in meters and
//! masses in kilograms.

use crate::{
    degeneracy::{ self, DegeneracyConfig, DegeneracyGroup },
    eigen::{ self, AsRange, EigenvalueTable, QuantumState },
    error::{ BoxError, BoxResult, GeometryError },
    units,
};

/// Side lengths of a rectangular box with one to three spatial dimensions.
///
/// ```
/// use pibox::geometry::BoxGeometry;
///
/// let rect = BoxGeometry::rect(1.0, 2.0).unwrap();
/// assert_eq!(rect.dim(), 2);
/// assert!(BoxGeometry::new(&[1.0, -1.0]).is_err());
/// assert!(BoxGeometry::new(&[]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BoxGeometry {
    lengths: Vec<f64>,
}

impl BoxGeometry {
    /// Create a new box from a list of side lengths, one per spatial dimension.
    ///
    /// Fails if there are zero or more than [`MAX_DIM`][crate::MAX_DIM]
    /// lengths, or if any length is non-positive or non-finite.
    pub fn new(lengths: &[f64]) -> BoxResult<Self> {
        GeometryError::check_dim(lengths.len())?;
        lengths.iter().enumerate()
            .try_for_each(|(axis, &l)| GeometryError::check_length(axis, l))?;
        Ok(Self { lengths: lengths.to_vec() })
    }

    /// Create a one-dimensional box.
    pub fn line(lx: f64) -> BoxResult<Self> { Self::new(&[lx]) }

    /// Create a two-dimensional box.
    pub fn rect(lx: f64, ly: f64) -> BoxResult<Self> { Self::new(&[lx, ly]) }

    /// Create a three-dimensional box.
    pub fn cuboid(lx: f64, ly: f64, lz: f64) -> BoxResult<Self> {
        Self::new(&[lx, ly, lz])
    }

    /// Create a box of dimension `dim` with all sides equal to `length`.
    pub fn cube(dim: usize, length: f64) -> BoxResult<Self> {
        GeometryError::check_dim(dim)?;
        Self::new(&vec![length; dim])
    }

    /// Number of spatial dimensions.
    pub fn dim(&self) -> usize { self.lengths.len() }

    /// Get a reference to the side lengths.
    pub fn lengths(&self) -> &[f64] { &self.lengths }

    /// Get the side length along `axis`, if it exists.
    pub fn length(&self, axis: usize) -> Option<f64> {
        self.lengths.get(axis).copied()
    }

    /// Length, area, or volume of the box, depending on its dimension.
    pub fn volume(&self) -> f64 { self.lengths.iter().product() }

    /// Return `true` if all side lengths agree to within a relative tolerance.
    ///
    /// Regular boxes are the ones in which permuting quantum numbers yields
    /// degenerate states.
    pub fn is_regular(&self, rel_tol: f64) -> bool {
        let l0 = self.lengths[0];
        self.lengths.iter()
            .all(|l| (l - l0).abs() <= rel_tol * l.abs().max(l0.abs()))
    }
}

/// A single particle of fixed mass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    mass: f64,
}

impl Particle {
    /// Create a new particle.
    ///
    /// Fails if `mass` is non-positive or non-finite.
    pub fn new(mass: f64) -> BoxResult<Self> {
        BoxError::check_mass(mass)?;
        Ok(Self { mass })
    }

    /// An electron.
    pub fn electron() -> Self { Self { mass: units::me } }

    /// A proton.
    pub fn proton() -> Self { Self { mass: units::mp } }

    /// Get the mass.
    pub fn mass(&self) -> f64 { self.mass }
}

/// A particle confined to a box.
///
/// This is only a convenience pairing of a [`BoxGeometry`] and a [`Particle`];
/// every method forwards to the free functions in [`eigen`] and
/// [`degeneracy`], and nothing is cached between calls.
///
/// ```
/// use pibox::{ BoxGeometry, Particle, ParticleBox };
///
/// let pbox = ParticleBox::new(
///     BoxGeometry::line(1.0).unwrap(),
///     Particle::new(1.0).unwrap(),
/// );
/// let e1 = pbox.eigenvalue(&[1]).unwrap();
/// let e2 = pbox.eigenvalue(&[2]).unwrap();
/// assert!((e2 / e1 - 4.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleBox {
    geometry: BoxGeometry,
    particle: Particle,
}

impl ParticleBox {
    /// Create a new `ParticleBox`.
    pub fn new(geometry: BoxGeometry, particle: Particle) -> Self {
        Self { geometry, particle }
    }

    /// Get a reference to the box geometry.
    pub fn geometry(&self) -> &BoxGeometry { &self.geometry }

    /// Get a reference to the particle.
    pub fn particle(&self) -> &Particle { &self.particle }

    /// Thin interface to [`eigen::compute_eigenvalue`].
    pub fn eigenvalue<S>(&self, state: S) -> BoxResult<f64>
    where S: Into<QuantumState>
    {
        eigen::compute_eigenvalue(&self.geometry, &self.particle, &state.into())
    }

    /// Thin interface to [`eigen::compute_eigenvalue_range`].
    pub fn eigenvalue_range<R>(&self, ranges: &[R]) -> BoxResult<EigenvalueTable>
    where R: AsRange
    {
        eigen::compute_eigenvalue_range(&self.geometry, &self.particle, ranges)
    }

    /// Compute eigenvalues over a set of ranges and classify them into
    /// degenerate levels.
    pub fn degeneracy<R>(&self, ranges: &[R], config: &DegeneracyConfig)
        -> BoxResult<Vec<DegeneracyGroup>>
    where R: AsRange
    {
        let table = self.eigenvalue_range(ranges)?;
        Ok(degeneracy::classify_degeneracy_with(&table, config))
    }

    /// Return a copy of `self` with all side lengths scaled by `a`.
    ///
    /// All eigenvalues of the result are those of `self` divided by `a²`.
    pub fn rescaled(&self, a: f64) -> BoxResult<Self> {
        let lengths: Vec<f64>
            = self.geometry.lengths().iter().map(|l| l * a).collect();
        Ok(Self::new(BoxGeometry::new(&lengths)?, self.particle))
    }
}

#[cfg(test)]
mod tests {
    use crate::MAX_DIM;
    use super::*;

    #[test]
    fn dimension_bounds() {
        assert!(BoxGeometry::new(&[1.0]).is_ok());
        assert!(BoxGeometry::new(&[1.0, 2.0, 3.0]).is_ok());
        assert_eq!(
            BoxGeometry::new(&[]),
            Err(BoxError::InvalidGeometry(GeometryError::BadDimension(0))),
        );
        assert_eq!(
            BoxGeometry::new(&[1.0; 4]),
            Err(BoxError::InvalidGeometry(GeometryError::BadDimension(4))),
        );
        assert!(BoxGeometry::cube(0, 1.0).is_err());
        assert!(BoxGeometry::cube(MAX_DIM + 1, 1.0).is_err());
    }

    #[test]
    fn bad_lengths() {
        assert_eq!(
            BoxGeometry::rect(1.0, 0.0),
            Err(BoxError::InvalidGeometry(
                GeometryError::BadLength { axis: 1, length: 0.0 })),
        );
        assert!(BoxGeometry::line(-2.0).is_err());
        assert!(BoxGeometry::line(f64::NAN).is_err());
        assert!(BoxGeometry::cuboid(1.0, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn accessors() {
        let geom = BoxGeometry::cuboid(1.0, 2.0, 3.0).unwrap();
        assert_eq!(geom.dim(), 3);
        assert_eq!(geom.lengths(), &[1.0, 2.0, 3.0]);
        assert_eq!(geom.length(1), Some(2.0));
        assert_eq!(geom.length(3), None);
        assert_eq!(geom.volume(), 6.0);
        assert!(!geom.is_regular(1e-9));
        assert!(BoxGeometry::cube(3, 2.0).unwrap().is_regular(0.0));
    }

    #[test]
    fn bad_mass() {
        assert_eq!(Particle::new(0.0), Err(BoxError::InvalidMass(0.0)));
        assert_eq!(Particle::new(-1.0), Err(BoxError::InvalidMass(-1.0)));
        assert!(Particle::new(f64::NAN).is_err());
        assert_eq!(Particle::electron().mass(), units::me);
    }

    #[test]
    fn rescaled_box() {
        let pbox = ParticleBox::new(
            BoxGeometry::rect(1.0, 2.0).unwrap(),
            Particle::new(1.0).unwrap(),
        );
        let big = pbox.rescaled(2.0).unwrap();
        assert_eq!(big.geometry().lengths(), &[2.0, 4.0]);
        let e = pbox.eigenvalue([1, 1]).unwrap();
        let e_big = big.eigenvalue([1, 1]).unwrap();
        assert!((e / e_big - 4.0).abs() < 1e-12);
        assert!(pbox.rescaled(0.0).is_err());
    }
}
