//! Closed-form energy eigenvalues of the particle in a box.
//!
//! For a box with side lengths *L*<sub>d</sub> and a particle of mass *m*, the
//! eigenstate labeled by quantum numbers *n*<sub>d</sub> has energy
//! ```text
//!      h²    n_d²
//! E = ---- Σ ----
//!      8 m d L_d²
//! ```
//! All energies are returned in joules.

use std::{
    collections::HashMap,
    fmt,
    ops::RangeInclusive,
};
use itertools::Itertools;
use tracing::{ debug, warn };
use crate::{
    LARGE_TABLE,
    error::{ BoxError, BoxResult, DimError },
    geometry::{ BoxGeometry, Particle },
    units,
};

/// A tuple of quantum numbers, one per spatial dimension.
///
/// States compare equal if all their components are equal, and are ordered
/// lexicographically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuantumState(Vec<u32>);

impl QuantumState {
    /// Create a new state from a list of quantum numbers.
    pub fn new(n: &[u32]) -> Self { Self(n.to_vec()) }

    /// Create a new state from signed quantum numbers, failing with
    /// [`BoxError::InvalidQuantumNumber`] if any is negative.
    pub fn from_signed(n: &[i64]) -> BoxResult<Self> {
        let n: Vec<u32>
            = n.iter().enumerate()
            .map(|(axis, &nk)| BoxError::check_quantum_number(axis, nk))
            .collect::<BoxResult<_>>()?;
        Ok(Self(n))
    }

    /// Number of spatial dimensions.
    pub fn dim(&self) -> usize { self.0.len() }

    /// Get a reference to the quantum numbers.
    pub fn numbers(&self) -> &[u32] { &self.0 }

    /// Get the quantum number along `axis`, if it exists.
    pub fn get(&self, axis: usize) -> Option<u32> { self.0.get(axis).copied() }

    /// Return `true` if every quantum number is at least 1.
    ///
    /// States with a zero quantum number have an identically vanishing
    /// wavefunction and do not correspond to a physical state of the box.
    pub fn is_physical(&self) -> bool { self.0.iter().all(|&n| n >= 1) }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

impl From<Vec<u32>> for QuantumState {
    fn from(n: Vec<u32>) -> Self { Self(n) }
}

impl From<&[u32]> for QuantumState {
    fn from(n: &[u32]) -> Self { Self::new(n) }
}

impl<const N: usize> From<[u32; N]> for QuantumState {
    fn from(n: [u32; N]) -> Self { Self(n.to_vec()) }
}

impl<const N: usize> From<&[u32; N]> for QuantumState {
    fn from(n: &[u32; N]) -> Self { Self(n.to_vec()) }
}

impl From<(u32,)> for QuantumState {
    fn from(n: (u32,)) -> Self { Self(vec![n.0]) }
}

impl From<(u32, u32)> for QuantumState {
    fn from(n: (u32, u32)) -> Self { Self(vec![n.0, n.1]) }
}

impl From<(u32, u32, u32)> for QuantumState {
    fn from(n: (u32, u32, u32)) -> Self { Self(vec![n.0, n.1, n.2]) }
}

/// An inclusive range of quantum numbers along a single axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuantumRange {
    min: u32,
    max: u32,
}

impl QuantumRange {
    /// Create a new range `[min, max]`, failing with [`BoxError::EmptyRange`]
    /// if `min > max`.
    ///
    /// The error reports axis 0; use [`AsRange::to_range`] to attach the
    /// correct axis when building a range for a particular dimension.
    pub fn new(min: u32, max: u32) -> BoxResult<Self> {
        Self::on_axis(0, min, max)
    }

    /// Range containing a single quantum number.
    pub fn single(n: u32) -> Self { Self { min: n, max: n } }

    fn on_axis(axis: usize, min: u32, max: u32) -> BoxResult<Self> {
        BoxError::check_range(axis, min, max)?;
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> u32 { self.min }

    /// Upper bound (inclusive).
    pub fn max(&self) -> u32 { self.max }

    /// Number of quantum numbers in the range.
    ///
    /// Returned as a `u64` since a full `u32` range holds `2³²` values.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 { u64::from(self.max - self.min) + 1 }

    /// Return `true` if `n` lies in the range.
    pub fn contains(&self, n: u32) -> bool { self.min <= n && n <= self.max }

    /// Iterate over all quantum numbers in the range.
    pub fn iter(&self) -> RangeInclusive<u32> { self.min..=self.max }
}

/// Conversion of a per-axis range specification into a [`QuantumRange`].
pub trait AsRange {
    /// Validate `self` as the range for dimension `axis`.
    fn to_range(&self, axis: usize) -> BoxResult<QuantumRange>;
}

impl AsRange for QuantumRange {
    fn to_range(&self, axis: usize) -> BoxResult<QuantumRange> {
        QuantumRange::on_axis(axis, self.min, self.max)
    }
}

impl AsRange for (u32, u32) {
    fn to_range(&self, axis: usize) -> BoxResult<QuantumRange> {
        QuantumRange::on_axis(axis, self.0, self.1)
    }
}

impl AsRange for [u32; 2] {
    fn to_range(&self, axis: usize) -> BoxResult<QuantumRange> {
        QuantumRange::on_axis(axis, self[0], self[1])
    }
}

impl AsRange for RangeInclusive<u32> {
    fn to_range(&self, axis: usize) -> BoxResult<QuantumRange> {
        QuantumRange::on_axis(axis, *self.start(), *self.end())
    }
}

/// Energies for a complete set of eigenstates, keyed by [`QuantumState`].
///
/// This is only ever returned by [`compute_eigenvalue_range`] and cannot be
/// modified afterward.
#[derive(Clone, Debug, PartialEq)]
pub struct EigenvalueTable {
    dim: usize,
    energies: HashMap<QuantumState, f64>,
}

impl EigenvalueTable {
    #[cfg(test)]
    pub(crate) fn empty(dim: usize) -> Self {
        Self { dim, energies: HashMap::new() }
    }

    /// Number of spatial dimensions of every state in the table.
    pub fn dim(&self) -> usize { self.dim }

    /// Number of states in the table.
    pub fn len(&self) -> usize { self.energies.len() }

    /// Return `true` if the table contains no states.
    pub fn is_empty(&self) -> bool { self.energies.is_empty() }

    /// Look up the energy of a state.
    pub fn get(&self, state: &QuantumState) -> Option<f64> {
        self.energies.get(state).copied()
    }

    /// Return `true` if the table contains `state`.
    pub fn contains(&self, state: &QuantumState) -> bool {
        self.energies.contains_key(state)
    }

    /// Iterate over all `(state, energy)` pairs in ascending lexicographic
    /// order of the states.
    pub fn iter(&self) -> impl Iterator<Item = (&QuantumState, f64)> + '_ {
        self.energies.iter()
            .sorted_unstable_by(|(l, _), (r, _)| l.cmp(r))
            .map(|(s, e)| (s, *e))
    }

    /// Get all states in ascending lexicographic order.
    pub fn states(&self) -> Vec<QuantumState> {
        self.energies.keys().cloned().sorted_unstable().collect()
    }

    /// Get all energies, ordered like [`Self::states`].
    pub fn energies(&self) -> Vec<f64> {
        self.iter().map(|(_, e)| e).collect()
    }

    /// Get the state with lowest energy, along with its energy.
    ///
    /// Ties are broken by lexicographic order of the states.
    pub fn ground_state(&self) -> Option<(&QuantumState, f64)> {
        self.iter()
            .min_by(|(sl, el), (sr, er)| {
                el.total_cmp(er).then_with(|| sl.cmp(sr))
            })
    }

    /// Get the lowest energy in the table.
    pub fn min_energy(&self) -> Option<f64> {
        self.ground_state().map(|(_, e)| e)
    }
}

/// Compute the energy of a single eigenstate.
///
/// Fails with [`BoxError::DimensionMismatch`] if the state does not have one
/// quantum number per box dimension.
///
/// Quantum numbers equal to zero are accepted and contribute nothing along
/// their axis. Deciding whether such states are physical is left to the
/// caller (see [`QuantumState::is_physical`]).
///
/// ```
/// use pibox::{ BoxGeometry, Particle, QuantumState, compute_eigenvalue, units };
///
/// let line = BoxGeometry::line(1.0).unwrap();
/// let p = Particle::new(1.0).unwrap();
/// let e = compute_eigenvalue(&line, &p, &QuantumState::new(&[1])).unwrap();
/// assert!((e - units::h.powi(2) / 8.0).abs() < 1e-80);
/// ```
pub fn compute_eigenvalue(
    geometry: &BoxGeometry,
    particle: &Particle,
    state: &QuantumState,
) -> BoxResult<f64>
{
    DimError::check(geometry.dim(), state.dim())?;
    if !state.is_physical() {
        debug!(%state, "computing eigenvalue for a state with a zero quantum number");
    }
    Ok(eigenvalue_unchecked(geometry.lengths(), particle.mass(), state.numbers()))
}

// number of states in the Cartesian product of `ranges`; `None` on overflow
fn table_size(ranges: &[QuantumRange]) -> Option<usize> {
    ranges.iter()
        .try_fold(1_usize, |acc, r| {
            usize::try_from(r.len()).ok()
                .and_then(|n| acc.checked_mul(n))
        })
}

// assumes `lengths` and `n` have equal lengths
fn eigenvalue_unchecked(lengths: &[f64], mass: f64, n: &[u32]) -> f64 {
    let sum: f64
        = n.iter().zip(lengths)
        .map(|(&nk, &lk)| (f64::from(nk) / lk).powi(2))
        .sum();
    units::energy_prefactor(mass) * sum
}

/// Compute the energies of all eigenstates in the Cartesian product of a set of
/// inclusive quantum-number ranges, one per box dimension.
///
/// Ranges may be given as [`QuantumRange`]s, `(min, max)` pairs, `[min, max]`
/// arrays, or `min..=max`. Fails with [`BoxError::DimensionMismatch`] if the
/// number of ranges differs from the box dimension, or
/// [`BoxError::EmptyRange`] if any range has `min > max`; in both cases no
/// energies are computed.
///
/// The returned table holds exactly `∏ (max_d - min_d + 1)` states.
///
/// ```
/// use pibox::{ BoxGeometry, Particle, QuantumState, compute_eigenvalue_range };
///
/// let rect = BoxGeometry::rect(1.0, 2.0).unwrap();
/// let p = Particle::new(1.0).unwrap();
/// let table = compute_eigenvalue_range(&rect, &p, &[1..=3, 1..=2]).unwrap();
/// assert_eq!(table.len(), 6);
/// assert!(table.contains(&QuantumState::new(&[3, 2])));
/// ```
pub fn compute_eigenvalue_range<R>(
    geometry: &BoxGeometry,
    particle: &Particle,
    ranges: &[R],
) -> BoxResult<EigenvalueTable>
where R: AsRange
{
    DimError::check(geometry.dim(), ranges.len())?;
    let ranges: Vec<QuantumRange>
        = ranges.iter().enumerate()
        .map(|(axis, r)| r.to_range(axis))
        .collect::<BoxResult<_>>()?;
    match table_size(&ranges) {
        Some(size) if size > LARGE_TABLE => {
            warn!(size, "enumerating a very large set of eigenstates");
        },
        None => {
            warn!("number of requested eigenstates overflows usize");
        },
        _ => { },
    }

    let lengths = geometry.lengths();
    let mass = particle.mass();
    let energies: HashMap<QuantumState, f64>
        = ranges.iter()
        .map(QuantumRange::iter)
        .multi_cartesian_product()
        .map(|n| {
            let e = eigenvalue_unchecked(lengths, mass, &n);
            (QuantumState(n), e)
        })
        .collect();
    debug!(dim = geometry.dim(), states = energies.len(), "computed eigenvalue table");
    Ok(EigenvalueTable { dim: geometry.dim(), energies })
}
