//! Grouping of eigenstates into degenerate energy levels.
//!
//! Energies of physically degenerate states (e.g. permutations of quantum
//! numbers in a cubic box) can be computed through different sequences of
//! floating-point operations and need not be bitwise equal. Two energies are
//! therefore considered equal when they agree to within a tolerance,
//! ```text
//! |a - b| ≤ max(abs_tol, rel_tol · max(|a|, |b|))
//! ```
//! configured through [`DegeneracyConfig`].

use std::cmp;
use itertools::Itertools;
use tracing::debug;
use crate::{
    DEF_ABS_TOL,
    DEF_REL_TOL,
    eigen::{ EigenvalueTable, QuantumState },
    error::{ BoxError, BoxResult },
};

/// Tolerances used to decide whether two energies are equal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DegeneracyConfig {
    rel_tol: f64,
    abs_tol: f64,
}

impl Default for DegeneracyConfig {
    fn default() -> Self { Self { rel_tol: DEF_REL_TOL, abs_tol: DEF_ABS_TOL } }
}

impl DegeneracyConfig {
    /// Create a new config, failing with [`BoxError::InvalidTolerance`] if
    /// either tolerance is negative or non-finite.
    pub fn new(rel_tol: f64, abs_tol: f64) -> BoxResult<Self> {
        BoxError::check_tolerance(rel_tol)?;
        BoxError::check_tolerance(abs_tol)?;
        Ok(Self { rel_tol, abs_tol })
    }

    /// Set the relative tolerance (default: `1e-9`).
    pub fn with_rel_tol(self, rel_tol: f64) -> BoxResult<Self> {
        Self::new(rel_tol, self.abs_tol)
    }

    /// Set the absolute tolerance in joules (default: `0`).
    pub fn with_abs_tol(self, abs_tol: f64) -> BoxResult<Self> {
        Self::new(self.rel_tol, abs_tol)
    }

    /// Relative tolerance.
    pub fn rel_tol(&self) -> f64 { self.rel_tol }

    /// Absolute tolerance.
    pub fn abs_tol(&self) -> f64 { self.abs_tol }

    /// Return `true` if `a` and `b` are equal under these tolerances.
    pub fn energies_eq(&self, a: f64, b: f64) -> bool {
        let scale = a.abs().max(b.abs());
        (a - b).abs() <= self.abs_tol.max(self.rel_tol * scale)
    }
}

/// A single energy level and the eigenstates that share it.
#[derive(Clone, Debug, PartialEq)]
pub struct DegeneracyGroup {
    /// Energy of the level, taken from its lowest-energy member.
    pub energy: f64,
    /// Number of states in the level.
    pub multiplicity: usize,
    /// States in the level, in ascending lexicographic order.
    pub members: Vec<QuantumState>,
}

impl DegeneracyGroup {
    fn new(energy: f64, mut members: Vec<QuantumState>) -> Self {
        members.sort_unstable();
        Self { energy, multiplicity: members.len(), members }
    }

    /// Return `true` if the level holds more than one state.
    pub fn is_degenerate(&self) -> bool { self.multiplicity > 1 }

    /// Return `true` if `state` belongs to the level.
    pub fn contains(&self, state: &QuantumState) -> bool {
        self.members.binary_search(state).is_ok()
    }

    /// Compare two groups by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.energy.partial_cmp(&other.energy)
    }
}

/// Group all states in `table` by energy using the default
/// [`DegeneracyConfig`].
///
/// ```
/// use pibox::{ BoxGeometry, Particle, compute_eigenvalue_range, classify_degeneracy };
///
/// let square = BoxGeometry::rect(1.0, 1.0).unwrap();
/// let p = Particle::new(1.0).unwrap();
/// let table = compute_eigenvalue_range(&square, &p, &[(1, 3), (1, 3)]).unwrap();
/// let groups = classify_degeneracy(&table);
/// let total: usize = groups.iter().map(|g| g.multiplicity).sum();
/// assert_eq!(total, table.len());
/// assert!(groups.windows(2).all(|w| w[0].energy < w[1].energy));
/// ```
pub fn classify_degeneracy(table: &EigenvalueTable) -> Vec<DegeneracyGroup> {
    classify_degeneracy_with(table, &DegeneracyConfig::default())
}

/// Group all states in `table` by energy.
///
/// States are swept in order of increasing energy; each state joins the current
/// level if its energy is equal (under `config`) to that of the level's first
/// state, and otherwise opens a new level. Comparing against the first state
/// rather than the most recent one keeps a long run of closely spaced energies
/// from being chained into a single level.
///
/// Levels are returned in order of increasing energy. An empty table produces no
/// levels.
pub fn classify_degeneracy_with(
    table: &EigenvalueTable,
    config: &DegeneracyConfig,
) -> Vec<DegeneracyGroup>
{
    let sorted: Vec<(&QuantumState, f64)>
        = table.iter()
        .sorted_by(|(sl, el), (sr, er)| {
            el.total_cmp(er).then_with(|| sl.cmp(sr))
        })
        .collect();

    let mut groups: Vec<DegeneracyGroup> = Vec::new();
    let mut anchor: Option<f64> = None;
    let mut members: Vec<QuantumState> = Vec::new();
    for (state, e) in sorted.into_iter() {
        match anchor {
            Some(e0) if config.energies_eq(e0, e) => {
                members.push(state.clone());
            },
            Some(e0) => {
                groups.push(
                    DegeneracyGroup::new(e0, std::mem::take(&mut members)));
                anchor = Some(e);
                members.push(state.clone());
            },
            None => {
                anchor = Some(e);
                members.push(state.clone());
            },
        }
    }
    if let Some(e0) = anchor {
        groups.push(DegeneracyGroup::new(e0, members));
    }
    debug!(
        states = table.len(),
        levels = groups.len(),
        "classified degeneracies"
    );
    groups
}

/// Return the multiplicity of the level containing `state`, or `None` if
/// `state` is not in `table`.
pub fn degeneracy_of(
    table: &EigenvalueTable,
    state: &QuantumState,
    config: &DegeneracyConfig,
) -> Option<usize>
{
    table.contains(state).then(|| {
        classify_degeneracy_with(table, config).into_iter()
            .find(|group| group.contains(state))
            .map(|group| group.multiplicity)
    })
    .flatten()
}

/// Collect the distinct energies of a list of levels.
pub fn energy_levels(groups: &[DegeneracyGroup]) -> Vec<f64> {
    groups.iter().map(|group| group.energy).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use crate::{
        eigen::compute_eigenvalue_range,
        geometry::{ BoxGeometry, Particle },
    };
    use super::*;

    fn cube_table(l: f64, ranges: &[(u32, u32)]) -> EigenvalueTable {
        let cube = BoxGeometry::cube(ranges.len(), l).unwrap();
        let p = Particle::new(1.0).unwrap();
        compute_eigenvalue_range(&cube, &p, ranges).unwrap()
    }

    fn states(n: &[[u32; 3]]) -> Vec<QuantumState> {
        n.iter().map(QuantumState::from).collect()
    }

    #[test]
    fn cube_permutations_grouped() {
        let table = cube_table(1.0, &[(1, 2), (1, 2), (1, 1)]);
        let groups = classify_degeneracy(&table);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].members, states(&[[1, 1, 1]]));
        assert_eq!(groups[1].multiplicity, 2);
        assert_eq!(groups[1].members, states(&[[1, 2, 1], [2, 1, 1]]));
        assert!(groups[1].is_degenerate());
        assert_eq!(groups[2].members, states(&[[2, 2, 1]]));
        assert!(!groups[2].is_degenerate());
        assert_eq!(groups[0].cmp_energy(&groups[1]), Some(cmp::Ordering::Less));
        assert_eq!(groups[2].cmp_energy(&groups[1]), Some(cmp::Ordering::Greater));
        assert_eq!(groups[1].cmp_energy(&groups[1]), Some(cmp::Ordering::Equal));
    }

    #[test]
    fn full_cube_degeneracies() {
        let table = cube_table(1.0, &[(1, 3), (1, 3), (1, 3)]);
        let groups = classify_degeneracy(&table);
        let mult: Vec<(u32, usize)>
            = groups.iter()
            .map(|g| {
                let n = g.members[0].numbers();
                (n.iter().map(|k| k * k).sum(), g.multiplicity)
            })
            .collect();
        // (n² sum, multiplicity) for n ∈ {1, 2, 3}³
        assert_eq!(
            mult,
            vec![
                (3, 1), (6, 3), (9, 3), (11, 3), (12, 1), (14, 6),
                (17, 3), (19, 3), (22, 3), (27, 1),
            ],
        );
    }

    #[test]
    fn accidental_degeneracy() {
        let table = cube_table(1.0, &[(1, 5), (1, 5), (1, 5)]);
        let config = DegeneracyConfig::default();
        let state = QuantumState::new(&[3, 3, 3]);
        assert_eq!(degeneracy_of(&table, &state, &config), Some(4));
        let groups = classify_degeneracy_with(&table, &config);
        let level = groups.iter().find(|g| g.contains(&state)).unwrap();
        assert_eq!(
            level.members,
            states(&[[1, 1, 5], [1, 5, 1], [3, 3, 3], [5, 1, 1]]),
        );
    }

    #[test]
    fn completeness_and_ordering() {
        let table = cube_table(1.5, &[(0, 4), (1, 4), (2, 5)]);
        let config = DegeneracyConfig::default();
        let groups = classify_degeneracy_with(&table, &config);
        let total: usize = groups.iter().map(|g| g.multiplicity).sum();
        assert_eq!(total, table.len());
        let members: Vec<&QuantumState>
            = groups.iter().flat_map(|g| g.members.iter()).collect();
        let unique: HashSet<&QuantumState> = members.iter().copied().collect();
        assert_eq!(unique.len(), members.len());
        assert!(table.states().iter().all(|s| unique.contains(s)));
        for w in groups.windows(2) {
            assert!(w[0].energy < w[1].energy);
            assert!(!config.energies_eq(w[0].energy, w[1].energy));
        }
        for g in groups.iter() {
            assert_eq!(g.multiplicity, g.members.len());
            assert!(g.members.windows(2).all(|w| w[0] < w[1]));
            assert!(
                g.members.iter()
                    .all(|s| config.energies_eq(table.get(s).unwrap(), g.energy))
            );
        }
    }

    #[test]
    fn empty_table() {
        let table = EigenvalueTable::empty(2);
        assert!(table.is_empty());
        assert!(classify_degeneracy(&table).is_empty());
    }

    #[test]
    fn zero_energy_state() {
        let line = BoxGeometry::line(1.0).unwrap();
        let p = Particle::new(1.0).unwrap();
        let table = compute_eigenvalue_range(&line, &p, &[(0, 0)]).unwrap();
        assert_eq!(table.len(), 1);
        let groups = classify_degeneracy(&table);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].energy, 0.0);
    }

    #[test]
    fn rectangular_box_breaks_degeneracy() {
        let rect = BoxGeometry::rect(1.0, 1.1).unwrap();
        let p = Particle::new(1.0).unwrap();
        let table = compute_eigenvalue_range(&rect, &p, &[(1, 2), (1, 2)])
            .unwrap();
        let groups = classify_degeneracy(&table);
        assert_eq!(groups.len(), 4);
        assert!(groups.iter().all(|g| !g.is_degenerate()));
    }

    #[test]
    fn loose_tolerance_merges_levels() {
        let rect = BoxGeometry::rect(1.0, 1.001).unwrap();
        let p = Particle::new(1.0).unwrap();
        let table = compute_eigenvalue_range(&rect, &p, &[(1, 2), (1, 2)])
            .unwrap();
        let config = DegeneracyConfig::default().with_rel_tol(1e-2).unwrap();
        let groups = classify_degeneracy_with(&table, &config);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[1].multiplicity, 2);
        assert_eq!(
            degeneracy_of(&table, &QuantumState::new(&[2, 1]), &config),
            Some(2),
        );
        assert_eq!(
            degeneracy_of(&table, &QuantumState::new(&[3, 1]), &config),
            None,
        );
        assert_eq!(energy_levels(&groups).len(), 3);
    }

    #[test]
    fn bad_tolerances() {
        assert_eq!(
            DegeneracyConfig::new(-1.0, 0.0),
            Err(BoxError::InvalidTolerance(-1.0)),
        );
        assert!(DegeneracyConfig::default().with_abs_tol(f64::INFINITY).is_err());
        let config = DegeneracyConfig::new(0.0, 1e-70).unwrap();
        assert!(config.energies_eq(1e-68, 1e-68 + 5e-71));
        assert!(!config.energies_eq(1e-68, 1e-68 + 5e-70));
    }

    #[test]
    fn classification_does_not_modify_table() {
        let table = cube_table(1.0, &[(1, 2), (1, 2), (1, 2)]);
        let copy = table.clone();
        let _ = classify_degeneracy(&table);
        assert_eq!(table, copy);
    }
}
