#![allow(dead_code)]

//! Provides the closed-form solution of the particle-in-a-box model in one to
//! three spatial dimensions: energy eigenvalues indexed by integer quantum
//! numbers, grouping of eigenstates into degenerate energy levels, and
//! evaluation of the associated eigenfunctions on coordinate grids.
//!
//! Data flows in one direction:
//! - [`geometry`]: validated box side lengths and particle mass
//! - [`eigen`]: energies for single states and for whole quantum-number
//!   ranges, collected into an [`EigenvalueTable`][eigen::EigenvalueTable]
//! - [`degeneracy`]: tolerance-based grouping of a table into
//!   [`DegeneracyGroup`][degeneracy::DegeneracyGroup]s
//!
//! ```
//! use pibox::{ geometry::{ BoxGeometry, Particle }, eigen, degeneracy };
//!
//! let cube = BoxGeometry::cube(3, 1.0).unwrap();
//! let particle = Particle::new(1.0).unwrap();
//! let table = eigen::compute_eigenvalue_range(
//!     &cube, &particle, &[(1, 2), (1, 2), (1, 1)]).unwrap();
//! let groups = degeneracy::classify_degeneracy(&table);
//! let mult: Vec<usize> = groups.iter().map(|g| g.multiplicity).collect();
//! assert_eq!(mult, vec![1, 2, 1]);
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod geometry;
pub mod eigen;
pub mod degeneracy;
pub mod wavefunction;
pub mod utils;

pub mod docs;

pub use error::{ BoxError, BoxResult };
pub use geometry::{ BoxGeometry, Particle, ParticleBox };
pub use eigen::{
    QuantumState,
    QuantumRange,
    AsRange,
    EigenvalueTable,
    compute_eigenvalue,
    compute_eigenvalue_range,
};
pub use degeneracy::{
    DegeneracyConfig,
    DegeneracyGroup,
    classify_degeneracy,
    classify_degeneracy_with,
};

/// Maximum number of spatial dimensions.
pub const MAX_DIM: usize = 3;

pub(crate) const DEF_REL_TOL: f64 = 1e-9;
pub(crate) const DEF_ABS_TOL: f64 = 0.0;

/// Number of states above which an enumeration request is logged as a warning.
pub(crate) const LARGE_TABLE: usize = 1_000_000;
