//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Degeneracy](#degeneracy)
//! - [Units](#units)
//!
//! # Background
//! A particle of mass *m* confined to a rectangular box with impenetrable walls
//! obeys the time-independent Schrödinger equation
//! ```text
//!    ħ²
//! - --- ∇²ψ(x) = E ψ(x)
//!   2 m
//! ```
//! inside the box, with ψ = 0 on the walls. In *D* ≤ 3 dimensions the equation
//! separates into *D* independent one-dimensional problems, each solved by a
//! standing wave
//! ```text
//!            ┌──────
//! ψ_n(x) = ╲│2 / L  sin(n π x / L),   n = 1, 2, ...
//! ```
//! with energy *h*²*n*²/(8 *m* *L*²). The full eigenfunction is the product of
//! the one-dimensional factors and the full energy is their sum,
//! ```text
//!      h²    n_d²
//! E = ---- Σ ----
//!      8 m d L_d²
//! ```
//! This is computed directly by [`compute_eigenvalue`][crate::eigen::compute_eigenvalue];
//! no numerical solution of the differential equation is needed.
//!
//! Setting any *n*<sub>d</sub> = 0 makes ψ vanish identically, so such tuples
//! do not label physical states. They are nonetheless accepted by the energy
//! functions (contributing zero along the corresponding axis), which is
//! occasionally convenient for treating a lower-dimensional box as a slice of a
//! higher-dimensional one. Use
//! [`QuantumState::is_physical`][crate::eigen::QuantumState::is_physical] to
//! filter them out.
//!
//! # Degeneracy
//! When two or more side lengths are commensurate, distinct quantum-number
//! tuples can share the same energy. In a cubic box every permutation of
//! (*n*₁, *n*₂, *n*₃) is degenerate, giving multiplicities of 1 (all equal), 3
//! (two equal), or 6 (all distinct); accidental degeneracies such as
//! (1, 1, 5) and (3, 3, 3), both with *n*² sum 27, also occur.
//!
//! Energies of degenerate states are computed along different sequences of
//! floating-point operations and are compared with a tolerance (see
//! [`DegeneracyConfig`][crate::degeneracy::DegeneracyConfig]). The default
//! relative tolerance of 10⁻⁹ is far above rounding error and far below the
//! relative spacing of levels in any box with moderate quantum numbers.
//!
//! # Units
//! All quantities are in SI base units: lengths in meters, masses in kilograms,
//! and energies in joules. For a reference length *a*, the natural energy scale
//! *h*²/(8 *m* *a*²) is provided by [`Units`][crate::units::Units]; in these
//! units a cubic box of side *a* has energies *n*₁² + *n*₂² + *n*₃². For an
//! electron in a 1 nm box, this scale is approximately 0.376 eV.
