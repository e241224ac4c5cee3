#![allow(non_upper_case_globals)]

//! Physical constants and the natural energy scale of the particle in a box.
//!
//! Concrete physical constants are taken from NIST. All computations in this
//! crate are done in SI base units; [`Units`] converts energies to and from the
//! box's natural scale and a few common display units.

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / std::f64::consts::PI;
//                +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// proton mass (kg)
pub const mp: f64 = 1.67262192369e-27;
//              +/- 0.00000000051e-27

/// unified atomic mass unit (kg)
pub const mu: f64 = 1.66053906660e-27;
//              +/- 0.00000000050e-27

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Hartree energy (J)
pub const Eh: f64 = 4.3597447222071e-18;
//              +/- 0.0000000000085e-18

/// Prefactor `h² / 8m` of the box energy for a particle of mass `mass` (kg),
/// in J m².
pub fn energy_prefactor(mass: f64) -> f64 {
    h.powi(2) / (8.0 * mass)
}

/// Natural scaling factors for a particle of mass `m` in a box of reference
/// length `a`.
///
/// The energy unit is the one-dimensional ground-state energy `h² / (8 m a²)`,
/// so that a cubic box of side `a` has energies `n₁² + n₂² + n₃²` in these
/// units.
#[derive(Copy, Clone, Debug)]
pub struct Units {
    /// Particle mass.
    pub m: f64,
    /// Reference length.
    pub a: f64,
    /// Associated energy scale.
    pub e: f64,
}

impl Units {
    /// Construct from a mass and length scale given in meters/kilograms/seconds
    /// (MKS) units.
    pub fn from_mks(mass: f64, a: f64) -> Self {
        Self { m: mass, a, e: energy_prefactor(mass) / a.powi(2) }
    }

    /// Construct from a mass and length scale in atomic (Bohr radii/electron
    /// masses) units (AU). The energy scale is still expressed in joules.
    pub fn from_au(mass: f64, a: f64) -> Self {
        Self::from_mks(me * mass, a0 * a)
    }

    /// Convert an energy in joules to natural units.
    pub fn to_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e.recip()
    }

    /// Convert a dimensionless energy to joules.
    pub fn from_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e
    }
}

/// Convert an energy in joules to electron-volts.
pub fn joule_to_ev(x: f64) -> f64 { x / e }

/// Convert an energy in electron-volts to joules.
pub fn ev_to_joule(x: f64) -> f64 { x * e }

/// Convert an energy in joules to hartrees.
pub fn joule_to_hartree(x: f64) -> f64 { x / Eh }

/// Convert an energy in hartrees to joules.
pub fn hartree_to_joule(x: f64) -> f64 { x * Eh }

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use super::*;

    #[test]
    fn prefactor_unit_mass() {
        assert_relative_eq!(energy_prefactor(1.0), 5.488e-68, max_relative = 1e-3);
    }

    #[test]
    fn natural_energy_roundtrip() {
        let uu = Units::from_mks(me, 1e-9);
        let ground: f64 = uu.from_nat_energy(1.0);
        assert_relative_eq!(ground, energy_prefactor(me) / 1e-18, max_relative = 1e-12);
        let back: f64 = uu.to_nat_energy(ground);
        assert_relative_eq!(back, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn electron_in_nanometre_box() {
        // ground state of an electron in a 1 nm box is about 0.376 eV
        let uu = Units::from_mks(me, 1e-9);
        assert_relative_eq!(joule_to_ev(uu.e), 0.376, max_relative = 1e-2);
    }

    #[test]
    fn atomic_units() {
        let uu = Units::from_au(1.0, 1.0);
        // h²/(8 me a0²) = π²/2 hartree
        let expected = std::f64::consts::PI.powi(2) / 2.0;
        assert_relative_eq!(joule_to_hartree(uu.e), expected, max_relative = 1e-6);
        assert_relative_eq!(hartree_to_joule(joule_to_hartree(uu.e)), uu.e, max_relative = 1e-12);
        assert_relative_eq!(ev_to_joule(joule_to_ev(uu.e)), uu.e, max_relative = 1e-12);
    }
}
