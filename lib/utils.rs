//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner = y.iter().skip(1).take(n - 2).fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Calculate the norm of a real-valued wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    trapz(&q.mapv(|qk| qk * qk), dx)
}

/// Calculate the inner product of two real-valued wavefunctions.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len().min(p.len());
    let prod: nd::Array1<A>
        = q.iter().zip(p).take(n).map(|(qk, pk)| *qk * *pk).collect();
    trapz(&prod, dx)
}

/// Integrate a function sampled on a two-dimensional grid using the trapezoidal
/// rule along both axes.
///
/// *Panics if either axis has length less than 2*.
pub fn trapz_2d<S, A>(z: &nd::ArrayBase<S, nd::Ix2>, dx: A, dy: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let rows: nd::Array1<A>
        = z.rows().into_iter().map(|row| trapz(&row, dy)).collect();
    trapz(&rows, dx)
}
