/// Floating point type used throughout the engine
pub type Real = f64;

/// Greatest common divisor of two non-negative reals, Euclid with a tolerance.
///
/// Frequency components in trajectory parameters are reals, so the recurrence
/// of a multi-frequency curve is governed by the numeric GCD of the active
/// frequencies. Values below `tol` are treated as zero.
pub fn gcd_real(a: Real, b: Real, tol: Real) -> Real {
    let mut a = a.abs();
    let mut b = b.abs();
    while b > tol {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
