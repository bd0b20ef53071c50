/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Tolerance used when comparing generated tick values against domain bounds.
/// Returns step / 1000 so accumulated rounding never drops an endpoint tick.
pub fn epsilon_from_step(step: f64) -> f64 {
    step.abs() / 1000.0
}
