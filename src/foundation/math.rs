/// Return `v` when it is finite and non-zero, `fallback` otherwise.
///
/// Zero and non-finite multipliers collapse to the neutral value so that
/// divisions by scale or zoom stay finite.
#[inline]
pub(crate) fn non_zero_finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() && v != 0.0 { v } else { fallback }
}

/// Round half toward positive infinity (`-2.5 -> -2`, `2.5 -> 3`).
#[inline]
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
