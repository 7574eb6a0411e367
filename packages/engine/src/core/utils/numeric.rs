/// Returns `value` when it is a finite number, `fallback` otherwise.
#[inline]
pub fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Clamp `value` into `[lo, hi]` without panicking when `lo > hi`.
///
/// A canvas narrower than a rock's diameter yields `lo > hi`; the lower
/// bound wins then, matching the left/top wall taking priority.
#[inline]
pub fn keep_inside(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}
