/// Angle accumulation and wrapping.
///
/// All angles in this crate are radians and live in `[0, 2π)`. The wrap
/// here is explicit about negative inputs: `%` in Rust follows the sign
/// of the dividend, so a retrograde body would otherwise drift negative.
pub const TAU: f32 = std::f32::consts::TAU;

/// Map any finite angle into `[0, 2π)`.
pub fn wrap_tau(angle: f32) -> f32 {
    let mut r = angle % TAU;
    if r < 0.0 {
        r += TAU;
    }
    // Rounding of a tiny negative remainder can land exactly on 2π.
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Advance an angle by `speed * dt` and wrap. `dt` must be non-negative;
/// a paused simulation passes `dt = 0` rather than a negative delta.
pub fn advance(angle: f32, speed_rad_s: f32, dt: f32) -> f32 {
    debug_assert!(dt >= 0.0, "dt must be non-negative, got {dt}");
    wrap_tau(angle + speed_rad_s * dt)
}
