//! The agent record.

/// One mobile point on the field.
///
/// `heading` is unbounded radians; it is never normalised, since `sin`/`cos`
/// accept any finite magnitude.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub x:       f32,
    pub y:       f32,
    pub heading: f32,
}

impl Agent {
    #[inline]
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self { x, y, heading }
    }

    /// Fold the position back onto the `width × height` torus.
    #[inline]
    pub fn wrap(&mut self, width: f32, height: f32) {
        self.x = wrap_coord(self.x, width);
        self.y = wrap_coord(self.y, height);
    }
}

/// `v` modulo `len`, guaranteed to land in `[0, len)`.
///
/// `rem_euclid` on floats can return exactly `len` for tiny negative inputs
/// (the true remainder rounds up); that case maps to `0.0`.
#[inline]
pub fn wrap_coord(v: f32, len: f32) -> f32 {
    let r = v.rem_euclid(len);
    if r >= len { 0.0 } else { r }
}
