//! Degree-based angle helpers for yaw/pitch blending.

/// Yaw and pitch of a rig orientation, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YawPitch {
    /// Rotation about the vertical axis.
    pub yaw: f32,
    /// Rotation about the horizontal axis (positive tilts down).
    pub pitch: f32,
}

impl YawPitch {
    /// Yaw/pitch pair from degrees.
    #[must_use]
    pub const fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Both components wrapped into (-180, 180].
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            yaw: normalize_degrees(self.yaw),
            pitch: normalize_degrees(self.pitch),
        }
    }
}

/// Wrap an angle in degrees into (-180, 180].
///
/// Non-finite input is returned unchanged.
#[inline]
#[must_use]
pub fn normalize_degrees(degrees: f32) -> f32 {
    if !degrees.is_finite() || (degrees > -180.0 && degrees <= 180.0) {
        return degrees;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Adjust a `(start, end)` pair so that lerping between them takes the
/// short way around the ±180° seam.
///
/// Only pairs that straddle zero with opposite signs are touched. The
/// negative side is lifted by 360° when that shrinks the angular delta.
#[must_use]
pub fn shortest_path(start: f32, end: f32) -> (f32, f32) {
    if end < 0.0 && start > 0.0 {
        if (end - start).abs() > (start - (end + 360.0)).abs() {
            return (start, end + 360.0);
        }
    } else if start < 0.0
        && end > 0.0
        && (end - start).abs() > ((start + 360.0) - end).abs()
    {
        return (start + 360.0, end);
    }
    (start, end)
}

/// Linear interpolation between two angles already corrected by
/// [`shortest_path`].
#[inline]
#[must_use]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}
