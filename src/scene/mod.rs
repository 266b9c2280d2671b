//! Transform hierarchy the camera rig reads and writes.
//!
//! The orienter only ever touches transforms through the
//! [`TransformProvider`] trait, so a host engine can expose its own scene
//! graph. [`SceneGraph`] is a small self-contained implementation used by
//! the demo binary and the tests.

mod graph;

use glam::{Affine3A, Quat, Vec3};
pub use graph::SceneGraph;

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// Opaque handle to a transform owned by a [`TransformProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransformId(pub u32);

/// Local translation and rotation relative to the parent transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Offset from the parent's origin, in the parent's space.
    pub translation: Vec3,
    /// Rotation relative to the parent.
    pub rotation: Quat,
}

impl Transform {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Unrotated transform at `translation`.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Same transform with a different local rotation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Local-to-parent affine matrix.
    #[must_use]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_rotation_translation(self.rotation, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ---------------------------------------------------------------------------
// TransformProvider
// ---------------------------------------------------------------------------

/// Read/write access to the transforms a camera task drives.
///
/// Unknown handles read as `None`; writes to unknown handles are ignored.
pub trait TransformProvider {
    /// World-space position of the transform's origin.
    fn world_position(&self, id: TransformId) -> Option<Vec3>;

    /// Rotation relative to the parent.
    fn local_rotation(&self, id: TransformId) -> Option<Quat>;

    /// Replace the rotation relative to the parent.
    fn set_local_rotation(&mut self, id: TransformId, rotation: Quat);

    /// Whether `id` refers to a live transform.
    fn contains(&self, id: TransformId) -> bool {
        self.local_rotation(id).is_some()
    }
}
