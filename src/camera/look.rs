//! Look rotations and the yaw/pitch split between actor and camera.
//!
//! Convention: local +Z is forward and +Y is up. Yaw turns about +Y (a
//! target on +X is at +90°); positive pitch tilts the forward axis down.

use glam::{EulerRot, Mat3, Quat, Vec3};

use crate::scene::{TransformId, TransformProvider};
use crate::util::angles::YawPitch;

/// Up axis every look rotation is built against.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Directions shorter than this have no usable heading.
const MIN_DIRECTION_LENGTH: f32 = 1e-5;

/// Rotation whose forward (+Z) axis points along `direction`, keeping its
/// up axis as close to `up` as possible.
///
/// Returns `None` when `direction` is (nearly) zero. A direction parallel
/// to `up` falls back to the shortest arc from +Z.
#[must_use]
pub fn look_rotation(direction: Vec3, up: Vec3) -> Option<Quat> {
    if !direction.is_finite() || direction.length() < MIN_DIRECTION_LENGTH {
        return None;
    }
    let forward = direction.normalize();

    let right = up.cross(forward);
    if right.length_squared() < MIN_DIRECTION_LENGTH * MIN_DIRECTION_LENGTH {
        return Some(Quat::from_rotation_arc(Vec3::Z, forward));
    }
    let right = right.normalize();
    let up = forward.cross(right);

    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)))
}

/// Yaw and pitch of `rotation`, each wrapped into (-180, 180].
#[must_use]
pub fn yaw_pitch_of(rotation: Quat) -> YawPitch {
    let (yaw, pitch, _roll) = rotation.to_euler(EulerRot::YXZ);
    YawPitch::new(yaw.to_degrees(), pitch.to_degrees()).normalized()
}

/// The two transforms a camera task drives: the actor turns about the
/// vertical axis, its child camera about the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RigHandles {
    /// Parent transform that receives yaw.
    pub actor: TransformId,
    /// Camera transform that receives pitch.
    pub camera: TransformId,
}

impl RigHandles {
    /// Current actor yaw and camera pitch.
    #[must_use]
    pub fn current(&self, scene: &dyn TransformProvider) -> Option<YawPitch> {
        let actor = scene.local_rotation(self.actor)?;
        let camera = scene.local_rotation(self.camera)?;
        Some(YawPitch::new(
            yaw_pitch_of(actor).yaw,
            yaw_pitch_of(camera).pitch,
        ))
    }

    /// Yaw/pitch that would point the camera at `target`'s world position.
    ///
    /// `None` if either transform is missing or the target sits on the
    /// camera.
    #[must_use]
    pub fn desired(
        &self,
        scene: &dyn TransformProvider,
        target: TransformId,
    ) -> Option<YawPitch> {
        let eye = scene.world_position(self.camera)?;
        let goal = scene.world_position(target)?;
        look_rotation(goal - eye, WORLD_UP).map(yaw_pitch_of)
    }

    /// Write yaw to the actor (other axes zeroed) and pitch to the camera
    /// (its roll kept).
    pub fn apply(&self, scene: &mut dyn TransformProvider, angles: YawPitch) {
        let roll = scene
            .local_rotation(self.camera)
            .map_or(0.0, |q| q.to_euler(EulerRot::YXZ).2);

        scene.set_local_rotation(
            self.actor,
            Quat::from_rotation_y(angles.yaw.to_radians()),
        );
        scene.set_local_rotation(
            self.camera,
            Quat::from_euler(EulerRot::YXZ, 0.0, angles.pitch.to_radians(), roll),
        );
    }
}
