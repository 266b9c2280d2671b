use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::look::RigHandles;
use super::task::{BusyGuard, CameraTask, Phase};
use crate::error::TrackcamError;
use crate::options::OrienterOptions;
use crate::scene::{TransformId, TransformProvider};
use crate::util::easing::MotionCurve;

/// Turns an actor/camera rig toward a target and keeps it aimed there.
///
/// The three entry points are mutually exclusive: while a task started by
/// one of them is live, further requests return an already-finished task
/// and change nothing.
///
/// # Usage
///
/// ```ignore
/// let orienter = CameraOrienter::new(&scene, Some(player), Some(camera), &options.orienter)?;
/// let task = orienter.orient_then_track(enemy, 1.0, 10.0);
/// let id = runner.spawn(task);
///
/// // Every frame:
/// runner.tick(&mut scene, dt);
/// ```
#[derive(Debug)]
pub struct CameraOrienter {
    rig: RigHandles,
    curve: MotionCurve,
    busy: Rc<Cell<bool>>,
}

impl CameraOrienter {
    /// Bind the orienter to its actor and camera transforms.
    ///
    /// A missing transform is a configuration error: it is logged and the
    /// orienter is not created.
    pub fn new(
        scene: &dyn TransformProvider,
        actor: Option<TransformId>,
        camera: Option<TransformId>,
        options: &OrienterOptions,
    ) -> Result<Self, TrackcamError> {
        let actor = require(scene, actor, "actor")?;
        let camera = require(scene, camera, "camera")?;
        options.motion_curve.validate()?;

        Ok(Self {
            rig: RigHandles { actor, camera },
            curve: options.motion_curve.clone(),
            busy: Rc::new(Cell::new(false)),
        })
    }

    /// Whether a task started by this orienter is still live.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// The actor and camera this orienter drives.
    #[must_use]
    pub const fn rig(&self) -> RigHandles {
        self.rig
    }

    /// Curve applied to orient blends.
    #[must_use]
    pub const fn motion_curve(&self) -> &MotionCurve {
        &self.curve
    }

    /// Blend toward facing `target` over `duration` seconds.
    #[must_use]
    pub fn orient_towards(
        &self,
        target: TransformId,
        duration: f32,
    ) -> CameraTask {
        self.start("orient", target, [Phase::orient(duration)])
    }

    /// Face `target` directly every frame for `duration` seconds.
    #[must_use]
    pub fn track(&self, target: TransformId, duration: f32) -> CameraTask {
        self.start("track", target, [Phase::track(Some(duration))])
    }

    /// Face `target` every frame until the task is cancelled.
    #[must_use]
    pub fn track_indefinitely(&self, target: TransformId) -> CameraTask {
        self.start("track", target, [Phase::track(None)])
    }

    /// Blend toward `target`, then keep tracking it.
    #[must_use]
    pub fn orient_then_track(
        &self,
        target: TransformId,
        orient_duration: f32,
        track_duration: f32,
    ) -> CameraTask {
        self.start(
            "orient-then-track",
            target,
            [Phase::orient(orient_duration), Phase::track(Some(track_duration))],
        )
    }

    fn start<const N: usize>(
        &self,
        kind: &str,
        target: TransformId,
        phases: [Phase; N],
    ) -> CameraTask {
        let Some(guard) = BusyGuard::acquire(&self.busy) else {
            log::debug!("orienter busy, ignoring {kind} request toward {target:?}");
            return CameraTask::new(
                self.rig,
                target,
                self.curve.clone(),
                VecDeque::new(),
                None,
            );
        };

        log::debug!("starting {kind} toward {target:?}");
        CameraTask::new(
            self.rig,
            target,
            self.curve.clone(),
            VecDeque::from(phases),
            Some(guard),
        )
    }
}

fn require(
    scene: &dyn TransformProvider,
    id: Option<TransformId>,
    role: &'static str,
) -> Result<TransformId, TrackcamError> {
    match id {
        Some(id) if scene.contains(id) => Ok(id),
        _ => {
            log::error!("camera orienter: the {role} transform is not initialized");
            Err(TrackcamError::MissingTransform(role))
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{EulerRot, Quat, Vec3};

    use super::*;
    use crate::camera::look::{look_rotation, yaw_pitch_of, WORLD_UP};
    use crate::scene::{SceneGraph, Transform};
    use crate::schedule::{FrameTask, FrameTime, TaskRunner, TaskStatus};
    use crate::util::angles::{normalize_degrees, YawPitch};

    const DT: f32 = 0.125;

    struct Rig {
        scene: SceneGraph,
        actor: TransformId,
        camera: TransformId,
        target: TransformId,
        orienter: CameraOrienter,
    }

    fn rig_with_target(target: Vec3) -> Rig {
        rig_with(target, &OrienterOptions::default())
    }

    fn rig_with(target: Vec3, options: &OrienterOptions) -> Rig {
        let mut scene = SceneGraph::new();
        let actor = scene.spawn(Transform::IDENTITY);
        let camera = scene.spawn_child(actor, Transform::IDENTITY).unwrap();
        let target = scene.spawn(Transform::from_translation(target));
        let orienter =
            CameraOrienter::new(&scene, Some(actor), Some(camera), options)
                .unwrap();
        Rig {
            scene,
            actor,
            camera,
            target,
            orienter,
        }
    }

    impl Rig {
        fn angles(&self) -> YawPitch {
            self.orienter.rig().current(&self.scene).unwrap()
        }

        fn expected(&self) -> YawPitch {
            let eye = self.scene.world_position(self.camera).unwrap();
            let goal = self.scene.world_position(self.target).unwrap();
            yaw_pitch_of(look_rotation(goal - eye, WORLD_UP).unwrap())
        }

        fn step(&mut self, task: &mut CameraTask) -> TaskStatus {
            task.step(
                &mut self.scene,
                FrameTime {
                    delta: DT,
                    elapsed: 0.0,
                },
            )
        }
    }

    fn assert_angle(actual: f32, expected: f32, tolerance: f32) {
        let diff = normalize_degrees(actual - expected).abs();
        assert!(diff < tolerance, "expected {expected}°, got {actual}°");
    }

    fn target_at_yaw(degrees: f32) -> Vec3 {
        let rad = degrees.to_radians();
        Vec3::new(rad.sin(), 0.0, rad.cos()) * 10.0
    }

    #[test]
    fn missing_transforms_are_configuration_errors() {
        let mut scene = SceneGraph::new();
        let camera = scene.spawn(Transform::IDENTITY);
        let options = OrienterOptions::default();

        let err =
            CameraOrienter::new(&scene, None, Some(camera), &options).unwrap_err();
        assert!(matches!(err, TrackcamError::MissingTransform("actor")));

        let err = CameraOrienter::new(
            &scene,
            Some(camera),
            Some(TransformId(99)),
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, TrackcamError::MissingTransform("camera")));
    }

    #[test]
    fn invalid_motion_curve_is_rejected_at_construction() {
        let mut scene = SceneGraph::new();
        let actor = scene.spawn(Transform::IDENTITY);
        let camera = scene.spawn_child(actor, Transform::IDENTITY).unwrap();

        for curve in [
            MotionCurve::CubicHermite { c1: f32::NAN, c2: 1.0 },
            MotionCurve::CubicHermite { c1: 5.0, c2: 1.0 },
        ] {
            let options = OrienterOptions {
                motion_curve: curve,
                ..OrienterOptions::default()
            };
            let err = CameraOrienter::new(&scene, Some(actor), Some(camera), &options)
                .unwrap_err();
            assert!(matches!(err, TrackcamError::InvalidCurve(_)));
        }
    }

    #[test]
    fn already_facing_target_stays_put() {
        let mut rig = rig_with_target(Vec3::new(0.0, 0.0, 10.0));
        let mut task = rig.orienter.orient_towards(rig.target, 1.0);

        for _ in 0..8 {
            let _ = rig.step(&mut task);
        }
        assert!(task.is_finished());
        let angles = rig.angles();
        assert_angle(angles.yaw, 0.0, 1e-3);
        assert_angle(angles.pitch, 0.0, 1e-3);
    }

    #[test]
    fn orient_blends_linearly_to_side_target() {
        let mut rig = rig_with_target(Vec3::new(10.0, 0.0, 0.0));
        let mut task = rig.orienter.orient_towards(rig.target, 1.0);

        for _ in 0..4 {
            assert_eq!(rig.step(&mut task), TaskStatus::Pending);
        }
        assert_angle(rig.angles().yaw, 45.0, 1e-2);
        assert!(rig.orienter.is_busy());

        for _ in 0..3 {
            assert_eq!(rig.step(&mut task), TaskStatus::Pending);
        }
        assert_eq!(rig.step(&mut task), TaskStatus::Done);
        assert_angle(rig.angles().yaw, 90.0, 1e-2);
        assert_angle(rig.angles().pitch, 0.0, 1e-2);
        assert!(!rig.orienter.is_busy());
    }

    #[test]
    fn orient_uses_configured_curve() {
        let options = OrienterOptions {
            motion_curve: MotionCurve::QuadraticIn,
            ..OrienterOptions::default()
        };
        let mut rig = rig_with(Vec3::new(10.0, 0.0, 0.0), &options);
        let mut task = rig.orienter.orient_towards(rig.target, 1.0);
        for _ in 0..4 {
            let _ = rig.step(&mut task);
        }
        // QuadraticIn(0.5) = 0.25
        assert_angle(rig.angles().yaw, 22.5, 1e-2);
    }

    #[test]
    fn orient_takes_short_way_across_seam() {
        let mut rig = rig_with_target(target_at_yaw(-170.0));
        rig.scene
            .set_local_rotation(rig.actor, Quat::from_rotation_y(170.0_f32.to_radians()));
        let mut task = rig.orienter.orient_towards(rig.target, 1.0);

        for _ in 0..4 {
            let _ = rig.step(&mut task);
        }
        assert_angle(rig.angles().yaw, 180.0, 1e-2);

        for _ in 0..4 {
            let _ = rig.step(&mut task);
        }
        assert_angle(rig.angles().yaw, -170.0, 1e-2);
    }

    #[test]
    fn orient_converges_on_moving_target() {
        let mut rig = rig_with_target(Vec3::new(0.0, 0.0, 10.0));
        let mut task = rig.orienter.orient_towards(rig.target, 1.0);

        let mut frame = 0;
        loop {
            frame += 1;
            let x = frame as f32 * 1.5;
            rig.scene
                .set_translation(rig.target, Vec3::new(x, 3.0, 10.0));
            if rig.step(&mut task) == TaskStatus::Done {
                break;
            }
            assert!(frame < 100, "orient never completed");
        }
        assert_eq!(frame, 8);

        let (angles, expected) = (rig.angles(), rig.expected());
        assert_angle(angles.yaw, expected.yaw, 1e-2);
        assert_angle(angles.pitch, expected.pitch, 1e-2);
    }

    #[test]
    fn orient_preserves_camera_roll() {
        let mut rig = rig_with_target(Vec3::new(10.0, -10.0, 0.0));
        let roll = 12.0_f32.to_radians();
        rig.scene
            .set_local_rotation(rig.camera, Quat::from_rotation_z(roll));
        let mut task = rig.orienter.orient_towards(rig.target, 0.5);
        while rig.step(&mut task) == TaskStatus::Pending {}

        let camera = rig.scene.local_rotation(rig.camera).unwrap();
        let (_, pitch, camera_roll) = camera.to_euler(EulerRot::YXZ);
        assert!((camera_roll - roll).abs() < 1e-4);
        assert_angle(pitch.to_degrees(), 45.0, 1e-2);
    }

    #[test]
    fn zero_duration_orient_snaps_on_first_frame() {
        let mut rig = rig_with_target(Vec3::new(-10.0, 0.0, 0.0));
        let mut task = rig.orienter.orient_towards(rig.target, 0.0);
        assert!(!task.is_finished());
        assert_eq!(rig.step(&mut task), TaskStatus::Done);
        assert_angle(rig.angles().yaw, -90.0, 1e-3);
    }

    #[test]
    fn timed_track_follows_target_then_stops() {
        let mut rig = rig_with_target(Vec3::new(0.0, 0.0, 10.0));
        let mut task = rig.orienter.track(rig.target, 0.5);
        assert!(task.is_tracking());

        for i in 1..=4 {
            rig.scene
                .set_translation(rig.target, Vec3::new(i as f32, 0.0, 10.0));
            let status = rig.step(&mut task);
            let expected = rig.expected();
            assert_angle(rig.angles().yaw, expected.yaw, 1e-3);
            assert_eq!(status == TaskStatus::Done, i == 4);
        }
        assert!(!rig.orienter.is_busy());
    }

    #[test]
    fn indefinite_track_has_no_lag() {
        let mut rig = rig_with_target(Vec3::new(0.0, 0.0, 10.0));
        let mut task = rig.orienter.track_indefinitely(rig.target);

        for frame in 0..200 {
            let t = frame as f32 * 0.1;
            rig.scene.set_translation(
                rig.target,
                Vec3::new(10.0 * t.cos(), 2.0 * t.sin(), 10.0 * t.sin()),
            );
            assert_eq!(rig.step(&mut task), TaskStatus::Pending);

            let (angles, expected) = (rig.angles(), rig.expected());
            assert_angle(angles.yaw, expected.yaw, 1e-2);
            assert_angle(angles.pitch, expected.pitch, 1e-2);
        }
        assert!(rig.orienter.is_busy());

        task.cancel();
        assert!(task.is_finished());
        assert!(!rig.orienter.is_busy());
    }

    #[test]
    fn orient_then_track_runs_both_phases() {
        let mut rig = rig_with_target(Vec3::new(10.0, 0.0, 0.0));
        let mut task = rig.orienter.orient_then_track(rig.target, 0.25, 0.25);
        assert!(task.is_orienting());

        assert_eq!(rig.step(&mut task), TaskStatus::Pending);
        assert_eq!(rig.step(&mut task), TaskStatus::Pending);
        assert!(task.is_tracking());
        assert_angle(rig.angles().yaw, 90.0, 1e-2);
        assert!(rig.orienter.is_busy());

        rig.scene.set_translation(rig.target, Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(rig.step(&mut task), TaskStatus::Pending);
        assert_angle(rig.angles().yaw, 180.0, 1e-2);
        assert_eq!(rig.step(&mut task), TaskStatus::Done);
        assert!(!rig.orienter.is_busy());
    }

    #[test]
    fn zero_length_track_ends_with_the_orient() {
        let mut rig = rig_with_target(Vec3::new(10.0, 0.0, 0.0));
        let mut task = rig.orienter.orient_then_track(rig.target, 0.25, 0.0);
        assert_eq!(rig.step(&mut task), TaskStatus::Pending);
        assert_eq!(rig.step(&mut task), TaskStatus::Done);
        assert!(!rig.orienter.is_busy());

        let task = rig.orienter.track(rig.target, 0.0);
        assert!(task.is_finished());
        assert!(!rig.orienter.is_busy());
    }

    #[test]
    fn busy_requests_are_silent_no_ops() {
        let mut rig = rig_with_target(Vec3::new(10.0, 0.0, 0.0));
        let other = rig
            .scene
            .spawn(Transform::from_translation(Vec3::new(-10.0, 5.0, 0.0)));
        let mut first = rig.orienter.orient_towards(rig.target, 0.5);
        let _ = rig.step(&mut first);

        let before = rig.angles();
        let mut second = rig.orienter.orient_towards(other, 0.1);
        let mut third = rig.orienter.track(other, 1.0);
        let mut fourth = rig.orienter.orient_then_track(other, 0.1, 1.0);
        for task in [&mut second, &mut third, &mut fourth] {
            assert!(task.is_finished());
            assert_eq!(rig.step(task), TaskStatus::Done);
        }
        assert_eq!(rig.angles(), before);
        assert!(rig.orienter.is_busy(), "no-op must not release the lock");

        drop(second);
        assert!(rig.orienter.is_busy());

        for _ in 0..3 {
            let _ = rig.step(&mut first);
        }
        assert!(first.is_finished());
        assert!(!rig.orienter.is_busy());
        assert_angle(rig.angles().yaw, 90.0, 1e-2);
    }

    #[test]
    fn cancelling_through_runner_releases_lock() {
        let mut rig = rig_with_target(Vec3::new(10.0, 0.0, 0.0));
        let mut runner = TaskRunner::new();
        let id = runner.spawn(rig.orienter.orient_then_track(rig.target, 1.0, 5.0));

        for _ in 0..3 {
            runner.tick(&mut rig.scene, DT);
        }
        assert!(rig.orienter.is_busy());
        let mid = rig.angles();

        assert!(runner.cancel(id));
        assert!(!rig.orienter.is_busy());

        runner.tick(&mut rig.scene, DT);
        assert_eq!(rig.angles(), mid, "cancelled task must not write");

        let next = rig.orienter.orient_towards(rig.target, 0.25);
        assert!(!next.is_finished());
        assert!(rig.orienter.is_busy());
        let next_id = runner.spawn(next);
        runner.tick(&mut rig.scene, DT);
        runner.tick(&mut rig.scene, DT);
        assert!(!runner.is_running(next_id));
        assert_angle(rig.angles().yaw, 90.0, 1e-2);
    }

    #[test]
    fn target_on_camera_skips_writes() {
        let mut rig = rig_with_target(Vec3::ZERO);
        let start = Quat::from_rotation_y(0.3);
        rig.scene.set_local_rotation(rig.actor, start);
        let mut task = rig.orienter.orient_towards(rig.target, 0.25);

        assert_eq!(rig.step(&mut task), TaskStatus::Pending);
        assert_eq!(rig.step(&mut task), TaskStatus::Done);
        assert_eq!(rig.scene.local_rotation(rig.actor), Some(start));
        assert!(!rig.orienter.is_busy());
    }
}
