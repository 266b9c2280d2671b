//! Frame-stepped camera tasks.
//!
//! A [`CameraTask`] is a queue of phases (orient blend, track) stepped once
//! per frame. While it is live it owns the orienter's busy flag through a
//! `BusyGuard`, which clears the flag when the task finishes or is
//! dropped.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::look::RigHandles;
use crate::scene::{TransformId, TransformProvider};
use crate::schedule::{FrameTask, FrameTime, TaskStatus};
use crate::util::angles::{lerp, shortest_path, YawPitch};
use crate::util::easing::MotionCurve;

// ---------------------------------------------------------------------------
// BusyGuard
// ---------------------------------------------------------------------------

/// Scoped hold on the orienter's busy flag. Clears it on drop.
#[derive(Debug)]
pub(crate) struct BusyGuard {
    flag: Rc<Cell<bool>>,
}

impl BusyGuard {
    /// Take the flag, or `None` if another task already holds it.
    pub(crate) fn acquire(flag: &Rc<Cell<bool>>) -> Option<Self> {
        if flag.get() {
            return None;
        }
        flag.set(true);
        Some(Self { flag: flag.clone() })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub(crate) enum Phase {
    Orient(OrientPhase),
    Track(TrackPhase),
}

impl Phase {
    pub(crate) fn orient(duration: f32) -> Self {
        Self::Orient(OrientPhase {
            duration,
            elapsed: 0.0,
            start: None,
        })
    }

    /// `None` tracks until cancelled. NaN is treated as zero.
    pub(crate) fn track(duration: Option<f32>) -> Self {
        Self::Track(TrackPhase {
            duration: duration.map(|d| if d.is_nan() { 0.0 } else { d }),
            elapsed: 0.0,
        })
    }

    /// A phase with nothing left to do before its first frame.
    fn is_exhausted(&self) -> bool {
        match self {
            Self::Orient(_) => false,
            Self::Track(track) => track.is_exhausted(),
        }
    }

    fn step(
        &mut self,
        ctx: &StepContext<'_>,
        scene: &mut dyn TransformProvider,
        delta: f32,
    ) -> TaskStatus {
        match self {
            Self::Orient(orient) => orient.step(ctx, scene, delta),
            Self::Track(track) => track.step(ctx, scene, delta),
        }
    }
}

struct StepContext<'a> {
    rig: RigHandles,
    target: TransformId,
    curve: &'a MotionCurve,
}

/// Eased blend from the rig's starting yaw/pitch toward the target.
#[derive(Debug, Clone)]
pub(crate) struct OrientPhase {
    duration: f32,
    elapsed: f32,
    /// Start angles, captured on the first frame and rewritten with the
    /// seam-corrected values every frame after.
    start: Option<YawPitch>,
}

impl OrientPhase {
    fn step(
        &mut self,
        ctx: &StepContext<'_>,
        scene: &mut dyn TransformProvider,
        delta: f32,
    ) -> TaskStatus {
        self.elapsed += delta;
        let raw = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };
        let eased = ctx.curve.evaluate(raw);
        let done = raw >= 1.0 || eased >= 1.0;
        let t = if done { 1.0 } else { eased };

        if self.start.is_none() {
            self.start = ctx.rig.current(scene);
        }

        match (self.start, ctx.rig.desired(scene, ctx.target)) {
            (Some(start), Some(end)) => {
                let (start_pitch, end_pitch) =
                    shortest_path(start.pitch, end.pitch);
                let (start_yaw, end_yaw) = shortest_path(start.yaw, end.yaw);
                self.start = Some(YawPitch::new(start_yaw, start_pitch));

                let angles = YawPitch::new(
                    lerp(start_yaw, end_yaw, t),
                    lerp(start_pitch, end_pitch, t),
                );
                ctx.rig.apply(scene, angles.normalized());
            }
            _ => log::trace!(
                "orient: no usable direction to target {:?}, skipping frame",
                ctx.target
            ),
        }

        if done {
            TaskStatus::Done
        } else {
            TaskStatus::Pending
        }
    }
}

/// Direct re-aim at the target every frame.
#[derive(Debug, Clone)]
pub(crate) struct TrackPhase {
    duration: Option<f32>,
    elapsed: f32,
}

impl TrackPhase {
    fn is_exhausted(&self) -> bool {
        self.duration.is_some_and(|d| self.elapsed >= d)
    }

    fn step(
        &mut self,
        ctx: &StepContext<'_>,
        scene: &mut dyn TransformProvider,
        delta: f32,
    ) -> TaskStatus {
        if self.is_exhausted() {
            return TaskStatus::Done;
        }
        self.elapsed += delta;

        match ctx.rig.desired(scene, ctx.target) {
            Some(angles) => ctx.rig.apply(scene, angles),
            None => log::trace!(
                "track: no usable direction to target {:?}, skipping frame",
                ctx.target
            ),
        }

        if self.is_exhausted() {
            TaskStatus::Done
        } else {
            TaskStatus::Pending
        }
    }
}

// ---------------------------------------------------------------------------
// CameraTask
// ---------------------------------------------------------------------------

/// A cancellable, frame-stepped orient/track job.
///
/// Step it once per frame (directly or through a
/// [`TaskRunner`](crate::schedule::TaskRunner)) until it reports
/// [`TaskStatus::Done`]. Dropping or [cancelling](Self::cancel) it at any
/// frame boundary releases the orienter for the next request.
#[derive(Debug)]
pub struct CameraTask {
    rig: RigHandles,
    target: TransformId,
    curve: MotionCurve,
    phases: VecDeque<Phase>,
    guard: Option<BusyGuard>,
}

impl CameraTask {
    pub(crate) fn new(
        rig: RigHandles,
        target: TransformId,
        curve: MotionCurve,
        phases: VecDeque<Phase>,
        guard: Option<BusyGuard>,
    ) -> Self {
        let mut task = Self {
            rig,
            target,
            curve,
            phases,
            guard,
        };
        task.skip_exhausted();
        if task.phases.is_empty() {
            task.release();
        }
        task
    }

    /// Transform this task aims at.
    #[must_use]
    pub const fn target(&self) -> TransformId {
        self.target
    }

    /// Whether the task has nothing left to run.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phases.is_empty()
    }

    /// Whether the task is currently in its orient blend.
    #[must_use]
    pub fn is_orienting(&self) -> bool {
        matches!(self.phases.front(), Some(Phase::Orient(_)))
    }

    /// Whether the task is currently tracking.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self.phases.front(), Some(Phase::Track(_)))
    }

    /// Stop at the current frame boundary and release the orienter.
    pub fn cancel(&mut self) {
        if !self.phases.is_empty() {
            log::debug!("camera task toward {:?} cancelled", self.target);
        }
        self.phases.clear();
        self.release();
    }

    fn skip_exhausted(&mut self) {
        while self.phases.front().is_some_and(Phase::is_exhausted) {
            let _ = self.phases.pop_front();
        }
    }

    fn release(&mut self) {
        if self.guard.take().is_some() {
            log::debug!("camera task toward {:?} released", self.target);
        }
    }
}

impl FrameTask for CameraTask {
    fn step(
        &mut self,
        scene: &mut dyn TransformProvider,
        time: FrameTime,
    ) -> TaskStatus {
        let ctx = StepContext {
            rig: self.rig,
            target: self.target,
            curve: &self.curve,
        };
        let Some(phase) = self.phases.front_mut() else {
            self.release();
            return TaskStatus::Done;
        };
        if phase.step(&ctx, scene, time.delta) == TaskStatus::Pending {
            return TaskStatus::Pending;
        }

        let _ = self.phases.pop_front();
        self.skip_exhausted();
        if self.phases.is_empty() {
            self.release();
            TaskStatus::Done
        } else {
            TaskStatus::Pending
        }
    }

    fn is_finished(&self) -> bool {
        CameraTask::is_finished(self)
    }
}
