//! Cooperative, frame-synchronous task scheduling.
//!
//! A [`FrameTask`] is stepped exactly once per frame by the host until it
//! reports [`TaskStatus::Done`] or is cancelled. Cancelling a task drops
//! it, so any cleanup a task owns runs from `Drop`.

use crate::scene::TransformProvider;

/// Per-frame timing handed to every task step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Simulated seconds since the clock started.
    pub elapsed: f32,
}

/// Result of stepping a task for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// The task wants to be stepped again next frame.
    Pending,
    /// The task finished; it must not be stepped again.
    Done,
}

/// A resumable unit of per-frame work.
pub trait FrameTask {
    /// Advance the task by one frame.
    fn step(
        &mut self,
        scene: &mut dyn TransformProvider,
        time: FrameTime,
    ) -> TaskStatus;

    /// Whether the task has already finished (a finished task is never
    /// queued by [`TaskRunner::spawn`]).
    fn is_finished(&self) -> bool {
        false
    }
}

/// Handle returned by [`TaskRunner::spawn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// Minimal host scheduler: steps every live task once per
/// [`tick`](Self::tick), in spawn order.
pub struct TaskRunner {
    tasks: Vec<(TaskId, Box<dyn FrameTask>)>,
    next_id: u64,
    elapsed: f32,
}

impl TaskRunner {
    /// Create an empty runner.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
            elapsed: 0.0,
        }
    }

    /// Queue a task to be stepped from the next tick onward.
    pub fn spawn(&mut self, task: impl FrameTask + 'static) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        if task.is_finished() {
            log::debug!("task {} finished before its first frame", id.0);
        } else {
            self.tasks.push((id, Box::new(task)));
        }
        id
    }

    /// Step every live task once with `delta` seconds of frame time and
    /// drop the ones that completed.
    pub fn tick(&mut self, scene: &mut dyn TransformProvider, delta: f32) {
        self.elapsed += delta;
        let time = FrameTime {
            delta,
            elapsed: self.elapsed,
        };
        self.step_all(scene, time);
    }

    /// Step every live task with an externally produced [`FrameTime`]
    /// (e.g. from a [`FrameClock`](crate::util::frame_timing::FrameClock)).
    pub fn step_all(&mut self, scene: &mut dyn TransformProvider, time: FrameTime) {
        self.elapsed = time.elapsed;
        self.tasks.retain_mut(|(id, task)| {
            let done = task.step(scene, time) == TaskStatus::Done;
            if done {
                log::debug!("task {} completed at t={:.3}s", id.0, time.elapsed);
            }
            !done
        });
    }

    /// Cancel a task at the frame boundary. Returns `false` if it was not
    /// running.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|(task_id, _)| *task_id != id);
        let cancelled = self.tasks.len() != before;
        if cancelled {
            log::debug!("task {} cancelled", id.0);
        }
        cancelled
    }

    /// Cancel every running task.
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Whether `id` is still being stepped.
    #[must_use]
    pub fn is_running(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|(task_id, _)| *task_id == id)
    }

    /// Number of live tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no task is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new()
    }
}
