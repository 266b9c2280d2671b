//! Headless trackcam demo.
//!
//! Drives an actor/camera rig at a fixed 60 Hz step while a target orbits
//! it, feeding scripted clicks through the default action bindings and
//! logging the rig's yaw and pitch. Pass a TOML options file as the first
//! argument to override the defaults; run with `RUST_LOG=info` to see the
//! output.

use std::path::Path;
use std::sync::Arc;

use glam::Vec3;
use trackcam::camera::{CameraOrienter, OrienterInput};
use trackcam::input::{ActionInputMap, InputEvent, InputState, MouseButton};
use trackcam::options::Options;
use trackcam::scene::{SceneGraph, Transform, TransformId};
use trackcam::schedule::TaskRunner;
use trackcam::util::frame_timing::FrameClock;
use trackcam::TrackcamError;

const FRAME_DELTA: f32 = 1.0 / 60.0;
const TOTAL_FRAMES: u32 = 1200;
const REPORT_EVERY: u32 = 30;
const ORBIT_RADIUS: f32 = 12.0;
const EYE_HEIGHT: f32 = 1.6;

/// Scripted mouse clicks, by frame.
const SCRIPT: &[(u32, MouseButton)] = &[
    (30, MouseButton::Left),
    (120, MouseButton::Left),
    (900, MouseButton::Right),
];

struct Demo {
    scene: SceneGraph,
    target: TransformId,
    orienter: CameraOrienter,
    orienter_input: OrienterInput,
    actions: ActionInputMap,
    input: InputState,
    runner: TaskRunner,
    clock: FrameClock,
}

impl Demo {
    fn new(options: Options) -> Result<Self, TrackcamError> {
        let mut scene = SceneGraph::new();
        let actor = scene.spawn(Transform::IDENTITY);
        let camera = scene.spawn_child(
            actor,
            Transform::from_translation(Vec3::new(0.0, EYE_HEIGHT, 0.0)),
        );
        let target = scene.spawn(Transform::from_translation(orbit(0.0)));

        let orienter =
            CameraOrienter::new(&scene, Some(actor), camera, &options.orienter)?;

        Ok(Self {
            scene,
            target,
            orienter,
            orienter_input: OrienterInput::new(&options.orienter),
            actions: ActionInputMap::new(Arc::new(options.keybindings)),
            input: InputState::new(),
            runner: TaskRunner::new(),
            clock: FrameClock::new(),
        })
    }

    fn frame(&mut self, index: u32) -> Result<(), TrackcamError> {
        for &(_, button) in SCRIPT.iter().filter(|(at, _)| *at == index) {
            log::info!("frame {index}: click {button:?}");
            self.input.handle_event(InputEvent::MouseButton {
                button,
                pressed: true,
            });
        }

        if let Some(task) = self.orienter_input.poll(
            &self.orienter,
            &self.actions,
            &self.input,
            self.target,
        )? {
            let _ = self.runner.spawn(task);
        } else if SCRIPT.iter().any(|(at, _)| *at == index) {
            log::info!("frame {index}: orienter busy, click ignored");
        }

        let time = self.clock.advance(FRAME_DELTA);
        self.scene.set_translation(self.target, orbit(time.elapsed));
        self.runner.step_all(&mut self.scene, time);

        for &(_, button) in SCRIPT.iter().filter(|(at, _)| *at == index) {
            self.input.handle_event(InputEvent::MouseButton {
                button,
                pressed: false,
            });
        }
        self.input.end_frame();

        if index % REPORT_EVERY == 0 {
            self.report(index);
        }
        Ok(())
    }

    fn report(&self, index: u32) {
        let Some(angles) = self.orienter.rig().current(&self.scene) else {
            return;
        };
        let state = if self.orienter.is_busy() { "busy" } else { "idle" };
        log::info!(
            "frame {index:4}: yaw {:7.2}° pitch {:6.2}° ({state})",
            angles.yaw,
            angles.pitch,
        );
    }
}

/// Target position on a slow orbit around the actor, bobbing vertically.
fn orbit(seconds: f32) -> Vec3 {
    let angle = seconds * 0.4;
    Vec3::new(
        ORBIT_RADIUS * angle.sin(),
        EYE_HEIGHT + 3.0 * (seconds * 0.7).sin(),
        ORBIT_RADIUS * angle.cos(),
    )
}

fn load_options() -> Result<Options, TrackcamError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading options from {path}");
            Options::load(Path::new(&path))
        }
        None => Ok(Options::default()),
    }
}

fn run() -> Result<(), TrackcamError> {
    let mut demo = Demo::new(load_options()?)?;
    for index in 0..TOTAL_FRAMES {
        demo.frame(index)?;
    }
    log::info!(
        "finished {TOTAL_FRAMES} frames ({:.1}s simulated at {:.0} fps)",
        demo.clock.elapsed(),
        demo.clock.fps()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
