//! Frame orchestrator
//!
//! Owns the session, reads the clock once per frame and runs
//! step -> camera -> draw submission in that order.

use std::collections::VecDeque;

use glam::Vec2;
use serde::Serialize;

use crate::assets::SceneAssets;
use crate::consts::*;
use crate::renderer::{self, FrameStats, RenderTarget};
use crate::settings::Settings;
use crate::sim::{
    CameraView, Clock, FrameEvents, FrameInput, GameState, ManualClock, Possession, projection,
    step,
};
use crate::sim::camera::default_aspect;

/// Source of per-frame input snapshots (window/device backend)
pub trait InputSource {
    /// Sample devices for the coming frame
    fn poll(&mut self) -> FrameInput;
    /// Window close or equivalent
    fn close_requested(&self) -> bool;
}

/// Result of one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub now: f32,
    pub dt: f32,
    pub events: FrameEvents,
    pub stats: FrameStats,
}

/// Totals over a `run`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub explosions: u32,
    pub explosions_finished: u32,
    pub dashes: u32,
    pub entered: u32,
    pub exited: u32,
    pub resets: u32,
    pub peak_particles: usize,
}

impl RunSummary {
    fn record(&mut self, report: &FrameReport) {
        let events = &report.events;
        self.frames += 1;
        self.explosions += events.exploded.len() as u32;
        self.explosions_finished += events.finished.len() as u32;
        self.dashes += u32::from(events.dashed);
        self.resets += u32::from(events.reset);
        match events.possession {
            Some(Possession::Entered(_)) => self.entered += 1,
            Some(Possession::Exited(_)) => self.exited += 1,
            None => {}
        }
        self.peak_particles = self.peak_particles.max(report.stats.particles);
    }
}

pub struct Game<C: Clock> {
    pub state: GameState,
    pub assets: SceneAssets,
    clock: C,
    settings: Settings,
    last_frame: f32,
    aspect: f32,
}

impl<C: Clock> Game<C> {
    pub fn new(clock: C, settings: Settings, assets: SceneAssets) -> Self {
        let now = clock.now();
        log::info!(
            "Session start: seed={}, {} particles, {:?}",
            settings.seed,
            settings.particle_capacity,
            settings.emit_policy
        );
        Self {
            state: GameState::from_settings(&settings, now),
            assets,
            clock,
            settings,
            last_frame: now,
            aspect: default_aspect(),
        }
    }

    /// Track framebuffer resizes
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Camera for the current state
    pub fn camera(&self) -> CameraView {
        CameraView::follow(
            self.state.camera_target(),
            self.state.player.yaw,
            self.state.player.pitch,
            FOLLOW_DISTANCE,
        )
    }

    /// Simulate and draw one frame
    pub fn frame(&mut self, input: &FrameInput, target: &mut impl RenderTarget) -> FrameReport {
        let now = self.clock.now();
        let dt = (now - self.last_frame).max(0.0);
        self.last_frame = now;

        let events = step(&mut self.state, input, now, dt);
        let camera = self.camera();
        let stats = renderer::submit_frame(
            target,
            &self.assets,
            &self.state,
            &camera,
            projection(self.aspect),
            now,
            self.settings.point_size,
        );

        FrameReport {
            now,
            dt,
            events,
            stats,
        }
    }

    /// Run frames until the source closes or quit is pressed
    pub fn run(
        &mut self,
        source: &mut impl InputSource,
        target: &mut impl RenderTarget,
    ) -> RunSummary {
        renderer::prepare(target, &self.assets);

        let mut summary = RunSummary::default();
        while !source.close_requested() {
            let input = source.poll();
            if input.quit {
                log::info!("Quit requested");
                break;
            }
            let report = self.frame(&input, target);
            summary.record(&report);
        }
        log::info!("Stopped after {} frames", summary.frames);
        summary
    }
}

/// Plays back a fixed list of inputs, advancing a manual clock by `dt` per frame
pub struct ScriptedInput<'a> {
    clock: &'a ManualClock,
    dt: f32,
    frames: VecDeque<FrameInput>,
}

impl<'a> ScriptedInput<'a> {
    pub fn new(clock: &'a ManualClock, dt: f32, frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            clock,
            dt,
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput<'_> {
    fn poll(&mut self) -> FrameInput {
        self.clock.advance(self.dt);
        self.frames.pop_front().unwrap_or_default()
    }

    fn close_requested(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Frame time used by the scripted demo
pub const DEMO_DT: f32 = 1.0 / 60.0;

/// Scripted tour: turn toward a parked car and dash into it, wait out the
/// blast, walk to the drivable car, drive it, get out, reset, quit
pub fn demo_script() -> Vec<FrameInput> {
    fn hold(script: &mut Vec<FrameInput>, frames: usize, input: FrameInput) {
        script.extend(std::iter::repeat_n(input, frames));
    }
    let look = |x: f32| FrameInput {
        cursor: Some(Vec2::new(x, 600.0)),
        ..Default::default()
    };
    let idle = FrameInput::default();

    let mut script = Vec::new();

    // Seed the cursor, then swing 135 degrees right to face (-4, 0, -4)
    script.push(look(900.0));
    script.push(look(900.0 + 135.0 / MOUSE_SENSITIVITY));
    script.push(FrameInput {
        dash: true,
        ..Default::default()
    });
    hold(&mut script, 150, idle.clone());

    // Turn toward the drivable car and walk up to it
    let facing_car = 900.0 + (135.0 - 51.8) / MOUSE_SENSITIVITY;
    script.push(look(facing_car));
    hold(
        &mut script,
        72,
        FrameInput {
            forward: true,
            ..Default::default()
        },
    );

    let interact = FrameInput {
        interact: true,
        ..Default::default()
    };
    script.push(interact.clone());
    hold(
        &mut script,
        60,
        FrameInput {
            forward: true,
            ..Default::default()
        },
    );
    hold(&mut script, 5, idle.clone());
    script.push(interact);
    hold(&mut script, 5, idle.clone());

    script.push(FrameInput {
        reset: true,
        ..Default::default()
    });
    hold(&mut script, 5, idle);
    script.push(FrameInput {
        quit: true,
        ..Default::default()
    });
    script
}
