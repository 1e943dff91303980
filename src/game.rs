//! Frame loop
//!
//! [`Game`] owns the surface, the renderer and the simulation state, and
//! runs one frame per [`Game::step`]: poll input, read the clock, simulate,
//! render. Once the simulation closes, no further frames are simulated or
//! rendered.

use serde::Serialize;

use crate::error::InitError;
use crate::platform::{Surface, actions};
use crate::renderer::{Renderer, draw_list, render_frame};
use crate::settings::Settings;
use crate::sim::{FrameReport, GameState, TickInput, tick};

/// Snapshot the surface's pressed state into tick input
pub fn read_input<S: Surface + ?Sized>(surface: &S) -> TickInput {
    TickInput {
        up: surface.is_key_pressed(actions::UP),
        down: surface.is_key_pressed(actions::DOWN),
        left: surface.is_key_pressed(actions::LEFT),
        right: surface.is_key_pressed(actions::RIGHT),
        fire: surface.is_key_pressed(actions::FIRE),
        pointer_down: surface.is_pointer_down(),
        pointer: surface.pointer_position(),
        quit: surface.is_key_pressed(actions::QUIT) || !surface.is_open(),
    }
}

/// Totals accumulated over a run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub shots_fired: u64,
    pub enemies_killed: u64,
    pub projectiles_culled: u64,
    pub enemies_remaining: usize,
    pub projectiles_in_flight: usize,
}

impl RunSummary {
    fn absorb(&mut self, report: &FrameReport) {
        self.frames += 1;
        self.shots_fired += u64::from(report.fired);
        self.enemies_killed += report.enemies_culled as u64;
        self.projectiles_culled += report.projectiles_culled as u64;
    }
}

/// Game instance holding all state
pub struct Game<S: Surface, R: Renderer> {
    surface: S,
    renderer: R,
    state: GameState,
    summary: RunSummary,
}

impl<S: Surface, R: Renderer> Game<S, R> {
    /// Validate settings and spawn the initial world using the surface's
    /// random source. Fails before any frame runs.
    pub fn new(settings: Settings, mut surface: S, renderer: R) -> Result<Self, InitError> {
        if !surface.is_open() {
            return Err(InitError::SurfaceClosed);
        }
        let state = GameState::new(settings, &mut surface)?;
        let summary = RunSummary {
            enemies_remaining: state.enemies.len(),
            ..Default::default()
        };

        Ok(Self {
            surface,
            renderer,
            state,
            summary,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Request close from outside the loop
    pub fn close(&mut self) {
        self.state.close();
        self.surface.close();
    }

    /// Run a single frame. Returns `false` once the game has closed.
    pub fn step(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }

        self.surface.process_events();
        let dt = self.surface.reset_clock();
        let input = read_input(&self.surface);

        let report = tick(&mut self.state, &input, dt);
        if !self.state.is_running() {
            self.surface.close();
            return false;
        }

        self.summary.absorb(&report);
        self.summary.enemies_remaining = self.state.enemies.len();
        self.summary.projectiles_in_flight = self.state.projectiles.len();
        if !report.hits.is_empty() {
            log::debug!(
                "Frame {}: {} hit(s), {} enemies left",
                self.state.frame,
                report.hits.len(),
                self.state.enemies.len()
            );
        }

        let rects = draw_list(&self.state, input.pointer);
        render_frame(&mut self.renderer, &rects);
        true
    }

    /// Run frames until the game closes
    pub fn run(mut self) -> RunSummary {
        log::info!("Starting frame loop");
        while self.step() {}

        match serde_json::to_string(&self.state) {
            Ok(json) => log::debug!("Final state: {}", json),
            Err(e) => log::warn!("Could not serialize final state: {}", e),
        }
        self.summary
    }
}
