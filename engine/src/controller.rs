//! Animation Controller
//!
//! Single owner of all per-frame state: the walker, the surface, the color
//! cycle and the random source. The host delivers one [`PipeEvent`] at a time
//! and gets back an [`Update`] telling it when (or whether) to tick again and
//! what, if anything, to write before the next frame.
//!
//! # State Machine
//!
//! ```text
//!                 Resize (usable size)
//!   Uninitialized ──────────────────────▶ Ready ◀─┐
//!        ▲                                  │     │ Tick: step, draw,
//!        └──────── Resize (unusable size) ──┘     │ schedule next tick
//!                                                 └─┘
//! ```
//!
//! A key press in any state asks the host to quit.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::color::ColorCycle;
use crate::config::{PipesConfig, Variant};
use crate::surface::{Bounds, Cell, Coord, DenseGrid, GridSurface, SparseCanvas};
use crate::walker::{PathWalker, Seeker, Wanderer};

/// Events the host delivers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipeEvent {
    /// Terminal size changed (also sent once at startup)
    Resize { width: u16, height: u16 },
    /// The requested frame delay elapsed
    Tick,
    /// Any key: stop the animation
    KeyPress,
    /// Anything else the host saw (mouse, focus, paste...)
    Other,
}

/// What the host should do next
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Nothing to schedule
    None,
    /// Deliver a [`PipeEvent::Tick`] after this delay
    Tick(Duration),
    /// Stop the event loop
    Quit,
}

/// Result of handling one event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Update {
    pub command: Command,
    /// Raw output to write before the next frame
    pub output: Option<String>,
}

impl Update {
    fn command(command: Command) -> Self {
        Self {
            command,
            output: None,
        }
    }
}

/// Lifecycle of the controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControllerState {
    /// No usable size seen yet
    #[default]
    Uninitialized,
    /// Sized and drawing
    Ready,
}

/// Owns and drives one pipe animation
pub struct AnimationController {
    variant: Variant,
    state: ControllerState,
    walker: Box<dyn PathWalker>,
    surface: Box<dyn GridSurface>,
    colors: Option<ColorCycle>,
    rng: StdRng,
    bounds: Bounds,
    /// A tick has been requested and not yet delivered
    tick_pending: bool,
    frames: u64,
}

impl AnimationController {
    /// Build the controller for the configured variant
    #[must_use]
    pub fn new(config: &PipesConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        match config.variant {
            Variant::Classic => Self::with_parts(
                Variant::Classic,
                Box::new(Wanderer::new()),
                Box::new(DenseGrid::new()),
                None,
                rng,
            ),
            Variant::Rainbow => Self::with_parts(
                Variant::Rainbow,
                Box::new(Seeker::new()),
                Box::new(SparseCanvas::new()),
                Some(ColorCycle::new()),
                rng,
            ),
        }
    }

    /// Assemble a controller from explicit parts
    #[must_use]
    pub fn with_parts(
        variant: Variant,
        walker: Box<dyn PathWalker>,
        surface: Box<dyn GridSurface>,
        colors: Option<ColorCycle>,
        rng: StdRng,
    ) -> Self {
        Self {
            variant,
            state: ControllerState::Uninitialized,
            walker,
            surface,
            colors,
            rng,
            bounds: Bounds::default(),
            tick_pending: false,
            frames: 0,
        }
    }

    /// Request the first tick
    pub fn init(&mut self) -> Command {
        self.tick_pending = true;
        Command::Tick(self.frame_interval())
    }

    /// Process one event
    pub fn handle(&mut self, event: PipeEvent) -> Update {
        match event {
            PipeEvent::Resize { width, height } => self.resize(width, height),
            PipeEvent::Tick => self.tick(),
            PipeEvent::KeyPress => {
                tracing::info!(frames = self.frames, "key pressed, stopping animation");
                Update::command(Command::Quit)
            }
            PipeEvent::Other => Update::command(Command::None),
        }
    }

    /// Current frame string
    #[must_use]
    pub fn view(&self) -> String {
        self.surface.render()
    }

    fn resize(&mut self, width: u16, height: u16) -> Update {
        let bounds = Bounds::new(width, height).shrink(self.variant.margin());
        self.bounds = bounds;

        self.walker.reset(bounds);
        let output = self.surface.reset(bounds);
        if let Some(colors) = self.colors.as_mut() {
            colors.reset();
        }

        self.state = if self.surface.is_ready() && self.walker.accepts(bounds) {
            ControllerState::Ready
        } else {
            tracing::warn!(
                width,
                height,
                variant = %self.variant,
                "terminal too small to draw, waiting for a larger size"
            );
            ControllerState::Uninitialized
        };

        tracing::debug!(
            width = bounds.width,
            height = bounds.height,
            state = ?self.state,
            "grid resized"
        );

        // Ticks stop while not ready; restart them once drawing is possible
        let command = if self.is_ready() && !self.tick_pending {
            self.tick_pending = true;
            Command::Tick(self.frame_interval())
        } else {
            Command::None
        };

        Update { command, output }
    }

    fn tick(&mut self) -> Update {
        self.tick_pending = false;
        if !self.is_ready() {
            return Update::command(Command::None);
        }

        if let Some(stroke) = self.walker.step(&mut self.rng) {
            let color = self.colors.as_mut().map(ColorCycle::next_color);
            self.surface.set(Cell {
                at: stroke.at,
                glyph: stroke.glyph,
                color,
            });
        }
        self.frames += 1;

        self.tick_pending = true;
        Update::command(Command::Tick(self.frame_interval()))
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == ControllerState::Ready
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.variant.frame_interval()
    }

    /// Drawing area after margins
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Ticks that advanced the animation
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Current pipe head
    #[must_use]
    pub fn head(&self) -> Coord {
        self.walker.position()
    }

    /// Current hue, for variants that cycle colors
    #[must_use]
    pub fn hue(&self) -> Option<u16> {
        self.colors.as_ref().map(ColorCycle::hue)
    }
}
