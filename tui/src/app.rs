//! Main Application
//!
//! Drives the animation controller from two sources: terminal events and
//! the tick timer. Terminal events are polled first so a key press is never
//! starved by a busy frame timer.

use std::io;

use anyhow::{Context, Result};
use crossterm::event::Event;
use futures::{Stream, StreamExt};
use pipes_engine::{AnimationController, Command, PipeEvent, PipesConfig, Update};

use crate::events::translate;
use crate::schedule::TickScheduler;
use crate::sink::FrameSink;

/// Screensaver application
pub struct App {
    controller: AnimationController,
    scheduler: TickScheduler,
    running: bool,
}

impl App {
    pub fn new(config: &PipesConfig) -> Self {
        tracing::info!(
            variant = %config.variant,
            seed = ?config.seed,
            source = %config.source,
            "starting pipes"
        );
        Self::with_controller(AnimationController::new(config))
    }

    pub fn with_controller(controller: AnimationController) -> Self {
        Self {
            controller,
            scheduler: TickScheduler::new(),
            running: true,
        }
    }

    /// Main event loop
    ///
    /// `initial_size` is fed to the controller as the first resize, since
    /// terminals only report a size when it changes.
    pub async fn run<S, E>(
        &mut self,
        sink: &mut S,
        events: &mut E,
        initial_size: (u16, u16),
    ) -> Result<()>
    where
        S: FrameSink,
        E: Stream<Item = io::Result<Event>> + Unpin,
    {
        let command = self.controller.init();
        self.scheduler.apply(command);

        let (width, height) = initial_size;
        self.dispatch(sink, PipeEvent::Resize { width, height })?;

        while self.running {
            let next = tokio::select! {
                biased;

                maybe_event = events.next() => maybe_event.map(|event| event.map(|e| translate(&e))),
                _ = self.scheduler.wait() => Some(Ok(PipeEvent::Tick)),
            };

            let event = match next {
                Some(event) => event.context("Failed to read terminal event")?,
                None => {
                    tracing::debug!("terminal event stream closed");
                    self.running = false;
                    break;
                }
            };

            self.dispatch(sink, event)?;
        }

        tracing::info!(frames = self.controller.frames(), "animation stopped");
        Ok(())
    }

    fn dispatch<S: FrameSink>(&mut self, sink: &mut S, event: PipeEvent) -> Result<()> {
        let Update { command, output } = self.controller.handle(event);

        if let Some(output) = output {
            sink.write_raw(&output).context("Failed to write to terminal")?;
        }

        if command == Command::Quit {
            self.running = false;
        }
        self.scheduler.apply(command);

        if matches!(event, PipeEvent::Tick | PipeEvent::Resize { .. }) && self.running {
            sink.present(&self.controller.view()).context("Failed to draw frame")?;
        }

        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn controller(&self) -> &AnimationController {
        &self.controller
    }
}
