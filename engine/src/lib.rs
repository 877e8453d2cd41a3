//! Pipes Engine - Headless Pipe Screensaver Core
//!
//! This crate provides the pipe-path generation and grid-rendering logic for
//! the pipes screensaver, completely independent of any terminal library. The
//! host (see the `pipes-tui` crate) feeds it events and writes out whatever
//! frame string it produces.
//!
//! # Architecture
//!
//! ```text
//!            host event loop (resize / key / timer)
//!                          │
//!                     PipeEvent (in)
//!                          │
//! ┌────────────────────────┴───────────────────────────────┐
//! │                  AnimationController                   │
//! │  ┌────────────┐   ┌─────────────┐   ┌──────────────┐   │
//! │  │ PathWalker │──▶│ GridSurface │   │  ColorCycle  │   │
//! │  │ (Wanderer/ │   │ (DenseGrid/ │◀──│  (rainbow    │   │
//! │  │  Seeker)   │   │ SparseCanvas│   │   only)      │   │
//! │  └────────────┘   └─────────────┘   └──────────────┘   │
//! └────────────────────────┬───────────────────────────────┘
//!                          │
//!              Update { command, output } (out)
//! ```
//!
//! # Variants
//!
//! - [`Variant::Classic`]: free wandering pipe on a wrap-around dense grid,
//!   redrawn in full at 60 fps.
//! - [`Variant::Rainbow`]: target-seeking pipe painted one colored cell per
//!   frame with positioned escape sequences at 30 fps.
//!
//! # Quick Start
//!
//! ```
//! use pipes_engine::{AnimationController, Command, PipeEvent, PipesConfig, Variant};
//!
//! let config = PipesConfig {
//!     variant: Variant::Classic,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//! let mut controller = AnimationController::new(&config);
//!
//! controller.handle(PipeEvent::Resize { width: 20, height: 8 });
//! let update = controller.handle(PipeEvent::Tick);
//! assert!(matches!(update.command, Command::Tick(_)));
//!
//! let frame = controller.view();
//! assert_eq!(frame.lines().count(), 8);
//! ```

pub mod color;
pub mod config;
pub mod controller;
pub mod direction;
pub mod error;
pub mod surface;
pub mod walker;

pub use color::{hsv_to_rgb, ColorCycle, Rgb};
pub use config::{
    default_config_path, load_config, load_config_from_path, ConfigSource, PipesConfig, Variant,
};
pub use controller::{AnimationController, Command, ControllerState, PipeEvent, Update};
pub use direction::{Direction, Glyph};
pub use error::ConfigError;
pub use surface::{Bounds, Cell, CellRecord, Coord, DenseGrid, GridSurface, SparseCanvas};
pub use walker::{PathWalker, Seeker, Stroke, Wanderer};
