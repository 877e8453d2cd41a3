//! Pipes TUI - Terminal host for the pipes screensaver
//!
//! This crate is the event loop around [`pipes_engine::AnimationController`]:
//! it owns the terminal, turns crossterm events into engine events, waits out
//! the frame delays the engine asks for, and writes each frame.
//!
//! # Architecture
//!
//! - **App**: `tokio::select!` loop over terminal events and the tick timer
//! - **Events**: crossterm event translation
//! - **Schedule**: one-shot tick deadline
//! - **Sink**: frame output (ratatui full redraw, or raw escape writes)
//! - **Terminal**: raw mode / alternate screen setup and teardown

pub mod app;
pub mod cli;
pub mod events;
pub mod schedule;
pub mod sink;
pub mod terminal;

pub use app::App;
