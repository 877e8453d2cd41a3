//! Frame Output
//!
//! Two ways of getting a frame onto the terminal:
//!
//! - [`TerminalSink`]: hands the whole grid to ratatui, which diffs it against
//!   the previous frame and only repaints changed cells.
//! - [`RawSink`]: writes the frame bytes straight through. Used for the
//!   incremental colored variant, whose frames are already positioned escape
//!   sequences and must not be cleared between frames.

use std::io::{self, Write};

use ratatui::backend::Backend;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;

/// Destination for rendered frames
pub trait FrameSink {
    /// Write output verbatim (resize preambles)
    fn write_raw(&mut self, output: &str) -> io::Result<()>;

    /// Show a frame
    fn present(&mut self, frame: &str) -> io::Result<()>;
}

/// Full-grid output through ratatui
pub struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalSink<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Draw the grid from the top-left corner
    pub fn draw(&mut self, frame: &str) -> io::Result<()> {
        self.terminal.draw(|f| {
            let area = f.area();
            f.render_widget(Paragraph::new(frame), area);
        })?;
        Ok(())
    }
}

impl<B: Backend + Write> FrameSink for TerminalSink<B> {
    fn write_raw(&mut self, output: &str) -> io::Result<()> {
        let backend = self.terminal.backend_mut();
        backend.write_all(output.as_bytes())?;
        Write::flush(backend)
    }

    fn present(&mut self, frame: &str) -> io::Result<()> {
        self.draw(frame)
    }
}

/// Unbuffered passthrough output
pub struct RawSink<W: Write> {
    out: W,
}

impl<W: Write> RawSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for RawSink<W> {
    fn write_raw(&mut self, output: &str) -> io::Result<()> {
        self.out.write_all(output.as_bytes())?;
        self.out.flush()
    }

    fn present(&mut self, frame: &str) -> io::Result<()> {
        if frame.is_empty() {
            return Ok(());
        }
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}
