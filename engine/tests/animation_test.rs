//! Animation Integration Tests
//!
//! Drive the controller through host events the way the terminal surface does
//! and check the frames it produces.
//!
//! The rainbow variant only ever emits the newest cell, relying on the
//! terminal to keep the rest. Instead of a terminal these tests keep a
//! [`FrameCapture`] of every write.

use std::time::Duration;

use pretty_assertions::assert_eq;

use pipes_engine::{
    hsv_to_rgb, AnimationController, Command, Coord, PipeEvent, PipesConfig, Rgb, Variant,
};

// ============================================================================
// Frame Capture
// ============================================================================

/// One positioned, colored glyph parsed back out of an escape sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Painted {
    at: Coord,
    color: Rgb,
    glyph: char,
}

/// Everything written to the fake terminal, in order
#[derive(Default)]
struct FrameCapture {
    writes: Vec<String>,
}

impl FrameCapture {
    fn push(&mut self, output: String) {
        if !output.is_empty() {
            self.writes.push(output);
        }
    }

    fn painted(&self) -> Vec<Painted> {
        self.writes.iter().filter_map(|w| parse_escape(w)).collect()
    }
}

/// Parse `ESC[row;colH ESC[38;2;r;g;bm glyph ESC[0m`
fn parse_escape(s: &str) -> Option<Painted> {
    let rest = s.strip_prefix("\x1b[")?;
    let (pos, rest) = rest.split_once('H')?;
    let (row, col) = pos.split_once(';')?;

    let rest = rest.strip_prefix("\x1b[38;2;")?;
    let (rgb, rest) = rest.split_once('m')?;
    let mut channels = rgb.split(';').map(|c| c.parse::<u8>().ok());
    let color = Rgb::new(channels.next()??, channels.next()??, channels.next()??);

    let glyph_part = rest.strip_suffix("\x1b[0m")?;
    let mut chars = glyph_part.chars();
    let glyph = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    Some(Painted {
        at: Coord::new(col.parse::<i32>().ok()? - 1, row.parse::<i32>().ok()? - 1),
        color,
        glyph,
    })
}

fn controller(variant: Variant, seed: u64) -> AnimationController {
    AnimationController::new(&PipesConfig {
        variant,
        seed: Some(seed),
        ..Default::default()
    })
}

const PIPE_CHARS: [char; 7] = ['═', '║', '╗', '╝', '╚', '╔', '.'];

// ============================================================================
// Classic
// ============================================================================

#[test]
fn test_classic_frame_shape() {
    let mut pipes = controller(Variant::Classic, 1);
    assert_eq!(pipes.init(), Command::Tick(Duration::from_secs(1) / 60));
    pipes.handle(PipeEvent::Resize {
        width: 10,
        height: 5,
    });

    for _ in 0..300 {
        let update = pipes.handle(PipeEvent::Tick);
        assert_eq!(update.command, Command::Tick(Duration::from_secs(1) / 60));
        assert_eq!(update.output, None);
    }

    let frame = pipes.view();
    let rows: Vec<&str> = frame.split('\n').collect();
    assert_eq!(rows.len(), 5);
    for row in rows {
        assert_eq!(row.chars().count(), 10);
        assert!(row.chars().all(|c| c == ' ' || PIPE_CHARS.contains(&c)));
    }
    assert!(frame.chars().any(|c| PIPE_CHARS.contains(&c)));
}

#[test]
fn test_classic_first_two_ticks_draw_nothing() {
    let mut pipes = controller(Variant::Classic, 2);
    pipes.handle(PipeEvent::Resize {
        width: 12,
        height: 6,
    });
    let blank = pipes.view();

    pipes.handle(PipeEvent::Tick);
    assert_eq!(pipes.view(), blank);

    pipes.handle(PipeEvent::Tick);
    assert_ne!(pipes.view(), blank);
}

#[test]
fn test_classic_resize_wipes_grid() {
    let mut pipes = controller(Variant::Classic, 3);
    pipes.handle(PipeEvent::Resize {
        width: 8,
        height: 4,
    });
    for _ in 0..40 {
        pipes.handle(PipeEvent::Tick);
    }

    pipes.handle(PipeEvent::Resize {
        width: 6,
        height: 3,
    });
    assert_eq!(pipes.view(), "      \n      \n      ");
    assert_eq!(pipes.head(), Coord::new(3, 1));
}

#[test]
fn test_classic_seeded_runs_repeat() {
    let run = |seed| {
        let mut pipes = controller(Variant::Classic, seed);
        pipes.handle(PipeEvent::Resize {
            width: 40,
            height: 15,
        });
        for _ in 0..500 {
            pipes.handle(PipeEvent::Tick);
        }
        pipes.view()
    };
    assert_eq!(run(77), run(77));
}

// ============================================================================
// Rainbow
// ============================================================================

#[test]
fn test_rainbow_paints_one_cell_per_tick() {
    let mut pipes = controller(Variant::Rainbow, 4);
    let mut capture = FrameCapture::default();

    let update = pipes.handle(PipeEvent::Resize {
        width: 42,
        height: 22,
    });
    assert_eq!(update.output.as_deref(), Some("\n".repeat(20).as_str()));
    assert_eq!(pipes.view(), "");

    for _ in 0..200 {
        pipes.handle(PipeEvent::Tick);
        capture.push(pipes.view());
    }

    let painted = capture.painted();
    assert_eq!(painted.len(), 200);

    // Cells are drawn along a connected path, one axis at a time
    for pair in painted.windows(2) {
        let (a, b) = (pair[0].at, pair[1].at);
        assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1, "{a:?} -> {b:?}");
    }

    // Starting at the center of the 40x20 drawing area
    assert_eq!(painted[0].at, Coord::new(20, 10));
}

#[test]
fn test_rainbow_colors_follow_hue() {
    let mut pipes = controller(Variant::Rainbow, 5);
    let mut capture = FrameCapture::default();
    pipes.handle(PipeEvent::Resize {
        width: 30,
        height: 30,
    });

    for _ in 0..120 {
        pipes.handle(PipeEvent::Tick);
        capture.push(pipes.view());
    }

    for (hue, cell) in capture.painted().iter().enumerate() {
        assert_eq!(cell.color, hsv_to_rgb(hue as f64, 1.0, 1.0));
    }
}

#[test]
fn test_rainbow_hue_returns_after_full_cycle() {
    let mut pipes = controller(Variant::Rainbow, 6);
    pipes.handle(PipeEvent::Resize {
        width: 50,
        height: 20,
    });
    assert_eq!(pipes.hue(), Some(0));

    for _ in 0..360 {
        pipes.handle(PipeEvent::Tick);
    }
    assert_eq!(pipes.hue(), Some(0));
    assert_eq!(pipes.frames(), 360);
}

#[test]
fn test_rainbow_stays_inside_drawing_area() {
    let mut pipes = controller(Variant::Rainbow, 7);
    let mut capture = FrameCapture::default();
    pipes.handle(PipeEvent::Resize {
        width: 12,
        height: 9,
    });

    for _ in 0..1_000 {
        pipes.handle(PipeEvent::Tick);
        capture.push(pipes.view());
    }

    let bounds = pipes.bounds();
    for cell in capture.painted() {
        assert!(bounds.contains(cell.at), "{cell:?} outside {bounds:?}");
    }
}

#[test]
fn test_key_press_ends_either_variant() {
    for variant in [Variant::Classic, Variant::Rainbow] {
        let mut pipes = controller(variant, 8);
        pipes.handle(PipeEvent::Resize {
            width: 30,
            height: 10,
        });
        pipes.handle(PipeEvent::Tick);
        assert_eq!(pipes.handle(PipeEvent::KeyPress).command, Command::Quit);
    }
}
