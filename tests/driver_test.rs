//! Driver loop phases against the in-memory surface.

use std::time::Duration;

use anyhow::Result;
use tui_snake::config::GameConfig;
use tui_snake::core::EndReason;
use tui_snake::driver::{Driver, Exit, Phase};
use tui_snake::input::InputQueue;
use tui_snake::term::{CellStyle, FrameBuffer, Surface};
use tui_snake::types::{GameAction, Point, BORDER_GLYPH, FOOD_GLYPH, SNAKE_GLYPH};

fn fast_config() -> GameConfig {
    GameConfig {
        seed: 7,
        tick: Duration::ZERO,
        game_over_hold: Duration::ZERO,
        log_path: None,
    }
}

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn driver_quit_terminates_without_stepping() {
    let mut fb = FrameBuffer::new(40, 20);
    let (tx, queue) = InputQueue::channel();
    let mut driver = Driver::new(&mut fb, queue, fast_config());

    tx.send(GameAction::MoveRight);
    tx.send(GameAction::Quit);

    assert_eq!(driver.tick().unwrap(), Phase::Terminated);
    assert_eq!(driver.game().ticks(), 0);
    assert_eq!(driver.tick().unwrap(), Phase::Terminated);
    assert!(driver.painted().is_empty());
}

#[test]
fn driver_quit_exits_run_without_summary() {
    let mut fb = FrameBuffer::new(40, 20);
    let (tx, queue) = InputQueue::channel();
    tx.send(GameAction::Quit);

    let exit = Driver::new(&mut fb, queue, fast_config()).run().unwrap();

    assert_eq!(exit, Exit::Quit { score: 0 });
    assert!(!all_text(&fb).contains("Game over!"));
}

#[test]
fn driver_applies_one_command_per_tick() {
    let mut fb = FrameBuffer::new(40, 20);
    let (tx, queue) = InputQueue::channel();
    let mut driver = Driver::new(&mut fb, queue, fast_config());

    // Last command wins: right, not left.
    tx.send(GameAction::MoveLeft);
    tx.send(GameAction::MoveRight);
    assert_eq!(driver.tick().unwrap(), Phase::Running);
    assert_eq!(driver.game().snake().head(), Point::new(5, 4));

    // Nothing queued: keep going right.
    driver.tick().unwrap();
    assert_eq!(driver.game().snake().head(), Point::new(5, 5));
}

#[test]
fn driver_renders_each_running_tick() {
    let mut fb = FrameBuffer::new(40, 20);
    let (_tx, queue) = InputQueue::channel();
    {
        let mut driver = Driver::new(&mut fb, queue, fast_config());
        driver.tick().unwrap();
        assert!(!driver.painted().is_empty());
    }

    // Field origin is (3, 5); the head moved to (4, 3).
    assert_eq!(fb.get(5 + 3, 3 + 4).unwrap().ch, SNAKE_GLYPH);
    assert!(fb.row_text(19).contains("Score: 0"));
}

#[test]
fn driver_pause_freezes_game_and_frame() {
    let mut fb = FrameBuffer::new(40, 20);
    let (tx, queue) = InputQueue::channel();
    let mut driver = Driver::new(&mut fb, queue, fast_config());

    driver.tick().unwrap();
    let painted = driver.painted().clone();
    let head = driver.game().snake().head();

    tx.send(GameAction::TogglePause);
    assert_eq!(driver.tick().unwrap(), Phase::Running);
    assert_eq!(driver.tick().unwrap(), Phase::Running);
    assert!(driver.game().paused());
    assert_eq!(driver.game().snake().head(), head);
    assert_eq!(driver.painted(), &painted);

    tx.send(GameAction::TogglePause);
    driver.tick().unwrap();
    assert!(!driver.game().paused());
    assert_ne!(driver.game().snake().head(), head);
}

#[test]
fn driver_runs_to_game_over_and_shows_summary() {
    let mut fb = FrameBuffer::new(40, 20);
    let (_tx, queue) = InputQueue::channel();

    let exit = Driver::new(&mut fb, queue, fast_config()).run().unwrap();

    assert_eq!(
        exit,
        Exit::GameOver {
            score: 0,
            reason: EndReason::HitWall
        }
    );
    let text = all_text(&fb);
    assert!(text.contains("Game over!"));
    assert!(text.contains("Your score is 0"));
}

#[test]
fn driver_stays_over_once_the_game_ends() {
    let mut fb = FrameBuffer::new(40, 20);
    let (tx, queue) = InputQueue::channel();
    let mut driver = Driver::new(&mut fb, queue, fast_config());

    let mut phase = Phase::Running;
    for _ in 0..6 {
        phase = driver.tick().unwrap();
    }
    assert_eq!(phase, Phase::Over);

    tx.send(GameAction::MoveLeft);
    let frozen = driver.game().clone();
    assert_eq!(driver.tick().unwrap(), Phase::Over);
    assert_eq!(driver.game(), &frozen);
}

#[test]
fn driver_keeps_running_after_input_disconnects() {
    let mut fb = FrameBuffer::new(40, 20);
    let (tx, queue) = InputQueue::channel();
    drop(tx);
    let mut driver = Driver::new(&mut fb, queue, fast_config());

    assert_eq!(driver.tick().unwrap(), Phase::Running);
    assert_eq!(driver.game().ticks(), 1);
    assert!(driver.input_lost());
}

#[test]
fn driver_input_is_not_lost_while_the_sender_lives() {
    let mut fb = FrameBuffer::new(40, 20);
    let (_tx, queue) = InputQueue::channel();
    let mut driver = Driver::new(&mut fb, queue, fast_config());

    driver.tick().unwrap();
    assert!(!driver.input_lost());
}

/// A framebuffer that changes size once, after a number of size checks.
struct ResizingSurface {
    fb: FrameBuffer,
    checks_before_resize: u32,
    resize_to: Option<(u16, u16)>,
    writes: usize,
}

impl Surface for ResizingSurface {
    fn size(&self) -> (u16, u16) {
        self.fb.size()
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.writes += 1;
        self.fb.set_cell(x, y, ch, style);
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }

    fn sync_size(&mut self) -> Result<bool> {
        if self.checks_before_resize > 0 {
            self.checks_before_resize -= 1;
            return Ok(false);
        }
        match self.resize_to.take() {
            Some((width, height)) => {
                self.fb = FrameBuffer::new(width, height);
                self.writes = 0;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[test]
fn driver_resize_repaints_from_scratch() {
    let mut surface = ResizingSurface {
        fb: FrameBuffer::new(40, 20),
        checks_before_resize: 1,
        resize_to: Some((60, 30)),
        writes: 0,
    };
    let (_tx, queue) = InputQueue::channel();
    {
        let mut driver = Driver::new(&mut surface, queue, fast_config());
        driver.tick().unwrap();
        let before = driver.painted().len();

        driver.tick().unwrap();
        // 94 border cells, 5 segments, 1 food, "Score: 0".
        assert_eq!(before, 108);
        assert_eq!(driver.painted().len(), 108);
        assert_eq!(driver.game().ticks(), 2);
    }
    // Only the fresh frame was written; no blanking of the old cells.
    assert_eq!(surface.writes, 108);

    // New origin: row 30/2 - 7 = 8, column 60/2 - 15 = 15.
    let fb = &surface.fb;
    assert_eq!(fb.get(14, 7).unwrap().ch, BORDER_GLYPH);
    assert_eq!(fb.get(45, 23).unwrap().ch, BORDER_GLYPH);
    // Head moved up twice from (5, 3).
    assert_eq!(fb.get(15 + 3, 8 + 3).unwrap().ch, SNAKE_GLYPH);
    assert_eq!(fb.get(15 + 10, 8 + 10).unwrap().ch, FOOD_GLYPH);
    assert!(fb.row_text(24).contains("Score: 0"));
}
