//! Terminal backend
//!
//! Presents the canvas with half-block cells (two vertical pixels per cell,
//! 24-bit colour) and reads keys through crossterm.

use std::io::{self, Stdout, Write, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::{self, Color};
use crossterm::{cursor, execute, queue, terminal};
use glam::Vec2;

use super::input::{HeldKey, InputFrame, InputSource, KeyTracker};
use crate::assets::SpriteId;
use crate::renderer::{Canvas, Rgb, Surface};
use crate::sim::Rect;

/// Without release events a key stays held this long after its last repeat
const HOLD_WINDOW: Duration = Duration::from_millis(120);

/// Raw-mode alternate screen, restored on drop
pub struct TerminalSession {
    enhanced_keys: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        )?;

        let enhanced_keys = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced_keys {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        log::info!("Terminal session started (key release events: {})", enhanced_keys);

        Ok(Self { enhanced_keys })
    }

    /// Whether the terminal reports key releases
    pub fn enhanced_keys(&self) -> bool {
        self.enhanced_keys
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = stdout();
        if self.enhanced_keys {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Keyboard input via crossterm events
pub struct TerminalInput {
    keys: KeyTracker,
    start: Instant,
}

impl TerminalInput {
    pub fn new(session: &TerminalSession) -> Self {
        Self {
            keys: KeyTracker::new(session.enhanced_keys(), HOLD_WINDOW),
            start: Instant::now(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Duration, frame: &mut InputFrame) {
        let held = match key.code {
            KeyCode::Left => Some(HeldKey::Left),
            KeyCode::Right => Some(HeldKey::Right),
            KeyCode::Char(' ') | KeyCode::Up => Some(HeldKey::Jump),
            _ => None,
        };
        if let Some(held) = held {
            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => self.keys.press(held, now),
                KeyEventKind::Release => self.keys.release(held),
            }
            return;
        }

        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('a') | KeyCode::Char('A') => frame.toggle_hitboxes = true,
            KeyCode::Char('r') | KeyCode::Char('R') => frame.restart = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                frame.quit = true
            }
            KeyCode::Char('q') | KeyCode::Esc => frame.quit = true,
            _ => {}
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<InputFrame> {
        let mut frame = InputFrame::default();
        let now = self.start.elapsed();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key, now, &mut frame);
            }
        }

        frame.left = self.keys.is_held(HeldKey::Left, now);
        frame.right = self.keys.is_held(HeldKey::Right, now);
        frame.jump = self.keys.is_held(HeldKey::Jump, now);
        Ok(frame)
    }
}

/// Canvas presented to the terminal
pub struct TerminalSurface {
    canvas: Canvas,
    out: Stdout,
}

impl TerminalSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            out: stdout(),
        }
    }

    fn render(&mut self, cols: usize, rows: usize) -> io::Result<()> {
        let out = &mut self.out;
        let canvas = &self.canvas;
        let prows = rows * 2;

        queue!(out, cursor::MoveTo(0, 0))?;
        let mut prev: Option<(Rgb, Rgb)> = None;
        for row in 0..rows {
            for col in 0..cols {
                let top = sample(canvas, col, row * 2, cols, prows);
                let bot = sample(canvas, col, row * 2 + 1, cols, prows);
                if prev != Some((top, bot)) {
                    queue!(
                        out,
                        style::SetForegroundColor(to_color(top)),
                        style::SetBackgroundColor(to_color(bot))
                    )?;
                    prev = Some((top, bot));
                }
                queue!(out, style::Print('\u{2580}'))?; // ▀
            }
            if row + 1 < rows {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                prev = None;
            }
        }

        for label in canvas.labels() {
            let (col, row) = label_cell(label.x, label.y, cols, rows, canvas);
            if col >= cols || row >= rows {
                continue;
            }
            let bg = sample(canvas, col, row * 2 + 1, cols, prows);
            let visible: String = label.text.chars().take(cols - col).collect();
            queue!(
                out,
                cursor::MoveTo(col as u16, row as u16),
                style::SetForegroundColor(to_color(label.color)),
                style::SetBackgroundColor(to_color(bg)),
                style::Print(visible)
            )?;
        }

        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self, color: Rgb) {
        self.canvas.clear(color);
    }

    fn blit(&mut self, sprite: SpriteId, pos: Vec2) {
        self.canvas.blit(sprite, pos);
    }

    fn outline(&mut self, rect: Rect, color: Rgb, width: u32) {
        self.canvas.outline(rect, color, width);
    }

    fn text(&mut self, text: &str, x: i32, y: i32, color: Rgb) {
        self.canvas.text(text, x, y, color);
    }

    fn present(&mut self) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        if cols == 0 || rows == 0 {
            return Ok(());
        }
        self.render(cols as usize, rows as usize)
    }
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

/// Nearest canvas pixel for a terminal pixel in a `cols` x `prows` grid
fn sample(canvas: &Canvas, col: usize, prow: usize, cols: usize, prows: usize) -> Rgb {
    let x = (col * canvas.width() / cols).min(canvas.width() - 1);
    let y = (prow * canvas.height() / prows).min(canvas.height() - 1);
    canvas.pixel(x, y)
}

/// Terminal cell holding canvas point (`x`, `y`)
fn label_cell(x: i32, y: i32, cols: usize, rows: usize, canvas: &Canvas) -> (usize, usize) {
    let x = x.max(0) as usize;
    let y = y.max(0) as usize;
    (x * cols / canvas.width(), y * rows / canvas.height())
}
