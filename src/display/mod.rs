/// Rendering layer. All terminal output lives here.
///
/// The simulation works in logical pixels; `TerminalRenderer` scales them
/// onto the character grid. No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::config::ScreenBounds;
use crate::entities::{Entity, GameStatus, Wreck};
use crate::error::Result;
use crate::registry::Group;

/// Per-frame summary shown in the HUD.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameInfo {
    pub tick: u64,
    pub status: GameStatus,
    pub enemies: usize,
    pub bullets: usize,
}

/// Consumer of one rendered frame per tick. Groups arrive in draw order.
pub trait RenderSink {
    fn begin_frame(&mut self) -> Result<()> {
        Ok(())
    }

    fn draw(&mut self, group: Group, entities: &[Entity]) -> Result<()>;

    fn draw_wrecks(&mut self, _wrecks: &[Wreck]) -> Result<()> {
        Ok(())
    }

    fn present(&mut self, frame: &FrameInfo) -> Result<()>;
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::Yellow;
const C_STAR: Color = Color::DarkGrey;
const C_HERO: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_BULLET: Color = Color::Cyan;
const C_WRECK: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Stars drawn per background tile, at fixed offsets inside the tile so
/// the scroll is visible.
const STARS_PER_TILE: i32 = 24;

/// Terminal rows reserved outside the play field: HUD, two border rows and
/// the controls hint.
const CHROME_ROWS: u16 = 4;

/// A rectangle in terminal cells, already clipped to the play field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CellRect {
    col: u16,
    row: u16,
    cols: u16,
    rows: u16,
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    width: u16,
    height: u16,
    screen: ScreenBounds,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, width: u16, height: u16, screen: ScreenBounds) -> Self {
        Self { out, width, height, screen }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn field_cols(&self) -> i32 {
        self.width.saturating_sub(2) as i32
    }

    fn field_rows(&self) -> i32 {
        self.height.saturating_sub(CHROME_ROWS) as i32
    }

    /// Map a logical rectangle onto the play field (columns 1..width-1,
    /// rows 2..height-2). Returns `None` if nothing of it is visible.
    fn to_cells(&self, x: i32, y: i32, width: i32, height: i32) -> Option<CellRect> {
        let (fc, fr) = (self.field_cols(), self.field_rows());
        if fc <= 0 || fr <= 0 {
            return None;
        }
        let sx = |v: i32| (v as i64 * fc as i64).div_euclid(self.screen.width as i64) as i32;
        let sy = |v: i32| (v as i64 * fr as i64).div_euclid(self.screen.height as i64) as i32;

        let left = sx(x);
        let top = sy(y);
        let right = sx(x + width).max(left + 1);
        let bottom = sy(y + height).max(top + 1);

        let (left, right) = (left.max(0), right.min(fc));
        let (top, bottom) = (top.max(0), bottom.min(fr));
        if left >= right || top >= bottom {
            return None;
        }
        Some(CellRect {
            col: 1 + left as u16,
            row: 2 + top as u16,
            cols: (right - left) as u16,
            rows: (bottom - top) as u16,
        })
    }

    fn fill(&mut self, rect: CellRect, glyph: &str, color: Color) -> Result<()> {
        self.out.queue(style::SetForegroundColor(color))?;
        let line = glyph.repeat(rect.cols as usize);
        for row in rect.row..rect.row + rect.rows {
            self.out.queue(cursor::MoveTo(rect.col, row))?;
            self.out.queue(Print(&line))?;
        }
        Ok(())
    }

    // ── Entities ──────────────────────────────────────────────────────────────

    fn draw_background(&mut self, tile: &Entity) -> Result<()> {
        self.out.queue(style::SetForegroundColor(C_STAR))?;
        for k in 0..STARS_PER_TILE {
            let sx = (k * 197 + 31) % tile.width().max(1);
            let sy = (k * 131 + 17) % tile.height().max(1);
            if let Some(cell) = self.to_cells(tile.x + sx, tile.y + sy, 1, 1) {
                self.out.queue(cursor::MoveTo(cell.col, cell.row))?;
                self.out.queue(Print("·"))?;
            }
        }
        Ok(())
    }

    fn draw_hero(&mut self, hero: &Entity) -> Result<()> {
        let Some(rect) = self.to_cells(hero.x, hero.y, hero.width(), hero.height()) else {
            return Ok(());
        };
        //   ▲      ← nose, centred on the top row
        //  ███     ← body, every row below
        self.fill(rect, "█", C_HERO)?;
        self.out.queue(cursor::MoveTo(rect.col, rect.row))?;
        self.out.queue(Print(" ".repeat(rect.cols as usize)))?;
        self.out.queue(cursor::MoveTo(rect.col + rect.cols / 2, rect.row))?;
        self.out.queue(Print("▲"))?;
        Ok(())
    }

    fn draw_entities(&mut self, entities: &[Entity], glyph: &str, color: Color) -> Result<()> {
        for entity in entities {
            if let Some(rect) = self.to_cells(entity.x, entity.y, entity.width(), entity.height()) {
                self.fill(rect, glyph, color)?;
            }
        }
        Ok(())
    }

    // ── Chrome ────────────────────────────────────────────────────────────────

    fn draw_border(&mut self) -> Result<()> {
        let w = self.width as usize;
        let h = self.height;

        self.out.queue(style::SetForegroundColor(C_BORDER))?;

        // Row 1: top bar
        self.out.queue(cursor::MoveTo(0, 1))?;
        self.out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

        // Row h-2: bottom bar
        self.out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
        self.out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

        for row in 2..h.saturating_sub(2) {
            self.out.queue(cursor::MoveTo(0, row))?;
            self.out.queue(Print("│"))?;
            self.out.queue(cursor::MoveTo(self.width.saturating_sub(1), row))?;
            self.out.queue(Print("│"))?;
        }
        Ok(())
    }

    fn draw_hud(&mut self, frame: &FrameInfo) -> Result<()> {
        self.out.queue(cursor::MoveTo(1, 0))?;
        self.out.queue(style::SetForegroundColor(C_HUD))?;
        let status = match frame.status {
            GameStatus::Playing => "PLAYING",
            GameStatus::GameOver => "GAME OVER",
        };
        self.out.queue(Print(format!(
            "{:<9}   Tick: {:>7}   Enemies: {:>3}   Bullets: {:>3}",
            status, frame.tick, frame.enemies, frame.bullets
        )))?;

        self.out.queue(cursor::MoveTo(1, self.height.saturating_sub(1)))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print("← → / A D : Move   Q : Quit"))?;
        Ok(())
    }

    /// Overlay shown once the loop has ended with the hero destroyed.
    pub fn draw_game_over(&mut self, ticks: u64) -> Result<()> {
        let survived = format!("Survived {} ticks", ticks);
        let lines: &[(&str, Color)] = &[
            ("╔══════════════════╗", Color::Red),
            ("║    GAME  OVER    ║", Color::Red),
            ("╚══════════════════╝", Color::Red),
            (survived.as_str(), Color::Yellow),
            ("Press any key to exit", Color::White),
        ];

        let cx = self.width / 2;
        let start_row = (self.height / 2).saturating_sub(lines.len() as u16 / 2);

        for (i, (msg, color)) in lines.iter().enumerate() {
            let row = start_row + i as u16;
            let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
            self.out.queue(cursor::MoveTo(col, row))?;
            self.out.queue(style::SetForegroundColor(*color))?;
            self.out.queue(Print(*msg))?;
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> RenderSink for TerminalRenderer<W> {
    fn begin_frame(&mut self) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn draw(&mut self, group: Group, entities: &[Entity]) -> Result<()> {
        match group {
            Group::Backgrounds => {
                for tile in entities {
                    self.draw_background(tile)?;
                }
                Ok(())
            }
            Group::Enemies => self.draw_entities(entities, "▼", C_ENEMY),
            Group::Hero => {
                for hero in entities {
                    self.draw_hero(hero)?;
                }
                Ok(())
            }
            Group::Bullets => self.draw_entities(entities, "║", C_BULLET),
        }
    }

    fn draw_wrecks(&mut self, wrecks: &[Wreck]) -> Result<()> {
        for wreck in wrecks {
            if let Some(rect) = self.to_cells(wreck.x, wreck.y, wreck.size.width, wreck.size.height) {
                self.fill(rect, "✸", C_WRECK)?;
            }
        }
        Ok(())
    }

    fn present(&mut self, frame: &FrameInfo) -> Result<()> {
        self.draw_border()?;
        self.draw_hud(frame)?;

        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.height.saturating_sub(1)))?;
        self.out.flush()?;
        Ok(())
    }
}
