//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, SnapshotCell};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::Pos;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame lands in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SELECTED_BG: Rgb = Rgb::new(70, 70, 95);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const PALETTE: [Rgb; 8] = [
    Rgb::new(225, 70, 70),
    Rgb::new(90, 200, 90),
    Rgb::new(80, 130, 235),
    Rgb::new(235, 210, 70),
    Rgb::new(200, 100, 215),
    Rgb::new(70, 200, 210),
    Rgb::new(240, 150, 50),
    Rgb::new(230, 230, 230),
];

/// Colors past the palette reuse it with another shape.
const BALL_GLYPHS: [char; 4] = ['●', '◆', '■', '▲'];

fn ball_look(color: u8) -> (Rgb, char) {
    let i = color as usize;
    let fg = PALETTE[i % PALETTE.len()];
    let ch = BALL_GLYPHS[(i / PALETTE.len()) % BALL_GLYPHS.len()];
    (fg, ch)
}

/// A lightweight terminal renderer for the Lines board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 3x1 leaves room for the cursor brackets around a ball.
        Self {
            cell_w: 3,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board frame position for a board of side `size`.
    pub fn layout(&self, size: u8, viewport: Viewport) -> Layout {
        let w = (size as u16) * self.cell_w + 2;
        let h = (size as u16) * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Layout { x, y, w, h }
    }

    /// Board cell under the terminal position `(x, y)`, if any.
    pub fn cell_at(&self, size: u8, viewport: Viewport, x: u16, y: u16) -> Option<Pos> {
        let layout = self.layout(size, viewport);
        let bx = x.checked_sub(layout.x + 1)?;
        let by = y.checked_sub(layout.y + 1)?;
        let col = bx / self.cell_w;
        let row = by / self.cell_h;
        if row >= size as u16 || col >= size as u16 {
            return None;
        }
        Some(Pos::new(row as u8, col as u8))
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<Pos>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let layout = self.layout(snap.size, viewport);
        let border = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, layout, border);

        for row in 0..snap.size {
            for col in 0..snap.size {
                let pos = Pos::new(row, col);
                let cell = snap.cell(pos).unwrap_or(SnapshotCell::Empty);
                let selected = snap.selected == Some(pos);
                self.draw_cell(fb, layout, pos, cell, selected);
                if cursor == Some(pos) && snap.playable() {
                    self.draw_cursor(fb, layout, pos, selected);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        if snap.game_over {
            self.draw_overlay_text(fb, layout, 0, "GAME OVER");
            self.draw_overlay_text(fb, layout, 1, "r: new game");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, cursor: Option<Pos>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: Layout, style: Style) {
        let Layout { x, y, w, h } = layout;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Top-left terminal position of a board cell.
    fn cell_origin(&self, layout: Layout, pos: Pos) -> (u16, u16) {
        (
            layout.x + 1 + pos.col as u16 * self.cell_w,
            layout.y + 1 + pos.row as u16 * self.cell_h,
        )
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, layout: Layout, pos: Pos, cell: SnapshotCell, selected: bool) {
        let bg = if selected { SELECTED_BG } else { BOARD_BG };
        let (px, py) = self.cell_origin(layout, pos);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', Style::new(BOARD_BG, bg));

        let (ch, style) = match cell {
            SnapshotCell::Empty => ('·', Style::new(Rgb::new(90, 90, 100), bg).dim()),
            SnapshotCell::Ball { color } => {
                let (fg, ch) = ball_look(color);
                let style = Style::new(fg, bg);
                (ch, if selected { style.bold() } else { style })
            }
            SnapshotCell::Preview { color } => {
                let (fg, _) = ball_look(color);
                ('•', Style::new(fg, bg).dim())
            }
        };
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, ch, style);
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, layout: Layout, pos: Pos, selected: bool) {
        let bg = if selected { SELECTED_BG } else { BOARD_BG };
        let style = Style::new(Rgb::new(255, 255, 255), bg).bold();
        let (px, py) = self.cell_origin(layout, pos);
        let mid_y = py + self.cell_h / 2;
        if self.cell_w >= 3 {
            fb.put_char(px, mid_y, '[', style);
            fb.put_char(px + self.cell_w - 1, mid_y, ']', style);
        } else if let Some(glyph) = fb.get(px, mid_y) {
            // Too narrow for brackets: invert the cell instead.
            let inverted = Style::new(glyph.style.bg, Rgb::new(200, 200, 200));
            fb.put_char(px, mid_y, glyph.ch, inverted);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: Layout) {
        let panel_x = layout.x.saturating_add(layout.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = layout.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if snap.next.is_empty() {
            fb.put_str(panel_x, y, "-", value);
        }
        for (i, ball) in snap.next.iter().enumerate() {
            let (fg, ch) = ball_look(ball.color());
            let x = panel_x.saturating_add(i as u16 * 2);
            if x >= viewport.width {
                break;
            }
            fb.put_char(x, y, ch, Style::new(fg, PANEL_BG));
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TURN", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.turn, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GAME", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.episode_id.saturating_add(1), value);
        y = y.saturating_add(2);

        let hint = value.dim();
        for line in ["arrows: move", "enter: pick", "r: restart", "q: quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: Layout, line: u16, text: &str) {
        let y = layout.y.saturating_add(layout.h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = layout.x.saturating_add(layout.w.saturating_sub(text_w) / 2);
        let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, y, text, style);
    }
}
