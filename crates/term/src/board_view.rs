//! BoardView: lays a [`DisplayState`] out into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::display::DisplayState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellColor, BOARD_COLS, BOARD_ROWS, PIECE_SIZE};

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

/// Interior size of the message box; the longest line is a u32 plus " TIMES".
const MESSAGE_W: u16 = 16;
const MESSAGE_H: u16 = 6;
/// Columns between the play field and the side boxes
const GAP: u16 = 2;

const GAME_OVER: [&str; 5] = [
    "#############",
    "#           #",
    "# GAME OVER #",
    "#           #",
    "#############",
];

pub const PRESS_ANY_KEY: &str = "press any key.";

const BORDER: CellStyle = CellStyle::fg(Rgb::new(17, 168, 205));
const MESSAGE: CellStyle = CellStyle::fg(Rgb::new(188, 63, 188));
const OVERLAY: CellStyle = CellStyle::fg(Rgb::new(241, 76, 76)).bold();
const FIELD_BG: Rgb = Rgb::new(20, 20, 28);

/// Foreground for a cell color; `None` for empty.
///
/// Hues follow the ANSI order (red, green, yellow, blue, magenta, cyan,
/// white); the bright variants are lighter and bold.
pub fn palette(color: CellColor) -> Option<CellStyle> {
    let (normal, bright) = match color.hue() {
        1 => (Rgb::new(205, 49, 49), Rgb::new(241, 76, 76)),
        2 => (Rgb::new(13, 188, 121), Rgb::new(35, 209, 139)),
        3 => (Rgb::new(229, 229, 16), Rgb::new(245, 245, 67)),
        4 => (Rgb::new(36, 114, 200), Rgb::new(59, 142, 234)),
        5 => (Rgb::new(188, 63, 188), Rgb::new(214, 112, 214)),
        6 => (Rgb::new(17, 168, 205), Rgb::new(41, 184, 219)),
        7 => (Rgb::new(229, 229, 229), Rgb::new(255, 255, 255)),
        _ => return None,
    };
    let style = CellStyle {
        bg: FIELD_BG,
        ..CellStyle::fg(normal)
    };
    Some(if color.is_bright() {
        CellStyle { fg: bright, ..style }.bold()
    } else {
        style
    })
}

/// Screen positions of every box, computed once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    field_x: u16,
    field_y: u16,
    field_w: u16,
    field_h: u16,
    next_x: u16,
    next_y: u16,
    message_x: u16,
    message_y: u16,
}

pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let field_w = BOARD_COLS as u16 * self.cell_w + 2;
        let field_h = BOARD_ROWS as u16 * self.cell_h + 2;
        let next_h = PIECE_SIZE as u16 * self.cell_h + 2;
        let total_w = field_w + GAP + MESSAGE_W + 2;

        let field_x = viewport.width.saturating_sub(total_w) / 2;
        // Row 0 is kept free for the hint line.
        let field_y = (viewport.height.saturating_sub(field_h) / 2).max(1);
        let next_x = field_x + field_w + GAP;
        Layout {
            field_x,
            field_y,
            field_w,
            field_h,
            next_x,
            next_y: field_y,
            message_x: next_x,
            message_y: field_y + next_h + 1,
        }
    }

    /// Render the display model into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when the terminal size changes.
    pub fn render_into(&self, display: &DisplayState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();
        let l = self.layout(viewport);

        // Play field.
        fb.draw_rect(l.field_x, l.field_y, l.field_w, l.field_h, BORDER);
        let field_bg = CellStyle {
            bg: FIELD_BG,
            ..CellStyle::default()
        };
        fb.fill_rect(
            l.field_x + 1,
            l.field_y + 1,
            l.field_w - 2,
            l.field_h - 2,
            ' ',
            field_bg,
        );
        for y in 0..BOARD_ROWS {
            for x in 0..BOARD_COLS {
                if let Some(style) = palette(display.cell(x, y)) {
                    self.fill_cell(fb, l.field_x, l.field_y, x as u16, y as u16, style);
                }
            }
        }

        // NEXT box.
        let next_w = PIECE_SIZE as u16 * self.cell_w + 2;
        let next_h = PIECE_SIZE as u16 * self.cell_h + 2;
        fb.draw_rect(l.next_x, l.next_y, next_w, next_h, BORDER);
        fb.put_str(l.next_x + next_w.saturating_sub(4) / 2, l.next_y, "NEXT", BORDER);
        for (i, row) in display.preview.iter().enumerate() {
            for (j, &color) in row.iter().enumerate() {
                if let Some(style) = palette(color) {
                    self.fill_cell(fb, l.next_x, l.next_y, j as u16, i as u16, style);
                }
            }
        }

        // Message box.
        fb.draw_rect(l.message_x, l.message_y, MESSAGE_W + 2, MESSAGE_H + 2, BORDER);
        for line in &display.message {
            fb.put_str(
                l.message_x + 1,
                l.message_y + 1 + line.row as u16,
                &line.text,
                MESSAGE,
            );
        }

        if display.is_game_over() {
            let x = l.field_x + l.field_w.saturating_sub(GAME_OVER[0].len() as u16) / 2;
            let y = l.field_y + l.field_h.saturating_sub(GAME_OVER.len() as u16) / 2;
            for (dy, text) in GAME_OVER.iter().enumerate() {
                fb.put_str(x, y + dy as u16, text, OVERLAY);
            }
        }

        if !display.status.is_running() {
            fb.put_str(0, 0, PRESS_ANY_KEY, CellStyle::default());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, display: &DisplayState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(display, viewport, &mut fb);
        fb
    }

    /// Fill one grid cell of the box whose border starts at `(box_x, box_y)`.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        box_x: u16,
        box_y: u16,
        cell_x: u16,
        cell_y: u16,
        style: CellStyle,
    ) {
        let px = box_x + 1 + cell_x * self.cell_w;
        let py = box_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }
}
