//! GameView: maps a session snapshot or a final report into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, with the board anchored at a fixed top-left origin:
//!
//! ```text
//!  JOSPEL
//!  Seed: 2QX0N3LWGJ5F4
//!
//!        A   B   C   D
//!     ┌────────────────┐
//!   1 │  6   5   4   3 │ ← long streak (40)
//!   2 │  ·   ·   ·   · │
//!   3 │  ·   ·   ·   · │
//!   4 │  ·   ·   ·   · │
//!     └────────────────┘
//! ```
//!
//! During play a side panel shows the pending card and counters. After the game,
//! row results sit to the right of the board, column and diagonal results below it.

use crate::core::{FinalReport, LineResult, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Card, LineKind, LineSet, Location, PatternMatch, BOARD_SIDE};

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

/// Prompt state drawn under the board during play.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptView<'a> {
    /// Characters typed so far
    pub typed: &'a str,
    /// Highlighted cell
    pub cursor: Option<Location>,
    /// Feedback from the last submission
    pub message: Option<&'a str>,
}

const TITLE: CellStyle = CellStyle::fg(Rgb::new(240, 200, 80)).bold();
const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const FRAME: CellStyle = CellStyle::fg(Rgb::new(150, 150, 160));
const EMPTY: CellStyle = CellStyle::fg(Rgb::new(90, 90, 100));
const CARD: CellStyle = CellStyle::fg(Rgb::new(120, 200, 240)).bold();
const TEN: CellStyle = CellStyle::fg(Rgb::new(240, 140, 80)).bold();
const HIT: CellStyle = CellStyle::fg(Rgb::new(120, 220, 120));
const MISS: CellStyle = CellStyle::fg(Rgb::new(110, 110, 120));
const WARN: CellStyle = CellStyle::fg(Rgb::new(230, 90, 90));
const HELP: CellStyle = CellStyle::fg(Rgb::new(130, 130, 140));

/// Row label column width, left of the board frame.
const LABEL_W: u16 = 4;

/// A lightweight terminal renderer for the Jospel board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    origin_x: u16,
    origin_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Four columns fit a right-aligned "10" with a space either side.
        Self {
            cell_w: 4,
            origin_x: 1,
            origin_y: 1,
        }
    }
}

/// Board frame placement within the framebuffer.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    fn frame(&self) -> Frame {
        let side = BOARD_SIDE as u16;
        Frame {
            x: self.origin_x + LABEL_W,
            // Title, seed, blank line, column letters.
            y: self.origin_y + 4,
            w: side * self.cell_w + 2,
            h: side + 2,
        }
    }

    /// Screen position of the first character of a board cell.
    fn cell_origin(&self, frame: Frame, column: u16, row: u16) -> (u16, u16) {
        (frame.x + 1 + column * self.cell_w, frame.y + 1 + row)
    }

    /// Render a game in progress into an existing framebuffer.
    pub fn render_play_into(
        &self,
        snap: &SessionSnapshot,
        prompt: &PromptView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let frame = self.frame();
        self.draw_header(fb, snap.seed.as_str(), snap.seed_replayable, "JOSPEL");
        self.draw_board(fb, frame, |i| snap.cell(i), prompt.cursor);
        self.draw_side_panel(fb, frame, snap);

        let mut y = frame.y + frame.h + 1;
        let x = self.origin_x;
        if let Some(card) = snap.pending {
            let cx = fb.put_str(x, y, "Place ", LABEL);
            let cx = put_card(fb, cx, y, card);
            let cx = fb.put_str(cx, y, " at: ", LABEL);
            let cx = fb.put_str(cx, y, prompt.typed, VALUE);
            fb.put_char(cx, y, '_', VALUE);
        }
        y += 1;
        if let Some(message) = prompt.message {
            fb.put_str(x, y, message, WARN);
        }
        y += 2;
        fb.put_str(
            x,
            y,
            "type A1-D4 or use arrows, Enter to place | n new game | q quit",
            HELP,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render_play(
        &self,
        snap: &SessionSnapshot,
        prompt: &PromptView<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_play_into(snap, prompt, viewport, &mut fb);
        fb
    }

    /// Render the seed prompt shown before a game.
    pub fn render_seed_entry_into(
        &self,
        prompt: &PromptView<'_>,
        line_set: LineSet,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let x = self.origin_x;
        let mut y = self.origin_y;
        fb.put_str(x, y, "JOSPEL", TITLE);
        y += 2;
        fb.put_str(
            x,
            y,
            "Enter the custom seed for this game, leave blank for none",
            LABEL,
        );
        y += 1;
        let cx = fb.put_str(x, y, "Seed: ", LABEL);
        let cx = fb.put_str(cx, y, prompt.typed, VALUE);
        fb.put_char(cx, y, '_', VALUE);
        y += 1;
        if let Some(message) = prompt.message {
            fb.put_str(x, y, message, WARN);
        }
        y += 2;
        let cx = fb.put_str(x, y, "Lines: ", LABEL);
        fb.put_str(cx, y, line_set.as_str(), VALUE);
        y += 2;
        fb.put_str(x, y, "Enter to start | Backspace to erase | Esc quit", HELP);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render_seed_entry(
        &self,
        prompt: &PromptView<'_>,
        line_set: LineSet,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_seed_entry_into(prompt, line_set, viewport, &mut fb);
        fb
    }

    /// Render the end-of-game screen into an existing framebuffer.
    pub fn render_report_into(&self, report: &FinalReport, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let frame = self.frame();
        self.draw_header(
            fb,
            report.seed.as_str(),
            report.seed_replayable,
            "JOSPEL - GAME OVER",
        );
        self.draw_board(fb, frame, |i| report.board.cell(i).flatten(), None);

        // Row results to the right of each row.
        for result in report.lines_of(LineKind::Row) {
            let row = result.line.ordinal as u16;
            let x = frame.x + frame.w + 1;
            let cx = fb.put_str(x, frame.y + 1 + row, "← ", FRAME);
            put_result(fb, cx, frame.y + 1 + row, result.result);
        }

        // Column results, then diagonals, under the board.
        let mut y = frame.y + frame.h;
        let below = report
            .lines_of(LineKind::Column)
            .chain(report.lines_of(LineKind::Diagonal))
            .chain(report.lines_of(LineKind::AntiDiagonal));
        for result in below {
            self.draw_labelled_result(fb, frame.x, y, result);
            y += 1;
        }

        y += 1;
        let x = self.origin_x;
        let cx = fb.put_str(x, y, "Total: ", LABEL);
        let cx = fb.put_u32(cx, y, report.total, TITLE);
        if report.forced_end {
            fb.put_str(cx + 2, y, "(turn limit reached)", WARN);
        }
        y += 1;

        let mut cx = fb.put_str(x, y, "Cards dealt:", LABEL);
        for card in report.dealt_order() {
            cx = put_card(fb, cx + 1, y, card);
        }
        y += 2;

        let help = if report.seed_replayable {
            "n new game | r replay this seed | q quit"
        } else {
            "n new game | q quit"
        };
        fb.put_str(x, y, help, HELP);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render_report(&self, report: &FinalReport, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_report_into(report, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, seed: &str, replayable: bool, title: &str) {
        let x = self.origin_x;
        let y = self.origin_y;
        fb.put_str(x, y, title, TITLE);
        let cx = fb.put_str(x, y + 1, "Seed: ", LABEL);
        let cx = fb.put_str(cx, y + 1, seed, VALUE);
        if !replayable {
            fb.put_str(cx + 2, y + 1, "(starts with a 10, cannot be replayed)", WARN);
        }
    }

    fn draw_board(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_at: impl Fn(usize) -> Option<Card>,
        cursor: Option<Location>,
    ) {
        let side = BOARD_SIDE as u16;

        // Column letters and row numbers.
        for c in 0..side {
            let (x, _) = self.cell_origin(frame, c, 0);
            let letter = (b'A' + c as u8) as char;
            fb.put_char(x + self.cell_w - 2, frame.y - 1, letter, LABEL);
        }
        for r in 0..side {
            fb.put_u32(frame.x - 2, frame.y + 1 + r, (r + 1) as u32, LABEL);
        }

        self.draw_border(fb, frame);

        for r in 0..side {
            for c in 0..side {
                let (x, y) = self.cell_origin(frame, c, r);
                let index = (c + r * side) as usize;
                let highlighted = cursor.is_some_and(|l| l.index() == index);
                if highlighted {
                    let style = CellStyle::default().reversed();
                    for dx in 0..self.cell_w - 1 {
                        fb.put_char(x + dx, y, ' ', style);
                    }
                }

                // Right-align values in the first cell_w - 1 columns.
                let right = x + self.cell_w - 2;
                match cell_at(index) {
                    Some(card) => {
                        let cx = if card.value() >= 10 { right - 1 } else { right };
                        let style = card_style(card);
                        let style = if highlighted { style.reversed() } else { style };
                        fb.put_u32(cx, y, card.value() as u32, style);
                    }
                    None => {
                        let style = if highlighted { EMPTY.reversed() } else { EMPTY };
                        fb.put_char(right, y, '·', style);
                    }
                }
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        fb.put_char(x, y, '┌', FRAME);
        fb.put_char(x + w - 1, y, '┐', FRAME);
        fb.put_char(x, y + h - 1, '└', FRAME);
        fb.put_char(x + w - 1, y + h - 1, '┘', FRAME);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', FRAME);
            fb.put_char(x + dx, y + h - 1, '─', FRAME);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', FRAME);
            fb.put_char(x + w - 1, y + dy, '│', FRAME);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, frame: Frame, snap: &SessionSnapshot) {
        let x = frame.x + frame.w + 3;
        if x + 8 >= fb.width() {
            return;
        }
        let mut y = frame.y;

        fb.put_str(x, y, "CARD", LABEL);
        match snap.pending {
            Some(card) => put_card(fb, x + 7, y, card),
            None => fb.put_str(x + 7, y, "-", VALUE),
        };
        y += 1;

        fb.put_str(x, y, "TURN", LABEL);
        fb.put_u32(x + 7, y, (snap.turns + u8::from(snap.pending.is_some())) as u32, VALUE);
        y += 1;

        fb.put_str(x, y, "LEFT", LABEL);
        fb.put_u32(x + 7, y, snap.remaining as u32, VALUE);
        y += 1;

        fb.put_str(x, y, "SCORE", LABEL);
        fb.put_u32(x + 7, y, snap.running_total, VALUE);
        y += 1;

        fb.put_str(x, y, "LINES", LABEL);
        fb.put_str(x + 7, y, snap.line_set.as_str(), VALUE);
    }

    fn draw_labelled_result(&self, fb: &mut FrameBuffer, x: u16, y: u16, result: &LineResult) {
        let cx = fb.put_str(x, y, result.line.label(), LABEL);
        let cx = fb.put_str(cx, y, ": ", LABEL);
        put_result(fb, cx, y, result.result);
    }
}

fn card_style(card: Card) -> CellStyle {
    if card.value() == 10 {
        TEN
    } else {
        CARD
    }
}

fn put_card(fb: &mut FrameBuffer, x: u16, y: u16, card: Card) -> u16 {
    fb.put_u32(x, y, card.value() as u32, card_style(card))
}

/// `pair (10)`, or `-` when the line matched nothing.
fn put_result(fb: &mut FrameBuffer, x: u16, y: u16, result: PatternMatch) -> u16 {
    match result.kind() {
        Some(kind) => {
            let cx = fb.put_str(x, y, kind.name(), HIT);
            let cx = fb.put_str(cx, y, " (", HIT);
            let cx = fb.put_u32(cx, y, result.points(), HIT);
            fb.put_str(cx, y, ")", HIT)
        }
        None => fb.put_str(x, y, "-", MISS),
    }
}
