//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The game only changes on key presses, so every frame is a full redraw. A frame
//! identical to the last one drawn is skipped.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw even if the frame is unchanged (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb` unless it matches the frame already on screen.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        if self.last.as_ref() == Some(fb) {
            return Ok(());
        }
        self.buf.clear();
        encode_full_into(fb, &mut self.buf)?;
        self.flush_buf()?;

        match &mut self.last {
            Some(last) => last.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.reverse {
        out.queue(SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_redraw_contains_text() {
        let mut fb = FrameBuffer::new(8, 2);
        fb.put_str(0, 0, "SEED", CellStyle::default());
        fb.put_str(0, 1, "AB12", CellStyle::default().bold());

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("SEED"));
        assert!(text.contains("AB12"));
    }

    #[test]
    fn style_runs_are_not_repeated() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "abcd", CellStyle::default());

        let mut single = Vec::new();
        encode_full_into(&fb, &mut single).unwrap();

        fb.put_char(2, 0, 'c', CellStyle::default().reversed());
        let mut split = Vec::new();
        encode_full_into(&fb, &mut split).unwrap();

        assert!(split.len() > single.len());
    }

    #[test]
    fn rgb_maps_to_truecolor() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
