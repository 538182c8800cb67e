//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    /// Swap foreground and background (cursor highlight)
    pub reverse: bool,
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            reverse: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn reversed(self) -> Self {
        Self {
            reverse: true,
            ..self
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::fg(Rgb::new(220, 220, 220))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are not preserved.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize((width as usize) * (height as usize), Cell::default());
    }

    #[inline]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Write `s` from `(x, y)`, clipped at the right edge.
    ///
    /// Returns the column after the last character written.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    /// Write a number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let mut cx = x;
        for &d in digits[..len].iter().rev() {
            self.put_char(cx, y, d as char, style);
            cx = cx.saturating_add(1);
        }
        cx
    }

    /// Characters of row `y` with trailing blanks removed.
    pub fn row_text(&self, y: u16) -> String {
        let text: String = (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect();
        text.trim_end().to_string()
    }

    /// Whole frame as text, one line per row.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        let end = fb.put_str(1, 0, "SCORE", CellStyle::default());
        assert_eq!(end, 4);
        assert_eq!(fb.row_text(0), " SCO");
    }

    #[test]
    fn test_put_u32() {
        let mut fb = FrameBuffer::new(12, 2);
        fb.put_u32(0, 0, 0, CellStyle::default());
        fb.put_u32(0, 1, 4_294_967_295, CellStyle::default());
        assert_eq!(fb.row_text(0), "0");
        assert_eq!(fb.row_text(1), "4294967295");
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(5, 5, 'X', CellStyle::default());
        assert_eq!(fb.get(5, 5), None);
        assert_eq!(fb.to_text(), "\n");
    }
}
