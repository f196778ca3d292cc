//! The pixel canvas and its flat-file persistence.

use std::fs;
use std::path::Path;

use ratatui::style::Color;

use crate::error::{Result, TrazoError};

/// Supported square canvas sizes.
pub const CANVAS_SIZES: [usize; 5] = [8, 16, 32, 64, 128];

/// The eight canvas colors offered by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    /// Background white.
    White,
    /// Black.
    Black,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Yellow.
    Yellow,
    /// Orange.
    Orange,
    /// Purple.
    Purple,
}

impl PaletteColor {
    /// All picker entries in display order.
    pub const ALL: [PaletteColor; 8] = [
        PaletteColor::White,
        PaletteColor::Black,
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Yellow,
        PaletteColor::Orange,
        PaletteColor::Purple,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::White => "White",
            PaletteColor::Black => "Black",
            PaletteColor::Red => "Red",
            PaletteColor::Green => "Green",
            PaletteColor::Blue => "Blue",
            PaletteColor::Yellow => "Yellow",
            PaletteColor::Orange => "Orange",
            PaletteColor::Purple => "Purple",
        }
    }

    /// Single-letter encoding used in canvas files.
    pub fn letter(self) -> char {
        match self {
            PaletteColor::White => '.',
            PaletteColor::Black => 'k',
            PaletteColor::Red => 'r',
            PaletteColor::Green => 'g',
            PaletteColor::Blue => 'b',
            PaletteColor::Yellow => 'y',
            PaletteColor::Orange => 'o',
            PaletteColor::Purple => 'p',
        }
    }

    /// Decode a canvas-file letter.
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(PaletteColor::White),
            'k' => Some(PaletteColor::Black),
            'r' => Some(PaletteColor::Red),
            'g' => Some(PaletteColor::Green),
            'b' => Some(PaletteColor::Blue),
            'y' => Some(PaletteColor::Yellow),
            'o' => Some(PaletteColor::Orange),
            'p' => Some(PaletteColor::Purple),
            _ => None,
        }
    }

    /// Terminal color for rendering.
    pub fn color(self) -> Color {
        match self {
            PaletteColor::White => Color::Rgb(255, 255, 255),
            PaletteColor::Black => Color::Rgb(0, 0, 0),
            PaletteColor::Red => Color::Rgb(255, 0, 0),
            PaletteColor::Green => Color::Rgb(0, 255, 0),
            PaletteColor::Blue => Color::Rgb(0, 0, 255),
            PaletteColor::Yellow => Color::Rgb(255, 255, 0),
            PaletteColor::Orange => Color::Rgb(255, 165, 0),
            PaletteColor::Purple => Color::Rgb(128, 0, 128),
        }
    }
}

/// A square pixel canvas with a white background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: usize,
    cells: Vec<PaletteColor>,
}

impl Canvas {
    /// Create a white canvas of `size` × `size`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![PaletteColor::White; size * size],
        }
    }

    /// Canvas edge length in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn get(&self, x: usize, y: usize) -> Option<PaletteColor> {
        if x < self.size && y < self.size {
            Some(self.cells[y * self.size + x])
        } else {
            None
        }
    }

    /// Set a pixel; out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, color: PaletteColor) {
        if x < self.size && y < self.size {
            self.cells[y * self.size + x] = color;
        }
    }

    /// Reset every pixel to white.
    pub fn clear(&mut self) {
        self.cells.fill(PaletteColor::White);
    }

    /// Replace the canvas with a fresh white one of `size`.
    pub fn resize(&mut self, size: usize) {
        self.size = size;
        self.cells = vec![PaletteColor::White; size * size];
    }

    /// Save as text: a `width height` header line, then one letter per
    /// pixel, one canvas row per line.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut text = format!("{} {}\n", self.size, self.size);
        for y in 0..self.size {
            for x in 0..self.size {
                text.push(self.cells[y * self.size + x].letter());
            }
            text.push('\n');
        }
        fs::write(path, text)?;

        tracing::info!("Saved canvas to {}", path.display());
        Ok(())
    }

    /// Load a canvas saved by [`Canvas::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| TrazoError::file_open(path.to_path_buf(), e))?;
        let mut lines = content.lines();

        let header = lines.next().unwrap_or_default();
        let mut parts = header.split_whitespace();
        let width: usize = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(|| TrazoError::malformed_record(1, "missing canvas width"))?;
        let height: usize = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(|| TrazoError::malformed_record(1, "missing canvas height"))?;
        if width != height || width == 0 {
            return Err(TrazoError::malformed_record(
                1,
                format!("canvas must be square and non-empty, got {}x{}", width, height),
            ));
        }

        let mut canvas = Self::new(width);
        for y in 0..height {
            let line = lines.next().ok_or_else(|| {
                TrazoError::malformed_record(y + 2, "missing canvas row")
            })?;
            let mut count = 0;
            for (x, ch) in line.chars().enumerate() {
                let color = PaletteColor::from_letter(ch).ok_or_else(|| {
                    TrazoError::malformed_record(y + 2, format!("unknown color '{}'", ch))
                })?;
                canvas.set(x, y, color);
                count += 1;
            }
            if count != width {
                return Err(TrazoError::malformed_record(
                    y + 2,
                    format!("expected {} pixels, got {}", width, count),
                ));
            }
        }

        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_white() {
        let canvas = Canvas::new(8);
        assert_eq!(canvas.size(), 8);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(canvas.get(x, y), Some(PaletteColor::White));
            }
        }
        assert_eq!(canvas.get(8, 0), None);
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut canvas = Canvas::new(8);
        canvas.set(8, 0, PaletteColor::Red);
        canvas.set(0, 8, PaletteColor::Red);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(canvas.get(x, y), Some(PaletteColor::White));
            }
        }
    }

    #[test]
    fn resize_resets_to_white() {
        let mut canvas = Canvas::new(8);
        canvas.set(3, 3, PaletteColor::Purple);
        canvas.resize(16);
        assert_eq!(canvas.size(), 16);
        assert_eq!(canvas.get(3, 3), Some(PaletteColor::White));
    }

    #[test]
    fn save_and_load_preserve_the_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.pix");

        let mut canvas = Canvas::new(16);
        canvas.set(0, 0, PaletteColor::Black);
        canvas.set(15, 15, PaletteColor::Orange);
        canvas.set(7, 3, PaletteColor::Blue);
        canvas.save(&path).unwrap();

        let loaded = Canvas::load(&path).unwrap();
        assert_eq!(loaded, canvas);
    }

    #[test]
    fn load_rejects_bad_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.pix");

        fs::write(&path, "nonsense\n").unwrap();
        assert!(matches!(
            Canvas::load(&path).unwrap_err(),
            TrazoError::MalformedRecord { line: 1, .. }
        ));

        fs::write(&path, "2 3\n..\n..\n..\n").unwrap();
        assert!(matches!(
            Canvas::load(&path).unwrap_err(),
            TrazoError::MalformedRecord { line: 1, .. }
        ));

        fs::write(&path, "2 2\n..\n.z\n").unwrap();
        assert!(matches!(
            Canvas::load(&path).unwrap_err(),
            TrazoError::MalformedRecord { line: 3, .. }
        ));

        fs::write(&path, "2 2\n..\n").unwrap();
        assert!(matches!(
            Canvas::load(&path).unwrap_err(),
            TrazoError::MalformedRecord { line: 3, .. }
        ));

        fs::write(&path, "2 2\n..\n...\n").unwrap();
        assert!(matches!(
            Canvas::load(&path).unwrap_err(),
            TrazoError::MalformedRecord { line: 3, .. }
        ));
    }
}
