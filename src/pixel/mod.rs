//! The pixel-art editor feature.
//!
//! State management and business logic live here; `ui` is the pure
//! rendering layer and the event loop sits in the binary.

pub mod canvas;
pub mod ui;

use std::path::PathBuf;

use crate::error::Result;
use canvas::{Canvas, PaletteColor};

/// Active drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Paint with the current color.
    Paint,
    /// Paint with the background white.
    Erase,
}

impl Tool {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Paint => "paint",
            Tool::Erase => "erase",
        }
    }
}

/// Pixel editor state.
#[derive(Debug)]
pub struct EditorState {
    /// The canvas being edited.
    pub canvas: Canvas,
    /// Cursor position `(x, y)` on the canvas.
    pub cursor: (usize, usize),
    /// Active tool.
    pub tool: Tool,
    /// Current drawing color.
    pub color: PaletteColor,
    /// Color picker overlay visibility.
    pub picker_open: bool,
    /// Selection inside the picker.
    pub picker_cursor: usize,
    /// File the canvas is loaded from and saved to.
    pub file_path: PathBuf,
    /// Status message.
    pub status: String,
    /// Unsaved changes indicator.
    pub dirty: bool,
}

impl EditorState {
    /// Open the editor on `path`, loading an existing canvas if present,
    /// otherwise starting from a fresh 64 × 64 one.
    pub fn open(path: PathBuf) -> Result<Self> {
        let (canvas, status) = if path.exists() {
            let canvas = Canvas::load(&path)?;
            let status = format!("Loaded {}", path.display());
            (canvas, status)
        } else {
            (Canvas::new(64), "Ready".to_string())
        };

        Ok(Self {
            canvas,
            cursor: (0, 0),
            tool: Tool::Paint,
            color: PaletteColor::Black,
            picker_open: false,
            picker_cursor: 0,
            file_path: path,
            status,
            dirty: false,
        })
    }

    /// Move the cursor left.
    pub fn cursor_left(&mut self) {
        self.cursor.0 = self.cursor.0.saturating_sub(1);
    }

    /// Move the cursor right.
    pub fn cursor_right(&mut self) {
        if self.cursor.0 + 1 < self.canvas.size() {
            self.cursor.0 += 1;
        }
    }

    /// Move the cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor.1 = self.cursor.1.saturating_sub(1);
    }

    /// Move the cursor down.
    pub fn cursor_down(&mut self) {
        if self.cursor.1 + 1 < self.canvas.size() {
            self.cursor.1 += 1;
        }
    }

    /// Apply the active tool at the cursor.
    pub fn apply_tool(&mut self) {
        let (x, y) = self.cursor;
        let color = match self.tool {
            Tool::Paint => self.color,
            Tool::Erase => PaletteColor::White,
        };
        self.canvas.set(x, y, color);
        self.dirty = true;
    }

    /// Switch the active tool.
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.status = format!("Tool: {}", tool.name());
    }

    /// Switch to a fresh white canvas of `size` × `size`.
    pub fn set_canvas_size(&mut self, size: usize) {
        self.canvas.resize(size);
        self.cursor.0 = self.cursor.0.min(size - 1);
        self.cursor.1 = self.cursor.1.min(size - 1);
        self.dirty = true;
        self.status = format!("Canvas: {0}x{0}", size);
    }

    /// Reset the canvas to white.
    pub fn clear_canvas(&mut self) {
        self.canvas.clear();
        self.dirty = true;
        self.status = "Canvas cleared".to_string();
    }

    /// Open the color picker on the current color.
    pub fn open_picker(&mut self) {
        self.picker_cursor = PaletteColor::ALL
            .iter()
            .position(|&c| c == self.color)
            .unwrap_or(0);
        self.picker_open = true;
    }

    /// Close the picker without changing the color.
    pub fn close_picker(&mut self) {
        self.picker_open = false;
    }

    /// Move the picker selection left.
    pub fn picker_left(&mut self) {
        self.picker_cursor = self.picker_cursor.saturating_sub(1);
    }

    /// Move the picker selection right.
    pub fn picker_right(&mut self) {
        if self.picker_cursor + 1 < PaletteColor::ALL.len() {
            self.picker_cursor += 1;
        }
    }

    /// Confirm the picker selection as the drawing color.
    pub fn pick_color(&mut self) {
        self.color = PaletteColor::ALL[self.picker_cursor];
        self.picker_open = false;
        self.status = format!("Color: {}", self.color.name());
    }

    /// Save the canvas to the session file.
    pub fn save(&mut self) {
        match self.canvas.save(&self.file_path) {
            Ok(()) => {
                self.dirty = false;
                self.status = format!("Saved {}", self.file_path.display());
            },
            Err(e) => self.status = format!("Save failed: {}", e),
        }
    }
}
