//! The character-cell grid rasterizer.
//!
//! Maps samples of a continuous function onto a fixed-size grid of colored
//! glyphs, draws the coordinate axes, and renders the result as plain rows
//! of ANSI-styled text.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use super::table::samples;

/// One cell of the plot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Empty background.
    Blank,
    /// Horizontal axis stroke.
    AxisX,
    /// Vertical axis stroke.
    AxisY,
    /// The axis crossing point.
    Origin,
    /// A plotted sample in the function's display color.
    Sample(Color),
}

/// A fixed-size grid of character cells.
///
/// Vertically the rasterizer assumes a fixed value range of `[-2, 2]`;
/// samples outside it (or outside the horizontal domain) are dropped
/// silently rather than treated as errors.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell blank.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Blank; width * height],
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(col, row)`, or `None` outside the grid.
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        if col < self.width && row < self.height {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    fn set(&mut self, col: usize, row: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    /// Overwrite the center row and column with axis strokes and the exact
    /// center cell with the origin marker.
    pub fn draw_axes(&mut self) {
        let center_row = self.height / 2;
        let center_col = self.width / 2;

        for col in 0..self.width {
            self.set(col, center_row, Cell::AxisX);
        }
        for row in 0..self.height {
            self.set(center_col, row, Cell::AxisY);
        }
        self.set(center_col, center_row, Cell::Origin);
    }

    /// Rasterize `f` over `[domain_min, domain_max)` in `step` increments.
    ///
    /// `x` maps linearly onto the columns of the full domain; `y` maps onto
    /// the rows through the fixed `[-2, 2]` range, flipped so increasing
    /// values move up. Samples mapping outside the grid (including
    /// non-finite values) are skipped.
    pub fn plot_function(
        &mut self,
        f: impl Fn(f64) -> f64,
        color: Color,
        domain_min: f64,
        domain_max: f64,
        step: f64,
    ) {
        let width = self.width as f64;
        let height = self.height as f64;

        for (x, y) in samples(f, domain_min, domain_max, step) {
            let col = ((x - domain_min) * width / (domain_max - domain_min)).floor();
            let row = ((y + 2.0) * height / 4.0).floor();

            if (0.0..width).contains(&col) && (0.0..height).contains(&row) {
                let display_row = self.height - 1 - row as usize;
                self.set(col as usize, display_row, Cell::Sample(color));
            }
        }
    }

    /// Write the grid, one row of concatenated glyphs per line, top to
    /// bottom.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for row in 0..self.height {
            for col in 0..self.width {
                match self.cells[row * self.width + col] {
                    Cell::Blank => write!(out, " ")?,
                    Cell::AxisX => write!(out, "{}", "-".with(Color::White))?,
                    Cell::AxisY => write!(out, "{}", "|".with(Color::White))?,
                    Cell::Origin => write!(out, "{}", "+".with(Color::White))?,
                    Cell::Sample(color) => write!(out, "{}", "[]".with(color))?,
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
