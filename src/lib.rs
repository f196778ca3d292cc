//! Trazo - a colorful terminal sketchbook.
//!
//! Four small, independent programs behind one binary:
//!
//! - an ASCII function plotter that rasterizes catalog functions onto a
//!   character grid with coordinate axes and a value table,
//! - a pixel-art editor running as a terminal UI,
//! - a todo-list manager persisted to a flat text file,
//! - a CSV-backed family-tree viewer.
//!
//! The programs share nothing but the CLI, the error type and the logging
//! setup; each is deliberately self-contained.
//!
//! # Example
//!
//! ```
//! use trazo::plot::grid::Grid;
//! use crossterm::style::Color;
//!
//! let mut grid = Grid::new(50, 20);
//! grid.draw_axes();
//! grid.plot_function(|x| x.sin(), Color::Blue, -3.0, 3.0, 0.1);
//!
//! let mut out = Vec::new();
//! grid.render(&mut out).unwrap();
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod error;
pub mod family;
pub mod pixel;
pub mod plot;
pub mod todo;

pub use error::{Result, TrazoError};
