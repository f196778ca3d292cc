//! The grid rasterizer & function plotter.
//!
//! Control flow of a session: select a function, print its value table,
//! draw the axes, rasterize the samples, render the grid, then repeat the
//! render a fixed number of times with a fixed delay. The repetition is a
//! redraw demonstration, not genuine motion: the configuration never
//! changes between frames.

pub mod catalog;
pub mod grid;
pub mod table;

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    execute,
    terminal::{Clear, ClearType},
};

use crate::error::{Result, TrazoError};
use catalog::Function;
use grid::Grid;

/// Runtime knobs of a plot session.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Number of redraw frames after the initial render.
    pub frames: u32,
    /// Delay between redraw frames.
    pub delay: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            width: 50,
            height: 20,
            frames: 5,
            delay: Duration::from_millis(500),
        }
    }
}

/// Run a full interactive session: clear the screen, show the menu, read a
/// selection from stdin and plot it.
pub fn run(options: SessionOptions) -> Result<()> {
    let mut stdout = io::stdout();

    clear_screen(&mut stdout)?;
    print_menu(&mut stdout)?;

    let function = read_selection(&mut io::stdin().lock())?;
    writeln!(stdout)?;

    run_with(function, options)
}

/// Plot a specific catalog function without the interactive menu.
pub fn run_with(function: Function, options: SessionOptions) -> Result<()> {
    let config = function.config();
    let mut stdout = io::stdout();

    tracing::info!("Plotting {}", function.name());

    table::tabulate(
        &mut stdout,
        |x| function.eval(x),
        config.domain_min,
        config.domain_max,
        config.step,
    )?;

    render_frame(&mut stdout, &config, options)?;

    for _ in 0..options.frames {
        clear_screen(&mut stdout)?;
        writeln!(stdout, "Animating...")?;
        render_frame(&mut stdout, &config, options)?;
        thread::sleep(options.delay);
    }

    Ok(())
}

fn render_frame(
    out: &mut impl Write,
    config: &catalog::PlotConfig,
    options: SessionOptions,
) -> Result<()> {
    let mut grid = Grid::new(options.width, options.height);
    grid.draw_axes();
    grid.plot_function(
        |x| config.function.eval(x),
        config.color,
        config.domain_min,
        config.domain_max,
        config.step,
    );
    grid.render(out)?;
    Ok(())
}

fn print_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Choose a function to plot:")?;
    for (i, function) in Function::ALL.iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, function.name())?;
    }
    write!(out, "Select an option: ")?;
    out.flush()
}

fn read_selection(input: &mut impl BufRead) -> Result<Function> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let token = line.trim();

    token
        .parse::<u32>()
        .ok()
        .and_then(Function::from_choice)
        .ok_or_else(|| TrazoError::invalid_selection(token))
}

fn clear_screen(out: &mut impl Write) -> Result<()> {
    execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_resolves_catalog_choices() {
        let function = read_selection(&mut "6\n".as_bytes()).unwrap();
        assert_eq!(function, Function::Linear);

        let function = read_selection(&mut "  1  \n".as_bytes()).unwrap();
        assert_eq!(function, Function::Sine);
    }

    #[test]
    fn selection_rejects_everything_else() {
        for input in ["99\n", "0\n", "-1\n", "abc\n", "\n"] {
            let err = read_selection(&mut input.as_bytes()).unwrap_err();
            assert!(matches!(err, TrazoError::InvalidSelection { .. }));
        }
    }

    #[test]
    fn menu_lists_all_seven_functions() {
        let mut out = Vec::new();
        print_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        for i in 1..=7 {
            assert!(text.contains(&format!("{} -", i)));
        }
        assert!(text.contains("Choose a function to plot:"));
    }
}
