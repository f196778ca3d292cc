//! Pixel editor rendering - pure drawing layer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::canvas::PaletteColor;
use super::EditorState;

/// UI color palette (gruvbox dark).
struct UiColors {
    label: Color,
    text: Color,
    dim: Color,
    border: Color,
    status_fg: Color,
    status_bg: Color,
}

const COLORS: UiColors = UiColors {
    label: Color::Rgb(184, 187, 38),
    text: Color::Rgb(235, 219, 178),
    dim: Color::Rgb(146, 131, 116),
    border: Color::Rgb(102, 92, 84),
    status_fg: Color::Rgb(235, 219, 178),
    status_bg: Color::Rgb(60, 56, 54),
};

/// Draw the editor UI.
pub fn draw(f: &mut Frame<'_>, state: &EditorState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(4),    // Canvas
            Constraint::Length(1), // Status
            Constraint::Length(1), // Keymap
        ])
        .split(f.area());

    draw_header(f, chunks[0], state);
    draw_canvas(f, chunks[1], state);
    draw_status(f, chunks[2], state);
    draw_keymap(f, chunks[3]);

    if state.picker_open {
        draw_picker(f, state);
    }
}

fn draw_header(f: &mut Frame<'_>, area: Rect, state: &EditorState) {
    let label = Style::default().fg(COLORS.label);
    let value = Style::default().fg(COLORS.text);
    let size = state.canvas.size();

    let mut spans = vec![
        Span::styled("Tool: ", label),
        Span::styled(state.tool.name(), value),
        Span::raw("   "),
        Span::styled("Color: ", label),
        Span::styled(state.color.name(), Style::default().fg(state.color.color())),
        Span::raw("   "),
        Span::styled("Canvas: ", label),
        Span::styled(format!("{0}x{0}", size), value),
        Span::raw("   "),
        Span::styled("File: ", label),
        Span::styled(state.file_path.display().to_string(), value),
    ];
    if state.dirty {
        spans.push(Span::styled(" [+]", Style::default().fg(Color::Rgb(250, 189, 47))));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_canvas(f: &mut Frame<'_>, area: Rect, state: &EditorState) {
    let size = state.canvas.size();

    // Each pixel is two terminal columns wide; clip what the area cannot fit.
    let canvas_width = ((size as u16).saturating_mul(2)).min(area.width);
    let canvas_height = (size as u16).min(area.height);
    if canvas_width == 0 || canvas_height == 0 {
        return;
    }

    let target = Rect::new(
        area.x + (area.width - canvas_width) / 2,
        area.y + (area.height - canvas_height) / 2,
        canvas_width,
        canvas_height,
    );

    let visible_cols = (canvas_width / 2) as usize;
    let mut lines = Vec::with_capacity(canvas_height as usize);
    for y in 0..canvas_height as usize {
        let mut spans = Vec::with_capacity(visible_cols);
        for x in 0..visible_cols {
            let pixel = state.canvas.get(x, y).unwrap_or(PaletteColor::White);
            let style = Style::default().bg(pixel.color());
            if (x, y) == state.cursor {
                spans.push(Span::styled("><", style.fg(cursor_fg(pixel))));
            } else {
                spans.push(Span::styled("  ", style));
            }
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), target);
}

fn cursor_fg(under: PaletteColor) -> Color {
    match under {
        PaletteColor::Black | PaletteColor::Blue | PaletteColor::Purple => {
            Color::Rgb(255, 255, 255)
        },
        _ => Color::Rgb(0, 0, 0),
    }
}

fn draw_status(f: &mut Frame<'_>, area: Rect, state: &EditorState) {
    let paragraph = Paragraph::new(state.status.clone())
        .style(Style::default().fg(COLORS.status_fg).bg(COLORS.status_bg));
    f.render_widget(paragraph, area);
}

fn draw_keymap(f: &mut Frame<'_>, area: Rect) {
    let keymap = "hjkl/arrows: move | space: draw | p: paint | e: erase | c: color | 1-5: size | x: clear | s: save | q: quit";
    let paragraph = Paragraph::new(keymap).style(Style::default().fg(COLORS.dim));
    f.render_widget(paragraph, area);
}

fn draw_picker(f: &mut Frame<'_>, state: &EditorState) {
    let area = centered_rect(50, 20, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Colors ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLORS.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut swatches = Vec::new();
    for (i, color) in PaletteColor::ALL.into_iter().enumerate() {
        let (open, close) = if i == state.picker_cursor {
            ("[", "]")
        } else {
            (" ", " ")
        };
        swatches.push(Span::raw(open));
        swatches.push(Span::styled("  ", Style::default().bg(color.color())));
        swatches.push(Span::raw(close));
    }

    let selected = PaletteColor::ALL[state.picker_cursor];
    let lines = vec![
        Line::from(swatches),
        Line::from(Span::styled(
            selected.name(),
            Style::default().fg(selected.color()),
        )),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
