//! TUI rendering for Tally using ratatui.

mod input;
mod keypad;
mod theme;

pub use input::handle_events;
pub use theme::{glyphs, palette, styles, Glyphs, Palette};

use chrono::{DateTime, Local};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use tally_engine::{App, CalcMode, Operator, format_number};

use self::keypad::{KeyKind, label, row_count, rows};

const HISTORY_PANEL_WIDTH: u16 = 34;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let area = frame.area();
    let show_history = app.history_panel().visible && area.width >= HISTORY_PANEL_WIDTH + 30;

    let (calc_area, history_area) = if show_history {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(HISTORY_PANEL_WIDTH)])
            .split(area);
        (columns[0], Some(columns[1]))
    } else {
        (area, None)
    };

    let keypad_height = row_count(app.state().mode) + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5),             // Display
            Constraint::Length(keypad_height), // Keypad
            Constraint::Min(0),                // Spacer
            Constraint::Length(1),             // Status bar
        ])
        .split(calc_area);

    draw_display(frame, app, chunks[0], &palette, &glyphs);
    draw_keypad(frame, app, chunks[1], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);

    if let Some(history_area) = history_area {
        draw_history(frame, app, history_area, &palette, &glyphs);
    }
}

fn operator_glyph(op: Operator, glyphs: &Glyphs) -> &'static str {
    match op {
        Operator::Add => "+",
        Operator::Subtract => glyphs.minus,
        Operator::Multiply => glyphs.multiply,
        Operator::Divide => glyphs.divide,
    }
}

fn draw_display(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let state = app.state();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::horizontal(1))
        .title(Span::styled(" tally ", Style::default().fg(palette.primary)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    // Pending expression, e.g. "8 ×" while the second operand is typed.
    let pending_text = state.pending.map_or(String::new(), |pending| {
        format!(
            "{} {}",
            format_number(pending.accumulator),
            operator_glyph(pending.operator, glyphs)
        )
    });

    let value = fit_right(&state.display, inner.width as usize);
    let lines = vec![
        Line::from(Span::styled(
            pending_text,
            Style::default().fg(palette.text_secondary),
        ))
        .alignment(Alignment::Right),
        Line::from(Span::styled(value, styles::display_value(palette)))
            .alignment(Alignment::Right),
        indicator_line(app, palette),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn indicator_line<'a>(app: &App, palette: &Palette) -> Line<'a> {
    let state = app.state();
    let mut spans = Vec::new();
    if state.memory != 0.0 {
        spans.push(Span::styled(
            "M ",
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        ));
    }
    let mode_style = match state.mode {
        CalcMode::Scientific => Style::default().fg(palette.accent),
        CalcMode::Standard => Style::default().fg(palette.text_muted),
    };
    spans.push(Span::styled(state.mode.as_str().to_owned(), mode_style));
    Line::from(spans)
}

/// Right-align the display value, keeping the rightmost characters when the
/// panel is too narrow for the full number.
fn fit_right(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_owned();
    }
    let skip = value.chars().count().saturating_sub(width.saturating_sub(1));
    let tail: String = value.chars().skip(skip).collect();
    format!("…{tail}")
}

fn draw_keypad(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let flash = app.key_flash();
    let lines: Vec<Line> = rows(app.state().mode)
        .into_iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for cap in row {
                let text = format!(" {:^5} ", label(cap.id, glyphs));
                let style = if flash == Some(cap.id) {
                    Style::default()
                        .fg(palette.bg_dark)
                        .bg(palette.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    keycap_style(cap.kind, palette)
                };
                spans.push(Span::styled(text, style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn keycap_style(kind: KeyKind, palette: &Palette) -> Style {
    let base = Style::default().bg(palette.bg_panel);
    match kind {
        KeyKind::Digit => base.fg(palette.text_primary),
        KeyKind::OperatorKey => base.fg(palette.peach),
        KeyKind::Equals => base.fg(palette.accent).add_modifier(Modifier::BOLD),
        KeyKind::ClearKey => base.fg(palette.error),
        KeyKind::MemoryKey => base.fg(palette.success),
        KeyKind::SciKey => base.fg(palette.blue),
    }
}

fn draw_history(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            " history ",
            Style::default().fg(palette.primary),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries = app.state().history.entries();
    if entries.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No calculations yet",
            Style::default().fg(palette.text_muted),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    let visible = inner.height as usize;
    let selected = app.history_panel().selected;
    // Keep the selection in view.
    let start = selected.saturating_sub(visible.saturating_sub(1));

    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(index, entry)| {
            let is_selected = index == selected;
            let marker = if is_selected {
                format!("{} ", glyphs.selected)
            } else {
                "  ".to_owned()
            };
            let time: DateTime<Local> = entry.timestamp().into();
            let style = if is_selected {
                Style::default()
                    .fg(palette.text_primary)
                    .bg(palette.bg_highlight)
            } else {
                Style::default().fg(palette.text_secondary)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(palette.accent)),
                Span::styled(entry.to_string(), style),
                Span::styled(
                    format!("  {}", time.format("%H:%M")),
                    Style::default().fg(palette.text_muted),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let line = if let Some(message) = app.status() {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                message.to_owned(),
                Style::default().fg(palette.warning),
            ),
        ])
    } else {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled("0-9", styles::key_highlight(palette)),
            Span::styled(" digits  ", styles::key_hint(palette)),
            Span::styled("+-*/", styles::key_highlight(palette)),
            Span::styled(" ops  ", styles::key_hint(palette)),
            Span::styled("Enter", styles::key_highlight(palette)),
            Span::styled(" =  ", styles::key_hint(palette)),
            Span::styled("Tab", styles::key_highlight(palette)),
            Span::styled(" mode  ", styles::key_hint(palette)),
            Span::styled("h", styles::key_highlight(palette)),
            Span::styled(" history  ", styles::key_hint(palette)),
            Span::styled("y", styles::key_highlight(palette)),
            Span::styled(" copy  ", styles::key_hint(palette)),
            Span::styled("Q", styles::key_highlight(palette)),
            Span::styled(" quit ", styles::key_hint(palette)),
        ];
        if app.history_panel().visible {
            spans.push(Span::styled(
                format!("{} ", glyphs.separator),
                styles::key_hint(palette),
            ));
            spans.push(Span::styled("↑↓", styles::key_highlight(palette)));
            spans.push(Span::styled(" select  ", styles::key_hint(palette)));
            spans.push(Span::styled("D", styles::key_highlight(palette)));
            spans.push(Span::styled(" clear ", styles::key_hint(palette)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}
