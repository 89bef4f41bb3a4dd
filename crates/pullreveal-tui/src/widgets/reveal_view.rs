use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use pullreveal_core::{Direction, RevealKind};

use crate::app::App;
use crate::list::UNITS_PER_ROW;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// The container: revealed region rows plus the translated inner list
pub struct RevealViewWidget;

impl RevealViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let window = *app.pager.window();
        let block = Block::default()
            .title(format!(" Messages {}..{} ", window.from_id(), window.to_id()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.grey1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        app.set_viewport_rows(inner.height);
        let rows = inner.height as i32;

        // Positive shift reveals the top region, negative the bottom one
        let model = app.controller.model();
        let shift = model.rest_position() - model.position();
        let shift_rows = ((shift.abs() + UNITS_PER_ROW / 2) / UNITS_PER_ROW).min(rows);

        let first = app.list.first_visible_index();
        let mut lines = Vec::with_capacity(rows.max(0) as usize);
        if shift > 0 {
            lines.extend(Self::region_lines(app, Direction::Top, shift_rows));
            lines.extend(Self::list_lines(app, first, rows - shift_rows));
        } else {
            lines.extend(Self::list_lines(app, first + shift_rows as usize, rows - shift_rows));
            lines.extend(Self::region_lines(app, Direction::Bottom, shift_rows));
        }

        let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.bg0));
        frame.render_widget(paragraph, inner);
    }

    fn list_lines(app: &App, first: usize, count: i32) -> Vec<Line<'static>> {
        let count = count.max(0) as usize;
        (first..first + count)
            .map(|index| match app.list.items().get(index) {
                Some(label) => Line::from(Span::styled(
                    format!(" {}", label),
                    Style::default().fg(app.theme.fg0),
                )),
                None => Line::from(""),
            })
            .collect()
    }

    /// `count` visible rows of a region; the label sits on the row next to the list
    fn region_lines(app: &App, direction: Direction, count: i32) -> Vec<Line<'static>> {
        if count <= 0 {
            return Vec::new();
        }
        let label = Self::region_label(app, direction);
        let style = Style::default().bg(app.theme.bg1);
        let mut lines: Vec<Line<'static>> = (0..count - 1).map(|_| Line::styled("", style)).collect();
        match direction {
            Direction::Top => lines.push(label),
            Direction::Bottom => lines.insert(0, label),
        }
        lines
    }

    fn region_label(app: &App, direction: Direction) -> Line<'static> {
        let noun = match direction {
            Direction::Top => "older",
            Direction::Bottom => "newer",
        };
        let verb = match app.controller.kind() {
            RevealKind::Load => "load",
            RevealKind::Refresh => "refresh",
        };
        let theme = &app.theme;

        let (text, color) = if app.is_busy(direction) {
            let spinner = SPINNER[app.spinner_frame % SPINNER.len()];
            (format!(" {} Loading {} messages...", spinner, noun), theme.busy)
        } else if !app.controller.gates().is_enabled(direction) {
            (format!(" No more {} messages", noun), theme.exhausted)
        } else {
            let arrow = match direction {
                Direction::Top => "v",
                Direction::Bottom => "^",
            };
            (format!(" {} Release to {} {} messages", arrow, verb, noun), theme.region)
        };

        Line::from(Span::styled(
            text,
            Style::default()
                .fg(color)
                .bg(theme.bg1)
                .add_modifier(Modifier::BOLD),
        ))
    }
}
