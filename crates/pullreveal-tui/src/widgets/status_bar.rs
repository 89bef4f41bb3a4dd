use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use pullreveal_core::{Phase, RevealEvent};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let phase_str = match app.controller.phase() {
            Phase::Idle => "IDLE".to_string(),
            Phase::Dragging(direction) => format!("DRAG {}", direction),
            Phase::AnimatingToActive(direction) => format!("REVEAL {}", direction),
            Phase::Active(direction) => format!("ACTIVE {}", direction),
            Phase::AnimatingToRest => "COLLAPSE".to_string(),
        };

        let gates = app.controller.gates();
        let gate_str = format!(
            "{}{}",
            if gates.top_enabled { "T" } else { "-" },
            if gates.bottom_enabled { "B" } else { "-" }
        );

        let event_str = match app.last_event {
            Some(RevealEvent::Load(direction)) => format!("load:{}", direction),
            Some(RevealEvent::Refresh(direction)) => format!("refresh:{}", direction),
            None => "-".to_string(),
        };

        let mut status_text = format!(
            " {} | pos {} | gates {} | last {}",
            phase_str,
            app.controller.position(),
            gate_str,
            event_str
        );
        if let Some(msg) = &app.status_message {
            status_text.push_str(" |");
            status_text.push_str(msg);
        }

        let help_hint = " q:quit drag/wheel:pull t/b:load s:stop T/B:gates ";
        let padding_len = area
            .width
            .saturating_sub((status_text.width() + help_hint.width()) as u16)
            as usize;

        let theme = &app.theme;
        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg1).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
