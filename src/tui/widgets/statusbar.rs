use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::InputMode;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, mode: &InputMode) {
    let hints: &[(&str, &str)] = match mode {
        InputMode::Normal => &[
            ("[Tab]", " section  "),
            ("[Enter]", " toggle/edit  "),
            ("[1-5]", " prayer  "),
            ("[+/-]", " adjust  "),
            ("[d]", " dhikr  "),
            ("[n]", " notes  "),
            ("[?]", " help  "),
            ("[Esc]", " quit"),
        ],
        InputMode::Amount(_) | InputMode::DuaText => {
            &[("[Enter]", " save  "), ("[Esc]", " cancel")]
        }
        InputMode::Notes => &[("[Enter]", " new line  "), ("[Esc]", " done")],
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(*key, theme::gold()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
