use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Dua;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, dua: &Dua, focused: bool) {
    let block = Block::default()
        .title(Span::styled(" Dua ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(focused))
        .style(theme::surface());

    let status = if dua.completed {
        Line::from(vec![
            Span::styled("  ● ", theme::emerald()),
            Span::styled("Dua made today", theme::bold()),
        ])
    } else {
        Line::from(vec![
            Span::styled("  ○ ", theme::dim()),
            Span::styled("Not yet", theme::dim()),
        ])
    };

    let studied = if dua.studied_text.is_empty() {
        Line::from(Span::styled("  [e] note the dua studied", theme::dim()))
    } else {
        Line::from(Span::styled(format!("  {}", dua.studied_text), theme::purple()))
    };

    let paragraph = Paragraph::new(vec![status, Line::from(""), studied])
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
