use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;
use crate::utils::format::progress_bar;

pub fn render(frame: &mut Frame, area: Rect, today_str: &str, hijri_str: &str, progress: u8) {
    let title_line = Line::from(vec![
        Span::styled("  ﷽  ", theme::gold()),
        Span::styled("Daily Deen Tracker", theme::emerald().add_modifier(Modifier::BOLD)),
    ]);

    let date_line = Line::from(vec![
        Span::styled(today_str, theme::dim()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(hijri_str, theme::gold()),
    ]);

    let bar_width = (area.width.saturating_sub(24) as usize).min(48);
    let progress_style = if progress >= 100 {
        theme::emerald().add_modifier(Modifier::BOLD)
    } else {
        theme::emerald()
    };
    let progress_line = Line::from(vec![
        Span::styled("Daily Progress  ", theme::dim()),
        Span::styled(progress_bar(progress as f64 / 100.0, bar_width), progress_style),
        Span::styled(format!("  {:>3}%", progress), theme::bold()),
    ]);

    let text = vec![title_line, date_line, Line::from(""), progress_line];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::emerald())
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
