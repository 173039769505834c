use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{PrayerType, Prayers};
use crate::tui::theme;

fn icon(prayer: PrayerType) -> &'static str {
    match prayer {
        PrayerType::Fajr => "☀",
        PrayerType::Maghrib => "☾",
        _ => "◷",
    }
}

pub fn render(frame: &mut Frame, area: Rect, prayers: &Prayers, focused_idx: usize, focused: bool) {
    let block = Block::default()
        .title(Span::styled(" Daily Prayers ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(focused))
        .style(theme::surface());

    let items: Vec<ListItem> = prayers
        .iter()
        .enumerate()
        .map(|(i, (prayer, done))| {
            let is_focused = focused && i == focused_idx;

            let name_style = if is_focused {
                theme::gold().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };

            let (mark, mark_style, label) = if done {
                ("●", theme::emerald(), "done")
            } else {
                ("○", theme::dim(), "pending")
            };

            let line = Line::from(vec![
                Span::styled(format!(" {} ", icon(prayer)), theme::dim()),
                Span::styled(format!("{}  ", i + 1), theme::dim()),
                Span::styled(format!("{:<9}", prayer.display_name()), name_style),
                Span::styled(mark, mark_style),
                Span::styled(format!("  {}", label), theme::dim()),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
