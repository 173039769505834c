use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::StudyTopic;
use crate::tui::theme;
use crate::utils::format::pad_to_width;

/// Row 0 is "no topic", rows 1.. follow `StudyTopic::ALL`.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    selected: Option<StudyTopic>,
    cursor: usize,
    focused: bool,
) {
    let block = Block::default()
        .title(Span::styled(" Study Topic ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(focused))
        .style(theme::surface());

    let label_width = area.width.saturating_sub(8) as usize;

    let rows = std::iter::once(None).chain(StudyTopic::ALL.iter().copied().map(Some));
    let mut items: Vec<ListItem> = rows
        .enumerate()
        .map(|(i, topic)| {
            let is_cursor = focused && i == cursor;
            let is_selected = topic == selected;

            let label = topic.map(|t| t.label()).unwrap_or("(none)");
            let mark = if is_selected { "◉" } else { "○" };

            let style = if is_cursor {
                theme::gold().add_modifier(Modifier::BOLD)
            } else if is_selected {
                theme::emerald()
            } else {
                theme::dim()
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("  {} ", mark), style),
                Span::styled(pad_to_width(label, label_width), style),
            ]))
        })
        .collect();

    if let Some(topic) = selected {
        items.push(ListItem::new(Line::from("")));
        items.push(ListItem::new(Line::from(vec![
            Span::styled("  Today's focus: ", theme::dim()),
            Span::styled(topic.label(), theme::emerald().add_modifier(Modifier::BOLD)),
        ])));
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
