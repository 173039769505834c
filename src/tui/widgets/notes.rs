use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme;

const PLACEHOLDER: &str =
    "Write your daily reflections, learned concepts, or questions for further study...";

pub fn render(frame: &mut Frame, area: Rect, notes: &str, editing: bool, focused: bool) {
    let title = if editing {
        " Notes & Reflections (editing, [Esc] done) "
    } else {
        " Notes & Reflections "
    };
    let block = Block::default()
        .title(Span::styled(title, theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if editing { theme::emerald() } else { theme::border(focused) })
        .style(theme::surface());

    let mut lines: Vec<Line> = if notes.is_empty() && !editing {
        vec![Line::from(Span::styled(PLACEHOLDER, theme::dim()))]
    } else {
        notes
            .split('\n')
            .map(|l| Line::from(Span::styled(l, theme::bold())))
            .collect()
    };

    if editing {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("█", theme::emerald()));
        }
    }

    // Keep the tail visible once the text outgrows the panel.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
