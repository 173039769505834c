use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::CounterGoal;
use crate::tui::theme;
use crate::utils::format::progress_bar;

/// Counter panel shared by Quran reading and study time.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    goal: &CounterGoal,
    unit: &str,
    accent: Style,
    focused: bool,
) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(focused))
        .style(theme::surface());

    let bar_width = (area.width.saturating_sub(12) as usize).min(30);
    let bar_style = if goal.completed() {
        theme::emerald()
    } else {
        accent
    };

    let count_line = Line::from(vec![
        Span::styled("  ", theme::dim()),
        Span::styled(goal.value().to_string(), accent.add_modifier(Modifier::BOLD)),
        Span::styled(format!(" / {} {}", goal.target(), unit), theme::dim()),
        Span::styled(
            if goal.completed() { "  ✓" } else { "" },
            theme::emerald(),
        ),
    ]);

    let bar_line = Line::from(vec![
        Span::styled("  ", theme::dim()),
        Span::styled(progress_bar(goal.ratio(), bar_width), bar_style),
        Span::styled(format!("  {}%", goal.percent()), theme::dim()),
    ]);

    let paragraph = Paragraph::new(vec![count_line, bar_line]).block(block);
    frame.render_widget(paragraph, area);
}
