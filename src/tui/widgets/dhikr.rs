use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::models::CounterGoal;
use crate::tui::theme;
use crate::utils::format::progress_bar;

/// Columns one glyph takes at quadrant pixel size.
const GLYPH_WIDTH: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, goal: &CounterGoal, burst: u32, focused: bool) {
    let block = Block::default()
        .title(Span::styled(" Dhikr & Tasbih ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(focused))
        .style(theme::surface());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // big count
            Constraint::Length(1), // out of
            Constraint::Length(1), // bar
            Constraint::Min(0),    // key hints
        ])
        .split(inner);

    let count = goal.value().to_string();
    let count_width = (count.chars().count() as u16 * GLYPH_WIDTH).min(rows[0].width);
    let count_area = Rect {
        x: rows[0].x + (rows[0].width - count_width) / 2,
        width: count_width,
        ..rows[0]
    };
    let count_style = if goal.completed() {
        theme::emerald().add_modifier(Modifier::BOLD)
    } else {
        theme::rose().add_modifier(Modifier::BOLD)
    };
    let big = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(count_style)
        .lines(vec![Line::from(count)])
        .build();
    frame.render_widget(big, count_area);

    let out_of = Paragraph::new(Line::from(Span::styled(
        format!("out of {}", goal.target()),
        theme::dim(),
    )))
    .centered();
    frame.render_widget(out_of, rows[1]);

    let bar_width = rows[2].width.saturating_sub(4) as usize;
    let bar = Paragraph::new(Line::from(Span::styled(
        progress_bar(goal.ratio(), bar_width),
        if goal.completed() { theme::emerald() } else { theme::rose() },
    )))
    .centered();
    frame.render_widget(bar, rows[2]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[-]", theme::gold()),
        Span::styled(" -1  ", theme::dim()),
        Span::styled("[d]", theme::gold()),
        Span::styled(" +1  ", theme::dim()),
        Span::styled("[]]", theme::gold()),
        Span::styled(format!(" +{}", burst), theme::dim()),
    ]))
    .centered();
    frame.render_widget(hints, rows[3]);
}
