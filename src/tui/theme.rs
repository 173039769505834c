use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(12, 20, 18);
pub const SURFACE: Color = Color::Rgb(18, 30, 27);
pub const BORDER: Color = Color::Rgb(40, 66, 58);
pub const TEXT: Color = Color::Rgb(222, 236, 228);
pub const TEXT_DIM: Color = Color::Rgb(118, 146, 136);
pub const EMERALD: Color = Color::Rgb(52, 168, 124);
pub const GOLD: Color = Color::Rgb(206, 172, 84);
pub const ROSE: Color = Color::Rgb(214, 96, 112);
pub const PURPLE: Color = Color::Rgb(156, 120, 210);
pub const RED: Color = Color::Rgb(190, 78, 64);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn emerald() -> Style {
    Style::default().fg(EMERALD)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn rose() -> Style {
    Style::default().fg(ROSE)
}

pub fn purple() -> Style {
    Style::default().fg(PURPLE)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn border(focused: bool) -> Style {
    if focused {
        gold()
    } else {
        Style::default().fg(BORDER)
    }
}
