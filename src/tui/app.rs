use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::AppConfig;
use crate::models::{PrayerType, StudyTopic};
use crate::tracker::{Counter, DailyTracker};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{dhikr, dua, goal, header, notes, prayers, statusbar, topic};
use crate::utils::hijri::today_hijri_string;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Prayers,
    Quran,
    Study,
    Dhikr,
    Dua,
    Topic,
    Notes,
}

impl Section {
    const ORDER: [Section; 7] = [
        Section::Prayers,
        Section::Quran,
        Section::Study,
        Section::Dhikr,
        Section::Dua,
        Section::Topic,
        Section::Notes,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn counter(self) -> Option<Counter> {
        match self {
            Section::Quran => Some(Counter::Quran),
            Section::Study => Some(Counter::Study),
            Section::Dhikr => Some(Counter::Dhikr),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Amount(Counter),
    DuaText,
    Notes,
}

pub struct App {
    pub tracker: DailyTracker,
    pub config: AppConfig,
    pub view: View,
    pub focus: Section,
    pub prayer_idx: usize,
    pub topic_idx: usize, // 0 = no topic
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub input_error: Option<String>,

    pub today_str: String,
    pub hijri_str: String,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let tracker = DailyTracker::new(config.initial_state());
        let mut app = App {
            tracker,
            config,
            view: View::Dashboard,
            focus: Section::Prayers,
            prayer_idx: 0,
            topic_idx: 0,
            should_quit: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            input_error: None,
            today_str: String::new(),
            hijri_str: String::new(),
        };
        app.refresh_dates();
        app
    }

    /// Recompute the header dates so a session left open past midnight
    /// shows the new day.
    pub fn refresh_dates(&mut self) {
        self.today_str = Local::now().format("%A, %B %-d, %Y").to_string();
        self.hijri_str = today_hijri_string(self.config.display.hijri_offset);
    }

    fn step(&self, counter: Counter) -> i64 {
        let steps = &self.config.steps;
        match counter {
            Counter::Quran => steps.quran_pages as i64,
            Counter::Study => steps.study_minutes as i64,
            Counter::Dhikr => steps.dhikr as i64,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only handle actual key presses; some terminals also report release/repeat
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_mode {
            InputMode::Amount(counter) => self.handle_amount_input(key, counter),
            InputMode::DuaText => self.handle_dua_input(key),
            InputMode::Notes => self.handle_notes_input(key),
            InputMode::Normal => match self.view {
                View::Dashboard => self.handle_dashboard_key(key),
                View::Help => self.handle_help_key(key),
            },
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                self.toggle_prayer(PrayerType::ALL[idx]);
                self.focus = Section::Prayers;
                self.prayer_idx = idx;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),
            KeyCode::Char('e') => self.edit_focused(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if let Some(counter) = self.focus.counter() {
                    self.tracker.adjust_counter(counter, self.step(counter));
                }
            }
            KeyCode::Char('-') => {
                if let Some(counter) = self.focus.counter() {
                    self.tracker.adjust_counter(counter, -self.step(counter));
                }
            }
            // d and ] always work on dhikr and move focus there
            KeyCode::Char('d') => {
                self.focus = Section::Dhikr;
                self.tracker.adjust_dhikr_count(self.config.steps.dhikr as i64);
            }
            KeyCode::Char(']') => {
                self.focus = Section::Dhikr;
                self.tracker
                    .adjust_dhikr_count(self.config.steps.dhikr_burst as i64);
            }
            KeyCode::Char('n') => {
                self.focus = Section::Notes;
                self.begin_notes();
            }
            KeyCode::Char('R') => {
                self.tracker.reset();
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if let KeyCode::Esc | KeyCode::Char('?') = key.code {
            self.view = View::Dashboard;
        }
    }

    fn move_cursor(&mut self, delta: i32) {
        let (idx, len) = match self.focus {
            Section::Prayers => (&mut self.prayer_idx, PrayerType::ALL.len()),
            Section::Topic => (&mut self.topic_idx, StudyTopic::ALL.len() + 1),
            _ => return,
        };
        *idx = (*idx as i32 + delta).clamp(0, len as i32 - 1) as usize;
    }

    fn toggle_prayer(&mut self, prayer: PrayerType) {
        if let Err(e) = self.tracker.toggle_prayer(prayer.as_str()) {
            log::error!("{}", e);
        }
    }

    fn activate_focused(&mut self) {
        match self.focus {
            Section::Prayers => {
                if let Some(prayer) = PrayerType::ALL.get(self.prayer_idx) {
                    self.toggle_prayer(*prayer);
                }
            }
            Section::Dua => self.tracker.toggle_dua(),
            Section::Topic => {
                let key = match self.topic_idx {
                    0 => "",
                    i => StudyTopic::ALL[i - 1].key(),
                };
                if let Err(e) = self.tracker.select_topic(key) {
                    log::error!("{}", e);
                }
            }
            Section::Notes => self.begin_notes(),
            Section::Quran | Section::Study | Section::Dhikr => self.edit_focused(),
        }
    }

    fn edit_focused(&mut self) {
        self.input_buffer.clear();
        self.input_error = None;
        match self.focus {
            Section::Quran | Section::Study | Section::Dhikr => {
                if let Some(counter) = self.focus.counter() {
                    self.input_mode = InputMode::Amount(counter);
                }
            }
            Section::Dua => {
                self.input_buffer = self.tracker.state().dua.studied_text.clone();
                self.input_mode = InputMode::DuaText;
            }
            Section::Notes => self.begin_notes(),
            Section::Prayers | Section::Topic => {}
        }
    }

    fn begin_notes(&mut self) {
        self.input_buffer = self.tracker.state().notes.clone();
        self.input_mode = InputMode::Notes;
    }

    fn finish_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.input_error = None;
    }

    fn handle_amount_input(&mut self, key: KeyEvent, counter: Counter) {
        match key.code {
            KeyCode::Esc => self.finish_input(),
            KeyCode::Enter => {
                let trimmed = self.input_buffer.trim().to_string();
                if trimmed.is_empty() {
                    self.input_error = Some("Enter a number first (e.g. 3)".to_string());
                    return;
                }
                match trimmed.parse::<i64>() {
                    Ok(n) => {
                        self.tracker.set_counter(counter, n);
                        self.finish_input();
                    }
                    Err(_) => {
                        self.input_error = Some(format!("'{}' is not a whole number", trimmed));
                    }
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.input_error = None;
            }
            KeyCode::Char(c) if c.is_ascii_digit() || (c == '-' && self.input_buffer.is_empty()) => {
                self.input_buffer.push(c);
                self.input_error = None;
            }
            _ => {}
        }
    }

    fn handle_dua_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.finish_input(),
            KeyCode::Enter => {
                let text = std::mem::take(&mut self.input_buffer);
                self.tracker.set_dua_text(text);
                self.finish_input();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            _ => {}
        }
    }

    /// Notes follow every keystroke, like a text area bound to the state.
    fn handle_notes_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.finish_input();
                return;
            }
            KeyCode::Enter => self.input_buffer.push('\n'),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            _ => return,
        }
        self.tracker.set_notes(self.input_buffer.clone());
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);

        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }

        match self.input_mode {
            InputMode::Amount(counter) => self.draw_amount_input(frame, counter),
            InputMode::DuaText => self.draw_dua_input(frame),
            InputMode::Normal | InputMode::Notes => {}
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        let state = self.tracker.state();

        // Clear background
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // header
                Constraint::Min(0),    // body
                Constraint::Length(7), // notes
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer_chunks[0],
            &self.today_str,
            &self.hijri_str,
            self.tracker.daily_progress_percent(),
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(32),
                Constraint::Percentage(34),
                Constraint::Percentage(34),
            ])
            .split(outer_chunks[1]);

        // Left: prayers + dua
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(columns[0]);

        prayers::render(
            frame,
            left[0],
            &state.prayers,
            self.prayer_idx,
            self.focus == Section::Prayers,
        );
        dua::render(frame, left[1], &state.dua, self.focus == Section::Dua);

        // Middle: quran + study + dhikr
        let middle = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(columns[1]);

        goal::render(
            frame,
            middle[0],
            "Quran Reading",
            &state.quran_reading,
            Counter::Quran.unit(),
            theme::emerald(),
            self.focus == Section::Quran,
        );
        goal::render(
            frame,
            middle[1],
            "Islamic Study",
            &state.islamic_study,
            Counter::Study.unit(),
            theme::purple(),
            self.focus == Section::Study,
        );
        dhikr::render(
            frame,
            middle[2],
            &state.dhikr,
            self.config.steps.dhikr_burst,
            self.focus == Section::Dhikr,
        );

        // Right: topic
        topic::render(
            frame,
            columns[2],
            state.selected_topic,
            self.topic_idx,
            self.focus == Section::Topic,
        );

        notes::render(
            frame,
            outer_chunks[2],
            &state.notes,
            self.input_mode == InputMode::Notes,
            self.focus == Section::Notes,
        );

        statusbar::render(frame, outer_chunks[3], &self.input_mode);
    }

    fn popup_area(area: Rect, height: u16) -> Rect {
        let height = height.min(area.height);
        Rect {
            x: area.width / 4,
            y: (area.height / 2).saturating_sub(height / 2),
            width: area.width / 2,
            height,
        }
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Self::popup_area(area, 18);

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("[Tab] / [S-Tab]", "Next / previous section"),
            ("[↑ ↓] [j k]", "Move within prayers or topics"),
            ("[Enter] [Space]", "Toggle prayer / dua, pick topic, edit"),
            ("[1-5]", "Toggle Fajr … Isha"),
            ("[+] [-]", "Adjust focused counter by one step"),
            ("[e]", "Type an exact value / edit dua text"),
            ("[d] / []]", "Dhikr +1 / burst"),
            ("[n]", "Edit notes"),
            ("[R]", "Clear today"),
            ("[?]", "Toggle help"),
            ("[Esc]", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, action) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {:<17}", key), theme::gold()),
                Span::styled(action, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_amount_input(&self, frame: &mut Frame, counter: Counter) {
        let height = if self.input_error.is_some() { 7 } else { 5 };
        let popup_area = Self::popup_area(frame.area(), height);

        frame.render_widget(Clear, popup_area);

        let prompt = match counter {
            Counter::Quran => "  Pages read today: ",
            Counter::Study => "  Minutes studied: ",
            Counter::Dhikr => "  Dhikr count: ",
        };

        let mut text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(prompt, theme::dim()),
                Span::styled(
                    self.input_buffer.as_str(),
                    theme::gold().add_modifier(Modifier::BOLD),
                ),
                Span::styled("█", theme::emerald()), // block cursor
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  Type a number, then [Enter]  ·  [Esc] cancel",
                theme::dim(),
            )),
        ];

        if let Some(err) = &self.input_error {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(format!("  ✗ {}", err), theme::red())));
        }

        let border_style = if self.input_error.is_some() {
            theme::red()
        } else {
            theme::emerald()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", counter.label()), theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(theme::surface());

        let paragraph = Paragraph::new(text).block(block);
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_dua_input(&self, frame: &mut Frame) {
        let popup_area = Self::popup_area(frame.area(), 5);
        frame.render_widget(Clear, popup_area);

        let text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  ", theme::dim()),
                Span::styled(self.input_buffer.as_str(), theme::bold()),
                Span::styled("█", theme::emerald()),
            ]),
        ];

        let block = Block::default()
            .title(Span::styled(" Dua studied ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::emerald())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(text).block(block), popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig) -> Result<()> {
    let tick_rate_ms = config.display.tick_rate_ms;
    let mut app = App::new(config);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(tick_rate_ms);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| app.draw(frame)) {
            break Err(e.into());
        }

        match events.next() {
            Ok(Event::Key(key)) => {
                app.handle_key(key);
                if app.should_quit {
                    break Ok(());
                }
            }
            Ok(Event::Resize) => {}
            Ok(Event::Tick) => app.refresh_dates(),
            Err(e) => break Err(e.into()),
        }
    };

    ratatui::restore();
    log::info!("session ended at {}% progress", app.tracker.daily_progress_percent());
    result
}
