use anyhow::{anyhow, bail, Context, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::settings::StepsConfig;
use crate::models::{DailyTaskState, PrayerType, StudyTopic};
use crate::tracker::{Counter, DailyTracker};
use crate::utils::format::progress_bar;

const HELP: &str = "\
  pray <name>          toggle a prayer (fajr, dhuhr, asr, maghrib, isha)
  quran <n|+n|-n>      set or adjust pages read
  study <n|+n|-n>      set or adjust minutes studied
  dhikr <n|+n|-n>      set or adjust the dhikr count (`dhikr +` adds one step)
  dua                  toggle today's dua
  dua-text <text>      record the dua studied
  topic [<topic>]      select a study topic by key or label, empty clears
  note <text>          replace notes
  note+ <text>         append a line to notes
  status | json        show today's state
  topics | reset | help | quit";

/// Absolute value or signed adjustment for a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    Set(i64),
    Delta(i64),
}

impl FromStr for Amount {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse = |digits: &str| -> Result<i64> {
            digits
                .parse::<i64>()
                .with_context(|| format!("'{}' is not a whole number", s))
        };
        if let Some(rest) = s.strip_prefix('+') {
            Ok(Amount::Delta(parse(rest)?))
        } else if s.starts_with('-') {
            Ok(Amount::Delta(parse(s)?))
        } else {
            Ok(Amount::Set(parse(s)?))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Pray(String),
    Count(Counter, Amount),
    Dua,
    DuaText(String),
    Topic(String),
    Note(String),
    AppendNote(String),
    Status,
    Json,
    Topics,
    Reset,
    Help,
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str, steps: &StepsConfig) -> Result<Option<SessionCommand>> {
    let line = line.trim_end_matches(['\n', '\r']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

    let counter_amount = |counter: Counter, default_step: u32| -> Result<SessionCommand> {
        let amount = match rest.trim() {
            "" => bail!("'{}' needs a number, e.g. `{} 3` or `{} +1`", word, word, word),
            "+" => Amount::Delta(default_step as i64),
            "-" => Amount::Delta(-(default_step as i64)),
            value => value.parse()?,
        };
        Ok(SessionCommand::Count(counter, amount))
    };

    let command = match word.to_lowercase().as_str() {
        "pray" | "prayer" => {
            if rest.trim().is_empty() {
                bail!("'pray' needs a prayer name");
            }
            SessionCommand::Pray(rest.trim().to_string())
        }
        "quran" => counter_amount(Counter::Quran, steps.quran_pages)?,
        "study" => counter_amount(Counter::Study, steps.study_minutes)?,
        "dhikr" => counter_amount(Counter::Dhikr, steps.dhikr)?,
        "dua" => SessionCommand::Dua,
        "dua-text" => SessionCommand::DuaText(rest.to_string()),
        "topic" => SessionCommand::Topic(rest.trim().to_string()),
        "note" => SessionCommand::Note(rest.to_string()),
        "note+" => SessionCommand::AppendNote(rest.to_string()),
        "status" => SessionCommand::Status,
        "json" => SessionCommand::Json,
        "topics" => SessionCommand::Topics,
        "reset" => SessionCommand::Reset,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(anyhow!("Unknown command '{}'. Type `help` for a list", other)),
    };
    Ok(Some(command))
}

pub struct Session {
    tracker: DailyTracker,
    steps: StepsConfig,
    quiet: bool,
}

impl Session {
    pub fn new(tracker: DailyTracker, steps: StepsConfig, quiet: bool) -> Self {
        Self {
            tracker,
            steps,
            quiet,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &DailyTaskState {
        self.tracker.state()
    }

    /// Read commands until EOF or `quit`, then print the final summary.
    /// Bad lines are reported and skipped.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Reading session input")?;
            let command = match parse_line(&line, &self.steps) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(out, "  ✗ {}", e)?;
                    continue;
                }
            };
            if command == SessionCommand::Quit {
                break;
            }
            if let Err(e) = self.execute(command, out) {
                writeln!(out, "  ✗ {}", e)?;
            }
        }
        if !self.quiet {
            writeln!(out)?;
            write_status(self.tracker.state(), out)?;
        }
        Ok(())
    }

    pub fn execute(&mut self, command: SessionCommand, out: &mut impl Write) -> Result<()> {
        match command {
            SessionCommand::Pray(name) => {
                self.tracker.toggle_prayer(&name)?;
                let prayer: PrayerType = name.parse()?;
                if self.tracker.state().prayers.is_done(prayer) {
                    self.say(out, format!("✓ {} marked as done", prayer))?;
                } else {
                    self.say(out, format!("○ {} unmarked", prayer))?;
                }
            }
            SessionCommand::Count(counter, amount) => {
                match amount {
                    Amount::Set(n) => self.tracker.set_counter(counter, n),
                    Amount::Delta(d) => self.tracker.adjust_counter(counter, d),
                }
                let line = goal_line(counter, self.tracker.state());
                self.say(out, line)?;
            }
            SessionCommand::Dua => {
                self.tracker.toggle_dua();
                if self.tracker.state().dua.completed {
                    self.say(out, "✓ Dua done".to_string())?;
                } else {
                    self.say(out, "○ Dua unmarked".to_string())?;
                }
            }
            SessionCommand::DuaText(text) => {
                self.tracker.set_dua_text(text);
                self.say(out, "✓ Dua text saved".to_string())?;
            }
            SessionCommand::Topic(topic) => {
                self.tracker.select_topic(&topic)?;
                match self.tracker.state().selected_topic {
                    Some(t) => self.say(out, format!("✓ Today's focus: {}", t))?,
                    None => self.say(out, "○ Topic cleared".to_string())?,
                }
            }
            SessionCommand::Note(text) => {
                self.tracker.set_notes(text);
                self.say(out, "✓ Notes saved".to_string())?;
            }
            SessionCommand::AppendNote(text) => {
                let notes = &self.tracker.state().notes;
                let combined = if notes.is_empty() {
                    text
                } else {
                    format!("{}\n{}", notes, text)
                };
                self.tracker.set_notes(combined);
                self.say(out, "✓ Notes saved".to_string())?;
            }
            SessionCommand::Status => write_status(self.tracker.state(), out)?,
            SessionCommand::Json => {
                let json = serde_json::to_string_pretty(&self.tracker.state().snapshot())
                    .context("Serializing state")?;
                writeln!(out, "{}", json)?;
            }
            SessionCommand::Topics => write_topics(out)?,
            SessionCommand::Reset => {
                self.tracker.reset();
                self.say(out, "✓ Today cleared".to_string())?;
            }
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::Quit => {}
        }
        Ok(())
    }

    fn say(&self, out: &mut impl Write, message: String) -> Result<()> {
        if !self.quiet {
            writeln!(out, "  {}", message)?;
        }
        Ok(())
    }
}

fn goal_line(counter: Counter, state: &DailyTaskState) -> String {
    let goal = counter.goal(state);
    let unit = match counter.unit() {
        "" => String::new(),
        unit => format!(" {}", unit),
    };
    let mark = if goal.completed() { "  ✓" } else { "" };
    format!(
        "{:<9} {}/{}{} ({}%){}",
        counter.label(),
        goal.value(),
        goal.target(),
        unit,
        goal.percent(),
        mark
    )
}

pub fn write_topics(out: &mut impl Write) -> Result<()> {
    for topic in StudyTopic::ALL {
        writeln!(out, "  {:<9} {}", topic.key(), topic.label())?;
    }
    Ok(())
}

pub fn write_status(state: &DailyTaskState, out: &mut impl Write) -> Result<()> {
    let percent = state.progress_percent();
    writeln!(
        out,
        "  Daily progress  {}  {}%",
        progress_bar(percent as f64 / 100.0, 18),
        percent
    )?;

    let prayers: Vec<String> = state
        .prayers
        .iter()
        .map(|(prayer, done)| format!("{} {}", if done { "●" } else { "○" }, prayer))
        .collect();
    writeln!(out, "  {:<9} {}", "Prayers", prayers.join("  "))?;
    for counter in [Counter::Quran, Counter::Study, Counter::Dhikr] {
        writeln!(out, "  {}", goal_line(counter, state))?;
    }

    let dua_mark = if state.dua.completed { "●" } else { "○" };
    if state.dua.studied_text.is_empty() {
        writeln!(out, "  {:<9} {}", "Dua", dua_mark)?;
    } else {
        writeln!(out, "  {:<9} {}  {}", "Dua", dua_mark, state.dua.studied_text)?;
    }

    let topic = state.selected_topic.map(|t| t.label()).unwrap_or("-");
    writeln!(out, "  {:<9} {}", "Topic", topic)?;

    if !state.notes.is_empty() {
        writeln!(out, "  Notes")?;
        for line in state.notes.lines() {
            writeln!(out, "    {}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn steps() -> StepsConfig {
        StepsConfig::default()
    }

    fn run(script: &str, quiet: bool) -> (DailyTaskState, String) {
        let mut session = Session::new(DailyTracker::default(), steps(), quiet);
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        (session.state().clone(), String::from_utf8(out).unwrap())
    }

    #[test]
    fn amounts_distinguish_set_and_delta() {
        assert_eq!("7".parse::<Amount>().unwrap(), Amount::Set(7));
        assert_eq!("+10".parse::<Amount>().unwrap(), Amount::Delta(10));
        assert_eq!("-1".parse::<Amount>().unwrap(), Amount::Delta(-1));
        assert!("ten".parse::<Amount>().is_err());
    }

    #[test]
    fn bare_sign_uses_configured_step() {
        let cmd = parse_line("study +", &steps()).unwrap();
        assert_eq!(cmd, Some(SessionCommand::Count(Counter::Study, Amount::Delta(5))));
        let cmd = parse_line("dhikr -", &steps()).unwrap();
        assert_eq!(cmd, Some(SessionCommand::Count(Counter::Dhikr, Amount::Delta(-1))));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert_eq!(parse_line("   ", &steps()).unwrap(), None);
        assert_eq!(parse_line("# morning", &steps()).unwrap(), None);
    }

    #[test]
    fn counter_without_value_is_an_error() {
        assert!(parse_line("quran", &steps()).is_err());
        assert!(parse_line("pray", &steps()).is_err());
        assert!(parse_line("sleep 8", &steps()).is_err());
    }

    #[test]
    fn oversized_increment_saturates_the_counter() {
        let (state, out) = run("dhikr 5\ndhikr +9223372036854775807\n", true);
        assert_eq!(state.dhikr.value(), u32::MAX);
        assert!(!out.contains('✗'));
    }

    #[test]
    fn full_script_reaches_one_hundred() {
        let script = "\
pray fajr
pray Dhuhr
pray asr
pray maghrib
pray isha
quran 2
study +30
dhikr +90
dhikr +10
dua
";
        let (state, out) = run(script, false);
        assert_eq!(state.progress_percent(), 100);
        assert!(out.contains("100%"));
    }

    #[test]
    fn bad_lines_are_reported_and_state_kept() {
        let (state, out) = run("pray fajr\npray witr\ntopic Cooking\ntopic fiqh\n", true);
        assert!(state.prayers.is_done(PrayerType::Fajr));
        assert_eq!(state.prayers.completed_count(), 1);
        assert_eq!(state.selected_topic, Some(StudyTopic::Fiqh));
        assert!(out.contains("Unknown prayer 'witr'"));
        assert!(out.contains("Unknown study topic 'Cooking'"));
    }

    #[test]
    fn negative_adjustments_clamp_at_zero() {
        let (state, _) = run("quran 1\nquran -5\ndhikr -1\n", true);
        assert_eq!(state.quran_reading.value(), 0);
        assert_eq!(state.dhikr.value(), 0);
    }

    #[test]
    fn notes_keep_text_and_append_lines() {
        let (state, _) = run("note  Patience  \nnote+ second line\n", true);
        assert_eq!(state.notes, " Patience  \nsecond line");
    }

    #[test]
    fn quit_stops_reading() {
        let (state, _) = run("pray fajr\nquit\npray isha\n", true);
        assert!(!state.prayers.is_done(PrayerType::Isha));
    }

    #[test]
    fn json_reports_derived_values() {
        let (_, out) = run("study 45\njson\n", true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["islamic_study"]["completed"], true);
        assert_eq!(value["islamic_study"]["percent"], 150);
    }

    #[test]
    fn quiet_mode_prints_nothing_on_success() {
        let (_, out) = run("pray fajr\ndhikr 3\n", true);
        assert!(out.is_empty());
    }
}
