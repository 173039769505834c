use unicode_width::UnicodeWidthStr;

/// Create a simple progress bar from a ratio in [0, 1]
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Pad `s` with spaces to `width` terminal columns, truncating with `…` when
/// it does not fit.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    if current <= width {
        return format!("{}{}", s, " ".repeat(width - current));
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 4), "░░░░");
        assert_eq!(progress_bar(0.5, 4), "██░░");
        assert_eq!(progress_bar(3.0, 4), "████");
    }

    #[test]
    fn pads_short_labels() {
        assert_eq!(pad_to_width("Fiqh", 6), "Fiqh  ");
    }

    #[test]
    fn truncates_long_labels() {
        let out = pad_to_width("Akhlaq (Character Development)", 10);
        assert_eq!(out, "Akhlaq (C…");
        assert_eq!(UnicodeWidthStr::width(out.as_str()), 10);
    }

    #[test]
    fn combining_marks_take_no_columns() {
        // four letters, two dammas
        assert_eq!(pad_to_width("سُجُود", 8).chars().count(), 6 + 4);
    }
}
