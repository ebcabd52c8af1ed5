use chrono::NaiveDateTime;

use crate::config::Preferences;

/// Time display format derived from the preferences.
///
/// The pattern uses date-format letters (`HH`, `h`, `mm`, `ss`, `a`) and is
/// rendered in the POSIX locale with `AM`/`PM` day period symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeFormat {
    pattern: String,
    strftime: String,
}

impl TimeFormat {
    /// Builds the format from the three display flags.
    pub fn new(use_am_pm: bool, show_seconds: bool, show_separators: bool) -> Self {
        let separator = separator(show_separators);

        let hour = if use_am_pm { "h" } else { "HH" };
        let minute = format!("{separator}mm");
        let second = if show_seconds {
            format!("{separator}ss")
        } else {
            String::new()
        };
        let suffix = if use_am_pm { " a" } else { "" };

        let pattern = format!("{hour}{minute}{second}{suffix}");
        let strftime = to_strftime(&pattern);

        Self { pattern, strftime }
    }

    /// Builds the format from preferences.
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self::new(prefs.use_am_pm, prefs.show_seconds, prefs.show_time_separators)
    }

    /// The date-format pattern, e.g. `HH:mm:ss`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The equivalent strftime string, e.g. `%H:%M:%S`.
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    /// Formats a wall-clock time.
    pub fn format(&self, time: &NaiveDateTime) -> String {
        time.format(&self.strftime).to_string()
    }
}

/// Representative text measured to size the font.
///
/// Wrapped in `<` `>` to leave a margin at the screen edges. Without seconds
/// an `X` (or the AM/PM suffix) pads the string so the digits don't grow huge.
pub fn sizing_string(use_am_pm: bool, show_seconds: bool, show_separators: bool) -> String {
    let separator = separator(show_separators);
    let mut sizing = format!("<11{separator}59");

    if show_seconds {
        sizing.push_str(separator);
        sizing.push_str("59");
        if use_am_pm {
            sizing.push_str(" AM");
        }
    } else {
        sizing.push_str(if use_am_pm { " AM" } else { "X" });
    }

    sizing.push('>');
    sizing
}

fn separator(show_separators: bool) -> &'static str {
    if show_separators { ":" } else { " " }
}

fn to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&ch) {
            chars.next();
            run += 1;
        }

        let token = match (ch, run) {
            ('H', 2) => "%H",
            ('H', _) => "%-H",
            ('h', 2) => "%I",
            ('h', _) => "%-I",
            ('m', _) => "%M",
            ('s', _) => "%S",
            ('a', _) => "%p",
            ('%', _) => {
                out.push_str(&"%%".repeat(run));
                continue;
            }
            (other, _) => {
                out.extend(std::iter::repeat_n(other, run));
                continue;
            }
        };
        out.push_str(token);
    }

    out
}
