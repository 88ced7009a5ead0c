//! Human-readable "time ago" phrases and whole-day arithmetic.

use chrono::TimeDelta;

const SECONDS_PER_DAY: i64 = 86_400;

/// Split a duration into floored whole days and the remaining seconds of the
/// day, so `-1s` is `(-1, 86399)` rather than `(0, -1)`.
pub fn split_days(elapsed: TimeDelta) -> (i64, i64) {
    let secs = elapsed.num_milliseconds().div_euclid(1000);
    (
        secs.div_euclid(SECONDS_PER_DAY),
        secs.rem_euclid(SECONDS_PER_DAY),
    )
}

/// Floored number of whole days in `elapsed`.
pub fn whole_days(elapsed: TimeDelta) -> i64 {
    split_days(elapsed).0
}

/// Describe how long ago something happened, e.g. `"3 hours ago"`.
///
/// Future timestamps (negative `elapsed`) give an empty string. Counts use
/// floor division and are never singularised, so ten days is `"1 weeks ago"`.
pub fn pretty_elapsed(elapsed: TimeDelta) -> String {
    let (days, seconds) = split_days(elapsed);

    if days < 0 {
        return String::new();
    }

    if days == 0 {
        return match seconds {
            s if s < 10 => "just now".to_string(),
            s if s < 60 => format!("{s} seconds ago"),
            s if s < 120 => "a minute ago".to_string(),
            s if s < 3600 => format!("{} minutes ago", s / 60),
            s if s < 7200 => "an hour ago".to_string(),
            s => format!("{} hours ago", s / 3600),
        };
    }

    match days {
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 31 => format!("{} weeks ago", d / 7),
        d if d < 365 => format!("{} months ago", d / 30),
        d => format!("{} years ago", d / 365),
    }
}
