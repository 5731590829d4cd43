use std::io::IsTerminal;

use chrono::NaiveDateTime;
use owo_colors::OwoColorize;

use crate::deadline::Deadline;
use crate::scoring::{ScoreResult, Standings};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Percentages are entered with one decimal place; print them the same way
pub fn format_percent(value: f64) -> String {
    format!("{:.1}", value)
}

/// Format the deadline banner: cutoff timestamp plus open/closed state.
/// Open includes the remaining time, e.g. "open, 3days 2h left".
pub fn format_deadline_line(deadline: &Deadline, now: NaiveDateTime, use_colors: bool) -> String {
    let state = if deadline.is_locked(now) {
        if use_colors {
            "closed".red().to_string()
        } else {
            "closed".to_string()
        }
    } else {
        let open = if use_colors {
            "open".green().to_string()
        } else {
            "open".to_string()
        };
        format!("{}, {}", open, deadline.format_remaining(now))
    };

    format!("Deadline: {} ({})", deadline, state)
}

/// Format the standings as "position. name - score points" lines.
///
/// Participants skipped for incomplete guesses are listed after the ranking.
pub fn format_standings(standings: &Standings, use_colors: bool) -> String {
    if standings.ranked.is_empty() && standings.skipped.is_empty() {
        return "No tips submitted yet.".to_string();
    }

    let mut lines = Vec::with_capacity(standings.ranked.len() + standings.skipped.len());

    for (idx, tip) in standings.ranked.iter().enumerate() {
        let line = if use_colors {
            format!(
                "{:>2}. {} - {} points",
                idx + 1,
                tip.name.bold(),
                tip.result.score.yellow()
            )
        } else {
            format!("{:>2}. {} - {} points", idx + 1, tip.name, tip.result.score)
        };
        lines.push(line);
    }

    for skipped in &standings.skipped {
        lines.push(format!(
            "    {} skipped: {}",
            skipped.name, skipped.error
        ));
    }

    lines.join("\n")
}

/// Per-party breakdown for verbose output, one line per party:
/// "  SPD: guessed 30.0, actual 30.0, diff 0.0 -> 3"
pub fn format_tip_breakdown(result: &ScoreResult) -> String {
    result
        .breakdown
        .iter()
        .map(|p| {
            format!(
                "  {}: guessed {}, actual {}, diff {} -> {}",
                p.party,
                format_percent(p.guessed),
                format_percent(p.actual),
                format_percent(p.diff),
                p.points
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
