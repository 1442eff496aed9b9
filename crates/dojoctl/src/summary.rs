//! Post-session summary printed after the TUI closes

use dojo_common::SessionStats;
use owo_colors::OwoColorize;
use std::time::Duration;

fn format_secs(d: Option<Duration>) -> String {
    match d {
        Some(d) => format!("{:.1}s", d.as_secs_f64()),
        None => "-".to_string(),
    }
}

/// Build the colored summary block
pub fn render_summary(stats: &SessionStats) -> String {
    let accuracy = format!("{:.0}%", stats.accuracy_percent());
    let accuracy = if stats.accuracy_percent() >= 90.0 {
        accuracy.green().bold().to_string()
    } else if stats.accuracy_percent() >= 60.0 {
        accuracy.yellow().bold().to_string()
    } else {
        accuracy.red().bold().to_string()
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n", "MENTAL DOJO - SESSION".bold()));
    out.push_str(&format!(
        "  Answered:     {} ({} correct, {} wrong)\n",
        stats.answered,
        stats.correct.green(),
        stats.wrong.red()
    ));
    out.push_str(&format!("  Accuracy:     {}\n", accuracy));
    out.push_str(&format!("  Best streak:  {}\n", stats.best_streak.bright_magenta()));
    out.push_str(&format!(
        "  Avg correct:  {}\n",
        format_secs(stats.mean_correct_time).dimmed()
    ));
    out.push_str(&format!(
        "  Fastest:      {}\n",
        format_secs(stats.fastest_correct_time).dimmed()
    ));
    out
}

/// Print the summary unless nothing was answered
pub fn print_summary(stats: &SessionStats) {
    if stats.is_empty() {
        return;
    }
    println!("{}", render_summary(stats));
}
