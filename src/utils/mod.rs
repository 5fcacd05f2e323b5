use colored::{ColoredString, Colorize};

pub fn term_width() -> usize {
    term_size::dimensions().map_or(80, |(w, _)| w)
}

/// Horizontal rule sized to the terminal, capped so piped output stays readable
pub fn rule() -> String {
    "-".repeat(term_width().clamp(20, 60))
}

pub fn colorize_tier(tier: &str) -> ColoredString {
    match tier {
        "IRON" | "BRONZE" => tier.dimmed(),
        "SILVER" => tier.white(),
        "GOLD" => tier.yellow(),
        "PLATINUM" => tier.cyan(),
        "EMERALD" => tier.green(),
        "DIAMOND" => tier.bright_blue(),
        "MASTER" => tier.magenta(),
        "GRANDMASTER" => tier.red(),
        "CHALLENGER" => tier.bright_yellow().bold(),
        _ => tier.normal(),
    }
}

/// Win percentage, `0.0` when no games were played
pub fn win_rate(wins: u32, losses: u32) -> f64 {
    let games = wins + losses;
    if games == 0 {
        return 0.0;
    }
    f64::from(wins) * 100.0 / f64::from(games)
}

/// Formats seconds as `m:ss`; negative lengths (game still loading) show as `0:00`
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
