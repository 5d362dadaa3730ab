use colored::*;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 14;

/// Centered section header, padded with dashes to the terminal width.
pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{}", line);
}

/// `key....: value` line with dot padding up to the key column width.
pub fn aligned(key: &str, value: ColoredString) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.chars().count()));
    println!(
        "{} {}{}{} {}",
        ">".bright_black(),
        key.cyan(),
        dots.bright_black(),
        ":".bright_black(),
        value
    );
}
