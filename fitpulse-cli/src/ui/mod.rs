// Plain-text rendering helpers shared by the commands

use colored::{ColoredString, Colorize};
use fitpulse::services::BmiCategory;

const BAR_WIDTH: usize = 30;

/// Section title followed by an underline.
pub fn header(title: &str) {
    println!("{}", title.bold());
    println!("────────────────────────────────");
}

/// Left-aligned label and value on one line.
pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {:<22} {}", format!("{}:", label), value);
}

/// Score coloured by band: red below 40, yellow below 70, green otherwise.
pub fn score(score: u8) -> ColoredString {
    let text = format!("{}/100", score);
    match score {
        0..=39 => text.red(),
        40..=69 => text.yellow(),
        _ => text.green(),
    }
}

pub fn bmi_category(category: BmiCategory) -> ColoredString {
    let text = category.to_string();
    match category {
        BmiCategory::Healthy => text.green(),
        BmiCategory::Overweight | BmiCategory::Underweight => text.yellow(),
        BmiCategory::Obese => text.red(),
    }
}

/// Horizontal bar scaled against `max`.
pub fn bar(value: u32, max: u32) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (value as usize * BAR_WIDTH).div_ceil(max as usize).min(BAR_WIDTH);
    "█".repeat(filled)
}
