use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

/// Confirmation line for a put, identical whether or not the row was new
pub fn stored(keyword: &str, message: &str) {
    println!(
        "{} Stored {} as {}",
        Icons::CHECK,
        format!("{:?}", message).style(theme().success.clone()),
        format!("{:?}", keyword).style(theme().header.clone())
    );
}

pub fn nothing_found(label: &str) {
    println!("{} {}", Icons::SEARCH, label.style(theme().dim.clone()));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        Icons::INFO.style(theme().info.clone()),
        label.style(theme().dim.clone()),
        value
    );
}

pub fn dim(text: &str) -> String {
    text.style(theme().dim.clone()).to_string()
}
