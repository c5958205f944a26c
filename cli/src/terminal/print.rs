use std::cell::Cell;

use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    static KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

pub fn print(msg: &str) {
    println!("{msg}");
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title = format!("⟦ NUKR v{} ⟧", env!("CARGO_PKG_VERSION"));
    let pad = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(title.as_str()));
    print(&format!(
        "{}{}{}",
        "═".repeat(pad / 2).bright_black(),
        title.bright_green().bold(),
        "═".repeat(pad - pad / 2).bright_black()
    ));
    centerln(&format!("{}", "enumerate. provision. scan.".italic().bright_black()));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let tagged = format!("⟦ {} ⟧", msg.to_uppercase());
    let pad = TOTAL_WIDTH.saturating_sub(tagged.chars().count());
    print(&format!(
        "{}",
        format!(
            "{}{}{}",
            "─".repeat(pad / 2),
            tagged.bright_green(),
            "─".repeat(pad - pad / 2)
        )
        .bright_black()
    ));
}

/// Widest key of the upcoming [`aligned_line`] block.
pub fn set_key_width(keys: &[&str]) {
    KEY_WIDTH.set(keys.iter().map(|key| key.len()).max().unwrap_or(0));
}

/// `key....: value` status line, dots padding out to the block's width.
pub fn aligned_line(key: &str, value: impl AsRef<str>) {
    let dots = ".".repeat((KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}"));
}

const NO_RESULTS: &str = r#"
                       _  _    ___  _  _
                      | || |  / _ \| || |
                      | || |_| | | | || |_
                      |__   _| |_| |__   _|
         _   _  ___ _____|_|__\___/__ |_|  _ _   _ ____
        | \ | |/ _ \_   _| |  ___/ _ \| | | | \ | |  _ \
        |  \| | | | || |   | |_ | | | | | | |  \| | | | |
        | |\  | |_| || |   |  _|| |_| | |_| | |\  | |_| |
        |_| \_|\___/ |_|   |_|   \___/ \___/|_| \_|____/
"#;

/// Full-width "404 NOT FOUND" art for an empty enumeration result.
pub fn no_results() {
    print(&format!("{}", NO_RESULTS.red().bold()));
}

pub fn end_of_program() {
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)));
}
