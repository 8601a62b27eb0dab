//! Terminal output helpers
//!
//! Everything the scaffolder prints while it works goes through here so the
//! structures only decide *what* to say.

use colored::{ColoredString, Colorize};

/// Catppuccin Mocha accents used across the CLI
pub mod palette {
    pub type Rgb = (u8, u8, u8);

    pub const TEXT: Rgb = (0xcd, 0xd6, 0xf4);
    pub const MAUVE: Rgb = (0xcb, 0xa6, 0xf7);
    pub const YELLOW: Rgb = (0xf9, 0xe2, 0xaf);
    pub const GREEN: Rgb = (0xa6, 0xe3, 0xa1);
    pub const TEAL: Rgb = (0x94, 0xe2, 0xd5);
    pub const BLUE: Rgb = (0x89, 0xb4, 0xfa);
}

use palette::Rgb;

fn paint(text: &str, (r, g, b): Rgb) -> ColoredString {
    text.truecolor(r, g, b)
}

/// Welcome banner shown before a project is created
pub fn welcome() {
    println!();
    println!(
        "{}",
        paint(&format!("✨ Welcome to {}! ✨", crate::PRODUCT_NAME), palette::GREEN).bold()
    );
    println!();
    let body = [
        "This tool will help you scaffold a new WordPress project with a modern setup.",
        "",
        "Features:",
        "• Interactive project setup",
        "• Multiple folder structure options",
        "• Automated WordPress installation",
        "• Environment configuration",
    ];
    boxed(&body, palette::GREEN);
    println!();
}

/// Framed section title
pub fn section_header(title: &str) {
    let width = title.chars().count() + 4;
    println!();
    println!("{}", paint(&format!("┌{}┐", "─".repeat(width)), palette::BLUE));
    println!(
        "{}{}{}",
        paint("│  ", palette::BLUE),
        paint(title, palette::BLUE).bold(),
        paint("  │", palette::BLUE)
    );
    println!("{}", paint(&format!("└{}┘", "─".repeat(width)), palette::BLUE));
    println!();
}

pub fn info(message: &str) {
    println!("{} {}", paint("ℹ", palette::BLUE), paint(message, palette::TEXT));
}

pub fn success(message: &str) {
    println!("{} {}", paint("✅", palette::GREEN), paint(message, palette::GREEN).bold());
}

pub fn warning(message: &str) {
    println!("{} {}", paint("⚠️ ", palette::YELLOW), paint(message, palette::YELLOW));
}

pub fn processing(message: &str) {
    println!("{} {}", paint("⏳", palette::TEAL), paint(message, palette::TEAL));
}

/// One `✓ Created: <path>` line
pub fn created(display_path: &str) {
    println!("{}", paint(&format!("  ✓ Created: {}", display_path), palette::GREEN));
}

/// Shown before an external command inherits the terminal
pub fn running(command: &str) {
    println!();
    println!("{} {}", "Running:".dimmed(), command.yellow());
    println!();
}

/// Heading followed by `label: value` rows, used for configuration summaries
pub fn summary(heading: &str, color: Rgb, rows: &[(&str, &str)]) {
    println!();
    println!("{}", paint(heading, color).bold());
    for (label, value) in rows {
        println!(
            "{}{}",
            paint(&format!("    {}: ", label), palette::TEXT),
            paint(value, palette::GREEN)
        );
    }
}

/// Titled panel with a rounded border
pub fn panel(title: &str, description: &str, color: Rgb) {
    let mut lines = vec![title, ""];
    lines.extend(description.lines());
    println!();
    boxed(&lines, color);
    println!();
}

/// Completion notice with the next steps for `project_name`
pub fn completion(project_name: &str) {
    println!();
    success("Project initialized successfully!");
    let step_one = format!("1. cd {}", project_name);
    let lines = [
        "📝 Next steps:",
        "",
        step_one.as_str(),
        "2. Follow the instructions in the README.md file",
    ];
    boxed(&lines, palette::YELLOW);
    println!();
}

fn boxed(lines: &[&str], color: Rgb) {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 4;
    println!("{}", paint(&format!("╭{}╮", "─".repeat(width)), color));
    for line in lines {
        let pad = width - 2 - line.chars().count();
        println!(
            "{}{}{}{}",
            paint("│ ", color),
            paint(line, palette::TEXT),
            " ".repeat(pad),
            paint(" │", color)
        );
    }
    println!("{}", paint(&format!("╰{}╯", "─".repeat(width)), color));
}
