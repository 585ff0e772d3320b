//! Console output helpers
//!
//! Styled status lines, headings and a framed summary box. Everything is
//! written to stdout; `console` drops the colors when stdout is not a terminal.

use console::{Style, measure_text_width};

/// Print a bold heading surrounded by blank lines
pub fn title(text: &str) {
    println!();
    println!("  {}", Style::new().bold().cyan().apply_to(text));
    println!();
}

pub fn info(text: &str) {
    println!("  {} {}", Style::new().blue().apply_to("ℹ"), text);
}

pub fn success(text: &str) {
    println!("  {} {}", Style::new().green().apply_to("✓"), text);
}

pub fn warn(text: &str) {
    println!("  {} {}", Style::new().yellow().apply_to("⚠"), text);
}

/// Print a section label such as "Links:"
pub fn section(text: &str) {
    println!("{}", Style::new().cyan().apply_to(text));
}

/// Print a dimmed line
pub fn dim(text: &str) {
    println!("{}", Style::new().dim().apply_to(text));
}

/// Print a label/value pair aligned on a fixed column
pub fn field(label: &str, value: &str) {
    println!("  {} {}", Style::new().dim().apply_to(format!("{label:<12}")), value);
}

/// Render a framed box with a header; width follows the widest line
///
/// Widths are measured in terminal columns, so wide (CJK) characters and
/// ANSI styling do not break the frame.
pub fn framed(header: &str, lines: &[String]) -> String {
    let content_width = lines
        .iter()
        .map(|l| measure_text_width(l))
        .chain(std::iter::once(measure_text_width(header)))
        .max()
        .unwrap_or(0);
    let inner = content_width + 2;
    let border = Style::new().green();
    let bar = "─".repeat(inner);

    let mut out = String::new();
    out.push_str(&format!("{}\n", border.apply_to(format!("╭{bar}╮"))));
    out.push_str(&format!(
        "{} {}{} {}\n",
        border.apply_to("│"),
        Style::new().bold().green().apply_to(header),
        " ".repeat(content_width - measure_text_width(header)),
        border.apply_to("│")
    ));
    out.push_str(&format!("{}\n", border.apply_to(format!("├{bar}┤"))));
    for line in lines {
        let padding = content_width - measure_text_width(line);
        out.push_str(&format!(
            "{} {}{} {}\n",
            border.apply_to("│"),
            line,
            " ".repeat(padding),
            border.apply_to("│")
        ));
    }
    out.push_str(&format!("{}", border.apply_to(format!("╰{bar}╯"))));
    out
}

/// Print a framed box
pub fn boxed(header: &str, lines: &[String]) {
    println!();
    println!("{}", framed(header, lines));
    println!();
}
