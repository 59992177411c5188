//! Welcome banner for chat sessions.

use console::style;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(url: &str, section: Option<&str>) {
    println!();
    println!("  {} {}", style("🎓").bold(), style("Study Coach").cyan().bold());
    println!(
        "  {}",
        style("Coaching for the Digital Technologies project, stages 1-8").dim()
    );
    println!();
    println!("  {}  {}", style("Gateway:").bold(), style(url).dim());
    println!(
        "  {}  {}",
        style("Section:").bold(),
        style(section.unwrap_or("(none)")).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
