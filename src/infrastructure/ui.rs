use console::style;

use crate::progress::ProgressEvent;

/// Renders a progress event for terminal output. The core emits plain text;
/// all styling happens here.
pub fn format_event(event: &ProgressEvent) -> String {
    match event {
        ProgressEvent::Log { message } => {
            format!("{} {}", style("✓").green(), message)
        }
        ProgressEvent::Warning { message } => {
            format!("{} {}", style("!").yellow(), style(message).yellow())
        }
    }
}

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("✗").red(), style(message).red())
}

pub fn render_banner() {
    let line = style("━".repeat(40)).cyan();
    println!("{line}");
    println!("  {}", style("modforge").cyan().bold());
    println!("  {}", style("C++ module scaffold generator").cyan());
    println!("{line}");
}
