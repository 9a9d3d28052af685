//! User-facing progress output
//!
//! All provisioning output goes through the [`Reporter`] trait so the flow can
//! run quietly under test while the CLI prints styled banners.

use console::Style;

/// Receives progress messages from the provisioning flow
pub trait Reporter {
    /// Section banner, e.g. `=== Setting up HTTPS Certificates ===`
    fn section(&mut self, title: &str);

    /// Start of a step
    fn step(&mut self, message: &str);

    /// Plain informational line
    fn info(&mut self, message: &str);

    /// Something the operator should look at; the run still succeeds
    fn warn(&mut self, message: &str);

    /// Final success headline
    fn success(&mut self, message: &str);
}

/// Section banner text without styling
pub fn banner(title: &str) -> String {
    format!("=== {title} ===")
}

/// Success headline text without styling
pub fn headline(message: &str) -> String {
    format!("✅ {message}")
}

/// Styled output on stdout
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn section(&mut self, title: &str) {
        println!("\n{}", Style::new().bold().apply_to(banner(title)));
    }

    fn step(&mut self, message: &str) {
        println!("\n{}", Style::new().cyan().apply_to(message));
    }

    fn info(&mut self, message: &str) {
        println!("{message}");
    }

    fn warn(&mut self, message: &str) {
        println!(
            "\n{} {}",
            Style::new().yellow().bold().apply_to("Warning:"),
            message
        );
    }

    fn success(&mut self, message: &str) {
        println!("\n{}", Style::new().green().bold().apply_to(headline(message)));
    }
}

/// No-op reporter
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn section(&mut self, _title: &str) {}

    fn step(&mut self, _message: &str) {}

    fn info(&mut self, _message: &str) {}

    fn warn(&mut self, _message: &str) {}

    fn success(&mut self, _message: &str) {}
}
