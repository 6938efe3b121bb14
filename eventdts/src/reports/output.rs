//! Output trait for rendering reports.

use eventdts_codegen::Severity;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a list item.
    fn list_item(&mut self, text: &str);

    /// Render a diagnostic message.
    fn diagnostic(&mut self, severity: Severity, msg: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn list_item(&mut self, text: &str) {
        println!("\t{}", text);
    }

    fn diagnostic(&mut self, severity: Severity, msg: &str) {
        eprintln!("{}: {}", severity, msg);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }
}
