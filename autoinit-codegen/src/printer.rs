//! Source rendering for synthesized declarations.
//!
//! The default layout places every parameter and every assignment on its
//! own line, indented one level:
//!
//! ```text
//! public init(
//!     name: String,
//!     email: String? = nil
//! ) {
//!     self.name = name
//!     self.email = email
//! }
//! ```
//!
//! An empty parameter list or body renders as a single blank line.

use crate::classify::SynthesizedParameter;
use crate::synth::{Assignment, InitializerDecl};

/// Marker placed before function-typed parameter types.
pub const ESCAPING_MARKER: &str = "@escaping";

/// Renders synthesized declarations to source text.
pub trait DeclPrinter {
    /// Renders an initializer declaration.
    fn print_initializer(&self, decl: &InitializerDecl) -> String;
}

/// Layout settings for [`SwiftPrinter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    indent: usize,
    base_indent: usize,
}

impl PrinterConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            indent: 4,
            base_indent: 0,
        }
    }

    /// Sets the indentation width of parameters and body statements.
    #[must_use]
    pub const fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    /// Sets the indentation applied to every non-blank output line, for
    /// hosts that splice the result into an indented member list.
    #[must_use]
    pub const fn base_indent(mut self, width: usize) -> Self {
        self.base_indent = width;
        self
    }

    /// Returns the indentation width.
    #[must_use]
    pub const fn indent_width(&self) -> usize {
        self.indent
    }

    /// Returns the base indentation width.
    #[must_use]
    pub const fn base_indent_width(&self) -> usize {
        self.base_indent
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Printer producing the target language's initializer syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftPrinter {
    config: PrinterConfig,
}

impl SwiftPrinter {
    /// Creates a printer with the given layout.
    #[must_use]
    pub const fn new(config: PrinterConfig) -> Self {
        Self { config }
    }

    /// Returns the layout settings.
    #[must_use]
    pub const fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Renders one parameter as `name: [@escaping ]Type[ = default]`.
    #[must_use]
    pub fn parameter(&self, parameter: &SynthesizedParameter) -> String {
        let mut output = format!("{}: ", parameter.name);
        if parameter.is_escaping {
            output.push_str(ESCAPING_MARKER);
            output.push(' ');
        }
        output.push_str(&parameter.type_text());
        if let Some(default) = &parameter.default_value {
            output.push_str(" = ");
            output.push_str(default);
        }
        output
    }

    /// Renders one body statement.
    #[must_use]
    pub fn assignment(&self, assignment: &Assignment) -> String {
        format!("self.{} = {}", assignment.member, assignment.value)
    }

    /// Appends `section` indented by one level, or a blank line if empty.
    fn push_section(&self, lines: &mut Vec<String>, section: &str) {
        if section.is_empty() {
            lines.push(String::new());
            return;
        }
        let pad = " ".repeat(self.config.indent);
        for line in section.lines() {
            if line.is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("{}{}", pad, line));
            }
        }
    }
}

impl DeclPrinter for SwiftPrinter {
    fn print_initializer(&self, decl: &InitializerDecl) -> String {
        let parameters = decl
            .parameters
            .iter()
            .map(|p| self.parameter(p))
            .collect::<Vec<_>>()
            .join(",\n");
        let assignments = decl
            .assignments
            .iter()
            .map(|a| self.assignment(a))
            .collect::<Vec<_>>()
            .join("\n");

        let prefix = decl
            .access_level
            .map(|level| format!("{} ", level))
            .unwrap_or_default();

        let mut lines = vec![format!("{}init(", prefix)];
        self.push_section(&mut lines, &parameters);
        lines.push(") {".to_string());
        self.push_section(&mut lines, &assignments);
        lines.push("}".to_string());

        let base = " ".repeat(self.config.base_indent);
        lines
            .iter()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", base, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
