//! Member macro entry point.
//!
//! One call per annotated declaration. Each call builds everything it needs
//! from its inputs, so hosts may run expansions concurrently.

use crate::error::ExpansionError;
use crate::printer::{DeclPrinter, PrinterConfig, SwiftPrinter};
use crate::synth::{InitializerDecl, InitializerSynthesizer};
use autoinit_syntax::{AttributeSyntax, DeclGroup, DeclKind, TypeSyntax};

/// The `@AutoInit` member macro.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoInitMacro {
    synthesizer: InitializerSynthesizer,
    printer: SwiftPrinter,
}

impl AutoInitMacro {
    /// Attribute name the macro is registered under.
    pub const NAME: &'static str = "AutoInit";

    /// Creates the macro with default printer settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            synthesizer: InitializerSynthesizer::new(),
            printer: SwiftPrinter::new(PrinterConfig::new()),
        }
    }

    /// Sets the printer layout used by [`Self::expand_to_source`].
    #[must_use]
    pub const fn printer(mut self, config: PrinterConfig) -> Self {
        self.printer = SwiftPrinter::new(config);
        self
    }

    /// Expands the macro on `declaration`.
    ///
    /// # Arguments
    /// * `attribute` - The attribute node, used for diagnostic placement
    /// * `declaration` - The annotated declaration
    /// * `conformances` - Requested conformances, ignored
    ///
    /// # Returns
    /// The members to add: exactly one initializer.
    ///
    /// # Errors
    /// Returns `ExpansionError::UnsupportedDeclarationKind` if the
    /// declaration is not a struct or class.
    pub fn expand<D: DeclGroup>(
        &self,
        attribute: &AttributeSyntax,
        declaration: &D,
        conformances: &[TypeSyntax],
    ) -> Result<Vec<InitializerDecl>, ExpansionError> {
        let _ = conformances;
        tracing::debug!(
            "Expanding @{} on {} {}",
            attribute.name,
            declaration.kind(),
            declaration.name()
        );

        ensure_record(declaration.kind(), attribute)?;

        let init = self.synthesizer.synthesize(declaration);
        tracing::debug!(
            "Synthesized initializer for {} with {} parameter(s)",
            declaration.name(),
            init.parameters.len()
        );
        Ok(vec![init])
    }

    /// Expands the macro and renders each produced member.
    ///
    /// # Errors
    /// Returns `ExpansionError::UnsupportedDeclarationKind` if the
    /// declaration is not a struct or class.
    pub fn expand_to_source<D: DeclGroup>(
        &self,
        attribute: &AttributeSyntax,
        declaration: &D,
        conformances: &[TypeSyntax],
    ) -> Result<Vec<String>, ExpansionError> {
        let members = self.expand(attribute, declaration, conformances)?;
        let rendered = members
            .iter()
            .map(|member| self.printer.print_initializer(member))
            .collect::<Vec<_>>();
        for source in &rendered {
            tracing::trace!("Generated member:\n{}", source);
        }
        Ok(rendered)
    }
}

/// Expands `@AutoInit` with default settings.
///
/// # Errors
/// Returns `ExpansionError::UnsupportedDeclarationKind` if the declaration
/// is not a struct or class.
pub fn expand<D: DeclGroup>(
    attribute: &AttributeSyntax,
    declaration: &D,
    conformances: &[TypeSyntax],
) -> Result<Vec<InitializerDecl>, ExpansionError> {
    AutoInitMacro::new().expand(attribute, declaration, conformances)
}

/// Checks that the declaration kind can receive a member-wise initializer.
fn ensure_record(kind: DeclKind, attribute: &AttributeSyntax) -> Result<(), ExpansionError> {
    match kind {
        DeclKind::Struct | DeclKind::Class => Ok(()),
        DeclKind::Actor | DeclKind::Enum | DeclKind::Protocol | DeclKind::Extension => {
            tracing::warn!(
                "@{} rejected on {} at {}",
                attribute.name,
                kind,
                attribute.location
            );
            Err(ExpansionError::unsupported(kind, attribute.location))
        }
    }
}
