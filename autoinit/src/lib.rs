//! # AutoInit
//!
//! Member-wise initializer generation for struct and class declarations.
//!
//! Given an already-parsed record declaration, AutoInit synthesizes one
//! initializer that assigns every stored property from a parameter of the
//! same name, keeping default values, optionality and the declaration's
//! access level.
//!
//! ## Features
//!
//! - **Stored properties only** - computed properties and `let` constants with
//!   inline values are skipped
//! - **Defaults preserved** - explicit initial values become parameter
//!   defaults, optionals default to `nil`
//! - **Escaping closures** - function-typed parameters carry `@escaping`
//! - **Access level propagation** - `public struct` gets a `public init`
//!
//! ## Quick Start
//!
//! ```ignore
//! use autoinit::prelude::*;
//!
//! let record = RecordDeclaration::structure("User")
//!     .with_modifier(Modifier::new("public"))
//!     .with_variable(VariableDecl::var(
//!         PatternBinding::identifier("name").with_type(TypeSyntax::named("String")),
//!     ));
//! let attribute = AttributeSyntax::new("AutoInit", SourceLocation::new(1, 1));
//!
//! let members = AutoInitMacro::new().expand_to_source(&attribute, &record, &[])?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`syntax`] - Declaration model handed over by the host
//! - [`codegen`] - Classification, synthesis, printing and diagnostics

pub mod prelude;

/// Declaration model.
pub mod syntax {
    pub use autoinit_syntax::*;
}

/// Initializer synthesis.
pub mod codegen {
    pub use autoinit_codegen::*;
}

// Re-export commonly used items at the crate root
pub use autoinit_codegen::{AutoInitMacro, Diagnostic, ExpansionError, InitializerDecl, expand};
pub use autoinit_syntax::{AttributeSyntax, DeclGroup, RecordDeclaration};

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_prelude_expansion() {
        let record = RecordDeclaration::structure("Person")
            .with_variable(VariableDecl::var(
                PatternBinding::identifier("name").with_type(TypeSyntax::named("String")),
            ))
            .with_variable(VariableDecl::var(
                PatternBinding::identifier("age").with_type(TypeSyntax::named("Int")),
            ));
        let attribute = AttributeSyntax::new(AutoInitMacro::NAME, SourceLocation::new(1, 1));

        let members = expand(&attribute, &record, &[]).expect("Expansion failed");
        assert_eq!(members.len(), 1);
        assert_eq!(
            members[0].to_string(),
            "init(\n    name: String,\n    age: Int\n) {\n    self.name = name\n    self.age = age\n}"
        );
    }

    #[test]
    fn test_enum_rejected_with_diagnostic() {
        let record = RecordDeclaration::new(DeclKind::Enum, "Status");
        let attribute = AttributeSyntax::new(AutoInitMacro::NAME, SourceLocation::new(4, 1));

        let err = expand(&attribute, &record, &[]).expect_err("Expected rejection");
        let diagnostic: Diagnostic = err.diagnostic();
        assert_eq!(
            diagnostic.to_string(),
            "4:1: error: AutoInit can only be applied to structs and classes"
        );
    }

    #[test]
    fn test_access_level_reexport() {
        let record = RecordDeclaration::class("Cache").with_modifier(Modifier::new("open"));
        let attribute = AttributeSyntax::new(AutoInitMacro::NAME, SourceLocation::default());

        let members = expand(&attribute, &record, &[]).expect("Expansion failed");
        assert_eq!(members[0].access_level, Some(AccessLevel::Open));
    }
}
