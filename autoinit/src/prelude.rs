//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use autoinit::prelude::*;
//! ```

// Declaration model
pub use autoinit_syntax::{
    AttributeSyntax, BindingSpecifier, DeclGroup, DeclKind, MemberItem, Modifier, Pattern,
    PatternBinding, RecordDeclaration, SourceLocation, TypeSyntax, VariableDecl,
};

// Expansion
pub use autoinit_codegen::{
    AccessLevel, AutoInitMacro, DeclPrinter, Diagnostic, ExpansionError, InitializerDecl,
    PrinterConfig, SwiftPrinter, SynthesizedParameter, expand,
};
