//! # AutoInit Codegen
//!
//! Member-wise initializer synthesis for record declarations.
//!
//! This crate provides:
//! - Access level resolution from declaration modifiers
//! - Binding classification (stored vs. computed, constants, grouped types)
//! - Structured initializer synthesis
//! - Source rendering through a swappable printer
//! - The `@AutoInit` expansion entry point and its diagnostic

pub mod classify;
pub mod error;
pub mod expand;
pub mod printer;
pub mod synth;
pub mod visibility;

pub use classify::{
    BindingClassifier, Classification, EMPTY_OPTIONAL_LITERAL, ExclusionReason,
    SynthesizedParameter,
};
pub use error::{Diagnostic, ExpansionError, Severity};
pub use expand::{AutoInitMacro, expand};
pub use printer::{DeclPrinter, ESCAPING_MARKER, PrinterConfig, SwiftPrinter};
pub use synth::{Assignment, InitializerDecl, InitializerSynthesizer};
pub use visibility::{AccessLevel, resolve_access_level};
