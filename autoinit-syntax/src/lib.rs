//! # AutoInit Syntax
//!
//! Declaration model for the AutoInit member-initializer generator.
//!
//! This crate provides:
//! - Record declarations and the [`DeclGroup`] read interface
//! - Property statements with their pattern bindings
//! - A structural type syntax tree with canonical rendering
//!
//! The host compiler owns parsing. It hands over an already-parsed
//! declaration, either by building these types directly or as JSON through
//! `serde`.

pub mod binding;
pub mod decl;
pub mod types;

pub use binding::{
    AccessorBlock, AccessorDecl, AccessorKind, BindingSpecifier, Pattern, PatternBinding,
    VariableDecl,
};
pub use decl::{
    AttributeSyntax, DeclGroup, DeclKind, MemberItem, Modifier, RecordDeclaration,
    SourceLocation,
};
pub use types::{ConstraintKeyword, FunctionEffects, MetatypeKind, TupleTypeElement, TypeSyntax};
