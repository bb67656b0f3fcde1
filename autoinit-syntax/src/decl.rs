//! Record declarations.
//!
//! This module contains the host-facing view of an annotated declaration:
//! its kind, modifiers and direct members.

use crate::binding::VariableDecl;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declaration kinds a member macro can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    /// `struct`
    Struct,
    /// `class`
    Class,
    /// `actor`
    Actor,
    /// `enum`
    Enum,
    /// `protocol`
    Protocol,
    /// `extension`
    Extension,
}

impl DeclKind {
    /// Returns the introducing keyword.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Class => "class",
            Self::Actor => "actor",
            Self::Enum => "enum",
            Self::Protocol => "protocol",
            Self::Extension => "extension",
        }
    }

    /// Parses an introducing keyword.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "struct" => Some(Self::Struct),
            "class" => Some(Self::Class),
            "actor" => Some(Self::Actor),
            "enum" => Some(Self::Enum),
            "protocol" => Some(Self::Protocol),
            "extension" => Some(Self::Extension),
            _ => None,
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// 1-based position in the host's source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Line number.
    pub line: u32,
    /// Column number.
    pub column: u32,
}

impl SourceLocation {
    /// Creates a location.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The attribute that triggered the expansion (`@AutoInit`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeSyntax {
    /// Attribute name without the leading `@`.
    pub name: String,
    /// Position of the `@`.
    pub location: SourceLocation,
}

impl AttributeSyntax {
    /// Creates an attribute node.
    #[must_use]
    pub fn new(name: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// A declaration modifier (`public`, `final`, `private(set)`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifier {
    /// Modifier keyword.
    pub name: String,
    /// Parenthesised detail (`set` in `private(set)`).
    #[serde(default)]
    pub detail: Option<String>,
}

impl Modifier {
    /// Creates a modifier without detail.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: None,
        }
    }

    /// Creates a modifier with a detail.
    #[must_use]
    pub fn with_detail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: Some(detail.into()),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}({})", self.name, detail),
            None => f.write_str(&self.name),
        }
    }
}

/// A direct member of a declaration body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum MemberItem {
    /// Property statement.
    Variable(VariableDecl),
    /// Method.
    Function {
        /// Method name.
        name: String,
    },
    /// Hand-written initializer.
    Initializer,
    /// Nested type declaration.
    Nested(Box<RecordDeclaration>),
    /// Any other member (cases, typealiases, subscripts, ...).
    Other {
        /// Short description for diagnostics and logs.
        description: String,
    },
}

/// Read interface over an annotated declaration group.
///
/// [`RecordDeclaration`] implements it; a host with its own tree can
/// implement it directly instead of converting.
pub trait DeclGroup {
    /// Declaration kind.
    fn kind(&self) -> DeclKind;

    /// Declared name.
    fn name(&self) -> &str;

    /// Modifiers in source order.
    fn modifiers(&self) -> &[Modifier];

    /// Direct members in source order.
    fn members(&self) -> &[MemberItem];

    /// Property statements appearing directly in the body.
    fn properties(&self) -> impl Iterator<Item = &VariableDecl> {
        self.members().iter().filter_map(|member| match member {
            MemberItem::Variable(variable) => Some(variable),
            _ => None,
        })
    }
}

/// An annotated type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordDeclaration {
    /// Declaration kind.
    pub kind: DeclKind,
    /// Declared name.
    pub name: String,
    /// Modifiers in source order.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Direct members in source order.
    #[serde(default)]
    pub members: Vec<MemberItem>,
}

impl RecordDeclaration {
    /// Creates an empty declaration.
    #[must_use]
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            modifiers: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Creates an empty `struct`.
    #[must_use]
    pub fn structure(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Struct, name)
    }

    /// Creates an empty `class`.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Class, name)
    }

    /// Appends a modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Appends a property statement.
    #[must_use]
    pub fn with_variable(mut self, variable: VariableDecl) -> Self {
        self.add_member(MemberItem::Variable(variable));
        self
    }

    /// Appends a member.
    #[must_use]
    pub fn with_member(mut self, member: MemberItem) -> Self {
        self.add_member(member);
        self
    }

    /// Appends a member.
    pub fn add_member(&mut self, member: MemberItem) {
        self.members.push(member);
    }
}

impl DeclGroup for RecordDeclaration {
    fn kind(&self) -> DeclKind {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    fn members(&self) -> &[MemberItem] {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::PatternBinding;
    use crate::types::TypeSyntax;

    #[test]
    fn test_decl_kind_parse() {
        assert_eq!(DeclKind::parse("struct"), Some(DeclKind::Struct));
        assert_eq!(DeclKind::parse("class"), Some(DeclKind::Class));
        assert_eq!(DeclKind::parse("enum"), Some(DeclKind::Enum));
        assert_eq!(DeclKind::parse("union"), None);
        assert_eq!(DeclKind::Extension.to_string(), "extension");
    }

    #[test]
    fn test_modifier_display() {
        assert_eq!(Modifier::new("public").to_string(), "public");
        assert_eq!(
            Modifier::with_detail("private", "set").to_string(),
            "private(set)"
        );
    }

    #[test]
    fn test_properties_skip_non_variable_members() {
        let nested = RecordDeclaration::structure("Inner").with_variable(VariableDecl::var(
            PatternBinding::identifier("hidden").with_type(TypeSyntax::named("Int")),
        ));

        let record = RecordDeclaration::structure("Outer")
            .with_variable(VariableDecl::var(
                PatternBinding::identifier("first").with_type(TypeSyntax::named("String")),
            ))
            .with_member(MemberItem::Function {
                name: "describe".to_string(),
            })
            .with_member(MemberItem::Nested(Box::new(nested)))
            .with_variable(VariableDecl::var(
                PatternBinding::identifier("second").with_type(TypeSyntax::named("Int")),
            ));

        let names: Vec<_> = record
            .properties()
            .flat_map(|variable| variable.bindings.iter())
            .filter_map(PatternBinding::identifier_text)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_empty_record_has_no_properties() {
        let record = RecordDeclaration::class("Empty");
        assert_eq!(record.properties().count(), 0);
        assert_eq!(record.name(), "Empty");
        assert_eq!(DeclGroup::kind(&record), DeclKind::Class);
    }

    #[test]
    fn test_record_declaration_from_json() {
        let json = r#"{
            "kind": "struct",
            "name": "User",
            "modifiers": [{ "name": "public" }],
            "members": [
                {
                    "member": "variable",
                    "specifier": "var",
                    "bindings": [
                        {
                            "pattern": { "kind": "identifier", "name": "email" },
                            "type_annotation": {
                                "kind": "optional",
                                "wrapped": { "kind": "identifier", "name": "String" }
                            }
                        }
                    ]
                },
                { "member": "function", "name": "validate" }
            ]
        }"#;

        let record: RecordDeclaration = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(record.kind, DeclKind::Struct);
        assert_eq!(record.modifiers, vec![Modifier::new("public")]);
        assert_eq!(record.members.len(), 2);

        let variable = record.properties().next().expect("No property");
        assert_eq!(
            variable.resolved_type(0),
            Some(&TypeSyntax::named("String").optional())
        );
    }
}
