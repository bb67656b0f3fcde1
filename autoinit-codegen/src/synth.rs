//! Initializer synthesis.
//!
//! Builds the structured initializer declaration. Rendering it to source
//! text is the printer's job, see [`crate::printer`].

use crate::classify::{BindingClassifier, SynthesizedParameter};
use crate::printer::{DeclPrinter, SwiftPrinter};
use crate::visibility::{AccessLevel, resolve_access_level};
use autoinit_syntax::DeclGroup;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One `self.member = value` statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned member.
    pub member: String,
    /// Assigned parameter.
    pub value: String,
}

impl Assignment {
    /// Creates an assignment of a parameter to the member of the same name.
    #[must_use]
    pub fn same_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            member: name.clone(),
            value: name,
        }
    }
}

/// A synthesized member-wise initializer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InitializerDecl {
    /// Access level prefix, if the declaration had one.
    pub access_level: Option<AccessLevel>,
    /// Parameters in declaration order.
    pub parameters: Vec<SynthesizedParameter>,
    /// Body statements, one per parameter, in the same order.
    pub assignments: Vec<Assignment>,
}

impl InitializerDecl {
    /// Returns true if the initializer takes no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl fmt::Display for InitializerDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&SwiftPrinter::default().print_initializer(self))
    }
}

/// Assembles initializers from classified bindings.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitializerSynthesizer {
    classifier: BindingClassifier,
}

impl InitializerSynthesizer {
    /// Creates a new synthesizer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            classifier: BindingClassifier::new(),
        }
    }

    /// Builds an initializer from an access level and ordered parameters.
    #[must_use]
    pub fn assemble(
        &self,
        access_level: Option<AccessLevel>,
        parameters: Vec<SynthesizedParameter>,
    ) -> InitializerDecl {
        let assignments = parameters
            .iter()
            .map(|parameter| Assignment::same_name(parameter.name.as_str()))
            .collect();

        InitializerDecl {
            access_level,
            parameters,
            assignments,
        }
    }

    /// Synthesizes the member-wise initializer for a declaration.
    ///
    /// Eligibility of the declaration kind is not checked here.
    #[must_use]
    pub fn synthesize<D: DeclGroup>(&self, declaration: &D) -> InitializerDecl {
        let access_level = resolve_access_level(declaration.modifiers());
        let parameters = self.classifier.parameters(declaration);
        self.assemble(access_level, parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoinit_syntax::{Modifier, PatternBinding, RecordDeclaration, TypeSyntax, VariableDecl};

    #[test]
    fn test_assemble_pairs_assignments_with_parameters() {
        let record = RecordDeclaration::structure("Person")
            .with_variable(VariableDecl::var(
                PatternBinding::identifier("name").with_type(TypeSyntax::named("String")),
            ))
            .with_variable(VariableDecl::var(
                PatternBinding::identifier("age").with_type(TypeSyntax::named("Int")),
            ));

        let init = InitializerSynthesizer::new().synthesize(&record);

        assert_eq!(init.access_level, None);
        assert_eq!(init.parameters.len(), 2);
        assert_eq!(
            init.assignments,
            vec![Assignment::same_name("name"), Assignment::same_name("age")]
        );
    }

    #[test]
    fn test_synthesize_propagates_access_level() {
        let record = RecordDeclaration::class("Store")
            .with_modifier(Modifier::new("final"))
            .with_modifier(Modifier::new("public"));

        let init = InitializerSynthesizer::new().synthesize(&record);

        assert_eq!(init.access_level, Some(AccessLevel::Public));
        assert!(init.is_empty());
        assert!(init.assignments.is_empty());
    }

    #[test]
    fn test_initializer_serializes_for_host() {
        let record = RecordDeclaration::structure("Flag").with_variable(VariableDecl::var(
            PatternBinding::identifier("on").with_type(TypeSyntax::named("Bool")),
        ));
        let init = InitializerSynthesizer::new().synthesize(&record);

        let json = serde_json::to_value(&init).expect("Failed to serialize");
        assert_eq!(json["access_level"], serde_json::Value::Null);
        assert_eq!(json["parameters"][0]["name"], "on");
        assert_eq!(json["parameters"][0]["type"]["name"], "Bool");
        assert_eq!(json["assignments"][0]["member"], "on");
    }
}
