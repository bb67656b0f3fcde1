//! Binding classification.
//!
//! Decides, for every binding of every property statement, whether it
//! becomes an initializer parameter and what that parameter looks like.

use autoinit_syntax::{DeclGroup, TypeSyntax, VariableDecl};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default value given to optional parameters without an explicit one.
pub const EMPTY_OPTIONAL_LITERAL: &str = "nil";

/// A parameter of the synthesized initializer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SynthesizedParameter {
    /// Parameter name, equal to the property name.
    pub name: String,
    /// Resolved property type.
    #[serde(rename = "type")]
    pub ty: TypeSyntax,
    /// Whether the parameter needs the escaping marker.
    pub is_escaping: bool,
    /// Default value text.
    pub default_value: Option<String>,
}

impl SynthesizedParameter {
    /// Returns the resolved type rendered as source text.
    #[must_use]
    pub fn type_text(&self) -> String {
        self.ty.to_string()
    }
}

/// Why a binding was left out of the initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Tuple or wildcard pattern.
    NonIdentifierPattern,
    /// Has a getter or other non-observer accessor.
    Computed,
    /// `let` with an inline value.
    Constant,
    /// No own annotation and none on a following sibling.
    UnresolvedType,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonIdentifierPattern => f.write_str("pattern is not a plain identifier"),
            Self::Computed => f.write_str("computed property"),
            Self::Constant => f.write_str("constant with inline value"),
            Self::UnresolvedType => f.write_str("type annotation could not be resolved"),
        }
    }
}

/// Outcome of classifying one binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Binding becomes a parameter.
    Included(SynthesizedParameter),
    /// Binding is skipped.
    Excluded {
        /// Binding name, when the pattern has one.
        name: Option<String>,
        /// Reason for skipping.
        reason: ExclusionReason,
    },
}

impl Classification {
    /// Returns the parameter if the binding was included.
    #[must_use]
    pub fn into_parameter(self) -> Option<SynthesizedParameter> {
        match self {
            Self::Included(parameter) => Some(parameter),
            Self::Excluded { .. } => None,
        }
    }

    /// Returns true if the binding was included.
    #[must_use]
    pub const fn is_included(&self) -> bool {
        matches!(self, Self::Included(_))
    }
}

/// Classifier for property bindings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindingClassifier;

impl BindingClassifier {
    /// Creates a new classifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Classifies the binding at `index` within `variable`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn classify_binding(&self, variable: &VariableDecl, index: usize) -> Classification {
        let binding = &variable.bindings[index];

        let Some(name) = binding.identifier_text() else {
            return Classification::Excluded {
                name: None,
                reason: ExclusionReason::NonIdentifierPattern,
            };
        };
        let excluded = |reason| Classification::Excluded {
            name: Some(name.to_string()),
            reason,
        };

        if binding.is_computed() {
            return excluded(ExclusionReason::Computed);
        }
        if binding.is_constant(variable.specifier) {
            return excluded(ExclusionReason::Constant);
        }
        let Some(ty) = variable.resolved_type(index) else {
            return excluded(ExclusionReason::UnresolvedType);
        };

        let default_value = match binding.value_text() {
            Some(value) => Some(value.to_string()),
            None if ty.is_optional() => Some(EMPTY_OPTIONAL_LITERAL.to_string()),
            None => None,
        };

        Classification::Included(SynthesizedParameter {
            name: name.to_string(),
            ty: ty.clone(),
            is_escaping: ty.is_function(),
            default_value,
        })
    }

    /// Classifies every binding of a property statement, in order.
    #[must_use]
    pub fn classify(&self, variable: &VariableDecl) -> Vec<Classification> {
        (0..variable.bindings.len())
            .map(|index| self.classify_binding(variable, index))
            .collect()
    }

    /// Returns the parameters for every included binding of a declaration,
    /// in declaration order.
    #[must_use]
    pub fn parameters<D: DeclGroup>(&self, declaration: &D) -> Vec<SynthesizedParameter> {
        declaration
            .properties()
            .flat_map(|variable| self.classify(variable))
            .filter_map(|classification| match classification {
                Classification::Included(parameter) => Some(parameter),
                Classification::Excluded { name, reason } => {
                    tracing::debug!(
                        "Skipping {} in {}: {}",
                        name.as_deref().unwrap_or("<pattern>"),
                        declaration.name(),
                        reason
                    );
                    None
                }
            })
            .collect()
    }
}
