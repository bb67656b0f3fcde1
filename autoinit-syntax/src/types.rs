//! Type syntax.
//!
//! A structural view of a type annotation as written in source. Rendering
//! through [`std::fmt::Display`] yields canonical source text, which is what
//! the generated parameter list carries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type annotation tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeSyntax {
    /// Named type, optionally generic (`Int`, `Array<String>`).
    Identifier {
        /// Type name.
        name: String,
        /// Generic arguments, empty when not generic.
        #[serde(default)]
        generic_arguments: Vec<TypeSyntax>,
    },
    /// Qualified member type (`Foundation.Date`).
    Member {
        /// Qualifying type.
        base: Box<TypeSyntax>,
        /// Member name.
        name: String,
    },
    /// Optional type (`T?`).
    Optional {
        /// Wrapped type.
        wrapped: Box<TypeSyntax>,
    },
    /// Implicitly unwrapped optional (`T!`).
    ImplicitlyUnwrappedOptional {
        /// Wrapped type.
        wrapped: Box<TypeSyntax>,
    },
    /// Array sugar (`[T]`).
    Array {
        /// Element type.
        element: Box<TypeSyntax>,
    },
    /// Dictionary sugar (`[K: V]`).
    Dictionary {
        /// Key type.
        key: Box<TypeSyntax>,
        /// Value type.
        value: Box<TypeSyntax>,
    },
    /// Tuple or parenthesised type (`(Int, String)`, `(() -> Void)`).
    Tuple {
        /// Tuple elements.
        elements: Vec<TupleTypeElement>,
    },
    /// Function type (`(String) async throws -> Int`).
    Function {
        /// Parameter types.
        parameters: Vec<TupleTypeElement>,
        /// Effect specifiers.
        #[serde(default)]
        effects: FunctionEffects,
        /// Return type.
        return_type: Box<TypeSyntax>,
    },
    /// Type with leading specifiers or attributes (`@Sendable () -> Void`, `inout Int`).
    Attributed {
        /// Specifier keywords such as `inout` or `borrowing`.
        #[serde(default)]
        specifiers: Vec<String>,
        /// Attribute names without the leading `@`.
        #[serde(default)]
        attributes: Vec<String>,
        /// Attributed type.
        base: Box<TypeSyntax>,
    },
    /// Opaque or existential type (`some View`, `any Error`).
    SomeOrAny {
        /// `some` or `any`.
        keyword: ConstraintKeyword,
        /// Constraint type.
        constraint: Box<TypeSyntax>,
    },
    /// Metatype (`T.Type`, `P.Protocol`).
    Metatype {
        /// Base type.
        base: Box<TypeSyntax>,
        /// `Type` or `Protocol`.
        suffix: MetatypeKind,
    },
}

/// One element of a tuple type or function parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TupleTypeElement {
    /// Element label, if any.
    #[serde(default)]
    pub label: Option<String>,
    /// Element type.
    #[serde(rename = "type")]
    pub ty: TypeSyntax,
}

impl TupleTypeElement {
    /// Creates an unlabeled element.
    #[must_use]
    pub fn new(ty: TypeSyntax) -> Self {
        Self { label: None, ty }
    }

    /// Creates a labeled element.
    #[must_use]
    pub fn labeled(label: impl Into<String>, ty: TypeSyntax) -> Self {
        Self {
            label: Some(label.into()),
            ty,
        }
    }
}

/// Effect specifiers of a function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FunctionEffects {
    /// `async`
    #[serde(default)]
    pub is_async: bool,
    /// `throws`
    #[serde(default)]
    pub throws: bool,
}

/// Keyword introducing an opaque or existential type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKeyword {
    /// `some`
    Some,
    /// `any`
    Any,
}

/// Metatype suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetatypeKind {
    /// `.Type`
    Type,
    /// `.Protocol`
    Protocol,
}

impl TypeSyntax {
    /// Creates a plain named type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Identifier {
            name: name.into(),
            generic_arguments: Vec::new(),
        }
    }

    /// Creates a generic named type.
    #[must_use]
    pub fn generic(name: impl Into<String>, arguments: Vec<TypeSyntax>) -> Self {
        Self::Identifier {
            name: name.into(),
            generic_arguments: arguments,
        }
    }

    /// Creates `Void`.
    #[must_use]
    pub fn void() -> Self {
        Self::named("Void")
    }

    /// Wraps this type in an optional.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional {
            wrapped: Box::new(self),
        }
    }

    /// Wraps this type in an implicitly unwrapped optional.
    #[must_use]
    pub fn implicitly_unwrapped(self) -> Self {
        Self::ImplicitlyUnwrappedOptional {
            wrapped: Box::new(self),
        }
    }

    /// Creates an array of this type.
    #[must_use]
    pub fn array(element: TypeSyntax) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    /// Creates a dictionary type.
    #[must_use]
    pub fn dictionary(key: TypeSyntax, value: TypeSyntax) -> Self {
        Self::Dictionary {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Creates a tuple of unlabeled elements.
    #[must_use]
    pub fn tuple(elements: Vec<TypeSyntax>) -> Self {
        Self::Tuple {
            elements: elements.into_iter().map(TupleTypeElement::new).collect(),
        }
    }

    /// Wraps this type in parentheses, as in `(() -> Void)?`.
    #[must_use]
    pub fn parenthesized(self) -> Self {
        Self::Tuple {
            elements: vec![TupleTypeElement::new(self)],
        }
    }

    /// Creates a synchronous, non-throwing function type.
    #[must_use]
    pub fn function(parameters: Vec<TypeSyntax>, return_type: TypeSyntax) -> Self {
        Self::Function {
            parameters: parameters.into_iter().map(TupleTypeElement::new).collect(),
            effects: FunctionEffects::default(),
            return_type: Box::new(return_type),
        }
    }

    /// Prefixes this type with an attribute (`@Sendable`).
    #[must_use]
    pub fn with_attribute(self, attribute: impl Into<String>) -> Self {
        match self {
            Self::Attributed {
                specifiers,
                mut attributes,
                base,
            } => {
                attributes.push(attribute.into());
                Self::Attributed {
                    specifiers,
                    attributes,
                    base,
                }
            }
            other => Self::Attributed {
                specifiers: Vec::new(),
                attributes: vec![attribute.into()],
                base: Box::new(other),
            },
        }
    }

    /// Returns true if this is a top-level optional (`T?`).
    ///
    /// Implicitly unwrapped optionals do not count.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional { .. })
    }

    /// Returns true if this type is a function type or contains one anywhere
    /// in its structure.
    #[must_use]
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function { .. }) || self.children().any(TypeSyntax::is_function)
    }

    /// Iterates the immediate sub-types of this node.
    pub fn children(&self) -> impl Iterator<Item = &TypeSyntax> {
        let children: Vec<&TypeSyntax> = match self {
            Self::Identifier {
                generic_arguments, ..
            } => generic_arguments.iter().collect(),
            Self::Member { base, .. }
            | Self::Attributed { base, .. }
            | Self::Metatype { base, .. } => vec![base.as_ref()],
            Self::Optional { wrapped } | Self::ImplicitlyUnwrappedOptional { wrapped } => {
                vec![wrapped.as_ref()]
            }
            Self::Array { element } => vec![element.as_ref()],
            Self::Dictionary { key, value } => vec![key.as_ref(), value.as_ref()],
            Self::Tuple { elements } => elements.iter().map(|e| &e.ty).collect(),
            Self::Function {
                parameters,
                return_type,
                ..
            } => parameters
                .iter()
                .map(|p| &p.ty)
                .chain(std::iter::once(return_type.as_ref()))
                .collect(),
            Self::SomeOrAny { constraint, .. } => vec![constraint.as_ref()],
        };
        children.into_iter()
    }

    /// Returns true if this type needs parentheses before a postfix
    /// operator such as `?`, `!` or `.Type`.
    const fn needs_parens_as_postfix_operand(&self) -> bool {
        matches!(
            self,
            Self::Function { .. } | Self::Attributed { .. } | Self::SomeOrAny { .. }
        )
    }

    fn fmt_postfix_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.needs_parens_as_postfix_operand() {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

fn fmt_elements(elements: &[TupleTypeElement], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (idx, element) in elements.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", element)?;
    }
    Ok(())
}

impl fmt::Display for TupleTypeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}: {}", label, self.ty),
            None => write!(f, "{}", self.ty),
        }
    }
}

impl fmt::Display for FunctionEffects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_async {
            f.write_str(" async")?;
        }
        if self.throws {
            f.write_str(" throws")?;
        }
        Ok(())
    }
}

impl fmt::Display for ConstraintKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some => f.write_str("some"),
            Self::Any => f.write_str("any"),
        }
    }
}

impl fmt::Display for TypeSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier {
                name,
                generic_arguments,
            } => {
                f.write_str(name)?;
                if !generic_arguments.is_empty() {
                    f.write_str("<")?;
                    for (idx, argument) in generic_arguments.iter().enumerate() {
                        if idx > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", argument)?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            Self::Member { base, name } => {
                base.fmt_postfix_operand(f)?;
                write!(f, ".{}", name)
            }
            Self::Optional { wrapped } => {
                wrapped.fmt_postfix_operand(f)?;
                f.write_str("?")
            }
            Self::ImplicitlyUnwrappedOptional { wrapped } => {
                wrapped.fmt_postfix_operand(f)?;
                f.write_str("!")
            }
            Self::Array { element } => write!(f, "[{}]", element),
            Self::Dictionary { key, value } => write!(f, "[{}: {}]", key, value),
            Self::Tuple { elements } => {
                f.write_str("(")?;
                fmt_elements(elements, f)?;
                f.write_str(")")
            }
            Self::Function {
                parameters,
                effects,
                return_type,
            } => {
                f.write_str("(")?;
                fmt_elements(parameters, f)?;
                write!(f, "){} -> {}", effects, return_type)
            }
            Self::Attributed {
                specifiers,
                attributes,
                base,
            } => {
                for specifier in specifiers {
                    write!(f, "{} ", specifier)?;
                }
                for attribute in attributes {
                    write!(f, "@{} ", attribute)?;
                }
                write!(f, "{}", base)
            }
            Self::SomeOrAny {
                keyword,
                constraint,
            } => write!(f, "{} {}", keyword, constraint),
            Self::Metatype { base, suffix } => {
                base.fmt_postfix_operand(f)?;
                match suffix {
                    MetatypeKind::Type => f.write_str(".Type"),
                    MetatypeKind::Protocol => f.write_str(".Protocol"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn callback() -> TypeSyntax {
        TypeSyntax::function(vec![], TypeSyntax::void())
    }

    #[test]
    fn test_display_simple_types() {
        assert_eq!(TypeSyntax::named("String").to_string(), "String");
        assert_eq!(
            TypeSyntax::named("String").optional().to_string(),
            "String?"
        );
        assert_eq!(
            TypeSyntax::array(TypeSyntax::named("String")).to_string(),
            "[String]"
        );
        assert_eq!(
            TypeSyntax::dictionary(TypeSyntax::named("String"), TypeSyntax::named("Int"))
                .to_string(),
            "[String: Int]"
        );
        assert_eq!(
            TypeSyntax::generic("Result", vec![TypeSyntax::named("Int"), TypeSyntax::named("Error")])
                .to_string(),
            "Result<Int, Error>"
        );
    }

    #[test]
    fn test_display_function_types() {
        assert_eq!(callback().to_string(), "() -> Void");
        assert_eq!(
            TypeSyntax::function(vec![TypeSyntax::named("String")], TypeSyntax::named("Int"))
                .to_string(),
            "(String) -> Int"
        );

        let effectful = TypeSyntax::Function {
            parameters: vec![TupleTypeElement::labeled("value", TypeSyntax::named("Int"))],
            effects: FunctionEffects {
                is_async: true,
                throws: true,
            },
            return_type: Box::new(TypeSyntax::named("Bool")),
        };
        assert_eq!(
            effectful.with_attribute("Sendable").to_string(),
            "@Sendable (value: Int) async throws -> Bool"
        );
    }

    #[test]
    fn test_display_postfix_parenthesizes_functions() {
        assert_eq!(
            callback().parenthesized().optional().to_string(),
            "(() -> Void)?"
        );
        assert_eq!(callback().optional().to_string(), "(() -> Void)?");
        assert_eq!(
            TypeSyntax::named("Int").implicitly_unwrapped().to_string(),
            "Int!"
        );

        let existential = TypeSyntax::SomeOrAny {
            keyword: ConstraintKeyword::Any,
            constraint: Box::new(TypeSyntax::named("Error")),
        };
        assert_eq!(existential.clone().to_string(), "any Error");
        assert_eq!(existential.optional().to_string(), "(any Error)?");
    }

    #[test]
    fn test_display_member_and_metatype() {
        let date = TypeSyntax::Member {
            base: Box::new(TypeSyntax::named("Foundation")),
            name: "Date".to_string(),
        };
        assert_eq!(date.to_string(), "Foundation.Date");

        let meta = TypeSyntax::Metatype {
            base: Box::new(TypeSyntax::named("Int")),
            suffix: MetatypeKind::Type,
        };
        assert_eq!(meta.to_string(), "Int.Type");
    }

    #[test]
    fn test_is_optional() {
        assert!(TypeSyntax::named("String").optional().is_optional());
        assert!(!TypeSyntax::named("String").is_optional());
        assert!(!TypeSyntax::named("String").implicitly_unwrapped().is_optional());
        assert!(!TypeSyntax::generic("Optional", vec![TypeSyntax::named("Int")]).is_optional());
    }

    #[test]
    fn test_is_function() {
        assert!(callback().is_function());
        assert!(callback().with_attribute("Sendable").is_function());
        assert!(callback().optional().is_function());
        assert!(callback().parenthesized().optional().is_function());
        assert!(TypeSyntax::array(callback()).is_function());
        assert!(!TypeSyntax::named("String").is_function());
        assert!(!TypeSyntax::named("String").optional().is_function());
        assert!(!TypeSyntax::tuple(vec![TypeSyntax::named("Int"), TypeSyntax::named("Int")])
            .is_function());
    }

    #[test]
    fn test_type_syntax_serde_tagging() {
        let ty = TypeSyntax::named("String").optional();
        let json = serde_json::to_value(&ty).expect("Failed to serialize");
        assert_eq!(json["kind"], "optional");
        assert_eq!(json["wrapped"]["kind"], "identifier");

        let decoded: TypeSyntax = serde_json::from_value(json).expect("Failed to deserialize");
        assert_eq!(decoded, ty);
    }
}
