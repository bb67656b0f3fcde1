//! Property statements and their pattern bindings.
//!
//! A single statement such as `var a, b: Int` is one [`VariableDecl`] holding
//! two [`PatternBinding`]s. Everything the classifier needs to know about a
//! binding is derived from this structure on demand.

use crate::types::TypeSyntax;
use serde::{Deserialize, Serialize};

/// Keyword introducing a property statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingSpecifier {
    /// Immutable binding (`let`).
    Let,
    /// Mutable binding (`var`).
    Var,
}

impl BindingSpecifier {
    /// Returns the source keyword.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Let => "let",
            Self::Var => "var",
        }
    }

    /// Parses a specifier keyword.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "let" => Some(Self::Let),
            "var" => Some(Self::Var),
            _ => None,
        }
    }
}

/// Binding pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pattern {
    /// Plain identifier (`name`).
    Identifier {
        /// Bound name.
        name: String,
    },
    /// Tuple destructuring (`(x, y)`).
    Tuple {
        /// Nested patterns.
        elements: Vec<Pattern>,
    },
    /// Discard pattern (`_`).
    Wildcard,
}

/// Kind of an explicit accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorKind {
    /// `get`
    Get,
    /// `set`
    Set,
    /// `willSet`
    WillSet,
    /// `didSet`
    DidSet,
    /// `_read`
    Read,
    /// `_modify`
    Modify,
    /// `init` accessor.
    Init,
}

impl AccessorKind {
    /// Returns true for property observers, which keep stored backing.
    #[must_use]
    pub const fn is_observer(&self) -> bool {
        matches!(self, Self::WillSet | Self::DidSet)
    }
}

/// One explicit accessor inside an accessor block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessorDecl {
    /// Accessor kind.
    pub kind: AccessorKind,
    /// Body source text, if any.
    #[serde(default)]
    pub body: Option<String>,
}

impl AccessorDecl {
    /// Creates an accessor with a body.
    #[must_use]
    pub fn new(kind: AccessorKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: Some(body.into()),
        }
    }
}

/// Braced block following a binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccessorBlock {
    /// Shorthand getter (`var area: Double { width * height }`).
    Getter {
        /// Body source text.
        body: String,
    },
    /// Explicit accessor list (`{ get { .. } set { .. } }`).
    Accessors {
        /// Accessors in source order.
        accessors: Vec<AccessorDecl>,
    },
}

impl AccessorBlock {
    /// Returns true if the block replaces stored backing.
    ///
    /// A block made only of `willSet`/`didSet` observers still describes a
    /// stored property.
    #[must_use]
    pub fn is_computed(&self) -> bool {
        match self {
            Self::Getter { .. } => true,
            Self::Accessors { accessors } => accessors.iter().any(|a| !a.kind.is_observer()),
        }
    }
}

/// One binding within a property statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternBinding {
    /// Bound pattern.
    pub pattern: Pattern,
    /// Own type annotation.
    #[serde(default)]
    pub type_annotation: Option<TypeSyntax>,
    /// Initializer expression text, verbatim.
    #[serde(default)]
    pub initializer: Option<String>,
    /// Accessor block, if the binding has one.
    #[serde(default)]
    pub accessor_block: Option<AccessorBlock>,
}

impl PatternBinding {
    /// Creates a binding for an arbitrary pattern.
    #[must_use]
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            type_annotation: None,
            initializer: None,
            accessor_block: None,
        }
    }

    /// Creates a binding for a plain identifier.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::new(Pattern::Identifier { name: name.into() })
    }

    /// Sets the type annotation.
    #[must_use]
    pub fn with_type(mut self, ty: TypeSyntax) -> Self {
        self.type_annotation = Some(ty);
        self
    }

    /// Sets the initializer expression.
    #[must_use]
    pub fn with_initializer(mut self, value: impl Into<String>) -> Self {
        self.initializer = Some(value.into());
        self
    }

    /// Sets the accessor block.
    #[must_use]
    pub fn with_accessor_block(mut self, block: AccessorBlock) -> Self {
        self.accessor_block = Some(block);
        self
    }

    /// Attaches a shorthand getter body.
    #[must_use]
    pub fn with_getter(self, body: impl Into<String>) -> Self {
        self.with_accessor_block(AccessorBlock::Getter { body: body.into() })
    }

    /// Returns the bound name when the pattern is a plain identifier.
    #[must_use]
    pub fn identifier_text(&self) -> Option<&str> {
        match &self.pattern {
            Pattern::Identifier { name } => Some(name.as_str()),
            Pattern::Tuple { .. } | Pattern::Wildcard => None,
        }
    }

    /// Returns the initializer expression text.
    #[must_use]
    pub fn value_text(&self) -> Option<&str> {
        self.initializer.as_deref()
    }

    /// Returns true if the binding is computed rather than stored.
    #[must_use]
    pub fn is_computed(&self) -> bool {
        self.accessor_block
            .as_ref()
            .is_some_and(AccessorBlock::is_computed)
    }

    /// Returns true if the binding is a `let` with an inline value.
    #[must_use]
    pub fn is_constant(&self, specifier: BindingSpecifier) -> bool {
        specifier == BindingSpecifier::Let && self.initializer.is_some()
    }
}

/// A property statement (`var a, b: Int`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableDecl {
    /// `let` or `var`.
    pub specifier: BindingSpecifier,
    /// Bindings in source order.
    pub bindings: Vec<PatternBinding>,
}

impl VariableDecl {
    /// Creates an empty statement.
    #[must_use]
    pub fn new(specifier: BindingSpecifier) -> Self {
        Self {
            specifier,
            bindings: Vec::new(),
        }
    }

    /// Creates a `var` statement with one binding.
    #[must_use]
    pub fn var(binding: PatternBinding) -> Self {
        Self::new(BindingSpecifier::Var).with_binding(binding)
    }

    /// Creates a `let` statement with one binding.
    #[must_use]
    pub fn immutable(binding: PatternBinding) -> Self {
        Self::new(BindingSpecifier::Let).with_binding(binding)
    }

    /// Appends a binding.
    #[must_use]
    pub fn with_binding(mut self, binding: PatternBinding) -> Self {
        self.add_binding(binding);
        self
    }

    /// Appends a binding.
    pub fn add_binding(&mut self, binding: PatternBinding) {
        self.bindings.push(binding);
    }

    /// Resolves the type of the binding at `index`.
    ///
    /// A binding without its own annotation borrows the annotation of the
    /// nearest following binding in the same statement (`var a, b: Int`
    /// types `a` as `Int`). Returns `None` when no such annotation exists.
    #[must_use]
    pub fn resolved_type(&self, index: usize) -> Option<&TypeSyntax> {
        self.bindings
            .get(index..)?
            .iter()
            .find_map(|binding| binding.type_annotation.as_ref())
    }
}
