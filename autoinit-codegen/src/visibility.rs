//! Access level resolution.

use autoinit_syntax::Modifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recognized access level keywords, most restrictive first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// `private`
    Private,
    /// `fileprivate`
    Fileprivate,
    /// `internal`
    Internal,
    /// `package`
    Package,
    /// `public`
    Public,
    /// `open`
    Open,
}

impl AccessLevel {
    /// All levels, most restrictive first.
    pub const ALL: [Self; 6] = [
        Self::Private,
        Self::Fileprivate,
        Self::Internal,
        Self::Package,
        Self::Public,
        Self::Open,
    ];

    /// Parses an access level keyword.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "private" => Some(Self::Private),
            "fileprivate" => Some(Self::Fileprivate),
            "internal" => Some(Self::Internal),
            "package" => Some(Self::Package),
            "public" => Some(Self::Public),
            "open" => Some(Self::Open),
            _ => None,
        }
    }

    /// Returns the source keyword.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Fileprivate => "fileprivate",
            Self::Internal => "internal",
            Self::Package => "package",
            Self::Public => "public",
            Self::Open => "open",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Returns the first modifier, in source order, that names an access level.
///
/// Unrecognized modifiers are skipped; later access keywords are ignored once
/// one has matched.
#[must_use]
pub fn resolve_access_level(modifiers: &[Modifier]) -> Option<AccessLevel> {
    modifiers
        .iter()
        .find_map(|modifier| AccessLevel::parse(&modifier.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifiers(names: &[&str]) -> Vec<Modifier> {
        names.iter().map(|name| Modifier::new(*name)).collect()
    }

    #[test]
    fn test_access_level_parse_roundtrip() {
        for level in AccessLevel::ALL {
            assert_eq!(AccessLevel::parse(level.keyword()), Some(level));
        }
        assert_eq!(AccessLevel::parse("final"), None);
        assert_eq!(AccessLevel::parse("Public"), None);
    }

    #[test]
    fn test_access_level_ordering() {
        assert!(AccessLevel::Private < AccessLevel::Fileprivate);
        assert!(AccessLevel::Package < AccessLevel::Public);
        assert!(AccessLevel::Public < AccessLevel::Open);
    }

    #[test]
    fn test_resolve_none() {
        assert_eq!(resolve_access_level(&[]), None);
        assert_eq!(resolve_access_level(&modifiers(&["final"])), None);
    }

    #[test]
    fn test_resolve_skips_unrecognized() {
        assert_eq!(
            resolve_access_level(&modifiers(&["final", "public"])),
            Some(AccessLevel::Public)
        );
    }

    #[test]
    fn test_resolve_first_match_wins() {
        assert_eq!(
            resolve_access_level(&modifiers(&["public", "private"])),
            Some(AccessLevel::Public)
        );
    }

    #[test]
    fn test_resolve_detailed_modifier() {
        let mods = vec![Modifier::with_detail("private", "set"), Modifier::new("public")];
        assert_eq!(resolve_access_level(&mods), Some(AccessLevel::Private));
    }
}
