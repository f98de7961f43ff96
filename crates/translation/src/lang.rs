use std::fmt;

/// Languages the translation endpoint and recognition facility accept.
///
/// The set is closed; call documents store the display names and the wire
/// protocol uses the two-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Hindi,
    English,
    Kannada,
    Malayalam,
}

impl Language {
    /// Resolves a human-readable language name, case-insensitively.
    ///
    /// Unknown names yield `None`; callers fall back to a default rather
    /// than treating this as an error.
    pub fn resolve(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "HINDI" => Some(Self::Hindi),
            "ENGLISH" => Some(Self::English),
            "KANNADA" => Some(Self::Kannada),
            "MALAYALAM" => Some(Self::Malayalam),
            _ => None,
        }
    }

    /// Two-letter code used on the wire.
    pub fn code(self) -> &'static str {
        match self {
            Self::Hindi => "hi",
            Self::English => "en",
            Self::Kannada => "kn",
            Self::Malayalam => "ml",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names() {
        assert_eq!(Language::resolve("Hindi"), Some(Language::Hindi));
        assert_eq!(Language::resolve("ENGLISH"), Some(Language::English));
        assert_eq!(Language::resolve("kannada"), Some(Language::Kannada));
        assert_eq!(Language::resolve("MalaYalaM"), Some(Language::Malayalam));
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        assert_eq!(Language::resolve("Tamil"), None);
        assert_eq!(Language::resolve(""), None);
    }

    #[test]
    fn codes_match_wire_protocol() {
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Kannada.code(), "kn");
        assert_eq!(Language::Malayalam.code(), "ml");
    }
}
