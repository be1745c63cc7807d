//! Canonical tense and mood tags with their accepted spellings.
//!
//! Source data carries tense and mood names as free-form strings with
//! mixed English and Spanish spellings. This table is the only place that
//! deals with that variance: everything downstream works on the closed
//! [`Tense`] and [`Mood`] enums.

use serde::{Deserialize, Serialize};

/// Canonical tense tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Present,
    Imperfect,
    Future,
    Conditional,
    Aorist,
    Optative,
    Perfect,
    Pluperfect,
}

impl Tense {
    pub const ALL: [Self; 8] = [
        Self::Present,
        Self::Imperfect,
        Self::Future,
        Self::Conditional,
        Self::Aorist,
        Self::Optative,
        Self::Perfect,
        Self::Pluperfect,
    ];

    /// Returns the canonical key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Imperfect => "imperfect",
            Self::Future => "future",
            Self::Conditional => "conditional",
            Self::Aorist => "aorist",
            Self::Optative => "optative",
            Self::Perfect => "perfect",
            Self::Pluperfect => "pluperfect",
        }
    }

    /// Accepted literal spellings for this tense.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Present => &["present", "presente"],
            Self::Imperfect => &["imperfect", "imperfecto"],
            Self::Future => &["future", "futuro"],
            Self::Conditional => &["conditional", "condicional"],
            Self::Aorist => &["aorist", "aoristo"],
            Self::Optative => &["optative", "optativo"],
            Self::Perfect => &["perfect", "perfecto", "perfecto_indicativo"],
            Self::Pluperfect => &[
                "pluperfect",
                "pluperfecto",
                "pluscuamperfecto",
                "pluscuamperfecto_indicativo",
            ],
        }
    }

    /// Whether a raw tense label names this tense. Case-insensitive,
    /// whitespace-trimmed.
    #[must_use]
    pub fn matches(self, raw: &str) -> bool {
        let label = raw.trim().to_lowercase();
        self.aliases().contains(&label.as_str())
    }

    /// Resolve a raw tense label to its canonical tag.
    #[must_use]
    pub fn resolve(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tense| tense.matches(raw))
    }
}

impl std::fmt::Display for Tense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical mood tag. An absent or empty mood string counts as
/// indicative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Indicative,
    Subjunctive,
}

impl Mood {
    pub const ALL: [Self; 2] = [Self::Indicative, Self::Subjunctive];

    /// Returns the canonical key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indicative => "indicative",
            Self::Subjunctive => "subjunctive",
        }
    }

    /// Accepted literal spellings for this mood.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            // The empty string is deliberate: unmarked forms are indicative.
            Self::Indicative => &["indicative", "indicativo", ""],
            Self::Subjunctive => &["subjunctive", "subjunctivo", "subj"],
        }
    }

    /// Whether a raw mood label names this mood. Case-insensitive,
    /// whitespace-trimmed; the empty string matches indicative.
    #[must_use]
    pub fn matches(self, raw: &str) -> bool {
        let label = raw.trim().to_lowercase();
        self.aliases().contains(&label.as_str())
    }

    /// Resolve a raw mood label to its canonical tag.
    #[must_use]
    pub fn resolve(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mood| mood.matches(raw))
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_spellings_resolve() {
        assert_eq!(Tense::resolve("presente"), Some(Tense::Present));
        assert_eq!(Tense::resolve(" Aoristo "), Some(Tense::Aorist));
        assert_eq!(
            Tense::resolve("pluscuamperfecto_indicativo"),
            Some(Tense::Pluperfect)
        );
        assert_eq!(Tense::resolve("gerund"), None);
    }

    #[test]
    fn matching_is_case_insensitive_and_trimmed() {
        assert!(Tense::Future.matches("FUTURO"));
        assert!(Tense::Perfect.matches("  perfect "));
        assert!(!Tense::Present.matches("future"));
    }

    #[test]
    fn empty_mood_is_indicative() {
        assert!(Mood::Indicative.matches(""));
        assert!(Mood::Indicative.matches("   "));
        assert_eq!(Mood::resolve(""), Some(Mood::Indicative));
    }

    #[test]
    fn subjunctive_spellings() {
        assert!(Mood::Subjunctive.matches("subj"));
        assert!(Mood::Subjunctive.matches("Subjunctivo"));
        assert!(!Mood::Subjunctive.matches(""));
    }
}
