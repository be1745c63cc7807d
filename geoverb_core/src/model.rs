//! Entity types for the verb lexicon.
//!
//! Four record kinds arrive from the data sources: verbs, conjugations,
//! senses, and pronunciations. All of them are immutable once loaded; the
//! only derived state (`normalized_form`, `morpheme_list`) is filled in by
//! a single pass at load time.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::normalize::normalize;

/// Decode an id that sources encode as either a JSON number or a numeric
/// string.
fn flexible_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Decode an optional id. Null, a missing field, an empty string, and a
/// non-numeric string all count as absent.
fn flexible_opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
    })
}

/// Grammatical person and number, in the fixed table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    #[serde(rename = "1sg")]
    FirstSingular,
    #[serde(rename = "2sg")]
    SecondSingular,
    #[serde(rename = "3sg")]
    ThirdSingular,
    #[serde(rename = "1pl")]
    FirstPlural,
    #[serde(rename = "2pl")]
    SecondPlural,
    #[serde(rename = "3pl")]
    ThirdPlural,
}

impl Person {
    /// All six persons in the order conjugation tables are rendered.
    pub const ALL: [Self; 6] = [
        Self::FirstSingular,
        Self::SecondSingular,
        Self::ThirdSingular,
        Self::FirstPlural,
        Self::SecondPlural,
        Self::ThirdPlural,
    ];

    /// Returns the canonical marker string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstSingular => "1sg",
            Self::SecondSingular => "2sg",
            Self::ThirdSingular => "3sg",
            Self::FirstPlural => "1pl",
            Self::SecondPlural => "2pl",
            Self::ThirdPlural => "3pl",
        }
    }

    /// Parse a person marker, tolerating case and surrounding whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "1sg" => Some(Self::FirstSingular),
            "2sg" => Some(Self::SecondSingular),
            "3sg" => Some(Self::ThirdSingular),
            "1pl" => Some(Self::FirstPlural),
            "2pl" => Some(Self::SecondPlural),
            "3pl" => Some(Self::ThirdPlural),
            _ => None,
        }
    }

    /// Whether a raw person marker names this person.
    #[must_use]
    pub fn matches(self, raw: &str) -> bool {
        Self::parse(raw) == Some(self)
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verb lemma.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verb {
    #[serde(deserialize_with = "flexible_id")]
    pub id: i64,
    #[serde(default)]
    pub root: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub present_suffix: String,
    #[serde(default)]
    pub future_suffix: String,
}

/// A single conjugated form of a verb.
///
/// `tense`, `mood`, and `person` arrive as free-form strings with
/// inconsistent localized spellings; the alias table resolves them during
/// classification. `normalized_form` and `morpheme_list` are derived once
/// by [`Conjugation::ensure_derived`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conjugation {
    #[serde(deserialize_with = "flexible_id")]
    pub id: i64,
    #[serde(deserialize_with = "flexible_id")]
    pub verb_id: i64,
    #[serde(default)]
    pub conjugated_form: String,
    #[serde(default)]
    pub tense: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub person: String,
    /// Raw morpheme field: either an array of strings or a JSON-encoded
    /// string holding one. Anything else is ignored.
    #[serde(default)]
    pub morphemes: Option<Value>,
    #[serde(default)]
    pub ipa: String,
    #[serde(default)]
    pub normalized_form: String,
    /// Parsed morpheme sequence, derived from `morphemes` at load time.
    #[serde(skip)]
    pub morpheme_list: Option<Vec<String>>,
}

impl Conjugation {
    /// Fill the derived fields exactly once, at load time.
    ///
    /// A supplied `normalized_form` is trusted; an absent one is computed
    /// from `conjugated_form`. A malformed morpheme field is treated as
    /// absent rather than an error.
    pub fn ensure_derived(&mut self) {
        if self.normalized_form.is_empty() {
            self.normalized_form = normalize(&self.conjugated_form);
        }
        self.morpheme_list = self.morphemes.as_ref().and_then(parse_morphemes);
    }

    /// Display string for the morpheme column: the parsed sequence joined
    /// with a separator, else a raw flat string, else empty.
    #[must_use]
    pub fn morpheme_display(&self) -> String {
        if let Some(list) = &self.morpheme_list {
            return list.join(" · ");
        }
        match &self.morphemes {
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        }
    }
}

fn parse_morphemes(raw: &Value) -> Option<Vec<String>> {
    match raw {
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect(),
        Value::String(encoded) => serde_json::from_str(encoded).ok(),
        _ => None,
    }
}

/// A meaning of a verb, with optional example sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(deserialize_with = "flexible_id")]
    pub verb_id: i64,
    #[serde(default)]
    pub gloss: String,
    #[serde(default)]
    pub definition: String,
    /// `|`-joined example sentences.
    #[serde(default)]
    pub examples: String,
}

impl Sense {
    /// Split the example field into trimmed, non-empty sentences.
    #[must_use]
    pub fn example_list(&self) -> Vec<String> {
        self.examples
            .split('|')
            .map(str::trim)
            .filter(|example| !example.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// A pronunciation record, linked to either one conjugation (exact) or one
/// verb (general fallback).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pronunciation {
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub conjugation_id: Option<i64>,
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub verb_id: Option<i64>,
    #[serde(default)]
    pub ipa: String,
    #[serde(default)]
    pub audio_url: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn person_order_and_parse() {
        let markers: Vec<&str> = Person::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(markers, ["1sg", "2sg", "3sg", "1pl", "2pl", "3pl"]);

        assert_eq!(Person::parse(" 3SG "), Some(Person::ThirdSingular));
        assert_eq!(Person::parse("4sg"), None);
        assert!(Person::FirstPlural.matches("1PL"));
    }

    #[test]
    fn ids_decode_from_numbers_and_strings() {
        let a: Verb = serde_json::from_value(json!({"id": 7, "root": "cvr"})).unwrap();
        let b: Verb = serde_json::from_value(json!({"id": "7", "root": "cvr"})).unwrap();
        assert_eq!(a.id, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn optional_ids_treat_empty_string_as_absent() {
        let pron: Pronunciation =
            serde_json::from_value(json!({"conjugation_id": "", "verb_id": "3", "ipa": "/a/"}))
                .unwrap();
        assert_eq!(pron.conjugation_id, None);
        assert_eq!(pron.verb_id, Some(3));
    }

    #[test]
    fn derived_normalized_form_is_computed_when_absent() {
        let mut conj: Conjugation =
            serde_json::from_value(json!({"id": 1, "verb_id": 7, "conjugated_form": "Var deba"}))
                .unwrap();
        conj.ensure_derived();
        assert_eq!(conj.normalized_form, "vardeba");

        // A supplied normalized form is kept as-is.
        let mut conj: Conjugation = serde_json::from_value(json!({
            "id": 2, "verb_id": 7, "conjugated_form": "vardeba", "normalized_form": "custom"
        }))
        .unwrap();
        conj.ensure_derived();
        assert_eq!(conj.normalized_form, "custom");
    }

    #[test]
    fn morphemes_parse_from_array_and_encoded_string() {
        let mut conj: Conjugation = serde_json::from_value(json!({
            "id": 1, "verb_id": 7, "conjugated_form": "vardeba",
            "morphemes": ["v", "ard", "eba"]
        }))
        .unwrap();
        conj.ensure_derived();
        assert_eq!(conj.morpheme_display(), "v · ard · eba");

        let mut conj: Conjugation = serde_json::from_value(json!({
            "id": 2, "verb_id": 7, "conjugated_form": "vardeba",
            "morphemes": "[\"v\",\"ard\"]"
        }))
        .unwrap();
        conj.ensure_derived();
        assert_eq!(conj.morpheme_display(), "v · ard");
    }

    #[test]
    fn malformed_morphemes_fall_back_without_error() {
        // A flat non-JSON string is shown raw.
        let mut conj: Conjugation = serde_json::from_value(json!({
            "id": 1, "verb_id": 7, "conjugated_form": "vardeba", "morphemes": "v-ard-eba"
        }))
        .unwrap();
        conj.ensure_derived();
        assert_eq!(conj.morpheme_list, None);
        assert_eq!(conj.morpheme_display(), "v-ard-eba");

        // A structurally wrong value is simply absent.
        let mut conj: Conjugation = serde_json::from_value(json!({
            "id": 2, "verb_id": 7, "conjugated_form": "vardeba", "morphemes": {"a": 1}
        }))
        .unwrap();
        conj.ensure_derived();
        assert_eq!(conj.morpheme_display(), "");
    }

    #[test]
    fn sense_examples_split_and_trim() {
        let sense: Sense = serde_json::from_value(json!({
            "verb_id": 7, "gloss": "to bloom",
            "examples": " first one | second one ||"
        }))
        .unwrap();
        assert_eq!(sense.example_list(), ["first one", "second one"]);
    }
}
