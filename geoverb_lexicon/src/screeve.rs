//! Screeve classification: grouping a verb's conjugations into the fixed
//! taxonomy of tense/mood tables.
//!
//! A screeve is a named group of related tense/mood slots ("pieces");
//! each piece resolves to a six-row person table. The taxonomy is closed:
//! four screeves, each with a fixed ordered piece list. String variance in
//! the source data is handled entirely by the alias table; everything
//! here works on canonical tags.

use serde::Serialize;

use geoverb_core::{Conjugation, Mood, Person, Tense};

use crate::store::RecordStore;

/// One tense/mood slot within a screeve. A `None` mood accepts any mood.
#[derive(Debug, Clone, Copy)]
pub struct Piece {
    pub tense: Tense,
    pub mood: Option<Mood>,
    pub label: &'static str,
}

impl Piece {
    /// Whether a conjugation's raw tense/mood labels fall in this slot.
    #[must_use]
    pub fn matches(&self, conjugation: &Conjugation) -> bool {
        self.tense.matches(&conjugation.tense)
            && self.mood.is_none_or(|mood| mood.matches(&conjugation.mood))
    }
}

const PRESENT_PIECES: [Piece; 3] = [
    Piece {
        tense: Tense::Present,
        mood: Some(Mood::Indicative),
        label: "Present",
    },
    Piece {
        tense: Tense::Imperfect,
        mood: Some(Mood::Indicative),
        label: "Imperfect",
    },
    Piece {
        tense: Tense::Present,
        mood: Some(Mood::Subjunctive),
        label: "Present Subj",
    },
];

const FUTURE_PIECES: [Piece; 3] = [
    Piece {
        tense: Tense::Future,
        mood: Some(Mood::Indicative),
        label: "Future",
    },
    Piece {
        tense: Tense::Conditional,
        mood: None,
        label: "Conditional",
    },
    Piece {
        tense: Tense::Future,
        mood: Some(Mood::Subjunctive),
        label: "Future Subj",
    },
];

const AORIST_PIECES: [Piece; 2] = [
    Piece {
        tense: Tense::Aorist,
        mood: None,
        label: "Aorist",
    },
    Piece {
        tense: Tense::Optative,
        mood: None,
        label: "Optative",
    },
];

const PERFECT_PIECES: [Piece; 2] = [
    Piece {
        tense: Tense::Perfect,
        mood: None,
        label: "Perfect",
    },
    Piece {
        tense: Tense::Pluperfect,
        mood: None,
        label: "Pluperfect",
    },
];

/// The four screeves, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeveKey {
    Present,
    Future,
    Aorist,
    Perfect,
}

impl ScreeveKey {
    pub const ALL: [Self; 4] = [Self::Present, Self::Future, Self::Aorist, Self::Perfect];

    /// Returns the canonical key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Future => "future",
            Self::Aorist => "aorist",
            Self::Perfect => "perfect",
        }
    }

    /// Section heading for this screeve.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Present => "Present Screeve",
            Self::Future => "Future Screeve",
            Self::Aorist => "Aorist Screeve",
            Self::Perfect => "Perfect Screeve",
        }
    }

    /// The ordered piece list this screeve declares.
    #[must_use]
    pub const fn pieces(self) -> &'static [Piece] {
        match self {
            Self::Present => &PRESENT_PIECES,
            Self::Future => &FUTURE_PIECES,
            Self::Aorist => &AORIST_PIECES,
            Self::Perfect => &PERFECT_PIECES,
        }
    }

    /// Summary line of all declared piece labels, shown in the screeve
    /// header.
    #[must_use]
    pub fn piece_summary(self) -> String {
        self.pieces()
            .iter()
            .map(|piece| piece.label)
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

/// One resolved person slot within a piece table. An unfilled slot keeps
/// its row (tables always have six rows) with empty display fields.
#[derive(Debug, Clone, Serialize)]
pub struct PersonRow {
    pub person: Person,
    /// Id of the resolved conjugation, usable as a highlight anchor.
    pub conjugation_id: Option<i64>,
    pub form: String,
    pub morphemes: String,
    pub ipa: String,
    pub audio_url: Option<String>,
}

impl PersonRow {
    const fn empty(person: Person) -> Self {
        Self {
            person,
            conjugation_id: None,
            form: String::new(),
            morphemes: String::new(),
            ipa: String::new(),
            audio_url: None,
        }
    }
}

/// A rendered piece: its label plus the six person rows.
#[derive(Debug, Clone, Serialize)]
pub struct PieceTable {
    pub label: &'static str,
    pub rows: Vec<PersonRow>,
}

/// A rendered screeve: only pieces with at least one filled row survive.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeveTable {
    pub key: ScreeveKey,
    pub pieces: Vec<PieceTable>,
}

impl ScreeveTable {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.key.title()
    }
}

/// Classify a verb's conjugations into screeve tables.
///
/// A screeve is emitted only when at least one of its pieces matches at
/// least one conjugation of the verb; a piece is emitted only when at
/// least one of its six person slots resolved to a non-empty form. Slot
/// resolution is first-match-wins in store order; duplicate data for the
/// same slot is a data-quality concern upstream of the classifier.
#[must_use]
pub fn classify_verb(store: &RecordStore, verb_id: i64) -> Vec<ScreeveTable> {
    let conjugations: Vec<&Conjugation> = store.conjugations_for(verb_id).collect();

    let mut screeves = Vec::new();
    for key in ScreeveKey::ALL {
        let any_match = key
            .pieces()
            .iter()
            .any(|piece| conjugations.iter().any(|c| piece.matches(c)));
        if !any_match {
            continue;
        }

        let mut pieces = Vec::new();
        for piece in key.pieces() {
            let rows: Vec<PersonRow> = Person::ALL
                .iter()
                .map(|&person| resolve_row(store, &conjugations, piece, person))
                .collect();
            if rows.iter().any(|row| !row.form.is_empty()) {
                pieces.push(PieceTable {
                    label: piece.label,
                    rows,
                });
            }
        }

        screeves.push(ScreeveTable { key, pieces });
    }
    screeves
}

fn resolve_row(
    store: &RecordStore,
    conjugations: &[&Conjugation],
    piece: &Piece,
    person: Person,
) -> PersonRow {
    let Some(conjugation) = conjugations
        .iter()
        .find(|c| piece.matches(c) && person.matches(&c.person))
    else {
        return PersonRow::empty(person);
    };

    let pronunciation = store.pronunciation_for_conjugation(conjugation.id);
    let ipa = pronunciation
        .map(|p| p.ipa.as_str())
        .filter(|ipa| !ipa.is_empty())
        .unwrap_or(&conjugation.ipa)
        .to_owned();
    let audio_url = pronunciation
        .map(|p| p.audio_url.clone())
        .filter(|url| !url.is_empty());

    PersonRow {
        person,
        conjugation_id: Some(conjugation.id),
        form: conjugation.conjugated_form.clone(),
        morphemes: conjugation.morpheme_display(),
        ipa,
        audio_url,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use geoverb_core::Pronunciation;

    fn conj(id: i64, tense: &str, mood: &str, person: &str, form: &str) -> Conjugation {
        Conjugation {
            id,
            verb_id: 7,
            conjugated_form: form.to_string(),
            tense: tense.to_string(),
            mood: mood.to_string(),
            person: person.to_string(),
            morphemes: None,
            ipa: String::new(),
            normalized_form: String::new(),
            morpheme_list: None,
        }
    }

    fn store(conjugations: Vec<Conjugation>, pronunciations: Vec<Pronunciation>) -> RecordStore {
        RecordStore::new(vec![], conjugations, vec![], pronunciations)
    }

    fn row<'a>(table: &'a PieceTable, person: Person) -> &'a PersonRow {
        table.rows.iter().find(|r| r.person == person).unwrap()
    }

    #[test]
    fn taxonomy_is_fixed() {
        assert_eq!(ScreeveKey::ALL.len(), 4);
        let labels: Vec<&str> = ScreeveKey::Present
            .pieces()
            .iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(labels, ["Present", "Imperfect", "Present Subj"]);
        assert_eq!(
            ScreeveKey::Aorist.piece_summary(),
            "Aorist · Optative"
        );
    }

    #[test]
    fn screeves_without_matches_are_omitted() {
        let screeves = classify_verb(
            &store(vec![conj(1, "present", "indicative", "3sg", "vardeba")], vec![]),
            7,
        );
        let keys: Vec<ScreeveKey> = screeves.iter().map(|s| s.key).collect();
        assert_eq!(keys, [ScreeveKey::Present]);
    }

    #[test]
    fn empty_mood_counts_as_indicative() {
        let screeves = classify_verb(
            &store(vec![conj(1, "presente", "", "2sg", "xedav")], vec![]),
            7,
        );
        assert_eq!(screeves.len(), 1);
        let piece = &screeves[0].pieces[0];
        assert_eq!(piece.label, "Present");
        assert_eq!(row(piece, Person::SecondSingular).form, "xedav");
    }

    #[test]
    fn pieces_without_any_filled_row_are_omitted() {
        // Subjunctive present only: the screeve shows, but the two
        // indicative pieces are dropped.
        let screeves = classify_verb(
            &store(vec![conj(1, "present", "subj", "1sg", "vxedavde")], vec![]),
            7,
        );
        assert_eq!(screeves.len(), 1);
        assert_eq!(screeves[0].pieces.len(), 1);
        assert_eq!(screeves[0].pieces[0].label, "Present Subj");
    }

    #[test]
    fn wildcard_mood_pieces_accept_any_mood() {
        let screeves = classify_verb(
            &store(vec![conj(1, "aoristo", "optional-mood", "1pl", "vcvritet")], vec![]),
            7,
        );
        assert_eq!(screeves[0].key, ScreeveKey::Aorist);
        assert_eq!(
            row(&screeves[0].pieces[0], Person::FirstPlural).form,
            "vcvritet"
        );
    }

    #[test]
    fn first_match_in_store_order_wins() {
        let screeves = classify_verb(
            &store(
                vec![
                    conj(1, "present", "indicative", "3sg", "first"),
                    conj(2, "present", "indicative", "3sg", "second"),
                ],
                vec![],
            ),
            7,
        );
        let slot = row(&screeves[0].pieces[0], Person::ThirdSingular);
        assert_eq!(slot.form, "first");
        assert_eq!(slot.conjugation_id, Some(1));
    }

    #[test]
    fn person_markers_are_case_insensitive() {
        let screeves = classify_verb(
            &store(vec![conj(1, "present", "indicative", "3SG", "vardeba")], vec![]),
            7,
        );
        assert_eq!(
            row(&screeves[0].pieces[0], Person::ThirdSingular).form,
            "vardeba"
        );
    }

    #[test]
    fn linked_pronunciation_overrides_conjugation_ipa() {
        let mut c = conj(42, "present", "indicative", "3sg", "vardeba");
        c.ipa = "/own/".to_string();
        let screeves = classify_verb(
            &store(
                vec![c],
                vec![Pronunciation {
                    conjugation_id: Some(42),
                    verb_id: None,
                    ipa: "/var/".to_string(),
                    audio_url: "a.mp3".to_string(),
                }],
            ),
            7,
        );
        let slot = row(&screeves[0].pieces[0], Person::ThirdSingular);
        assert_eq!(slot.ipa, "/var/");
        assert_eq!(slot.audio_url.as_deref(), Some("a.mp3"));
    }

    #[test]
    fn conjugation_ipa_is_the_fallback() {
        let mut c = conj(1, "present", "indicative", "3sg", "vardeba");
        c.ipa = "/own/".to_string();
        let screeves = classify_verb(&store(vec![c], vec![]), 7);
        let slot = row(&screeves[0].pieces[0], Person::ThirdSingular);
        assert_eq!(slot.ipa, "/own/");
        assert_eq!(slot.audio_url, None);
    }
}
