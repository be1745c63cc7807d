//! Per-verb detail assembly for the presentation layer.

use serde::Serialize;

use geoverb_core::{Mood, Person, Pronunciation, Tense};

use crate::error::{Error, Result};
use crate::screeve::{ScreeveTable, classify_verb};
use crate::store::RecordStore;

/// One sense with its example sentences split out.
#[derive(Debug, Clone, Serialize)]
pub struct SenseDetail {
    pub gloss: String,
    pub definition: String,
    pub examples: Vec<String>,
}

/// Everything the verb page renders, in render order.
#[derive(Debug, Clone, Serialize)]
pub struct VerbDetail {
    pub verb_id: i64,
    /// Canonical display form: the 3sg present-indicative conjugation when
    /// one exists, else the verb's root.
    pub display_form: String,
    pub notes: String,
    pub present_suffix: String,
    pub future_suffix: String,
    pub senses: Vec<SenseDetail>,
    pub screeves: Vec<ScreeveTable>,
    /// Verb-level fallback pronunciations, in source order.
    pub pronunciations: Vec<Pronunciation>,
}

/// Assemble the detail structure for one verb.
///
/// An unknown id yields [`Error::VerbNotFound`]; the store is never
/// mutated.
pub fn assemble_verb_detail(store: &RecordStore, verb_id: i64) -> Result<VerbDetail> {
    let verb = store.verb(verb_id).ok_or(Error::VerbNotFound(verb_id))?;

    let display_form = store
        .conjugations_for(verb_id)
        .find(|c| {
            Person::ThirdSingular.matches(&c.person)
                && Tense::Present.matches(&c.tense)
                && Mood::Indicative.matches(&c.mood)
        })
        .map_or_else(|| verb.root.clone(), |c| c.conjugated_form.clone());

    let senses = store
        .senses_for(verb_id)
        .map(|sense| SenseDetail {
            gloss: sense.gloss.clone(),
            definition: sense.definition.clone(),
            examples: sense.example_list(),
        })
        .collect();

    Ok(VerbDetail {
        verb_id,
        display_form,
        notes: verb.notes.clone(),
        present_suffix: verb.present_suffix.clone(),
        future_suffix: verb.future_suffix.clone(),
        senses,
        screeves: classify_verb(store, verb_id),
        pronunciations: store.pronunciations_for_verb(verb_id).cloned().collect(),
    })
}
