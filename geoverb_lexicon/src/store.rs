//! Read-only indexed snapshot of the loaded record collections.
//!
//! The store is built once from whatever the loader managed to decode and
//! never mutated afterwards. Derived conjugation fields are filled during
//! construction, and every index preserves source order so that
//! first-match policies downstream stay deterministic.

use std::collections::HashMap;

use geoverb_core::{Conjugation, Pronunciation, Sense, Verb};
use tracing::debug;

/// The four entity collections plus their lookup indexes.
pub struct RecordStore {
    verbs: Vec<Verb>,
    conjugations: Vec<Conjugation>,
    senses: Vec<Sense>,
    pronunciations: Vec<Pronunciation>,
    verb_by_id: HashMap<i64, usize>,
    conjugations_by_verb: HashMap<i64, Vec<usize>>,
    senses_by_verb: HashMap<i64, Vec<usize>>,
    /// Exact pronunciations, keyed by conjugation id. Last write wins on
    /// duplicate keys.
    pronunciation_by_conjugation: HashMap<i64, usize>,
    /// Fallback pronunciations (no conjugation link), in insertion order.
    pronunciations_by_verb: HashMap<i64, Vec<usize>>,
}

impl RecordStore {
    /// Build the snapshot: one derived-field pass over the conjugations,
    /// then the lookup indexes.
    #[must_use]
    pub fn new(
        verbs: Vec<Verb>,
        mut conjugations: Vec<Conjugation>,
        senses: Vec<Sense>,
        pronunciations: Vec<Pronunciation>,
    ) -> Self {
        for conjugation in &mut conjugations {
            conjugation.ensure_derived();
        }

        let mut verb_by_id = HashMap::new();
        for (idx, verb) in verbs.iter().enumerate() {
            verb_by_id.insert(verb.id, idx);
        }

        let mut conjugations_by_verb: HashMap<i64, Vec<usize>> = HashMap::new();
        for (idx, conjugation) in conjugations.iter().enumerate() {
            conjugations_by_verb
                .entry(conjugation.verb_id)
                .or_default()
                .push(idx);
        }

        let mut senses_by_verb: HashMap<i64, Vec<usize>> = HashMap::new();
        for (idx, sense) in senses.iter().enumerate() {
            senses_by_verb.entry(sense.verb_id).or_default().push(idx);
        }

        let mut pronunciation_by_conjugation = HashMap::new();
        let mut pronunciations_by_verb: HashMap<i64, Vec<usize>> = HashMap::new();
        for (idx, pronunciation) in pronunciations.iter().enumerate() {
            if let Some(conjugation_id) = pronunciation.conjugation_id {
                pronunciation_by_conjugation.insert(conjugation_id, idx);
            } else if let Some(verb_id) = pronunciation.verb_id {
                pronunciations_by_verb.entry(verb_id).or_default().push(idx);
            }
        }

        debug!(
            verbs = verbs.len(),
            conjugations = conjugations.len(),
            senses = senses.len(),
            pronunciations = pronunciations.len(),
            "record store built"
        );

        Self {
            verbs,
            conjugations,
            senses,
            pronunciations,
            verb_by_id,
            conjugations_by_verb,
            senses_by_verb,
            pronunciation_by_conjugation,
            pronunciations_by_verb,
        }
    }

    #[must_use]
    pub fn verb(&self, id: i64) -> Option<&Verb> {
        self.verb_by_id.get(&id).map(|&idx| &self.verbs[idx])
    }

    #[must_use]
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    #[must_use]
    pub fn conjugations(&self) -> &[Conjugation] {
        &self.conjugations
    }

    /// Conjugations of one verb, in source order.
    pub fn conjugations_for(&self, verb_id: i64) -> impl Iterator<Item = &Conjugation> {
        self.conjugations_by_verb
            .get(&verb_id)
            .into_iter()
            .flatten()
            .map(|&idx| &self.conjugations[idx])
    }

    /// Senses of one verb, in source order.
    pub fn senses_for(&self, verb_id: i64) -> impl Iterator<Item = &Sense> {
        self.senses_by_verb
            .get(&verb_id)
            .into_iter()
            .flatten()
            .map(|&idx| &self.senses[idx])
    }

    /// Gloss of the verb's first sense, used for search result rendering.
    #[must_use]
    pub fn first_gloss(&self, verb_id: i64) -> Option<&str> {
        self.senses_for(verb_id).next().map(|sense| sense.gloss.as_str())
    }

    /// The exact pronunciation linked to a conjugation, if any.
    #[must_use]
    pub fn pronunciation_for_conjugation(&self, conjugation_id: i64) -> Option<&Pronunciation> {
        self.pronunciation_by_conjugation
            .get(&conjugation_id)
            .map(|&idx| &self.pronunciations[idx])
    }

    /// Verb-level fallback pronunciations, in insertion order.
    pub fn pronunciations_for_verb(&self, verb_id: i64) -> impl Iterator<Item = &Pronunciation> {
        self.pronunciations_by_verb
            .get(&verb_id)
            .into_iter()
            .flatten()
            .map(|&idx| &self.pronunciations[idx])
    }
}
