//! Full-form search over normalized conjugated forms.

use std::collections::HashSet;

use geoverb_core::{Conjugation, Verb, normalize};
use tracing::debug;

use crate::config::SearchConfig;
use crate::store::RecordStore;

/// One search result: a conjugation joined with its owning verb and the
/// verb's first gloss, when they exist.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub conjugation: &'a Conjugation,
    pub verb: Option<&'a Verb>,
    pub gloss: Option<&'a str>,
}

/// Search conjugated forms by normalized text.
///
/// Exact normalized matches come first, then substring matches, with
/// duplicates of the same conjugation id collapsed to the first-seen
/// entry — an exact match is never displaced by a partial one.
/// Accumulation stops at `candidate_limit` deduplicated candidates and
/// the first `result_limit` of those are returned. An empty or
/// whitespace-only query is a valid terminal state and yields no hits.
#[must_use]
pub fn search<'a>(store: &'a RecordStore, query: &str, config: &SearchConfig) -> Vec<SearchHit<'a>> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }

    let exact = store
        .conjugations()
        .iter()
        .filter(|conjugation| conjugation.normalized_form == query);
    let partial = store
        .conjugations()
        .iter()
        .filter(|conjugation| conjugation.normalized_form.contains(&query));

    let mut seen = HashSet::new();
    let mut matches: Vec<&Conjugation> = Vec::new();
    for conjugation in exact.chain(partial) {
        if matches.len() >= config.candidate_limit {
            break;
        }
        if seen.insert(conjugation.id) {
            matches.push(conjugation);
        }
    }
    matches.truncate(config.result_limit);

    debug!(hits = matches.len(), %query, "search complete");

    matches
        .into_iter()
        .map(|conjugation| SearchHit {
            conjugation,
            verb: store.verb(conjugation.verb_id),
            gloss: store.first_gloss(conjugation.verb_id),
        })
        .collect()
}
