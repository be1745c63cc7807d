//! Query engine for the verb lexicon.
//!
//! This crate turns four static record collections (verbs, conjugations,
//! senses, pronunciations) into a read-only, indexed snapshot and answers
//! two questions over it:
//! - full-form search over normalized conjugated forms
//! - per-verb detail assembly with conjugations grouped into screeves

#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod detail;
mod error;
mod lexicon;
pub mod loader;
pub mod screeve;
pub mod search;
pub mod store;

// Re-export the shared model so downstream callers only need this crate.
pub use geoverb_core::{Conjugation, Mood, Person, Pronunciation, Sense, Tense, Verb};

pub use config::{LexiconConfig, SearchConfig};
pub use detail::{SenseDetail, VerbDetail, assemble_verb_detail};
pub use error::{Error, Result};
pub use lexicon::Lexicon;
pub use screeve::{PersonRow, PieceTable, ScreeveKey, ScreeveTable, classify_verb};
pub use search::{SearchHit, search};
pub use store::RecordStore;
