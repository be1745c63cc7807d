#![deny(
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

pub mod alias;
pub mod model;
pub mod normalize;

pub use alias::{Mood, Tense};
pub use model::{Conjugation, Person, Pronunciation, Sense, Verb};
pub use normalize::normalize;
