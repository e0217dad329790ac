//! Text analysis for the Cadence speaking-feedback service.
//!
//! Implements the four analysis components behind the transport layer:
//!
//! | Component | Entry point |
//! |-----------|-------------|
//! | Context classifier | [`classify`] |
//! | Tone analyzer | [`ToneAnalyzer::score`] |
//! | Filler detector | [`detect`] |
//! | Advice engine | [`suggest`], [`tips`] |
//!
//! plus the immutable [`PreferenceStore`] that maps user identifiers to
//! speaking preferences. Everything here is pure computation over injected
//! state; the only external collaborator is the VADER sentiment scorer
//! wrapped by [`ToneAnalyzer`].

mod advice;
mod context;
mod error;
mod filler;
mod prefs;
mod tone;

pub use advice::{suggest, tips};
pub use context::classify;
pub use error::AnalysisError;
pub use filler::{detect, detect_set, tokenize, FILLER_VOCABULARY, NO_FILLERS_DETECTED};
pub use prefs::PreferenceStore;
pub use tone::{bucket, ToneAnalyzer};
