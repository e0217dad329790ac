//! Shared types for the Cadence speaking-feedback service.
//!
//! This crate provides the foundational types used across all Cadence
//! crates: conversational context and tone labels, the per-user speaking
//! preference record, and the analysis result returned by the transport
//! layer.
//!
//! No crate in the workspace depends on anything *except* `cadence-types`
//! for cross-cutting type definitions. This keeps the dependency graph
//! clean and prevents circular dependencies.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Coarse classification of the conversational setting.
///
/// Used to select advice phrasing and reported verbatim in analysis
/// responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextLabel {
    /// Professional settings (meetings, client work).
    Formal,
    /// Sales or convincing language.
    Persuasive,
    /// Casual conversation.
    Informal,
    /// No recognized context keywords.
    General,
}

impl ContextLabel {
    /// Returns the string label for this context.
    pub fn label(self) -> &'static str {
        match self {
            Self::Formal => "Formal",
            Self::Persuasive => "Persuasive",
            Self::Informal => "Informal",
            Self::General => "General",
        }
    }
}

/// Emotional tone bucket derived from the sentiment compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToneLabel {
    /// Compound score >= 0.05.
    Positive,
    /// Compound score strictly between -0.05 and 0.05.
    Neutral,
    /// Compound score <= -0.05.
    Negative,
}

impl ToneLabel {
    /// Returns the string label for this tone.
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

/// A speaker's self-declared preferred speaking speed.
///
/// Selects at most one supplemental tip from the advice engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    /// Speaker tends to speak slowly.
    Slow,
    /// No pace adjustment suggested.
    #[default]
    Normal,
    /// Speaker tends to speak quickly.
    Fast,
}

/// Per-user speaking preferences.
///
/// Built once at startup from configuration and immutable thereafter.
/// Owned by the preference store; everything else sees it read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreference {
    /// Unique user identifier.
    pub user_id: String,
    /// Preferred speaking pace.
    pub preferred_pace: Pace,
    /// Filler words/phrases this user has opted to allow, case-folded.
    pub allowed_fillers: HashSet<String>,
}

/// The combined result of one analysis pass over a piece of text.
///
/// Constructed fresh per request; serialized as the response payload for
/// both the one-shot endpoint and the streaming channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Detected conversational context.
    pub context: ContextLabel,
    /// Tone bucket for the compound score.
    pub tone: ToneLabel,
    /// Raw compound sentiment score in [-1, 1].
    pub tone_score: f64,
    /// Human-readable filler-word feedback sentence.
    pub filler_feedback: String,
}
