//! Tone analysis layered on the external sentiment scorer.

use crate::AnalysisError;
use cadence_types::ToneLabel;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Compound scores at or above this value are Positive.
const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores at or below this value are Negative.
const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Wraps the VADER sentiment analyzer.
///
/// The scorer is an external capability consumed opaquely: only the
/// `compound` component of its output is read, and the bucketing policy in
/// [`bucket`] is the sole logic layered on top. The analyzer is immutable
/// after construction and safe to share across connections.
pub struct ToneAnalyzer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl ToneAnalyzer {
    /// Creates an analyzer backed by the built-in VADER lexicon.
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Scores text and buckets the compound score into a tone label.
    ///
    /// Deterministic for identical input and scorer lexicon. A scorer
    /// result without a `compound` entry surfaces as
    /// [`AnalysisError::Scorer`]; it is never retried.
    pub fn score(&self, text: &str) -> Result<(ToneLabel, f64), AnalysisError> {
        let scores = self.analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied().ok_or_else(|| {
            AnalysisError::Scorer("scorer produced no compound score".to_string())
        })?;
        Ok((bucket(compound), compound))
    }
}

impl Default for ToneAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Buckets a compound score into a tone label.
///
/// Boundary values are closed on the outer buckets: exactly 0.05 is
/// Positive and exactly -0.05 is Negative.
pub fn bucket(compound: f64) -> ToneLabel {
    if compound >= POSITIVE_THRESHOLD {
        ToneLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        ToneLabel::Negative
    } else {
        ToneLabel::Neutral
    }
}
