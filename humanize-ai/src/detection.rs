//! AI authorship detection result.
//!
//! The service answers with one overall score plus eight per-metric scores,
//! all percentages in `[0, 100]`. Anything outside that range is rejected so
//! the rest of the app never renders a nonsense bar.

use serde::{Deserialize, Serialize};

use crate::AiResponseError;

/// One scored aspect of the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisMetricV1 {
    pub score: f32,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DetectionAnalysisV1 {
    pub perplexity: AnalysisMetricV1,
    pub burstiness: AnalysisMetricV1,
    pub sentence_structure: AnalysisMetricV1,
    pub semantic_consistency: AnalysisMetricV1,
    pub statistical_analysis: AnalysisMetricV1,
    pub watermark_detection: AnalysisMetricV1,
    pub lexical_originality: AnalysisMetricV1,
    pub emotional_tone: AnalysisMetricV1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AiDetectionResultV1 {
    pub overall_score: f32,
    pub overall_explanation: String,
    pub analysis: DetectionAnalysisV1,
}

/// The eight metrics, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Perplexity,
    Burstiness,
    SentenceStructure,
    SemanticConsistency,
    StatisticalAnalysis,
    WatermarkDetection,
    LexicalOriginality,
    EmotionalTone,
}

impl MetricKind {
    pub fn title(&self) -> &'static str {
        match self {
            MetricKind::Perplexity => "Perplexity",
            MetricKind::Burstiness => "Burstiness",
            MetricKind::SentenceStructure => "Sentence Structure",
            MetricKind::SemanticConsistency => "Semantic Consistency",
            MetricKind::StatisticalAnalysis => "Statistical Patterns",
            MetricKind::WatermarkDetection => "AI Watermark",
            MetricKind::LexicalOriginality => "Lexical Originality",
            MetricKind::EmotionalTone => "Emotional Tone",
        }
    }

    // wire name, used in validation errors
    fn field(&self) -> &'static str {
        match self {
            MetricKind::Perplexity => "perplexity",
            MetricKind::Burstiness => "burstiness",
            MetricKind::SentenceStructure => "sentenceStructure",
            MetricKind::SemanticConsistency => "semanticConsistency",
            MetricKind::StatisticalAnalysis => "statisticalAnalysis",
            MetricKind::WatermarkDetection => "watermarkDetection",
            MetricKind::LexicalOriginality => "lexicalOriginality",
            MetricKind::EmotionalTone => "emotionalTone",
        }
    }
}

impl AiDetectionResultV1 {
    /// Every metric paired with its kind, in display order.
    pub fn metrics(&self) -> [(MetricKind, &AnalysisMetricV1); 8] {
        let a = &self.analysis;
        [
            (MetricKind::Perplexity, &a.perplexity),
            (MetricKind::Burstiness, &a.burstiness),
            (MetricKind::SentenceStructure, &a.sentence_structure),
            (MetricKind::SemanticConsistency, &a.semantic_consistency),
            (MetricKind::StatisticalAnalysis, &a.statistical_analysis),
            (MetricKind::WatermarkDetection, &a.watermark_detection),
            (MetricKind::LexicalOriginality, &a.lexical_originality),
            (MetricKind::EmotionalTone, &a.emotional_tone),
        ]
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_score(self.overall_score)
    }

    /// Reject any score that is not a finite percentage.
    pub fn validate(&self) -> Result<(), AiResponseError> {
        check_score("overallScore", self.overall_score)?;
        for (kind, metric) in self.metrics() {
            check_score(kind.field(), metric.score)?;
        }
        Ok(())
    }
}

fn check_score(field: &'static str, score: f32) -> Result<(), AiResponseError> {
    if score.is_finite() && (0.0..=100.0).contains(&score) {
        return Ok(());
    }
    tracing::error!(field, score, "detection score out of range [0, 100]");
    Err(AiResponseError::ScoreOutOfRange { field, score })
}

/// Parse and validate a detection response body.
pub fn parse_detection(json: &str) -> Result<AiDetectionResultV1, AiResponseError> {
    let result: AiDetectionResultV1 = serde_json::from_str(json)?;
    result.validate()?;
    tracing::debug!(score = result.overall_score, "parsed detection result");
    Ok(result)
}

/// Reading of a score, also used to pick the bar color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    LikelyAi,
    PotentiallyAi,
    LikelyHuman,
}

impl Verdict {
    pub fn from_score(score: f32) -> Self {
        if score > 75.0 {
            Verdict::LikelyAi
        } else if score > 40.0 {
            Verdict::PotentiallyAi
        } else {
            Verdict::LikelyHuman
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::LikelyAi => "Likely AI Generated",
            Verdict::PotentiallyAi => "Potentially AI Generated",
            Verdict::LikelyHuman => "Likely Human Written",
        }
    }
}

/// Filled share of a score bar. Never drawn below 5% so a zero stays visible.
pub fn bar_fraction(score: f32) -> f32 {
    (score.max(5.0) / 100.0).min(1.0)
}
