//! Formatting of classification responses for display.
//!
//! The HTTP call itself belongs to the host; this module only interprets
//! the JSON body the classification service returns.

use std::cmp::Ordering;

use serde::Deserialize;

use super::text::shorten_category_name;
use crate::error::{Error, Result};

/// Raw response body of the classification service.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PredictionResult {
    pub success: bool,
    pub predicted_category: Option<String>,
    pub confidence: f64,
    /// Seconds spent in the model.
    pub inference_time: f64,
    pub scores: Vec<CategoryScore>,
    pub keywords: Vec<String>,
    pub error: Option<String>,
}

/// Score of one candidate category, between 0 and 1.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CategoryScore {
    pub category: String,
    pub score: f64,
}

impl PredictionResult {
    /// Parses a response body.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Splits the response into a usable prediction or the reported failure.
    pub fn into_prediction(self) -> Result<Prediction> {
        match (self.success, self.predicted_category) {
            (true, Some(category)) => Ok(Prediction {
                category,
                confidence: self.confidence,
                inference_time: self.inference_time,
                scores: self.scores,
                keywords: self.keywords,
            }),
            _ => Err(Error::Prediction(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            )),
        }
    }
}

/// A successful classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub category: String,
    pub confidence: f64,
    pub inference_time: f64,
    pub scores: Vec<CategoryScore>,
    pub keywords: Vec<String>,
}

/// One row of the score table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    /// Full category name, shown on hover.
    pub category: String,
    /// Shortened label for the axis.
    pub label: String,
    /// Score as a percentage string.
    pub score: String,
}

impl Prediction {
    /// Score rows, highest score first.
    pub fn score_rows(&self) -> Vec<ScoreRow> {
        let mut scores: Vec<&CategoryScore> = self.scores.iter().collect();
        scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scores
            .into_iter()
            .map(|s| ScoreRow {
                category: s.category.clone(),
                label: shorten_category_name(&s.category),
                score: format_confidence(s.score),
            })
            .collect()
    }

    /// Extracted keywords as a comma-separated line.
    pub fn keyword_line(&self) -> String {
        self.keywords.join(", ")
    }
}

/// Formats a 0-1 score as a percentage with two decimals.
pub fn format_confidence(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

/// Formats an inference duration in seconds.
pub fn format_inference_time(seconds: f64) -> String {
    format!("{seconds:.3}s")
}

/// Guidance category for a failed prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorHint {
    /// The service did not answer in time.
    Timeout,
    /// The service answered 502 or 503.
    ServiceUnavailable,
    Other,
}

impl ErrorHint {
    pub fn classify(message: &str) -> Self {
        if message.to_lowercase().contains("timeout") {
            Self::Timeout
        } else if message.contains("503") || message.contains("502") {
            Self::ServiceUnavailable
        } else {
            Self::Other
        }
    }

    /// Suggestions to show the user.
    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            Self::Timeout => &[
                "The classification API is unavailable or not responding",
                "The service is overloaded or under maintenance",
                "Check the API configuration",
            ],
            Self::ServiceUnavailable => &[
                "The API service is under maintenance or overloaded",
                "The hosting instance is short on resources",
                "Contact the service administrator",
            ],
            Self::Other => &["Check the API configuration"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "success": true,
        "predicted_category": "Watches",
        "confidence": 0.875,
        "inference_time": 0.1234,
        "scores": [
            {"category": "Baby Care", "score": 0.05},
            {"category": "Watches >> Wrist Watches", "score": 0.875},
            {"category": "Home Decor & Festive Needs With Lights", "score": 0.075}
        ],
        "keywords": ["analog", "strap"]
    }"#;

    #[test]
    fn parses_successful_prediction() {
        let prediction = PredictionResult::from_json(RESPONSE)
            .unwrap()
            .into_prediction()
            .unwrap();
        assert_eq!(prediction.category, "Watches");
        assert_eq!(format_confidence(prediction.confidence), "87.50%");
        assert_eq!(format_inference_time(prediction.inference_time), "0.123s");
        assert_eq!(prediction.keyword_line(), "analog, strap");
    }

    #[test]
    fn score_rows_sorted_descending_with_short_labels() {
        let prediction = PredictionResult::from_json(RESPONSE)
            .unwrap()
            .into_prediction()
            .unwrap();
        let rows = prediction.score_rows();
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Watches", "Home Decor & Festive Needs ...", "Baby Care"]
        );
        assert_eq!(rows[0].category, "Watches >> Wrist Watches");
        assert_eq!(rows[0].score, "87.50%");
        assert_eq!(rows[2].score, "5.00%");
    }

    #[test]
    fn failure_carries_service_message() {
        let result =
            PredictionResult::from_json(r#"{"success": false, "error": "503 Service Unavailable"}"#)
                .unwrap();
        let err = result.into_prediction().unwrap_err();
        assert!(matches!(err, Error::Prediction(ref msg) if msg == "503 Service Unavailable"));
    }

    #[test]
    fn success_without_category_is_a_failure() {
        let err = PredictionResult::from_json(r#"{"success": true}"#)
            .unwrap()
            .into_prediction()
            .unwrap_err();
        assert_eq!(err.to_string(), "prediction failed: unknown error");
    }

    #[test]
    fn classifies_error_hints() {
        assert_eq!(ErrorHint::classify("Read TIMEOUT after 30s"), ErrorHint::Timeout);
        assert_eq!(ErrorHint::classify("HTTP 502 Bad Gateway"), ErrorHint::ServiceUnavailable);
        assert_eq!(ErrorHint::classify("connection refused"), ErrorHint::Other);
        assert_eq!(ErrorHint::Timeout.suggestions().len(), 3);
    }
}
