//! Heuristic extraction from free-text reasoner output.
//!
//! When the service ignores the requested schema, the useful numbers are
//! usually still in the prose. These regexes pull out minutes, confidence,
//! and a cause sentence so the caller never has to handle a malformed body.

use std::sync::LazyLock;

use regex::Regex;

static MINUTES_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:in|within|about|~)?\s*(\d+(?:\.\d+)?)\s*(?:minutes|mins|min)\b").ok()
});

static CONFIDENCE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)confidence\D{0,12}(\d+(?:\.\d+)?)(\s*%)?").ok());

static CAUSE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:root\s+)?cause(?:\s+is)?\s*[:\-]?\s*([^.\n]{4,120})").ok()
});

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Extraction {
    pub minutes: Option<f64>,
    pub confidence: Option<f64>,
    pub cause: Option<String>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.minutes.is_none() && self.confidence.is_none() && self.cause.is_none()
    }
}

/// Pull minutes / confidence / cause out of free text. Missing fields stay
/// `None`; callers fall back to their numeric inputs.
pub fn extract(text: &str) -> Extraction {
    let minutes = MINUTES_RE
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|m| m.is_finite() && *m > 0.0);

    let confidence = CONFIDENCE_RE
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|c| {
            let value: f64 = c.get(1)?.as_str().parse().ok()?;
            let normalized = if c.get(2).is_some() || value > 1.0 {
                value / 100.0
            } else {
                value
            };
            (0.0..=1.0).contains(&normalized).then_some(normalized)
        });

    let cause = CAUSE_RE
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty());

    Extraction {
        minutes,
        confidence,
        cause,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_three_fields() {
        let text = "The database will likely cascade in 12 minutes. \
                    Confidence: 85%. Root cause: connection pool exhaustion on the primary.";
        let e = extract(text);
        assert_eq!(e.minutes, Some(12.0));
        assert_eq!(e.confidence, Some(0.85));
        assert!(e.cause.unwrap().contains("connection pool exhaustion"));
    }

    #[test]
    fn fractional_confidence_passes_through() {
        let e = extract("confidence is 0.72 overall");
        assert_eq!(e.confidence, Some(0.72));
    }

    #[test]
    fn plain_prose_yields_empty_extraction() {
        let e = extract("I am unable to help with that request.");
        assert!(e.is_empty());
    }

    #[test]
    fn garbage_numbers_are_rejected() {
        let e = extract("cascade in 0 minutes, confidence 300");
        assert_eq!(e.minutes, None);
        assert_eq!(e.confidence, None);
    }
}
