//! Trigger-keyword matching.
//!
//! A pattern matches an alert when at least `min_trigger_hits` trigger
//! keywords accumulate across the alert itself and related alerts from the
//! preceding window.

use cascade_core::alert::Alert;
use chrono::Duration;

use crate::library::CascadePattern;

/// Count trigger hits in one alert's searchable text.
fn hits_in(alert: &Alert, pattern: &CascadePattern) -> usize {
    let text = format!(
        "{} {} {}",
        alert.system, alert.category, alert.message
    )
    .to_lowercase();
    pattern
        .triggers
        .iter()
        .filter(|trigger| text.contains(trigger.as_str()))
        .count()
}

/// Alerts from the window preceding `alert` (exclusive of `alert` itself).
pub fn related_window<'a>(
    alert: &Alert,
    all: &'a [Alert],
    window_mins: i64,
) -> Vec<&'a Alert> {
    let window = Duration::minutes(window_mins);
    all.iter()
        .filter(|other| {
            other.id != alert.id
                && other.timestamp <= alert.timestamp
                && alert.timestamp - other.timestamp <= window
        })
        .collect()
}

/// Total trigger hits for `pattern` across `alert` and its related window.
pub fn trigger_hits(
    pattern: &CascadePattern,
    alert: &Alert,
    related: &[&Alert],
) -> usize {
    let mut hits = hits_in(alert, pattern);
    for other in related {
        hits += hits_in(other, pattern);
    }
    hits
}
