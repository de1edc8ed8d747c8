use lazy_static::lazy_static;
use regex::Regex;

use super::create_hazard::{NewHazard, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use super::prelude::*;
use crate::RegionPolicy;

/// Advisory verdict of the automated pre-screening.
///
/// Never applied as a terminal moderation action; it only seeds the
/// initial queue priority and the flagged reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScreeningRecommendation {
    Approve,
    Review,
    Flag,
    Reject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screening {
    pub recommendation: ScreeningRecommendation,
    /// Heuristic confidence in `0.0..=1.0`.
    pub confidence: f64,
    pub reasons: Vec<String>,
}

lazy_static! {
    static ref SPAM_PATTERNS: Vec<Regex> = [
        r"(?i)\b(?:buy|cheap|free)\s+(?:now|today|money)\b",
        r"(?i)\bclick\s+here\b",
        r"(?i)\b(?:viagra|casino|lottery|crypto\s+giveaway)\b",
        r"(?i)\bwork\s+from\s+home\b",
        r"(?i)https?://\S+\.(?:xyz|top|loan|click)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid spam pattern"))
    .collect();
}

// Longest run of one repeated character that still passes as organic text.
const MAX_CHAR_RUN: usize = 7;

fn longest_char_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;
    for c in text.chars() {
        if Some(c) == previous {
            current += 1;
        } else {
            current = 1;
            previous = Some(c);
        }
        longest = longest.max(current);
    }
    longest
}

/// Rule-based screening of a submission before it enters the queue.
///
/// `existing` are the currently visible hazards used for the duplicate
/// proximity check.
pub fn prescreen_submission(
    submission: &NewHazard,
    region: &RegionPolicy,
    existing: &[Hazard],
) -> Screening {
    let mut signals: Vec<(ScreeningRecommendation, f64, String)> = Vec::new();

    let text = format!("{}\n{}", submission.title, submission.description);
    if SPAM_PATTERNS.iter().any(|pattern| pattern.is_match(&text)) {
        signals.push((
            ScreeningRecommendation::Reject,
            0.9,
            "Matches a known spam pattern".to_string(),
        ));
    }

    if longest_char_run(&text) > MAX_CHAR_RUN {
        signals.push((
            ScreeningRecommendation::Flag,
            0.7,
            "Contains an excessive repeated-character run".to_string(),
        ));
    }

    if submission.title.len() > MAX_TITLE_LEN || submission.description.len() > MAX_DESCRIPTION_LEN
    {
        signals.push((
            ScreeningRecommendation::Flag,
            0.6,
            "Unusually long text".to_string(),
        ));
    }

    match MapPoint::try_from_lat_lng_deg(submission.lat, submission.lng) {
        None => {
            signals.push((
                ScreeningRecommendation::Reject,
                0.95,
                "Coordinates are out of range".to_string(),
            ));
        }
        Some(position) => {
            if !region.bounds.contains_point(position) {
                signals.push((
                    ScreeningRecommendation::Reject,
                    0.8,
                    format!("Location is outside the supported region ({})", region.name),
                ));
            } else if let Some(radius) = region.duplicate_radius {
                let duplicate = existing.iter().find(|hazard| {
                    hazard.category.as_str() == submission.category
                        && !hazard.expiration.is_resolved()
                        && MapPoint::distance(hazard.position, position) <= radius
                });
                if let Some(duplicate) = duplicate {
                    signals.push((
                        ScreeningRecommendation::Flag,
                        0.5,
                        format!("Possible duplicate of hazard {}", duplicate.id),
                    ));
                }
            }
        }
    }

    // The strongest signal decides; ties take the highest confidence.
    let mut recommendation = ScreeningRecommendation::Approve;
    let mut confidence: f64 = 0.9;
    let mut reasons = Vec::with_capacity(signals.len());
    for (rec, conf, reason) in signals {
        if rec > recommendation {
            recommendation = rec;
            confidence = conf;
        } else if rec == recommendation {
            confidence = confidence.max(conf);
        }
        reasons.push(reason);
    }

    Screening {
        recommendation,
        confidence,
        reasons,
    }
}

/// Queue priority for a fresh submission, derived from its severity and
/// raised by an adverse screening verdict.
pub fn initial_priority(severity: Severity, screening: &Screening) -> QueuePriority {
    let base = match severity.to_primitive() {
        5 => QueuePriority::High,
        3..=4 => QueuePriority::Medium,
        _ => QueuePriority::Low,
    };
    let floor = match screening.recommendation {
        ScreeningRecommendation::Reject => QueuePriority::Urgent,
        ScreeningRecommendation::Flag => QueuePriority::High,
        ScreeningRecommendation::Review => QueuePriority::Medium,
        ScreeningRecommendation::Approve => QueuePriority::Low,
    };
    base.max(floor)
}
