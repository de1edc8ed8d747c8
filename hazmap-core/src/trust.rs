//! Trust score tiers.
//!
//! The tier table is static and derived, never stored.

use crate::entities::TrustScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustTier {
    pub name: &'static str,
    pub min_score: TrustScore,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Ordered by ascending minimum score.
#[rustfmt::skip]
pub const TRUST_TIERS: [TrustTier; 6] = [
    TrustTier { name: "New User",         min_score:    0, icon: "seedling", color: "#9e9e9e" },
    TrustTier { name: "Contributor",      min_score:   50, icon: "leaf",     color: "#8bc34a" },
    TrustTier { name: "Trusted",          min_score:  200, icon: "shield",   color: "#03a9f4" },
    TrustTier { name: "Community Leader", min_score:  500, icon: "star",     color: "#673ab7" },
    TrustTier { name: "Expert",           min_score: 1000, icon: "award",    color: "#ff9800" },
    TrustTier { name: "Guardian",         min_score: 2000, icon: "crown",    color: "#ffd700" },
];

pub fn tier_for_score(score: TrustScore) -> &'static TrustTier {
    TRUST_TIERS
        .iter()
        .rev()
        .find(|tier| score >= tier.min_score)
        .unwrap_or(&TRUST_TIERS[0])
}

/// Percentage progress within the current tier's score band.
///
/// Returns 0.0 at a tier's minimum score and approaches 100.0 towards the
/// next tier's minimum; at or above the maximum tier's threshold the
/// progress is always 100.0.
pub fn tier_progress(score: TrustScore) -> f64 {
    let current = tier_for_score(score);
    let next_min = TRUST_TIERS
        .iter()
        .find(|tier| tier.min_score > current.min_score)
        .map(|tier| tier.min_score);
    match next_min {
        Some(next_min) => {
            let band = (next_min - current.min_score) as f64;
            let into_band = (score.max(0) - current.min_score) as f64;
            (into_band / band * 100.0).clamp(0.0, 100.0)
        }
        None => 100.0,
    }
}
