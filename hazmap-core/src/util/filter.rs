//! Pure helpers that keep map views responsive: viewport filtering,
//! a marker budget for crowded viewports and a cluster-radius heuristic.

use crate::entities::*;

/// Hazards whose position lies within the given viewport.
pub fn within_viewport<'a>(hazards: &'a [Hazard], viewport: &MapBbox) -> Vec<&'a Hazard> {
    hazards
        .iter()
        .filter(|hazard| viewport.contains_point(hazard.position))
        .collect()
}

/// Keeps at most `budget` markers, preferring high severity and recency.
pub fn apply_marker_budget<'a>(hazards: &[&'a Hazard], budget: usize) -> Vec<&'a Hazard> {
    if hazards.len() <= budget {
        return hazards.to_vec();
    }
    let mut ranked = hazards.to_vec();
    ranked.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| b.created.at.cmp(&a.created.at))
    });
    ranked.truncate(budget);
    ranked
}

/// Marker cluster radius in pixels for a map zoom level.
///
/// Wide zoom levels cluster aggressively, street-level zoom not at all.
pub fn cluster_radius(zoom: u8) -> u32 {
    match zoom {
        0..=8 => 80,
        9..=10 => 60,
        11..=12 => 50,
        13..=14 => 40,
        15..=16 => 25,
        _ => 0,
    }
}
