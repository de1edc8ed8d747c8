//! Polygon simplification for user-drawn hazard areas.
//!
//! Douglas-Peucker reduction plus an area-tiered driver that keeps the
//! vertex count of any submitted ring within a fixed budget. All distances
//! are planar in degree space which is good enough for the small areas
//! users actually draw.

use crate::entities::*;

/// Tolerance growth factor per escalation round.
const TOLERANCE_GROWTH: f64 = 1.5;

/// Upper bound for the escalated tolerance in degrees.
const MAX_TOLERANCE: f64 = 0.01;

/// Vertex budget and base tolerance for one area tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplifyTier {
    /// Base Douglas-Peucker tolerance in degrees.
    pub tolerance: f64,
    /// Maximum number of distinct vertices. The closing duplicate is not
    /// counted, i.e. a closed ring may have `max_vertices + 1` points.
    pub max_vertices: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplifyConfig {
    /// Rings up to 0.1 km².
    pub small: SimplifyTier,
    /// Rings up to 1.0 km².
    pub medium: SimplifyTier,
    /// Everything larger.
    pub large: SimplifyTier,
}

impl SimplifyConfig {
    pub const SMALL_AREA_KM2: f64 = 0.1;
    pub const MEDIUM_AREA_KM2: f64 = 1.0;

    pub fn tier_for_area(&self, area_km2: f64) -> SimplifyTier {
        if area_km2 <= Self::SMALL_AREA_KM2 {
            self.small
        } else if area_km2 <= Self::MEDIUM_AREA_KM2 {
            self.medium
        } else {
            self.large
        }
    }
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            small: SimplifyTier {
                tolerance: 0.0001,
                max_vertices: 40,
            },
            medium: SimplifyTier {
                tolerance: 0.0005,
                max_vertices: 25,
            },
            large: SimplifyTier {
                tolerance: 0.001,
                max_vertices: 15,
            },
        }
    }
}

/// Distance of `pt` from the infinite line through `a` and `b`, all in
/// planar degree space. Falls back to the point distance from `a` when the
/// reference segment is degenerate.
fn line_distance(pt: MapPoint, a: MapPoint, b: MapPoint) -> f64 {
    let (ay, ax) = a.to_lat_lng_deg();
    let (by, bx) = b.to_lat_lng_deg();
    let (py, px) = pt.to_lat_lng_deg();
    let dx = bx - ax;
    let dy = by - ay;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        let ex = px - ax;
        let ey = py - ay;
        return (ex * ex + ey * ey).sqrt();
    }
    ((px - ax) * dy - (py - ay) * dx).abs() / len
}

fn douglas_peucker(points: &[MapPoint], tolerance: f64) -> Vec<MapPoint> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let first = points[0];
    let last = points[points.len() - 1];
    let mut max_dist = 0.0;
    let mut max_idx = 0;
    for (idx, pt) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let dist = line_distance(*pt, first, last);
        if dist > max_dist {
            max_dist = dist;
            max_idx = idx;
        }
    }
    if max_dist > tolerance {
        let mut left = douglas_peucker(&points[..=max_idx], tolerance);
        let right = douglas_peucker(&points[max_idx..], tolerance);
        // Drop the duplicated junction point.
        left.pop();
        left.extend(right);
        left
    } else {
        vec![first, last]
    }
}

fn close_ring(mut points: Vec<MapPoint>) -> Vec<MapPoint> {
    if points.len() >= 3 && points.first() != points.last() {
        let first = points[0];
        points.push(first);
    }
    points
}

/// Douglas-Peucker simplification of a point sequence.
///
/// Sequences with two or fewer points pass through unchanged; the result is
/// re-closed whenever it has at least three points.
pub fn simplify_polygon(points: &[MapPoint], tolerance: f64) -> Vec<MapPoint> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    close_ring(douglas_peucker(points, tolerance))
}

/// Approximate area of a ring in km².
///
/// Shoelace formula over degrees, scaled by the cosine of the mean latitude.
/// Not geodesically exact, but sufficient to pick a simplification tier.
pub fn ring_area_km2(points: &[MapPoint]) -> f64 {
    const KM_PER_DEG: f64 = 111.32;
    // Ignore the closing duplicate.
    let open = if points.len() >= 2 && points.first() == points.last() {
        &points[..points.len() - 1]
    } else {
        points
    };
    if open.len() < 3 {
        return 0.0;
    }
    let mut twice_area_deg2 = 0.0;
    let mut lat_sum = 0.0;
    for (idx, pt) in open.iter().enumerate() {
        let (lat1, lng1) = pt.to_lat_lng_deg();
        let (lat2, lng2) = open[(idx + 1) % open.len()].to_lat_lng_deg();
        twice_area_deg2 += lng1 * lat2 - lng2 * lat1;
        lat_sum += lat1;
    }
    let mean_lat_rad = (lat_sum / open.len() as f64).to_radians();
    (twice_area_deg2 / 2.0).abs() * KM_PER_DEG * KM_PER_DEG * mean_lat_rad.cos()
}

/// Uniform stride sampling of every Nth point, keeping the first one.
fn stride_sample(points: &[MapPoint], max_vertices: usize) -> Vec<MapPoint> {
    debug_assert!(max_vertices >= 3);
    let stride = points.len().div_ceil(max_vertices);
    points
        .iter()
        .step_by(stride.max(1))
        .copied()
        .collect()
}

/// Area-tiered polygon simplification.
///
/// Selects a tolerance/vertex budget from the ring's approximate area, then
/// escalates the tolerance until the vertex count is within budget. If even
/// the capped tolerance is not enough, falls back to stride sampling. The
/// result never has more than `max_vertices + 1` points (including the
/// closing duplicate) and is always closed when it has at least 3 points.
pub fn auto_simplify_polygon(polygon: &Polygon, config: &SimplifyConfig) -> Polygon {
    let points = polygon.points();
    if points.len() <= 2 {
        return polygon.clone();
    }
    let tier = config.tier_for_area(ring_area_km2(points));
    let budget = tier.max_vertices + 1;

    let mut tolerance = tier.tolerance;
    let mut simplified = simplify_polygon(points, tolerance);
    while simplified.len() > budget && tolerance < MAX_TOLERANCE {
        tolerance = (tolerance * TOLERANCE_GROWTH).min(MAX_TOLERANCE);
        simplified = simplify_polygon(points, tolerance);
    }
    if simplified.len() > budget {
        // Strip the closing duplicate before sampling, re-close afterwards.
        let open = &points[..points.len() - 1];
        simplified = close_ring(stride_sample(open, tier.max_vertices));
    }
    debug_assert!(simplified.len() <= budget);
    Polygon::new(simplified)
}
