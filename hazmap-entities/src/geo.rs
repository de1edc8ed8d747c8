use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CoordParseError {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(String),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(String),
    #[error("Malformed coordinate string: {0}")]
    Malformed(String),
}

/// Geographical latitude in validated degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    pub const DEG_MAX: f64 = 90.0;
    pub const DEG_MIN: f64 = -90.0;

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if deg.is_finite() && (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// Geographical longitude in validated degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    pub const DEG_MAX: f64 = 180.0;
    pub const DEG_MIN: f64 = -180.0;

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if deg.is_finite() && (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical location on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    fn parse_lat_lng_deg(lat_str: &str, lng_str: &str) -> Result<Self, CoordParseError> {
        let lat = lat_str
            .parse::<f64>()
            .ok()
            .and_then(LatCoord::try_from_deg)
            .ok_or_else(|| CoordParseError::Latitude(lat_str.to_string()))?;
        let lng = lng_str
            .parse::<f64>()
            .ok()
            .and_then(LngCoord::try_from_deg)
            .ok_or_else(|| CoordParseError::Longitude(lng_str.to_string()))?;
        Ok(Self::new(lat, lng))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_str, lng_str)) = s.split(',').collect_tuple() {
            Self::parse_lat_lng_deg(lat_str, lng_str)
        } else {
            Err(CoordParseError::Malformed(s.to_string()))
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_200.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface of the earth
    /// using a special case of the Vincenty formula for numerical accuracy.
    /// Reference: https://en.wikipedia.org/wiki/Great-circle_distance
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let (lat1_sin, lat1_cos) = (lat1_rad.sin(), lat1_rad.cos());
        let (lat2_sin, lat2_cos) = (lat2_rad.sin(), lat2_rad.cos());

        let dlng = (lng1_rad - lng2_rad).abs();
        let (dlng_sin, dlng_cos) = (dlng.sin(), dlng.cos());

        let nom1 = lat2_cos * dlng_sin;
        let nom2 = lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlng_cos;

        let nom = (nom1 * nom1 + nom2 * nom2).sqrt();
        let denom = lat1_sin * lat2_sin + lat1_cos * lat2_cos * dlng_cos;

        Distance::from_meters(MEAN_EARTH_RADIUS.to_meters() * nom.atan2(denom))
    }
}

/// An axis-aligned bounding box on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.lat() <= self.ne.lat()
    }

    pub fn is_empty(&self) -> bool {
        self.sw.lat() >= self.ne.lat() || self.sw.lng() == self.ne.lng()
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        if pt.lat() < self.sw.lat() || pt.lat() > self.ne.lat() {
            return false;
        }
        if self.sw.lng() <= self.ne.lng() {
            // regular (inclusive)
            pt.lng() >= self.sw.lng() && pt.lng() <= self.ne.lng()
        } else {
            // inverse, spanning the dateline (exclusive)
            !(pt.lng() > self.ne.lng() && pt.lng() < self.sw.lng())
        }
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}

impl FromStr for MapBbox {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((sw_lat, sw_lng, ne_lat, ne_lng)) = s.split(',').collect_tuple() {
            let sw = MapPoint::parse_lat_lng_deg(sw_lat, sw_lng)?;
            let ne = MapPoint::parse_lat_lng_deg(ne_lat, ne_lng)?;
            Ok(MapBbox::new(sw, ne))
        } else {
            Err(CoordParseError::Malformed(s.to_string()))
        }
    }
}

/// A user-drawn area as an ordered ring of map points.
///
///// Invariant: whenever the ring has at least 3 distinct vertices the first
/// and the last point are identical (closed ring).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon(Vec<MapPoint>);

impl Polygon {
    pub fn new(points: Vec<MapPoint>) -> Self {
        let mut ring = Self(points);
        ring.close();
        ring
    }

    pub fn points(&self) -> &[MapPoint] {
        &self.0
    }

    pub fn into_points(self) -> Vec<MapPoint> {
        self.0
    }

    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Number of vertices including the closing duplicate.
    pub fn vertex_count(&self) -> usize {
        self.0.len()
    }

    fn close(&mut self) {
        if self.0.len() >= 3 && !self.is_closed() {
            let first = self.0[0];
            self.0.push(first);
        }
    }
}

impl From<Vec<MapPoint>> for Polygon {
    fn from(points: Vec<MapPoint>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude() {
        assert_eq!(None, LatCoord::try_from_deg(-90.000001));
        assert_eq!(None, LatCoord::try_from_deg(90.000001));
        assert_eq!(None, LatCoord::try_from_deg(f64::NAN));
        assert_eq!(-90.0, LatCoord::try_from_deg(-90).unwrap().to_deg());
        assert_eq!(90.0, LatCoord::try_from_deg(90).unwrap().to_deg());
    }

    #[test]
    fn longitude() {
        assert_eq!(None, LngCoord::try_from_deg(-180.000001));
        assert_eq!(None, LngCoord::try_from_deg(180.000001));
        assert_eq!(None, LngCoord::try_from_deg(f64::INFINITY));
        assert_eq!(-180.0, LngCoord::try_from_deg(-180).unwrap().to_deg());
        assert_eq!(180.0, LngCoord::try_from_deg(180).unwrap().to_deg());
    }

    #[test]
    fn parse_map_point() {
        let pt: MapPoint = "48.7755,9.1827".parse().unwrap();
        assert_eq!((48.7755, 9.1827), pt.to_lat_lng_deg());
        assert!("48.7755".parse::<MapPoint>().is_err());
        assert!("91.0,9.1827".parse::<MapPoint>().is_err());
        assert!("48.7755,181.0".parse::<MapPoint>().is_err());
    }

    #[test]
    fn no_distance() {
        let p1 = MapPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap();
        assert_eq!(MapPoint::distance(p1, p1).to_meters(), 0.0);

        let p1 = MapPoint::try_from_lat_lng_deg(-15.0, -180.0).unwrap();
        let p2 = MapPoint::try_from_lat_lng_deg(-15.0, 180.0).unwrap();
        assert!(MapPoint::distance(p1, p2).to_meters() < 0.000001);
    }

    #[test]
    fn real_distance() {
        let stuttgart = MapPoint::try_from_lat_lng_deg(48.7755, 9.1827).unwrap();
        let mannheim = MapPoint::try_from_lat_lng_deg(49.4836, 8.4630).unwrap();
        assert!(MapPoint::distance(stuttgart, mannheim) > Distance::from_meters(94_000.0));
        assert!(MapPoint::distance(stuttgart, mannheim) < Distance::from_meters(95_000.0));
    }

    #[test]
    fn positive_distance() {
        use rand::prelude::*;
        let mut rng = rand::thread_rng();
        for _ in 0..1_000 {
            let p1 = MapPoint::try_from_lat_lng_deg(
                rng.gen_range(-90.0..=90.0),
                rng.gen_range(-180.0..=180.0),
            )
            .unwrap();
            let p2 = MapPoint::try_from_lat_lng_deg(
                rng.gen_range(-90.0..=90.0),
                rng.gen_range(-180.0..=180.0),
            )
            .unwrap();
            assert!(MapPoint::distance(p1, p2).to_meters() >= 0.0);
        }
    }

    #[test]
    fn symmetric_distance() {
        let a = MapPoint::try_from_lat_lng_deg(80.0, 0.0).unwrap();
        let b = MapPoint::try_from_lat_lng_deg(90.0, 20.0).unwrap();
        assert_eq!(MapPoint::distance(a, b), MapPoint::distance(b, a));
    }

    #[test]
    fn bbox_contains_point() {
        let sw = MapPoint::try_from_lat_lng_deg(-25.0, -20.0).unwrap();
        let ne = MapPoint::try_from_lat_lng_deg(25.0, 30.0).unwrap();
        let bbox = MapBbox::new(sw, ne);
        assert!(bbox.contains_point(MapPoint::try_from_lat_lng_deg(-10.0, -15.0).unwrap()));
        assert!(!bbox.contains_point(MapPoint::try_from_lat_lng_deg(-26.0, -15.0).unwrap()));
        assert!(bbox.contains_point(MapPoint::try_from_lat_lng_deg(10.0, 20.0).unwrap()));
        assert!(!bbox.contains_point(MapPoint::try_from_lat_lng_deg(26.0, 20.0).unwrap()));
        assert!(!bbox.contains_point(MapPoint::try_from_lat_lng_deg(-10.0, -21.0).unwrap()));
        assert!(!bbox.contains_point(MapPoint::try_from_lat_lng_deg(10.0, 31.0).unwrap()));
    }

    #[test]
    fn bbox_spanning_the_dateline() {
        let sw = MapPoint::try_from_lat_lng_deg(-25.0, 175.0).unwrap();
        let ne = MapPoint::try_from_lat_lng_deg(25.0, -175.0).unwrap();
        let bbox = MapBbox::new(sw, ne);
        assert!(bbox.contains_point(MapPoint::try_from_lat_lng_deg(-10.0, 177.0).unwrap()));
        assert!(bbox.contains_point(MapPoint::try_from_lat_lng_deg(10.0, -177.0).unwrap()));
        assert!(!bbox.contains_point(MapPoint::try_from_lat_lng_deg(-10.0, 174.0).unwrap()));
        assert!(!bbox.contains_point(MapPoint::try_from_lat_lng_deg(10.0, -174.0).unwrap()));
    }

    #[test]
    fn close_open_ring() {
        let ring = Polygon::new(vec![
            MapPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap(),
            MapPoint::try_from_lat_lng_deg(0.0, 1.0).unwrap(),
            MapPoint::try_from_lat_lng_deg(1.0, 1.0).unwrap(),
        ]);
        assert!(ring.is_closed());
        assert_eq!(4, ring.vertex_count());
    }

    #[test]
    fn keep_closed_ring() {
        let ring = Polygon::new(vec![
            MapPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap(),
            MapPoint::try_from_lat_lng_deg(0.0, 1.0).unwrap(),
            MapPoint::try_from_lat_lng_deg(1.0, 1.0).unwrap(),
            MapPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap(),
        ]);
        assert!(ring.is_closed());
        assert_eq!(4, ring.vertex_count());
    }

    #[test]
    fn degenerate_rings_stay_open() {
        let ring = Polygon::new(vec![
            MapPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap(),
            MapPoint::try_from_lat_lng_deg(0.0, 1.0).unwrap(),
        ]);
        assert!(!ring.is_closed());
        assert_eq!(2, ring.vertex_count());
    }
}
