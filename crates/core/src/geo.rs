//! Geographic primitives and the containment predicate.
//!
//! Coordinates are (latitude, longitude) pairs, matching the data source:
//! "vertical" is latitude and "horizontal" is longitude, the opposite of
//! the usual screen (x, y) framing. Conversion to any other convention
//! happens at the boundary only.

use serde::{Deserialize, Serialize};

/// A geographic coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// A building footprint: an ordered outer ring of vertices.
///
/// The ring is implicitly closed: the last vertex connects back to the
/// first. Holes and multi-polygon footprints are not represented.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    vertices: Vec<LatLon>,
}

impl Ring {
    pub fn new(vertices: Vec<LatLon>) -> Self {
        Self { vertices }
    }

    pub fn points(&self) -> &[LatLon] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A ring with fewer than 3 vertices encloses no area.
    ///
    /// Degenerate rings are still accepted by [`Ring::contains`]; they
    /// classify every point as outside.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Even-odd (crossing number) point-in-ring test.
    ///
    /// Walks the closed edge ring with a trailing index. An edge toggles
    /// the inside flag when it straddles the point's longitude (half-open,
    /// so a shared vertex is counted for exactly one of its two edges) and
    /// its latitude interpolated at the point's longitude lies strictly
    /// above the point's latitude. O(vertices), no allocation.
    ///
    /// A point exactly on an edge or vertex gets an arbitrary but
    /// panic-free classification.
    ///
    /// # Example
    /// ```
    /// use addrmerge_core::{LatLon, Ring};
    ///
    /// let square = Ring::new(vec![
    ///     LatLon::new(0.0, 0.0),
    ///     LatLon::new(0.0, 10.0),
    ///     LatLon::new(10.0, 10.0),
    ///     LatLon::new(10.0, 0.0),
    /// ]);
    /// assert!(square.contains(LatLon::new(5.0, 5.0)));
    /// assert!(!square.contains(LatLon::new(15.0, 5.0)));
    /// ```
    pub fn contains(&self, point: LatLon) -> bool {
        let ring = &self.vertices;
        let mut inside = false;
        let mut j = ring.len().wrapping_sub(1);
        for i in 0..ring.len() {
            let (a, b) = (ring[i], ring[j]);
            let straddles = (a.lon <= point.lon && point.lon < b.lon)
                || (b.lon <= point.lon && point.lon < a.lon);
            // straddles implies a.lon != b.lon, so the division is safe
            if straddles {
                let crossing_lat = (b.lat - a.lat) * (point.lon - a.lon) / (b.lon - a.lon) + a.lat;
                if point.lat < crossing_lat {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}
