use serde::Serialize;

use crate::error::Result;
use crate::record::GeoPoint;

/// Longitude/latitude extent of a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
}

impl Bounds {
    /// Smallest box holding every point; `None` for an empty slice.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut b = Bounds {
            min_longitude: first.longitude,
            max_longitude: first.longitude,
            min_latitude: first.latitude,
            max_latitude: first.latitude,
        };
        for p in rest {
            b.min_longitude = b.min_longitude.min(p.longitude);
            b.max_longitude = b.max_longitude.max(p.longitude);
            b.min_latitude = b.min_latitude.min(p.latitude);
            b.max_latitude = b.max_latitude.max(p.latitude);
        }
        Some(b)
    }

    /// Grows a degenerate axis to at least `min_span` degrees, centred on
    /// the original extent. Non-degenerate axes are left alone.
    pub fn widened(&self, min_span: f64) -> Self {
        fn widen(lo: f64, hi: f64, min_span: f64) -> (f64, f64) {
            if hi - lo >= min_span {
                return (lo, hi);
            }
            let mid = (lo + hi) / 2.0;
            (mid - min_span / 2.0, mid + min_span / 2.0)
        }

        let (min_longitude, max_longitude) =
            widen(self.min_longitude, self.max_longitude, min_span);
        let (min_latitude, max_latitude) = widen(self.min_latitude, self.max_latitude, min_span);
        Bounds {
            min_longitude,
            max_longitude,
            min_latitude,
            max_latitude,
        }
    }
}

/// Everything a renderer needs to draw one state map.
#[derive(Debug, Clone, Serialize)]
pub struct PlotRequest<'a> {
    /// Base-map region name handed to the drawing surface.
    pub region: &'a str,
    pub title: String,
    pub bounds: Bounds,
    pub points: &'a [GeoPoint],
}

/// A drawing surface for accident point maps.
pub trait PointRenderer {
    fn render(&mut self, request: &PlotRequest<'_>) -> Result<()>;
}
