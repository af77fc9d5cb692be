use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::renderer::{PlotRequest, PointRenderer};
use crate::error::{FarsError, Result};

/// Axes narrower than this many degrees are widened so a lone point
/// still gets a drawable chart.
const MIN_SPAN_DEGREES: f64 = 0.5;
const POINT_RADIUS: i32 = 3;

/// Draws accident maps to an SVG file: a captioned longitude/latitude mesh
/// clipped to the request bounds, with one dot per accident.
pub struct SvgRenderer {
    output: PathBuf,
    width: u32,
    height: u32,
}

impl SvgRenderer {
    pub fn new(output: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            output: output.into(),
            width,
            height,
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl PointRenderer for SvgRenderer {
    fn render(&mut self, request: &PlotRequest<'_>) -> Result<()> {
        let bounds = request.bounds.widened(MIN_SPAN_DEGREES);

        let root = SVGBackend::new(&self.output, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&request.title, ("sans-serif", 24).into_font())
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(45)
            .build_cartesian_2d(
                bounds.min_longitude..bounds.max_longitude,
                bounds.min_latitude..bounds.max_latitude,
            )
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc("Longitude")
            .y_desc("Latitude")
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(request.points.iter().map(|p| {
                Circle::new((p.longitude, p.latitude), POINT_RADIUS, RED.filled())
            }))
            .map_err(render_error)?;

        root.present().map_err(render_error)?;

        debug!(
            output = %self.output.display(),
            region = request.region,
            points = request.points.len(),
            "Rendered accident map"
        );
        Ok(())
    }
}

fn render_error(e: impl std::fmt::Display) -> FarsError {
    FarsError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::renderer::Bounds;
    use crate::record::GeoPoint;

    #[test]
    fn test_renders_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("alabama.svg");
        let points = [
            GeoPoint {
                longitude: -86.5,
                latitude: 32.4,
            },
            GeoPoint {
                longitude: -87.1,
                latitude: 33.2,
            },
        ];
        let request = PlotRequest {
            region: "state",
            title: "Alabama, 2013".to_string(),
            bounds: Bounds::from_points(&points).unwrap(),
            points: &points,
        };

        let mut renderer = SvgRenderer::new(&output, 640, 480);
        renderer.render(&request).unwrap();

        let svg = std::fs::read_to_string(renderer.output()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("Alabama, 2013"));
    }
}
