//! Per-state accident maps.
//!
//! [`Dataset::plot_state`] selects one state's accidents for a year, drops
//! rows without a usable location and hands the rest to a [`PointRenderer`].
//! [`SvgRenderer`] is the file-backed renderer used by the CLI.

mod renderer;
mod svg;

pub use renderer::{Bounds, PlotRequest, PointRenderer};
pub use svg::SvgRenderer;

use serde::Serialize;
use tracing::info;

use crate::dataset::Dataset;
use crate::error::{FarsError, Result};
use crate::filename::IntoYear;
use crate::record::{AccidentRecord, GeoPoint};
use crate::states::state_label;

/// Base-map region requested from the renderer.
pub const BASE_MAP_REGION: &str = "state";

/// What [`Dataset::plot_state`] did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlotOutcome {
    /// The map was drawn with `points` dots; `skipped` rows had no location.
    Rendered {
        points: usize,
        skipped: usize,
        bounds: Bounds,
    },
    /// The state has no accidents in that year; nothing was drawn.
    NoAccidents,
    /// The state has accidents but none with a known location.
    NoLocations { records: usize },
}

/// Locations of the given rows with unknown/sentinel coordinates removed.
/// The rows themselves are not modified.
pub fn valid_locations<'a>(records: impl IntoIterator<Item = &'a AccidentRecord>) -> Vec<GeoPoint> {
    records
        .into_iter()
        .filter_map(AccidentRecord::location)
        .collect()
}

impl Dataset {
    /// Draws the accidents of `state` in `year` through `renderer`.
    ///
    /// A state with no rows (or none with a usable location) is reported in
    /// the outcome and logged; the renderer is not called.
    ///
    /// # Errors
    ///
    /// - [`FarsError::NotFound`] if the year's file is absent.
    /// - [`FarsError::InvalidState`] if `state` is not in the STATE column,
    ///   even when it is a known state code.
    /// - Whatever the renderer returns.
    pub fn plot_state<R>(
        &self,
        state: u32,
        year: impl IntoYear,
        renderer: &mut R,
    ) -> Result<PlotOutcome>
    where
        R: PointRenderer + ?Sized,
    {
        let year = year.into_year();
        let table = self.load_year(year)?;

        if !table.contains_state(state) {
            return Err(FarsError::InvalidState(state));
        }

        let rows = table.for_state(state);
        if rows.is_empty() {
            info!(state, year, "no accidents to plot");
            return Ok(PlotOutcome::NoAccidents);
        }

        let points = valid_locations(rows.iter().copied());
        let skipped = rows.len() - points.len();

        let Some(bounds) = Bounds::from_points(&points) else {
            info!(state, year, records = rows.len(), "no accident locations to plot");
            return Ok(PlotOutcome::NoLocations {
                records: rows.len(),
            });
        };

        let request = PlotRequest {
            region: BASE_MAP_REGION,
            title: format!("Fatal accidents in {}, {year}", state_label(state)),
            bounds,
            points: &points,
        };
        renderer.render(&request)?;

        info!(state, year, points = points.len(), skipped, "Accident map rendered");
        Ok(PlotOutcome::Rendered {
            points: points.len(),
            skipped,
            bounds,
        })
    }
}
