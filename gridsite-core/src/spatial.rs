//! Great-circle distance and location filtering.
//!
//! Points use `geo` conventions: `x` is longitude and `y` latitude, both in
//! decimal degrees.

use std::borrow::Cow;
use std::collections::BTreeSet;

use geo::Point;
use log::debug;

use crate::{LocationFilter, NodeTable, RadialFilter, StateCode};

/// Mean Earth radius used for haversine distances, km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, km.
///
/// # Examples
/// ```
/// use geo::Point;
/// use gridsite_core::haversine_km;
///
/// let one_degree = haversine_km(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
/// assert!((one_degree - 111.19).abs() < 0.01);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is trigonometric arithmetic"
)]
#[must_use]
pub fn haversine_km(from: Point<f64>, to: Point<f64>) -> f64 {
    let from_lat = from.y().to_radians();
    let to_lat = to.y().to_radians();
    let half_dlat = (to_lat - from_lat) / 2.0;
    let half_dlon = (to.x() - from.x()).to_radians() / 2.0;
    let a = half_dlat.sin().powi(2) + from_lat.cos() * to_lat.cos() * half_dlon.sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

/// Distance from `center` to every node in `table`, km, in row order.
#[must_use]
pub fn distances_km(table: &NodeTable, center: Point<f64>) -> Vec<f64> {
    let metrics = table.metrics();
    metrics
        .latitude
        .iter()
        .zip(&metrics.longitude)
        .map(|(&lat, &lon)| haversine_km(center, Point::new(lon, lat)))
        .collect()
}

fn state_mask(table: &NodeTable, states: &BTreeSet<StateCode>) -> Vec<bool> {
    table
        .states()
        .iter()
        .map(|state| states.iter().any(|code| code.matches(state)))
        .collect()
}

fn radius_mask(table: &NodeTable, filter: &RadialFilter) -> Vec<bool> {
    distances_km(table, filter.center())
        .into_iter()
        .map(|distance| distance <= filter.radius_km())
        .collect()
}

/// Restrict `table` to the nodes matching `filter`.
///
/// [`LocationFilter::None`] borrows the input unchanged. Other modes build a
/// new table, which may be empty.
#[must_use]
pub fn apply_location_filter<'a>(
    table: &'a NodeTable,
    filter: &LocationFilter,
) -> Cow<'a, NodeTable> {
    let mask = match filter {
        LocationFilter::None => return Cow::Borrowed(table),
        LocationFilter::ByStates(states) => state_mask(table, states),
        LocationFilter::ByRadius(radial) => radius_mask(table, radial),
    };
    let filtered = table.select(&mask);
    debug!(
        "Location filter kept {} of {} nodes",
        filtered.len(),
        table.len()
    );
    Cow::Owned(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Point::new(-122.4, 37.8), Point::new(-118.2, 34.1), 559.0)]
    #[case(Point::new(0.0, 0.0), Point::new(180.0, 0.0), 20_015.1)]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn known_distances(#[case] from: Point<f64>, #[case] to: Point<f64>, #[case] expected: f64) {
        let distance = haversine_km(from, to);
        assert!((distance - expected).abs() < 1.0, "got {distance}");
    }

    #[rstest]
    fn identical_points_are_zero_apart() {
        let point = Point::new(-97.7, 30.3);
        assert!(haversine_km(point, point).abs() < 1e-9);
    }
}
