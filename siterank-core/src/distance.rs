//! Great-circle distance on a spherical Earth.

use geo::Coord;

/// Earth radius in metres used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Compute the great-circle distance between two coordinates in whole metres.
///
/// Uses the haversine formula with [`EARTH_RADIUS_M`] and rounds to the
/// nearest metre. Identical points return `0`; antipodal points return
/// roughly half the Earth's circumference (~20,015,087 m).
///
/// Latitude and longitude ranges are not validated: out-of-range inputs
/// produce mathematically defined but geographically meaningless results.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use siterank_core::haversine_distance_m;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// assert_eq!(haversine_distance_m(origin, origin), 0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the haversine formula is inherently floating point; the rounded \
              result is non-negative and bounded by half the Earth's \
              circumference, well within u32"
)]
pub fn haversine_distance_m(a: Coord, b: Coord) -> u32 {
    let phi_a = a.y.to_radians();
    let phi_b = b.y.to_radians();
    let delta_phi = (b.y - a.y).to_radians();
    let delta_lambda = (b.x - a.x).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    (EARTH_RADIUS_M * c).round() as u32
}
