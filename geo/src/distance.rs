//! Distance calculations over the WGS-84 ellipsoid.
//!
//! Three strategies in increasing order of accuracy and cost: spherical law of
//! cosines with a latitude-corrected radius, haversine on a sphere of equatorial
//! radius and the iterative Vincenty inverse solver.  Vincenty is the reference,
//! the spherical ones are for quick estimates and comparisons.
//!
//! All latitudes and longitudes are in decimal degrees, all distances in km.
//!
use serde::{Deserialize, Serialize};
use strum::EnumString;
use tracing::trace;

use crate::GeoError;

/// WGS-84 equatorial radius in km
pub const EQUATORIAL_RADIUS_KM: f64 = 6378.137;
/// WGS-84 polar radius in km
pub const POLAR_RADIUS_KM: f64 = 6356.7523142;
/// WGS-84 flattening
const FLATTENING: f64 = 1. / 298.257223563;

/// Convergence threshold on the Vincenty λ iterate, in radians
const ACCEPTABLE_ACCURACY: f64 = 0.00001;
/// Iteration budget for the Vincenty solver
pub const MAX_ITERATIONS: u32 = 20;

/// All supported ways of computing a distance between two points.
///
/// `Vincenty` is the default and the one leg lengths are built from.
///
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    Eq,
    strum::Display,
    EnumString,
    Serialize,
    strum::VariantNames,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DistanceMethod {
    /// Spherical law of cosines on a latitude-corrected radius
    LawOfCosines,
    /// Haversine on a sphere of equatorial radius
    Haversine,
    /// Iterative inverse solver on the full ellipsoid
    #[default]
    Vincenty,
}

impl DistanceMethod {
    /// Distance between two points using this method.
    ///
    #[tracing::instrument]
    pub fn distance_km(self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, GeoError> {
        match self {
            DistanceMethod::LawOfCosines => Ok(law_of_cosines_km(lat1, lon1, lat2, lon2)),
            DistanceMethod::Haversine => Ok(haversine_km(lat1, lon1, lat2, lon2)),
            DistanceMethod::Vincenty => vincenty_km(lat1, lon1, lat2, lon2),
        }
    }
}

/// Local earth radius at the mean latitude, the 21 km equatorial bulge scaled
/// by the sine of the latitude.
///
#[inline]
fn corrected_radius_km(mean_lat_rad: f64) -> f64 {
    EQUATORIAL_RADIUS_KM - 21. * mean_lat_rad.sin()
}

/// Spherical law of cosines with the latitude-corrected radius.
///
pub fn law_of_cosines_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta = (lon2 - lon1).to_radians();

    let arg = phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * delta.cos();
    // Rounding can push the sum past 1.0 for coincident points, keep acos in
    // its domain.
    let arg = arg.clamp(-1., 1.);
    corrected_radius_km((phi1 + phi2) / 2.) * arg.acos()
}

/// Haversine distance on a sphere of equatorial radius.
///
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let lat_h = ((lat2 - lat1).to_radians() / 2.).sin().powi(2);
    let lon_h = ((lon2 - lon1).to_radians() / 2.).sin().powi(2);

    let a = lat_h + phi1.cos() * phi2.cos() * lon_h;
    EQUATORIAL_RADIUS_KM * 2. * a.sqrt().atan2((1. - a).sqrt())
}

/// Vincenty inverse solver on the WGS-84 ellipsoid.
///
/// See [movable-type](http://www.movable-type.co.uk/scripts/LatLongVincenty.html)
/// for the derivation.  Well-separated points converge in 2-3 iterations,
/// near-antipodal pairs can oscillate forever which is why the iteration
/// budget turns into [`GeoError::NoConvergence`] instead of an approximation.
///
#[tracing::instrument]
pub fn vincenty_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, GeoError> {
    // The solver divides by sin σ which is 0 for coincident points.
    if lat1 == lat2 && lon1 == lon2 {
        return Ok(0.);
    }

    let f = FLATTENING;
    let lon_diff = (lon2 - lon1).to_radians();
    let u1 = ((1. - f) * lat1.to_radians().tan()).atan();
    let u2 = ((1. - f) * lat2.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = lon_diff;
    let mut prev_lambda = 2. * std::f64::consts::PI;
    let mut budget = MAX_ITERATIONS;

    let mut sin_sigma = 0.;
    let mut cos_sigma = 0.;
    let mut sigma = 0.;
    let mut cos_sq_alpha = 0.;
    let mut cos2_sigma_m = 0.;

    while (lambda - prev_lambda).abs() > ACCEPTABLE_ACCURACY && budget > 0 {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0. {
            // Equal points on the rounded ellipsoid
            return Ok(0.);
        }
        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);
        let alpha = (cos_u1 * cos_u2 * sin_lambda / sin_sigma).asin();
        cos_sq_alpha = alpha.cos() * alpha.cos();
        cos2_sigma_m = cos_sigma - 2. * sin_u1 * sin_u2 / cos_sq_alpha;
        let c = f / 16. * cos_sq_alpha * (4. + f * (4. - 3. * cos_sq_alpha));
        prev_lambda = lambda;
        lambda = lon_diff
            + (1. - c)
                * f
                * alpha.sin()
                * (sigma
                    + c * sin_sigma
                        * (cos2_sigma_m
                            + c * cos_sigma * (-1. + 2. * cos2_sigma_m * cos2_sigma_m)));
        budget -= 1;
    }
    if budget == 0 {
        return Err(GeoError::NoConvergence(MAX_ITERATIONS));
    }
    trace!("converged after {} iterations", MAX_ITERATIONS - budget);

    let eq_sq = EQUATORIAL_RADIUS_KM * EQUATORIAL_RADIUS_KM;
    let pol_sq = POLAR_RADIUS_KM * POLAR_RADIUS_KM;
    let u_sq = cos_sq_alpha * (eq_sq - pol_sq) / pol_sq;
    let big_a = 1. + u_sq / 16384. * (4096. + u_sq * (-768. + u_sq * (320. - 175. * u_sq)));
    let big_b = u_sq / 1024. * (256. + u_sq * (-128. + u_sq * (74. - 47. * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos2_sigma_m
            + big_b / 4.
                * (cos_sigma * (-1. + 2. * cos2_sigma_m * cos2_sigma_m)
                    - big_b / 6.
                        * cos2_sigma_m
                        * (-3. + 4. * sin_sigma * sin_sigma)
                        * (-3. + 4. * cos2_sigma_m * cos2_sigma_m)));

    Ok(POLAR_RADIUS_KM * big_a * (sigma - delta_sigma))
}

/// Fold any angle into (-180, 180] degrees.
///
pub fn normalized_degrees(direction: f64) -> f64 {
    let degrees = direction % 360.;
    if degrees > 180. {
        degrees - 360.
    } else if degrees <= -180. {
        degrees + 360.
    } else {
        degrees
    }
}

/// Same fold, result in radians.
///
pub fn normalized_radians(direction_degrees: f64) -> f64 {
    normalized_degrees(direction_degrees).to_radians()
}

/// A point on the unit sphere, for cross-track geometry.
///
#[derive(Clone, Copy, Debug)]
struct UnitVector {
    x: f64,
    y: f64,
    z: f64,
}

impl UnitVector {
    fn from_lat_lon(lat: f64, lon: f64) -> Self {
        let (sin_lat, cos_lat) = lat.to_radians().sin_cos();
        let (sin_lon, cos_lon) = lon.to_radians().sin_cos();
        UnitVector {
            x: cos_lat * cos_lon,
            y: cos_lat * sin_lon,
            z: sin_lat,
        }
    }

    fn cross(&self, rhs: &Self) -> Self {
        UnitVector {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    fn dot(&self, rhs: &Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    fn normalized(&self) -> Self {
        let norm = self.dot(self).sqrt();
        UnitVector {
            x: self.x / norm,
            y: self.y / norm,
            z: self.z / norm,
        }
    }
}

/// Dot product of (b - a) and (c - b) in plain lat/lon coordinates, enough to
/// tell on which side of the segment ends a point projects.
///
#[inline]
fn planar_dot(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    let ab = (b.0 - a.0, b.1 - a.1);
    let bc = (c.0 - b.0, c.1 - b.1);
    ab.1 * bc.1 + ab.0 * bc.0
}

/// Cross-track distance from `point` to the great circle through the segment.
///
fn cross_track_km(start: (f64, f64), end: (f64, f64), point: (f64, f64)) -> f64 {
    let sv = UnitVector::from_lat_lon(start.0, start.1);
    let ev = UnitVector::from_lat_lon(end.0, end.1);
    let pv = UnitVector::from_lat_lon(point.0, point.1);
    let pole = ev.cross(&sv).normalized();

    let angle = std::f64::consts::FRAC_PI_2 - pv.dot(&pole).acos();
    let mean_lat = ((start.0 + end.0 + point.0) / 3.).to_radians();
    (angle * corrected_radius_km(mean_lat)).abs()
}

/// Distance from a point to a great-circle segment, in km.
///
/// When the point projects outside the segment this is the Vincenty distance
/// to the nearer endpoint, otherwise the cross-track distance to the great
/// circle through both ends.  Points are `(latitude, longitude)` pairs.
///
#[tracing::instrument]
pub fn segment_distance_km(
    start: (f64, f64),
    end: (f64, f64),
    point: (f64, f64),
) -> Result<f64, GeoError> {
    if planar_dot(start, end, point) > 0. {
        return vincenty_km(end.0, end.1, point.0, point.1);
    }
    if planar_dot(end, start, point) > 0. {
        return vincenty_km(start.0, start.1, point.0, point.1);
    }
    Ok(cross_track_km(start, end, point))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(DistanceMethod::LawOfCosines)]
    #[case(DistanceMethod::Haversine)]
    #[case(DistanceMethod::Vincenty)]
    fn test_identity_is_zero(#[case] method: DistanceMethod) {
        for (lat, lon) in [(0., 0.), (52.7, -8.92), (-33.9, 18.4), (89.9, 179.9)] {
            let d = method.distance_km(lat, lon, lat, lon).unwrap();
            assert!(d.abs() < 1e-6, "{method} at ({lat}, {lon}) gave {d}");
        }
    }

    // Lizard Point to Dunnet Head, the canonical Vincenty test pair.
    #[test]
    fn test_vincenty_reference_pair() {
        let d = vincenty_km(50.06632, -5.71475, 58.64402, -3.07000).unwrap();
        assert!((d - 969.9551518747337).abs() < 1e-7);
    }

    #[rstest]
    #[case(DistanceMethod::Vincenty, 835.7695902110497)]
    #[case(DistanceMethod::Haversine, 834.5533089954447)]
    #[case(DistanceMethod::LawOfCosines, 832.3660828181393)]
    fn test_methods_belfast_brussels(#[case] method: DistanceMethod, #[case] expected: f64) {
        let d = method.distance_km(54.7, -6.2, 50.8, 4.4).unwrap();
        assert!((d - expected).abs() < 1e-7, "{method} gave {d}");
    }

    #[rstest]
    #[case(179.5)]
    #[case(179.7)]
    fn test_vincenty_antipodal_no_convergence(#[case] lon: f64) {
        let r = vincenty_km(0., 0., 0.5, lon);
        assert_eq!(Err(GeoError::NoConvergence(MAX_ITERATIONS)), r);
    }

    #[test]
    fn test_vincenty_near_antipodal_converges() {
        let d = vincenty_km(0., 0., 1.0, 179.0).unwrap();
        assert!((d - 19860.52238655874).abs() < 1e-7);
    }

    #[test]
    fn test_spherical_methods_agree_on_short_legs() {
        let h = haversine_km(52.700, -8.920, 52.709, -8.920);
        let v = vincenty_km(52.700, -8.920, 52.709, -8.920).unwrap();
        assert!((h - v).abs() < 0.01);
    }

    #[rstest]
    #[case(0., 0.)]
    #[case(90., 90.)]
    #[case(-90., -90.)]
    #[case(180., 180.)]
    #[case(-180., 180.)]
    #[case(181., -179.)]
    #[case(-181., 179.)]
    #[case(270., -90.)]
    #[case(-270., 90.)]
    #[case(359., -1.)]
    #[case(-359., 1.)]
    #[case(360., 0.)]
    #[case(540., 180.)]
    #[case(-540., 180.)]
    #[case(720., 0.)]
    #[case(810., 90.)]
    fn test_normalized_degrees(#[case] inp: f64, #[case] out: f64) {
        assert_eq!(out, normalized_degrees(inp));
    }

    #[test]
    fn test_normalized_radians() {
        assert!((normalized_radians(-180.) - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(0., normalized_radians(720.));
    }

    #[rstest]
    #[case((52.2, -8.5), 22.088562789113137)]
    #[case((52., -7.5), 34.338884574096134)]
    #[case((52., -9.5), 34.338884574096134)]
    #[case((52., -8.5), 0.11751896960604502)]
    fn test_segment_distance(#[case] point: (f64, f64), #[case] expected: f64) {
        let d = segment_distance_km((52., -9.), (52., -8.), point).unwrap();
        assert!((d - expected).abs() < 1e-7, "point {point:?} gave {d}");
    }

    #[test]
    fn test_segment_outside_matches_endpoint() {
        let seg = segment_distance_km((52., -9.), (52., -8.), (52., -7.5)).unwrap();
        let end = vincenty_km(52., -8., 52., -7.5).unwrap();
        assert_eq!(end, seg);
    }

    #[rstest]
    #[case("vincenty", DistanceMethod::Vincenty)]
    #[case("Haversine", DistanceMethod::Haversine)]
    #[case("LAWOFCOSINES", DistanceMethod::LawOfCosines)]
    fn test_method_from_str(#[case] inp: &str, #[case] out: DistanceMethod) {
        assert_eq!(out, inp.parse().unwrap());
    }

    #[test]
    fn test_method_from_str_unknown() {
        assert!("loxodrome".parse::<DistanceMethod>().is_err());
    }

    #[test]
    fn test_method_display() {
        assert_eq!("vincenty", DistanceMethod::Vincenty.to_string());
        assert_eq!("lawofcosines", format!("{}", DistanceMethod::LawOfCosines));
    }
}
