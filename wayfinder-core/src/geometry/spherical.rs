//! Great-circle formulas on a spherical Earth. Angles are in degrees,
//! coordinates are `x = lon`, `y = lat`.

use geo::Coord;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Initial great-circle bearing from `from` to `to`, in (-180, 180].
pub fn initial_bearing(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let (lat1, lat2) = (from.y.to_radians(), to.y.to_radians());
    let delta_lon = (to.x - from.x).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();
    normalize_bearing(y.atan2(x).to_degrees())
}

/// Haversine ground distance in meters
pub fn haversine_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let (lat1, lat2) = (a.y.to_radians(), b.y.to_radians());
    let delta_lat = lat2 - lat1;
    let delta_lon = (b.x - a.x).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Point reached by travelling `distance_m` from `origin` along `bearing`.
pub fn destination(origin: Coord<f64>, bearing: f64, distance_m: f64) -> Coord<f64> {
    let lat1 = origin.y.to_radians();
    let lon1 = origin.x.to_radians();
    let theta = bearing.to_radians();
    let delta = distance_m / EARTH_RADIUS_M;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    Coord {
        x: lon2.to_degrees(),
        y: lat2.to_degrees(),
    }
}

/// Wraps an angle into (-180, 180].
pub fn normalize_bearing(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Signed shortest rotation taking `from` to `to`, in (-180, 180].
pub fn shortest_rotation(from: f64, to: f64) -> f64 {
    normalize_bearing(to - from)
}
