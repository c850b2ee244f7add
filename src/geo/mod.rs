use crate::models::position::GeoPoint;

const EARTH_RADIUS_KM: f64 = 6_371.0;

pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lng = (delta_lng / 2.0).sin();

    let haversine = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lng * sin_lng;
    let central_angle = 2.0 * haversine.sqrt().asin();

    EARTH_RADIUS_KM * central_angle
}

/// Point reached traveling `distance_km` from `origin` along `bearing_deg`
/// (0 = north, 90 = east, 180 = south, 270 = west).
pub fn destination(origin: &GeoPoint, distance_km: f64, bearing_deg: f64) -> GeoPoint {
    let angular = distance_km / EARTH_RADIUS_KM;
    let bearing = bearing_deg.to_radians();
    let lat1 = origin.lat.to_radians();
    let lng1 = origin.lng.to_radians();

    let sin_lat2 = lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lng2 = lng1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    GeoPoint {
        lat: lat2.to_degrees(),
        lng: normalize_lng(lng2.to_degrees()),
    }
}

fn normalize_lng(lng: f64) -> f64 {
    (lng + 540.0).rem_euclid(360.0) - 180.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl BoundingBox {
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.lat_min
            && point.lat <= self.lat_max
            && point.lng >= self.lng_min
            && point.lng <= self.lng_max
    }
}

/// Axis-aligned box circumscribing the circle of `radius_km` around `center`.
/// Candidates inside the box still need the exact haversine check.
pub fn bounding_box(center: &GeoPoint, radius_km: f64) -> BoundingBox {
    let angular_deg = (radius_km / EARTH_RADIUS_KM).to_degrees();
    let covers_north_pole = center.lat + angular_deg >= 90.0;
    let covers_south_pole = center.lat - angular_deg <= -90.0;

    // A circle reaching past a pole holds points of every longitude, and its
    // far side folds back across the pole, so the four-bearing box below
    // would cut both away. Pin the polar bound and span all longitudes.
    if covers_north_pole || covers_south_pole {
        let lat_min = if covers_south_pole {
            -90.0
        } else {
            destination(center, radius_km, 180.0).lat
        };
        let lat_max = if covers_north_pole {
            90.0
        } else {
            destination(center, radius_km, 0.0).lat
        };
        return BoundingBox {
            lat_min,
            lat_max,
            lng_min: -180.0,
            lng_max: 180.0,
        };
    }

    let north = destination(center, radius_km, 0.0);
    let south = destination(center, radius_km, 180.0);
    let east = destination(center, radius_km, 90.0);
    let west = destination(center, radius_km, 270.0);

    BoundingBox {
        lat_min: south.lat,
        lat_max: north.lat,
        lng_min: west.lng,
        lng_max: east.lng,
    }
}
