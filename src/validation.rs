use crate::error::AppError;
use crate::models::position::GeoPoint;

pub const USERNAME_MIN_LEN: usize = 4;
pub const USERNAME_MAX_LEN: usize = 16;

/// Usernames are 4 to 16 ASCII letters or digits, nothing else.
pub fn validate_username(username: &str) -> Result<(), AppError> {
    if username.len() < USERNAME_MIN_LEN || username.len() > USERNAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "username must be {USERNAME_MIN_LEN} to {USERNAME_MAX_LEN} characters"
        )));
    }

    if !username.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(AppError::Validation(
            "username may only contain ASCII letters and digits".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_point(location: &GeoPoint) -> Result<(), AppError> {
    if !(-90.0..=90.0).contains(&location.lat) {
        return Err(AppError::Validation(format!(
            "latitude must be within [-90, 90], got {}",
            location.lat
        )));
    }

    if !(-180.0..=180.0).contains(&location.lng) {
        return Err(AppError::Validation(format!(
            "longitude must be within [-180, 180], got {}",
            location.lng
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_alphanumeric_usernames_within_bounds() {
        assert!(validate_username("abcd").is_ok());
        assert!(validate_username("Wanderer42").is_ok());
        assert!(validate_username("a234567890123456").is_ok());
    }

    #[test]
    fn rejects_usernames_outside_length_bounds() {
        assert!(validate_username("abc").is_err());
        assert!(validate_username("a2345678901234567").is_err());
        assert!(validate_username("").is_err());
    }

    #[test]
    fn rejects_usernames_with_other_characters() {
        assert!(validate_username("user name").is_err());
        assert!(validate_username("user-name").is_err());
        assert!(validate_username("usér1").is_err());
    }

    #[test]
    fn accepts_boundary_coordinates() {
        assert!(validate_point(&GeoPoint { lat: 90.0, lng: -180.0 }).is_ok());
        assert!(validate_point(&GeoPoint { lat: -90.0, lng: 180.0 }).is_ok());
        assert!(validate_point(&GeoPoint { lat: 0.0, lng: 0.0 }).is_ok());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(validate_point(&GeoPoint { lat: 90.5, lng: 0.0 }).is_err());
        assert!(validate_point(&GeoPoint { lat: -90.5, lng: 0.0 }).is_err());
        assert!(validate_point(&GeoPoint { lat: 0.0, lng: 180.5 }).is_err());
        assert!(validate_point(&GeoPoint { lat: 0.0, lng: -180.5 }).is_err());
        assert!(validate_point(&GeoPoint { lat: f64::NAN, lng: 0.0 }).is_err());
        assert!(validate_point(&GeoPoint { lat: 0.0, lng: f64::INFINITY }).is_err());
    }
}
