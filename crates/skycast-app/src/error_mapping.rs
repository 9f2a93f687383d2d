//! Maps transport-level fetch and geolocation errors onto the user-facing
//! taxonomy in `skycast-core`.

use skycast_core::{AppError, WeatherError as UserWeatherError};
use skycast_weather::{LocationError, WeatherError};

/// Which entry point produced a fetch error; the surfaced message differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FetchOrigin {
    CityQuery,
    Coordinates,
}

/// Every failure inside one fetch sequence collapses to a single classified
/// error keyed by the entry point.
pub(crate) fn map_fetch_error(err: WeatherError, origin: FetchOrigin) -> AppError {
    let mapped = match origin {
        FetchOrigin::CityQuery => UserWeatherError::LocationNotFound(err.to_string()),
        FetchOrigin::Coordinates => UserWeatherError::FetchFailed(err.to_string()),
    };
    AppError::Weather(mapped)
}

pub(crate) fn map_location_error(err: LocationError) -> AppError {
    let mapped = match err {
        LocationError::Unsupported => UserWeatherError::GeolocationUnsupported,
        LocationError::Denied | LocationError::Unavailable | LocationError::Timeout => {
            UserWeatherError::GeolocationDenied
        }
    };
    AppError::Weather(mapped)
}
