//! Location resolution: district registry, explicit coordinates, or the
//! system geolocation service. Every request is one-shot.

use crate::district::District;
use crate::types::Location;
use sinchai_core::LocationError;

/// Where the forecast should be fetched for
#[derive(Debug, Clone, PartialEq)]
pub enum LocationSource {
    /// District code from the registry, e.g. "ludhiana"
    District(String),
    /// Coordinates supplied by the user
    Coordinates { latitude: f64, longitude: f64 },
    /// Ask the operating system (GPS / network positioning)
    System,
}

impl LocationSource {
    pub async fn resolve(&self) -> Result<Location, LocationError> {
        match self {
            Self::District(code) => Ok(District::lookup(code)?.location()),
            Self::Coordinates {
                latitude,
                longitude,
            } => Location::from_coordinates(*latitude, *longitude),
            Self::System => {
                let location = get_current_location().await?;
                tracing::info!(
                    "Got location: {}, {}",
                    location.latitude,
                    location.longitude
                );
                Location::from_coordinates(location.latitude, location.longitude).map(|l| {
                    Location {
                        accuracy_meters: location.accuracy_meters,
                        ..l
                    }
                })
            }
        }
    }
}

/// Query the platform geolocation service once.
pub async fn get_current_location() -> Result<Location, LocationError> {
    platform::current_location().await
}

#[cfg(target_os = "linux")]
mod platform {
    //! GeoClue2 over the system D-Bus.

    use super::{Location, LocationError};
    use std::time::Duration;
    use zbus::zvariant::{OwnedObjectPath, OwnedValue};
    use zbus::{Connection, Proxy};

    const GEOCLUE: &str = "org.freedesktop.GeoClue2";
    const MANAGER_PATH: &str = "/org/freedesktop/GeoClue2/Manager";
    const MANAGER_IFACE: &str = "org.freedesktop.GeoClue2.Manager";
    const CLIENT_IFACE: &str = "org.freedesktop.GeoClue2.Client";
    const LOCATION_IFACE: &str = "org.freedesktop.GeoClue2.Location";
    const PROPERTIES_IFACE: &str = "org.freedesktop.DBus.Properties";
    const DESKTOP_ID: &str = "sinchai";
    /// GCLUE_ACCURACY_LEVEL_CITY; district-level weather doesn't need more
    const ACCURACY_LEVEL_CITY: u32 = 4;
    const POLL_INTERVAL: Duration = Duration::from_millis(250);
    const MAX_POLLS: u32 = 40;

    pub async fn current_location() -> Result<Location, LocationError> {
        let conn = Connection::system().await.map_err(|e| {
            tracing::debug!("System bus unavailable: {}", e);
            LocationError::ServiceUnavailable
        })?;

        let manager = Proxy::new(&conn, GEOCLUE, MANAGER_PATH, MANAGER_IFACE)
            .await
            .map_err(map_zbus_error)?;
        let client_path: OwnedObjectPath = manager
            .call("GetClient", &())
            .await
            .map_err(map_zbus_error)?;

        let client = Proxy::new(&conn, GEOCLUE, client_path.as_str(), CLIENT_IFACE)
            .await
            .map_err(map_zbus_error)?;
        client
            .set_property("DesktopId", DESKTOP_ID)
            .await
            .map_err(|e| map_zbus_error(e.into()))?;
        client
            .set_property("RequestedAccuracyLevel", ACCURACY_LEVEL_CITY)
            .await
            .map_err(|e| map_zbus_error(e.into()))?;
        client
            .call::<_, _, ()>("Start", &())
            .await
            .map_err(map_zbus_error)?;

        let result = wait_for_fix(&conn, client_path.as_str()).await;

        if let Err(e) = client.call::<_, _, ()>("Stop", &()).await {
            tracing::debug!("Failed to stop GeoClue client: {}", e);
        }

        result
    }

    async fn wait_for_fix(conn: &Connection, client_path: &str) -> Result<Location, LocationError> {
        for _ in 0..MAX_POLLS {
            let value = get_property(conn, client_path, CLIENT_IFACE, "Location").await?;
            let path = OwnedObjectPath::try_from(value)
                .map_err(|e| LocationError::Other(e.to_string()))?;

            // "/" means no fix yet
            if path.as_str() != "/" {
                return read_location(conn, path.as_str()).await;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }

        Err(LocationError::Timeout)
    }

    async fn read_location(conn: &Connection, path: &str) -> Result<Location, LocationError> {
        let latitude = read_f64(conn, path, "Latitude").await?;
        let longitude = read_f64(conn, path, "Longitude").await?;
        let accuracy = read_f64(conn, path, "Accuracy").await.ok();

        Ok(Location {
            latitude,
            longitude,
            accuracy_meters: accuracy,
            name: None,
        })
    }

    async fn read_f64(conn: &Connection, path: &str, name: &str) -> Result<f64, LocationError> {
        let value = get_property(conn, path, LOCATION_IFACE, name).await?;
        f64::try_from(value).map_err(|e| LocationError::Other(e.to_string()))
    }

    /// Read a property without going through the proxy cache
    async fn get_property(
        conn: &Connection,
        path: &str,
        interface: &str,
        name: &str,
    ) -> Result<OwnedValue, LocationError> {
        let props = Proxy::new(conn, GEOCLUE, path, PROPERTIES_IFACE)
            .await
            .map_err(map_zbus_error)?;
        props
            .call("Get", &(interface, name))
            .await
            .map_err(map_zbus_error)
    }

    fn map_zbus_error(e: zbus::Error) -> LocationError {
        let denied = match &e {
            zbus::Error::MethodError(name, _, _) => name.as_str().ends_with("AccessDenied"),
            zbus::Error::FDO(fdo) => matches!(**fdo, zbus::fdo::Error::AccessDenied(_)),
            _ => false,
        };

        if denied {
            LocationError::PermissionDenied
        } else {
            tracing::debug!("GeoClue request failed: {}", e);
            LocationError::ServiceUnavailable
        }
    }

}

#[cfg(windows)]
mod platform {
    //! WinRT Geolocator.

    use super::{Location, LocationError};
    use windows::Devices::Geolocation::{GeolocationAccessStatus, Geolocator};

    pub async fn current_location() -> Result<Location, LocationError> {
        tokio::task::spawn_blocking(locate_blocking)
            .await
            .map_err(|e| LocationError::Other(e.to_string()))?
    }

    fn locate_blocking() -> Result<Location, LocationError> {
        let access = Geolocator::RequestAccessAsync()
            .and_then(|op| op.get())
            .map_err(map_windows_error)?;
        if access != GeolocationAccessStatus::Allowed {
            return Err(LocationError::PermissionDenied);
        }

        let locator = Geolocator::new().map_err(map_windows_error)?;
        let position = locator
            .GetGeopositionAsync()
            .and_then(|op| op.get())
            .map_err(map_windows_error)?;
        let coordinate = position.Coordinate().map_err(map_windows_error)?;
        let point = coordinate
            .Point()
            .and_then(|p| p.Position())
            .map_err(map_windows_error)?;

        Ok(Location {
            latitude: point.Latitude,
            longitude: point.Longitude,
            accuracy_meters: coordinate.Accuracy().ok(),
            name: None,
        })
    }

    fn map_windows_error(e: windows::core::Error) -> LocationError {
        LocationError::Other(e.to_string())
    }
}

#[cfg(not(any(target_os = "linux", windows)))]
mod platform {
    use super::{Location, LocationError};

    pub async fn current_location() -> Result<Location, LocationError> {
        Err(LocationError::ServiceUnavailable)
    }
}
