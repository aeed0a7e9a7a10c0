//! Process settings read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default outage feed poll interval (seconds).
const DEFAULT_OUTAGE_REFRESH_SECS: u64 = 60;

/// Default static asset directory.
const DEFAULT_STATIC_DIR: &str = "static";

/// Errors from reading settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// A required variable is unset or blank
    #[error("{0} is not set")]
    Missing(&'static str),

    /// A variable is set but unparseable
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Server settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directions provider API key (`GOOGLE_MAPS_API_KEY`).
    pub google_maps_api_key: String,

    /// Optional outage feed API key (`MTA_API_KEY`).
    pub mta_api_key: Option<String>,

    /// Listen address (`MOMROUTE_ADDR`).
    pub addr: SocketAddr,

    /// How often to re-poll the outage feed (`MOMROUTE_OUTAGE_REFRESH_SECS`).
    pub outage_refresh: Duration,

    /// Directory served under `/static` (`MOMROUTE_STATIC_DIR`).
    pub static_dir: String,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let google_maps_api_key =
            get("GOOGLE_MAPS_API_KEY").ok_or(SettingsError::Missing("GOOGLE_MAPS_API_KEY"))?;

        let mta_api_key = get("MTA_API_KEY");

        let addr_raw = get("MOMROUTE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| SettingsError::Invalid {
                name: "MOMROUTE_ADDR",
                value: addr_raw.clone(),
            })?;

        let outage_refresh = match get("MOMROUTE_OUTAGE_REFRESH_SECS") {
            None => Duration::from_secs(DEFAULT_OUTAGE_REFRESH_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(SettingsError::Invalid {
                        name: "MOMROUTE_OUTAGE_REFRESH_SECS",
                        value: raw,
                    });
                }
            },
        };

        let static_dir =
            get("MOMROUTE_STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            google_maps_api_key,
            mta_api_key,
            addr,
            outage_refresh,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let settings = Settings::from_lookup(lookup(&[("GOOGLE_MAPS_API_KEY", "abc")])).unwrap();

        assert_eq!(settings.google_maps_api_key, "abc");
        assert!(settings.mta_api_key.is_none());
        assert_eq!(settings.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(settings.outage_refresh, Duration::from_secs(60));
        assert_eq!(settings.static_dir, "static");
    }

    #[test]
    fn overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("GOOGLE_MAPS_API_KEY", "abc"),
            ("MTA_API_KEY", "mta"),
            ("MOMROUTE_ADDR", "0.0.0.0:8080"),
            ("MOMROUTE_OUTAGE_REFRESH_SECS", "120"),
            ("MOMROUTE_STATIC_DIR", "/srv/static"),
        ]))
        .unwrap();

        assert_eq!(settings.mta_api_key.as_deref(), Some("mta"));
        assert_eq!(settings.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(settings.outage_refresh, Duration::from_secs(120));
        assert_eq!(settings.static_dir, "/srv/static");
    }

    #[test]
    fn missing_api_key() {
        let err = Settings::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, SettingsError::Missing("GOOGLE_MAPS_API_KEY"));

        let err = Settings::from_lookup(lookup(&[("GOOGLE_MAPS_API_KEY", "  ")])).unwrap_err();
        assert_eq!(err, SettingsError::Missing("GOOGLE_MAPS_API_KEY"));
    }

    #[test]
    fn blank_optional_is_unset() {
        let settings = Settings::from_lookup(lookup(&[
            ("GOOGLE_MAPS_API_KEY", "abc"),
            ("MTA_API_KEY", ""),
        ]))
        .unwrap();
        assert!(settings.mta_api_key.is_none());
    }

    #[test]
    fn invalid_values() {
        let err = Settings::from_lookup(lookup(&[
            ("GOOGLE_MAPS_API_KEY", "abc"),
            ("MOMROUTE_ADDR", "not an addr"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { name: "MOMROUTE_ADDR", .. }));

        for bad in ["0", "-5", "soon"] {
            let err = Settings::from_lookup(lookup(&[
                ("GOOGLE_MAPS_API_KEY", "abc"),
                ("MOMROUTE_OUTAGE_REFRESH_SECS", bad),
            ]))
            .unwrap_err();
            assert!(
                matches!(err, SettingsError::Invalid { name: "MOMROUTE_OUTAGE_REFRESH_SECS", .. }),
                "{bad}"
            );
        }
    }
}
