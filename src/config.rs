//! Portal display configuration parsed from environment variables.
//!
//! TRADE-OFFS
//! ==========
//! Browser builds have no process environment, so `load` falls back to the
//! defaults there. Server-rendered builds pick overrides up from the host.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_NEWS_PREVIEW_LIMIT: usize = 1;
pub const DEFAULT_UPCOMING_EVENTS_LIMIT: usize = 1;
pub const DEFAULT_EVENTS_ROUTE: &str = "/events";

const NEWS_PREVIEW_LIMIT_VAR: &str = "PORTAL_NEWS_PREVIEW_LIMIT";
const UPCOMING_EVENTS_LIMIT_VAR: &str = "PORTAL_UPCOMING_EVENTS_LIMIT";
const EVENTS_ROUTE_VAR: &str = "PORTAL_EVENTS_ROUTE";

/// Error returned by [`PortalConfig::from_env`] and [`PortalConfig::from_lookup`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A preview limit was not a non-negative integer.
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: String, value: String },
    /// The events route was not an absolute path.
    #[error("{var} must start with '/', got {value:?}")]
    InvalidRoute { var: String, value: String },
}

/// Display policy shared by the dashboard and events pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// How many news items the dashboard preview shows.
    pub news_preview_limit: usize,
    /// How many upcoming events the dashboard preview shows.
    pub upcoming_events_limit: usize,
    /// Target of the "view all events" link.
    pub events_route: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            news_preview_limit: DEFAULT_NEWS_PREVIEW_LIMIT,
            upcoming_events_limit: DEFAULT_UPCOMING_EVENTS_LIMIT,
            events_route: DEFAULT_EVENTS_ROUTE.to_owned(),
        }
    }
}

impl PortalConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORTAL_NEWS_PREVIEW_LIMIT`: default 1
    /// - `PORTAL_UPCOMING_EVENTS_LIMIT`: default 1
    /// - `PORTAL_EVENTS_ROUTE`: default `/events`
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is not a number or the route is not absolute.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`PortalConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let news_preview_limit = parse_limit(NEWS_PREVIEW_LIMIT_VAR, lookup(NEWS_PREVIEW_LIMIT_VAR), DEFAULT_NEWS_PREVIEW_LIMIT)?;
        let upcoming_events_limit =
            parse_limit(UPCOMING_EVENTS_LIMIT_VAR, lookup(UPCOMING_EVENTS_LIMIT_VAR), DEFAULT_UPCOMING_EVENTS_LIMIT)?;
        let events_route = parse_route(EVENTS_ROUTE_VAR, lookup(EVENTS_ROUTE_VAR))?;

        Ok(Self { news_preview_limit, upcoming_events_limit, events_route })
    }

    /// Environment config, or the defaults when it is invalid.
    pub fn load() -> Self {
        match Self::from_env() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("portal config invalid, using defaults: {err}");
                Self::default()
            }
        }
    }
}

fn parse_limit(var: &str, raw: Option<String>, default: usize) -> Result<usize, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidNumber { var: var.to_owned(), value: raw.clone() })
}

fn parse_route(var: &str, raw: Option<String>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_EVENTS_ROUTE.to_owned());
    };
    let trimmed = raw.trim();
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidRoute { var: var.to_owned(), value: raw });
    }
    Ok(trimmed.to_owned())
}
