use std::{collections::HashMap, net::SocketAddr, str::FromStr};

use crate::server::{
    error::{config::ConfigError, AppError},
    middleware::throttle::{Rate, ThrottleScope},
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_PAGE_SIZE: u64 = 4;
const DEFAULT_MAX_PAGE_SIZE: u64 = 100;
const DEFAULT_DRONES_RATE: &str = "200/hour";
const DEFAULT_PILOTS_RATE: &str = "150/hour";

/// Limit/offset defaults applied to every paginated collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// `limit` used when the request gives none.
    pub page_size: u64,
    /// Upper bound applied to any requested `limit`.
    pub max_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub pagination: PaginationConfig,
    pub drones_rate: Rate,
    pub pilots_rate: Rate,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present or defaulted and valid
    /// - `Err(ConfigError)` - `DATABASE_URL` missing, or a value failed to parse
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = parse_var(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let page_size: u64 = parse_var(&lookup, "PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())?;
        let max_page_size: u64 =
            parse_var(&lookup, "MAX_PAGE_SIZE", &DEFAULT_MAX_PAGE_SIZE.to_string())?;

        if page_size == 0 || page_size > max_page_size {
            return Err(ConfigError::InvalidEnvVar {
                name: "PAGE_SIZE".to_string(),
                value: page_size.to_string(),
                reason: format!("must be between 1 and MAX_PAGE_SIZE ({})", max_page_size),
            });
        }

        let drones_rate = lookup("THROTTLE_DRONES_RATE")
            .unwrap_or_else(|| DEFAULT_DRONES_RATE.to_string())
            .parse()?;
        let pilots_rate = lookup("THROTTLE_PILOTS_RATE")
            .unwrap_or_else(|| DEFAULT_PILOTS_RATE.to_string())
            .parse()?;

        Ok(Self {
            database_url,
            bind_addr,
            pagination: PaginationConfig {
                page_size,
                max_page_size,
            },
            drones_rate,
            pilots_rate,
        })
    }

    /// Rates keyed by throttle scope, as consumed by `ThrottleGate::new`.
    pub fn throttle_rates(&self) -> HashMap<ThrottleScope, Rate> {
        HashMap::from([
            (ThrottleScope::Drones, self.drones_rate),
            (ThrottleScope::Pilots, self.pilots_rate),
        ])
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = lookup(name).unwrap_or_else(|| default.to_string());

    value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.clone(),
        reason: e.to_string(),
    })
}
