//! Command line configuration.

use atd_chart_ui::theme::DEFAULT_MAP_STYLE;
use atd_chart_ui::views::MapSettings;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "atd-server",
    version,
    about = "Airport traffic dashboard: arrivals by U.S. state"
)]
pub struct Config {
    /// Airport traffic CSV, loaded once at startup
    #[arg(long, env = "ATD_DATA", default_value = "fixtures/airtraffic.csv")]
    pub data: PathBuf,

    /// Address to listen on
    #[arg(long, env = "ATD_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "ATD_PORT", default_value_t = 8050)]
    pub port: u16,

    /// State selected when the page first loads
    #[arg(long, env = "ATD_DEFAULT_STATE", default_value = "FL")]
    pub default_state: String,

    /// Map tile style ("open-street-map" needs no token)
    #[arg(long, env = "ATD_MAP_STYLE", default_value = DEFAULT_MAP_STYLE)]
    pub map_style: String,

    /// Mapbox access token for Mapbox-hosted styles
    #[arg(long, env = "MAPBOX_TOKEN")]
    pub mapbox_token: Option<String>,

    /// Turn debugging information on (-d debug, -dd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn map_settings(&self) -> MapSettings {
        MapSettings {
            style: self.map_style.clone(),
            access_token: self.mapbox_token.clone().filter(|t| !t.is_empty()),
        }
    }

    /// Default log filter for `env_logger`.
    pub fn log_level(&self) -> &'static str {
        match self.debug {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["atd-server"]).unwrap();
        assert_eq!(config.port, 8050);
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8050");
        assert_eq!(config.default_state, "FL");
        assert_eq!(config.map_style, "open-street-map");
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "atd-server",
            "--data",
            "/tmp/traffic.csv",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--default-state",
            "TX",
            "-dd",
        ])
        .unwrap();
        assert_eq!(config.data, PathBuf::from("/tmp/traffic.csv"));
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:9000");
        assert_eq!(config.default_state, "TX");
        assert_eq!(config.log_level(), "trace");
    }

    #[test]
    fn map_settings_ignore_empty_token() {
        let config = Config::try_parse_from([
            "atd-server",
            "--mapbox-token",
            "",
            "--map-style",
            "dark",
        ])
        .unwrap();
        let settings = config.map_settings();
        assert_eq!(settings.style, "dark");
        assert_eq!(settings.access_token, None);

        let config = Config::try_parse_from(["atd-server", "--mapbox-token", "pk.abc"]).unwrap();
        assert_eq!(config.map_settings().access_token.as_deref(), Some("pk.abc"));
    }
}
