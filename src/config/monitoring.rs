use std::net::IpAddr;
use std::net::Ipv4Addr;
use std::net::SocketAddr;

use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// Prometheus exporter settings (`[monitoring]`). Startup only.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub prometheus_enabled: bool,

    /// Address the `/metrics` endpoint listens on
    #[serde(default = "default_prometheus_bind")]
    pub prometheus_bind: IpAddr,

    #[serde(default = "default_prometheus_port")]
    pub prometheus_port: u16,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            prometheus_enabled: false,
            prometheus_bind: default_prometheus_bind(),
            prometheus_port: default_prometheus_port(),
        }
    }
}

impl MonitoringConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.prometheus_bind, self.prometheus_port)
    }

    /// # Errors
    /// `Error::Config` when the exporter is enabled on port 0
    pub fn validate(&self) -> Result<()> {
        if !self.prometheus_enabled {
            if self.prometheus_port != default_prometheus_port() {
                tracing::warn!(
                    "monitoring.prometheus_port is {} but the exporter is disabled",
                    self.prometheus_port
                );
            }
            return Ok(());
        }

        if self.prometheus_port == 0 {
            return Err(Error::invalid_config(
                "monitoring.prometheus_port must be set when the exporter is enabled",
            ));
        }
        Ok(())
    }
}

fn default_prometheus_bind() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_prometheus_port() -> u16 {
    9464
}
