//! Process configuration, read from the environment.

use std::net::SocketAddr;

use anyhow::Context;

pub const BIND_ADDR_VAR: &str = "SHOPCART_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_bind_addr(std::env::var(BIND_ADDR_VAR).ok().as_deref())
    }

    /// Build from an optional raw bind address; `None` uses the default.
    pub fn from_bind_addr(raw: Option<&str>) -> anyhow::Result<Self> {
        let raw = raw.unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = raw
            .parse()
            .with_context(|| format!("{BIND_ADDR_VAR} is not a socket address: {raw:?}"))?;
        Ok(Self { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_interfaces_on_8080() {
        let cfg = ApiConfig::from_bind_addr(None).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn explicit_address_is_used() {
        let cfg = ApiConfig::from_bind_addr(Some("127.0.0.1:3000")).unwrap();
        assert_eq!(cfg.bind_addr.port(), 3000);
    }

    #[test]
    fn invalid_address_is_rejected() {
        let err = ApiConfig::from_bind_addr(Some("not-an-addr")).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_VAR));
    }
}
