use std::collections::HashSet;
use std::net::IpAddr;

/// Decides whether the immediate peer may be believed when it sends
/// `X-Forwarded-*` headers.
pub trait TrustedHostAuthority {
    fn is_trusted_host(&self, ip: &str) -> bool;
}

impl<F> TrustedHostAuthority for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_trusted_host(&self, ip: &str) -> bool {
        self(ip)
    }
}

/// Authority that trusts no peer at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustNone;

impl TrustedHostAuthority for TrustNone {
    fn is_trusted_host(&self, _ip: &str) -> bool {
        false
    }
}

/// Exact-address allow-list of trusted proxies.
///
/// Entries that parse as IP addresses are compared by value, so `::1` and
/// `0:0:0:0:0:0:0:1` are the same host; anything else is compared verbatim.
#[derive(Debug, Clone, Default)]
pub struct TrustedHosts {
    addresses: HashSet<IpAddr>,
    names: HashSet<String>,
}

impl TrustedHosts {
    pub fn list<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut trusted = Self::default();
        for host in hosts {
            let host = host.into().trim().to_string();
            if host.is_empty() {
                continue;
            }
            match host.parse::<IpAddr>() {
                Ok(address) => {
                    trusted.addresses.insert(address);
                }
                Err(_) => {
                    trusted.names.insert(host);
                }
            }
        }
        trusted
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty() && self.names.is_empty()
    }
}

impl TrustedHostAuthority for TrustedHosts {
    fn is_trusted_host(&self, ip: &str) -> bool {
        let ip = ip.trim();
        if ip.is_empty() {
            return false;
        }
        match ip.parse::<IpAddr>() {
            Ok(address) => self.addresses.contains(&address),
            Err(_) => self.names.contains(ip),
        }
    }
}

#[cfg(test)]
#[path = "authority_test.rs"]
mod authority_test;
