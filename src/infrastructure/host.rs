//! Local host identification for the app2 home payload.

use anyhow::{anyhow, Context, Result};
use std::net::IpAddr;

/// Kernel-provided hostname, tried before `/etc/hostname`.
const HOSTNAME_FILES: &[&str] = &["/proc/sys/kernel/hostname", "/etc/hostname"];

/// Hostname and resolved address of the machine serving the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub hostname: String,
    pub ip: IpAddr,
}

/// Determine the hostname and resolve it to an address.
///
/// `override_name` wins when set; otherwise the system hostname is used.
pub async fn lookup(override_name: Option<&str>) -> Result<HostInfo> {
    // ---
    let hostname = match override_name {
        Some(name) => name.to_string(),
        None => local_hostname().await?,
    };
    let ip = resolve(&hostname).await?;

    Ok(HostInfo { hostname, ip })
}

/// Read the system hostname.
///
/// Checks the `HOSTNAME` environment variable, then the kernel and
/// `/etc/hostname` files.
pub async fn local_hostname() -> Result<String> {
    // ---
    if let Some(name) = std::env::var("HOSTNAME").ok().and_then(non_empty) {
        return Ok(name);
    }

    for path in HOSTNAME_FILES {
        if let Ok(contents) = tokio::fs::read_to_string(path).await {
            if let Some(name) = non_empty(contents) {
                return Ok(name);
            }
        }
    }

    Err(anyhow!("Unable to determine local hostname"))
}

/// Resolve `hostname`, preferring the first IPv4 address.
pub async fn resolve(hostname: &str) -> Result<IpAddr> {
    // ---
    let addrs: Vec<IpAddr> = tokio::net::lookup_host((hostname, 0))
        .await
        .with_context(|| format!("Failed to resolve host {hostname}"))?
        .map(|addr| addr.ip())
        .collect();

    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| anyhow!("No addresses found for host {hostname}"))
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use serial_test::serial;

    /// Run `f` with `HOSTNAME` set (or removed), restoring the old value after.
    async fn with_hostname_env<F, Fut>(value: Option<&str>, f: F)
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = ()>,
    {
        // ---
        let saved = std::env::var("HOSTNAME").ok();
        match value {
            Some(v) => std::env::set_var("HOSTNAME", v),
            None => std::env::remove_var("HOSTNAME"),
        }

        f().await;

        match saved {
            Some(v) => std::env::set_var("HOSTNAME", v),
            None => std::env::remove_var("HOSTNAME"),
        }
    }

    #[tokio::test]
    async fn override_name_is_used_verbatim() {
        // ---
        let info = lookup(Some("localhost")).await.unwrap();

        assert_eq!(info.hostname, "localhost");
        assert!(info.ip.is_loopback());
    }

    #[tokio::test]
    async fn ip_literal_resolves_to_itself() {
        // ---
        let ip = resolve("127.0.0.1").await.unwrap();
        assert_eq!(ip, IpAddr::from([127, 0, 0, 1]));
    }

    #[tokio::test]
    async fn unresolvable_host_is_an_error() {
        // ---
        assert!(resolve("no-such-host.invalid").await.is_err());
    }

    #[tokio::test]
    #[serial]
    async fn hostname_env_wins_over_kernel_file() {
        // ---
        with_hostname_env(Some("box-under-test"), || async {
            assert_eq!(local_hostname().await.unwrap(), "box-under-test");
        })
        .await;
    }

    #[tokio::test]
    #[serial]
    async fn blank_hostname_env_falls_through_to_files() {
        // ---
        with_hostname_env(Some("   "), || async {
            let name = local_hostname().await.unwrap();
            assert!(!name.trim().is_empty());
        })
        .await;
    }

    #[tokio::test]
    #[serial]
    async fn without_hostname_env_reads_system_name() {
        // ---
        with_hostname_env(None, || async {
            let name = local_hostname().await.unwrap();
            assert!(!name.is_empty());
            assert_eq!(name, name.trim());

            let kernel = tokio::fs::read_to_string(HOSTNAME_FILES[0]).await;
            if let Ok(kernel) = kernel {
                assert_eq!(name, kernel.trim());
            }
        })
        .await;
    }

    #[tokio::test]
    #[serial]
    async fn lookup_without_override_uses_system_hostname() {
        // ---
        with_hostname_env(Some("localhost"), || async {
            let info = lookup(None).await.unwrap();
            assert_eq!(info.hostname, "localhost");
            assert!(info.ip.is_loopback());
        })
        .await;
    }

    #[test]
    fn blank_values_are_rejected() {
        // ---
        assert_eq!(non_empty("  \n".to_string()), None);
        assert_eq!(non_empty(" box-1\n".to_string()), Some("box-1".to_string()));
    }
}
