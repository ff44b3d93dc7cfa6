//! DNS resolver initialization.
//!
//! Builds the `hickory-resolver` backend from the configured upstreams and
//! timeouts.

use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::config::{Config, DNS_PORT};
use crate::dns::HickoryResolver;
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for lookups.
///
/// Upstreams come from `config.nameservers` when given, otherwise from the
/// system configuration (`/etc/resolv.conf`), falling back to the library
/// defaults if that cannot be read. Answers are never cached, so repeated
/// lookups always reach the upstream, and names are queried as given
/// (`ndots = 0`, no search-domain expansion).
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if no nameserver is left to
/// query.
pub fn init_resolver(config: &Config) -> Result<HickoryResolver, InitializationError> {
    let (resolver_config, mut opts) = if config.nameservers.is_empty() {
        match read_system_conf() {
            Ok(system) => system,
            Err(e) => {
                warn!("Failed to read system DNS configuration, using defaults: {e}");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        }
    } else {
        let group = NameServerConfigGroup::from_ips_clear(&config.nameservers, DNS_PORT, true);
        (
            ResolverConfig::from_parts(None, Vec::new(), group),
            ResolverOpts::default(),
        )
    };

    if resolver_config.name_servers().is_empty() {
        return Err(InitializationError::DnsResolverError(
            "no nameservers configured".to_string(),
        ));
    }

    opts.timeout = Duration::from_secs(config.timeout_seconds);
    opts.attempts = config.attempts;
    opts.ndots = 0;
    opts.cache_size = 0;

    debug!(
        "Using {} nameserver(s), timeout {}s, {} attempt(s)",
        resolver_config.name_servers().len(),
        config.timeout_seconds,
        config.attempts
    );

    Ok(HickoryResolver::new(TokioAsyncResolver::tokio(
        resolver_config,
        opts,
    )))
}
