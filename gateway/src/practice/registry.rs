//! Practice selection.
//!
//! A deployment either serves every practice in the catalog (selected per
//! request from the subdomain) or is pinned to a single record, in which case
//! the selection key is ignored entirely.

use tracing::debug;

use super::PracticeConfig;
use super::catalog::{CATALOG, SHAFER_CLINIC};

/// Practice served when a key matches nothing.
pub const DEFAULT_PRACTICE_ID: &str = "shafer-clinic";

/// Read-only view over the static catalog.
///
/// `Copy` because it only holds `'static` references; handlers take it by
/// value out of the shared state.
#[derive(Debug, Clone, Copy)]
pub struct PracticeRegistry {
    practices: &'static [&'static PracticeConfig],
    default: &'static PracticeConfig,
    pinned: Option<&'static PracticeConfig>,
}

impl Default for PracticeRegistry {
    fn default() -> Self {
        Self {
            practices: CATALOG,
            default: &SHAFER_CLINIC,
            pinned: None,
        }
    }
}

impl PracticeRegistry {
    /// Registry over the full catalog with the standard default practice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry over the full catalog that falls back to `default_id`.
    ///
    /// Returns `None` when `default_id` is not in the catalog.
    pub fn with_default(default_id: &str) -> Option<Self> {
        let registry = Self::default();
        let default = registry.lookup(default_id)?;
        Some(Self { default, ..registry })
    }

    /// Registry whose [`current`](Self::current) always answers `practice_id`.
    ///
    /// Returns `None` when `practice_id` is not in the catalog.
    pub fn pinned(practice_id: &str) -> Option<Self> {
        let registry = Self::default();
        let practice = registry.lookup(practice_id)?;
        Some(registry.pin_to(practice))
    }

    /// Pins this registry to `practice`, keeping the catalog for exact lookups.
    pub fn pin_to(self, practice: &'static PracticeConfig) -> Self {
        Self {
            default: practice,
            pinned: Some(practice),
            ..self
        }
    }

    /// Exact lookup by practice id, then by subdomain.
    pub fn lookup(&self, key: &str) -> Option<&'static PracticeConfig> {
        self.practices
            .iter()
            .find(|p| p.id == key)
            .or_else(|| self.practices.iter().find(|p| p.subdomain == key))
            .copied()
    }

    /// Resolves the practice to serve for `key`.
    ///
    /// A pinned registry ignores `key`. Otherwise unknown or missing keys
    /// fall back to the default practice.
    pub fn current(&self, key: Option<&str>) -> &'static PracticeConfig {
        if let Some(practice) = self.pinned {
            return practice;
        }

        match key.and_then(|k| self.lookup(k)) {
            Some(practice) => practice,
            None => {
                debug!(
                    key = ?key,
                    default = self.default.id,
                    "No practice registered for key, using default"
                );
                self.default
            }
        }
    }

    /// Every practice in catalog order.
    #[inline]
    pub fn all(&self) -> &'static [&'static PracticeConfig] {
        self.practices
    }

    #[inline]
    pub fn default_practice(&self) -> &'static PracticeConfig {
        self.default
    }

    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }
}

/// Extracts the practice key from an HTTP `Host` header value.
///
/// The port is stripped and the first DNS label is returned when the host
/// has at least three labels (`shafer-clinic.example.com`) or is a
/// `<label>.localhost` development host. Bare hosts and IP literals yield
/// `None`.
pub fn subdomain_from_host(host: &str) -> Option<String> {
    let host = host.trim();
    if host.starts_with('[') {
        // IPv6 literal
        return None;
    }
    let hostname = host.split(':').next().unwrap_or(host).trim_end_matches('.');
    if hostname.is_empty() || hostname.parse::<std::net::Ipv4Addr>().is_ok() {
        return None;
    }

    let labels: Vec<&str> = hostname.split('.').collect();
    let is_local_subdomain = labels.len() == 2
        && labels
            .last()
            .is_some_and(|tld| tld.eq_ignore_ascii_case("localhost"));

    if labels.len() >= 3 || is_local_subdomain {
        labels
            .first()
            .filter(|label| !label.is_empty())
            .map(|label| label.to_ascii_lowercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::ARENA_FYSIO_AMSTERDAM;

    #[test]
    fn test_lookup_returns_exact_static_record() {
        let registry = PracticeRegistry::new();
        for practice in CATALOG {
            let found = registry.lookup(practice.id).unwrap();
            assert!(std::ptr::eq(found, *practice));
        }
    }

    #[test]
    fn test_lookup_by_subdomain() {
        let registry = PracticeRegistry::new();
        let found = registry.lookup("arena-fysio-amsterdam").unwrap();
        assert_eq!(found.name, "ArenaFysio");
    }

    #[test]
    fn test_lookup_unknown_key_is_none() {
        let registry = PracticeRegistry::new();
        assert!(registry.lookup("unknown-clinic").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_current_falls_back_to_default() {
        let registry = PracticeRegistry::new();
        assert_eq!(registry.current(None).id, DEFAULT_PRACTICE_ID);
        assert_eq!(registry.current(Some("nope")).id, DEFAULT_PRACTICE_ID);
        assert_eq!(
            registry.current(Some("arena-fysio-amsterdam")).id,
            "arena-fysio-amsterdam"
        );
    }

    #[test]
    fn test_with_default() {
        let registry = PracticeRegistry::with_default("arena-fysio-amsterdam").unwrap();
        assert_eq!(registry.current(None).id, "arena-fysio-amsterdam");
        assert_eq!(registry.current(Some("shafer-clinic")).id, "shafer-clinic");
        assert!(!registry.is_pinned());

        assert!(PracticeRegistry::with_default("missing").is_none());
    }

    #[test]
    fn test_pinned_ignores_key() {
        let registry = PracticeRegistry::pinned("arena-fysio-amsterdam").unwrap();
        assert!(registry.is_pinned());

        for key in [None, Some("shafer-clinic"), Some("unknown"), Some("")] {
            let practice = registry.current(key);
            assert!(std::ptr::eq(practice, &ARENA_FYSIO_AMSTERDAM));
        }
    }

    #[test]
    fn test_pinned_still_answers_exact_lookup() {
        let registry = PracticeRegistry::pinned("arena-fysio-amsterdam").unwrap();
        assert_eq!(registry.lookup("shafer-clinic").unwrap().id, "shafer-clinic");
        assert_eq!(registry.all().len(), CATALOG.len());
    }

    #[test]
    fn test_pinned_unknown_id() {
        assert!(PracticeRegistry::pinned("missing").is_none());
    }

    #[test]
    fn test_subdomain_from_host() {
        assert_eq!(
            subdomain_from_host("shafer-clinic.example.com"),
            Some("shafer-clinic".to_string())
        );
        assert_eq!(
            subdomain_from_host("Arena-Fysio-Amsterdam.example.com:8443"),
            Some("arena-fysio-amsterdam".to_string())
        );
        assert_eq!(
            subdomain_from_host("shafer-clinic.localhost:3000"),
            Some("shafer-clinic".to_string())
        );
    }

    #[test]
    fn test_subdomain_from_bare_hosts() {
        assert_eq!(subdomain_from_host("localhost"), None);
        assert_eq!(subdomain_from_host("localhost:3000"), None);
        assert_eq!(subdomain_from_host("example.com"), None);
        assert_eq!(subdomain_from_host("127.0.0.1:3000"), None);
        assert_eq!(subdomain_from_host("[::1]:3000"), None);
        assert_eq!(subdomain_from_host(""), None);
    }
}
