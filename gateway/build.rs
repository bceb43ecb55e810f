//! Stamps every build with a fresh identifier.
//!
//! The identifier is `<prefix>-<unix-millis>-<random9>` and is exported to the
//! crate as `PRACTICE_GATEWAY_BUILD_ID`. Pages append it to asset URLs so
//! browsers never reuse a stylesheet from a previous deployment.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

const DEFAULT_PREFIX: &str = "practice-gateway";
const PREFIX_ENV: &str = "PRACTICE_BUILD_ID_PREFIX";

// Never created, so cargo reruns this script on every build.
const ALWAYS_STALE: &str = ".build-id-always-stale";

fn main() {
    println!("cargo:rerun-if-changed={ALWAYS_STALE}");
    println!("cargo:rerun-if-env-changed={PREFIX_ENV}");

    let prefix = std::env::var(PREFIX_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PREFIX.to_string());

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();

    let mut random = Uuid::new_v4().simple().to_string();
    random.truncate(9);

    println!("cargo:rustc-env=PRACTICE_GATEWAY_BUILD_ID={prefix}-{millis}-{random}");
}
