//! Build identity stamped by `build.rs`.

/// Identifier generated fresh for every build.
pub const BUILD_ID: &str = env!("PRACTICE_GATEWAY_BUILD_ID");

/// Response header carrying [`BUILD_ID`].
pub const BUILD_ID_HEADER: &str = "x-build-id";

/// Appends the build identifier to an asset path for cache busting.
pub fn asset_url(path: &str) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}v={BUILD_ID}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_id_shape() {
        // <prefix>-<unix-millis>-<random9>
        let mut parts = BUILD_ID.rsplitn(3, '-');
        let random = parts.next().unwrap();
        let millis = parts.next().unwrap();
        let prefix = parts.next().unwrap();

        assert_eq!(random.len(), 9);
        assert!(random.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(millis.parse::<u128>().unwrap() > 0);
        assert!(!prefix.is_empty());
    }

    #[test]
    fn test_asset_url() {
        assert_eq!(
            asset_url("/static/site.css"),
            format!("/static/site.css?v={BUILD_ID}")
        );
        assert_eq!(
            asset_url("/static/site.css?theme=dark"),
            format!("/static/site.css?theme=dark&v={BUILD_ID}")
        );
    }
}
