//! Best-effort reachability probe for submitted URLs.

use tokio::net::lookup_host;

/// Attempts to resolve the raw submitted string as a hostname.
///
/// The string is passed to the resolver exactly as submitted, scheme and all;
/// a full URL like `https://example.com` therefore fails to resolve. The
/// create flow observes the result but proceeds either way, so resolution
/// failures never surface to the client.
pub async fn resolve_host(input: &str) -> bool {
    // The port is only there to satisfy the resolver's address syntax.
    match lookup_host((input, 80)).await {
        Ok(mut addrs) => addrs.next().is_some(),
        Err(e) => {
            tracing::debug!("DNS lookup failed for {input:?}: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_plain_hostname() {
        assert!(resolve_host("localhost").await);
    }

    #[tokio::test]
    async fn test_resolve_full_url_fails() {
        // A raw URL is not a valid lookup name.
        assert!(!resolve_host("https://example.com").await);
    }

    #[tokio::test]
    async fn test_resolve_empty_string_fails() {
        assert!(!resolve_host("").await);
    }
}
