//! Request limits advertised by the API.
//!
//! Listing is not paginated and no rate limiter is installed yet; these
//! values are the published defaults clients may rely on once either lands.

use std::time::Duration;

/// Page size used when a client does not request one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: usize = 100;

/// Window over which requests are counted for rate limiting.
pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Requests allowed per client within [`RATE_LIMIT_WINDOW`].
pub const RATE_LIMIT_MAX_REQUESTS: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_limits_are_stable() {
        assert_eq!(DEFAULT_PAGE_SIZE, 20);
        assert_eq!(MAX_PAGE_SIZE, 100);
        assert_eq!(RATE_LIMIT_WINDOW, Duration::from_millis(900_000));
        assert_eq!(RATE_LIMIT_MAX_REQUESTS, 100);
    }

    #[test]
    fn default_page_fits_within_maximum() {
        assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
    }
}
