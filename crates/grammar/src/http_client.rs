use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Common HTTP client to reuse connections across grammar checks
///
/// Request timeouts are applied per request so that checkers with
/// different settings can share the pool.
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            Client::builder()
                .connect_timeout(Duration::from_secs(10))
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .user_agent(concat!("parley/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
