//! Platform layer for the Google Chat webhook client.
//!
//! Provides traits for the platform-dependent pieces the client needs
//! (HTTP transport, environment access) plus configuration loading, so the
//! library itself stays free of direct I/O.
//!
//! Each capability has its own trait ([`http::HttpClient`],
//! [`env::Environment`]) with a native implementation behind the `native`
//! feature.
//!
//! # Example
//!
//! ```rust,no_run
//! use gchat_platform::config_loader::load_config;
//! use gchat_platform::env::NativeEnvironment;
//!
//! # async fn example() {
//! let config = load_config(&NativeEnvironment, None, None).await.unwrap();
//! println!("posting to {}", config.redacted_url());
//! # }
//! ```

pub mod config_loader;
pub mod env;
pub mod http;

pub use http::{HttpClient, HttpResponse, TransportError};
#[cfg(feature = "native")]
pub use http::NativeHttpClient;
