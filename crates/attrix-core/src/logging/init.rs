//! Subscriber setup for the hosting desktop application
//!
//! The host installs one subscriber at startup, chosen by profile. Tests do
//! not come through here; they install the in-memory capture layer from
//! [`init_test_capture`](super::init_test_capture) and assert on the
//! recorded events.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Output shape of the global subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Pretty console lines, `attrix=debug` unless `RUST_LOG` overrides it
    Development,
    /// JSON lines for log shipping, `attrix=info` unless `RUST_LOG`
    /// overrides it
    Production,
    /// Bare registry with no output layer
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Safe to call more than once; only the first call takes effect.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("attrix=debug")),
                    )
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("attrix=info")),
                    )
                    .init();
            }
            Profile::Test => {
                // init_test_capture() installs the capture layer globally;
                // a process uses one path or the other.
                tracing_subscriber::registry().init();
            }
        }
    });
}
