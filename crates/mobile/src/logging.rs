//! Tracing setup for the host platform.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the tracing subscriber. Safe to call more than once; only the
/// first call takes effect.
#[uniffi::export]
pub fn init_logging() {
    INIT.call_once(|| {
        #[cfg(target_os = "android")]
        {
            use tracing_logcat::{LogcatMakeWriter, LogcatTag};

            // If logcat is unavailable, fall back to stderr instead of
            // aborting startup.
            match LogcatMakeWriter::new(LogcatTag::Fixed("pindrop".to_owned())) {
                Ok(writer) => tracing_subscriber::fmt()
                    .with_writer(writer)
                    .with_ansi(false)
                    .without_time()
                    .init(),
                Err(_) => tracing_subscriber::fmt().init(),
            }
        }

        #[cfg(not(target_os = "android"))]
        tracing_subscriber::fmt().init();
    });
}
