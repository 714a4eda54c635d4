//! Logging setup
//!
//! Native builds log to stderr. Browser builds log to the developer console
//! and install a panic hook so Rust panics show up there too.

use crate::error::{Result, WidgetError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str =
    "keepsake_widget=info,keepsake_slideshow=info,keepsake_playback=info,warn";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// Fails if a subscriber is already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| WidgetError::Platform(format!("logging already initialised: {e}")))?;

    tracing::debug!("logging initialised");
    Ok(())
}

/// Install the global subscriber and the console panic hook
///
/// Fails if a subscriber is already installed.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() -> Result<()> {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();

    let layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_level(true);
    #[cfg(feature = "wasm")]
    let layer = layer.with_writer(console::ConsoleMakeWriter);

    tracing_subscriber::registry()
        .with(filter())
        .with(layer)
        .try_init()
        .map_err(|e| WidgetError::Platform(format!("logging already initialised: {e}")))?;

    tracing::debug!("logging initialised");
    Ok(())
}

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod console {
    use std::io;
    use tracing_subscriber::fmt::MakeWriter;

    /// Writes each formatted event as one `console.log` line
    pub struct ConsoleMakeWriter;

    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { buffer: Vec::new() }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.buffer.is_empty() {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&self.buffer);
            web_sys::console::log_1(&line.trim_end().into());
            self.buffer.clear();
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = io::Write::flush(self);
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn second_init_is_rejected() {
        let _ = init_logging();
        assert!(matches!(init_logging(), Err(WidgetError::Platform(_))));
    }
}
