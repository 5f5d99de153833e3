/// Environment variable that switches the CLI to debug logging.
pub const DEBUG_ENV_VAR: &str = "WORDSEARCH_DEBUG";

/// True when [`DEBUG_ENV_VAR`] is set (to anything).
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn debug_from_env() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}

/// Initialize logging for the generator.
///
/// - **Native (CLI):** `Info` by default, `Debug` when `debug_enabled`; `RUST_LOG` wins if set.
/// - **WASM:** browser console at `Debug` or `Info`.
///
/// Calling this more than once is harmless; later calls leave the first logger in place.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        match console_log::init_with_level(level) {
            Ok(()) => log::info!("WASM logger initialized at {level:?} level"),
            Err(e) => {
                // no logger to report through, so go straight to the console
                let msg = format!(
                    "Failed to initialize console_log: {e}. Logging will be unavailable."
                );
                web_sys::console::error_1(&msg.into());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if builder.try_init().is_ok() {
            log::debug!("Native logger initialized at {level:?} level");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        init_logger(false);
        init_logger(true);
        log::info!("still logging");
    }
}
