use std::sync::Once;
use tracing::Level;

static INIT_TRACING: Once = Once::new();

/// Install a compact `tracing` subscriber once for the whole test binary so
/// skipped-line diagnostics are visible with `--nocapture`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

/// Split a raw TIC line into the whitespace-delimited tokens the decoder
/// expects (the transport normally does this).
pub fn tokens(line: &str) -> Vec<&str> {
    line.split_ascii_whitespace().collect()
}
