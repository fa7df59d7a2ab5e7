//! Tracing setup for the binary.
//!
//! `RUST_LOG` sets the filter; `LOG_FORMAT=json` switches to JSON lines.
//! Everything goes to stderr so stdout stays free for `--dump`.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,leetcode_scaffold=debug"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
