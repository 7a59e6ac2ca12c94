//! Diagnostic logging setup.
//!
//! Library code logs through the `log` facade; the binary installs
//! `env_logger` once at start-up. `RUST_LOG` is honoured, `--verbose`
//! forces debug level. Diagnostics go to stderr so they never mix with
//! `--json` output on stdout.

use env_logger::{Builder, Env};
use log::LevelFilter;

pub fn init(verbose: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None);

    // A second init (tests calling run() twice) is harmless.
    let _ = builder.try_init();
}
