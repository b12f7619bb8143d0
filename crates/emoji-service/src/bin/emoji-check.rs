//! Emoji catalog check entry point
//!
//! Loads the emoji catalog the way a server does at startup, then resolves
//! every name given on the command line:
//! ```bash
//! cargo run -p emoji-service --bin emoji-check -- smile +1 zulip
//! ```
//!
//! Exits non-zero if the catalog cannot be loaded or a name does not resolve.

use anyhow::Context;
use emoji_common::{try_init_tracing_with_config, EmojiConfig, TracingConfig};
use emoji_core::{Realm, Snowflake};
use emoji_service::{EmojiContext, EmojiResolver};
use tracing::{error, info};

fn main() {
    let config = match EmojiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    match run(&config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            error!(error = %format!("{e:#}"), "Emoji check failed");
            std::process::exit(1);
        }
    }
}

fn run(config: &EmojiConfig) -> anyhow::Result<bool> {
    info!(env = ?config.app.env, app = %config.app.name, "Starting emoji check");

    let ctx = EmojiContext::from_config(config).context("loading emoji catalog")?;
    let resolver = EmojiResolver::new(&ctx);

    // Custom emoji live in the database; only extra and unicode emoji resolve here
    let realm = Realm::new(Snowflake::default(), config.app.name.clone());

    let mut all_resolved = true;
    for name in std::env::args().skip(1) {
        match resolver.resolve(&realm, &name) {
            Ok(resolved) => println!("{name}\t{}\t{}", resolved.emoji_code, resolved.emoji_type),
            Err(e) => {
                println!("{name}\t-\t{e}");
                all_resolved = false;
            }
        }
    }

    Ok(all_resolved)
}
