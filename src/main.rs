// SPDX-License-Identifier: MPL-2.0
use iced_dice::app::{self, paths, Flags};
use iced_dice::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: parse_opt(&mut args, "--lang"),
        config_dir: parse_opt(&mut args, "--config-dir"),
        assets_dir: parse_opt(&mut args, "--assets-dir"),
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_opt(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "ignoring {key}");
            None
        }
    }
}
