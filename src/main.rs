// SPDX-License-Identifier: MPL-2.0
use iced_glance::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let config_path: Option<PathBuf> = match args.opt_value_from_str("--config") {
        Ok(path) => path,
        Err(err) => {
            log::warn!("Ignoring --config: {err}");
            None
        }
    };

    let flags = Flags {
        config_path,
        image_path: args.finish().into_iter().next().map(PathBuf::from),
    };

    app::run(flags)
}
