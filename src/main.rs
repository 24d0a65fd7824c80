// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use stylebook::app::{self, Flags};
use stylebook::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Stylebook - design system reference

USAGE:
  stylebook [OPTIONS]

OPTIONS:
  -h, --help                Print this help
  --theme <MODE>            light, dark or system
  --section <LABEL>         Menu entry to open at startup
  --catalog-dir <PATH>      Directory with catalog files to use instead of the bundled ones
  --config-dir <PATH>       Directory holding settings.toml
  --copy-ack-ms <MILLIS>    How long \"Copied!\" stays visible

ENVIRONMENT:
  STYLEBOOK_CONFIG_DIR      Same as --config-dir
  RUST_LOG                  Log filter (default: info)
";

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "stylebook failed");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        theme: args.opt_value_from_str::<_, ThemeMode>("--theme")?,
        section: args.opt_value_from_str("--section")?,
        catalog_dir: args.opt_value_from_str::<_, PathBuf>("--catalog-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        copy_ack_ms: args.opt_value_from_str("--copy-ack-ms")?,
    })
}
