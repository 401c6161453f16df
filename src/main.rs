// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};

const HELP: &str = "\
IcedGallery - photo section thumbnail gallery

USAGE:
  iced_gallery [OPTIONS] [SECTIONS_FILE]

OPTIONS:
  -h, --help               Print this help
  --lang <CODE>            Interface language (e.g. en-US, fr)
  --config-dir <DIR>       Directory holding settings.toml
  --data-dir <DIR>         Directory holding the saved session
  --i18n-dir <DIR>         Directory with additional .ftl translations

ARGS:
  SECTIONS_FILE            JSON or TOML file listing photo sections
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let i18n_dir = args.opt_value_from_str("--i18n-dir")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        file_path,
        i18n_dir,
        data_dir,
        config_dir,
    }))
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("[ERROR] {err}");
            eprint!("{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
