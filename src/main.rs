use photosite::app::{self, paths, Flags};

const USAGE: &str = "\
photosite - photo portfolio viewer

USAGE:
    photosite [OPTIONS] [PATH]

ARGS:
    <PATH>    Portfolio manifest (.toml), image file, or image directory

OPTIONS:
        --lang <LOCALE>       Force the UI locale (e.g. en-US, zh-TW)
        --config-dir <DIR>    Override the settings directory
    -h, --help                Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}
