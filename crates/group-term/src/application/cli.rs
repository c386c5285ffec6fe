use clap::Arg;
use clap::Command;
use strum::IntoEnumIterator;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::configuration::LOG_LEVELS;

fn describe(key: ConfigKey) -> &'static str {
    return match key {
        ConfigKey::LogFile => "Append-mode file receiving diagnostic logs. Falls back to stderr when it can't be opened.",
        ConfigKey::LogLevel => "Lowest level written to the log.",
        ConfigKey::Placeholder => "Text shown while the input is empty.",
        ConfigKey::Title => "Label embedded in the top border of the box.",
    };
}

fn arg(key: ConfigKey) -> Arg {
    let mut arg = Arg::new(key.to_string())
        .long(key.to_string())
        .env(Config::env_var(key))
        .num_args(1)
        .help(format!("{} [default: {}]", describe(key), Config::default(key)));

    if key == ConfigKey::LogLevel {
        arg = arg.value_parser(LOG_LEVELS);
    }

    return arg;
}

pub fn build() -> Command {
    let mut cmd = Command::new("group-term")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Type a group name into a titled box. Enter clears it, ctrl+c exits.");

    for key in ConfigKey::iter() {
        cmd = cmd.arg(arg(key));
    }

    return cmd;
}
