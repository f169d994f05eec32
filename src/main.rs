//! rid: show one or more git repository randomart ids
//! Hashes the latest commit of every discovered repository and draws the result.

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use std::process::ExitCode;

use goobits_rid::commands::handle_show_command;
use goobits_rid::core::{DisplayOptions, Settings};
use goobits_rid::telemetry::init_tracing;

const ABOUT: &str = "Show a repository unique id";
const AFTER_HELP: &str = "\
Inside a git repository, the id of that repository is shown. Elsewhere the
repositories listed in ./.mgit (one directory per line) are used, or, without
a manifest, every git repository directly below the current directory.

Defaults for the display flags can be set in ~/.config/rid/config.toml
(or the file named by RID_CONFIG).";

fn build_cli() -> ClapCommand {
    ClapCommand::new("rid")
        .version(env!("CARGO_PKG_VERSION"))
        .about(ABOUT)
        .after_help(AFTER_HELP)
        .arg(
            Arg::new("no-color")
                .short('C')
                .help("Do not colorize first character in sha1 chunk")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("clear")
                .short('c')
                .help("Clear screen before showing output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("flip")
                .short('f')
                .help("Flip output horizontally")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("right")
                .short('r')
                .help("Align output to the right")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("split")
                .short('s')
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Split sha1 sum into N-character strings. default is 10. Set to 0 to disable splitting"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .help("Print the repositories and git commands used")
                .action(ArgAction::SetTrue),
        )
}

/// Layers command line flags over the settings file
fn resolve_options(settings: &Settings, matches: &ArgMatches) -> DisplayOptions {
    let mut options = settings.display_options();
    if let Some(&chunk_size) = matches.get_one::<usize>("split") {
        options.chunk_size = chunk_size;
    }
    options.no_color |= matches.get_flag("no-color");
    options.clear_screen |= matches.get_flag("clear");
    options.flip |= matches.get_flag("flip");
    options.align_right |= matches.get_flag("right");
    options.debug = matches.get_flag("debug");
    options
}

async fn run(matches: &ArgMatches) -> Result<()> {
    let settings = Settings::load()?;
    let options = resolve_options(&settings, matches);
    tracing::debug!("options: {:?}", options);

    handle_show_command(&options, &settings).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_flag("debug"));

    match run(&matches).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rid: {e:#}");
            ExitCode::FAILURE
        }
    }
}
