use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use tuition_grants::config::ConfigLoader;
use tuition_grants::console::{ScreenStyle, Session, SessionOptions};
use tuition_grants::error::GrantResult;
use tuition_grants::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "tuition-grants",
    about = "Record student tuition grant applications and identify grant awardees",
    version
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Disable logging entirely
    #[arg(short, long)]
    quiet: bool,
    /// Skip the startup banner
    #[arg(long)]
    no_splash: bool,
    /// Do not clear the screen between menus
    #[arg(long)]
    no_clear: bool,
    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = telemetry::init(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Session failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> GrantResult<()> {
    let config = ConfigLoader::embedded()?.into_config();
    let options = SessionOptions {
        show_splash: !cli.no_splash,
        style: ScreenStyle {
            color: !cli.no_color,
            clear: !cli.no_clear,
        },
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, options, stdin.lock(), stdout.lock());
    session.run()
}
