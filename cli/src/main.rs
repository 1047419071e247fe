mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, check, complete, format, validate};
use evento_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        redact: commands.redact,
    };

    print::banner(&cfg);

    let passed: bool = match commands.command {
        Commands::Format { kind, input } => {
            print::section("formatting", &cfg);
            format::format(kind, &input, &cfg)?;
            true
        }
        Commands::Validate { kind, input } => {
            print::section("validating", &cfg);
            validate::validate(kind, &input, &cfg)?
        }
        Commands::Check { inputs, file } => {
            print::section("getting ready for inspection", &cfg);
            check::check(&inputs, file, &cfg)?
        }
        Commands::Complete { kind, base } => {
            print::section("computing check digits", &cfg);
            complete::complete(kind, &base, &cfg)?;
            true
        }
    };

    print::closing_rule(&cfg);

    Ok(if passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
