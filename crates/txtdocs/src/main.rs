//! Command-line interface for the `txtdocs` search tool.

use std::process::ExitCode;

use txtdocs::cli::{CommandContext, args::parse_cli, commands, logging};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let ctx = match CommandContext::load(cli.index) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command.unwrap_or_default(), &ctx)
}
