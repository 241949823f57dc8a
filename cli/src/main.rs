mod commands;
mod terminal;

use commands::{check, convert, CommandLine, Commands};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet, commands.verbose);
    let cfg = commands.to_config();

    print::banner(cfg.quiet);

    match commands.command {
        Commands::Convert { .. } => {
            print::header("converting vendor registry", cfg.quiet);
            convert::convert(&cfg)
        }
        Commands::Check => {
            print::header("checking vendor registry", cfg.quiet);
            check::check(&cfg)
        }
    }
}
