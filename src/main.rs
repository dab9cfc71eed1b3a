use clap::Parser;
use log::debug;
use predicate_cli::{
    Config,
    cli::{self, CLI_NAME, CLI_VERSION, OutputFormat, PredicateCommands},
    error::Result,
};

#[derive(Parser)]
#[command(name = CLI_NAME, author, version, about)]
pub struct Cli {
    /// Output format
    #[arg(long = "format", global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: PredicateCommands,
}

fn main() -> Result<()> {
    // Initialize logging
    predicate_cli::init_logging()?;

    // Parse command line arguments
    let cli = Cli::parse();
    debug!("{CLI_NAME} {CLI_VERSION}");

    let config = Config {
        output_format: cli.format,
    };

    let result = cli::handle_predicate_command(cli.command, &config);

    // Format and display any errors
    if let Err(ref e) = result {
        eprintln!("{}", cli::format_error(e));
    }

    result
}
