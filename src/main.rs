use clap::Parser;
use encrypted_config_value::cli::{self, commands, output, Cli, Commands};
use encrypted_config_value::config::Settings;
use encrypted_config_value::errors::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let project_dir = std::env::current_dir()?;
    let settings = Settings::load(&project_dir)?;
    cli::init_logging(cli.verbose, &settings);

    match cli.command {
        Commands::Encrypt { ref value } => {
            commands::encrypt::execute(cli, &settings, &project_dir, value.as_deref())
        }
        Commands::Decrypt { ref value } => {
            commands::decrypt::execute(cli, &settings, &project_dir, value.as_deref())
        }
        Commands::Inspect { ref value } => commands::inspect::execute(value.as_deref()),
        Commands::Substitute { ref file, strict } => {
            commands::substitute::execute(cli, &settings, &project_dir, file, strict)
        }
        Commands::Completions { ref shell } => commands::completions::execute(shell),
    }
}
