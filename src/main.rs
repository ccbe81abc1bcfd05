use clap::Parser;
use passcodec::cli::{Cli, Commands, HashOverrides};
use passcodec::errors::PassCodecError;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Hash {
            ref algorithm,
            iterations,
            salt_size,
            cost,
        } => {
            let overrides = HashOverrides {
                algorithm: algorithm.clone(),
                iterations,
                salt_size,
                cost,
            };
            passcodec::cli::commands::hash::execute(&cli, &overrides)
        }
        Commands::Verify { ref stored_hash } => {
            passcodec::cli::commands::verify::execute(&cli, stored_hash)
        }
        Commands::Inspect {
            ref stored_hash,
            json,
        } => passcodec::cli::commands::inspect::execute(&cli, stored_hash, json),
        Commands::Algorithms => passcodec::cli::commands::algorithms::execute(&cli),
        Commands::Version => passcodec::cli::commands::version::execute(),
        Commands::Completions { shell } => passcodec::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passcodec::cli::output::error(&e.to_string());
        // 1 = mismatch, 78 = configuration (EX_CONFIG), 2 = anything else.
        let code = match e {
            PassCodecError::PasswordMismatch => 1,
            ref e if e.is_configuration() => 78,
            _ => 2,
        };
        std::process::exit(code);
    }
}
