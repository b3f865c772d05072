mod args;

use args::{Cli, Commands};
use clap::Parser;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("input text must not be empty")]
    EmptyInput,

    #[error(transparent)]
    Rc5(#[from] rc5x::Error),
}

fn main() {
    if let Err(e) = rc5_cli() {
        eprintln!("error: {e}");
    }
}

fn rc5_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(common) => {
            if common.input.is_empty() {
                return Err(CliError::EmptyInput);
            }

            let ciphertext = rc5x::encrypt(
                common.word_size.bits(),
                common.rounds,
                &common.input,
                &common.key,
            )?;
            println!("{ciphertext}");
            Ok(())
        }
        Commands::Decrypt(common) => {
            if common.input.is_empty() {
                return Err(CliError::EmptyInput);
            }

            let plaintext = rc5x::decrypt(
                common.word_size.bits(),
                common.rounds,
                &common.input,
                &common.key,
            )?;
            println!("{plaintext}");
            Ok(())
        }
        Commands::Keygen(keygen) => {
            let key = rc5x::Key::random(keygen.bytes)?;
            for b in key.as_bytes() {
                print!("{b:02x}");
            }
            println!();
            Ok(())
        }
    }
}
