use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt text, printing the ciphertext as uppercase hex
    Encrypt(CommonArgs),

    /// Decrypt a hex ciphertext, printing the recovered text
    Decrypt(CommonArgs),

    /// Generate a random key, printed as hex
    Keygen(KeygenArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct CommonArgs {
    /// Word size in bits.
    #[arg(
        short = 'w',
        long = "word-size",
        value_enum,
        default_value_t = WordBits::Bits32,
    )]
    pub word_size: WordBits,

    /// Number of rounds (0 to 255).
    #[arg(short = 'r', long = "rounds", default_value_t = 12)]
    pub rounds: u32,

    /// Secret key, taken as UTF-8 bytes.
    #[arg(short = 'k', long = "key", default_value = "")]
    pub key: String,

    /// Input text: plaintext for encrypt, hex ciphertext for decrypt.
    pub input: String,
}

#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Key length in bytes (0 to 255).
    #[arg(long = "bytes", default_value_t = 16)]
    pub bytes: usize,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum WordBits {
    #[value(name = "16")]
    Bits16,
    #[value(name = "32")]
    Bits32,
    #[value(name = "64")]
    Bits64,
}

impl WordBits {
    pub fn bits(self) -> u32 {
        match self {
            WordBits::Bits16 => 16,
            WordBits::Bits32 => 32,
            WordBits::Bits64 => 64,
        }
    }
}
