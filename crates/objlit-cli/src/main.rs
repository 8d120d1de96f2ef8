use clap::{Parser, Subcommand};

mod commands;
mod util;

#[derive(Parser)]
#[command(name = "objlit", about = "JavaScript object-literal utilities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort the keys of an object literal and print the result
    Sort(commands::sort::Args),
    /// Print the strict-JSON encoded form of an object literal
    Encode(commands::encode::Args),
    /// Render an encoded JSON document back as object-literal source
    Decode(commands::decode::Args),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sort(args) => commands::sort::run(args),
        Commands::Encode(args) => commands::encode::run(args),
        Commands::Decode(args) => commands::decode::run(args),
    }
}
