use clap::{Parser, Subcommand};
use pitax::cmd::{
    brackets::BracketsCommand, calculate::CalculateCommand, records::RecordsCommand,
    schema::SchemaCommand, submit::SubmitCommand, verify::VerifyCommand,
};
use pitax::store::RecordStore;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pitax", version, about = "Personal Income Tax Calculator")]
struct Cli {
    /// CSV file holding saved tax records
    #[arg(short, long, global = true, env = "PITAX_FILE", default_value = "tax_records.csv")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate tax payable for an income and relief
    Calculate(CalculateCommand),
    /// Check an IC number and password
    Verify(VerifyCommand),
    /// Verify credentials, calculate and save a record
    Submit(SubmitCommand),
    /// List saved records
    Records(RecordsCommand),
    /// Print the tax brackets
    Brackets(BracketsCommand),
    /// Describe the record file format
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let store = RecordStore::new(cli.file);
    log::debug!("Using record file {}", store.path().display());

    match &cli.command {
        Command::Calculate(cmd) => cmd.exec(),
        Command::Verify(cmd) => cmd.exec(),
        Command::Submit(cmd) => cmd.exec(&store),
        Command::Records(cmd) => cmd.exec(&store),
        Command::Brackets(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
