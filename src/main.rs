use clap::Parser;
use multirange::cli::cli_args::CliArgs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match args.page_set() {
        Ok(set) => {
            println!("{}", set);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}
