use colored::Colorize;
use ctor_chain::{Console, Construct, SuperChild};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut console = Console::stdout();
    let result = SuperChild::construct(&mut console).and_then(|_| console.flush());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
