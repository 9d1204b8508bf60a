use std::io::{self, Read};
use std::process::ExitCode;

use chaineval::{evaluate, parse, Syntax};

fn main() -> ExitCode {
    env_logger::init();

    let syntax = match std::env::args().nth(1).as_deref() {
        Some("addchain") => Syntax::AddChain,
        _ => Syntax::Flow,
    };

    let mut source = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut source) {
        eprintln!("error: reading stdin: {err}");
        return ExitCode::FAILURE;
    }

    match parse(&source, syntax) {
        Ok(instructions) => {
            print!("{}", evaluate(&instructions));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
