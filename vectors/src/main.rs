use std::io::{self, Read, Write};
use std::process::ExitCode;

use ecvectors::{generate, GeneratorConfig, Result, TestVectors};

fn emit() -> Result<()> {
    let vectors = generate(GeneratorConfig::from_env())?;
    log::info!("writing {} cases", vectors.len());

    let mut stdout = io::stdout().lock();
    vectors.to_writer(&mut stdout)?;
    writeln!(stdout)?;
    Ok(())
}

fn verify() -> Result<()> {
    let mut document = String::new();
    io::stdin().read_to_string(&mut document)?;
    TestVectors::from_json_str(&document)?.verify()
}

fn main() -> ExitCode {
    env_logger::init();

    let result = match std::env::args().nth(1).as_deref() {
        None => emit(),
        Some("verify") => verify(),
        Some(other) => {
            eprintln!("unknown command {other:?}; usage: gen-ec-vectors [verify]");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
