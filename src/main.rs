mod bio;
mod bmi;
mod error;
mod macros;
mod session;

use std::io;

use clap::Parser;

use error::Error;
use session::Session;

#[derive(Parser)]
#[command(version, about = "Interactive BMI calculator")]
struct Args {}

fn main() -> Result<(), Error> {
    env_logger::init();
    Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();

    Session::new(stdin.lock(), stdout.lock()).run()
}
