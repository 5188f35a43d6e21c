use clap::Parser;
use std::process::ExitCode;
use upload_core::foobar;

const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, Parser)]
#[command(
    name = "foobar",
    version,
    about = "Print a number sequence, replacing multiples of --foo and --bar"
)]
struct Cli {
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    start: i64,
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    end: i64,
    #[arg(long, default_value_t = 3)]
    foo: i64,
    #[arg(long, default_value_t = 5)]
    bar: i64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match foobar(cli.start, cli.end, cli.foo, cli.bar) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Error: {err}");
            ExitCode::from(EXIT_INVALID_INPUT)
        }
    }
}
