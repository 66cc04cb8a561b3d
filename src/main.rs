use std::env;
use std::process::ExitCode;

use tag_filter::error;

/// CLI: `tag_filter <expression> [subject...]`. With subjects, prints the
/// verdict; without, prints the parsed tree.
fn main() -> ExitCode {
    let args: Vec<_> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: tag_filter <expression> [subject...]");
        return ExitCode::FAILURE;
    }

    let source = &args[1];
    match tag_filter::parse(source) {
        Ok(expr) => {
            if args.len() > 2 {
                println!("{}", tag_filter::evaluate(&expr, &args[2..]));
            } else {
                println!("{}", expr);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error::print_error(source, &e);
            ExitCode::FAILURE
        }
    }
}
