//! Traverse evaluator CLI.

use trav_diagnostic::{ColorMode, Diagnostic, TerminalEmitter};
use trav_eval::FunctionRegistry;
use travc::commands::{explain_error, list_points, run_traverse};
use travc::config::{parse_args, Invocation};

fn main() {
    travc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let inv = invocation_or_exit(&args[2..], "travc run <file> [options]");
            report(run_traverse(&inv.path, &inv.config));
        }
        "points" => {
            let inv = invocation_or_exit(&args[2..], "travc points <file> [--origin=LAT,LON]");
            report(list_points(&inv.path, &inv.config));
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: travc explain <ERROR_CODE>");
                eprintln!("Example: travc explain E2002");
                std::process::exit(1);
            }
            match explain_error(&args[2]) {
                Ok(doc) => println!("{doc}"),
                Err(msg) => {
                    eprintln!("{msg}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("travc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn invocation_or_exit(args: &[String], usage: &str) -> Invocation {
    match parse_args(args) {
        Ok(inv) => inv,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Usage: {usage}");
            std::process::exit(1);
        }
    }
}

/// Print the command output, or render the diagnostic and exit with 1.
fn report(result: Result<String, Diagnostic>) {
    match result {
        Ok(out) => println!("{out}"),
        Err(diag) => {
            let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
            let mut emitter =
                TerminalEmitter::with_color_mode(std::io::stderr(), ColorMode::Auto, is_tty);
            if emitter.emit(&diag).and_then(|()| emitter.flush()).is_err() {
                eprintln!("{diag}");
            }
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Traverse evaluator");
    println!();
    println!("Usage: travc <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>           Evaluate a record file and print a WKT feature row");
    println!("  points <file>        Evaluate a record file and list every point");
    println!("  explain <code>       Explain an error code (e.g., E2002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --name=<name>        Feature name (default: file name)");
    println!("  --desc=<text>        Feature description");
    println!("  --polygon            Emit a closed POLYGON instead of a LINESTRING");
    println!("  --origin=<lat,lon>   Start from a known point before the first record");
    println!();
    println!("Functions available to F records:");
    for signature in FunctionRegistry::with_builtins().signatures() {
        println!("  {signature}");
    }
    println!();
    println!("Set RUST_LOG=trav_eval=debug to trace evaluation.");
}
