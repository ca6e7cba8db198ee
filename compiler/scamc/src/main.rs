//! The `scam` command-line tool.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use scamc::commands::{
    check_eq, check_err, eval_expr, explain_error, repl, run_file, run_tests, Status,
};
use scamc::{init_tracing, RunConfig};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return Status::Usage.into();
    };

    let (config, rest) = match RunConfig::from_args(&args[2..]) {
        Ok(parsed) => parsed,
        Err(error) => {
            eprintln!("error: {error}");
            return Status::Usage.into();
        }
    };
    let no_color = std::env::var("NO_COLOR").ok();
    let config = config
        .with_no_color(no_color.as_deref())
        .with_tty(io::stderr().is_terminal());

    let mut out = io::stdout().lock();
    let mut err = io::stderr();

    let status = match (command.as_str(), rest.as_slice()) {
        ("eval", [source]) => eval_expr(source, &config, &mut out, &mut err),
        ("eval", _) => usage("scam eval <expr>"),
        ("run", [path]) => run_file(&PathBuf::from(path), &config, &mut out, &mut err),
        ("run", _) => usage("scam run <file.scm> [--sequential]"),
        ("test", []) => usage("scam test <file.scm>... [--sequential] [--verbose]"),
        ("test", paths) => {
            let paths: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
            Status::from(&run_tests(&paths, &config, &mut out))
        }
        ("check-eq", [code, expected]) => check_eq(code, expected, &mut err),
        ("check-eq", _) => usage(
            "scam check-eq <code> <expected>  (compares renderings: 2 and 2.0 differ)",
        ),
        ("check-err", [code]) => check_err(code, &mut err),
        ("check-err", _) => usage("scam check-err <code>"),
        ("repl", []) => repl(&mut io::stdin().lock(), &config, &mut out, &mut err),
        ("repl", _) => usage("scam repl"),
        ("explain" | "--explain", [code]) => explain_error(code, &mut out, &mut err),
        ("explain" | "--explain", _) => usage("scam explain <ERROR_CODE>"),
        ("help" | "--help" | "-h", _) => {
            print_usage();
            Status::Success
        }
        ("version" | "--version", _) => {
            println!("scam {}", env!("CARGO_PKG_VERSION"));
            Status::Success
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            Status::Usage
        }
    };

    status.into()
}

fn usage(line: &str) -> Status {
    eprintln!("Usage: {line}");
    Status::Usage
}

fn print_usage() {
    println!("Scam, a small S-expression evaluator");
    println!();
    println!("Usage: scam <command> [options]");
    println!();
    println!("Commands:");
    println!("  eval <expr>                 Evaluate one expression and print it");
    println!("  run <file.scm>              Evaluate every expression in a file");
    println!("  test <file.scm>...          Replay transcript files");
    println!("  check-eq <code> <expected>  Exit 0 iff both render the same (2 and 2.0 differ)");
    println!("  check-err <code>            Exit 0 iff evaluation fails");
    println!("  repl                        Read-eval-print loop (quit or EOF to exit)");
    println!("  explain <code>              Explain an error code (e.g. E6001)");
    println!("  help                        Show this help message");
    println!("  version                     Show version information");
    println!();
    println!("Options:");
    println!("  --color=auto|always|never   Diagnostic colors (NO_COLOR is honored)");
    println!("  -s, --sequential            Do not evaluate in parallel");
    println!("  -v, --verbose               Report passing transcript cases");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=scam_eval=trace) for evaluator logs.");
}
