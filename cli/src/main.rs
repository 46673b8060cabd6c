use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use sss::{Share, ShamirScheme};

fn print_usage() {
    eprintln!("Usage: sss <mode> [args]");
    eprintln!("Modes:");
    eprintln!("  generate <secret> <n> <k>  - Generate n shares with threshold k");
    eprintln!("  reconstruct <k>            - Reconstruct secret from k shares (stdin)");
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(mode) = args.next() else {
        print_usage();
        return ExitCode::FAILURE;
    };

    let rest: Vec<String> = args.collect();
    match mode.as_str() {
        "generate" => generate(&rest),
        "reconstruct" => reconstruct(&rest),
        _ => {
            eprintln!("Unknown mode '{mode}'. Expected 'generate' or 'reconstruct'.");
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn generate(args: &[String]) -> ExitCode {
    let [secret, n, k] = args else {
        eprintln!("Usage: sss generate <secret> <n> <k>");
        return ExitCode::FAILURE;
    };

    let (Ok(n), Ok(k)) = (n.parse::<usize>(), k.parse::<usize>()) else {
        eprintln!("n and k must be positive integers.");
        return ExitCode::FAILURE;
    };

    let scheme = match ShamirScheme::new(k, n) {
        Ok(scheme) => scheme,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let shares = match scheme.split(secret.as_bytes()) {
        Ok(shares) => shares,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    for share in &shares {
        if writeln!(stdout, "{share}").is_err() {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn reconstruct(args: &[String]) -> ExitCode {
    let [k] = args else {
        eprintln!("Usage: sss reconstruct <k>");
        return ExitCode::FAILURE;
    };

    let Ok(k) = k.parse::<usize>() else {
        eprintln!("k must be a positive integer.");
        return ExitCode::FAILURE;
    };

    // Only the threshold matters for reconstruction.
    let scheme = match ShamirScheme::new(k, k) {
        Ok(scheme) => scheme,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let shares = match read_shares(k) {
        Ok(shares) => shares,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match scheme.reconstruct(&shares) {
        Ok(secret) => {
            println!("Reconstructed secret: {}", String::from_utf8_lossy(&secret));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Read k whitespace-separated "index value" pairs from stdin.
fn read_shares(k: usize) -> Result<Vec<Share>, String> {
    let mut tokens: Vec<String> = Vec::with_capacity(2 * k);
    for line in io::stdin().lock().lines() {
        let line = line.map_err(|err| format!("Failed to read stdin: {err}"))?;
        tokens.extend(line.split_whitespace().map(str::to_owned));
        if tokens.len() >= 2 * k {
            break;
        }
    }

    if tokens.len() < 2 * k {
        return Err(format!(
            "Expected {k} 'index value' pairs on stdin, got {} values.",
            tokens.len()
        ));
    }

    tokens[..2 * k]
        .chunks_exact(2)
        .map(|pair| {
            format!("{} {}", pair[0], pair[1])
                .parse::<Share>()
                .map_err(|err| err.to_string())
        })
        .collect()
}
