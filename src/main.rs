use std::{
    env,
    error::Error as _,
    fs::{self, File},
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use tracing::{info, warn};
use typy::{
    display_unknown,
    errors::errors::{Error, ErrorImpl, ErrorTip},
    scan, write_dump, TokenKind,
};

fn main() -> ExitCode {
    init_tracing();

    match run(env::args().collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}

/// Installs a subscriber only when RUST_LOG asks for one.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(args: Vec<String>) -> Result<(), Error> {
    if args.len() < 2 || args.len() > 3 {
        let program = args.first().cloned().unwrap_or_else(|| String::from("typy"));
        return Err(ErrorImpl::Usage { program }.into());
    }

    let path = PathBuf::from(&args[1]);
    let bytes = fs::read(&path).map_err(|source| ErrorImpl::ReadSource {
        path: path.clone(),
        source,
    })?;
    let source = String::from_utf8(bytes)
        .map_err(|_| ErrorImpl::InvalidUtf8 { path: path.clone() })?;

    info!(file = %path.display(), "tokenizing");
    let start = Instant::now();
    let tokens = scan(&source);
    info!(tokens = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    let file_name = path.to_string_lossy();
    for token in tokens.iter().filter(|token| token.kind == TokenKind::Unknown) {
        warn!(text = ?token.text, line = token.line + 1, col = token.start_col + 1, "unknown token");
        eprint!("{}", display_unknown(token, &source, &file_name));
    }

    match args.get(2) {
        Some(out) => {
            let out_path = PathBuf::from(out);
            let file = File::create(&out_path).map_err(|source| ErrorImpl::WriteDump {
                path: out_path.clone(),
                source,
            })?;
            write_dump(&tokens, BufWriter::new(file)).map_err(|source| ErrorImpl::WriteDump {
                path: out_path.clone(),
                source,
            })?;
            info!(dump = %out_path.display(), "wrote token dump");
        }
        None => {
            write_dump(&tokens, io::stdout().lock()).map_err(|source| ErrorImpl::WriteDump {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        }
    }

    Ok(())
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", error);

    let mut cause = error.get_kind().source();
    while let Some(inner) = cause {
        eprintln!("   caused by: {}", inner);
        cause = inner.source();
    }
}
