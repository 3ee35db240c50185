use std::{
    fs,
    io::{self, IsTerminal, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand, ValueEnum};
use jsonmodel::{try_decode_bytes, try_deserialize, User};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsonmodel", version, about = "Decode JSON documents into typed models")]
struct Cli {
    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode each input into a user.
    User {
        /// Input files, `-` reads from stdin.
        #[arg(value_name = "PATH")]
        paths: Vec<PathBuf>,
        /// Output format for decoded users.
        #[arg(long, value_enum, default_value_t = Output::Json)]
        output: Output,
        /// Report why an input could not be decoded.
        #[arg(long)]
        explain: bool,
    },
    /// Show how an input is classified.
    Value {
        /// Input file, `-` reads from stdin.
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Output {
    Json,
    Text,
}

const STDIN: &str = "-";

fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    if path.as_os_str() == STDIN {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read(path)
    }
}

fn label(path: &Path) -> String {
    if path.as_os_str() == STDIN {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn render_user(user: &User, output: Output) -> Result<String, serde_json::Error> {
    match output {
        Output::Json => serde_json::to_string(user),
        Output::Text => Ok(match user.avatar_url() {
            Some(url) => format!("{} <{url}>", user.first_name()),
            None => user.first_name().to_string(),
        }),
    }
}

fn decode_users(paths: Vec<PathBuf>, output: Output, explain: bool) -> io::Result<bool> {
    let paths = if paths.is_empty() {
        vec![PathBuf::from(STDIN)]
    } else {
        paths
    };
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let mut success = true;
    for path in &paths {
        let label = label(path);
        let bytes = match read_input(path) {
            Ok(bytes) => bytes,
            Err(error) => {
                writeln!(stderr, "{label}: {error}")?;
                success = false;
                continue;
            }
        };
        tracing::debug!(input = %label, size = bytes.len(), "Decoding user");
        match try_decode_bytes::<User>(&bytes) {
            Ok(user) => {
                let rendered = render_user(&user, output).map_err(io::Error::other)?;
                writeln!(stdout, "{rendered}")?;
            }
            Err(error) => {
                if explain {
                    writeln!(stderr, "{label}: invalid user: {error}")?;
                } else {
                    writeln!(stderr, "{label}: invalid user")?;
                }
                success = false;
            }
        }
    }
    Ok(success)
}

fn show_value(path: Option<PathBuf>) -> io::Result<bool> {
    let path = path.unwrap_or_else(|| PathBuf::from(STDIN));
    let label = label(&path);
    let bytes = match read_input(&path) {
        Ok(bytes) => bytes,
        Err(error) => {
            writeln!(io::stderr().lock(), "{label}: {error}")?;
            return Ok(false);
        }
    };
    match try_deserialize(&bytes) {
        Ok(value) => {
            let rendered = serde_json::Value::from(&value);
            writeln!(io::stdout().lock(), "{}: {rendered}", value.json_type())?;
            Ok(true)
        }
        Err(error) => {
            writeln!(io::stderr().lock(), "{label}: invalid JSON: {error}")?;
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    let result = match cli.command {
        Command::User {
            paths,
            output,
            explain,
        } => decode_users(paths, output, explain),
        Command::Value { path } => show_value(path),
    };
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            let _ = writeln!(io::stderr(), "Error: {error}");
            ExitCode::FAILURE
        }
    }
}
