use curvedge::{Algorithm, EdgeConfig, EdgeSnapshot};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Edge(curvedge::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Edge(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<curvedge::Error> for CliError {
    fn from(value: curvedge::Error) -> Self {
        Self::Edge(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Frame,
    Path,
    Derive,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    verbose: bool,
    algorithm: Option<Algorithm>,
    config: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "curvedge-cli\n\
\n\
USAGE:\n\
  curvedge-cli [frame] [--pretty] [--algorithm <name>] [--config <path>] [--out <path>] [--verbose] [<path>|-]\n\
  curvedge-cli path [--algorithm <name>] [--config <path>] [--out <path>] [--verbose] [<path>|-]\n\
  curvedge-cli derive [--pretty] [--algorithm <name>] [--config <path>] [--out <path>] [--verbose] [<path>|-]\n\
\n\
NOTES:\n\
  - Input is an edge snapshot JSON document: { id?, source, target, sourceSide?, targetSide?,\n\
    selected?, sourceSelected?, targetSelected?, data? }.\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - <name> is one of: linear, bezier, catmull-rom, bezier-catmull-rom.\n\
  - --config reads a JSON object of overrides merged onto the built-in defaults.\n\
  - Logging goes to stderr; filter with CURVEDGE_LOG (default: warn).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "frame" => args.command = Command::Frame,
            "path" => args.command = Command::Path,
            "derive" => args.command = Command::Derive,
            "--pretty" => args.pretty = true,
            "--verbose" | "-v" => args.verbose = true,
            "--algorithm" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.algorithm = Some(Algorithm::parse(name).ok_or(CliError::Usage(usage()))?);
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn init_logging(verbose: bool) {
    let env = std::env::var("CURVEDGE_LOG").ok();
    if !verbose && env.is_none() {
        return;
    }
    let filter = env
        .and_then(|raw| tracing_subscriber::EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| {
            let level = if verbose { "debug" } else { "warn" };
            tracing_subscriber::EnvFilter::new(level)
        });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn load_config(path: Option<&str>) -> Result<EdgeConfig, CliError> {
    let Some(path) = path else {
        return Ok(EdgeConfig::default());
    };
    let text = std::fs::read_to_string(path)?;
    Ok(EdgeConfig::from_json_str(&text)?)
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            println!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))?;
            Ok(())
        }
    }
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    write_text(&text, out)
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;
    let text = read_input(args.input.as_deref())?;
    let mut snapshot = EdgeSnapshot::from_json_str(&text)?;
    if let Some(algorithm) = args.algorithm {
        snapshot.data.algorithm = Some(algorithm);
    }
    tracing::debug!(
        edge_id = %snapshot.id,
        points = snapshot.data.points.len(),
        "loaded edge snapshot"
    );

    match args.command {
        Command::Frame => write_json(&snapshot.render(&config), args.pretty, args.out.as_deref()),
        Command::Path => write_text(&snapshot.render(&config).d, args.out.as_deref()),
        Command::Derive => write_json(&snapshot.derive(&config), args.pretty, args.out.as_deref()),
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    init_logging(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
