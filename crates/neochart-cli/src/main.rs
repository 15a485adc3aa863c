use neochart::raster::{RasterError, RasterOptions, render_png};
use neochart::{Chart, SvgOptions, render_svg, to_yaml_string};
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Debug)]
enum CliError {
    Usage(String),
    Io(std::io::Error),
    Chart(neochart::Error),
    Raster(RasterError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Chart(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<neochart::Error> for CliError {
    fn from(value: neochart::Error) -> Self {
        Self::Chart(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Svg,
    Png,
    Yaml,
}

impl Command {
    fn extension(self) -> &'static str {
        match self {
            Command::Svg => "svg",
            Command::Png => "png",
            Command::Yaml => "yaml",
        }
    }
}

#[derive(Debug)]
struct Args {
    command: Command,
    input: String,
    out: Option<String>,
    svg: SvgOptions,
    raster: RasterOptions,
}

fn usage() -> &'static str {
    "neochart\n\
\n\
USAGE:\n\
  neochart svg [--indent <n>] [--xml-declaration] <path>|- [<out>|-]\n\
  neochart png [--scale|-s <n>] [--background <color>] <path>|- [<out>|-]\n\
  neochart yaml <path>|- [<out>|-]\n\
\n\
NOTES:\n\
  - <path> is a YAML chart document such as `piechart: {slices: [10, 15, 70]}`; '-' reads stdin.\n\
  - svg and png default to writing next to the input with the extension replaced\n\
    (or ./out.svg / ./out.png for stdin); an <out> of '-' writes to stdout.\n\
  - yaml prints the normalized document to stdout unless <out> is given.\n\
  - --scale must be a positive number (default 1); also accepted as --scale=<n> or -s=<n>.\n\
  - Set NEOCHART_LOG (e.g. NEOCHART_LOG=debug) to enable diagnostics on stderr.\n\
"
}

fn usage_error(msg: impl std::fmt::Display) -> CliError {
    CliError::Usage(format!("error: {msg}\n\n{}", usage()))
}

fn parse_scale(raw: &str) -> Result<f32, CliError> {
    let scale = raw
        .trim()
        .parse::<f32>()
        .map_err(|_| usage_error(format!("invalid scale '{raw}'")))?;
    if !(scale.is_finite() && scale > 0.0) {
        return Err(usage_error(format!("scale must be > 0, got {raw}")));
    }
    Ok(scale)
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut command = None;
    let mut positional: Vec<String> = Vec::new();
    let mut svg = SvgOptions::compact();
    let mut raster = RasterOptions::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        let (flag, inline) = match a.split_once('=') {
            Some((flag, value)) if flag.starts_with('-') => (flag, Some(value.to_string())),
            _ => (a.as_str(), None),
        };
        let mut value = |name: &str| -> Result<String, CliError> {
            inline
                .clone()
                .or_else(|| it.next().cloned())
                .ok_or_else(|| usage_error(format!("{name} requires a value")))
        };
        match flag {
            "--help" | "-h" => return Err(CliError::Usage(usage().to_string())),
            "--scale" | "-s" => raster.scale = parse_scale(&value("--scale")?)?,
            "--background" => {
                let bg = value("--background")?;
                if !bg.trim().is_empty() {
                    raster.background = Some(bg.trim().to_string());
                }
            }
            "--indent" => {
                let raw = value("--indent")?;
                let n = raw
                    .parse::<usize>()
                    .map_err(|_| usage_error(format!("invalid indent '{raw}'")))?;
                svg.indent = Some(n);
            }
            "--xml-declaration" => svg.xml_declaration = true,
            "-" => positional.push(a.clone()),
            other if other.starts_with('-') => {
                return Err(usage_error(format!("unknown option '{other}'")));
            }
            "svg" if command.is_none() => command = Some(Command::Svg),
            "png" if command.is_none() => command = Some(Command::Png),
            "yaml" if command.is_none() => command = Some(Command::Yaml),
            _ if command.is_none() => return Err(usage_error(format!("unknown command '{a}'"))),
            _ => positional.push(a.clone()),
        }
    }

    let Some(command) = command else {
        return Err(usage_error("missing command"));
    };
    let mut positional = positional.into_iter();
    let Some(input) = positional.next() else {
        return Err(usage_error("missing input path"));
    };
    let out = positional.next();
    if positional.next().is_some() {
        return Err(usage_error("too many arguments"));
    }

    Ok(Args {
        command,
        input,
        out,
        svg,
        raster,
    })
}

fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

fn default_out_path(input: &str, ext: &str) -> PathBuf {
    if input == "-" {
        PathBuf::from(format!("out.{ext}"))
    } else {
        PathBuf::from(input).with_extension(ext)
    }
}

fn write_output(bytes: &[u8], out: Option<&str>) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
        Some(path) => {
            tracing::debug!(path, bytes = bytes.len(), "writing output");
            std::fs::write(path, bytes)?;
        }
    }
    Ok(())
}

fn render(chart: &dyn Chart, args: &Args) -> Result<Vec<u8>, CliError> {
    Ok(match args.command {
        Command::Svg => render_svg(chart, &args.svg).into_bytes(),
        Command::Png => render_png(chart, &args.raster)?,
        Command::Yaml => to_yaml_string(chart)?.into_bytes(),
    })
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(&args.input)?;
    let chart = neochart::read_str(&text)?;
    // Output is produced in full before anything is written.
    let bytes = render(chart.as_ref(), &args)?;

    let out = match (&args.out, args.command) {
        (Some(out), _) => Some(out.clone()),
        (None, Command::Yaml) => None,
        (None, command) => Some(
            default_out_path(&args.input, command.extension())
                .to_string_lossy()
                .to_string(),
        ),
    };
    write_output(&bytes, out.as_deref())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("NEOCHART_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

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

    if let Err(err) = run(args) {
        eprintln!("neochart: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("neochart")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_png_flags_in_every_spelling() {
        for flags in [
            &["--scale", "2"][..],
            &["-s", "2"][..],
            &["--scale=2"][..],
            &["-s=2"][..],
        ] {
            let mut raw = vec!["png", "in.yaml"];
            raw.extend_from_slice(flags);
            let args = parse_args(&argv(&raw)).unwrap();
            assert_eq!(args.command, Command::Png);
            assert_eq!(args.raster.scale, 2.0, "{flags:?}");
        }
    }

    #[test]
    fn rejects_non_positive_scale() {
        for scale in ["0", "-1", "nan", "abc"] {
            let err = parse_args(&argv(&["png", "in.yaml", "--scale", scale])).unwrap_err();
            assert!(matches!(err, CliError::Usage(_)), "{scale}");
        }
    }

    #[test]
    fn reads_positional_output_and_svg_options() {
        let args = parse_args(&argv(&["svg", "--indent", "4", "in.yaml", "out.svg"])).unwrap();
        assert_eq!(args.input, "in.yaml");
        assert_eq!(args.out.as_deref(), Some("out.svg"));
        assert_eq!(args.svg.indent, Some(4));
    }

    #[test]
    fn requires_command_and_input() {
        assert!(matches!(parse_args(&argv(&[])), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&argv(&["svg"])), Err(CliError::Usage(_))));
        assert!(matches!(
            parse_args(&argv(&["pdf", "in.yaml"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&argv(&["svg", "a", "b", "c"])),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn default_out_path_replaces_the_extension() {
        assert_eq!(
            default_out_path("charts/pyramid.yaml", "png"),
            PathBuf::from("charts/pyramid.png")
        );
        assert_eq!(default_out_path("pyramid", "svg"), PathBuf::from("pyramid.svg"));
        assert_eq!(default_out_path("-", "svg"), PathBuf::from("out.svg"));
    }
}
