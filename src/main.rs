use std::io::Write;
use std::path::Path;

use splitplot::{load_chart, read_chart, ChartError, ChartState, ComparePlugin, Plugin};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Usage(&'static str),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Output {
    #[default]
    Series,
    DataPoints,
    Summary,
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    pretty: bool,
    output: Output,
}

fn usage() -> &'static str {
    "splitplot\n\
\n\
USAGE:\n\
  splitplot [--pretty] [--summary | --datapoints] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the chart document is read from stdin.\n\
  - Prints the processed series list as JSON by default.\n\
  - --datapoints prints the flat point buffers of the visible series.\n\
  - --summary prints one line per series instead of JSON.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    for a in argv.iter().skip(1) {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--summary" => args.output = Output::Summary,
            "--datapoints" => args.output = Output::DataPoints,
            other if other.starts_with("--") => return Err(CliError::Usage(usage())),
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

fn summary_line(chart: &ChartState, index: usize) -> String {
    let s = &chart.series()[index];
    let label = s.label.as_deref().unwrap_or("-");
    let color = s.color.map(|c| c.to_hex()).unwrap_or_else(|| "-".to_string());
    let kind = if s.is_derived() { "derived" } else { "loaded" };
    let origin = match s.origin {
        Some(origin) => format!(" from #{}", origin.position),
        None => String::new(),
    };
    format!(
        "#{index} {label} {kind} color={color} points={} orientation={} visible={}{origin}",
        s.point_count(),
        s.orientation().label(),
        s.is_visible(),
    )
}

fn run(args: Args) -> Result<(), CliError> {
    let plugins: [&dyn Plugin; 1] = [&ComparePlugin];

    let mut chart = match args.input.as_deref() {
        None | Some("-") => read_chart(std::io::stdin().lock(), &plugins)?,
        Some(path) => load_chart(Path::new(path), &plugins)?,
    };
    chart.process(&plugins);
    tracing::info!(
        "Processed chart: {} series, {} visible",
        chart.series().len(),
        chart.visible_series().count()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.output {
        Output::Summary => {
            for index in 0..chart.series().len() {
                writeln!(out, "{}", summary_line(&chart, index))?;
            }
        }
        Output::Series => write_json(&mut out, &chart.series(), args.pretty)?,
        Output::DataPoints => write_json(&mut out, &chart.datapoints(), args.pretty)?,
    }
    Ok(())
}

fn write_json<T: serde::Serialize>(out: &mut impl Write, value: &T, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() {
    // Logs go to stderr; stdout carries only the output document.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let argv: Vec<String> = std::env::args().collect();
    let result = parse_args(&argv).and_then(run);
    match result {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
}
