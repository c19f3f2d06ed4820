//! `lagrange` - build the interpolating polynomial of a set of points.
//!
//! Without input flags an interactive session prompts for points.
//! `--file` / `--point` take a block of points non-interactively.

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use owo_colors::{OwoColorize, Stream};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use lagrange::input::form::parse_block;
use lagrange::input::session::{Session, SessionOptions};
use lagrange::interpolation::config::{LagrangeCfg, DEFAULT_X_TOL};
use lagrange::interpolation::lagrange::interpolate;
use lagrange::interpolation::report::InterpolationReport;
use lagrange::interpolation::Interpolator;
use lagrange::polynomial::DEFAULT_NORMALIZE_TOL;
use lagrange::render::explain::EXPLANATION;
use lagrange::render::plot::{ascii, sample, write_json, DEFAULT_SAMPLES};
use lagrange::render::table::points_table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    Normal,
    /// Progress information
    Verbose,
    /// Debug output
    Debug,
    /// Trace output
    Trace,
}

/// Lagrange polynomial generator
#[derive(Parser, Debug)]
#[command(name = "lagrange")]
#[command(version)]
#[command(about = "Computes the Lagrange interpolating polynomial of a set of points")]
struct Args {
    /// Read newline-separated `x y` points from FILE (`-` for stdin)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// A point as `"x y"`; repeat for more points
    #[arg(short, long = "point", value_name = "X Y", allow_hyphen_values = true)]
    points: Vec<String>,

    /// Evaluate the polynomial at these x values
    #[arg(short, long, value_name = "X", num_args = 1.., allow_negative_numbers = true)]
    eval: Vec<f64>,

    /// Write plot samples and points as JSON to FILE
    #[arg(long, value_name = "FILE")]
    plot: Option<PathBuf>,

    /// Draw a terminal chart of the polynomial
    #[arg(long)]
    ascii: bool,

    /// Number of plot samples over the x-range of the points
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Digits per coefficient (shortest round-trip form if omitted)
    #[arg(long)]
    precision: Option<usize>,

    /// Abscissae at most this far apart are treated as duplicates (0 = exact match)
    #[arg(long, default_value_t = DEFAULT_X_TOL)]
    x_tol: f64,

    /// Print an explanation of the Lagrange method and exit
    #[arg(long)]
    explain: bool,

    /// Skip the explanation at the start of an interactive session
    #[arg(long)]
    no_explain: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Verbosity level
    #[arg(short, long, value_enum, default_value = "normal")]
    verbosity: Verbosity,
}

fn eprintln_colored(args: &Args, text: &str) {
    if args.no_color {
        eprintln!("{}", text);
    } else {
        eprintln!("{}", text.if_supports_color(Stream::Stderr, |t| t.red()));
    }
}

fn init_tracing(verbosity: Verbosity) -> Result<()> {
    let level = match verbosity {
        Verbosity::Quiet   => Level::ERROR,
        Verbosity::Normal  => Level::WARN,
        Verbosity::Verbose => Level::INFO,
        Verbosity::Debug   => Level::DEBUG,
        Verbosity::Trace   => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

/// Block text from `--file` and `--point`, or `None` for interactive mode.
fn block_input(args: &Args) -> Result<Option<String>> {
    let mut text = String::new();

    if let Some(path) = &args.file {
        if path.as_os_str() == "-" {
            io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
        } else {
            text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
        }
    }
    for p in &args.points {
        text.push('\n');
        text.push_str(p);
    }

    if args.file.is_none() && args.points.is_empty() {
        return Ok(None);
    }
    Ok(Some(text))
}

fn run_block(args: &Args, text: &str) -> Result<InterpolationReport> {
    let points = match parse_block(text, args.x_tol) {
        Ok(points) => points,
        Err(errors) => {
            for e in &errors {
                eprintln_colored(args, &e.to_string());
            }
            bail!("{} invalid input line(s)", errors.len());
        }
    };

    let cfg = LagrangeCfg::new()
        .set_points(points.points())?
        .set_x_tol(args.x_tol)?
        .set_x_eval(&args.eval)
        .context("invalid --eval value")?;
    let report = interpolate(cfg)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "{}", points_table(&report.points))?;

    let shown = report.polynomial.normalized(DEFAULT_NORMALIZE_TOL);
    match args.precision {
        Some(p) => writeln!(out, "Lagrange Polynomial: {:.*}", p, shown)?,
        None    => writeln!(out, "Lagrange Polynomial: {}", shown)?,
    }
    for (x, y) in args.eval.iter().zip(&report.evaluated) {
        writeln!(out, "P({}) = {}", x, y)?;
    }
    out.flush()?;

    Ok(report)
}

fn run_interactive(args: &Args) -> Result<Option<InterpolationReport>> {
    let opts = SessionOptions {
        x_tol: args.x_tol,
        precision: args.precision,
        color: !args.no_color,
        explain: !args.no_explain,
    };

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), opts);
    let report = session.run()?;

    if let Some(report) = &report {
        let ys = report.polynomial.eval_many(&args.eval);
        for (x, y) in args.eval.iter().zip(ys) {
            println!("P({}) = {}", x, y);
        }
    }
    Ok(report)
}

fn export_plot(args: &Args, report: &InterpolationReport) -> Result<()> {
    if args.plot.is_none() && !args.ascii {
        return Ok(());
    }

    let shown = report.polynomial.normalized(DEFAULT_NORMALIZE_TOL);
    let data = sample(&report.points, &shown, args.samples)?;

    if let Some(path) = &args.plot {
        let file = fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_json(&data, BufWriter::new(file))?;
        tracing::info!(path = %path.display(), samples = args.samples, "wrote plot data");
    }
    if args.ascii {
        print!("{}", ascii(&data, 72, 20)?);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbosity)?;

    if args.explain {
        println!("{}", EXPLANATION);
        return Ok(());
    }

    let report = match block_input(&args)? {
        Some(text) => Some(run_block(&args, &text)?),
        None       => run_interactive(&args)?,
    };

    if let Some(report) = report {
        export_plot(&args, &report)?;
    }
    Ok(())
}
