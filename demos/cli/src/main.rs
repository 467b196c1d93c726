use std::io::Write;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use fencepost::{
    CoefficientTable, Complex64, EvalConfig, PiecewisePoly, Samples,
    axis::Axis, config::ThreadPool,
};

/// Evaluates piecewise polynomials and resamples step functions
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Zero-order-hold resampling
    Resample {
        #[clap(flatten)]
        settings: EvalSettings,

        /// Sample locations (sorted)
        #[clap(short, long)]
        axis: PathBuf,

        /// Sample values (real part)
        #[clap(short, long)]
        values: PathBuf,

        /// Sample values (imaginary part)
        #[clap(short, long)]
        imag: Option<PathBuf>,

        /// Walk sorted queries with a single cursor instead of searching
        #[clap(long)]
        sorted: bool,
    },

    /// Piecewise polynomial evaluation
    Ppval {
        #[clap(flatten)]
        settings: EvalSettings,

        /// Breaks between pieces (sorted)
        #[clap(short, long)]
        breaks: PathBuf,

        /// Coefficients, highest degree first
        #[clap(short, long)]
        coefs: PathBuf,

        /// Number of coefficients per piece
        #[clap(long)]
        order: usize,

        /// Coefficients are stored power-by-power rather than piece-by-piece
        #[clap(long)]
        column_major: bool,
    },
}

#[derive(Parser)]
struct EvalSettings {
    /// File containing query locations
    #[clap(short, long)]
    queries: PathBuf,

    /// Output file (printed to stdout if not given)
    #[clap(short, long)]
    out: Option<PathBuf>,

    /// Number of threads to use
    #[clap(short, long)]
    threads: Option<NonZeroUsize>,

    /// Number of times to evaluate (for benchmarking)
    #[clap(short = 'N', default_value_t = NonZeroUsize::MIN)]
    n: NonZeroUsize,
}

impl Command {
    fn settings(&self) -> &EvalSettings {
        match self {
            Command::Resample { settings, .. }
            | Command::Ppval { settings, .. } => settings,
        }
    }
}

fn load(path: &Path) -> Result<Vec<f64>> {
    let file = std::fs::File::open(path)?;
    let values = fencepost::text::read_values(file)?;
    info!("Loaded {} values from {path:?}", values.len());
    Ok(values)
}

////////////////////////////////////////////////////////////////////////////////

fn run_resample(
    axis: &[f64],
    samples: &Samples,
    queries: &[f64],
    cfg: &EvalConfig,
    sorted: bool,
    n: NonZeroUsize,
) -> Result<Samples> {
    let axis = Axis::new(axis)?;
    let mut out = Samples::Real(vec![]);
    for _ in 0..n.get() {
        out = if sorted {
            fencepost::resample_sorted(axis, samples, queries)?
        } else {
            fencepost::resample(axis, samples, queries, cfg)?
        };
    }
    Ok(out)
}

fn run_ppval(
    p: &PiecewisePoly,
    queries: &[f64],
    cfg: &EvalConfig,
    n: NonZeroUsize,
) -> Vec<f64> {
    let mut out = vec![];
    for _ in 0..n.get() {
        out = p.eval_with(queries, cfg);
    }
    out
}

/// Average milliseconds per iteration
fn ms_per_iter(elapsed: std::time::Duration, n: NonZeroUsize) -> f64 {
    elapsed.as_micros() as f64 / 1000.0 / n.get() as f64
}

fn write_output<W: Write>(mut w: W, out: &Samples) -> Result<()> {
    match out {
        Samples::Real(v) => {
            for re in v {
                writeln!(w, "{re}")?;
            }
        }
        Samples::Complex(v) => {
            for Complex64 { re, im } in v {
                writeln!(w, "{re} {im}")?;
            }
        }
    }
    w.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let args = Args::parse();
    let settings = args.cmd.settings();
    let n = settings.n;
    let now = Instant::now();
    let queries = load(&settings.queries)?;

    let pool: Option<ThreadPool> = match settings.threads {
        Some(t) if t.get() == 1 => None,
        Some(t) => Some(ThreadPool::with_threads(t.get())?),
        None => Some(ThreadPool::Global),
    };
    let cfg = EvalConfig {
        threads: pool.as_ref(),
        ..Default::default()
    };

    let out = match &args.cmd {
        Command::Resample {
            axis,
            values,
            imag,
            sorted,
            ..
        } => {
            let axis = load(axis)?;
            let re = load(values)?;
            let im = imag.as_deref().map(load).transpose()?;
            let samples = Samples::from_parts(re, im.as_deref())?;
            info!("Loaded inputs in {:?}", now.elapsed());

            let start = Instant::now();
            let out =
                run_resample(&axis, &samples, &queries, &cfg, *sorted, n)?;
            info!(
                "Resampled {} points {n}x at {:?} ms/iter",
                queries.len(),
                ms_per_iter(start.elapsed(), n)
            );
            out
        }
        Command::Ppval {
            breaks,
            coefs,
            order,
            column_major,
            ..
        } => {
            let breaks = load(breaks)?;
            let data = load(coefs)?;
            let rows = breaks.len().saturating_sub(1);
            let coefs = if *column_major {
                CoefficientTable::from_column_major(&data, rows, *order)?
            } else {
                CoefficientTable::from_row_slice(&data, rows, *order)?
            };
            let p = PiecewisePoly::new(breaks, coefs)?;
            info!("Loaded inputs in {:?}", now.elapsed());

            let start = Instant::now();
            let out = run_ppval(&p, &queries, &cfg, n);
            info!(
                "Evaluated {} points {n}x at {:?} ms/iter",
                queries.len(),
                ms_per_iter(start.elapsed(), n)
            );
            Samples::Real(out)
        }
    };

    if let Some(path) = &settings.out {
        info!("Writing output to {path:?}");
        let file = std::fs::File::create(path)?;
        write_output(std::io::BufWriter::new(file), &out)?;
    } else {
        write_output(std::io::stdout().lock(), &out)?;
    }
    Ok(())
}
