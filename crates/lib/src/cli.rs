//! CLI helpers.

mod bencher;
pub(crate) mod error;
mod output;
mod stdout_logger;

use core::fmt;
use core::ops::AddAssign;
use core::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

pub use self::bencher::Bencher;
pub use self::error::{error_context, LineCol};
pub(self) use self::output::{Output, OutputKind, Part};

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON report.
    json: bool,
    /// Warmup period in milliseconds.
    warmup: Option<u64>,
    /// Bench period in milliseconds.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options and install the logger they ask for.
    pub fn parse() -> Result<Self> {
        let args = std::env::args_os()
            .skip(1)
            .map(|arg| arg.into_string().map_err(|_| anyhow!("non-utf8 argument")))
            .collect::<Result<Vec<_>>>()?;

        let opts = Self::parse_from(args)?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            match arg.as_ref() {
                "--bench" => {
                    if opts.mode == Mode::Bench {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--warmup" => {
                    let warmup = it.next().context("missing argument to `--warmup`")?;
                    opts.warmup = Some(
                        warmup
                            .as_ref()
                            .parse()
                            .context("bad argument to `--warmup`")?,
                    );
                }
                "--time-limit" => {
                    let time_limit = it.next().context("missing argument to `--time-limit`")?;
                    opts.time_limit = Some(
                        time_limit
                            .as_ref()
                            .parse()
                            .context("bad argument to `--time-limit`")?,
                    );
                }
                "--count" => {
                    let count = it.next().context("missing argument to `--count`")?;
                    opts.count = Some(
                        count
                            .as_ref()
                            .parse()
                            .context("bad argument to `--count`")?,
                    );
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// The answers produced by a single solution.
pub trait Answers {
    /// The answer to each part, in order.
    fn parts(&self) -> [&dyn fmt::Display; 2];
}

impl<A, B> Answers for (A, B)
where
    A: fmt::Display,
    B: fmt::Display,
{
    #[inline]
    fn parts(&self) -> [&dyn fmt::Display; 2] {
        [&self.0, &self.1]
    }
}

/// Print the answers of a solution.
pub fn answer<T>(opts: &Opts, value: &T) -> Result<()>
where
    T: Answers,
{
    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    for (part, value) in [Part::A, Part::B].into_iter().zip(value.parts()) {
        o.answer(part, value)?;
    }

    Ok(())
}

/// Check that the produced value matches the expected one.
pub fn expect<T>(value: &T, expected: &T) -> Result<()>
where
    T: fmt::Debug + PartialEq,
{
    if value != expected {
        bail!("{value:?} (value) != {expected:?} (expected)");
    }

    Ok(())
}

/// A benchmark report.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    /// Build a report out of samples sorted from fastest to slowest.
    fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();
        let sum = samples.iter().sum::<Duration>();

        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(
                u64::try_from(sum.as_nanos() / (count as u128)).unwrap_or_default(),
            )
        };

        Self {
            p50: percentile(samples, 5000),
            p95: percentile(samples, 9500),
            p99: percentile(samples, 9900),
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
        }
    }
}

/// Get the sample at the given percentile, expressed in hundredths of a
/// percent.
fn percentile(samples: &[Duration], at: usize) -> Duration {
    let Some(last) = samples.len().checked_sub(1) else {
        return Duration::default();
    };

    samples
        .get((last * at) / 10000)
        .copied()
        .unwrap_or_default()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.p50 += rhs.p50;
        self.p95 += rhs.p95;
        self.p99 += rhs.p99;
        self.count += rhs.count;
        self.min += rhs.min;
        self.max += rhs.max;
        self.avg += rhs.avg;
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::{expect, Mode, Opts, Report};

    #[test]
    fn test_parse_opts() {
        let opts = Opts::parse_from(["--bench", "--count", "10", "--json"]).unwrap();
        assert_eq!(opts.mode, Mode::Bench);
        assert_eq!(opts.count, Some(10));
        assert!(opts.json);
        assert!(!opts.verbose);
    }

    #[test]
    fn test_parse_stops_at_separator() {
        let opts = Opts::parse_from(["--verbose", "--", "--bogus"]).unwrap();
        assert_eq!(opts.mode, Mode::Default);
        assert!(opts.verbose);
    }

    #[test]
    fn test_parse_rejects() {
        assert!(Opts::parse_from(["--bench", "--bench"]).is_err());
        assert!(Opts::parse_from(["--warmup"]).is_err());
        assert!(Opts::parse_from(["--count", "many"]).is_err());
        assert!(Opts::parse_from(["--bogus"]).is_err());
    }

    #[test]
    fn test_expect() {
        assert!(expect(&(4361u64, 467835u64), &(4361, 467835)).is_ok());

        let error = expect(&(1u64, 2u64), &(1, 3)).unwrap_err();
        assert_eq!(error.to_string(), "(1, 2) (value) != (1, 3) (expected)");
    }

    #[test]
    fn test_report() {
        let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();
        let report = Report::from_sorted(&samples);
        assert_eq!(report.count, 100);
        assert_eq!(report.min, Duration::from_millis(1));
        assert_eq!(report.max, Duration::from_millis(100));
        assert_eq!(report.p50, Duration::from_millis(50));
        assert_eq!(report.p99, Duration::from_millis(99));
        assert_eq!(report.avg, Duration::from_micros(50500));
    }

    #[test]
    fn test_empty_report() {
        let report = Report::from_sorted(&[]);
        assert_eq!(report.count, 0);
        assert_eq!(report.p95, Duration::default());
    }
}
