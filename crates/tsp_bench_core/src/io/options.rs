use std::{env, fmt, path::Path};

use log::LevelFilter;

use crate::{
    Error, Result,
    algo::Algorithm,
    constants::{DEFAULT_CITY_COUNT, DEFAULT_LOOKAHEAD, DEFAULT_SEED, DEFAULT_START_CITY},
};

/// Runtime options for one benchmark invocation.
#[derive(Clone, Debug)]
pub struct BenchOptions {
    /// Number of cities to generate when no coordinate input is given.
    pub cities: usize,
    /// Seed for city generation.
    pub seed: u64,
    /// City every tour starts from.
    pub start_city: usize,
    /// Top-level candidate budget for the bounded heuristic.
    pub lookahead: usize,
    /// Algorithms to run, in benchmark order.
    pub algorithms: Vec<Algorithm>,
    /// Optional coordinate input path. Empty means generate; `-` means stdin.
    pub input: String,
    /// Structured logging level.
    pub log_level: LogLevel,
    /// Logging output format.
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    pub log_timestamp: bool,
    /// Optional output file path for logs. Empty means stderr.
    pub log_output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            "off" => Ok(Self::Off),
            _ => Err(Error::invalid_input(format!(
                "Invalid log level: {value} (expected error|warn|info|debug|trace|off)"
            ))),
        }
    }

    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl LogFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(Error::invalid_input(format!(
                "Invalid log format: {value} (expected compact|pretty)"
            ))),
        }
    }
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            cities: DEFAULT_CITY_COUNT,
            seed: DEFAULT_SEED,
            start_city: DEFAULT_START_CITY,
            lookahead: DEFAULT_LOOKAHEAD,
            algorithms: Algorithm::ALL.to_vec(),
            input: String::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: true,
            log_output: String::new(),
        }
    }
}

impl BenchOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };

            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = split_arg(raw_name, &mut args);

            match name.as_str() {
                "cities" => options.cities = parse_number(&name, require_value(&name, value)?)?,
                "seed" => options.seed = parse_number(&name, require_value(&name, value)?)?,
                "start-city" => {
                    options.start_city = parse_number(&name, require_value(&name, value)?)?;
                }
                "lookahead" => {
                    options.lookahead = parse_number(&name, require_value(&name, value)?)?;
                }
                "algorithms" => {
                    options.algorithms = parse_algorithms(&require_value(&name, value)?)?;
                }
                "input" => options.input = require_value(&name, value)?,
                "log-output" => options.log_output = require_value(&name, value)?,
                "log-level" => options.log_level = LogLevel::parse(&require_value(&name, value)?)?,
                "log-format" => {
                    options.log_format = LogFormat::parse(&require_value(&name, value)?)?;
                }
                "log-timestamp" => {
                    options.log_timestamp = match value {
                        Some(v) => parse_bool(&name, &v)?,
                        None => true,
                    };
                }
                "no-log-timestamp" => {
                    if value.is_some() {
                        return Err(Error::invalid_input(format!(
                            "Flag --{name} does not take a value"
                        )));
                    }
                    options.log_timestamp = false;
                }
                _ => {
                    return Err(Error::invalid_input(format!(
                        "Unknown option: --{name}\n\n{}",
                        Self::usage()
                    )));
                }
            }
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  tsp-bench [options]\n",
            "  tsp-bench [options] --input cities.txt\n\n",
            "Options:\n",
            "  --cities <usize>       Number of cities to generate (2..=64)\n",
            "  --seed <u64>           Seed for city generation\n",
            "  --start-city <usize>   City every tour starts from\n",
            "  --lookahead <usize>    Candidate budget for the bounded heuristic\n",
            "  --algorithms <list>    Comma-separated subset of\n",
            "                         brute-force,dyn-prog,bounded,nearest-neighbor\n",
            "  --input <path>         Read `x,y` coordinate tokens instead of\n",
            "                         generating (`-` reads stdin)\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --log-output <path>\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  tsp-bench --cities 13 --seed 7\n",
            "  tsp-bench --cities 20 --algorithms dyn-prog,bounded --log-level info\n",
            "  tsp-bench --input cities.txt --lookahead 5\n",
            "  tsp-bench --cities 30 --log-level=debug --log-format=pretty\n",
        )
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        let log_output = self.log_output.trim();
        if log_output.is_empty() || log_output == "-" {
            None
        } else {
            Some(Path::new(log_output))
        }
    }

    fn algorithm_names(&self) -> String {
        self.algorithms
            .iter()
            .map(|algorithm| algorithm.name())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for BenchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n\tcities        = {}\
             \n\tseed          = {}\
             \n\tstart_city    = {}\
             \n\tlookahead     = {}\
             \n\talgorithms    = {}\
             \n\tinput         = {}\
             \n\tlog_level     = {:?}\
             \n\tlog_format    = {:?}\
             \n\tlog_timestamp = {}\
             \n\tlog_output    = {}",
            self.cities,
            self.seed,
            self.start_city,
            self.lookahead,
            self.algorithm_names(),
            self.input,
            self.log_level,
            self.log_format,
            self.log_timestamp,
            self.log_output,
        )
    }
}

fn split_arg(
    raw_name: &str,
    args: &mut std::iter::Peekable<impl Iterator<Item = String>>,
) -> (String, Option<String>) {
    if let Some((k, v)) = raw_name.split_once('=') {
        return (k.to_string(), Some(v.to_string()));
    }

    let value = match args.peek() {
        Some(next) if !next.starts_with("--") => args.next(),
        _ => None,
    };

    (raw_name.to_string(), value)
}

fn require_value(name: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::invalid_input(format!("Missing value for --{name}")))
}

fn parse_number<T: std::str::FromStr>(name: &str, value: String) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::invalid_input(format!("Invalid value for --{name}: {value}")))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON" => Ok(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "off" | "OFF" => Ok(false),
        _ => Err(Error::invalid_input(format!(
            "Invalid boolean for --{name}: {value} (expected true/false)"
        ))),
    }
}

fn parse_algorithms(value: &str) -> Result<Vec<Algorithm>> {
    let algorithms = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Algorithm::parse)
        .collect::<Result<Vec<_>>>()?;

    if algorithms.is_empty() {
        return Err(Error::invalid_input(
            "At least one algorithm must be selected",
        ));
    }
    Ok(algorithms)
}
