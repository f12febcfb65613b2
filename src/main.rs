//! Prints the maximum subarray sum of the integers given on the command line,
//! or on standard input when none are given.

use std::io::{self, Read};

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use log::debug;

use dsa::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Kadane's algorithm, O(n).
    #[default]
    Kadane,
    /// Running sum clamped at zero; reports 0 when every value is negative.
    ZeroFloor,
    /// Sums every slice, O(n^3).
    BruteForce,
}

#[derive(Debug, Parser)]
#[command(name = "dsa", about = "Maximum contiguous subarray sum", version)]
struct Cli {
    /// Integers to scan. Read from standard input when omitted.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Algorithm used to compute the sum.
    #[arg(long, value_enum, default_value_t = Method::Kadane)]
    method: Method,

    /// Also print the inclusive index range of the best slice.
    #[arg(long)]
    range: bool,

    /// Log every step of the scan at debug level. Only supported with
    /// `--method kadane` and without `--range`.
    #[arg(long)]
    trace: bool,
}

fn init_logger(trace: bool) {
    let env = env_logger::Env::new()
        .filter("DSA_LOG")
        .write_style("DSA_LOG_STYLE");

    let mut builder = env_logger::Builder::from_env(env);
    if trace {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Splits `input` on whitespace and commas and parses every token.
fn parse_values(input: &str) -> anyhow::Result<Vec<i64>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("`{token}` is not an integer"))
        })
        .collect()
}

fn run(values: &[i64], method: Method, range: bool, trace: bool) -> anyhow::Result<String> {
    if trace && (range || method != Method::Kadane) {
        bail!("--trace is only supported with --method kadane and without --range");
    }

    if range {
        if method != Method::Kadane {
            bail!("--range is only supported with --method kadane");
        }

        let best = max_subarray(values).context("no integers supplied")?;
        return Ok(format!("{} {}..={}", best.sum, best.start, best.end));
    }

    let sum = match method {
        Method::Kadane => max_subarray_sum_inspect(values, |step| {
            debug!(
                "index={} current={} best={}",
                step.index, step.current, step.best
            );
        }),
        Method::ZeroFloor => max_subarray_sum_zero_floor(values),
        Method::BruteForce => max_subarray_sum_brute_force(values),
    }
    .context("no integers supplied")?;

    Ok(sum.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.trace);

    let values = if cli.values.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        parse_values(&input)?
    } else {
        cli.values
    };

    debug!("scanning {} values with {:?}", values.len(), cli.method);

    println!("{}", run(&values, cli.method, cli.range, cli.trace)?);

    Ok(())
}
