//! Statistics over run totals given on the command line or stdin.
//!
//! Usage: run_stats [--prefix] [TOTAL ...]
//! With no totals, whitespace/comma separated numbers are read from stdin.

use anyhow::{bail, Context, Result};
use knapsack_report::logging::{log, obj, v_str, Domain, Level};
use knapsack_report::RunSequence;
use serde_json::json;
use std::env;
use std::io::Read;

fn parse_totals<'a, I>(tokens: I) -> Result<Vec<f64>>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .flat_map(|t| t.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|t| !t.is_empty())
        .map(|t| -> Result<f64> {
            let v = t
                .parse::<f64>()
                .with_context(|| format!("bad run total: {:?}", t))?;
            if !v.is_finite() {
                bail!("bad run total: {:?} is not finite", t);
            }
            Ok(v)
        })
        .collect()
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let prefix = args.iter().any(|a| a == "--prefix");
    let values: Vec<&str> = args
        .iter()
        .filter(|a| a.as_str() != "--prefix")
        .map(String::as_str)
        .collect();

    let parsed = if values.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading run totals from stdin")?;
        parse_totals([buf.as_str()])
    } else {
        parse_totals(values)
    };
    let runs = match parsed {
        Ok(v) => RunSequence::new(v),
        Err(err) => {
            eprintln!("parse failed: {:#}", err);
            std::process::exit(1);
        }
    };

    let stats = match runs.statistics() {
        Ok(stats) => stats,
        Err(err) => {
            log(
                Level::Error,
                Domain::Stats,
                "empty_input",
                obj(&[("msg", v_str(&err.to_string()))]),
            );
            std::process::exit(2);
        }
    };

    let payload = if prefix {
        json!(runs.prefix_statistics())
    } else {
        json!(stats)
    };
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
