use anyhow::{anyhow, Result};
use knapsack_report::config::{Config, OutputFormat};
use knapsack_report::logging::{log, obj, v_str, Domain, Level};
use knapsack_report::{DatasetRegistry, Report, RunSequence};
use serde_json::json;

fn main() -> Result<()> {
    let cfg = Config::from_env();
    log(
        Level::Info,
        Domain::System,
        "startup",
        obj(&[
            ("config_hash", v_str(&cfg.hash())),
            ("format", v_str(cfg.format.as_str())),
        ]),
    );

    let all = DatasetRegistry::builtin();
    let registry = match &cfg.dataset {
        Some(name) => all
            .only(name)
            .ok_or_else(|| anyhow!("unknown dataset '{}'; known: {:?}", name, all.names()))?,
        None => all.clone(),
    };
    let runs = RunSequence::builtin();
    log(
        Level::Debug,
        Domain::Data,
        "inputs_loaded",
        obj(&[("datasets", json!(registry.len())), ("runs", json!(runs.len()))]),
    );

    // Reference comes from the full registry so a dataset filter does not hide it.
    let report = Report::build(&registry, &runs)?.with_reference(&all, &cfg.reference_dataset);

    match cfg.format {
        OutputFormat::Json => println!("{}", report.to_json()),
        OutputFormat::Text => print!("{}", report.render_text(cfg.decimals)),
    }

    log(
        Level::Info,
        Domain::System,
        "done",
        obj(&[("fingerprint", v_str(&report.input_fingerprint))]),
    );
    Ok(())
}
