use anyhow::{Context, Result};
use log::debug;

use mst_repair::config::RepairConfig;
use mst_repair::input::GraphBatch;
use mst_repair::io::{read_json, write_output};
use mst_repair::options::Options;
use mst_repair::util::write_tree_dot;
use mst_repair::{RepairError, repair_first};

fn main() {
    if std::env::var("MST_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MST_LOG")
            .write_style("MST_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let exit_code = match run() {
        Ok(()) => 0,
        Err(err) => {
            match err.downcast_ref::<RepairError>() {
                Some(terminal) => println!("{terminal}"),
                None => eprintln!("error: {err:#}"),
            }
            1
        }
    };
    std::process::exit(exit_code);
}

fn parse_options() -> Result<Options> {
    let mut flags = shellwords::split(&std::env::var("MST_FLAGS").unwrap_or_default())
        .context("MST_FLAGS is not a valid argument list")?;
    flags.extend(std::env::args().skip(1));
    Options::parse_from_args(&flags).map_err(|err| match err.downcast::<clap::Error>() {
        // --help, --version and usage errors print themselves
        Ok(clap_err) => clap_err.exit(),
        Err(other) => anyhow::anyhow!("{other}"),
    })
}

fn run() -> Result<()> {
    let options = parse_options()?;
    debug!("options: {:?}", options);

    let config = RepairConfig::load_from_file(&options.config)?.merge_options(&options);
    debug!("config: {:?}", config);

    let batch: GraphBatch = read_json(&config.input)
        .with_context(|| format!("Failed to load graphs from {}", config.input))?;
    let run = repair_first(&batch, config.repair_options())?;
    let report = run.report();
    log::info!("\n{}", report);

    write_output(&config.output, &report, config.format)
        .with_context(|| format!("Failed to write {}", config.output))?;
    if let Some(dot) = &config.dot {
        write_tree_dot(dot, &run.graph, &run.repair)
            .with_context(|| format!("Failed to write {}", dot))?;
    }

    println!("Done. See {}", config.output);
    Ok(())
}
