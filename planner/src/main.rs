use anyhow::Context;
use clap::Parser;
use dashboard::{DashboardBridge, DashboardModel};
use log::warn;
use report::{default_sinks, publish_all, Report};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod dashboard;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Compares travel options by cost, duration and carbon")]
struct Args {
    /// Load tables and findings settings from YAML instead of the built-in data
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory receiving the results table, findings and report artifacts
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Print the active configuration as YAML and exit
    #[arg(long, default_value_t = false)]
    dump_config: bool,
    /// Keep serving the results over HTTP after the run
    #[arg(long, default_value_t = false)]
    serve: bool,
    #[arg(long, default_value = "127.0.0.1:9000")]
    bind: SocketAddr,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::default()
    }
    .with_output_dir(args.output_dir);

    if args.dump_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    println!("Starting Eco-Friendly Travel Analysis ({})...", config.trip.label());
    let runner = Runner::new(config.clone());
    let output = runner.execute()?;

    println!("\n--- Key Findings ---");
    for finding in &output.findings {
        println!("{finding}");
    }

    // sinks only borrow the output; their failures are reported, not propagated
    let report = Report {
        output: &output,
        trip: &config.trip,
    };
    let summary = publish_all(&default_sinks(&config.output_dir), &report);
    println!();
    for path in &summary.written {
        println!("Saved: {}", path.display());
    }
    if !summary.is_clean() {
        for (sink, err) in &summary.failed {
            warn!("{sink} was not written: {err}");
        }
    }

    if args.serve {
        let bridge = DashboardBridge::new();
        bridge.publish(DashboardModel::from_output(&config.trip, &output));
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for the dashboard bridge")?;
        runtime.block_on(bridge.serve(args.bind))?;
    }

    println!("\nAnalysis complete.");
    Ok(())
}
