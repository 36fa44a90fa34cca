use clap::Parser;
use evalgraph::api::generate_graph;
use evalgraph::config::GraphConfig;
use std::process;
use tracing::{error, info, Level};

mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: GraphConfig,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    info!("🚀 Building evaluation graph...");

    match generate_graph(&cli.config) {
        Ok(summary) => reports::print_summary(&summary),
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    }
}
