use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chanmap::config::{DEFAULT_CHANNEL_LIST_DIR, DEFAULT_ORDER_FILE};
use chanmap::{run, ReorderConfig};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Reorder a channel list export and resync its chanLst.bin checksum",
    long_about = None
)]
struct Cli {
    /// ChannelList directory holding tv.db and chanLst.bin
    #[arg(long, default_value = DEFAULT_CHANNEL_LIST_DIR)]
    dir: PathBuf,

    /// JSON file with the desired order: [{"Name": ..., "Order": ...}]
    #[arg(long, default_value = DEFAULT_ORDER_FILE)]
    list: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ReorderConfig::new(cli.dir, cli.list);

    run(&config).with_context(|| {
        format!(
            "reordering channels in {}",
            config.channel_list_dir.display()
        )
    })?;
    Ok(())
}
