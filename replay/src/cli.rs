use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "cambio-replay",
    version,
    about = "Render a captured Cambio board snapshot",
    long_about = None
)]
pub struct ReplayCli {
    /// Path to the snapshot JSON document ("-" reads stdin)
    pub snapshot: String,

    /// Project the board for this user id (overrides the config file)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Path to the viewer config file (created with defaults if missing)
    #[arg(long, default_value = "cambio_replay.toml")]
    pub config: PathBuf,

    /// Output JSON instead of human-readable text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Disable ANSI colors regardless of the config file
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
