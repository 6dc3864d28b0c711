use clap::Parser;

/// Sensordeck — fullscreen sensor status surface with native dialogs.
#[derive(Parser, Debug)]
#[command(name = "sensordeck", version, about)]
pub struct Args {
    /// Screen buffer width, overriding the WIDTH environment variable.
    #[arg(long)]
    pub width: Option<u32>,

    /// Screen buffer height, overriding the HEIGHT environment variable.
    #[arg(long)]
    pub height: Option<u32>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
