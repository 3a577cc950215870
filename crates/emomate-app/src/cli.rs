use clap::Parser;

/// EmoMate — an empathetic AI chat companion in your terminal.
#[derive(Parser, Debug)]
#[command(name = "emomate", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. "debug" or "emomate=debug").
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
