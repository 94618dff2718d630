use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "linkgold-bot")]
#[command(author, version, about = "LinkGold Telegram bot", long_about = None)]
pub struct Cli {
    /// Dotenv file to load instead of .env
    #[arg(long)]
    pub env_file: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
