use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "flyer-webhook")]
#[command(author, version, about = "Receives Flyer webhooks and relays them to the LinkGold backend", long_about = None)]
pub struct Cli {
    /// Address to bind (overrides WEBHOOK_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Dotenv file to load instead of .env
    #[arg(long)]
    pub env_file: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
