use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// What the model should produce
    pub objective: String,

    /// Context the answer should be grounded in
    pub context: String,

    /// AI provider to use [possible values: gemini]
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Override the provider API base URL
    #[arg(short, long)]
    pub base_url: Option<String>,
}
