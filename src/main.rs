use aigen::cli::Args;
use aigen::config::{Config, Provider};
use aigen::core::error::AigenError;
use aigen::providers::factory::ProviderFactory;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AigenError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = Config::load()?;

    let provider_name = match &args.provider {
        Some(name) => Provider::from_str(name)
            .ok_or_else(|| AigenError::Config(format!("Unsupported provider: {}", name)))?,
        None => config.active_provider.unwrap_or_default(),
    };

    let mut provider_config = config
        .providers
        .get(&provider_name)
        .cloned()
        .unwrap_or_default();
    if let Some(base_url) = &args.base_url {
        provider_config.base_url = Some(base_url.clone());
    }

    let factory = ProviderFactory::new();
    let provider = factory.create(&provider_name, &provider_config)?;

    let answer = provider
        .generate_content(&args.objective, &args.context)
        .await;
    println!("{}", answer);

    Ok(())
}
