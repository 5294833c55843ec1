use std::error::Error;
use std::time::Duration;

use clap::Parser;
mod cli;
mod report;
use gask_client::{ClientConfig, ClientError, GenerateClient};
use gask_protocol::{
    Content, GenerateContentPath, GenerateContentRequest, GenerateContentRequestBody,
    GenerateContentResponse, GenerationConfig,
};
use tracing::{info, warn};

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("gask failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();
    let api_key =
        resolve_api_key(&cli.api_key).ok_or("no API key: pass --api-key or set GEMINI_API_KEY")?;

    let mut config = ClientConfig::new(api_key);
    config.base_url = cli.base_url.clone();
    config.proxy = cli.proxy.clone();
    config.request_timeout = Duration::from_secs(cli.timeout_secs);
    let client = GenerateClient::new(config)?;

    let request = GenerateContentRequest {
        path: GenerateContentPath {
            model: cli.model.clone(),
        },
        body: GenerateContentRequestBody {
            contents: vec![Content::text(cli.prompt.as_str())],
            system_instruction: cli.system.as_deref().map(Content::text),
            generation_config: Some(GenerationConfig {
                temperature: Some(cli.temperature),
                top_p: Some(cli.top_p),
                top_k: Some(cli.top_k),
                max_output_tokens: Some(cli.max_output_tokens),
            }),
        },
    };

    match client.generate(&request).await {
        Ok(response) => {
            log_reply_meta(&response);
            println!("{}", report::render_reply(&response));
        }
        Err(ClientError::Api { status, body }) => {
            println!("{}", report::render_api_error(status, &body));
        }
        Err(err) => println!("error: {err}"),
    }
    Ok(())
}

fn log_reply_meta(response: &GenerateContentResponse) {
    if let Some(candidate) = response.candidates.first()
        && let Some(reason) = candidate.finish_reason
    {
        info!(finish_reason = ?reason, "candidate finished");
    }
    if let Some(usage) = response.usage_metadata.as_ref() {
        info!(
            prompt_tokens = usage.prompt_token_count.unwrap_or(0),
            candidates_tokens = usage.candidates_token_count.unwrap_or(0),
            total_tokens = usage.total_token_count.unwrap_or(0),
            "usage"
        );
    }
    if let Some(feedback) = response.prompt_feedback.as_ref()
        && let Some(reason) = feedback.block_reason
    {
        warn!(block_reason = ?reason, "prompt blocked");
    }
}

fn resolve_api_key(cli_value: &str) -> Option<String> {
    if !cli_value.trim().is_empty() {
        return Some(cli_value.to_string());
    }
    if let Ok(value) = std::env::var("GEMINI_API_KEY")
        && !value.trim().is_empty()
    {
        return Some(value);
    }
    None
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gask=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
