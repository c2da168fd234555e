use std::env;
use yagpt::{ClientConfig, GenerationOptions, GenerationResult, InstructClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    yagpt::logger::init_with_config(yagpt::logger::LoggerConfig::development())?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }

    let config = ClientConfig::from_env()?;
    log::info!("Using folder {}", config.folder_id);

    let client = InstructClient::with_config(config)?;

    let model = env::var("YAGPT_MODEL").unwrap_or_else(|_| "general".to_string());
    let request_text = env::args()
        .nth(1)
        .unwrap_or_else(|| "Hello, how are you?".to_string());

    let result = client
        .instruct(
            &model,
            "Translate to French",
            &request_text,
            GenerationOptions::default(),
        )
        .await?;

    match result {
        GenerationResult::Alternatives(_) => {
            for text in result.texts() {
                println!("{}", text);
            }
        }
        GenerationResult::NoResult => log::warn!("The model returned no alternatives"),
    }

    Ok(())
}
