//! Minimal async client for the YandexGPT instruct endpoint.
//!
//! ```no_run
//! use yagpt::{GenerationOptions, InstructClient};
//!
//! # async fn run() -> yagpt::Result<()> {
//! let client = InstructClient::new("b1gfolder", "t1.iam-token")?;
//! let result = client
//!     .instruct("general", "Translate to French", "Hello", GenerationOptions::default())
//!     .await?;
//! for text in result.texts() {
//!     println!("{}", text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod yandex;

pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
pub use error::{Result, YaGptError};
pub use models::{GenerationOptions, GenerationResult, InstructRequest};
pub use yandex::InstructClient;
