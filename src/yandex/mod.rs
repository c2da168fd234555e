pub mod instruct_client;

pub use instruct_client::InstructClient;
