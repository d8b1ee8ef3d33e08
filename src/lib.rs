pub mod cli;
pub mod config;
pub mod constants;
pub mod driver;
pub mod output;
pub mod separators;
pub mod tokenizer;

pub use separators::SeparatorSet;
pub use tokenizer::{SplitError, Tokenizer, split};
