use crate::constants::DEFAULT_MAX_LINE_LEN;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wordsplit")]
#[command(
    about = "Split stdin lines into words and print each word in brackets. \
             A line holding only \".\" ends the session."
)]
pub struct Cli {
    /// Separator characters; all words are concatenated into one set. Defaults to space and tab.
    pub separators: Vec<String>,

    /// Lines longer than this many characters are split into segments. 0 disables.
    #[arg(short = 'l', long = "max-line-len", default_value_t = DEFAULT_MAX_LINE_LEN)]
    pub max_line_len: usize,
}
