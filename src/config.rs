use crate::cli::Cli;
use crate::separators::SeparatorSet;
use anyhow::Result;
use clap::Parser;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub separators: SeparatorSet,
    pub max_line_len: usize,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        Ok(Self::from(Cli::parse()))
    }

    /// Parse an explicit argument list (first item is the program name).
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        Ok(Self::from(cli))
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            separators: SeparatorSet::from_args(&cli.separators),
            max_line_len: cli.max_line_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_MAX_LINE_LEN;

    #[test]
    fn defaults() {
        let cfg = Config::from_args(["wordsplit"]).unwrap();
        assert_eq!(cfg.separators, SeparatorSet::new(" \t"));
        assert_eq!(cfg.max_line_len, DEFAULT_MAX_LINE_LEN);
    }

    #[test]
    fn separators_and_line_cap() {
        let cfg = Config::from_args(["wordsplit", "-l", "8", ",", ";="]).unwrap();
        assert_eq!(cfg.separators, SeparatorSet::new(",;="));
        assert_eq!(cfg.max_line_len, 8);
    }

    #[test]
    fn hyphen_separator_after_double_dash() {
        let cfg = Config::from_args(["wordsplit", "--", "-"]).unwrap();
        assert_eq!(cfg.separators, SeparatorSet::new("-"));
    }

    #[test]
    fn bad_line_cap_is_rejected() {
        assert!(Config::from_args(["wordsplit", "-l", "many"]).is_err());
    }
}
