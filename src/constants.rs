// Defaults shared by the CLI and the line driver
pub const DEFAULT_SEPARATORS: &str = " \t";
pub const SENTINEL_LINE: &str = ".";
pub const DEFAULT_MAX_LINE_LEN: usize = 4000;
