// src/config/consts.rs

pub const DEFAULT_OUT_DIR: &str = "out";

pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "pagereport/0.3";

/// Plain-text display mode delimiters (CSV export mode uses "," + CRLF).
pub const TEXT_COL_DELIM: &str = "\t";
pub const TEXT_ROW_DELIM: &str = "\n";
