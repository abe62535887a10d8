//! Usage text for the bare command and its help aliases.
//!
//! `-h`, `--help` and `help` are plain positional values here, not clap
//! flags, so they print the same single line as a missing argument.

use crate::utils::config::{HELP_ARGS, USAGE};
use std::ffi::OsStr;

/// Whether the positional argument asks for usage instead of a report
pub fn is_usage_request(arg: Option<&OsStr>) -> bool {
    match arg {
        None => true,
        Some(arg) => HELP_ARGS.iter().any(|help| arg == OsStr::new(help)),
    }
}

/// Print the one-line usage text
pub fn display_usage() {
    println!("{}", USAGE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_requests() {
        assert!(is_usage_request(None));
        assert!(is_usage_request(Some(OsStr::new("-h"))));
        assert!(is_usage_request(Some(OsStr::new("--help"))));
        assert!(is_usage_request(Some(OsStr::new("help"))));
        assert!(!is_usage_request(Some(OsStr::new("trace.txt"))));
        assert!(!is_usage_request(Some(OsStr::new("helpful.txt"))));
    }
}
