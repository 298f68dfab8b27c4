//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("pals {}", VERSION)
}

pub fn usage() -> String {
    format!(
        "{}
Terminal client for the Pals friends and messaging app.

USAGE:
    pals [OPTIONS]

OPTIONS:
    -h, --help       Print this help
    -V, --version    Print the version

ENVIRONMENT:
    PALS_API_URL         API origin (default http://localhost:8000)
    PALS_INIT_DATA       Session proof sent with every request
    PALS_DEV             Set to 1 to use a mock session proof
    PALS_DEV_USER_ID     User id of the mock proof (default 1)
    PALS_DEV_USERNAME    Username of the mock proof (default dev)
    PALS_TIMEOUT_SECS    Request timeout in seconds (default 15)
    PALS_LOG             Log filter (default pals=info)
    PALS_LOG_FILE        Log file path",
        version_line()
    )
}

/// Print the version and exit successfully.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}

/// Print usage and exit successfully.
pub fn handle_help_command() -> ! {
    println!("{}", usage());
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert_eq!(version_line(), format!("pals {}", VERSION));
    }

    #[test]
    fn test_usage_documents_every_variable() {
        let usage = usage();
        for var in [
            "PALS_API_URL",
            "PALS_INIT_DATA",
            "PALS_DEV",
            "PALS_DEV_USER_ID",
            "PALS_DEV_USERNAME",
            "PALS_TIMEOUT_SECS",
            "PALS_LOG",
            "PALS_LOG_FILE",
        ] {
            assert!(usage.contains(var), "missing {}", var);
        }
    }
}
