use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "carehome-server";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    "info,carehome_server=debug".to_string()
}

/// TCP port for the HTTP server (`PORT`, default 8000).
pub fn port() -> u16 {
    parse_port(std::env::var("PORT").ok())
}

/// Path of the SQLite database file (`DATABASE_PATH`, default
/// `<data dir>/carehome/carehome.db`).
pub fn database_path() -> PathBuf {
    if let Ok(path) = std::env::var("DATABASE_PATH") {
        return PathBuf::from(path);
    }
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("carehome").join("carehome.db")
}

/// bcrypt cost factor for password hashing (`BCRYPT_COST`).
///
/// Falls back to 10 when the variable is unset or unparsable, and clamps
/// to bcrypt's supported 4..=31 range.
pub fn bcrypt_cost() -> u32 {
    parse_bcrypt_cost(std::env::var("BCRYPT_COST").ok())
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}

fn parse_bcrypt_cost(raw: Option<String>) -> u32 {
    raw.and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_BCRYPT_COST)
        .clamp(4, 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_to_8000() {
        assert_eq!(parse_port(None), 8000);
        assert_eq!(parse_port(Some("not-a-port".into())), 8000);
    }

    #[test]
    fn port_parses_override() {
        assert_eq!(parse_port(Some("3000".into())), 3000);
    }

    #[test]
    fn bcrypt_cost_defaults_to_10() {
        assert_eq!(parse_bcrypt_cost(None), 10);
        assert_eq!(parse_bcrypt_cost(Some("ten".into())), 10);
        assert_eq!(parse_bcrypt_cost(Some("".into())), 10);
    }

    #[test]
    fn bcrypt_cost_clamped_to_supported_range() {
        assert_eq!(parse_bcrypt_cost(Some("2".into())), 4);
        assert_eq!(parse_bcrypt_cost(Some("99".into())), 31);
        assert_eq!(parse_bcrypt_cost(Some("12".into())), 12);
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
