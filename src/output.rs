use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

/// Environment switch that silences welcome banners.
pub const QUIET_ENV: &str = "CAPSTONE_QUIET";

pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| parse_quiet(std::env::var(QUIET_ENV).ok().as_deref()))
}

fn parse_quiet(value: Option<&str>) -> bool {
    value
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quiet() {
        assert!(parse_quiet(Some("1")));
        assert!(parse_quiet(Some("TRUE")));
        assert!(!parse_quiet(Some("0")));
        assert!(!parse_quiet(None));
    }
}
