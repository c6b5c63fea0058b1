use log::Level;

pub const BRAND_NAME: &str = "MealIA";

/// Offset (in CSS pixels) past which the navbar switches to its compact look.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 20.0;

const DEFAULT_LOG_LEVEL: Level = Level::Info;

/// Log level baked in at build time through `MEALIA_LOG_LEVEL`.
pub fn log_level() -> Level {
    parse_log_level(option_env!("MEALIA_LOG_LEVEL"))
}

/// Navbar threshold baked in at build time through `MEALIA_SCROLL_THRESHOLD`.
pub fn scroll_threshold() -> f64 {
    parse_scroll_threshold(option_env!("MEALIA_SCROLL_THRESHOLD"))
}

fn parse_log_level(raw: Option<&str>) -> Level {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

fn parse_scroll_threshold(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(DEFAULT_SCROLL_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(parse_log_level(None), Level::Info);
        assert_eq!(parse_log_level(Some("chatty")), Level::Info);
    }

    #[test]
    fn log_level_is_case_insensitive() {
        assert_eq!(parse_log_level(Some("DEBUG")), Level::Debug);
        assert_eq!(parse_log_level(Some(" warn ")), Level::Warn);
    }

    #[test]
    fn scroll_threshold_falls_back_on_bad_input() {
        assert_eq!(parse_scroll_threshold(None), DEFAULT_SCROLL_THRESHOLD);
        assert_eq!(parse_scroll_threshold(Some("twenty")), DEFAULT_SCROLL_THRESHOLD);
        assert_eq!(parse_scroll_threshold(Some("-5")), DEFAULT_SCROLL_THRESHOLD);
        assert_eq!(parse_scroll_threshold(Some("NaN")), DEFAULT_SCROLL_THRESHOLD);
    }

    #[test]
    fn scroll_threshold_accepts_override() {
        assert_eq!(parse_scroll_threshold(Some("64")), 64.0);
        assert_eq!(parse_scroll_threshold(Some("0")), 0.0);
    }
}
