use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt};

/// `info` unless the given directives say otherwise, including a lower level.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

pub fn init() {
    let directives = std::env::var("RUST_LOG").ok();
    fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info() {
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(env_filter(Some("")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn rust_log_can_lower_the_level() {
        assert_eq!(env_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(env_filter(Some("error")).max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn rust_log_can_raise_the_level() {
        assert_eq!(env_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
