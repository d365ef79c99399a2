//! `config`: show the resolved settings.

use std::path::Path;

use crate::config::Settings;

/// One line per setting with its origin, plus the config file consulted.
pub fn describe_settings(settings: &Settings, config_path: Option<&Path>) -> String {
    let file_line = match config_path {
        Some(path) if path.exists() => format!("{}", path.display()),
        Some(path) => format!("{} (not found)", path.display()),
        None => "(no config directory)".to_string(),
    };

    format!(
        "endpoint     {}  ({})\nimage base   {}  ({})\ntimeout      {}s  ({})\nlog filter   {}  ({})\nconfig file  {}",
        settings.endpoint.value,
        settings.endpoint.origin,
        settings.image_base.value,
        settings.image_base.origin,
        settings.timeout.value.as_secs(),
        settings.timeout.origin,
        settings.log_filter.value,
        settings.log_filter.origin,
        file_line,
    )
}

pub fn handle_config(settings: &Settings, config_path: Option<&Path>) {
    println!("{}", describe_settings(settings, config_path));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigFile, Overrides};

    #[test]
    fn test_describe_defaults() {
        let settings =
            Settings::resolve_with(&Overrides::default(), &ConfigFile::default(), |_| None)
                .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");

        let text = describe_settings(&settings, Some(&missing));

        assert!(text.contains("endpoint     https://lch99310.github.io/"));
        assert!(text.contains("timeout      30s  (default)"));
        assert!(text.contains("(not found)"));
    }

    #[test]
    fn test_describe_flag_origin() {
        let flags = Overrides {
            image_base: Some("http://localhost:9000".parse().unwrap()),
            ..Overrides::default()
        };
        let settings = Settings::resolve_with(&flags, &ConfigFile::default(), |_| None).unwrap();

        let text = describe_settings(&settings, None);

        assert!(text.contains("image base   http://localhost:9000/  (command line)"));
        assert!(text.contains("(no config directory)"));
    }
}
