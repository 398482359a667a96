//! Layered configuration loading.

use crate::integration::test_utils::with_isolated_home;
use modpocket::config::{AppConfig, ConfigLoader};
use modpocket::pipeline::WallpaperPipeline;
use std::fs;

#[test]
fn test_global_file_is_discovered_under_home() {
    with_isolated_home(|home| {
        let dir = home.path().join(".config").join("modpocket");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.toml"),
            r#"
[imagen]
project = "from-global"

[defaults]
design_style = "pastel"
"#,
        )
        .unwrap();

        let workdir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_in(workdir.path()).unwrap();
        assert_eq!(config.imagen.project.as_deref(), Some("from-global"));
        assert_eq!(config.defaults.design_style, "pastel");
        assert!(config.validate().is_ok());
    });
}

#[test]
fn test_xdg_config_home_wins_over_home() {
    with_isolated_home(|home| {
        let xdg = home.path().join("xdg");
        fs::create_dir_all(xdg.join("modpocket")).unwrap();
        fs::write(
            xdg.join("modpocket").join("config.toml"),
            "[catalog]\nmax_concurrent_requests = 8\n",
        )
        .unwrap();
        std::env::set_var("XDG_CONFIG_HOME", &xdg);

        let workdir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_in(workdir.path()).unwrap();
        assert_eq!(config.catalog.max_concurrent_requests, 8);
    });
}

#[test]
fn test_environment_overrides_files() {
    with_isolated_home(|_| {
        let workdir = tempfile::tempdir().unwrap();
        fs::write(
            ConfigLoader::local_config_path(workdir.path()),
            "[catalog]\ntimeout_secs = 3\nacademic_year = \"2023-2024\"\n",
        )
        .unwrap();

        std::env::set_var("MODPOCKET__CATALOG__TIMEOUT_SECS", "7");
        let loaded = ConfigLoader::load_in(workdir.path());
        std::env::remove_var("MODPOCKET__CATALOG__TIMEOUT_SECS");

        let config = loaded.unwrap();
        assert_eq!(config.catalog.timeout_secs, 7);
        assert_eq!(config.catalog.academic_year.as_deref(), Some("2023-2024"));

        let pipeline = WallpaperPipeline::from_config(&config).unwrap();
        assert_eq!(pipeline.academic_year(), "2023-2024");
    });
}

#[test]
fn test_invalid_values_are_reported_together() {
    let workdir = tempfile::tempdir().unwrap();
    let path = workdir.path().join("broken.toml");
    fs::write(
        &path,
        r#"
[catalog]
base_url = "::nope::"
timeout_secs = 0

[defaults]
aspect_ratio = "21:9"

[logging]
format = "yaml"
"#,
    )
    .unwrap();

    let config: AppConfig = ConfigLoader::load_from_file(&path).unwrap();
    let errors = config.validate().unwrap_err();
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(messages.len(), 3, "{messages:?}");
    assert!(messages[0].starts_with("catalog:"));
    assert!(messages[1].starts_with("defaults:"));
    assert!(messages[2].starts_with("logging:"));
}
