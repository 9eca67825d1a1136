use figment::Jail;
use lf_config::{ConfigError, LfConfig};

// Variables loaded from `.env` stay in the process environment after the
// jail exits, so every test here uses a key the others do not assert on.

#[test]
fn project_dotenv_feeds_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "LOSTFOUND_GENERAL__DEFAULT_LIMIT=7\n")?;

        let config = LfConfig::load_with_dotenv(jail.directory()).expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn process_env_beats_project_dotenv() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "LOSTFOUND_STORAGE__IMAGES_DIR=from-dotenv\n")?;
        jail.set_env("LOSTFOUND_STORAGE__IMAGES_DIR", "from-process");

        let config = LfConfig::load_with_dotenv(jail.directory()).expect("config loads");
        assert_eq!(config.storage.images_dir, "from-process");
        Ok(())
    });
}

#[test]
fn missing_dotenv_is_not_an_error() {
    Jail::expect_with(|jail| {
        let config = LfConfig::load_with_dotenv(jail.directory()).expect("config loads");
        assert_eq!(config.storage.table_path, "lost_and_found.csv");
        Ok(())
    });
}

#[test]
fn malformed_dotenv_names_the_file() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "NOT A VALID LINE\n")?;

        let err = LfConfig::load_with_dotenv(jail.directory()).expect_err("dotenv should fail");
        assert!(matches!(err, ConfigError::Dotenv { ref path, .. } if path.ends_with(".env")));
        Ok(())
    });
}
