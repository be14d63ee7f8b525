//! Tests for game configuration loading.

use magic_tictactoe::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, GameConfig};
use std::io::Write;
use std::sync::{Arc, Mutex};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(config.player_one(), DEFAULT_PLAYER_ONE);
    assert_eq!(config.player_two(), DEFAULT_PLAYER_TWO);
    assert_eq!(*config.reset_delay_ms(), 1000);
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_one = \"Ada\"\nreset_delay_ms = 250").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.player_one(), "Ada");
    assert_eq!(config.player_two(), DEFAULT_PLAYER_TWO);
    assert_eq!(*config.reset_delay_ms(), 250);
}

#[test]
fn test_invalid_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_one = [").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_blank_overrides_are_ignored() {
    let config = GameConfig::default()
        .with_player_names(Some("Grace".to_string()), Some("   ".to_string()));
    assert_eq!(config.player_one(), "Grace");
    assert_eq!(config.player_two(), DEFAULT_PLAYER_TWO);
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_config_loading_is_logged_at_info() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let dir = tempfile::tempdir().unwrap();
    let mut file = tempfile::NamedTempFile::new_in(dir.path()).unwrap();
    writeln!(file, "player_one = \"Ada\"").unwrap();

    tracing::subscriber::with_default(subscriber, || {
        GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        GameConfig::load_or_default(file.path()).unwrap();
    });

    let text = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    assert!(text.contains("Config file not found, using defaults"), "{text}");
    assert!(text.contains("Config loaded successfully"), "{text}");
    assert!(text.contains("player_one=Ada"), "{text}");
}

#[test]
fn test_old_log_file_key_is_tolerated() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_file = \"old.log\"\nplayer_two = \"Grace\"").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.player_two(), "Grace");
}
