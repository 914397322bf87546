use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_segue_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SEGUE_CONFIG_PATH", "/tmp/segue-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/segue-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("segue")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("segue")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
initial_volume = 0.5
volume_step = 0.05
quit_fade_out_ms = 123

[playback]
autoplay = true

[ui]
header_text = "hello"
show_remaining = true

[library]
extensions = ["mp3"]
recursive = true
max_depth = 3
include_hidden = false
follow_links = false
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SEGUE_CONFIG_PATH", cfg_path.to_str().unwrap());

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.initial_volume, 0.5);
    assert_eq!(s.audio.volume_step, 0.05);
    assert_eq!(s.audio.quit_fade_out_ms, 123);
    assert!(s.playback.autoplay);
    assert_eq!(s.ui.header_text, "hello");
    assert!(s.ui.show_remaining);
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(s.library.recursive);
    assert_eq!(s.library.max_depth, Some(3));
    assert!(!s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert!(s.validate().is_ok());
}

#[test]
fn defaults_pass_validation() {
    assert!(Settings::default().validate().is_ok());
}

#[test]
fn validate_rejects_bad_volume_settings() {
    let mut s = Settings::default();
    s.audio.initial_volume = 1.5;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.audio.volume_step = 0.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.extensions.clear();
    assert!(s.validate().is_err());
}
