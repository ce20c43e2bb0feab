//! Rolling Logger
//!
//! Process-wide logger for Tauri apps. On desktop it installs a `tracing`
//! subscriber that writes to time-rotated files (via `tracing-appender`) and
//! to stderr; `log` records are bridged into it. On Android it forwards to
//! logcat.

use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::rolling::{RollingFileAppender, Rotation};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Rotation limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollingConfig {
    /// How often a new file is started
    pub rotation: Rotation,
    /// Files kept on disk, the active one included
    pub max_files: usize,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            rotation: Rotation::DAILY,
            max_files: 7,
        }
    }
}

/// Build the appender writing `<dir>/<app_name>.<date>.log`
pub fn build_appender(log_dir: &Path, app_name: &str, config: &RollingConfig) -> Result<RollingFileAppender, String> {
    RollingFileAppender::builder()
        .rotation(config.rotation.clone())
        .filename_prefix(app_name)
        .filename_suffix("log")
        .max_log_files(config.max_files.max(1))
        .build(log_dir)
        .map_err(|e| format!("Failed to open log file in {}: {}", log_dir.display(), e))
}

#[cfg(not(target_os = "android"))]
struct LocalTime;

#[cfg(not(target_os = "android"))]
impl tracing_subscriber::fmt::time::FormatTime for LocalTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize with the default rotation limits
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), String> {
    init_logger_with(log_dir.as_ref(), app_name, &RollingConfig::default())
}

#[cfg(not(target_os = "android"))]
pub fn init_logger_with(log_dir: &Path, app_name: &str, config: &RollingConfig) -> Result<(), String> {
    use tracing_subscriber::fmt::writer::MakeWriterExt;

    let appender = build_appender(log_dir, app_name, config)?;

    tracing_subscriber::fmt()
        .with_writer(appender.and(std::io::stderr))
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_max_level(tracing::Level::INFO)
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    tracing::info!(dir = %log_dir.display(), "{} logger initialized", app_name);
    let _ = INITIALIZED.set(());
    Ok(())
}

#[cfg(target_os = "android")]
pub fn init_logger_with(_log_dir: &Path, app_name: &str, _config: &RollingConfig) -> Result<(), String> {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag(app_name),
    );
    let _ = INITIALIZED.set(());
    Ok(())
}

fn ensure_initialized() -> Result<(), String> {
    INITIALIZED
        .get()
        .map(|_| ())
        .ok_or_else(|| "Logger not initialized".to_string())
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    log::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    log::error!("{}", msg);
    Ok(())
}
