use std::process::Command;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crate::contracts::HostColorScheme;

/// Best-effort probe of the desktop's light/dark preference. `None` means
/// the host gave no usable signal.
pub fn detect_system_scheme() -> Option<HostColorScheme> {
    let probed = if cfg!(target_os = "macos") {
        probe_macos()
    } else if cfg!(windows) {
        command_stdout(
            "reg",
            &[
                "query",
                r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize",
                "/v",
                "AppsUseLightTheme",
            ],
        )
        .and_then(|out| parse_windows_registry(&out))
    } else {
        command_stdout(
            "gsettings",
            &["get", "org.gnome.desktop.interface", "color-scheme"],
        )
        .and_then(|out| parse_gsettings(&out))
    };

    probed.or_else(|| {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| parse_colorfgbg(&value))
    })
}

fn probe_macos() -> Option<HostColorScheme> {
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    // The key only exists while dark mode is on.
    if output.status.success() {
        Some(parse_macos_style(&String::from_utf8_lossy(&output.stdout)))
    } else {
        Some(HostColorScheme::Light)
    }
}

/// Checks the host on a background thread every `interval` and sends the
/// scheme whenever it differs from the last one sent. The thread stops at
/// the first send after the receiver is gone.
pub fn watch_system_scheme(interval: Duration) -> Receiver<HostColorScheme> {
    spawn_scheme_watcher(interval, detect_system_scheme)
}

pub fn spawn_scheme_watcher<F>(interval: Duration, mut detect: F) -> Receiver<HostColorScheme>
where
    F: FnMut() -> Option<HostColorScheme> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let spawned = thread::Builder::new()
        .name("folio-scheme".to_string())
        .spawn(move || {
            let mut last = None;
            loop {
                if let Some(scheme) = detect() {
                    if last != Some(scheme) {
                        if tx.send(scheme).is_err() {
                            break;
                        }
                        last = Some(scheme);
                    }
                }
                thread::sleep(interval);
            }
        });
    if let Err(err) = spawned {
        tracing::warn!(error = %err, "color scheme watcher not started");
    }
    rx
}

pub fn parse_macos_style(stdout: &str) -> HostColorScheme {
    if stdout.trim().eq_ignore_ascii_case("dark") {
        HostColorScheme::Dark
    } else {
        HostColorScheme::Light
    }
}

pub fn parse_gsettings(stdout: &str) -> Option<HostColorScheme> {
    match stdout.trim().trim_matches('\'') {
        "prefer-dark" => Some(HostColorScheme::Dark),
        "prefer-light" | "default" => Some(HostColorScheme::Light),
        _ => None,
    }
}

pub fn parse_windows_registry(stdout: &str) -> Option<HostColorScheme> {
    let line = stdout.lines().find(|line| line.contains("AppsUseLightTheme"))?;
    match line.split_whitespace().last()? {
        "0x0" => Some(HostColorScheme::Dark),
        "0x1" => Some(HostColorScheme::Light),
        _ => None,
    }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); the last field is the
/// background palette index.
pub fn parse_colorfgbg(value: &str) -> Option<HostColorScheme> {
    let background = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    match background {
        0..=6 | 8 => Some(HostColorScheme::Dark),
        _ => Some(HostColorScheme::Light),
    }
}

fn command_stdout(cmd: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(cmd).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
