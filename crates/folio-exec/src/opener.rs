use std::process::Command;
use std::process::Stdio;

use crate::contracts::LinkOpenStatus;
use crate::contracts::LinkOutcome;
use crate::contracts::LinkRequest;

pub trait LinkOpener {
    fn open(&self, url: &str) -> LinkOutcome;
}

/// Logs the request and never touches the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedLinkOpener;

/// Hands links to the platform opener (`open`, `xdg-open`, `start`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkOpener;

impl LinkOpener for SimulatedLinkOpener {
    fn open(&self, url: &str) -> LinkOutcome {
        let Some(request) = LinkRequest::parse(url) else {
            return rejected(url);
        };
        tracing::info!(url = %request.url, "simulated link open");
        LinkOutcome {
            url: request.url.clone(),
            status: LinkOpenStatus::Simulated,
            logs: vec![format!("would open {}", request.url)],
        }
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> LinkOutcome {
        let Some(request) = LinkRequest::parse(url) else {
            return rejected(url);
        };
        let (program, args) = platform_command(&request.url);
        let spawned = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                tracing::info!(url = %request.url, program, "link handed to platform opener");
                // Reap in the background; openers usually exit immediately.
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
                LinkOutcome {
                    url: request.url.clone(),
                    status: LinkOpenStatus::Launched,
                    logs: vec![format!("{program} {}", request.url)],
                }
            }
            Err(err) => {
                tracing::warn!(url = %request.url, program, error = %err, "failed to launch link opener");
                LinkOutcome {
                    url: request.url.clone(),
                    status: LinkOpenStatus::Failed,
                    logs: vec![format!("failed to run {program}: {err}")],
                }
            }
        }
    }
}

fn rejected(url: &str) -> LinkOutcome {
    tracing::warn!(url, "refusing to open unsupported link");
    LinkOutcome {
        url: url.to_string(),
        status: LinkOpenStatus::Rejected,
        logs: vec!["only http, https and mailto links are opened".to_string()],
    }
}

pub fn platform_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(windows) {
        // The empty string is `start`'s window title argument.
        (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}
