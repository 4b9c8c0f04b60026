//! NDJSON deploy events for `--json`: one object per line, each tagged with
//! `event`, `command` and `artifact`.

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use serde::Serialize;

use crate::domain::ports::{DeployEvent, DeployEventSink};

#[derive(Serialize)]
struct EventLine<'a> {
    #[serde(flatten)]
    body: Body<'a>,
    command: &'static str,
    artifact: &'a str,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Body<'a> {
    Start {
        dist_dir: Cow<'a, str>,
        deployed_dir: Cow<'a, str>,
        dry_run: bool,
    },
    BuildStart {
        build_command: &'a str,
    },
    BuildComplete,
    BuildSkipped,
    Replacing {
        path: Cow<'a, str>,
    },
    Staged {
        path: Cow<'a, str>,
        files: usize,
    },
    MetadataCopied {
        path: Cow<'a, str>,
    },
    Deployed {
        path: Cow<'a, str>,
        files: usize,
    },
    Complete {
        status: &'static str,
        files: usize,
        dry_run: bool,
    },
}

fn lossy(path: &Path) -> Cow<'_, str> {
    path.to_string_lossy()
}

impl<'a> From<&'a DeployEvent> for EventLine<'a> {
    fn from(event: &'a DeployEvent) -> Self {
        let body = match event {
            DeployEvent::Started {
                dist_dir,
                deployed_dir,
                dry_run,
                ..
            } => Body::Start {
                dist_dir: lossy(dist_dir),
                deployed_dir: lossy(deployed_dir),
                dry_run: *dry_run,
            },
            DeployEvent::BuildStarted { command, .. } => Body::BuildStart {
                build_command: command,
            },
            DeployEvent::BuildFinished { .. } => Body::BuildComplete,
            DeployEvent::BuildSkipped { .. } => Body::BuildSkipped,
            DeployEvent::Replacing { path, .. } => Body::Replacing { path: lossy(path) },
            DeployEvent::Staged { path, files, .. } => Body::Staged {
                path: lossy(path),
                files: *files,
            },
            DeployEvent::MetadataCopied { path, .. } => Body::MetadataCopied { path: lossy(path) },
            DeployEvent::Deployed { path, files, .. } => Body::Deployed {
                path: lossy(path),
                files: *files,
            },
            DeployEvent::Completed { files, dry_run, .. } => Body::Complete {
                status: "success",
                files: *files,
                dry_run: *dry_run,
            },
        };

        Self {
            body,
            command: "deploy",
            artifact: event.artifact(),
        }
    }
}

/// Writes each deploy event as one JSON line
pub struct JsonEventSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let Ok(line) = serde_json::to_string(&EventLine::from(&event)) else {
            return;
        };
        // A broken pipe must not abort the deploy itself.
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }
}
