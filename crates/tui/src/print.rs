//! Hand-off of the rendered report to the platform viewer.
//!
//! The viewer is an opaque collaborator: opening may fail (headless session,
//! missing opener binary) and the whole hand-off then aborts silently. No
//! retry, no partially shown document; the caller only learns a bool.
use std::{
    fs,
    path::{Path, PathBuf},
    process::{Child, Command},
    thread,
};

use chrono::Utc;

/// An opened document the viewer can be asked to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHandle {
    pub path: PathBuf,
}

/// External print/export facility. Swapped for a recording stub in tests.
pub trait DocumentOpener {
    /// Materializes the document and opens it, or fails quietly.
    fn open_document(&self, html: &str) -> Option<DocumentHandle>;
    /// Requests printing of an opened document. Best effort.
    fn print(&self, handle: &DocumentHandle);
}

/// Runs the full hand-off: open, then print. Returns whether the document
/// reached the viewer.
pub fn hand_off(opener: &dyn DocumentOpener, html: &str) -> bool {
    match opener.open_document(html) {
        Some(handle) => {
            opener.print(&handle);
            true
        }
        None => {
            tracing::warn!("report hand-off aborted: viewer unavailable");
            false
        }
    }
}

/// Writes the report under the export directory and delegates to the
/// platform opener (`xdg-open` / `open`), which owns the print dialog.
pub struct SystemOpener {
    export_dir: PathBuf,
}

impl SystemOpener {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    fn opener_binary() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        }
    }
}

impl DocumentOpener for SystemOpener {
    fn open_document(&self, html: &str) -> Option<DocumentHandle> {
        let path = self
            .export_dir
            .join(format!("report_{}.html", Utc::now().format("%Y%m%d_%H%M%S")));
        if let Err(err) = write_document(&self.export_dir, &path, html) {
            tracing::warn!("failed to write report to {}: {err}", path.display());
            return None;
        }
        Some(DocumentHandle { path })
    }

    fn print(&self, handle: &DocumentHandle) {
        match Command::new(Self::opener_binary()).arg(&handle.path).spawn() {
            Ok(child) => {
                tracing::info!("report opened: {}", handle.path.display());
                reap_in_background(child);
            }
            Err(err) => tracing::warn!("failed to open report viewer: {err}"),
        }
    }
}

/// Waits for the viewer process on a detached thread so it does not linger
/// as a zombie once it exits.
fn reap_in_background(mut child: Child) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        if let Err(err) = child.wait() {
            tracing::warn!("viewer process wait failed: {err}");
        }
    })
}

fn write_document(dir: &Path, path: &Path, html: &str) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(path, html)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct StubOpener {
        fail_open: bool,
        opened: RefCell<Vec<String>>,
        printed: RefCell<Vec<DocumentHandle>>,
    }

    impl DocumentOpener for StubOpener {
        fn open_document(&self, html: &str) -> Option<DocumentHandle> {
            if self.fail_open {
                return None;
            }
            self.opened.borrow_mut().push(html.to_string());
            Some(DocumentHandle {
                path: PathBuf::from("stub.html"),
            })
        }

        fn print(&self, handle: &DocumentHandle) {
            self.printed.borrow_mut().push(handle.clone());
        }
    }

    #[test]
    fn hand_off_opens_then_prints_once() {
        let stub = StubOpener::default();
        assert!(hand_off(&stub, "<html></html>"));
        assert_eq!(stub.opened.borrow().len(), 1);
        assert_eq!(stub.printed.borrow().len(), 1);
    }

    #[test]
    fn hand_off_aborts_silently_when_open_fails() {
        let stub = StubOpener {
            fail_open: true,
            ..StubOpener::default()
        };
        assert!(!hand_off(&stub, "<html></html>"));
        assert!(stub.printed.borrow().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn viewer_child_is_waited_on() {
        let child = Command::new("true").spawn().unwrap();
        let id = child.id();
        reap_in_background(child).join().unwrap();

        // Once the reaper joins, the pid must not stay behind as a zombie.
        let zombie = std::fs::read_to_string(format!("/proc/{id}/status"))
            .map(|s| s.contains("State:\tZ"))
            .unwrap_or(false);
        assert!(!zombie);
    }
}
