//! Watch loop

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::place::{PlaceOptions, PlaceUseCase};
use crate::domain::ports::FileSystem;
use crate::error::{PlaceError, PlaceResult};
use crate::infrastructure::{discover_sources, is_source};

use super::cache::ContentHashes;
use super::event::{WatchEvent, WatchOptions, WatcherState};

/// Poll interval of the event channel
const POLL_MS: u64 = 50;

/// A registered watcher whose events queue up until [`WatchSession::run`].
///
/// Edits saved after [`WatchSession::start`] are never lost, so the initial
/// placement run belongs between `start` and `run`.
pub struct WatchSession {
    place: PlaceOptions,
    debounce: Duration,
    started: WatchEvent,
    hashes: ContentHashes,
    rx: Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl WatchSession {
    /// Register the watcher on the input directory, then record the current
    /// content of every source.
    pub fn start(options: &WatchOptions) -> PlaceResult<Self> {
        // Event paths arrive canonical; compare against a canonical root.
        let input = options
            .place
            .input
            .canonicalize()
            .ok()
            .filter(|p| p.is_dir())
            .ok_or_else(|| PlaceError::DirectoryNotFound {
                path: options.place.input.clone(),
            })?;
        let place = PlaceOptions {
            input: input.clone(),
            output: options
                .place
                .output
                .canonicalize()
                .unwrap_or_else(|_| options.place.output.clone()),
            ..options.place.clone()
        };

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        let mode = if place.recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher
            .watch(&input, mode)
            .map_err(|e| PlaceError::WatchFailed {
                path: input.clone(),
                message: e.to_string(),
            })?;

        // Pre-populate so the watcher's start-up noise does not re-place everything
        let mut hashes = ContentHashes::new();
        for source in discover_sources(&input, place.recursive, &place.filter())? {
            hashes.refresh(&source);
        }
        tracing::debug!("tracking {} source(s)", hashes.len());

        Ok(Self {
            started: WatchEvent::WatchStarted {
                input: options.place.input.display().to_string(),
                output: options.place.output.display().to_string(),
                recursive: place.recursive,
            },
            place,
            debounce: options.debounce,
            hashes,
            rx,
            _watcher: watcher,
        })
    }

    /// Place every source that changes until `running` is cleared.
    pub fn run<FS: FileSystem>(
        mut self,
        use_case: &PlaceUseCase<FS>,
        running: Arc<AtomicBool>,
        event_callback: impl Fn(WatchEvent),
    ) -> PlaceResult<()> {
        let input = self.place.input.clone();
        let filter = self.place.filter();
        let recursive = self.place.recursive;

        event_callback(self.started.clone());

        let mut state = WatcherState::new(self.debounce);

        while running.load(Ordering::SeqCst) {
            match self.rx.recv_timeout(Duration::from_millis(POLL_MS)) {
                Ok(Ok(event)) if is_content_event(&event.kind) => {
                    for path in event.paths {
                        let path = path.canonicalize().unwrap_or(path);
                        if !is_source(&input, &path, recursive, &filter)
                            || PlaceUseCase::<FS>::pairs_with_itself(&self.place, &path)
                        {
                            continue;
                        }
                        // Unreadable or unchanged content is not worth a placement
                        if self.hashes.refresh(&path) == Some(true) {
                            tracing::debug!("change queued: {}", path.display());
                            state.add_change(path);
                        }
                    }
                }
                Ok(Ok(_)) => {}
                Ok(Err(e)) => event_callback(WatchEvent::Error {
                    message: e.to_string(),
                }),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    event_callback(WatchEvent::Error {
                        message: "file watcher stopped unexpectedly".to_string(),
                    });
                    break;
                }
            }

            if state.should_sync() {
                place_changes(
                    use_case,
                    &self.place,
                    state.take_changes(),
                    &mut self.hashes,
                    &event_callback,
                );
            }
        }

        event_callback(WatchEvent::Shutdown);
        Ok(())
    }
}

/// Watch the input directory and place every source that changes.
///
/// Runs until `running` is cleared. Use [`WatchSession`] directly to run an
/// initial placement once the watcher is registered.
pub fn watch<FS: FileSystem>(
    use_case: &PlaceUseCase<FS>,
    options: &WatchOptions,
    running: Arc<AtomicBool>,
    event_callback: impl Fn(WatchEvent),
) -> PlaceResult<()> {
    WatchSession::start(options)?.run(use_case, running, event_callback)
}

fn place_changes<FS: FileSystem>(
    use_case: &PlaceUseCase<FS>,
    place: &PlaceOptions,
    changes: Vec<PathBuf>,
    hashes: &mut ContentHashes,
    event_callback: &impl Fn(WatchEvent),
) {
    for path in changes {
        let report = use_case.place_one(place, &path);
        if report.is_failed() {
            // Retry on the next event even if the content stays the same
            hashes.invalidate(&path);
        }
        event_callback(WatchEvent::from_report(&report));
    }
}

/// Creates, writes and renames; removals and plain access are ignored.
pub(crate) fn is_content_event(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any
    )
}
