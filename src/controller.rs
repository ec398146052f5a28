//! # File Ingest Controller
//!
//! Reacts to a file selection: reads the first selected file, runs [`ingest`]
//! on it and applies the outcome to a [`Host`].
//!
//! The controller is single-threaded. Its only suspension point is the file
//! read. Each selection is stamped with a generation number, and a read that
//! completes after a newer selection has started is dropped, so the most
//! recent selection always wins.

use std::cell::Cell;
use std::future::Future;

use log::{debug, error, info};

use crate::assembler::Assembler;
use crate::error::IngestError;
use crate::file_name::FileKind;
use crate::ingest::{ingest, Download, IngestOutcome, SelectedFile};

/// Progress of the most recent selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected yet.
    Idle,

    /// Waiting for the file's text.
    ReadingFile,

    /// Dispatching and applying the outcome.
    Processing,

    /// The outcome was applied.
    Done,

    /// The run failed and the failure was rendered.
    Failed,
}

/// A file handed over by the host, not yet read.
pub trait FileHandle {
    /// File name, extension included.
    fn name(&self) -> String;

    /// Read the whole file as text. Errors are human-readable messages.
    fn read_text(&self) -> impl Future<Output = Result<String, String>>;
}

/// Where outcomes land: two display regions and a way to save files.
pub trait Host {
    /// Replace the text of the source region.
    fn show_source(&self, text: &str);

    /// Replace the text of the listing region.
    fn show_listing(&self, text: &str);

    /// Offer `download` to the user as a saved file.
    fn download(&self, download: &Download) -> Result<(), String>;

    /// Tell the user that a run failed.
    fn show_failure(&self, error: &IngestError);
}

/// Drives one [`Assembler`] and one [`Host`] through file selections.
pub struct IngestController<A, H> {
    assembler: A,
    host: H,
    generation: Cell<u64>,
    phase: Cell<Phase>,
}

impl<A: Assembler, H: Host> IngestController<A, H> {
    pub fn new(assembler: A, host: H) -> Self {
        Self {
            assembler,
            host,
            generation: Cell::new(0),
            phase: Cell::new(Phase::Idle),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Handle one selection event.
    ///
    /// Only the first file is used; an empty selection does nothing. Files of
    /// an unrecognized type are neither read nor reported, and leave the
    /// phase and any pending read untouched.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(outcome))` once the outcome has been applied (it may be
    ///   empty for unrecognized extensions)
    /// - `Ok(None)` when there was no file, or a newer selection superseded
    ///   this one while it was being read
    /// - `Err(_)` after the failure has been rendered on the host
    pub async fn handle<F, I>(&self, files: I) -> Result<Option<IngestOutcome>, IngestError>
    where
        F: FileHandle,
        I: IntoIterator<Item = F>,
    {
        let Some(file) = files.into_iter().next() else {
            debug!("selection carried no file");
            return Ok(None);
        };

        let file_name = file.name();
        if FileKind::of(&file_name) == FileKind::Other {
            info!("{}: ignoring unrecognized file type", file_name);
            return Ok(Some(IngestOutcome::default()));
        }

        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        self.enter(Phase::ReadingFile);

        let read = file.read_text().await;

        if self.generation.get() != generation {
            debug!("{}: dropping read superseded by a newer selection", file_name);
            return Ok(None);
        }
        self.enter(Phase::Processing);

        let selected = match read {
            Ok(content) => SelectedFile::new(file_name, content),
            Err(message) => {
                return Err(self.fail(None, IngestError::Read { file_name, message }));
            }
        };

        let outcome = match ingest(&selected, &self.assembler) {
            Ok(outcome) => outcome,
            Err(err) => return Err(self.fail(Some(&selected), err)),
        };

        if let Err(err) = self.apply(&outcome) {
            return Err(self.fail(Some(&selected), err));
        }

        self.enter(Phase::Done);
        Ok(Some(outcome))
    }

    /// Apply `outcome` in display order: source, listing, then download.
    fn apply(&self, outcome: &IngestOutcome) -> Result<(), IngestError> {
        if let Some(source) = &outcome.source {
            self.host.show_source(source);
        }
        if let Some(listing) = &outcome.listing {
            self.host.show_listing(listing);
        }
        if let Some(download) = &outcome.download {
            info!(
                "saving {} ({} bytes)",
                download.file_name,
                download.content.len()
            );
            self.host
                .download(download)
                .map_err(|message| IngestError::Download {
                    file_name: download.file_name.clone(),
                    message,
                })?;
        }
        Ok(())
    }

    /// Render `err` and mark the run failed.
    ///
    /// A source that failed to assemble is still shown, as it would have been
    /// before assembling.
    fn fail(&self, file: Option<&SelectedFile>, err: IngestError) -> IngestError {
        error!("{}", err);

        if let (IngestError::Assemble { .. }, Some(file)) = (&err, file) {
            self.host.show_source(&file.content);
        }
        self.host.show_failure(&err);

        self.enter(Phase::Failed);
        err
    }

    fn enter(&self, phase: Phase) {
        debug!("phase {:?} -> {:?}", self.phase.get(), phase);
        self.phase.set(phase);
    }
}
