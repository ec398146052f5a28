//! Pure processing of one selected file.
//!
//! [`ingest`] decides what the page should show and whether a listing should
//! be saved. It touches no display and no file system; the caller applies the
//! returned [`IngestOutcome`].

use log::info;

use crate::assembler::Assembler;
use crate::error::IngestError;
use crate::file_name::{listing_file_name, FileKind};

/// A file picked by the user, already read as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as reported by the host, extension included
    pub name: String,

    /// Decoded text contents
    pub content: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn kind(&self) -> FileKind {
        FileKind::of(&self.name)
    }
}

/// A listing to be offered to the user as a saved file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Suggested name for the saved file
    pub file_name: String,

    /// Text written to the file
    pub content: String,
}

/// What the page should look like after processing one file.
///
/// `None` leaves the corresponding region untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestOutcome {
    /// New text for the source region
    pub source: Option<String>,

    /// New text for the listing region
    pub listing: Option<String>,

    /// Listing to save, if any
    pub download: Option<Download>,
}

impl IngestOutcome {
    /// True when applying the outcome changes nothing.
    pub fn is_empty(&self) -> bool {
        self.source.is_none() && self.listing.is_none() && self.download.is_none()
    }
}

/// Dispatch `file` on its extension.
///
/// - `.asm`: the source is shown, assembled, and the listing is both shown and
///   saved as the same name with `.lst`.
/// - `.lst`: the listing is shown as-is.
/// - anything else: nothing happens.
///
/// The assembler is only called for `.asm` files.
pub fn ingest<A>(file: &SelectedFile, assembler: &A) -> Result<IngestOutcome, IngestError>
where
    A: Assembler + ?Sized,
{
    let kind = file.kind();
    info!("{}: dispatching as {:?}", file.name, kind);

    match kind {
        FileKind::Source => {
            let listing =
                assembler
                    .assemble(&file.content)
                    .map_err(|source| IngestError::Assemble {
                        file_name: file.name.clone(),
                        source,
                    })?;

            Ok(IngestOutcome {
                source: Some(file.content.clone()),
                listing: Some(listing.clone()),
                download: Some(Download {
                    file_name: listing_file_name(&file.name),
                    content: listing,
                }),
            })
        }
        FileKind::Listing => Ok(IngestOutcome {
            listing: Some(file.content.clone()),
            ..IngestOutcome::default()
        }),
        FileKind::Other => Ok(IngestOutcome::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::AssembleError;
    use std::cell::Cell;

    fn reverse(source: &str) -> Result<String, AssembleError> {
        Ok(source.chars().rev().collect())
    }

    #[test]
    fn test_source_is_assembled_shown_and_downloaded() {
        let file = SelectedFile::new("Boot.ASM", "abc");
        let outcome = ingest(&file, &reverse).unwrap();

        assert_eq!(outcome.source.as_deref(), Some("abc"));
        assert_eq!(outcome.listing.as_deref(), Some("cba"));
        assert_eq!(
            outcome.download,
            Some(Download {
                file_name: "Boot.lst".to_string(),
                content: "cba".to_string(),
            })
        );
    }

    #[test]
    fn test_listing_is_shown_without_assembling() {
        let calls = Cell::new(0);
        let counting = |source: &str| -> Result<String, AssembleError> {
            calls.set(calls.get() + 1);
            Ok(source.to_string())
        };

        let outcome = ingest(&SelectedFile::new("out.LST", "0xFF"), &counting).unwrap();

        assert_eq!(outcome.source, None);
        assert_eq!(outcome.listing.as_deref(), Some("0xFF"));
        assert_eq!(outcome.download, None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_other_extension_is_empty() {
        let outcome = ingest(&SelectedFile::new("notes.txt", "hello"), &reverse).unwrap();
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_assembler_failure_names_the_file() {
        let failing =
            |_: &str| -> Result<String, AssembleError> { Err(AssembleError::NonText) };

        let err = ingest(&SelectedFile::new("bad.asm", "???"), &failing).unwrap_err();
        assert_eq!(
            err,
            IngestError::Assemble {
                file_name: "bad.asm".to_string(),
                source: AssembleError::NonText,
            }
        );
    }

    #[test]
    fn test_works_through_trait_object() {
        let assembler: &dyn Assembler = &reverse;
        let outcome = ingest(&SelectedFile::new("x.asm", "12"), assembler).unwrap();
        assert_eq!(outcome.listing.as_deref(), Some("21"));
    }
}
