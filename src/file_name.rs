//! # Extension Dispatch
//!
//! Classifies a selected file by the suffix of its name and derives the name
//! of the listing produced from an assembly source.

/// Extension recognized as assembly source.
pub const SOURCE_EXTENSION: &str = "asm";

/// Extension recognized as an assembled listing.
pub const LISTING_EXTENSION: &str = "lst";

/// What a selected file is, judged by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Assembly source (`.asm`). Assembled, displayed and downloaded as a listing.
    Source,

    /// Listing (`.lst`). Displayed as-is.
    Listing,

    /// Anything else. Ignored.
    Other,
}

impl FileKind {
    /// Classify a file by its name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use asm_listing_drop::FileKind;
    ///
    /// assert_eq!(FileKind::of("program.ASM"), FileKind::Source);
    /// assert_eq!(FileKind::of("output.lst"), FileKind::Listing);
    /// assert_eq!(FileKind::of("notes.txt"), FileKind::Other);
    /// ```
    pub fn of(name: &str) -> Self {
        match extension(name).as_str() {
            SOURCE_EXTENSION => FileKind::Source,
            LISTING_EXTENSION => FileKind::Listing,
            _ => FileKind::Other,
        }
    }
}

/// Lower-cased text after the last `.` of `name`.
///
/// A name without any `.` is its own extension, so `"ASM"` yields `"asm"`.
pub fn extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Name of the listing produced from the source file `name`.
///
/// A trailing `.asm` (any case) is replaced by `.lst`. Any other name is
/// returned unchanged.
pub fn listing_file_name(name: &str) -> String {
    let cut = name.len().saturating_sub(SOURCE_EXTENSION.len() + 1);

    match name.get(cut..) {
        Some(suffix) if suffix.eq_ignore_ascii_case(".asm") => {
            format!("{}.{}", &name[..cut], LISTING_EXTENSION)
        }
        _ => name.to_string(),
    }
}
