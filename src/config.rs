//! Host-facing names used by the page binding.

use std::str::FromStr;

use log::Level;

use crate::error::SetupError;

/// Id of the `<input type="file">` the user picks files with.
pub const DEFAULT_FILE_SELECTOR_ID: &str = "fileSelector";

/// Id of the region showing assembly source.
pub const DEFAULT_SOURCE_REGION_ID: &str = "asmContent";

/// Id of the region showing the listing.
pub const DEFAULT_LISTING_REGION_ID: &str = "lstContent";

/// MIME type of downloaded listings.
pub const DEFAULT_DOWNLOAD_MIME: &str = "text/plain";

/// Element ids, download type and log verbosity for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    /// Id of the file input whose `change` event starts processing
    pub file_selector_id: String,

    /// Id of the element that receives assembly source text
    pub source_region_id: String,

    /// Id of the element that receives listing text and failure messages
    pub listing_region_id: String,

    /// MIME type given to the downloaded listing
    pub download_mime: String,

    /// Most verbose level sent to the browser console
    pub log_level: Level,
}

impl IngestConfig {
    pub fn new() -> Self {
        Self {
            file_selector_id: DEFAULT_FILE_SELECTOR_ID.to_string(),
            source_region_id: DEFAULT_SOURCE_REGION_ID.to_string(),
            listing_region_id: DEFAULT_LISTING_REGION_ID.to_string(),
            download_mime: DEFAULT_DOWNLOAD_MIME.to_string(),
            log_level: Level::Info,
        }
    }

    pub fn with_file_selector_id(mut self, id: impl Into<String>) -> Self {
        self.file_selector_id = id.into();
        self
    }

    pub fn with_source_region_id(mut self, id: impl Into<String>) -> Self {
        self.source_region_id = id.into();
        self
    }

    pub fn with_listing_region_id(mut self, id: impl Into<String>) -> Self {
        self.listing_region_id = id.into();
        self
    }

    pub fn with_download_mime(mut self, mime: impl Into<String>) -> Self {
        self.download_mime = mime.into();
        self
    }

    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Set the log level from its name (`"error"`, `"warn"`, `"info"`,
    /// `"debug"`, `"trace"`, any case).
    pub fn set_log_level_name(&mut self, name: &str) -> Result<(), SetupError> {
        self.log_level =
            Level::from_str(name).map_err(|_| SetupError::InvalidLogLevel(name.to_string()))?;
        Ok(())
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ids() {
        let config = IngestConfig::default();
        assert_eq!(config.file_selector_id, "fileSelector");
        assert_eq!(config.source_region_id, "asmContent");
        assert_eq!(config.listing_region_id, "lstContent");
        assert_eq!(config.download_mime, "text/plain");
        assert_eq!(config.log_level, Level::Info);
    }

    #[test]
    fn test_builder_overrides() {
        let config = IngestConfig::new()
            .with_file_selector_id("picker")
            .with_source_region_id("src")
            .with_listing_region_id("out")
            .with_download_mime("text/x-listing")
            .with_log_level(Level::Debug);

        assert_eq!(config.file_selector_id, "picker");
        assert_eq!(config.source_region_id, "src");
        assert_eq!(config.listing_region_id, "out");
        assert_eq!(config.download_mime, "text/x-listing");
        assert_eq!(config.log_level, Level::Debug);
    }

    #[test]
    fn test_log_level_by_name() {
        let mut config = IngestConfig::new();
        assert!(config.set_log_level_name("DEBUG").is_ok());
        assert_eq!(config.log_level, Level::Debug);

        let err = config.set_log_level_name("chatty").unwrap_err();
        assert_eq!(err, SetupError::InvalidLogLevel("chatty".to_string()));
        assert_eq!(config.log_level, Level::Debug);
    }
}
