//! DOM side of the controller: display regions, downloads and file reading.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, File, HtmlInputElement, Window};

use crate::config::IngestConfig;
use crate::controller::{FileHandle, Host};
use crate::error::{IngestError, SetupError};
use crate::ingest::Download;
use crate::wasm::{describe, download};

/// [`Host`] backed by two elements of a live document.
pub struct DomHost {
    window: Window,
    document: Document,
    source: Element,
    listing: Element,
    mime: String,
}

impl DomHost {
    /// Look up the display regions named in `config`.
    pub fn bind(
        window: Window,
        document: Document,
        config: &IngestConfig,
    ) -> Result<Self, SetupError> {
        let source = element(&document, &config.source_region_id)?;
        let listing = element(&document, &config.listing_region_id)?;

        Ok(Self {
            window,
            document,
            source,
            listing,
            mime: config.download_mime.clone(),
        })
    }
}

impl Host for DomHost {
    fn show_source(&self, text: &str) {
        self.source.set_text_content(Some(text));
    }

    fn show_listing(&self, text: &str) {
        self.listing.set_text_content(Some(text));
    }

    fn download(&self, download: &Download) -> Result<(), String> {
        download::download(
            &self.window,
            &self.document,
            &download.content,
            &download.file_name,
            &self.mime,
        )
        .map_err(|err| describe(&err))
    }

    fn show_failure(&self, error: &IngestError) {
        match error {
            // The listing region already holds a good listing; keep it.
            IngestError::Download { .. } => {
                if let Err(err) = self.window.alert_with_message(&error.to_string()) {
                    log::error!("could not show alert: {}", describe(&err));
                }
            }
            IngestError::Read { .. } | IngestError::Assemble { .. } => {
                self.listing.set_text_content(Some(&error.to_string()));
            }
        }
    }
}

/// [`FileHandle`] for a browser `File`.
pub struct BrowserFile(pub File);

impl FileHandle for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    async fn read_text(&self) -> Result<String, String> {
        let text = JsFuture::from(self.0.text())
            .await
            .map_err(|err| describe(&err))?;
        text.as_string()
            .ok_or_else(|| "file contents are not text".to_string())
    }
}

/// The file input named in `config`.
pub fn file_selector(
    document: &Document,
    config: &IngestConfig,
) -> Result<HtmlInputElement, SetupError> {
    element(document, &config.file_selector_id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| SetupError::NotAFileInput(config.file_selector_id.clone()))
}

/// First file of a `change` event on a file input, if any.
pub fn first_selected_file(event: &Event) -> Option<BrowserFile> {
    let input = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0).map(BrowserFile)
}

fn element(document: &Document, id: &str) -> Result<Element, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::MissingElement(id.to_string()))
}
