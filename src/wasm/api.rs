//! WASM API for the listing page.
//!
//! Provides the JavaScript entry points that wire a page up, a configurable
//! set of element ids, and the bridge to the page's `assemble` function.

use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

use crate::assembler::{AssembleError, Assembler};
use crate::config::IngestConfig;
use crate::controller::IngestController;
use crate::error::SetupError;
use crate::file_name;
use crate::wasm::{describe, start_once};
use crate::wasm::page::{self, DomHost};

#[wasm_bindgen]
extern "C" {
    /// The page's own assembler, looked up when called.
    #[wasm_bindgen(catch, js_name = assemble)]
    fn global_assemble(source: &str) -> Result<JsValue, JsValue>;
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// [`Assembler`] that calls into JavaScript.
pub enum JsAssembler {
    /// The global `assemble(source)` function of the page.
    Global,

    /// An explicitly supplied `(source) => listing` function.
    Function(js_sys::Function),
}

impl Assembler for JsAssembler {
    fn assemble(&self, source: &str) -> Result<String, AssembleError> {
        let listing = match self {
            JsAssembler::Global => global_assemble(source),
            JsAssembler::Function(function) => {
                function.call1(&JsValue::NULL, &JsValue::from_str(source))
            }
        }
        .map_err(|thrown| AssembleError::Failed(describe(&thrown)))?;

        listing.as_string().ok_or(AssembleError::NonText)
    }
}

/// JavaScript view of [`IngestConfig`].
#[wasm_bindgen(js_name = IngestConfig)]
#[derive(Debug, Clone, Default)]
pub struct PageConfig {
    inner: IngestConfig,
}

#[wasm_bindgen(js_class = IngestConfig)]
impl PageConfig {
    /// Defaults: `fileSelector`, `asmContent`, `lstContent`, `text/plain`, `info`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> PageConfig {
        PageConfig::default()
    }

    #[wasm_bindgen(getter = fileSelectorId)]
    pub fn file_selector_id(&self) -> String {
        self.inner.file_selector_id.clone()
    }

    #[wasm_bindgen(setter = fileSelectorId)]
    pub fn set_file_selector_id(&mut self, id: String) {
        self.inner.file_selector_id = id;
    }

    #[wasm_bindgen(getter = sourceRegionId)]
    pub fn source_region_id(&self) -> String {
        self.inner.source_region_id.clone()
    }

    #[wasm_bindgen(setter = sourceRegionId)]
    pub fn set_source_region_id(&mut self, id: String) {
        self.inner.source_region_id = id;
    }

    #[wasm_bindgen(getter = listingRegionId)]
    pub fn listing_region_id(&self) -> String {
        self.inner.listing_region_id.clone()
    }

    #[wasm_bindgen(setter = listingRegionId)]
    pub fn set_listing_region_id(&mut self, id: String) {
        self.inner.listing_region_id = id;
    }

    #[wasm_bindgen(getter = downloadMime)]
    pub fn download_mime(&self) -> String {
        self.inner.download_mime.clone()
    }

    #[wasm_bindgen(setter = downloadMime)]
    pub fn set_download_mime(&mut self, mime: String) {
        self.inner.download_mime = mime;
    }

    #[wasm_bindgen(getter = logLevel)]
    pub fn log_level(&self) -> String {
        self.inner.log_level.as_str().to_lowercase()
    }

    /// Accepts `error`, `warn`, `info`, `debug` or `trace`.
    #[wasm_bindgen(js_name = setLogLevel)]
    pub fn set_log_level(&mut self, name: &str) -> Result<(), JsValue> {
        self.inner.set_log_level_name(name)?;
        Ok(())
    }
}

/// Wire the default page up, assembling with the page's global `assemble`.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    install(IngestConfig::default(), JsAssembler::Global)
}

/// Wire the default page up, assembling with `assemble`.
#[wasm_bindgen(js_name = startWith)]
pub fn start_with(assemble: js_sys::Function) -> Result<(), JsValue> {
    install(IngestConfig::default(), JsAssembler::Function(assemble))
}

/// Wire a page described by `config` up. Without `assemble`, the page's global
/// `assemble` is used.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(
    config: &PageConfig,
    assemble: Option<js_sys::Function>,
) -> Result<(), JsValue> {
    let assembler = match assemble {
        Some(function) => JsAssembler::Function(function),
        None => JsAssembler::Global,
    };
    install(config.inner.clone(), assembler)
}

/// Name under which the listing of `name` is saved.
#[wasm_bindgen(js_name = listingFileName)]
pub fn listing_file_name(name: &str) -> String {
    file_name::listing_file_name(name)
}

fn install(config: IngestConfig, assembler: JsAssembler) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Fails once a logger is installed; the first one stays.
    let _ = console_log::init_with_level(config.log_level);

    start_once(|| wire(config, assembler))
}

fn wire(config: IngestConfig, assembler: JsAssembler) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let document = window.document().ok_or(SetupError::NoDocument)?;
    let selector = page::file_selector(&document, &config)?;
    let host = DomHost::bind(window, document, &config)?;

    let controller = Rc::new(IngestController::new(assembler, host));
    let on_change = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let file = page::first_selected_file(&event);
        let controller = Rc::clone(&controller);
        wasm_bindgen_futures::spawn_local(async move {
            // Failures are rendered and logged by the controller.
            let _ = controller.handle(file).await;
        });
    });
    selector.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    info!("listening for files on #{}", config.file_selector_id);
    Ok(())
}
