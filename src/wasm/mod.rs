//! WebAssembly bindings for the listing page.
//!
//! This module wires the file selector, the two display regions and the
//! listing download of a browser page to [`IngestController`](crate::IngestController).

#[cfg(feature = "wasm")]
pub mod api;
#[cfg(feature = "wasm")]
pub mod download;
#[cfg(feature = "wasm")]
pub mod page;

#[cfg(feature = "wasm")]
pub use api::{start, start_with, start_with_config, JsAssembler, PageConfig};

#[cfg(any(feature = "wasm", test))]
use std::cell::Cell;

#[cfg(feature = "wasm")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(any(feature = "wasm", test))]
use crate::error::SetupError;

#[cfg(any(feature = "wasm", test))]
thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Run `setup` unless a previous run already succeeded.
///
/// A page is wired once; a second successful wiring would attach another
/// listener and process every selection twice. A failed `setup` may be
/// retried.
#[cfg(any(feature = "wasm", test))]
pub(crate) fn start_once<E, F>(setup: F) -> Result<(), E>
where
    E: From<SetupError>,
    F: FnOnce() -> Result<(), E>,
{
    if STARTED.with(Cell::get) {
        return Err(SetupError::AlreadyStarted.into());
    }
    setup()?;
    STARTED.with(|started| started.set(true));
    Ok(())
}

/// Best-effort message for a thrown JavaScript value.
#[cfg(feature = "wasm")]
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_start_is_refused() {
        let mut runs = 0;

        assert_eq!(
            start_once(|| -> Result<(), SetupError> {
                runs += 1;
                Ok(())
            }),
            Ok(())
        );
        assert_eq!(
            start_once(|| -> Result<(), SetupError> {
                runs += 1;
                Ok(())
            }),
            Err(SetupError::AlreadyStarted)
        );
        assert_eq!(runs, 1, "setup must not run again");
    }

    #[test]
    fn test_failed_start_can_be_retried() {
        let missing = start_once(|| Err(SetupError::MissingElement("fileSelector".to_string())));
        assert_eq!(
            missing,
            Err(SetupError::MissingElement("fileSelector".to_string()))
        );

        assert_eq!(start_once(|| -> Result<(), SetupError> { Ok(()) }), Ok(()));
    }
}
