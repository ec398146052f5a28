//! # Assembly Listing Drop
//!
//! Browser-side glue for an assembler page: the user picks a local file, the
//! crate reads it and dispatches on its extension.
//!
//! - `.asm` files are shown, handed to the page's assembler, and the listing is
//!   shown and saved as `<name>.lst`.
//! - `.lst` files are shown as listings.
//! - Anything else is ignored.
//!
//! ## Quick Start
//!
//! ```rust
//! use asm_listing_drop::{ingest, AssembleError, SelectedFile};
//!
//! let assemble = |source: &str| -> Result<String, AssembleError> {
//!     Ok(format!("0000  {}", source))
//! };
//!
//! let outcome = ingest(&SelectedFile::new("program.asm", "NOP"), &assemble).unwrap();
//!
//! assert_eq!(outcome.source.as_deref(), Some("NOP"));
//! assert_eq!(outcome.listing.as_deref(), Some("0000  NOP"));
//! assert_eq!(outcome.download.unwrap().file_name, "program.lst");
//! ```
//!
//! ## Architecture
//!
//! - **Pure core**: [`ingest`] returns an [`IngestOutcome`] describing what to
//!   show and save. It has no host dependencies and runs on any target.
//! - **Seams**: the assembler is reached through [`Assembler`]; displays and
//!   downloads through [`Host`]; unread files through [`FileHandle`].
//! - **Controller**: [`IngestController`] awaits the read, runs the core and
//!   applies the outcome, rendering failures.
//! - **Browser binding**: the `wasm` feature wires all of this to the DOM.
//!
//! ## Modules
//!
//! - `file_name` - Extension dispatch and listing name derivation
//! - `assembler` - The external assembler seam
//! - `ingest` - Pure processing of one file
//! - `controller` - Async selection handling
//! - `config` - Element ids and download settings
//! - `error` - Error types
//! - `wasm` - DOM binding (feature `wasm`)

pub mod assembler;
pub mod config;
pub mod controller;
pub mod error;
pub mod file_name;
pub mod ingest;
pub mod wasm;

// Re-export public API
pub use assembler::{AssembleError, Assembler};
pub use config::IngestConfig;
pub use controller::{FileHandle, Host, IngestController, Phase};
pub use error::{IngestError, SetupError};
pub use file_name::{extension, listing_file_name, FileKind};
pub use ingest::{ingest, Download, IngestOutcome, SelectedFile};
