#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Selection gate for server-rendered tables.
//!
//! Row checkboxes, the select-all control and the bulk-action buttons of a
//! table page are kept consistent by [`crate::core::selection`]. The `dom` module
//! (wasm32 only) binds the gate to the live document and exports the handlers
//! the host page calls.

pub mod core;
pub mod error;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use crate::core::markers::GateConfig;
pub use crate::error::UiError;
