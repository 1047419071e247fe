//! # Evento Common
//!
//! Shared library behind the `evento` command line.
//!
//! * **[`taxid`]**: parsing, masking and checksum validation of Brazilian
//!   CPF/CNPJ numbers.
//! * **[`config`]**: runtime options shared by every command.
//! * **Log macros**: [`success!`], [`info!`] and [`warn!`] emit `tracing` events
//!   on the `evento` targets so the terminal formatter can style them.

pub mod config;
pub mod macros;
pub mod taxid;

#[doc(hidden)]
pub use tracing;
