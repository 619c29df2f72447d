//! qrgen - turn text or links into QR code images
//!
//! The crate resolves a payload and rendering options into a
//! [`GenerationRequest`], encodes it with the `qrcode` crate and writes either
//! a raster image or an SVG document depending on the destination extension.
//!
//! # Example
//!
//! ```no_run
//! use qrgen::{GenerationOptions, GenerationRequest, ErrorCorrectionLevel};
//!
//! fn main() -> qrgen::Result<()> {
//!     let options = GenerationOptions {
//!         error_correction: ErrorCorrectionLevel::H,
//!         ..GenerationOptions::default()
//!     };
//!     let request = GenerationRequest::new("https://example.com", "build/qr.svg", options);
//!
//!     let saved = qrgen::generate(&request)?;
//!     println!("Saved QR to: {}", saved.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod logging;
pub mod qr;
pub mod request;

// Re-exports for convenience
pub use error::{Error, ErrorKind, Result};

pub use config::{DefaultOptions, GenerationOptions, LoggingOptions, QrgenConfig};
pub use qr::{Color, ErrorCorrectionLevel, ModuleGrid, OutputFormat, QrEncoder, generate};
pub use request::{GenerationRequest, InputSource, resolve_input};
