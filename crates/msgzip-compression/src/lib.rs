//! Gzip compression for HTTP messages
//!
//! [`Compressor`] gzip-encodes or decodes a message body and keeps the
//! `Content-Encoding` and `Content-Length` headers consistent with the result.
//!
//! ```
//! use std::sync::Arc;
//! use msgzip_compression::Compressor;
//! use msgzip_core::{DefaultStreamFactory, Message, Request, Stream};
//!
//! let compressor = Compressor::new(Arc::new(DefaultStreamFactory::new()));
//! let request = Request::new(Stream::from("We're testing"));
//!
//! let compressed = compressor.compress(request)?;
//! assert_eq!(compressed.header("content-encoding").unwrap(), "gzip");
//!
//! let mut restored = compressor.decompress(compressed)?;
//! assert_eq!(&restored.body_mut().contents()?[..], b"We're testing");
//! # Ok::<(), msgzip_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod compressor;
pub mod config;
pub mod gzip;

pub use compressor::Compressor;
pub use config::{load_from_file, load_from_str, CompressionConfig, ConfigFormat};
