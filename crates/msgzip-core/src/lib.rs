//! # msgzip core
//!
//! The abstractions a message transform works against:
//! - [`Message`] over `http::Request<Stream>` and `http::Response<Stream>`
//! - [`Stream`] bodies backed by an owned [`Resource`]
//! - [`StreamFactory`] for building new bodies
//! - Error types

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod error;
pub mod factory;
pub mod message;
pub mod stream;

pub use error::{Error, Result};
pub use factory::{DefaultStreamFactory, StreamFactory};
pub use message::Message;
pub use stream::{Resource, Stream};

// Re-export commonly used HTTP types
pub use http::{HeaderMap, HeaderValue, Request, Response};
