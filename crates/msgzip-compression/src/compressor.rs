//! Gzip transform of message bodies

use crate::config::CompressionConfig;
use crate::gzip;
use http::header::{CONTENT_ENCODING, CONTENT_LENGTH};
use http::HeaderValue;
use msgzip_core::{Error, Message, Resource, Result, StreamFactory};
use std::fs::File;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// Applies gzip content encoding to HTTP messages
///
/// After [`compress`](Self::compress) the message carries `Content-Encoding:
/// gzip`. After [`decompress`](Self::decompress) it carries none. In both cases
/// `Content-Length` matches the new body exactly and no other header changes.
#[derive(Debug, Clone)]
pub struct Compressor {
    stream_factory: Arc<dyn StreamFactory>,
    config: CompressionConfig,
}

impl Compressor {
    /// Create a compressor using the default configuration
    pub fn new(stream_factory: Arc<dyn StreamFactory>) -> Self {
        Self::with_config(stream_factory, CompressionConfig::default())
    }

    /// Create a compressor with an explicit configuration
    pub fn with_config(stream_factory: Arc<dyn StreamFactory>, config: CompressionConfig) -> Self {
        Self {
            stream_factory,
            config,
        }
    }

    /// Replace the stream factory
    pub fn set_stream_factory(&mut self, stream_factory: Arc<dyn StreamFactory>) -> &mut Self {
        self.stream_factory = stream_factory;
        self
    }

    /// Current stream factory
    pub fn stream_factory(&self) -> &Arc<dyn StreamFactory> {
        &self.stream_factory
    }

    /// Current configuration
    pub fn config(&self) -> &CompressionConfig {
        &self.config
    }

    /// Gzip-encode the message body
    ///
    /// The encoded bytes are spooled into a fresh anonymous temporary file that
    /// the returned message owns.
    pub fn compress<M: Message>(&self, mut message: M) -> Result<M> {
        let contents = message.body_mut().contents()?;
        let encoded = gzip::encode(&contents, self.config.level)?;

        let mut spool = self.spool_file()?;
        spool.write_all(&encoded).map_err(Error::Resource)?;

        let body = self
            .stream_factory
            .create_stream_from_resource(Resource::File(spool))?;
        let size = body.size().ok_or(Error::UnknownSize)?;

        debug!(
            original_size = contents.len(),
            compressed_size = size,
            level = self.config.level,
            "Message body compressed"
        );

        Ok(message
            .with_body(body)
            .with_header(CONTENT_ENCODING, HeaderValue::from_static("gzip"))
            .with_header(CONTENT_LENGTH, HeaderValue::from(size)))
    }

    /// Gzip-decode the message body
    ///
    /// The body bytes are decoded regardless of the `Content-Encoding` header.
    /// On success the original body storage is truncated and reused for the
    /// decoded bytes. On a decoding failure the body is left untouched.
    pub fn decompress<M: Message>(&self, mut message: M) -> Result<M> {
        let contents = message.body_mut().contents()?;
        let decoded = gzip::decode(&contents)?;

        let mut resource = message.body_mut().detach().ok_or(Error::Detached)?;
        resource.truncate().map_err(Error::Resource)?;
        resource.write_all(&decoded).map_err(Error::Resource)?;

        let body = self.stream_factory.create_stream_from_resource(resource)?;
        let size = body.size().ok_or(Error::UnknownSize)?;

        debug!(
            compressed_size = contents.len(),
            decoded_size = size,
            "Message body decompressed"
        );

        Ok(message
            .with_body(body)
            .without_header(CONTENT_ENCODING)
            .with_header(CONTENT_LENGTH, HeaderValue::from(size)))
    }

    fn spool_file(&self) -> Result<File> {
        let file = match &self.config.temp_dir {
            Some(dir) => tempfile::tempfile_in(dir),
            None => tempfile::tempfile(),
        };
        file.map_err(Error::Resource)
    }
}
