//! Stream construction

use crate::stream::{Resource, Stream};
use crate::{Error, Result};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Seek;
use std::path::Path;
use tracing::trace;

/// Creates body streams from raw bytes, resources, or files
pub trait StreamFactory: Send + Sync + fmt::Debug {
    /// Create a stream holding a copy of `bytes`
    fn create_stream(&self, bytes: &[u8]) -> Result<Stream>;

    /// Wrap an existing resource, taking ownership of it
    fn create_stream_from_resource(&self, resource: Resource) -> Result<Stream>;

    /// Open an existing file as a stream
    fn create_stream_from_file(&self, path: &Path) -> Result<Stream>;
}

/// Memory-backed streams for bytes, file-backed streams for files
///
/// Wrapped resources are rewound so that the stream reads from the start.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStreamFactory;

impl DefaultStreamFactory {
    /// Create a new factory
    pub fn new() -> Self {
        Self
    }
}

impl StreamFactory for DefaultStreamFactory {
    fn create_stream(&self, bytes: &[u8]) -> Result<Stream> {
        Ok(Stream::new(Resource::memory(bytes)))
    }

    fn create_stream_from_resource(&self, mut resource: Resource) -> Result<Stream> {
        resource.rewind()?;
        Ok(Stream::new(resource))
    }

    fn create_stream_from_file(&self, path: &Path) -> Result<Stream> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(Error::Resource)?;
        trace!(path = %path.display(), "Opened file-backed stream");
        self.create_stream_from_resource(Resource::File(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_create_stream() {
        let factory = DefaultStreamFactory::new();
        let mut stream = factory.create_stream(b"We're testing").unwrap();
        assert_eq!(stream.size(), Some(13));
        assert_eq!(&stream.contents().unwrap()[..], b"We're testing");
    }

    #[test]
    fn test_create_stream_from_resource_rewinds() {
        let factory = DefaultStreamFactory::new();
        let mut resource = Resource::memory(Vec::new());
        resource.write_all(b"written").unwrap();

        let mut stream = factory.create_stream_from_resource(resource).unwrap();
        let mut buf = String::new();
        std::io::Read::read_to_string(&mut stream, &mut buf).unwrap();
        assert_eq!(buf, "written");
    }

    #[test]
    fn test_create_stream_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"on disk").unwrap();

        let factory = DefaultStreamFactory::new();
        let mut stream = factory.create_stream_from_file(file.path()).unwrap();
        assert_eq!(stream.size(), Some(7));
        assert_eq!(&stream.contents().unwrap()[..], b"on disk");
    }

    #[test]
    fn test_create_stream_from_missing_file() {
        let factory = DefaultStreamFactory::new();
        let result = factory.create_stream_from_file(Path::new("/nonexistent/msgzip/body"));
        assert!(matches!(result, Err(Error::Resource(_))));
    }
}
