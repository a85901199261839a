//! Seekable body streams and the storage that backs them

use crate::{Error, Result};
use bytes::Bytes;
use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

/// Owned backing storage of a [`Stream`]
#[derive(Debug)]
pub enum Resource {
    /// In-memory buffer
    Memory(Cursor<Vec<u8>>),
    /// Open file handle
    File(File),
}

impl Resource {
    /// Create an in-memory resource holding `bytes`
    pub fn memory(bytes: impl Into<Vec<u8>>) -> Self {
        Resource::Memory(Cursor::new(bytes.into()))
    }

    /// Total length of the stored bytes, independent of the cursor position
    pub fn len(&self) -> io::Result<u64> {
        match self {
            Resource::Memory(cursor) => Ok(cursor.get_ref().len() as u64),
            Resource::File(file) => Ok(file.metadata()?.len()),
        }
    }

    /// Whether the resource holds no bytes
    pub fn is_empty(&self) -> io::Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Drop all stored bytes and rewind to the start
    pub fn truncate(&mut self) -> io::Result<()> {
        match self {
            Resource::Memory(cursor) => {
                cursor.get_mut().clear();
                cursor.set_position(0);
            }
            Resource::File(file) => {
                file.set_len(0)?;
                file.rewind()?;
            }
        }
        Ok(())
    }
}

impl Read for Resource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Resource::Memory(cursor) => cursor.read(buf),
            Resource::File(file) => file.read(buf),
        }
    }
}

impl Write for Resource {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Resource::Memory(cursor) => cursor.write(buf),
            Resource::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Resource::Memory(cursor) => cursor.flush(),
            Resource::File(file) => file.flush(),
        }
    }
}

impl Seek for Resource {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            Resource::Memory(cursor) => cursor.seek(pos),
            Resource::File(file) => file.seek(pos),
        }
    }
}

/// A message body
///
/// The stream exclusively owns its [`Resource`] until [`Stream::detach`] hands
/// it back to the caller. Every I/O operation on a detached stream fails.
#[derive(Debug)]
pub struct Stream {
    resource: Option<Resource>,
}

impl Stream {
    /// Wrap a resource
    pub fn new(resource: Resource) -> Self {
        Self {
            resource: Some(resource),
        }
    }

    /// Create an empty in-memory stream
    pub fn empty() -> Self {
        Self::new(Resource::memory(Vec::new()))
    }

    /// Read the whole stream from the start
    ///
    /// The cursor is left at the end of the stream.
    pub fn contents(&mut self) -> Result<Bytes> {
        let resource = self.resource_mut()?;
        resource.rewind()?;

        let mut buf = Vec::new();
        resource.read_to_end(&mut buf)?;
        Ok(Bytes::from(buf))
    }

    /// Size of the stream in bytes, `None` when it cannot be determined
    pub fn size(&self) -> Option<u64> {
        self.resource.as_ref()?.len().ok()
    }

    /// Move the cursor back to the start
    pub fn rewind(&mut self) -> Result<()> {
        self.resource_mut()?.rewind()?;
        Ok(())
    }

    /// Release the backing resource to the caller
    ///
    /// Returns `None` if the stream was already detached.
    pub fn detach(&mut self) -> Option<Resource> {
        self.resource.take()
    }

    /// Whether the backing resource has been released
    pub fn is_detached(&self) -> bool {
        self.resource.is_none()
    }

    fn resource_mut(&mut self) -> Result<&mut Resource> {
        self.resource.as_mut().ok_or(Error::Detached)
    }

    fn io_resource(&mut self) -> io::Result<&mut Resource> {
        self.resource
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, Error::Detached))
    }
}

impl Default for Stream {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<u8>> for Stream {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(Resource::memory(bytes))
    }
}

impl From<&str> for Stream {
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes().to_vec())
    }
}

impl From<Bytes> for Stream {
    fn from(bytes: Bytes) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl Read for Stream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.io_resource()?.read(buf)
    }
}

impl Write for Stream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.io_resource()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.io_resource()?.flush()
    }
}

impl Seek for Stream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.io_resource()?.seek(pos)
    }
}
