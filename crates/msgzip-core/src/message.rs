//! HTTP messages carrying a [`Stream`] body
//!
//! `with_*` methods consume the message and hand back the updated value, so a
//! message is never changed behind the back of another holder.

use crate::stream::Stream;
use http::header::{AsHeaderName, IntoHeaderName};
use http::{HeaderMap, HeaderValue, Request, Response};

/// Common view over requests and responses
pub trait Message: Sized {
    /// Header map (case-insensitive names)
    fn headers(&self) -> &HeaderMap;

    /// Mutable header map
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Body stream
    fn body(&self) -> &Stream;

    /// Mutable body stream
    fn body_mut(&mut self) -> &mut Stream;

    /// First value of a header
    fn header<K: AsHeaderName>(&self, name: K) -> Option<&HeaderValue> {
        self.headers().get(name)
    }

    /// Replace the body, dropping the previous one
    fn with_body(mut self, body: Stream) -> Self {
        *self.body_mut() = body;
        self
    }

    /// Set a header, replacing every existing value for that name
    fn with_header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.headers_mut().insert(name, value);
        self
    }

    /// Remove a header entirely
    fn without_header<K: AsHeaderName>(mut self, name: K) -> Self {
        self.headers_mut().remove(name);
        self
    }
}

impl Message for Request<Stream> {
    fn headers(&self) -> &HeaderMap {
        Request::headers(self)
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        Request::headers_mut(self)
    }

    fn body(&self) -> &Stream {
        Request::body(self)
    }

    fn body_mut(&mut self) -> &mut Stream {
        Request::body_mut(self)
    }
}

impl Message for Response<Stream> {
    fn headers(&self) -> &HeaderMap {
        Response::headers(self)
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        Response::headers_mut(self)
    }

    fn body(&self) -> &Stream {
        Response::body(self)
    }

    fn body_mut(&mut self) -> &mut Stream {
        Response::body_mut(self)
    }
}
