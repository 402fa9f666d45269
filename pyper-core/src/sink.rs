//! Output destinations for emitted source text.

use std::{fmt, io};

use crate::Result;

/// An append-only text destination.
///
/// The writer performs no buffering of its own; appends reach the sink in
/// the order they are issued.
pub trait Sink {
    /// Append `text` to the destination.
    fn append(&mut self, text: &str) -> Result<()>;
}

impl Sink for String {
    fn append(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn append(&mut self, text: &str) -> Result<()> {
        (**self).append(text)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn append(&mut self, text: &str) -> Result<()> {
        self.as_mut().append(text)
    }
}

/// Adapts any [`io::Write`] (files, stdout, sockets) into a [`Sink`].
///
/// I/O errors are returned unmodified as [`Error::Io`](crate::Error::Io).
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Get a reference to the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Flush and return the wrapped writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn append(&mut self, text: &str) -> Result<()> {
        self.inner.write_all(text.as_bytes())?;
        Ok(())
    }
}

/// Adapts any [`fmt::Write`] (including a `Formatter`) into a [`Sink`].
pub struct FmtSink<'a, W: ?Sized> {
    inner: &'a mut W,
}

impl<'a, W: fmt::Write + ?Sized> FmtSink<'a, W> {
    pub fn new(inner: &'a mut W) -> Self {
        Self { inner }
    }
}

impl<W: fmt::Write + ?Sized> Sink for FmtSink<'_, W> {
    fn append(&mut self, text: &str) -> Result<()> {
        self.inner.write_str(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_string_sink_appends_in_order() {
        let mut out = String::new();
        out.append("class ").unwrap();
        out.append("Foo").unwrap();
        assert_eq!(out, "class Foo");
    }

    #[test]
    fn test_mut_ref_sink_forwards() {
        let mut out = String::new();
        {
            let mut sink: &mut String = &mut out;
            sink.append("pass").unwrap();
        }
        assert_eq!(out, "pass");
    }

    #[test]
    fn test_boxed_sink_forwards() {
        let mut sink: Box<dyn Sink> = Box::new(String::new());
        sink.append("x").unwrap();
    }

    #[test]
    fn test_io_sink_writes_bytes() {
        let mut sink = IoSink::new(Vec::new());
        sink.append("def f():\n").unwrap();
        assert_eq!(sink.get_ref().as_slice(), b"def f():\n");
        assert_eq!(sink.into_inner().unwrap(), b"def f():\n".to_vec());
    }

    #[test]
    fn test_io_sink_propagates_failure() {
        let mut sink = IoSink::new(ClosedPipe);
        let err = sink.append("pass").unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_fmt_sink_writes_to_formatter_target() {
        let mut out = String::new();
        let mut sink = FmtSink::new(&mut out);
        sink.append("@deco").unwrap();
        assert_eq!(out, "@deco");
    }
}
