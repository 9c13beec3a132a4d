use std::io::Cursor;

use crate::byte_order::{read_f64, read_i32, read_u32, read_u8, ByteOrder};
use crate::error::WkbResult;

/// A read position over a finite WKB buffer.
#[derive(Debug, Clone)]
pub(crate) struct WkbCursor<'a> {
    inner: Cursor<&'a [u8]>,
}

impl<'a> WkbCursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self {
            inner: Cursor::new(buf),
        }
    }

    /// The number of bytes consumed so far.
    pub(crate) fn position(&self) -> usize {
        self.inner.position() as usize
    }

    /// The number of bytes left to read.
    pub(crate) fn remaining(&self) -> usize {
        self.inner.get_ref().len().saturating_sub(self.position())
    }

    pub(crate) fn read_u8(&mut self) -> WkbResult<u8> {
        read_u8(&mut self.inner)
    }

    pub(crate) fn read_u32(&mut self, byte_order: ByteOrder) -> WkbResult<u32> {
        read_u32(&mut self.inner, byte_order)
    }

    pub(crate) fn read_i32(&mut self, byte_order: ByteOrder) -> WkbResult<i32> {
        read_i32(&mut self.inner, byte_order)
    }

    pub(crate) fn read_f64(&mut self, byte_order: ByteOrder) -> WkbResult<f64> {
        read_f64(&mut self.inner, byte_order)
    }
}
