//! Fixed-width integer and IEEE-754 double codec in either byte order.

use std::io::{ErrorKind, Read, Write};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{WkbError, WkbResult};

/// Byte order of a WKB record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Big endian, conventionally called XDR.
    BigEndian,
    /// Little endian, conventionally called NDR.
    #[default]
    LittleEndian,
}

impl ByteOrder {
    /// Alias for [`ByteOrder::BigEndian`].
    pub const XDR: ByteOrder = ByteOrder::BigEndian;

    /// Alias for [`ByteOrder::LittleEndian`].
    pub const NDR: ByteOrder = ByteOrder::LittleEndian;
}

impl TryFrom<u8> for ByteOrder {
    type Error = WkbError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ByteOrder::BigEndian),
            1 => Ok(ByteOrder::LittleEndian),
            _ => Err(WkbError::UnknownByteOrder { value }),
        }
    }
}

impl From<ByteOrder> for u8 {
    fn from(value: ByteOrder) -> Self {
        use ByteOrder::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

/// A short read is always [`WkbError::Truncated`]; the input is a finite buffer.
fn map_read_err(err: std::io::Error) -> WkbError {
    if err.kind() == ErrorKind::UnexpectedEof {
        WkbError::Truncated
    } else {
        WkbError::IOError(err)
    }
}

pub(crate) fn read_u8<R: Read>(reader: &mut R) -> WkbResult<u8> {
    reader.read_u8().map_err(map_read_err)
}

pub(crate) fn read_u32<R: Read>(reader: &mut R, byte_order: ByteOrder) -> WkbResult<u32> {
    match byte_order {
        ByteOrder::BigEndian => reader.read_u32::<BigEndian>(),
        ByteOrder::LittleEndian => reader.read_u32::<LittleEndian>(),
    }
    .map_err(map_read_err)
}

pub(crate) fn read_i32<R: Read>(reader: &mut R, byte_order: ByteOrder) -> WkbResult<i32> {
    match byte_order {
        ByteOrder::BigEndian => reader.read_i32::<BigEndian>(),
        ByteOrder::LittleEndian => reader.read_i32::<LittleEndian>(),
    }
    .map_err(map_read_err)
}

pub(crate) fn read_f64<R: Read>(reader: &mut R, byte_order: ByteOrder) -> WkbResult<f64> {
    match byte_order {
        ByteOrder::BigEndian => reader.read_f64::<BigEndian>(),
        ByteOrder::LittleEndian => reader.read_f64::<LittleEndian>(),
    }
    .map_err(map_read_err)
}

pub(crate) fn write_u8<W: Write>(writer: &mut W, value: u8) -> WkbResult<()> {
    writer.write_u8(value)?;
    Ok(())
}

pub(crate) fn write_u32<W: Write>(
    writer: &mut W,
    value: u32,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    match byte_order {
        ByteOrder::BigEndian => writer.write_u32::<BigEndian>(value)?,
        ByteOrder::LittleEndian => writer.write_u32::<LittleEndian>(value)?,
    }
    Ok(())
}

pub(crate) fn write_i32<W: Write>(
    writer: &mut W,
    value: i32,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    match byte_order {
        ByteOrder::BigEndian => writer.write_i32::<BigEndian>(value)?,
        ByteOrder::LittleEndian => writer.write_i32::<LittleEndian>(value)?,
    }
    Ok(())
}

pub(crate) fn write_f64<W: Write>(
    writer: &mut W,
    value: f64,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    match byte_order {
        ByteOrder::BigEndian => writer.write_f64::<BigEndian>(value)?,
        ByteOrder::LittleEndian => writer.write_f64::<LittleEndian>(value)?,
    }
    Ok(())
}

/// Write a count field, failing if it does not fit in 32 bits.
pub(crate) fn write_count<W: Write>(
    writer: &mut W,
    count: usize,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    let count: u32 = count.try_into().map_err(|_| WkbError::Overflow)?;
    write_u32(writer, count, byte_order)
}
