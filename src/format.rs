use libc::c_int;
use std::ffi::CString;

use crate::error::{AoError, AoResult};
use crate::ffi;

/// Machine byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// Least-significant byte first
    Little,
    /// Most-significant byte first
    Big,
    /// Machine's default byte order
    #[default]
    Native,
}

impl Endianness {
    pub fn from_raw(tag: c_int) -> Option<Endianness> {
        match tag {
            ffi::AO_FMT_LITTLE => Some(Endianness::Little),
            ffi::AO_FMT_BIG => Some(Endianness::Big),
            ffi::AO_FMT_NATIVE => Some(Endianness::Native),
            _ => None,
        }
    }

    pub fn as_raw(self) -> c_int {
        match self {
            Endianness::Little => ffi::AO_FMT_LITTLE,
            Endianness::Big => ffi::AO_FMT_BIG,
            Endianness::Native => ffi::AO_FMT_NATIVE,
        }
    }
}

/// Describes audio sample formats.
///
/// Used to specify the format which data will be fed to a Device. The
/// default is 16-bit stereo at 44.1 kHz in host byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFormat {
    /// Bits per sample
    pub bits: u32,
    /// Samples per second (per channel)
    pub rate: u32,
    /// Number of channels
    pub channels: u32,
    /// Byte order of samples.
    pub byte_format: Endianness,
    /// Maps input channels to output locations in a comma-separated list.
    ///
    /// For example, "L,R" specifies channel 0 as left and 1 as right, or
    /// "L,R,C,LFE,BR,BL" for a 5.1 FLAC file.
    ///
    /// Refer to the [`matrix` documentation](https://www.xiph.org/ao/doc/ao_sample_format.html)
    /// for additional information and examples.
    pub matrix: Option<String>,
}

impl Default for SampleFormat {
    fn default() -> SampleFormat {
        SampleFormat {
            bits: 16,
            rate: 44100,
            channels: 2,
            byte_format: Endianness::Native,
            matrix: None,
        }
    }
}

impl SampleFormat {
    pub fn bits(mut self, bits: u32) -> SampleFormat {
        self.bits = bits;
        self
    }

    pub fn rate(mut self, rate: u32) -> SampleFormat {
        self.rate = rate;
        self
    }

    pub fn channels(mut self, channels: u32) -> SampleFormat {
        self.channels = channels;
        self
    }

    pub fn byte_format(mut self, order: Endianness) -> SampleFormat {
        self.byte_format = order;
        self
    }

    pub fn matrix<S: Into<String>>(mut self, matrix: S) -> SampleFormat {
        self.matrix = Some(matrix.into());
        self
    }

    /// Checks every field fits its C representation.
    pub fn to_native(&self) -> AoResult<NativeFormat> {
        fn int(field: &'static str, value: u32) -> AoResult<c_int> {
            c_int::try_from(value).map_err(|_| AoError::Overflow {
                field,
                value: value.into(),
            })
        }

        let matrix = match self.matrix {
            None => None,
            Some(ref m) => Some(
                CString::new(m.as_str()).map_err(|_| AoError::InteriorNul { field: "matrix" })?,
            ),
        };

        Ok(NativeFormat {
            bits: int("bits", self.bits)?,
            rate: int("rate", self.rate)?,
            channels: int("channels", self.channels)?,
            byte_format: self.byte_format.as_raw(),
            matrix,
        })
    }
}

/// A validated sample format, ready to hand to an open call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeFormat {
    pub bits: c_int,
    pub rate: c_int,
    pub channels: c_int,
    pub byte_format: c_int,
    pub matrix: Option<CString>,
}

impl NativeFormat {
    /// Runs `f` with a borrowed `ao_sample_format`.
    ///
    /// The caller of ao_open_* functions retains ownership of the format it
    /// passes in, but the native representation points into our matrix
    /// string. The raw struct never leaves this scope.
    pub fn with_raw<T, F: FnOnce(&ffi::ao_sample_format) -> T>(&self, f: F) -> T {
        let raw = ffi::ao_sample_format {
            bits: self.bits,
            rate: self.rate,
            channels: self.channels,
            byte_format: self.byte_format,
            matrix: self.matrix.as_ref().map_or(std::ptr::null(), |m| m.as_ptr()),
        };
        f(&raw)
    }
}

/// Type bound for typed sample buffers.
///
/// All types that implement `Sample` should be raw enough to permit output
/// without additional processing. Conspicuously missing is a 24-bit type,
/// simply because there isn't a Rust-native 24-bit type.
pub trait Sample: Copy {
    /// Width of one sample in bits.
    const BITS: u32;

    /// Appends `self` to `out` in the given byte order.
    fn extend_bytes(self, order: Endianness, out: &mut Vec<u8>);
}

macro_rules! sample_impl {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            const BITS: u32 = <$t>::BITS;

            fn extend_bytes(self, order: Endianness, out: &mut Vec<u8>) {
                match order {
                    Endianness::Little => out.extend_from_slice(&self.to_le_bytes()),
                    Endianness::Big => out.extend_from_slice(&self.to_be_bytes()),
                    Endianness::Native => out.extend_from_slice(&self.to_ne_bytes()),
                }
            }
        }
    )*};
}

sample_impl!(i8, i16, i32);
