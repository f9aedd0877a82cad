use log::{debug, trace, warn};

use crate::backend::Backend;
use crate::driver::{DriverId, DriverInfo};
use crate::error::{AoError, AoResult};
use crate::format::{Endianness, Sample};
use crate::Ao;

/// An open audio output stream.
///
/// Closed explicitly with `close`, or implicitly when dropped. Once closed a
/// device stays closed; open a new one to continue output.
pub struct Device<'a, B: Backend> {
    lib: &'a Ao<B>,
    driver: DriverId,
    bits: u32,
    byte_format: Endianness,
    handle: Option<B::Handle>,
}

impl<'a, B: Backend> Device<'a, B> {
    pub(crate) fn new(lib: &'a Ao<B>, driver: DriverId, bits: u32, byte_format: Endianness,
                      handle: B::Handle) -> Device<'a, B> {
        Device {
            lib,
            driver,
            bits,
            byte_format,
            handle: Some(handle),
        }
    }

    /// The driver this device was opened with.
    pub fn driver_id(&self) -> DriverId {
        self.driver
    }

    pub fn driver_info(&self) -> AoResult<DriverInfo> {
        self.lib.driver_info(&self.driver.into())
    }

    pub fn file_extension(&self) -> AoResult<Option<String>> {
        self.lib.file_extension(&self.driver.into())
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Plays the whole of `samples`.
    ///
    /// Blocks until the driver has accepted the data, which for a live
    /// device may take up to the length of the audio.
    pub fn play(&mut self, samples: &[u8]) -> AoResult<()> {
        self.play_partial(samples, 0)
    }

    /// Plays the first `count` bytes of `samples`.
    ///
    /// A `count` of zero, or one larger than the buffer, plays everything.
    pub fn play_partial(&mut self, samples: &[u8], count: usize) -> AoResult<()> {
        let count = if count == 0 || count > samples.len() {
            samples.len()
        } else {
            count
        };

        // ao_play takes a mutable buffer, so never hand it the caller's.
        let mut scratch = Vec::new();
        scratch
            .try_reserve_exact(count)
            .map_err(|_| AoError::OutOfMemory)?;
        scratch.extend_from_slice(&samples[..count]);
        self.write(&mut scratch)
    }

    /// Plays interleaved samples, which must match the device's sample width.
    ///
    /// Samples are encoded in the byte order the device was opened with.
    pub fn play_samples<S: Sample>(&mut self, samples: &[S]) -> AoResult<()> {
        if S::BITS != self.bits {
            return Err(AoError::SampleWidth {
                expected: self.bits,
                actual: S::BITS,
            });
        }

        let mut scratch = Vec::new();
        scratch
            .try_reserve_exact(samples.len() * (S::BITS as usize / 8))
            .map_err(|_| AoError::OutOfMemory)?;
        for &s in samples {
            s.extend_bytes(self.byte_format, &mut scratch);
        }
        self.write(&mut scratch)
    }

    fn write(&mut self, bytes: &mut [u8]) -> AoResult<()> {
        let handle = self.handle.as_mut().ok_or(AoError::InvalidState)?;
        trace!("driver {}: writing {} bytes", self.driver, bytes.len());
        self.lib.backend().play(handle, bytes)
    }

    /// Closes the device. Closing an already closed device does nothing.
    pub fn close(&mut self) -> AoResult<()> {
        match self.handle.take() {
            None => Ok(()),
            Some(handle) => {
                debug!("closing device on driver {}", self.driver);
                self.lib.backend().close(handle)
            }
        }
    }
}

impl<'a, B: Backend> Drop for Device<'a, B> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("driver {}: {}", self.driver, e);
        }
    }
}
