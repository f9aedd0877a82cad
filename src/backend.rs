use std::ffi::CStr;

use crate::driver::{DriverId, DriverInfo};
use crate::error::AoResult;
use crate::format::NativeFormat;
use crate::options::OptionList;

/// Where an opened device sends its samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// Live playback on an audio sink.
    Live,
    /// Output written to `path`, replacing an existing file only when
    /// `overwrite` is set.
    File { path: &'a CStr, overwrite: bool },
}

/// The native calls an `Ao` forwards to.
///
/// `Libao` implements this over the system library; anything else that
/// behaves like libao can stand in for it.
pub trait Backend {
    /// An open output stream.
    type Handle;

    /// Looks up a driver by short name.
    fn driver_id(&self, short_name: &CStr) -> Option<DriverId>;

    fn default_driver_id(&self) -> Option<DriverId>;

    fn driver_info(&self, id: DriverId) -> Option<DriverInfo>;

    /// All drivers, in the library's enumeration order.
    fn driver_info_list(&self) -> Vec<DriverInfo>;

    /// Conventional extension of files written by the driver, if any.
    fn file_extension(&self, id: DriverId) -> Option<String>;

    fn is_big_endian(&self) -> bool;

    fn open(&self, id: DriverId, format: &NativeFormat, options: &OptionList,
            target: Target) -> AoResult<Self::Handle>;

    /// Writes `samples` to the device, blocking until the sink accepts them.
    fn play(&self, handle: &mut Self::Handle, samples: &mut [u8]) -> AoResult<()>;

    fn close(&self, handle: Self::Handle) -> AoResult<()>;
}

impl<'b, B: Backend + ?Sized> Backend for &'b B {
    type Handle = B::Handle;

    fn driver_id(&self, short_name: &CStr) -> Option<DriverId> {
        (**self).driver_id(short_name)
    }

    fn default_driver_id(&self) -> Option<DriverId> {
        (**self).default_driver_id()
    }

    fn driver_info(&self, id: DriverId) -> Option<DriverInfo> {
        (**self).driver_info(id)
    }

    fn driver_info_list(&self) -> Vec<DriverInfo> {
        (**self).driver_info_list()
    }

    fn file_extension(&self, id: DriverId) -> Option<String> {
        (**self).file_extension(id)
    }

    fn is_big_endian(&self) -> bool {
        (**self).is_big_endian()
    }

    fn open(&self, id: DriverId, format: &NativeFormat, options: &OptionList,
            target: Target) -> AoResult<Self::Handle> {
        (**self).open(id, format, options, target)
    }

    fn play(&self, handle: &mut Self::Handle, samples: &mut [u8]) -> AoResult<()> {
        (**self).play(handle, samples)
    }

    fn close(&self, handle: Self::Handle) -> AoResult<()> {
        (**self).close(handle)
    }
}
