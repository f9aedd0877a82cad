use libc::c_int;
use thiserror::Error;

use crate::ffi;

pub type AoResult<T> = Result<T, AoError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AoError {
    /// The driver selector names no driver known to libao.
    #[error("no such driver: {0}")]
    UnknownDriver(String),
    #[error("invalid device option {key:?}: {reason}")]
    InvalidOption { key: String, reason: &'static str },
    #[error("error opening device: {0}")]
    DeviceOpen(OpenFailure),
    /// The device has already been closed.
    #[error("device is closed")]
    InvalidState,
    #[error("{field} value {value} is too large to convert")]
    Overflow { field: &'static str, value: u64 },
    #[error("out of memory")]
    OutOfMemory,
    #[error("{field} contains an interior NUL byte")]
    InteriorNul { field: &'static str },
    #[error("device expects {expected}-bit samples, got {actual}-bit")]
    SampleWidth { expected: u32, actual: u32 },
    #[error("error writing samples to device")]
    Write,
    #[error("error closing device")]
    Close,
}

/// Reasons libao gives for refusing to open a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpenFailure {
    /// No driver is available. This means either:
    ///  * There is no driver with the requested id
    ///  * There are no usable audio output devices
    #[error("no driver")]
    NoDriver,
    /// A live driver was asked to write a file.
    #[error("not a file output driver")]
    NotFile,
    /// A file driver was asked for live output.
    #[error("not a live output driver")]
    NotLive,
    #[error("bad option value")]
    BadOption,
    #[error("cannot open device")]
    OpenDevice,
    #[error("cannot open file")]
    OpenFile,
    /// The output file exists and overwriting was not requested.
    #[error("file exists")]
    FileExists,
    #[error("unsupported sample format")]
    BadFormat,
    #[error("unknown failure")]
    Unknown,
}

impl OpenFailure {
    pub fn from_code(code: c_int) -> OpenFailure {
        match code {
            ffi::AO_ENODRIVER => OpenFailure::NoDriver,
            ffi::AO_ENOTFILE => OpenFailure::NotFile,
            ffi::AO_ENOTLIVE => OpenFailure::NotLive,
            ffi::AO_EBADOPTION => OpenFailure::BadOption,
            ffi::AO_EOPENDEVICE => OpenFailure::OpenDevice,
            ffi::AO_EOPENFILE => OpenFailure::OpenFile,
            ffi::AO_EFILEEXISTS => OpenFailure::FileExists,
            ffi::AO_EBADFORMAT => OpenFailure::BadFormat,
            _ => OpenFailure::Unknown,
        }
    }

    /// Classifies the failure of the open call that just returned NULL.
    pub fn from_errno() -> OpenFailure {
        match std::io::Error::last_os_error().raw_os_error() {
            Some(code) => OpenFailure::from_code(code),
            None => OpenFailure::Unknown,
        }
    }

    pub fn code(self) -> c_int {
        match self {
            OpenFailure::NoDriver => ffi::AO_ENODRIVER,
            OpenFailure::NotFile => ffi::AO_ENOTFILE,
            OpenFailure::NotLive => ffi::AO_ENOTLIVE,
            OpenFailure::BadOption => ffi::AO_EBADOPTION,
            OpenFailure::OpenDevice => ffi::AO_EOPENDEVICE,
            OpenFailure::OpenFile => ffi::AO_EOPENFILE,
            OpenFailure::FileExists => ffi::AO_EFILEEXISTS,
            OpenFailure::BadFormat => ffi::AO_EBADFORMAT,
            OpenFailure::Unknown => ffi::AO_EFAIL,
        }
    }
}

impl From<OpenFailure> for AoError {
    fn from(failure: OpenFailure) -> AoError {
        AoError::DeviceOpen(failure)
    }
}
