use libc::{c_char, c_int};
use std::ffi::CStr;
use std::fmt;
use std::slice;

use crate::ffi;

/// A libao driver number, known to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DriverId(c_int);

impl DriverId {
    /// Wraps a raw id as returned by libao, where -1 means "not found".
    pub fn from_raw(id: c_int) -> Option<DriverId> {
        if id < 0 {
            None
        } else {
            Some(DriverId(id))
        }
    }

    pub fn as_raw(self) -> c_int {
        self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Selects an output driver.
///
/// # Drivers
///
/// See the [libao docs](https://www.xiph.org/ao/doc/drivers.html) for
/// the drivers provided by default. Note that this is not an exhaustive
/// list, as user plugins may provide additional drivers.
///
/// The default driver may be user-specified, or it will be automatically
/// chosen to be a live output supported by the current platform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Driver {
    /// A raw driver number.
    Id(c_int),
    /// A driver short name such as `"alsa"` or `"wav"`.
    Name(String),
    /// Whatever libao considers the default live driver.
    #[default]
    Default,
}

impl From<c_int> for Driver {
    fn from(id: c_int) -> Driver {
        Driver::Id(id)
    }
}

impl From<DriverId> for Driver {
    fn from(id: DriverId) -> Driver {
        Driver::Id(id.as_raw())
    }
}

impl<'a> From<&'a str> for Driver {
    fn from(name: &'a str) -> Driver {
        Driver::Name(name.to_owned())
    }
}

impl From<String> for Driver {
    fn from(name: String) -> Driver {
        Driver::Name(name)
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Driver::Id(id) => write!(f, "#{}", id),
            Driver::Name(ref name) => write!(f, "{:?}", name),
            Driver::Default => f.write_str("default"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverKind {
    Live,
    File,
}

impl DriverKind {
    pub fn from_raw(kind: c_int) -> Option<DriverKind> {
        match kind {
            ffi::AO_TYPE_LIVE => Some(DriverKind::Live),
            ffi::AO_TYPE_FILE => Some(DriverKind::File),
            _ => None,
        }
    }
}

/// Metadata describing one driver, copied out of libao.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverInfo {
    /// `None` if libao reports a driver type this crate does not know.
    pub kind: Option<DriverKind>,
    pub name: String,
    pub short_name: String,
    pub author: String,
    pub comment: String,
    /// Raw `AO_FMT_*` tag the driver works best with.
    pub preferred_byte_format: c_int,
    pub priority: c_int,
    /// Option keys the driver understands.
    pub options: Vec<String>,
}

#[cfg_attr(not(feature = "libao"), allow(dead_code))]
pub(crate) unsafe fn owned_string(s: *const c_char) -> String {
    if s.is_null() {
        String::new()
    } else {
        CStr::from_ptr(s).to_string_lossy().into_owned()
    }
}

impl DriverInfo {
    /// Copies a driver description out of libao.
    ///
    /// Every pointer in `info` must be null or point to a valid C string.
    #[cfg_attr(not(feature = "libao"), allow(dead_code))]
    pub(crate) unsafe fn from_raw(info: &ffi::ao_info) -> DriverInfo {
        let options = if info.options.is_null() || info.option_count <= 0 {
            Vec::new()
        } else {
            slice::from_raw_parts(info.options, info.option_count as usize)
                .iter()
                .map(|&key| owned_string(key))
                .collect()
        };

        DriverInfo {
            kind: DriverKind::from_raw(info.kind),
            name: owned_string(info.name),
            short_name: owned_string(info.short_name),
            author: owned_string(info.author),
            comment: owned_string(info.comment),
            preferred_byte_format: info.preferred_byte_format,
            priority: info.priority,
            options,
        }
    }
}
