//! Audio device handles and driver queries over Xiph.org's libao.
//!
//! An [`Ao`] wraps a [`Backend`], normally the system library (`Ao::init`,
//! with the `libao` feature). It resolves driver selectors, answers driver
//! queries and opens [`Device`]s, which write raw sample bytes to a live
//! audio sink or to a file.

use libc::c_int;
use log::debug;
use std::ffi::CString;

#[allow(non_camel_case_types, dead_code)]
mod ffi;

pub mod backend;
pub mod config;
pub mod device;
pub mod driver;
pub mod error;
pub mod format;
pub mod options;

#[cfg(feature = "libao")]
pub mod native;

#[cfg(test)]
mod fake;

pub use backend::{Backend, Target};
pub use config::{DeviceConfig, Output};
pub use device::Device;
pub use driver::{Driver, DriverId, DriverInfo, DriverKind};
pub use error::{AoError, AoResult, OpenFailure};
pub use format::{Endianness, NativeFormat, Sample, SampleFormat};
pub use options::{OptionList, OptionListBuilder};

#[cfg(feature = "libao")]
pub use native::Libao;

/// Little-endian sample byte order tag.
pub const FMT_LITTLE: c_int = ffi::AO_FMT_LITTLE;
/// Big-endian sample byte order tag.
pub const FMT_BIG: c_int = ffi::AO_FMT_BIG;
/// Host byte order tag.
pub const FMT_NATIVE: c_int = ffi::AO_FMT_NATIVE;
/// Driver type tag for live output drivers.
pub const TYPE_LIVE: c_int = ffi::AO_TYPE_LIVE;
/// Driver type tag for file output drivers.
pub const TYPE_FILE: c_int = ffi::AO_TYPE_FILE;

/// The master of all things libao.
#[derive(Debug)]
pub struct Ao<B> {
    backend: B,
}

#[cfg(feature = "libao")]
impl Ao<Libao> {
    /// Gets the process-wide libao, initializing it on first use.
    pub fn init() -> Ao<Libao> {
        Ao::with_backend(Libao::initialize())
    }
}

impl<B: Backend> Ao<B> {
    pub fn with_backend(backend: B) -> Ao<B> {
        Ao { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Gets the id of the driver with the given short name.
    pub fn driver_id(&self, name: &str) -> AoResult<DriverId> {
        CString::new(name)
            .ok()
            .and_then(|name| self.backend.driver_id(&name))
            .ok_or_else(|| AoError::UnknownDriver(name.to_owned()))
    }

    /// Resolves a selector to a driver id.
    ///
    /// `Driver::Default` fails with `UnknownDriver` if there is no usable
    /// default driver.
    pub fn resolve(&self, driver: &Driver) -> AoResult<DriverId> {
        match *driver {
            Driver::Id(id) => DriverId::from_raw(id)
                .filter(|&id| self.backend.driver_info(id).is_some())
                .ok_or_else(|| AoError::UnknownDriver(driver.to_string())),
            Driver::Name(ref name) => self.driver_id(name),
            Driver::Default => self
                .default_driver()
                .ok_or_else(|| AoError::UnknownDriver(driver.to_string())),
        }
    }

    pub fn driver_info(&self, driver: &Driver) -> AoResult<DriverInfo> {
        let id = self.resolve(driver)?;
        self.backend
            .driver_info(id)
            .ok_or_else(|| AoError::UnknownDriver(driver.to_string()))
    }

    /// Describes every available driver.
    pub fn driver_info_list(&self) -> Vec<DriverInfo> {
        self.backend.driver_info_list()
    }

    /// Returns the endianness of the current host.
    pub fn is_big_endian(&self) -> bool {
        self.backend.is_big_endian()
    }

    /// Returns the ID number of the default live output driver.
    ///
    /// If the configuration files specify a default driver, its ID is
    /// returned, otherwise the library tries to pick a live output driver
    /// that will work on the host platform. -1 indicates failure to find a
    /// usable audio output device; the null driver remains available for
    /// testing.
    pub fn default_driver_id(&self) -> c_int {
        self.default_driver().map_or(-1, DriverId::as_raw)
    }

    pub fn default_driver(&self) -> Option<DriverId> {
        self.backend.default_driver_id()
    }

    /// Gets the conventional extension of files written by a driver.
    ///
    /// Returns `Ok(None)` for drivers that have no extension, such as live
    /// outputs.
    pub fn file_extension(&self, driver: &Driver) -> AoResult<Option<String>> {
        let id = self.resolve(driver)?;
        Ok(self.backend.file_extension(id))
    }

    /// Opens a device for live playback or file output, as `config` says.
    ///
    /// # Errors
    ///
    ///  * `UnknownDriver`: the selected driver does not exist,
    ///  * `InvalidOption`, `Overflow`, `InteriorNul`: `config` cannot be
    ///    expressed to libao, and
    ///  * `DeviceOpen`: libao refused to open the device. With file output
    ///    this includes `FileExists` if the file exists and `overwrite` is
    ///    not set.
    pub fn open(&self, config: &DeviceConfig) -> AoResult<Device<'_, B>> {
        let driver = match config.driver {
            Driver::Default => self.default_driver().ok_or(OpenFailure::NoDriver)?,
            ref selected => self.resolve(selected)?,
        };
        let format = config.format.to_native()?;
        let options = config.option_list()?;

        let handle = match config.output {
            Output::Live => {
                debug!("opening live device on driver {}", driver);
                self.backend.open(driver, &format, &options, Target::Live)?
            }
            Output::File { ref path, overwrite } => {
                debug!("opening {} on driver {} (overwrite: {})", path.display(), driver, overwrite);
                let path = config::path_to_cstring(path)?;
                self.backend.open(driver, &format, &options, Target::File {
                    path: &path,
                    overwrite,
                })?
            }
        };

        Ok(Device::new(self, driver, config.format.bits, config.format.byte_format, handle))
    }
}
