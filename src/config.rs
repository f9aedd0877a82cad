use std::ffi::CString;
use std::path::{Path, PathBuf};

use crate::driver::Driver;
use crate::error::{AoError, AoResult};
use crate::format::{Endianness, SampleFormat};
use crate::options::OptionList;

/// Live playback, or a file for a file-output driver to write.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Live,
    /// `overwrite` replaces an existing file; otherwise opening fails with
    /// `OpenFailure::FileExists`.
    File { path: PathBuf, overwrite: bool },
}

/// Everything needed to open a device.
///
/// ```
/// use aodevice::{DeviceConfig, Endianness};
///
/// let config = DeviceConfig::new("wav")
///     .bits(8)
///     .channels(1)
///     .byte_format(Endianness::Little)
///     .option("verbose", "1")
///     .file("out.wav", false);
/// assert_eq!(config.format.rate, 44100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceConfig {
    pub driver: Driver,
    pub format: SampleFormat,
    /// Driver options, in the order they are handed to libao.
    pub options: Vec<(String, String)>,
    pub output: Output,
}

impl DeviceConfig {
    pub fn new<D: Into<Driver>>(driver: D) -> DeviceConfig {
        DeviceConfig {
            driver: driver.into(),
            ..DeviceConfig::default()
        }
    }

    pub fn format(mut self, format: SampleFormat) -> DeviceConfig {
        self.format = format;
        self
    }

    pub fn bits(mut self, bits: u32) -> DeviceConfig {
        self.format.bits = bits;
        self
    }

    pub fn rate(mut self, rate: u32) -> DeviceConfig {
        self.format.rate = rate;
        self
    }

    pub fn channels(mut self, channels: u32) -> DeviceConfig {
        self.format.channels = channels;
        self
    }

    pub fn byte_format(mut self, order: Endianness) -> DeviceConfig {
        self.format.byte_format = order;
        self
    }

    pub fn matrix<S: Into<String>>(mut self, matrix: S) -> DeviceConfig {
        self.format.matrix = Some(matrix.into());
        self
    }

    pub fn option<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> DeviceConfig {
        self.options.push((key.into(), value.into()));
        self
    }

    pub fn options<I, K, V>(mut self, options: I) -> DeviceConfig
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.options.extend(options.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Switches to file output.
    pub fn file<P: Into<PathBuf>>(mut self, path: P, overwrite: bool) -> DeviceConfig {
        self.output = Output::File { path: path.into(), overwrite };
        self
    }

    pub fn option_list(&self) -> AoResult<OptionList> {
        OptionList::from_pairs(self.options.iter().map(|(k, v)| (k, v)))
    }
}

#[cfg(unix)]
pub(crate) fn path_to_cstring(path: &Path) -> AoResult<CString> {
    use std::os::unix::ffi::OsStrExt;
    CString::new(path.as_os_str().as_bytes()).map_err(|_| AoError::InteriorNul { field: "filename" })
}

#[cfg(not(unix))]
pub(crate) fn path_to_cstring(path: &Path) -> AoResult<CString> {
    let path = path.to_str().ok_or(AoError::InteriorNul { field: "filename" })?;
    CString::new(path).map_err(|_| AoError::InteriorNul { field: "filename" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_live_default_driver() {
        let config = DeviceConfig::default();
        assert_eq!(config.driver, Driver::Default);
        assert_eq!(config.format, SampleFormat::default());
        assert_eq!(config.output, Output::Live);
        assert!(config.option_list().unwrap().is_empty());
    }

    #[test]
    fn builder() {
        let config = DeviceConfig::new(3)
            .rate(22050)
            .matrix("M")
            .options([("a", "1"), ("b", "2")])
            .file("x.raw", true);
        assert_eq!(config.driver, Driver::Id(3));
        assert_eq!(config.format.rate, 22050);
        assert_eq!(config.format.matrix.as_deref(), Some("M"));
        assert_eq!(config.option_list().unwrap().len(), 2);
        assert_eq!(config.output, Output::File { path: "x.raw".into(), overwrite: true });
    }

    #[test]
    fn nul_in_path() {
        let err = path_to_cstring(Path::new("a\0b")).unwrap_err();
        assert_eq!(err, AoError::InteriorNul { field: "filename" });
    }
}
