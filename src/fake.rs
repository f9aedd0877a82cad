//! An in-memory stand-in for libao, for tests.

use std::cell::RefCell;
use std::ffi::CStr;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::backend::{Backend, Target};
use crate::driver::{DriverId, DriverInfo, DriverKind};
use crate::error::{AoError, AoResult, OpenFailure};
use crate::ffi;
use crate::format::NativeFormat;
use crate::options::OptionList;

struct FakeDriver {
    kind: DriverKind,
    short_name: &'static str,
    extension: Option<&'static str>,
    options: &'static [&'static str],
}

const DRIVERS: &[FakeDriver] = &[
    FakeDriver { kind: DriverKind::Live, short_name: "null", extension: None, options: &[] },
    FakeDriver { kind: DriverKind::File, short_name: "wav", extension: Some("wav"), options: &[] },
    FakeDriver { kind: DriverKind::File, short_name: "raw", extension: Some("raw"), options: &["byteorder"] },
    FakeDriver { kind: DriverKind::Live, short_name: "pulse", extension: None, options: &["server", "sink"] },
];

/// What the fake saw for one opened device.
#[derive(Debug, Clone, Default)]
pub struct Opened {
    pub driver: Option<DriverId>,
    pub format: Option<NativeFormat>,
    pub options: Vec<(String, String)>,
    pub written: Vec<u8>,
    pub writes: usize,
    pub closed: bool,
}

pub struct FakeAo {
    default: Option<DriverId>,
    devices: RefCell<Vec<Opened>>,
}

pub struct FakeHandle(usize);

impl FakeAo {
    pub fn new() -> FakeAo {
        FakeAo {
            default: DriverId::from_raw(3),
            devices: RefCell::new(Vec::new()),
        }
    }

    pub fn without_default() -> FakeAo {
        FakeAo {
            default: None,
            ..FakeAo::new()
        }
    }

    pub fn devices(&self) -> Vec<Opened> {
        self.devices.borrow().clone()
    }

    fn lookup(&self, id: DriverId) -> Option<&'static FakeDriver> {
        DRIVERS.get(id.as_raw() as usize)
    }
}

fn info(driver: &FakeDriver) -> DriverInfo {
    DriverInfo {
        kind: Some(driver.kind),
        name: format!("{} output", driver.short_name),
        short_name: driver.short_name.to_owned(),
        author: "Nobody <nobody@example.org>".to_owned(),
        comment: String::new(),
        preferred_byte_format: ffi::AO_FMT_NATIVE,
        priority: 0,
        options: driver.options.iter().map(|s| s.to_string()).collect(),
    }
}

impl Backend for FakeAo {
    type Handle = FakeHandle;

    fn driver_id(&self, short_name: &CStr) -> Option<DriverId> {
        DRIVERS
            .iter()
            .position(|d| d.short_name.as_bytes() == short_name.to_bytes())
            .and_then(|i| DriverId::from_raw(i as i32))
    }

    fn default_driver_id(&self) -> Option<DriverId> {
        self.default
    }

    fn driver_info(&self, id: DriverId) -> Option<DriverInfo> {
        self.lookup(id).map(info)
    }

    fn driver_info_list(&self) -> Vec<DriverInfo> {
        DRIVERS.iter().map(info).collect()
    }

    fn file_extension(&self, id: DriverId) -> Option<String> {
        self.lookup(id).and_then(|d| d.extension).map(str::to_owned)
    }

    fn is_big_endian(&self) -> bool {
        cfg!(target_endian = "big")
    }

    fn open(&self, id: DriverId, format: &NativeFormat, options: &OptionList,
            target: Target) -> AoResult<FakeHandle> {
        let driver = self.lookup(id).ok_or(OpenFailure::NoDriver)?;
        if ![8, 16, 24, 32].contains(&format.bits) || format.channels < 1 || format.rate < 1 {
            return Err(OpenFailure::BadFormat.into());
        }

        match (target, driver.kind) {
            (Target::Live, DriverKind::File) => return Err(OpenFailure::NotLive.into()),
            (Target::File { .. }, DriverKind::Live) => return Err(OpenFailure::NotFile.into()),
            (Target::File { path, overwrite }, DriverKind::File) => {
                let path = Path::new(path.to_str().map_err(|_| OpenFailure::OpenFile)?);
                let mut open = OpenOptions::new();
                open.write(true);
                if overwrite {
                    open.create(true).truncate(true);
                } else {
                    open.create_new(true);
                }
                let mut file = open.open(path).map_err(|e| match e.kind() {
                    std::io::ErrorKind::AlreadyExists => OpenFailure::FileExists,
                    _ => OpenFailure::OpenFile,
                })?;
                file.write_all(b"FAKE").map_err(|_| OpenFailure::OpenFile)?;
            }
            (Target::Live, DriverKind::Live) => {}
        }

        let mut devices = self.devices.borrow_mut();
        devices.push(Opened {
            driver: Some(id),
            format: Some(format.clone()),
            options: options
                .iter()
                .map(|(k, v)| (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned()))
                .collect(),
            ..Opened::default()
        });
        Ok(FakeHandle(devices.len() - 1))
    }

    fn play(&self, handle: &mut FakeHandle, samples: &mut [u8]) -> AoResult<()> {
        let mut devices = self.devices.borrow_mut();
        let device = &mut devices[handle.0];
        assert!(!device.closed, "write to a closed fake device");
        device.written.extend_from_slice(samples);
        device.writes += 1;
        Ok(())
    }

    fn close(&self, handle: FakeHandle) -> AoResult<()> {
        let mut devices = self.devices.borrow_mut();
        let device = &mut devices[handle.0];
        if device.closed {
            return Err(AoError::Close);
        }
        device.closed = true;
        Ok(())
    }
}
