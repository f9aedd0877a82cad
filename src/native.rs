//! The system libao.

use libc::{c_char, c_int};
use log::debug;
use once_cell::sync::OnceCell;
use std::cell::Cell;
use std::ffi::CStr;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};
use std::slice;

use crate::backend::{Backend, Target};
use crate::driver::{self, DriverId, DriverInfo};
use crate::error::{AoError, AoResult, OpenFailure};
use crate::ffi;
use crate::format::NativeFormat;
use crate::options::OptionList;

static INIT: OnceCell<()> = OnceCell::new();

/// Token proving libao has been initialized in this process.
///
/// libao offers no safe shutdown while devices may still be open, so once
/// initialized it stays initialized until the process exits.
#[derive(Debug, Clone, Copy)]
pub struct Libao {
    _private: (),
}

impl Libao {
    /// Initializes libao internals, including loading plugins and reading
    /// configuration files. Only the first call does any work.
    pub fn initialize() -> Libao {
        INIT.get_or_init(|| {
            unsafe {
                ffi::ao_initialize();
            }
            debug!("libao initialized");
        });
        Libao { _private: () }
    }
}

/// An open libao device.
#[derive(Debug)]
pub struct LibaoHandle {
    raw: NonNull<ffi::ao_device>,
    // One caller at a time; libao does no locking of its own.
    _not_sync: PhantomData<Cell<()>>,
}

// The device may move between threads, it just can't be shared.
unsafe impl Send for LibaoHandle {}

/// A native `ao_option` chain, freed on drop.
struct NativeOptions(*mut ffi::ao_option);

impl NativeOptions {
    fn new(options: &OptionList) -> AoResult<NativeOptions> {
        let mut native = NativeOptions(ptr::null_mut());
        for (key, value) in options.iter() {
            let ok = unsafe {
                ffi::ao_append_option(&mut native.0, key.as_ptr(), value.as_ptr())
            };
            if ok == 0 {
                // Whatever was appended so far goes with `native`.
                return Err(AoError::OutOfMemory);
            }
        }
        Ok(native)
    }
}

impl Drop for NativeOptions {
    fn drop(&mut self) {
        if !self.0.is_null() {
            unsafe {
                ffi::ao_free_options(self.0);
            }
        }
    }
}

impl Backend for Libao {
    type Handle = LibaoHandle;

    fn driver_id(&self, short_name: &CStr) -> Option<DriverId> {
        DriverId::from_raw(unsafe { ffi::ao_driver_id(short_name.as_ptr()) })
    }

    fn default_driver_id(&self) -> Option<DriverId> {
        DriverId::from_raw(unsafe { ffi::ao_default_driver_id() })
    }

    fn driver_info(&self, id: DriverId) -> Option<DriverInfo> {
        unsafe {
            ffi::ao_driver_info(id.as_raw())
                .as_ref()
                .map(|info| DriverInfo::from_raw(info))
        }
    }

    fn driver_info_list(&self) -> Vec<DriverInfo> {
        let mut count: c_int = 0;
        unsafe {
            let list = ffi::ao_driver_info_list(&mut count);
            if list.is_null() || count <= 0 {
                return Vec::new();
            }
            slice::from_raw_parts(list, count as usize)
                .iter()
                .filter_map(|info| info.as_ref())
                .map(|info| DriverInfo::from_raw(info))
                .collect()
        }
    }

    fn file_extension(&self, id: DriverId) -> Option<String> {
        unsafe {
            let ext = ffi::ao_file_extension(id.as_raw());
            if ext.is_null() {
                None
            } else {
                Some(driver::owned_string(ext))
            }
        }
    }

    fn is_big_endian(&self) -> bool {
        unsafe { ffi::ao_is_big_endian() != 0 }
    }

    fn open(&self, id: DriverId, format: &NativeFormat, options: &OptionList,
            target: Target) -> AoResult<LibaoHandle> {
        let native_options = if options.is_empty() {
            NativeOptions(ptr::null_mut())
        } else {
            NativeOptions::new(options)?
        };

        let raw = format.with_raw(|f| unsafe {
            match target {
                Target::Live => ffi::ao_open_live(id.as_raw(), f, native_options.0),
                Target::File { path, overwrite } => ffi::ao_open_file(
                    id.as_raw(),
                    path.as_ptr(),
                    overwrite as c_int,
                    f,
                    native_options.0,
                ),
            }
        });

        match NonNull::new(raw) {
            None => Err(OpenFailure::from_errno().into()),
            Some(raw) => Ok(LibaoHandle { raw, _not_sync: PhantomData }),
        }
    }

    fn play(&self, handle: &mut LibaoHandle, samples: &mut [u8]) -> AoResult<()> {
        let len = u32::try_from(samples.len()).map_err(|_| AoError::Overflow {
            field: "byte count",
            value: samples.len() as u64,
        })?;
        let ok = unsafe {
            ffi::ao_play(handle.raw.as_ptr(), samples.as_mut_ptr() as *mut c_char, len)
        };
        if ok == 0 {
            Err(AoError::Write)
        } else {
            Ok(())
        }
    }

    fn close(&self, handle: LibaoHandle) -> AoResult<()> {
        if unsafe { ffi::ao_close(handle.raw.as_ptr()) } == 0 {
            Err(AoError::Close)
        } else {
            Ok(())
        }
    }
}
