//! Runs against the system libao, using drivers that need no sound hardware.

use aodevice::{Ao, AoError, DeviceConfig, Driver, DriverKind, OpenFailure};

#[test]
fn null_device_plays_and_closes() {
    let ao = Ao::init();
    let mut device = ao.open(&DeviceConfig::new("null")).unwrap();
    device.play(&[0u8; 4096]).unwrap();
    device.play_samples(&[0i16; 512]).unwrap();
    device.close().unwrap();
    device.close().unwrap();
    assert_eq!(device.play(&[0u8; 4]), Err(AoError::InvalidState));
}

#[test]
fn device_moves_to_another_thread() {
    let ao = Ao::init();
    let mut device = ao.open(&DeviceConfig::new("null")).unwrap();
    std::thread::scope(|s| {
        s.spawn(move || {
            device.play(&[0u8; 1024]).unwrap();
            device.close().unwrap();
        });
    });
}

#[test]
fn driver_queries_agree() {
    let ao = Ao::init();
    let id = ao.driver_id("raw").unwrap();
    let info = ao.driver_info(&Driver::from(id)).unwrap();
    assert_eq!(info.short_name, "raw");
    assert_eq!(info.kind, Some(DriverKind::File));
    assert!(ao.driver_info_list().iter().any(|d| d.short_name == "raw"));

    assert_eq!(
        ao.driver_id("nonexistent-driver-name"),
        Err(AoError::UnknownDriver("nonexistent-driver-name".into()))
    );
    assert_eq!(ao.file_extension(&"null".into()), Ok(None));
    assert_eq!(ao.file_extension(&"raw".into()), Ok(Some("raw".to_owned())));
    assert!(matches!(ao.file_extension(&"bogus".into()), Err(AoError::UnknownDriver(_))));
    assert_eq!(ao.is_big_endian(), cfg!(target_endian = "big"));
}

#[test]
fn file_output_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.raw");
    std::fs::write(&path, b"existing").unwrap();
    let ao = Ao::init();

    let config = DeviceConfig::new("raw").file(&path, false);
    assert!(matches!(ao.open(&config), Err(AoError::DeviceOpen(OpenFailure::FileExists))));

    let config = DeviceConfig::new("raw").file(&path, true);
    let mut device = ao.open(&config).unwrap();
    device.play(&[1, 2, 3, 4]).unwrap();
    device.close().unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), [1, 2, 3, 4]);
}
