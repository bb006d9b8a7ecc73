use crate::error::MuxError;
use crate::setting::{Mode, Pull, Setting};
use crate::store::{PinRecord, SettingStore};

#[test]
fn allocate_rejects_zero_pins() {
    assert!(matches!(
        SettingStore::allocate(0),
        Err(MuxError::InvalidArgument)
    ));
}

#[test]
fn allocate_produces_empty_records() {
    let store = SettingStore::allocate(3).unwrap();
    assert_eq!(store.len(), 3);
    for pin in 0..3 {
        let rec = store.record(pin).unwrap();
        assert_eq!(rec.setting(Mode::Active), None);
        assert_eq!(rec.setting(Mode::Suspended), None);
        assert_eq!(rec.ref_count(), 0);
    }
}

#[test]
fn record_access_is_bounds_checked() {
    let mut store = SettingStore::allocate(2).unwrap();
    assert!(matches!(
        store.record(2),
        Err(MuxError::OutOfRange { pin: 2, len: 2 })
    ));
    assert!(matches!(
        store.record_mut(7),
        Err(MuxError::OutOfRange { pin: 7, len: 2 })
    ));
}

#[test]
fn replace_swaps_slot_contents() {
    let mut rec = PinRecord::default();
    let setting = Setting {
        pull: Pull::Up,
        ..Setting::default()
    };

    assert_eq!(rec.replace(Mode::Active, Some(setting)), None);
    assert_eq!(rec.setting(Mode::Active), Some(setting));
    assert_eq!(rec.setting(Mode::Suspended), None);
    assert_eq!(rec.replace(Mode::Active, None), Some(setting));
    assert_eq!(rec.setting(Mode::Active), None);
}

#[test]
fn reference_count_transitions() {
    let mut rec = PinRecord::default();

    assert!(rec.acquire());
    assert!(!rec.acquire());
    assert_eq!(rec.ref_count(), 2);

    assert_eq!(rec.try_release(), Some(false));
    assert_eq!(rec.try_release(), Some(true));
    assert_eq!(rec.try_release(), None);
    assert_eq!(rec.ref_count(), 0);
}

#[test]
fn authoritative_follows_the_count() {
    let mut rec = PinRecord::default();
    let active = Setting {
        pull: Pull::Up,
        ..Setting::default()
    };
    let suspended = Setting {
        pull: Pull::Down,
        ..Setting::default()
    };

    // Nothing installed: nothing to apply in either state.
    assert_eq!(rec.authoritative(), None);
    rec.acquire();
    assert_eq!(rec.authoritative(), None);
    rec.try_release();

    rec.replace(Mode::Active, Some(active));
    rec.replace(Mode::Suspended, Some(suspended));
    assert_eq!(rec.authoritative(), Some(suspended));
    rec.acquire();
    assert_eq!(rec.authoritative(), Some(active));
    rec.try_release();
    assert_eq!(rec.authoritative(), Some(suspended));

    // Held but no active setting installed: leave the hardware alone.
    rec.replace(Mode::Active, None);
    rec.acquire();
    assert_eq!(rec.authoritative(), None);
}
