//! Backing storage for the per-pin setting slots.

use crate::error::MuxError;
use crate::setting::{Mode, Setting};

/// One pin's bookkeeping: an optional setting per mode, plus the number of
/// clients currently holding the pin active.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct PinRecord {
    sets: [Option<Setting>; Mode::COUNT],
    ref_count: u32,
}

impl PinRecord {
    pub(crate) fn setting(&self, mode: Mode) -> Option<Setting> {
        self.sets[mode.index()]
    }

    /// Installs (or clears) the slot for `mode`, returning what it held.
    pub(crate) fn replace(&mut self, mode: Mode, setting: Option<Setting>) -> Option<Setting> {
        core::mem::replace(&mut self.sets[mode.index()], setting)
    }

    /// The setting that should currently be on the hardware, if any: the
    /// active slot while any client holds the pin, the suspended slot
    /// otherwise. An empty slot means the hardware keeps whatever it last
    /// held.
    pub(crate) fn authoritative(&self) -> Option<Setting> {
        if self.ref_count > 0 {
            self.setting(Mode::Active)
        } else {
            self.setting(Mode::Suspended)
        }
    }

    pub(crate) fn ref_count(&self) -> u32 {
        self.ref_count
    }

    /// Counts one more active client. Returns true on the 0 -> 1 transition.
    pub(crate) fn acquire(&mut self) -> bool {
        self.ref_count += 1;
        self.ref_count == 1
    }

    /// Counts one client out. Returns `Some(true)` on the 1 -> 0 transition,
    /// `None` if the count was already zero (caller imbalance).
    pub(crate) fn try_release(&mut self) -> Option<bool> {
        if self.ref_count == 0 {
            return None;
        }
        self.ref_count -= 1;
        Some(self.ref_count == 0)
    }
}

/// The fixed-size table of pin records, allocated once at bring-up.
#[derive(Debug)]
pub(crate) struct SettingStore {
    records: Vec<PinRecord>,
}

impl SettingStore {
    /// Allocates storage for `npins` empty records. Allocation failure is
    /// reported and leaves nothing behind.
    pub(crate) fn allocate(npins: usize) -> Result<Self, MuxError> {
        if npins == 0 {
            return Err(MuxError::InvalidArgument);
        }
        let mut records = Vec::new();
        records
            .try_reserve_exact(npins)
            .map_err(|_| MuxError::OutOfMemory)?;
        records.resize_with(npins, PinRecord::default);
        Ok(Self { records })
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn record(&self, pin: usize) -> Result<&PinRecord, MuxError> {
        let len = self.records.len();
        self.records
            .get(pin)
            .ok_or(MuxError::OutOfRange { pin, len })
    }

    pub(crate) fn record_mut(&mut self, pin: usize) -> Result<&mut PinRecord, MuxError> {
        let len = self.records.len();
        self.records
            .get_mut(pin)
            .ok_or(MuxError::OutOfRange { pin, len })
    }
}
