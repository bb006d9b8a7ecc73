//! Reference-counted arbitration over the pin table.
//!
//! [`MuxTable`] decides, on every state-affecting call, which installed
//! setting should be on the hardware and applies it itself while still
//! holding the table lock. To any observer a setting is installed, and some
//! time later the physical pin transitions exactly when the active-client
//! count crosses zero.

use crate::error::MuxError;
use crate::setting::{Mode, Setting};
use crate::store::SettingStore;
use crate::sync::Mutex;
use crate::writer::PinWriter;

/// Consistent view of one pin record, taken under the table lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinSnapshot {
    pub active: Option<Setting>,
    pub suspended: Option<Setting>,
    pub ref_count: u32,
}

impl PinSnapshot {
    pub fn setting(&self, mode: Mode) -> Option<Setting> {
        match mode {
            Mode::Active => self.active,
            Mode::Suspended => self.suspended,
        }
    }
}

/// The pin-state table and its arbitration logic.
///
/// One instance manages the whole pin space of a mux controller. The table
/// starts unallocated; [`initialize`](Self::initialize) sizes it exactly
/// once, after which it lives for the life of the value. `new` is `const`,
/// so an embedder that wants the usual bring-up shape can keep the table in
/// a `static` and initialize it from board code.
///
/// Every operation takes the table lock exactly once and performs any
/// resulting hardware write before releasing it, so record mutations and
/// their writes are indivisible with respect to all other operations.
pub struct MuxTable<W: PinWriter> {
    state: Mutex<Option<SettingStore>>,
    writer: W,
}

impl<W: PinWriter> MuxTable<W> {
    /// Creates an unallocated table that programs pins through `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            state: Mutex::new(None),
            writer,
        }
    }

    /// Allocates storage for `npins` pins, all slots empty, all counts zero.
    ///
    /// Fails with [`MuxError::InvalidArgument`] for a zero-sized table, with
    /// [`MuxError::AlreadyInitialized`] on a second call, and with
    /// [`MuxError::OutOfMemory`] if the allocation cannot be satisfied (in
    /// which case the table stays unallocated).
    pub fn initialize(&self, npins: usize) -> Result<(), MuxError> {
        let mut state = self.state.lock();
        if state.is_some() {
            return Err(MuxError::AlreadyInitialized);
        }
        *state = Some(SettingStore::allocate(npins)?);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.lock().is_some()
    }

    /// Number of pins the table was sized for.
    pub fn pin_count(&self) -> Result<usize, MuxError> {
        let state = self.state.lock();
        let store = state.as_ref().ok_or(MuxError::NotInitialized)?;
        Ok(store.len())
    }

    /// Installs `setting` into the pin's slot for `mode` (`None` clears the
    /// slot) and returns what the slot held before, `None` if it was empty.
    ///
    /// After the slot update the presently authoritative setting, when one
    /// exists, is re-applied to the hardware with exactly one write, even
    /// when the written mode is not the authoritative one. Re-asserting an
    /// unchanged configuration is deliberate; boards use it to reprogram a
    /// pin whose register contents may have been disturbed.
    pub fn write(
        &self,
        pin: usize,
        mode: Mode,
        setting: Option<Setting>,
    ) -> Result<Option<Setting>, MuxError> {
        let mut state = self.state.lock();
        let store = state.as_mut().ok_or(MuxError::NotInitialized)?;
        let rec = store.record_mut(pin)?;
        let old = rec.replace(mode, setting);
        if let Some(applied) = rec.authoritative() {
            self.writer.apply(pin, applied);
        }
        Ok(old)
    }

    /// Counts one more active client on the pin.
    ///
    /// On the 0 -> 1 transition the active setting, if installed, is applied
    /// with exactly one hardware write. Nested activations never touch the
    /// hardware; the pin is already configured.
    pub fn activate(&self, pin: usize) -> Result<(), MuxError> {
        let mut state = self.state.lock();
        let store = state.as_mut().ok_or(MuxError::NotInitialized)?;
        let rec = store.record_mut(pin)?;
        if rec.acquire() {
            if let Some(setting) = rec.setting(Mode::Active) {
                self.writer.apply(pin, setting);
            }
        }
        Ok(())
    }

    /// Counts one active client out of the pin.
    ///
    /// On the 1 -> 0 transition the suspended setting, if installed, is
    /// applied with exactly one hardware write.
    ///
    /// # Panics
    ///
    /// Panics if the pin's count is already zero. That state means some
    /// client released a pin it never acquired, and the accounting for who
    /// owns the hardware can no longer be trusted.
    pub fn deactivate(&self, pin: usize) -> Result<(), MuxError> {
        let mut state = self.state.lock();
        let store = state.as_mut().ok_or(MuxError::NotInitialized)?;
        let rec = store.record_mut(pin)?;
        let Some(idle) = rec.try_release() else {
            panic!("deactivate on pin {pin} without a matching activate");
        };
        if idle {
            if let Some(setting) = rec.setting(Mode::Suspended) {
                self.writer.apply(pin, setting);
            }
        }
        Ok(())
    }

    /// Reads one pin record in a single lock hold, so the two slots and the
    /// count are mutually consistent.
    pub fn snapshot(&self, pin: usize) -> Result<PinSnapshot, MuxError> {
        let state = self.state.lock();
        let store = state.as_ref().ok_or(MuxError::NotInitialized)?;
        let rec = store.record(pin)?;
        Ok(PinSnapshot {
            active: rec.setting(Mode::Active),
            suspended: rec.setting(Mode::Suspended),
            ref_count: rec.ref_count(),
        })
    }
}
