//! One-shot bootstrap of a board's pin table.

use log::error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{InstallError, InstallFailure};
use crate::mux::MuxTable;
use crate::setting::{Mode, Setting};
use crate::writer::PinWriter;

/// One board entry: a pin plus an optional setting for each mode.
///
/// An absent setting clears that slot, so installing an entry fully defines
/// both slots of the pin.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub pin: usize,
    pub active: Option<Setting>,
    pub suspended: Option<Setting>,
}

impl BoardConfig {
    pub const fn new(pin: usize) -> Self {
        Self {
            pin,
            active: None,
            suspended: None,
        }
    }

    pub const fn with_active(mut self, setting: Setting) -> Self {
        self.active = Some(setting);
        self
    }

    pub const fn with_suspended(mut self, setting: Setting) -> Self {
        self.suspended = Some(setting);
        self
    }

    fn setting(&self, mode: Mode) -> Option<Setting> {
        match mode {
            Mode::Active => self.active,
            Mode::Suspended => self.suspended,
        }
    }
}

impl<W: PinWriter> MuxTable<W> {
    /// Installs a board's pin list, one locked write per (pin, mode).
    ///
    /// Runs once at bring-up across many unrelated pins, so a rejected entry
    /// never aborts the batch: every entry is attempted, each failure is
    /// logged, and the collected failures are reported together at the end.
    pub fn install(&self, configs: &[BoardConfig]) -> Result<(), InstallError> {
        let mut failures = Vec::new();
        for entry in configs {
            // Write errors are per-pin, so both mode writes fail the same
            // way or not at all; one failure is recorded per entry even
            // though both writes are still attempted.
            let mut failed = None;
            for mode in Mode::ALL {
                if let Err(err) = self.write(entry.pin, mode, entry.setting(mode)) {
                    error!("pin {} {mode} setting install failed: {err}", entry.pin);
                    failed.get_or_insert(err);
                }
            }
            if let Some(source) = failed {
                failures.push(InstallFailure {
                    pin: entry.pin,
                    source,
                });
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(InstallError {
                attempted: configs.len(),
                failures,
            })
        }
    }
}
