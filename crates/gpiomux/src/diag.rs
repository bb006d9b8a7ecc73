//! Human-readable report of the whole pin table.

use core::fmt::Write as _;

use log::info;

use crate::error::MuxError;
use crate::mux::MuxTable;
use crate::setting::Mode;
use crate::writer::PinWriter;

impl<W: PinWriter> MuxTable<W> {
    /// Renders the table: one section per mode (suspended first), one line
    /// per pin showing the installed setting or `none`.
    ///
    /// Each pin is read as a locked snapshot, but the lock is not held
    /// across the whole report, so a long table cannot starve pin
    /// operations while it is being dumped.
    pub fn render_report(&self) -> Result<String, MuxError> {
        let npins = self.pin_count()?;
        let mut out = String::new();
        for mode in [Mode::Suspended, Mode::Active] {
            let _ = writeln!(out, "{mode} settings:");
            for pin in 0..npins {
                match self.snapshot(pin)?.setting(mode) {
                    Some(setting) => {
                        let _ = writeln!(out, "[{pin:3}] {setting}");
                    }
                    None => {
                        let _ = writeln!(out, "[{pin:3}] none");
                    }
                }
            }
        }
        Ok(out)
    }

    /// Emits the report line by line through the `log` facade, the way
    /// bring-up consoles expect it.
    pub fn dump(&self) -> Result<(), MuxError> {
        for line in self.render_report()?.lines() {
            info!("{line}");
        }
        Ok(())
    }
}
