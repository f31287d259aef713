//! Warning reporting for migrated options.
//!
//! Migration never fails the configuration: every diagnostic is a non-fatal
//! warning pushed into an injected reporter. Hosts that just want console
//! output use [`LogReporter`]; tests inject closures.

use crate::table::MigrationEvent;

/// Product name used in deprecation warnings.
const PRODUCT: &str = "Plotline";

/// Sink for migration diagnostics.
pub trait WarningReporter {
    /// Report one diagnostic message. `fatal` is always false for
    /// deprecation warnings.
    fn warn(&mut self, message: &str, fatal: bool);
}

impl<F: FnMut(&str, bool)> WarningReporter for F {
    fn warn(&mut self, message: &str, fatal: bool) {
        self(message, fatal)
    }
}

/// Reporter that routes diagnostics through the `log` facade.
#[derive(Debug, Default)]
pub struct LogReporter;

impl WarningReporter for LogReporter {
    fn warn(&mut self, message: &str, fatal: bool) {
        if fatal {
            log::error!("{message}");
        } else {
            log::warn!("{message}");
        }
    }
}

/// Fixed warning text for one migrated option.
pub fn deprecation_message(event: &MigrationEvent) -> String {
    format!(
        "{PRODUCT}: Deprecated option {old} used. This will be removed from \
         future versions of {PRODUCT}. Use {new} instead.",
        old = event.old_option,
        new = event.new_option,
    )
}
