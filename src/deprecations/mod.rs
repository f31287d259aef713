//! Migration of deprecated chart options to their current locations.
//!
//! Runs once, early in the lifecycle of a configuration object, before any
//! option is consumed. Deprecated values are copied (never deleted) to their
//! new locations, and one warning is reported per migrated option.

pub mod tables;


use crate::MigrateError;
use crate::report::{WarningReporter, deprecation_message};
use crate::table::{MigrationEvent, migrate, migrate_scoped};
use log::debug;
use serde_json::Value;

/// Option keys holding axis collections. Each may be a single options
/// object or an array of them.
const AXIS_COLLECTIONS: &[&str] = &["xAxis", "yAxis", "zAxis", "colorAxis"];

/// Copy every deprecated option found in `options` to its new location,
/// emitting one [`MigrationEvent`] per copy.
pub fn copy_deprecated_options(
    options: &mut Value,
    sink: &mut dyn FnMut(MigrationEvent),
) -> Result<(), MigrateError> {
    debug!("copying deprecated options to their current locations");
    migrate(options, &tables::chart_table(), sink)?;
    copy_deprecated_axis_options(options, sink)?;
    copy_deprecated_series_options(options, sink)?;
    migrate(options, &tables::accessibility_table(), sink)?;
    migrate(options, &tables::keyboard_navigation_table(), sink)?;
    migrate(options, &tables::lang_table(), sink)?;
    Ok(())
}

/// Copy deprecated options and push one formatted, non-fatal warning per
/// migrated option into `reporter`.
pub fn report_deprecated_options(
    options: &mut Value,
    reporter: &mut dyn WarningReporter,
) -> Result<(), MigrateError> {
    copy_deprecated_options(options, &mut |event| {
        reporter.warn(&deprecation_message(&event), false);
    })
}

/// Migrate deprecated axis options in every axis collection.
pub fn copy_deprecated_axis_options(
    options: &mut Value,
    sink: &mut dyn FnMut(MigrationEvent),
) -> Result<(), MigrateError> {
    let entries = tables::axis_entries();
    for collection in AXIS_COLLECTIONS {
        match options.get_mut(*collection) {
            Some(Value::Array(axes)) => {
                for axis in axes {
                    migrate_scoped(axis, "axis", &entries, sink)?;
                }
            }
            Some(axis) if axis.is_object() => {
                migrate_scoped(axis, "axis", &entries, sink)?;
            }
            _ => {}
        }
    }
    Ok(())
}

/// Migrate deprecated series options in the `series` array, including the
/// per-point options objects in each series' `data` array.
pub fn copy_deprecated_series_options(
    options: &mut Value,
    sink: &mut dyn FnMut(MigrationEvent),
) -> Result<(), MigrateError> {
    let series_entries = tables::series_entries();
    let point_entries = tables::point_entries();
    let Some(Value::Array(series_list)) = options.get_mut("series") else {
        return Ok(());
    };
    for series in series_list {
        migrate_scoped(series, "series", &series_entries, sink)?;
        // Points given as bare numbers or tuples carry no options.
        if let Some(Value::Array(points)) = series.get_mut("data") {
            for point in points {
                if point.is_object() {
                    migrate_scoped(point, "point", &point_entries, sink)?;
                }
            }
        }
    }
    Ok(())
}
