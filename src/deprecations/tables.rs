//! Rename tables for every deprecated option family.
//!
//! These are data, not logic: adding a rename means adding an entry here.
//! The full list of deprecated options:
//!
//!   chart.description -> accessibility.description
//!   chart.typeDescription -> accessibility.typeDescription
//!   series.description -> series.accessibility.description
//!   series.exposeElementToA11y -> series.accessibility.exposeAsGroupOnly
//!   series.pointDescriptionFormatter ->
//!       series.accessibility.pointDescriptionFormatter
//!   series.skipKeyboardNavigation ->
//!       series.accessibility.keyboardNavigation.enabled (inverted)
//!   point.description -> point.accessibility.description
//!   axis.description -> axis.accessibility.description
//!
//!   accessibility.pointDateFormat -> accessibility.point.dateFormat
//!   accessibility.pointDateFormatter -> accessibility.point.dateFormatter
//!   accessibility.pointDescriptionFormatter ->
//!       accessibility.point.descriptionFormatter
//!   accessibility.pointDescriptionThreshold ->
//!       accessibility.series.pointDescriptionEnabledThreshold
//!   accessibility.pointNavigationThreshold ->
//!       accessibility.keyboardNavigation.seriesNavigation.pointNavigationEnabledThreshold
//!   accessibility.pointValueDecimals -> accessibility.point.valueDecimals
//!   accessibility.pointValuePrefix -> accessibility.point.valuePrefix
//!   accessibility.pointValueSuffix -> accessibility.point.valueSuffix
//!   accessibility.screenReaderSectionFormatter ->
//!       accessibility.screenReaderSection.beforeChartFormatter
//!   accessibility.describeSingleSeries -> accessibility.series.describeSingleSeries
//!   accessibility.seriesDescriptionFormatter ->
//!       accessibility.series.descriptionFormatter
//!   accessibility.onTableAnchorClick ->
//!       accessibility.screenReaderSection.onViewDataTableClick
//!   accessibility.axisRangeDateFormat ->
//!       accessibility.screenReaderSection.axisRangeDateFormat
//!   accessibility.keyboardNavigation.skipNullPoints ->
//!       accessibility.keyboardNavigation.seriesNavigation.skipNullPoints
//!   accessibility.keyboardNavigation.mode ->
//!       accessibility.keyboardNavigation.seriesNavigation.mode
//!
//!   lang.accessibility.legendItem -> lang.accessibility.legend.legendItem
//!   lang.accessibility.legendLabel -> lang.accessibility.legend.legendLabel
//!   lang.accessibility.mapZoomIn -> lang.accessibility.zoom.mapZoomIn
//!   lang.accessibility.mapZoomOut -> lang.accessibility.zoom.mapZoomOut
//!   lang.accessibility.resetZoomButton -> lang.accessibility.zoom.resetZoomButton
//!   lang.accessibility.screenReaderRegionLabel ->
//!       lang.accessibility.screenReaderSection.beforeRegionLabel
//!   lang.accessibility.rangeSelectorButton -> lang.accessibility.rangeSelector.buttonText
//!   lang.accessibility.rangeSelectorMaxInput -> lang.accessibility.rangeSelector.maxInputLabel
//!   lang.accessibility.rangeSelectorMinInput -> lang.accessibility.rangeSelector.minInputLabel
//!   lang.accessibility.svgContainerEnd ->
//!       lang.accessibility.screenReaderSection.endOfChartMarker
//!   lang.accessibility.viewAsDataTable -> lang.accessibility.table.viewAsDataTableButtonText
//!   lang.accessibility.tableSummary -> lang.accessibility.table.tableSummary
//!
//! `lang.accessibility.chartHeading` is no longer used and has no new home.

use crate::path::OptionPath;
use crate::table::{MappingTable, RenameEntry, invert_bool};

/// Chart-level options that moved under the accessibility root.
pub fn chart_table() -> MappingTable {
    MappingTable {
        old_root: OptionPath::new(["chart"]),
        new_root: OptionPath::new(["accessibility"]),
        entries: vec![
            RenameEntry::new("description", ["description"]),
            RenameEntry::new("typeDescription", ["typeDescription"]),
        ],
    }
}

/// Series-level renames, applied per series entry.
///
/// `skipKeyboardNavigation` is the one inverted option: the new option is
/// `enabled` rather than a skip flag.
pub fn series_entries() -> Vec<RenameEntry> {
    vec![
        RenameEntry::new("description", ["accessibility", "description"]),
        RenameEntry::new("exposeElementToA11y", ["accessibility", "exposeAsGroupOnly"]),
        RenameEntry::new(
            "pointDescriptionFormatter",
            ["accessibility", "pointDescriptionFormatter"],
        ),
        RenameEntry::new(
            "skipKeyboardNavigation",
            ["accessibility", "keyboardNavigation", "enabled"],
        )
        .with_transform(invert_bool),
    ]
}

/// Point-level renames, applied per point options object.
pub fn point_entries() -> Vec<RenameEntry> {
    vec![RenameEntry::new("description", ["accessibility", "description"])]
}

/// Axis-level renames, applied per axis options object.
pub fn axis_entries() -> Vec<RenameEntry> {
    vec![RenameEntry::new("description", ["accessibility", "description"])]
}

/// Top-level accessibility options that moved into sub-groups.
pub fn accessibility_table() -> MappingTable {
    MappingTable {
        old_root: OptionPath::new(["accessibility"]),
        new_root: OptionPath::new(["accessibility"]),
        entries: vec![
            RenameEntry::new("pointDateFormat", ["point", "dateFormat"]),
            RenameEntry::new("pointDateFormatter", ["point", "dateFormatter"]),
            RenameEntry::new("pointDescriptionFormatter", ["point", "descriptionFormatter"]),
            RenameEntry::new(
                "pointDescriptionThreshold",
                ["series", "pointDescriptionEnabledThreshold"],
            ),
            RenameEntry::new(
                "pointNavigationThreshold",
                [
                    "keyboardNavigation",
                    "seriesNavigation",
                    "pointNavigationEnabledThreshold",
                ],
            ),
            RenameEntry::new("pointValueDecimals", ["point", "valueDecimals"]),
            RenameEntry::new("pointValuePrefix", ["point", "valuePrefix"]),
            RenameEntry::new("pointValueSuffix", ["point", "valueSuffix"]),
            RenameEntry::new(
                "screenReaderSectionFormatter",
                ["screenReaderSection", "beforeChartFormatter"],
            ),
            RenameEntry::new("describeSingleSeries", ["series", "describeSingleSeries"]),
            RenameEntry::new(
                "seriesDescriptionFormatter",
                ["series", "descriptionFormatter"],
            ),
            RenameEntry::new(
                "onTableAnchorClick",
                ["screenReaderSection", "onViewDataTableClick"],
            ),
            RenameEntry::new(
                "axisRangeDateFormat",
                ["screenReaderSection", "axisRangeDateFormat"],
            ),
        ],
    }
}

/// Keyboard-navigation options that moved under seriesNavigation.
pub fn keyboard_navigation_table() -> MappingTable {
    MappingTable {
        old_root: OptionPath::new(["accessibility", "keyboardNavigation"]),
        new_root: OptionPath::new(["accessibility", "keyboardNavigation", "seriesNavigation"]),
        entries: vec![
            RenameEntry::new("skipNullPoints", ["skipNullPoints"]),
            RenameEntry::new("mode", ["mode"]),
        ],
    }
}

/// Localized accessibility strings that moved into sub-groups.
pub fn lang_table() -> MappingTable {
    MappingTable {
        old_root: OptionPath::new(["lang", "accessibility"]),
        new_root: OptionPath::new(["lang", "accessibility"]),
        entries: vec![
            RenameEntry::new("legendItem", ["legend", "legendItem"]),
            RenameEntry::new("legendLabel", ["legend", "legendLabel"]),
            RenameEntry::new("mapZoomIn", ["zoom", "mapZoomIn"]),
            RenameEntry::new("mapZoomOut", ["zoom", "mapZoomOut"]),
            RenameEntry::new("resetZoomButton", ["zoom", "resetZoomButton"]),
            RenameEntry::new(
                "screenReaderRegionLabel",
                ["screenReaderSection", "beforeRegionLabel"],
            ),
            RenameEntry::new("rangeSelectorButton", ["rangeSelector", "buttonText"]),
            RenameEntry::new("rangeSelectorMaxInput", ["rangeSelector", "maxInputLabel"]),
            RenameEntry::new("rangeSelectorMinInput", ["rangeSelector", "minInputLabel"]),
            RenameEntry::new("svgContainerEnd", ["screenReaderSection", "endOfChartMarker"]),
            RenameEntry::new("viewAsDataTable", ["table", "viewAsDataTableButtonText"]),
            RenameEntry::new("tableSummary", ["table", "tableSummary"]),
        ],
    }
}
