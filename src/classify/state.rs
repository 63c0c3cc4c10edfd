/// Key substrings for window geometry, panel layout, and column state
/// that carry no value in a declarative configuration.
const UI_STATE_KEY_PATTERNS: &[&str] = &[
    "NSWindow Frame ",
    "NSSplitView Subview Frames ",
    "NSNavPanelExpandedSize",
    "NSNavPanelFileLastListMode",
    "NSNavPanelFileListMode",
    "NSTableView Columns ",
    "NSTableView Sort Ordering ",
    "NSTableView Supports ",
    "Column Width",
    "UserColumnSortPerTab",
    "UserColumnsPerTab",
    "TB Icon Size Mode",
    "TB Size Mode",
    "image window frame",
    "image window parent frame",
    "NSPreferencesContentSize",
];

/// UI-state keys: the fixed pattern list, toolbar configurations, crop
/// rectangles, window frames, and cache entries.
pub fn is_ui_state_key(key: &str) -> bool {
    if UI_STATE_KEY_PATTERNS
        .iter()
        .any(|pattern| key.contains(pattern))
    {
        return true;
    }

    if key.contains("NSToolbar Configuration") || key.contains("ExtensionsToolbarConfiguration") {
        return true;
    }

    if key.contains("CropRect") {
        return true;
    }

    if key.ends_with("Frame") && (key.contains("Window") || key.contains("window")) {
        return true;
    }

    key.contains("cache") || key.contains("Cache")
}

/// Shape-based detection of geometry strings: `{{x, y}, {w, h}}` rects,
/// `{w, h}` sizes, 8 space-separated numbers (a raw frame vector), or the
/// 6-field split-view record ending in `NO`/`YES`.
pub fn is_ui_state_value(value: &str) -> bool {
    if value.starts_with("{{") && value.ends_with("}}") {
        return true;
    }

    if value.starts_with('{')
        && value.ends_with('}')
        && value.matches(',').count() == 1
        && !value.contains('=')
    {
        return true;
    }

    let fields: Vec<&str> = value.split_whitespace().collect();
    if fields.len() == 8 && fields.iter().all(|field| field.parse::<f64>().is_ok()) {
        return true;
    }

    value.matches(',').count() == 5
        && (value.trim().ends_with("NO") || value.trim().ends_with("YES"))
}
