/// Reads an on/off setting such as `MOCK_MODE`.
///
/// Only `1` and `true` switch a flag on, compared after trimming and ignoring case.
/// Anything else, including `yes` and `on`, leaves it off.
pub fn is_enabled(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true")
}
