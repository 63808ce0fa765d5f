//! Toggle logic for multi-select answers.
//!
//! The sentinel option `"None"` is mutually exclusive with every other
//! option, and a selection is never left empty -- it falls back to the
//! sentinel instead.

/// The mutually-exclusive sentinel option.
pub const NONE_OPTION: &str = "None";

/// Toggle `option` in `current`, returning the new selection.
pub fn toggle(current: &[String], option: &str) -> Vec<String> {
    if option == NONE_OPTION {
        return vec![NONE_OPTION.to_string()];
    }

    let mut updated: Vec<String> = if current.iter().any(|item| item == option) {
        current.iter().filter(|item| *item != option).cloned().collect()
    } else {
        // A concrete choice supersedes the sentinel.
        let mut kept: Vec<String> = current
            .iter()
            .filter(|item| *item != NONE_OPTION)
            .cloned()
            .collect();
        kept.push(option.to_string());
        kept
    };

    if updated.is_empty() {
        updated.push(NONE_OPTION.to_string());
    }
    updated
}
