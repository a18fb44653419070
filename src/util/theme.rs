//! Dark mode preference and application.
//!
//! The preference lives in `localStorage`; applying it toggles the
//! `.dark-mode` class on the `<html>` element.

use crate::util::storage;

const STORAGE_KEY: &str = "investai_dark";

/// Read the dark mode preference.
///
/// Returns `true` if the user previously enabled dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    if let Some(stored) = storage::read(STORAGE_KEY) {
        return stored == "true";
    }

    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            if enabled {
                let _ = class_list.add_1("dark-mode");
            } else {
                let _ = class_list.remove_1("dark-mode");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::write(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
