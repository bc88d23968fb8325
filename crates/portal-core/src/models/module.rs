/// One top-level navigable section of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
}

/// The fixed set of portal modules, in sidebar order.
pub const MODULES: &[ModuleEntry] = &[
    ModuleEntry {
        id: "dashboard",
        label: "Dashboard",
        glyph: "⌂",
    },
    ModuleEntry {
        id: "reports",
        label: "Reports",
        glyph: "▤",
    },
    ModuleEntry {
        id: "billing",
        label: "Billing",
        glyph: "$",
    },
    ModuleEntry {
        id: "team",
        label: "Team",
        glyph: "◉",
    },
    ModuleEntry {
        id: "settings",
        label: "Settings",
        glyph: "⚙",
    },
];

/// Look up the display label for a module id. Ids outside the set get `None`;
/// callers tolerate that rather than treating it as an error.
pub fn module_label(id: &str) -> Option<&'static str> {
    MODULES.iter().find(|m| m.id == id).map(|m| m.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_ids_are_unique() {
        for (i, a) in MODULES.iter().enumerate() {
            for b in &MODULES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn unknown_id_has_no_label() {
        assert_eq!(module_label("billing"), Some("Billing"));
        assert_eq!(module_label("warehouse"), None);
    }
}
