//! Static decoration for the battle mock. None of this is gameplay: the
//! numbers never change and the log never grows.

/// A combatant line on the battle card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combatant {
    pub name: &'static str,
    pub status: &'static str,
    pub morale: u8,
}

pub const COMBATANTS: &[Combatant] = &[
    Combatant {
        name: "P1",
        status: "HEALTHY",
        morale: 100,
    },
    Combatant {
        name: "SABOTEUR",
        status: "LURKING",
        morale: 66,
    },
];

pub const BATTLE_LOG: &[&str] = &[
    "P1 readies the iron sword.",
    "Saboteur slips behind the supply crates.",
    "P1 swings wide. The crates take the hit.",
    "Saboteur pockets something small and shiny.",
    "P1 drinks a health potion. Nothing was wrong.",
    "The fire scroll stays rolled. For now.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battle_decoration_is_authored() {
        assert!(!COMBATANTS.is_empty());
        assert!(!BATTLE_LOG.is_empty());
        for combatant in COMBATANTS {
            assert!(combatant.morale <= 100);
        }
    }
}
