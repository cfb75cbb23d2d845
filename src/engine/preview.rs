//! Read-only preview of what the next round end will do.

use crate::core::{Action, GameState};

/// List the ticks and expiries `EndTurn` would produce, without applying them.
///
/// One line per HP/MP effect (`❤️-3 tick (1 turns left)`), plus one for each
/// effect on its last turn (`🛡️+5 expires`). Unlike the real round end this
/// does not account for clamping, so a tick that would be fully absorbed is
/// still listed.
pub fn preview_end_turn(state: &GameState) -> Vec<Action> {
    let mut previews = Vec::new();
    for character in &state.characters {
        for effect in &character.effects {
            if effect.target.ticks() {
                previews.push(Action::new(
                    character,
                    format!(
                        "{} tick ({} turns left)",
                        effect.label(),
                        effect.remaining_turns.saturating_sub(1)
                    ),
                ));
            }
            if effect.remaining_turns <= 1 {
                previews.push(Action::new(character, format!("{} expires", effect.label())));
            }
        }
    }
    previews
}
