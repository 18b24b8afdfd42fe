//! Which actions may follow a given action, and who has to respond to it.
//!
//! | action taken        | legal next actions     | spawns node | target            |
//! |---------------------|------------------------|-------------|-------------------|
//! | Open                | Fold, 3-bet, Call      | yes         | next in order     |
//! | Limp                | Fold, Call, Open       | yes         | next in order     |
//! | 3-bet / Raise       | Fold, 4-bet, Call      | yes         | next in order     |
//! | 4-bet               | Fold, Call             | yes         | next in order     |
//! | Fold / Call / Check | -                      | no          | -                 |
//! | facing 3-bet        | Fold, 4-bet, Call      | yes         | previous aggressor|
//! | facing 4-bet        | Fold, Call             | yes         | previous aggressor|
//!
//! The "facing" rows apply when a re-raise is made over an earlier aggressor:
//! action returns to that seat.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::action::ActionKind;
use crate::action::ActionKind::{Call, Check, Fold, FourBet, Limp, Open, ThreeBet};
use crate::errors::EngineError;
use crate::positions::{index_of, next, positions_for, Position, TableFormat};

/// How the seat of a continuation node is chosen.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPositionRule {
    NextInOrder,
    PreviousAggressor,
    None,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SuccessionRule {
    pub legal_next_actions: &'static [ActionKind],
    pub spawns_node: bool,
    pub target: TargetPositionRule,
}

/// Legal actions for a seat when nobody has entered the pot.
pub const ENTRY_ACTIONS: [ActionKind; 3] = [Fold, Limp, Open];

const BB_UNRAISED: [ActionKind; 3] = [Fold, Call, Check];
const BB_RAISED: [ActionKind; 3] = [Fold, Call, ThreeBet];

const AFTER_OPEN: [ActionKind; 3] = [Fold, ThreeBet, Call];
const AFTER_LIMP: [ActionKind; 3] = [Fold, Call, Open];
const AFTER_THREE_BET: [ActionKind; 3] = [Fold, FourBet, Call];
const AFTER_FOUR_BET: [ActionKind; 2] = [Fold, Call];

const TERMINAL: SuccessionRule = SuccessionRule {
    legal_next_actions: &[],
    spawns_node: false,
    target: TargetPositionRule::None,
};

/// The "action taken" row for `action`.
pub fn rule_for(action: ActionKind) -> SuccessionRule {
    let spawning = |legal: &'static [ActionKind]| SuccessionRule {
        legal_next_actions: legal,
        spawns_node: true,
        target: TargetPositionRule::NextInOrder,
    };
    match action {
        ActionKind::Open => spawning(&AFTER_OPEN),
        ActionKind::Limp => spawning(&AFTER_LIMP),
        ActionKind::ThreeBet | ActionKind::Raise => spawning(&AFTER_THREE_BET),
        ActionKind::FourBet => spawning(&AFTER_FOUR_BET),
        ActionKind::Fold | ActionKind::Call | ActionKind::Check => TERMINAL,
    }
}

/// The response-obligation row for a re-raise made over an earlier aggressor.
pub fn facing_rule(action: ActionKind) -> Option<SuccessionRule> {
    let facing = |legal: &'static [ActionKind]| SuccessionRule {
        legal_next_actions: legal,
        spawns_node: true,
        target: TargetPositionRule::PreviousAggressor,
    };
    match action {
        ActionKind::ThreeBet | ActionKind::Raise => Some(facing(&AFTER_THREE_BET)),
        ActionKind::FourBet => Some(facing(&AFTER_FOUR_BET)),
        _ => None,
    }
}

/// Picks the row that governs `action`, given whether an earlier aggressor exists.
pub fn succession(action: ActionKind, facing_aggressor: bool) -> SuccessionRule {
    if facing_aggressor {
        facing_rule(action).unwrap_or_else(|| rule_for(action))
    } else {
        rule_for(action)
    }
}

/// Legal choices for a seat whose most recent relevant action in the hand is `prev`.
///
/// The big blind never opens: unopened it may fold, call or check, and once
/// raised it may fold, call or 3-bet.
///
/// ```
/// use preflop_engine::action::ActionKind;
/// use preflop_engine::succession::legal_actions_after;
///
/// let legal = legal_actions_after(None, true, false);
/// assert!(legal.contains(&ActionKind::Check));
/// assert!(!legal.contains(&ActionKind::Open));
/// ```
pub fn legal_actions_after(
    prev: Option<ActionKind>,
    is_bb: bool,
    bb_faced_raise: bool,
) -> BTreeSet<ActionKind> {
    let legal: &[ActionKind] = match (is_bb, bb_faced_raise, prev) {
        (true, true, _) => &BB_RAISED,
        (true, false, _) => &BB_UNRAISED,
        (false, _, None) => &ENTRY_ACTIONS,
        (false, _, Some(action)) => rule_for(action).legal_next_actions,
    };
    legal.iter().copied().collect()
}

pub fn spawns_node(action: ActionKind) -> bool {
    rule_for(action).spawns_node
}

/// Seat that must respond to `action` taken at `current`.
///
/// With no earlier aggressor the plain row applies and the next seat in
/// order is returned (`None` after the big blind). A re-raise over
/// `previous_aggressor` walks backward from `current`, wrapping past the
/// first seat, until it reaches the aggressor's seat.
///
/// # Errors
///
/// [`EngineError::InvalidPosition`] when `current` or `previous_aggressor`
/// is not a seat of `format`.
pub fn target_position(
    action: ActionKind,
    current: Position,
    format: TableFormat,
    previous_aggressor: Option<Position>,
) -> Result<Option<Position>, EngineError> {
    let idx = index_of(current, format)?;
    match succession(action, previous_aggressor.is_some()).target {
        TargetPositionRule::None => Ok(None),
        TargetPositionRule::NextInOrder => next(current, format),
        TargetPositionRule::PreviousAggressor => {
            let Some(aggressor) = previous_aggressor else {
                return Ok(None);
            };
            index_of(aggressor, format)?;
            let order = positions_for(format);
            let seats = order.len();
            Ok((1..seats)
                .map(|step| order[(idx + seats - step) % seats])
                .find(|pos| *pos == aggressor))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_follows_three_bet_rows() {
        assert_eq!(rule_for(ActionKind::Raise), rule_for(ActionKind::ThreeBet));
        assert_eq!(facing_rule(ActionKind::Raise), facing_rule(ActionKind::ThreeBet));
    }

    #[test]
    fn only_reraises_have_facing_rows() {
        for action in [Fold, Call, Limp, Open, Check] {
            assert!(facing_rule(action).is_none(), "{}", action);
        }
        assert_eq!(
            succession(Open, true).target,
            TargetPositionRule::NextInOrder
        );
    }

    #[test]
    fn previous_aggressor_wraps_backward() {
        // SB 3-bets over an open from the button: action returns to BTN.
        let target = target_position(
            ThreeBet,
            Position::SmallBlind,
            TableFormat::SixMax,
            Some(Position::Button),
        )
        .unwrap();
        assert_eq!(target, Some(Position::Button));

        // UTG 4-bets a BTN 3-bet: the backward walk wraps past UTG.
        let target = target_position(
            FourBet,
            Position::UnderTheGun,
            TableFormat::SixMax,
            Some(Position::Button),
        )
        .unwrap();
        assert_eq!(target, Some(Position::Button));
    }
}
