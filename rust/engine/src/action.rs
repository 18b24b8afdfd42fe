use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Preflop actions a seat can take in a scenario.
///
/// `Raise` is the generic surface form of a re-raise and follows the same
/// succession and sizing rules as `ThreeBet`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Fold,
    Call,
    Limp,
    Open,
    ThreeBet,
    FourBet,
    Raise,
    Check,
}

impl ActionKind {
    pub const ALL: [ActionKind; 8] = [
        ActionKind::Fold,
        ActionKind::Call,
        ActionKind::Limp,
        ActionKind::Open,
        ActionKind::ThreeBet,
        ActionKind::FourBet,
        ActionKind::Raise,
        ActionKind::Check,
    ];

    /// Open or any re-raise.
    pub fn is_aggressive(self) -> bool {
        matches!(
            self,
            ActionKind::Open | ActionKind::ThreeBet | ActionKind::FourBet | ActionKind::Raise
        )
    }

    /// A raise made over an earlier raise.
    pub fn is_reraise(self) -> bool {
        matches!(
            self,
            ActionKind::ThreeBet | ActionKind::FourBet | ActionKind::Raise
        )
    }

    /// Actions that carry a bet size.
    pub fn requires_sizing(self) -> bool {
        self.is_aggressive() || self == ActionKind::Limp
    }

    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Fold => "fold",
            ActionKind::Call => "call",
            ActionKind::Limp => "limp",
            ActionKind::Open => "open",
            ActionKind::ThreeBet => "3bet",
            ActionKind::FourBet => "4bet",
            ActionKind::Raise => "raise",
            ActionKind::Check => "check",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActionKind {
    type Err = EngineError;

    /// Accepts the short labels (`3bet`) as well as the serialized names
    /// (`three_bet`, `three-bet`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fold" => Ok(ActionKind::Fold),
            "call" => Ok(ActionKind::Call),
            "limp" => Ok(ActionKind::Limp),
            "open" => Ok(ActionKind::Open),
            "3bet" | "three_bet" | "threebet" => Ok(ActionKind::ThreeBet),
            "4bet" | "four_bet" | "fourbet" => Ok(ActionKind::FourBet),
            "raise" => Ok(ActionKind::Raise),
            "check" => Ok(ActionKind::Check),
            _ => Err(EngineError::UnknownAction {
                label: s.to_string(),
            }),
        }
    }
}

/// The decision recorded on a node.
///
/// Sized actions carry their sizing inline so a sizing can never exist
/// without an action that uses it. A limp is always one big blind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeAction {
    Fold { automatic: bool },
    Call,
    Check,
    Limp,
    Open { sizing: f64 },
    ThreeBet { sizing: f64 },
    FourBet { sizing: f64 },
    Raise { sizing: f64 },
}

impl NodeAction {
    /// Builds an explicit (human-chosen) action.
    ///
    /// `sizing` is only read for sized actions and must already be resolved.
    pub(crate) fn explicit(kind: ActionKind, sizing: Option<f64>) -> Self {
        let sizing = sizing.unwrap_or_default();
        match kind {
            ActionKind::Fold => NodeAction::Fold { automatic: false },
            ActionKind::Call => NodeAction::Call,
            ActionKind::Check => NodeAction::Check,
            ActionKind::Limp => NodeAction::Limp,
            ActionKind::Open => NodeAction::Open { sizing },
            ActionKind::ThreeBet => NodeAction::ThreeBet { sizing },
            ActionKind::FourBet => NodeAction::FourBet { sizing },
            ActionKind::Raise => NodeAction::Raise { sizing },
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            NodeAction::Fold { .. } => ActionKind::Fold,
            NodeAction::Call => ActionKind::Call,
            NodeAction::Check => ActionKind::Check,
            NodeAction::Limp => ActionKind::Limp,
            NodeAction::Open { .. } => ActionKind::Open,
            NodeAction::ThreeBet { .. } => ActionKind::ThreeBet,
            NodeAction::FourBet { .. } => ActionKind::FourBet,
            NodeAction::Raise { .. } => ActionKind::Raise,
        }
    }

    pub fn sizing(&self) -> Option<f64> {
        match self {
            NodeAction::Limp => Some(crate::sizing::LIMP_SIZING),
            NodeAction::Open { sizing }
            | NodeAction::ThreeBet { sizing }
            | NodeAction::FourBet { sizing }
            | NodeAction::Raise { sizing } => Some(*sizing),
            NodeAction::Fold { .. } | NodeAction::Call | NodeAction::Check => None,
        }
    }

    pub fn is_automatic(&self) -> bool {
        matches!(self, NodeAction::Fold { automatic: true })
    }

    pub fn is_fold(&self) -> bool {
        matches!(self, NodeAction::Fold { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_label_is_reported() {
        let err = "5bet".parse::<ActionKind>().unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownAction {
                label: "5bet".to_string()
            }
        );
    }

    #[test]
    fn labels_parse_back() {
        for kind in ActionKind::ALL {
            assert_eq!(kind.label().parse::<ActionKind>().unwrap(), kind);
        }
        assert_eq!("three-bet".parse::<ActionKind>().unwrap(), ActionKind::ThreeBet);
    }

    #[test]
    fn limp_reports_fixed_sizing() {
        let limp = NodeAction::explicit(ActionKind::Limp, Some(7.0));
        assert_eq!(limp.sizing(), Some(1.0));
        let call = NodeAction::explicit(ActionKind::Call, Some(3.0));
        assert_eq!(call.sizing(), None);
    }
}
