//! Default bet sizes offered when building a scenario.
//!
//! Sizes are expressed in big blinds. The 3-bet default is deliberately
//! asymmetric: smaller in position, larger out of position.

use crate::action::ActionKind;

/// A limp always completes to one big blind.
pub const LIMP_SIZING: f64 = 1.0;

const FALLBACK_SIZING: f64 = 2.0;

const OPEN_OPTIONS: [&str; 3] = ["2bb", "2.5bb", "3bb"];
const THREE_BET_OPTIONS: [&str; 4] = ["8bb", "9bb", "10bb", "12bb"];
const FOUR_BET_OPTIONS: [&str; 3] = ["20bb", "24bb", "28bb"];
const LIMP_OPTIONS: [&str; 1] = ["1bb"];

/// Sizing labels offered for `action`, smallest first.
///
/// ```
/// use preflop_engine::action::ActionKind;
/// use preflop_engine::sizing::default_sizing_options;
///
/// assert_eq!(default_sizing_options(ActionKind::Open), ["2bb", "2.5bb", "3bb"]);
/// assert!(default_sizing_options(ActionKind::Call).is_empty());
/// ```
pub fn default_sizing_options(action: ActionKind) -> &'static [&'static str] {
    match action {
        ActionKind::Open => &OPEN_OPTIONS,
        ActionKind::ThreeBet | ActionKind::Raise => &THREE_BET_OPTIONS,
        ActionKind::FourBet => &FOUR_BET_OPTIONS,
        ActionKind::Limp => &LIMP_OPTIONS,
        ActionKind::Fold | ActionKind::Call | ActionKind::Check => &[],
    }
}

/// Sizing applied when a command omits one.
pub fn default_sizing(action: ActionKind, in_position: bool) -> f64 {
    match action {
        ActionKind::Open => 2.0,
        ActionKind::ThreeBet | ActionKind::Raise => {
            if in_position {
                3.0
            } else {
                4.0
            }
        }
        ActionKind::FourBet => 20.0,
        ActionKind::Limp => LIMP_SIZING,
        ActionKind::Fold | ActionKind::Call | ActionKind::Check => FALLBACK_SIZING,
    }
}

/// Parses a label such as `2.5bb` (the `bb` suffix is optional).
pub fn parse_sizing_label(label: &str) -> Option<f64> {
    let trimmed = label.trim().to_ascii_lowercase();
    let number = trimmed.strip_suffix("bb").unwrap_or(trimmed.as_str()).trim();
    number
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

pub fn format_sizing(sizing: f64) -> String {
    format!("{}bb", sizing)
}
