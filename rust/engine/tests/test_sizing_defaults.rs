use preflop_engine::action::ActionKind::*;
use preflop_engine::sizing::{default_sizing, default_sizing_options};

#[test]
fn option_lists() {
    assert_eq!(default_sizing_options(Open), ["2bb", "2.5bb", "3bb"]);
    assert_eq!(default_sizing_options(ThreeBet), ["8bb", "9bb", "10bb", "12bb"]);
    assert_eq!(default_sizing_options(FourBet), ["20bb", "24bb", "28bb"]);
    assert_eq!(default_sizing_options(Limp), ["1bb"]);
    for action in [Fold, Call, Check] {
        assert!(default_sizing_options(action).is_empty());
    }
}

#[test]
fn three_bet_is_smaller_in_position() {
    assert_eq!(default_sizing(ThreeBet, true), 3.0);
    assert_eq!(default_sizing(ThreeBet, false), 4.0);
    assert_eq!(default_sizing(Raise, true), 3.0);
    assert_eq!(default_sizing(Raise, false), 4.0);
}

#[test]
fn fixed_defaults() {
    for ip in [true, false] {
        assert_eq!(default_sizing(Open, ip), 2.0);
        assert_eq!(default_sizing(FourBet, ip), 20.0);
        assert_eq!(default_sizing(Limp, ip), 1.0);
        assert_eq!(default_sizing(Call, ip), 2.0);
    }
}
