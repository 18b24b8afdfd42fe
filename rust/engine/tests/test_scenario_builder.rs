use std::collections::BTreeSet;

use preflop_engine::action::ActionKind::{self, *};
use preflop_engine::builder::{apply_action, assign_hero, legal_actions, seed_initial_nodes};
use preflop_engine::errors::EngineError;
use preflop_engine::positions::{Position, TableFormat};
use preflop_engine::scenario::{NodeId, NodeState, Role, ScenarioState};

fn set(actions: &[ActionKind]) -> BTreeSet<ActionKind> {
    actions.iter().copied().collect()
}

fn seeded(state: &ScenarioState, pos: Position) -> NodeId {
    state
        .nodes_at(pos)
        .find(|n| n.parent().is_none())
        .expect("seeded node")
        .id()
}

fn six_max() -> ScenarioState {
    seed_initial_nodes(TableFormat::SixMax)
}

#[test]
fn utg_open_appends_hijack_and_touches_nothing_else() {
    let state = six_max();
    let utg = seeded(&state, Position::UnderTheGun);
    let next = apply_action(&state, utg, Open, None).unwrap();

    assert_eq!(next.nodes().len(), state.nodes().len() + 1);
    assert_eq!(next.node(utg).unwrap().sizing(), Some(2.0));

    let added = next.nodes().last().unwrap();
    assert_eq!(added.position(), Position::Hijack);
    assert_eq!(added.action(), None);
    assert_eq!(added.role(), &Role::Villain);
    assert_eq!(added.parent(), Some(utg));

    for (before, after) in state.nodes().iter().zip(next.nodes()) {
        if before.id() != utg {
            assert_eq!(before, after);
        }
    }
}

#[test]
fn three_bet_folds_skipped_seats_and_returns_to_opener() {
    let state = six_max();
    let utg = seeded(&state, Position::UnderTheGun);
    let btn = seeded(&state, Position::Button);
    let state = apply_action(&state, utg, Open, None).unwrap();
    let state = apply_action(&state, btn, ThreeBet, None).unwrap();

    for pos in [Position::Hijack, Position::Cutoff] {
        for node in state.nodes_at(pos) {
            assert_eq!(node.action(), Some(Fold), "{} should be folded", pos);
            assert!(node.is_automatic());
        }
    }
    // Seats behind the 3-bettor are untouched.
    for pos in [Position::SmallBlind, Position::BigBlind] {
        assert!(state.nodes_at(pos).all(|n| n.action().is_none()));
    }

    let reopened = state.nodes().last().unwrap();
    assert_eq!(reopened.position(), Position::UnderTheGun);
    assert_eq!(reopened.parent(), Some(btn));
    assert_eq!(
        legal_actions(&state, reopened.id()).unwrap(),
        set(&[Fold, FourBet, Call])
    );
    // BTN is in position on UTG, so the 3-bet defaults small.
    assert_eq!(state.node(btn).unwrap().sizing(), Some(3.0));
}

#[test]
fn four_bet_returns_to_the_three_bettor() {
    let state = six_max();
    let utg = seeded(&state, Position::UnderTheGun);
    let btn = seeded(&state, Position::Button);
    let state = apply_action(&state, utg, Open, None).unwrap();
    let state = apply_action(&state, btn, ThreeBet, None).unwrap();
    let utg_again = state.nodes().last().unwrap().id();
    let state = apply_action(&state, utg_again, FourBet, None).unwrap();

    assert_eq!(state.node(utg_again).unwrap().sizing(), Some(20.0));
    let btn_again = state.nodes().last().unwrap();
    assert_eq!(btn_again.position(), Position::Button);
    assert_eq!(btn_again.parent(), Some(utg_again));
    assert_eq!(legal_actions(&state, btn_again.id()).unwrap(), set(&[Fold, Call]));

    // A blind acting behind does not fold the pending responses.
    let sb = seeded(&state, Position::SmallBlind);
    let state = apply_action(&state, sb, Fold, None).unwrap();
    assert!(state.node(btn_again.id()).unwrap().action().is_none());
}

#[test]
fn hero_fold_folds_every_later_seat() {
    let state = six_max();
    let co = seeded(&state, Position::Cutoff);
    let state = assign_hero(&state, co, Some("co-rfi".to_string())).unwrap();
    let state = apply_action(&state, co, Fold, None).unwrap();

    for pos in [Position::Button, Position::SmallBlind, Position::BigBlind] {
        let node = state.nodes_at(pos).next().unwrap();
        assert_eq!(node.action(), Some(Fold));
        assert!(node.is_automatic());
    }
    for pos in [Position::UnderTheGun, Position::Hijack] {
        assert!(state.nodes_at(pos).next().unwrap().action().is_none());
    }
    assert_eq!(state.nodes().len(), 6);
}

#[test]
fn big_blind_legal_sets() {
    let state = six_max();
    let bb = seeded(&state, Position::BigBlind);
    assert_eq!(legal_actions(&state, bb).unwrap(), set(&[Fold, Call, Check]));

    let utg = seeded(&state, Position::UnderTheGun);
    let state = apply_action(&state, utg, Open, None).unwrap();
    assert_eq!(legal_actions(&state, bb).unwrap(), set(&[Fold, Call, ThreeBet]));
}

#[test]
fn blind_versus_blind_wraps_back_to_the_small_blind() {
    let state = six_max();
    let sb = seeded(&state, Position::SmallBlind);
    let state = apply_action(&state, sb, Open, None).unwrap();

    for pos in [Position::UnderTheGun, Position::Hijack, Position::Cutoff, Position::Button] {
        assert!(state.nodes_at(pos).all(|n| n.is_automatic()));
    }
    let bb = state.nodes().last().unwrap().id();
    assert_eq!(state.node(bb).unwrap().position(), Position::BigBlind);

    let state = apply_action(&state, bb, ThreeBet, None).unwrap();
    // BB is in position on SB postflop.
    assert_eq!(state.node(bb).unwrap().sizing(), Some(3.0));
    let sb_again = state.nodes().last().unwrap();
    assert_eq!(sb_again.position(), Position::SmallBlind);
    assert_eq!(legal_actions(&state, sb_again.id()).unwrap(), set(&[Fold, FourBet, Call]));
}

#[test]
fn out_of_position_three_bet_defaults_larger() {
    let state = six_max();
    let co = seeded(&state, Position::Cutoff);
    let sb = seeded(&state, Position::SmallBlind);
    let state = apply_action(&state, co, Open, None).unwrap();
    let state = apply_action(&state, sb, ThreeBet, None).unwrap();
    assert_eq!(state.node(sb).unwrap().sizing(), Some(4.0));
}

#[test]
fn auto_folded_nodes_stay_folded() {
    let state = six_max();
    let utg = seeded(&state, Position::UnderTheGun);
    let btn = seeded(&state, Position::Button);
    let hj = seeded(&state, Position::Hijack);
    let state = apply_action(&state, utg, Open, None).unwrap();
    let state = apply_action(&state, btn, Call, None).unwrap();
    assert!(state.node(hj).unwrap().is_automatic());
    assert!(legal_actions(&state, hj).unwrap().is_empty());

    let err = apply_action(&state, hj, ThreeBet, None).unwrap_err();
    assert_eq!(err, EngineError::IllegalAction { node_id: hj, action: ThreeBet });

    let bb = seeded(&state, Position::BigBlind);
    let state = apply_action(&state, bb, Call, None).unwrap();
    assert!(state.node(hj).unwrap().is_automatic());
}

#[test]
fn legality_queries_are_repeatable() {
    let state = six_max();
    let utg = seeded(&state, Position::UnderTheGun);
    let state = apply_action(&state, utg, Limp, None).unwrap();
    let hj = state.nodes().last().unwrap().id();
    let first = legal_actions(&state, hj).unwrap();
    let second = legal_actions(&state, hj).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, set(&[Fold, Call, Open]));
}

#[test]
fn every_command_adds_at_most_one_node() {
    let mut state = six_max();
    let script = [
        (Position::UnderTheGun, Limp),
        (Position::Cutoff, Open),
        (Position::Button, Call),
        (Position::SmallBlind, Fold),
        (Position::BigBlind, ThreeBet),
    ];
    for (pos, action) in script {
        let id = state
            .nodes_at(pos)
            .find(|n| !legal_actions(&state, n.id()).unwrap().is_empty())
            .expect("actionable node")
            .id();
        let next = apply_action(&state, id, action, None).unwrap();
        assert!(next.nodes().len() <= state.nodes().len() + 1);
        assert!(next.nodes().len() >= state.nodes().len());
        state = next;
    }
    assert_eq!(state.history().len(), 5);
    assert_eq!(
        state.context().last_raiser.as_ref().map(|c| c.position),
        Some(Position::BigBlind)
    );
}

#[test]
fn continuation_at_a_hero_seat_is_a_hero_node() {
    let state = six_max();
    let utg = seeded(&state, Position::UnderTheGun);
    let btn = seeded(&state, Position::Button);
    let state = assign_hero(&state, utg, None).unwrap();
    let state = apply_action(&state, utg, Open, None).unwrap();
    let state = apply_action(&state, btn, ThreeBet, Some(9.0)).unwrap();

    let reopened = state.nodes().last().unwrap();
    assert_eq!(reopened.position(), Position::UnderTheGun);
    assert!(reopened.is_hero());
    assert_eq!(state.node(btn).unwrap().sizing(), Some(9.0));
}

#[test]
fn node_states_follow_the_action() {
    let state = six_max();
    let utg = seeded(&state, Position::UnderTheGun);
    assert_eq!(state.next_to_act(), Some(utg));
    assert_eq!(state.node_state(utg), Some(NodeState::Active));

    let state = apply_action(&state, utg, Open, None).unwrap();
    let hj_response = state.nodes().last().unwrap().id();
    assert_eq!(state.node_state(utg), Some(NodeState::Opened));
    assert_eq!(state.node_state(hj_response), Some(NodeState::Active));
    let bb = seeded(&state, Position::BigBlind);
    assert_eq!(state.node_state(bb), Some(NodeState::Waiting));

    let state = apply_action(&state, hj_response, Fold, None).unwrap();
    assert_eq!(
        state.node_state(hj_response),
        Some(NodeState::Folded { automatic: false })
    );
    let hj = seeded(&state, Position::Hijack);
    assert_eq!(state.node_state(hj), Some(NodeState::Superseded));
    assert!(legal_actions(&state, hj).unwrap().is_empty());
    assert_eq!(state.node_state(NodeId(999)), None);
}

#[test]
fn open_behind_folded_blinds_wraps_to_the_limper() {
    let state = six_max();
    let utg = seeded(&state, Position::UnderTheGun);
    let state = apply_action(&state, utg, Limp, None).unwrap();
    let hj_response = state.nodes().last().unwrap().id();
    let state = apply_action(&state, hj_response, Fold, None).unwrap();
    let sb = seeded(&state, Position::SmallBlind);
    let state = apply_action(&state, sb, Fold, None).unwrap();
    let bb = seeded(&state, Position::BigBlind);
    let state = apply_action(&state, bb, Fold, None).unwrap();

    let btn = seeded(&state, Position::Button);
    let state = apply_action(&state, btn, Open, None).unwrap();
    assert_eq!(state.node(btn).unwrap().sizing(), Some(2.0));
    assert!(state.node(seeded(&state, Position::Cutoff)).unwrap().is_automatic());

    let limper = state.nodes().last().unwrap();
    assert_eq!(state.nodes().len(), 8);
    assert_eq!(limper.position(), Position::UnderTheGun);
    assert_eq!(limper.parent(), Some(btn));
    assert_eq!(legal_actions(&state, limper.id()).unwrap(), set(&[Fold, Call, ThreeBet]));
    assert_eq!(state.next_to_act(), Some(limper.id()));
}

#[test]
fn open_with_every_other_seat_folded_appends_nothing() {
    let mut state = six_max();
    for pos in [
        Position::UnderTheGun,
        Position::Hijack,
        Position::Cutoff,
        Position::Button,
        Position::BigBlind,
    ] {
        let id = seeded(&state, pos);
        state = apply_action(&state, id, Fold, None).unwrap();
    }
    let sb = seeded(&state, Position::SmallBlind);
    let state = apply_action(&state, sb, Open, None).unwrap();

    assert_eq!(state.nodes().len(), 6);
    assert_eq!(state.node_state(sb), Some(NodeState::Opened));
    assert_eq!(state.next_to_act(), None);
}

#[test]
fn nine_max_open_moves_to_utg_plus_one() {
    let state = seed_initial_nodes(TableFormat::NineMax);
    let utg = seeded(&state, Position::UnderTheGun);
    let state = apply_action(&state, utg, Open, Some(2.5)).unwrap();
    assert_eq!(state.nodes().last().unwrap().position(), Position::UnderTheGun1);
    assert_eq!(state.node(utg).unwrap().sizing(), Some(2.5));
}
