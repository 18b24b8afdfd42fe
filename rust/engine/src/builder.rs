//! Scenario tree construction.
//!
//! Every operation takes the current [`ScenarioState`] by reference and
//! returns a new one, so a failed command leaves the caller's value exactly
//! as it was.

use std::collections::BTreeSet;

use tracing::debug;

use crate::action::{ActionKind, NodeAction};
use crate::errors::EngineError;
use crate::positions::{in_position, index_of, positions_for, Position, TableFormat};
use crate::scenario::{NodeId, Role, ScenarioNode, ScenarioState};
use crate::sizing::{default_sizing, LIMP_SIZING};
use crate::succession::{legal_actions_after, spawns_node, target_position};

/// A fresh scenario: one undecided Villain node per seat, in acting order.
///
/// ```
/// use preflop_engine::builder::seed_initial_nodes;
/// use preflop_engine::positions::TableFormat;
///
/// let state = seed_initial_nodes(TableFormat::SixMax);
/// assert_eq!(state.nodes().len(), 6);
/// assert!(state.nodes().iter().all(|n| n.action().is_none()));
/// ```
pub fn seed_initial_nodes(format: TableFormat) -> ScenarioState {
    let nodes = positions_for(format)
        .iter()
        .zip(0u32..)
        .map(|(pos, id)| ScenarioNode::new(NodeId(id), *pos, Role::Villain, None))
        .collect();
    ScenarioState::new(format, nodes)
}

/// Actions the node may take right now.
///
/// A node that has already acted, or whose seat already made the decision
/// this node stands for, has no legal actions.
///
/// # Errors
///
/// - [`EngineError::NodeNotFound`] if `node_id` is not in the scenario
/// - [`EngineError::InvalidPosition`] if the node's seat is not part of the table
pub fn legal_actions(
    state: &ScenarioState,
    node_id: NodeId,
) -> Result<BTreeSet<ActionKind>, EngineError> {
    let node = state
        .node(node_id)
        .ok_or(EngineError::NodeNotFound { node_id })?;
    index_of(node.position(), state.table_format())?;
    if !node.is_pending() || state.is_superseded(node) {
        return Ok(BTreeSet::new());
    }
    let facing = state.context().facing();
    let is_bb = node.position() == Position::BigBlind;
    let bb_faced_raise = facing.is_some_and(ActionKind::is_aggressive);
    Ok(legal_actions_after(facing, is_bb, bb_faced_raise))
}

/// Records `action` on `node_id` and derives its consequences.
///
/// In order: validate, set the action (defaulting the sizing), auto-fold
/// undecided seats skipped by a later voluntary action, auto-fold seats
/// behind a folded hero, append the continuation node for the seat that
/// must respond, then update history and context.
///
/// # Errors
///
/// - [`EngineError::NodeNotFound`] if `node_id` is not in the scenario
/// - [`EngineError::IllegalAction`] if `action` is not in [`legal_actions`]
/// - [`EngineError::InvalidSizing`] if an explicit sizing is not a positive number
/// - [`EngineError::InvalidPosition`] if the scenario holds a seat foreign to its table
/// - [`EngineError::NodeIdsExhausted`] if a continuation is due but `u32::MAX` is taken
///
/// # Examples
///
/// ```
/// use preflop_engine::action::ActionKind;
/// use preflop_engine::builder::{apply_action, seed_initial_nodes};
/// use preflop_engine::positions::{Position, TableFormat};
///
/// let state = seed_initial_nodes(TableFormat::SixMax);
/// let utg = state.nodes()[0].id();
/// let next = apply_action(&state, utg, ActionKind::Open, None).unwrap();
///
/// assert_eq!(next.node(utg).unwrap().sizing(), Some(2.0));
/// assert_eq!(next.nodes().last().unwrap().position(), Position::Hijack);
/// ```
pub fn apply_action(
    state: &ScenarioState,
    node_id: NodeId,
    action: ActionKind,
    sizing: Option<f64>,
) -> Result<ScenarioState, EngineError> {
    if !legal_actions(state, node_id)?.contains(&action) {
        return Err(EngineError::IllegalAction { node_id, action });
    }
    let acting = node_index(state, node_id)?;
    let position = state.nodes[acting].position();
    let sizing = resolve_sizing(state, position, action, sizing)?;

    let mut next = state.clone();
    next.nodes[acting].action = Some(NodeAction::explicit(action, sizing));
    let mut auto_folded = fold_skipped_seats(&mut next);
    auto_folded.extend(fold_behind_heroes(&mut next));
    let spawned = insert_continuation(&mut next, acting, action)?;
    next.push_history(node_id, position, action, sizing);

    debug!(
        node = %node_id,
        position = %position,
        action = %action,
        sizing = ?sizing,
        auto_folded = ?auto_folded,
        spawned = ?spawned,
        "applied scenario action"
    );
    Ok(next)
}

/// Marks a node as the hero's decision, optionally linked to a range.
pub fn assign_hero(
    state: &ScenarioState,
    node_id: NodeId,
    range_ref: Option<String>,
) -> Result<ScenarioState, EngineError> {
    let idx = node_index(state, node_id)?;
    let mut next = state.clone();
    next.nodes[idx].set_role(Role::Hero { range_ref });
    debug!(node = %node_id, "assigned hero");
    Ok(next)
}

/// Sets or clears the effective stack (in big blinds) used for one node.
pub fn set_stack_override(
    state: &ScenarioState,
    node_id: NodeId,
    stack: Option<f64>,
) -> Result<ScenarioState, EngineError> {
    let idx = node_index(state, node_id)?;
    if let Some(stack) = stack {
        if !stack.is_finite() || stack <= 0.0 {
            return Err(EngineError::InvalidStack { stack });
        }
    }
    let mut next = state.clone();
    next.nodes[idx].stack_override = stack;
    Ok(next)
}

fn node_index(state: &ScenarioState, node_id: NodeId) -> Result<usize, EngineError> {
    state
        .nodes()
        .iter()
        .position(|n| n.id() == node_id)
        .ok_or(EngineError::NodeNotFound { node_id })
}

fn resolve_sizing(
    state: &ScenarioState,
    position: Position,
    action: ActionKind,
    sizing: Option<f64>,
) -> Result<Option<f64>, EngineError> {
    if !action.requires_sizing() {
        return Ok(None);
    }
    if action == ActionKind::Limp {
        return Ok(Some(LIMP_SIZING));
    }
    match sizing {
        Some(s) if s.is_finite() && s > 0.0 => Ok(Some(s)),
        Some(s) => Err(EngineError::InvalidSizing { sizing: s }),
        None => {
            let ip = state
                .context()
                .aggressor()
                .is_none_or(|aggressor| in_position(position, aggressor));
            Ok(Some(default_sizing(action, ip)))
        }
    }
}

/// Undecided first-pass seats in front of the furthest voluntary action
/// could not have acted; fold them.
fn fold_skipped_seats(state: &mut ScenarioState) -> Vec<NodeId> {
    let Some(latest) = state
        .nodes()
        .iter()
        .filter(|n| n.has_voluntary_action())
        .map(|n| state.seat_index(n))
        .max()
    else {
        return Vec::new();
    };
    let targets: Vec<usize> = state
        .nodes()
        .iter()
        .enumerate()
        .filter(|(_, n)| {
            foldable(state, n) && state.seat_index(n) < latest && !state.is_revisit(n)
        })
        .map(|(i, _)| i)
        .collect();
    auto_fold(state, &targets)
}

/// A folded hero ends the hand for every undecided seat behind it.
fn fold_behind_heroes(state: &mut ScenarioState) -> Vec<NodeId> {
    let Some(first_fold) = state
        .nodes()
        .iter()
        .filter(|n| n.is_hero() && n.is_folded())
        .map(|n| state.seat_index(n))
        .min()
    else {
        return Vec::new();
    };
    let targets: Vec<usize> = state
        .nodes()
        .iter()
        .enumerate()
        .filter(|(_, n)| foldable(state, n) && state.seat_index(n) > first_fold)
        .map(|(i, _)| i)
        .collect();
    auto_fold(state, &targets)
}

fn foldable(state: &ScenarioState, node: &ScenarioNode) -> bool {
    !node.is_hero() && node.is_pending() && !state.is_superseded(node)
}

fn auto_fold(state: &mut ScenarioState, targets: &[usize]) -> Vec<NodeId> {
    targets
        .iter()
        .map(|&i| {
            let node = &mut state.nodes[i];
            node.action = Some(NodeAction::Fold { automatic: true });
            node.id()
        })
        .collect()
}

/// Appends the node for the seat obligated to respond to `action`.
///
/// The seat is found with a two-phase scan: from the resolved target to the
/// end of the order, then from the first seat up to the acting seat. Folded
/// seats and seats already holding a pending response are skipped.
fn insert_continuation(
    state: &mut ScenarioState,
    acting: usize,
    action: ActionKind,
) -> Result<Option<NodeId>, EngineError> {
    if action == ActionKind::Fold || !spawns_node(action) {
        return Ok(None);
    }
    let format = state.table_format();
    let parent = state.nodes[acting].id();
    let position = state.nodes[acting].position();
    let aggressor = if action.is_reraise() {
        state.context().aggressor()
    } else {
        None
    };
    let target = target_position(action, position, format, aggressor)?;
    if let Some(target) = target {
        if state
            .nodes_at(target)
            .any(|n| awaiting_response(state, n))
        {
            return Ok(None);
        }
    }

    let order = positions_for(format);
    let acting_idx = index_of(position, format)?;
    let start = match target {
        Some(target) => index_of(target, format)?,
        None => order.len(),
    };
    let seat = (start..order.len())
        .chain(0..acting_idx.min(start))
        .map(|i| order[i])
        .find(|seat| *seat != position && seat_open(state, *seat));
    let Some(seat) = seat else {
        return Ok(None);
    };

    let role = if state.nodes_at(seat).any(ScenarioNode::is_hero) {
        Role::Hero { range_ref: None }
    } else {
        Role::Villain
    };
    let id = state.next_node_id().ok_or(EngineError::NodeIdsExhausted)?;
    state
        .nodes
        .push(ScenarioNode::new(id, seat, role, Some(parent)));
    Ok(Some(id))
}

fn awaiting_response(state: &ScenarioState, node: &ScenarioNode) -> bool {
    node.is_pending() && node.parent().is_some() && !state.is_superseded(node)
}

fn seat_open(state: &ScenarioState, seat: Position) -> bool {
    !state
        .nodes_at(seat)
        .any(|n| n.is_folded() || awaiting_response(state, n))
}
