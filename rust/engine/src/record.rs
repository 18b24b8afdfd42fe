use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::action::{ActionKind, NodeAction};
use crate::builder::apply_action;
use crate::errors::EngineError;
use crate::positions::{Position, TableFormat};
use crate::scenario::{HistoryEntry, NodeId, Role, ScenarioNode, ScenarioState};
use crate::sizing::LIMP_SIZING;

/// Flat, storage-friendly view of one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub position: Position,
    pub role: Role,
    #[serde(default)]
    pub action: Option<ActionKind>,
    #[serde(default)]
    pub sizing: Option<f64>,
    #[serde(default)]
    pub stack_override: Option<f64>,
    #[serde(default)]
    pub is_automatic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
}

/// The shape handed to the external scenario store.
///
/// History is optional: when absent it is recovered by replaying the
/// explicit actions (see [`ScenarioRecord::into_state`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub table_format: TableFormat,
    pub nodes: Vec<NodeRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<HistoryEntry>,
}

impl ScenarioRecord {
    pub fn from_state(state: &ScenarioState) -> Self {
        let nodes = state
            .nodes()
            .iter()
            .map(|n| NodeRecord {
                id: n.id(),
                position: n.position(),
                role: n.role().clone(),
                action: n.action(),
                sizing: n.sizing(),
                stack_override: n.stack_override(),
                is_automatic: n.is_automatic(),
                parent: n.parent(),
            })
            .collect();
        Self {
            table_format: state.table_format(),
            nodes,
            history: state.history().to_vec(),
        }
    }

    /// Validates the record and rebuilds a [`ScenarioState`].
    ///
    /// A persisted history must list every explicit action exactly once, in
    /// sequence, with the node's own seat and sizing. Without one, the order
    /// is recovered by replaying the explicit actions through the builder:
    /// at each step exactly one pending action may reproduce the recorded
    /// nodes, folds being taken only when no voluntary action fits.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidPosition`] for a seat foreign to the table format
    /// - [`EngineError::InvalidRecord`] for duplicate ids, dangling parents,
    ///   automatic non-folds, sizings that disagree with the action, history
    ///   entries that disagree with the nodes, or actions whose order cannot
    ///   be recovered unambiguously
    pub fn into_state(self) -> Result<ScenarioState, EngineError> {
        let mut seen = HashSet::new();
        for node in &self.nodes {
            crate::positions::index_of(node.position, self.table_format)?;
            if !seen.insert(node.id) {
                return Err(EngineError::InvalidRecord(format!(
                    "duplicate node id {}",
                    node.id
                )));
            }
        }

        let mut nodes = Vec::with_capacity(self.nodes.len());
        for rec in &self.nodes {
            if let Some(parent) = rec.parent {
                if !seen.contains(&parent) {
                    return Err(EngineError::InvalidRecord(format!(
                        "node {} refers to missing parent {}",
                        rec.id, parent
                    )));
                }
            }
            let mut node = ScenarioNode::new(rec.id, rec.position, rec.role.clone(), rec.parent);
            node.action = rec.action.map(|kind| node_action(rec, kind)).transpose()?;
            node.stack_override = rec.stack_override;
            nodes.push(node);
        }

        let mut state = ScenarioState::new(self.table_format, nodes);
        if self.history.is_empty() {
            let replayed = replay(&state)?;
            state.history = replayed.history;
            state.context = replayed.context;
        } else {
            check_history(&state, &self.history)?;
            for entry in self.history {
                state.push_history(entry.node_id, entry.position, entry.action, entry.sizing);
            }
        }
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

fn node_action(rec: &NodeRecord, kind: ActionKind) -> Result<NodeAction, EngineError> {
    if rec.is_automatic && kind != ActionKind::Fold {
        return Err(EngineError::InvalidRecord(format!(
            "node {} is automatic but not a fold",
            rec.id
        )));
    }
    let sizing_ok = match kind {
        ActionKind::Fold | ActionKind::Call | ActionKind::Check => rec.sizing.is_none(),
        ActionKind::Limp => rec.sizing.is_none_or(|s| s == LIMP_SIZING),
        ActionKind::Open | ActionKind::ThreeBet | ActionKind::FourBet | ActionKind::Raise => {
            rec.sizing.is_some_and(|s| s.is_finite() && s > 0.0)
        }
    };
    if !sizing_ok {
        return Err(EngineError::InvalidRecord(format!(
            "node {} has {} with sizing {:?}",
            rec.id, kind, rec.sizing
        )));
    }
    if kind == ActionKind::Fold {
        return Ok(NodeAction::Fold {
            automatic: rec.is_automatic,
        });
    }
    Ok(NodeAction::explicit(kind, rec.sizing))
}

fn is_explicit(node: &ScenarioNode) -> bool {
    node.node_action().is_some_and(|a| !a.is_automatic())
}

fn check_history(state: &ScenarioState, history: &[HistoryEntry]) -> Result<(), EngineError> {
    let mut listed = HashSet::new();
    for (i, entry) in history.iter().enumerate() {
        let node = state.node(entry.node_id).filter(|n| {
            is_explicit(n)
                && n.position() == entry.position
                && n.action() == Some(entry.action)
                && n.sizing() == entry.sizing
        });
        if node.is_none() || entry.sequence_index != i || !listed.insert(entry.node_id) {
            return Err(EngineError::InvalidRecord(format!(
                "history entry {} does not match node {}",
                i, entry.node_id
            )));
        }
    }
    if let Some(missing) = state
        .nodes()
        .iter()
        .find(|n| is_explicit(n) && !listed.contains(&n.id()))
    {
        return Err(EngineError::InvalidRecord(format!(
            "node {} acted but is missing from the history",
            missing.id()
        )));
    }
    Ok(())
}

/// Recovers the action order by re-applying the recorded actions to the
/// seeded nodes.
fn replay(recorded: &ScenarioState) -> Result<ScenarioState, EngineError> {
    let seeded: Vec<ScenarioNode> = recorded
        .nodes()
        .iter()
        .filter(|n| n.parent().is_none())
        .map(|n| {
            let mut node = ScenarioNode::new(n.id(), n.position(), n.role().clone(), None);
            node.stack_override = n.stack_override();
            node
        })
        .collect();
    let mut state = ScenarioState::new(recorded.table_format(), seeded);

    let mut explicit: Vec<&ScenarioNode> =
        recorded.nodes().iter().filter(|n| is_explicit(n)).collect();
    explicit.sort_by_key(|n| (recorded.seat_index(n), n.id()));

    while !explicit.is_empty() {
        let mut voluntary = Vec::new();
        let mut fold = None;
        for (i, node) in explicit.iter().enumerate() {
            let pending = state.node(node.id()).is_some_and(ScenarioNode::is_pending);
            let Some(action) = node.action().filter(|_| pending) else {
                continue;
            };
            let Ok(next) = apply_action(&state, node.id(), action, node.sizing()) else {
                continue;
            };
            let Some(next) = adopt(recorded, next) else {
                continue;
            };
            if action == ActionKind::Fold {
                fold.get_or_insert((i, next));
            } else {
                voluntary.push((i, next));
            }
        }

        if voluntary.len() > 1 {
            let ids: Vec<String> = voluntary
                .iter()
                .map(|(i, _)| explicit[*i].id().to_string())
                .collect();
            return Err(EngineError::InvalidRecord(format!(
                "action order is ambiguous between nodes {}",
                ids.join(", ")
            )));
        }
        let Some((i, next)) = voluntary.pop().or(fold) else {
            let ids: Vec<String> = explicit.iter().map(|n| n.id().to_string()).collect();
            return Err(EngineError::InvalidRecord(format!(
                "actions of nodes {} cannot be replayed",
                ids.join(", ")
            )));
        };
        explicit.remove(i);
        state = next;
    }

    for node in recorded.nodes() {
        let reproduced = state
            .node(node.id())
            .is_some_and(|n| n.node_action() == node.node_action());
        if !reproduced {
            return Err(EngineError::InvalidRecord(format!(
                "node {} cannot be reproduced from the recorded actions",
                node.id()
            )));
        }
    }
    Ok(state)
}

/// Accepts a replay step when every node it holds matches the record, and
/// copies role and stack onto the nodes it spawned.
fn adopt(recorded: &ScenarioState, mut next: ScenarioState) -> Option<ScenarioState> {
    for node in next.nodes.iter_mut() {
        let rec = recorded.node(node.id())?;
        if rec.position() != node.position() || rec.parent() != node.parent() {
            return None;
        }
        if node.node_action().is_some() && node.node_action() != rec.node_action() {
            return None;
        }
        if node.parent().is_some() {
            node.set_role(rec.role().clone());
            node.stack_override = rec.stack_override();
        }
    }
    Some(next)
}
