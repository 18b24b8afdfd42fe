use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::{ActionKind, NodeAction};
use crate::positions::{index_of, Position, TableFormat};

/// Stable node identifier, assigned in creation order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whose decision a node represents.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Role {
    /// The trainee. The decision lives in a linked range rather than a
    /// single action.
    Hero { range_ref: Option<String> },
    Villain,
}

/// One seat's participation in the scenario tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioNode {
    id: NodeId,
    position: Position,
    role: Role,
    /// Node whose action spawned this one; `None` for seeded nodes.
    #[serde(default)]
    parent: Option<NodeId>,
    #[serde(default)]
    pub(crate) action: Option<NodeAction>,
    #[serde(default)]
    pub(crate) stack_override: Option<f64>,
}

impl ScenarioNode {
    pub(crate) fn new(id: NodeId, position: Position, role: Role, parent: Option<NodeId>) -> Self {
        Self {
            id,
            position,
            role,
            parent,
            action: None,
            stack_override: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn role(&self) -> &Role {
        &self.role
    }
    pub(crate) fn set_role(&mut self, role: Role) {
        self.role = role;
    }
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
    pub fn node_action(&self) -> Option<&NodeAction> {
        self.action.as_ref()
    }
    pub fn action(&self) -> Option<ActionKind> {
        self.action.as_ref().map(NodeAction::kind)
    }
    pub fn sizing(&self) -> Option<f64> {
        self.action.as_ref().and_then(NodeAction::sizing)
    }
    pub fn stack_override(&self) -> Option<f64> {
        self.stack_override
    }

    pub fn is_automatic(&self) -> bool {
        self.action.as_ref().is_some_and(NodeAction::is_automatic)
    }
    pub fn is_hero(&self) -> bool {
        matches!(self.role, Role::Hero { .. })
    }
    pub fn is_pending(&self) -> bool {
        self.action.is_none()
    }
    pub fn is_folded(&self) -> bool {
        self.action.as_ref().is_some_and(NodeAction::is_fold)
    }

    /// Explicit action other than a fold: the seat entered or stayed in the pot.
    pub fn has_voluntary_action(&self) -> bool {
        self.action.as_ref().is_some_and(|a| !a.is_fold())
    }
}

/// Display status of a node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    Active,
    Waiting,
    /// Pending, but its seat already made the decision this node stands for.
    Superseded,
    Folded { automatic: bool },
    Limped,
    Opened,
    ThreeBet,
    FourBet,
    Raised,
    Custom,
}

impl NodeState {
    pub fn label(self) -> &'static str {
        match self {
            NodeState::Active => "active",
            NodeState::Waiting => "waiting",
            NodeState::Superseded => "superseded",
            NodeState::Folded { automatic: true } => "folded (auto)",
            NodeState::Folded { automatic: false } => "folded",
            NodeState::Limped => "limped",
            NodeState::Opened => "opened",
            NodeState::ThreeBet => "3bet",
            NodeState::FourBet => "4bet",
            NodeState::Raised => "raised",
            NodeState::Custom => "custom",
        }
    }
}

/// One explicit decision, in the order it was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub node_id: NodeId,
    pub position: Position,
    pub action: ActionKind,
    pub sizing: Option<f64>,
    pub sequence_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextAction {
    pub position: Position,
    pub action: ActionKind,
    pub sizing: Option<f64>,
}

/// Who currently drives the betting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioContext {
    /// Latest open or limp.
    pub last_opener: Option<ContextAction>,
    /// Latest re-raise (3-bet, 4-bet or raise).
    pub last_raiser: Option<ContextAction>,
}

impl ScenarioContext {
    /// The action a seat yet to act is facing.
    pub fn facing(&self) -> Option<ActionKind> {
        self.last_raiser
            .as_ref()
            .or(self.last_opener.as_ref())
            .map(|c| c.action)
    }

    /// Seat of the latest raise (an open counts, a limp does not).
    pub fn aggressor(&self) -> Option<Position> {
        self.last_raiser
            .as_ref()
            .or(self
                .last_opener
                .as_ref()
                .filter(|c| c.action.is_aggressive()))
            .map(|c| c.position)
    }

    pub(crate) fn record(&mut self, position: Position, action: ActionKind, sizing: Option<f64>) {
        let entry = ContextAction {
            position,
            action,
            sizing,
        };
        match action {
            ActionKind::Open | ActionKind::Limp => self.last_opener = Some(entry),
            ActionKind::ThreeBet | ActionKind::FourBet | ActionKind::Raise => {
                self.last_raiser = Some(entry)
            }
            ActionKind::Fold | ActionKind::Call | ActionKind::Check => {}
        }
    }
}

/// A scenario under construction: the node list plus what has happened so far.
///
/// Values are never mutated in place by the builder; every command returns a
/// fresh state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioState {
    table_format: TableFormat,
    pub(crate) nodes: Vec<ScenarioNode>,
    #[serde(default)]
    pub(crate) history: Vec<HistoryEntry>,
    #[serde(default)]
    pub(crate) context: ScenarioContext,
}

impl ScenarioState {
    pub(crate) fn new(table_format: TableFormat, nodes: Vec<ScenarioNode>) -> Self {
        Self {
            table_format,
            nodes,
            history: Vec::new(),
            context: ScenarioContext::default(),
        }
    }

    pub fn table_format(&self) -> TableFormat {
        self.table_format
    }
    pub fn nodes(&self) -> &[ScenarioNode] {
        &self.nodes
    }
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
    pub fn context(&self) -> &ScenarioContext {
        &self.context
    }

    pub fn node(&self, id: NodeId) -> Option<&ScenarioNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn nodes_at(&self, position: Position) -> impl Iterator<Item = &ScenarioNode> {
        self.nodes.iter().filter(move |n| n.position == position)
    }

    /// One past the largest id; `None` once `u32::MAX` is taken.
    pub(crate) fn next_node_id(&self) -> Option<NodeId> {
        match self.nodes.iter().map(|n| n.id.0).max() {
            Some(max) => max.checked_add(1).map(NodeId),
            None => Some(NodeId(0)),
        }
    }

    /// Order of the node's seat; seats outside the format sort last.
    pub(crate) fn seat_index(&self, node: &ScenarioNode) -> usize {
        index_of(node.position, self.table_format).unwrap_or(usize::MAX)
    }

    pub(crate) fn sequence_of(&self, id: NodeId) -> Option<usize> {
        self.history
            .iter()
            .find(|h| h.node_id == id)
            .map(|h| h.sequence_index)
    }

    pub(crate) fn push_history(
        &mut self,
        node_id: NodeId,
        position: Position,
        action: ActionKind,
        sizing: Option<f64>,
    ) {
        let sequence_index = self.history.len();
        self.history.push(HistoryEntry {
            node_id,
            position,
            action,
            sizing,
            sequence_index,
        });
        self.context.record(position, action, sizing);
    }

    /// Whether `node` returns action to a seat that had already entered the
    /// pot when the node was spawned (e.g. the opener facing a 3-bet).
    pub fn is_revisit(&self, node: &ScenarioNode) -> bool {
        let Some(spawned_at) = node.parent.and_then(|p| self.sequence_of(p)) else {
            return false;
        };
        self.nodes_at(node.position).any(|other| {
            other.id != node.id
                && other.has_voluntary_action()
                && self
                    .sequence_of(other.id)
                    .is_some_and(|seq| seq < spawned_at)
        })
    }

    /// A pending node whose seat has already made the decision it stands for.
    ///
    /// First-pass nodes are superseded once any other node at the seat acted;
    /// revisit nodes only once the seat has folded.
    pub fn is_superseded(&self, node: &ScenarioNode) -> bool {
        if !node.is_pending() {
            return false;
        }
        let revisit = self.is_revisit(node);
        self.nodes_at(node.position)
            .filter(|other| other.id != node.id)
            .any(|other| {
                if revisit {
                    other.is_folded()
                } else {
                    !other.is_pending() && !self.is_revisit(other)
                }
            })
    }

    /// The node expected to decide next.
    ///
    /// The response spawned by the latest command wins; otherwise the first
    /// pending, non-superseded node in seat order.
    pub fn next_to_act(&self) -> Option<NodeId> {
        let open = |n: &&ScenarioNode| n.is_pending() && !self.is_superseded(n);
        if let Some(last) = self.history.last() {
            if let Some(spawned) = self
                .nodes
                .iter()
                .filter(open)
                .find(|n| n.parent == Some(last.node_id))
            {
                return Some(spawned.id);
            }
        }
        self.nodes
            .iter()
            .filter(open)
            .min_by_key(|n| self.seat_index(n))
            .map(|n| n.id)
    }

    pub fn node_state(&self, id: NodeId) -> Option<NodeState> {
        let node = self.node(id)?;
        let state = match &node.action {
            None if self.is_superseded(node) => NodeState::Superseded,
            None if self.next_to_act() == Some(id) => NodeState::Active,
            None => NodeState::Waiting,
            Some(NodeAction::Fold { automatic }) => NodeState::Folded {
                automatic: *automatic,
            },
            Some(NodeAction::Limp) => NodeState::Limped,
            Some(NodeAction::Open { .. }) => NodeState::Opened,
            Some(NodeAction::ThreeBet { .. }) => NodeState::ThreeBet,
            Some(NodeAction::FourBet { .. }) => NodeState::FourBet,
            Some(NodeAction::Raise { .. }) => NodeState::Raised,
            Some(NodeAction::Call) | Some(NodeAction::Check) => NodeState::Custom,
        };
        Some(state)
    }
}
