//! Plain-text rendering of scenarios for terminal output.

use preflop_engine::action::ActionKind;
use preflop_engine::scenario::{Role, ScenarioNode, ScenarioState};
use preflop_engine::sizing::format_sizing;
use std::collections::BTreeSet;

/// Format a node's role column.
pub fn format_role(node: &ScenarioNode) -> String {
    match node.role() {
        Role::Hero {
            range_ref: Some(range),
        } => format!("hero({})", range),
        Role::Hero { range_ref: None } => "hero".to_string(),
        Role::Villain => "villain".to_string(),
    }
}

/// Format a node's decision, e.g. `open 2.5bb`, `fold (auto)` or `-`.
pub fn format_decision(node: &ScenarioNode) -> String {
    let Some(action) = node.node_action() else {
        return "-".to_string();
    };
    let mut s = action.kind().label().to_string();
    if let Some(sizing) = action.sizing() {
        s.push(' ');
        s.push_str(&format_sizing(sizing));
    }
    if action.is_automatic() {
        s.push_str(" (auto)");
    }
    s
}

/// Format a set of actions as a comma separated list of labels.
pub fn format_actions(actions: &BTreeSet<ActionKind>) -> String {
    if actions.is_empty() {
        return "(none)".to_string();
    }
    actions
        .iter()
        .map(|a| a.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render every node as one line: id, seat, role, state, decision, parent.
pub fn format_scenario(state: &ScenarioState) -> String {
    let next = state.next_to_act();
    let mut lines = vec![format!(
        "{} scenario, {} nodes",
        state.table_format(),
        state.nodes().len()
    )];
    for node in state.nodes() {
        let marker = if Some(node.id()) == next { ">" } else { " " };
        let node_state = state
            .node_state(node.id())
            .map(|s| s.label())
            .unwrap_or("?");
        let parent = node
            .parent()
            .map(|p| format!(" <- {}", p))
            .unwrap_or_default();
        lines.push(format!(
            "{} {:>3} {:<6} {:<8} {:<8} {}{}",
            marker,
            node.id().0,
            node.position().label(),
            format_role(node),
            node_state,
            format_decision(node),
            parent
        ));
    }
    match next {
        Some(id) => lines.push(format!("next to act: node {}", id)),
        None => lines.push("next to act: none".to_string()),
    }
    lines.join("\n")
}
