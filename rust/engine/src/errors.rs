use thiserror::Error;

use crate::action::ActionKind;
use crate::positions::{Position, TableFormat};
use crate::scenario::NodeId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Node {node_id} not found in scenario")]
    NodeNotFound { node_id: NodeId },
    #[error("Action {action} is not legal for node {node_id}")]
    IllegalAction { node_id: NodeId, action: ActionKind },
    #[error("Position {position} is not part of the {format} table")]
    InvalidPosition {
        position: Position,
        format: TableFormat,
    },
    #[error("Unknown action: {label}")]
    UnknownAction { label: String },
    #[error("Unknown position: {label}")]
    UnknownPosition { label: String },
    #[error("Unknown table format: {label}")]
    UnknownTableFormat { label: String },
    #[error("Invalid sizing: {sizing}")]
    InvalidSizing { sizing: f64 },
    #[error("Invalid stack override: {stack}")]
    InvalidStack { stack: f64 },
    #[error("No node ids left in scenario")]
    NodeIdsExhausted,
    #[error("Invalid scenario record: {0}")]
    InvalidRecord(String),
}
