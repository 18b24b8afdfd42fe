//! # preflop-engine: Preflop Scenario Tree Builder
//!
//! Rule engine for building multi-way preflop training scenarios one
//! decision at a time. Given a scenario and a command ("node N took action
//! A"), the builder validates the action, folds seats that can no longer
//! act, and appends the node for whoever must respond next.
//!
//! The engine is a pure, synchronous state transformer: every operation
//! takes a [`scenario::ScenarioState`] by reference and returns a new value.
//!
//! ## Core Modules
//!
//! - [`positions`] - Seat order for 6-max and full-ring tables
//! - [`action`] - Action kinds and the decision stored on a node
//! - [`succession`] - Which actions may follow which, and who responds
//! - [`sizing`] - Default bet sizes and sizing labels
//! - [`scenario`] - Nodes, history, context and the scenario value
//! - [`builder`] - Seeding scenarios and applying commands
//! - [`record`] - Flat record for external storage
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use preflop_engine::action::ActionKind;
//! use preflop_engine::builder::{apply_action, legal_actions, seed_initial_nodes};
//! use preflop_engine::positions::{Position, TableFormat};
//!
//! let state = seed_initial_nodes(TableFormat::SixMax);
//! let utg = state.nodes_at(Position::UnderTheGun).next().unwrap().id();
//! let btn = state.nodes_at(Position::Button).next().unwrap().id();
//!
//! let state = apply_action(&state, utg, ActionKind::Open, None).unwrap();
//! let state = apply_action(&state, btn, ActionKind::ThreeBet, None).unwrap();
//!
//! // Action returns to the opener.
//! let reopened = state.nodes().last().unwrap();
//! assert_eq!(reopened.position(), Position::UnderTheGun);
//! assert!(legal_actions(&state, reopened.id()).unwrap().contains(&ActionKind::FourBet));
//! ```

pub mod action;
pub mod builder;
pub mod errors;
pub mod positions;
pub mod record;
pub mod scenario;
pub mod sizing;
pub mod succession;

pub use builder::{apply_action, legal_actions, seed_initial_nodes};
pub use errors::EngineError;
pub use sizing::default_sizing_options;
