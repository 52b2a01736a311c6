//! Nodeswitch - node/network selection core for a multi-chain wallet
//!
//! This library tracks which blockchain network and RPC node the wallet
//! client currently targets, reconciles that selection against user-added
//! custom nodes and networks, and arbitrates conflicting selection sources
//! (explicit user picks, URL-supplied network hints, one-time overrides).
//!
//! ## Architecture
//!
//! Everything is single-threaded and event-driven. User actions become
//! [`intents::Intent`] values via the [`intents::IntentDispatcher`]; the
//! [`app::App`] store drains the queue and applies each intent to the
//! [`registry::CustomEndpointRegistry`] and the
//! [`resolver::SelectionResolver`]. Rendering code reads back through
//! [`selectors`] and the [`catalog`] projection, and never mutates state
//! directly. Actual RPC traffic is an external collaborator's job; the
//! only thing flowing back in is the switch completion signal.

pub mod app;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod intents;
pub mod nav;
pub mod registry;
pub mod resolver;
pub mod selectors;
pub mod types;
