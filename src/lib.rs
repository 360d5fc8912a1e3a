//! Rules engine for four-player Luzhanqi (四国军棋).
//!
//! The board is a central 3×3 nine-palace zone ringed by four identical
//! player camps, each camp a 6×5 grid of railway, road, sanctuary (行营)
//! and base-camp cells. This crate implements the deterministic geometry
//! and rules layer of the game and nothing else.
//!
//! [`board`] maps each player's egocentric coordinates onto one canonical
//! grid, classifies every cell, derives board adjacency under the
//! type-specific movement rules, and defines the [`board::Board`] oracle
//! through which occupancy and alliances are consulted.
//!
//! [`pieces`] defines ranks, hidden-rank visibility, and combat
//! resolution.
//!
//! [`rules`] composes the adjacency engine with the occupancy oracle to
//! produce legal destination sets and execute validated moves.
//!
//! Session management, turn sequencing, transport and persistence belong
//! to the layers above this crate; the engine itself is pure and
//! synchronous.

pub mod board;
pub mod pieces;
pub mod player;
pub mod rules;
