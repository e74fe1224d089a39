//! Maze boards drawn as class-tagged cell elements.
//!
//! A board is a `rows x columns` grid of elements with ids `cell-0`,
//! `cell-1`, ... in row-major order. The state of each cell lives in its
//! class list (open, closed, start, finish, visited, path), as on the
//! interactive maze page. This crate reads a [`Grid`](maze_core::Grid) off
//! such a board, paints solver results back onto it, and animates a solve
//! through [`DocumentTrace`].
//!
//! - [`CellDocument`] / [`CellElement`]: the document abstraction
//! - [`ClassBoard`]: an in-memory document for headless use
//! - [`Board`]: a session tying a document to its start and finish
//! - free functions ([`linear_grid`], [`mark_path`], [`generate_maze`], ...)
//!   for callers that manage the document themselves

mod board;
mod config;
mod document;
mod error;
mod layout;
mod paint;
mod trace;

pub use board::Board;
pub use config::BoardConfig;
pub use document::{CellDocument, CellElement, ClassBoard, ClassCell};
pub use error::BoardError;
pub use layout::{default_finish, default_start};
pub use paint::{
    clear_maze, clear_path, generate_maze, linear_grid, mark_path, move_endpoint, read_grid,
    toggle_cell,
};
pub use trace::DocumentTrace;
