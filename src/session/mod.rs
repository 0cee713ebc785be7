//! Session layer: owns one game and exposes the caller-facing operations.

pub mod manager;
pub mod view;

pub use manager::GameSession;
pub use view::GameStateView;
