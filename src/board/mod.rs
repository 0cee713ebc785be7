//! Board topology: snakes and ladders as one redirect table.

pub mod topology;

pub use topology::{BoardTopology, Redirect, RedirectKind, CLASSIC_LADDERS, CLASSIC_SNAKES};
