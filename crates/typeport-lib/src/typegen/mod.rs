//! Type generation from Go type syntax.

pub mod typescript;
