//! Domain Layer
//!
//! Pure tree logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - `PrincipalNode` and its flat projection `FlatNode`
//! - `value_objects/` - Kinds, identities, gesture modifiers
//! - `services/` - Ranking, flattening, expand-state replay, read-only promotion
//! - `ports/` - Forest loading and the tree event stream

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
