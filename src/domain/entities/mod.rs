//! Domain Entities
//!
//! - `PrincipalNode` - A principal or synthetic folder with its subtree
//! - `FlatNode` - A depth-annotated view of one node for rendering

mod flat_node;
mod principal_node;

pub use flat_node::FlatNode;
pub use principal_node::PrincipalNode;
