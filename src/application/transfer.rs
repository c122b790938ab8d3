//! Selection transfer protocol
//!
//! Lets two independent widgets (a principal tree and a permission table)
//! exchange a working set of principals without either owning the other's
//! state. Each side only implements send and receive.

use crate::domain::entities::PrincipalNode;
use crate::domain::value_objects::PrincipalKind;

/// What a receiver did with an incoming set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferReport {
    /// New entries created
    pub added: usize,
    /// Existing hidden entries whose scope was widened
    pub widened: usize,
    /// Already present and visible; nothing to do
    pub duplicates: usize,
    /// Incompatible kind or synthetic folder
    pub rejected: usize,
}

impl TransferReport {
    pub fn accepted(&self) -> usize {
        self.added + self.widened
    }

    pub fn is_empty(&self) -> bool {
        *self == TransferReport::default()
    }
}

pub trait SelectionTransfer {
    /// Current transferable selection. Table-side implementations also clear it.
    fn send_selection(&mut self) -> Vec<PrincipalNode>;

    /// Merge `nodes` into this side's model, deduplicating by identity.
    /// Incompatible nodes are silently filtered out; an empty slice is a no-op.
    fn receive_selection(&mut self, nodes: &[PrincipalNode]) -> TransferReport;
}

/// Move `from`'s selection into `to`
pub fn transfer(from: &mut dyn SelectionTransfer, to: &mut dyn SelectionTransfer) -> TransferReport {
    let nodes = from.send_selection();
    to.receive_selection(&nodes)
}

/// Whether a receiver restricted to `accepted` kinds takes `node`
pub fn accepts(accepted: &[PrincipalKind], node: &PrincipalNode) -> bool {
    !node.is_root && accepted.contains(&node.kind)
}
