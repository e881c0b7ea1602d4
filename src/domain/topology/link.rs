use crate::domain::utils::id::{LinkId, NodeId};

/// A directed trunk group between two nodes. Traffic offered to the link
/// is the daily volume originating at `from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: LinkId,
    pub from: NodeId,
    pub to: NodeId,
}

impl Link {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        let id = LinkId::new(format!("{} → {}", from, to));
        Self { id, from, to }
    }
}
