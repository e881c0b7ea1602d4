use std::collections::HashSet;

use crate::api::scenario_dto::TopologyDto;
use crate::domain::topology::link::Link;
use crate::domain::utils::id::NodeId;
use crate::error::{Error, Result};

/// Node labels of the default ring, in link order.
pub const DEFAULT_RING: [&str; 3] = ["US", "China", "UK"];

/// Ordered set of named nodes plus an ordered list of directed links.
///
/// The link order is the order in which the engine evaluates links and in
/// which results are reported. A topology is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkTopology {
    nodes: Vec<NodeId>,
    links: Vec<Link>,
}

impl TryFrom<TopologyDto> for NetworkTopology {
    type Error = Error;

    fn try_from(dto: TopologyDto) -> Result<Self> {
        let nodes = dto.nodes.into_iter().map(NodeId::new).collect();
        let links = dto.links.into_iter().map(|l| Link::new(NodeId::new(l.from), NodeId::new(l.to))).collect();

        NetworkTopology::new(nodes, links)
    }
}

impl NetworkTopology {
    /// Builds a topology, rejecting duplicate nodes, self-loops and links
    /// whose endpoints are not listed in `nodes`.
    pub fn new(nodes: Vec<NodeId>, links: Vec<Link>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::InvalidTopology("no nodes given".to_string()));
        }
        if links.is_empty() {
            return Err(Error::InvalidTopology("no links given".to_string()));
        }

        let mut seen: HashSet<&NodeId> = HashSet::new();
        for node in &nodes {
            if node.as_str().trim().is_empty() {
                return Err(Error::InvalidTopology("node label must not be empty".to_string()));
            }
            if !seen.insert(node) {
                return Err(Error::InvalidTopology(format!("duplicate node '{}'", node)));
            }
        }

        for link in &links {
            if link.from == link.to {
                return Err(Error::InvalidTopology(format!("self-loop on node '{}'", link.from)));
            }
            for endpoint in [&link.from, &link.to] {
                if !seen.contains(endpoint) {
                    return Err(Error::InvalidTopology(format!("link '{}' references unknown node '{}'", link.id, endpoint)));
                }
            }
        }

        Ok(Self { nodes, links })
    }

    /// Directed cycle over `labels` in the given order: `l0 → l1 → … → l0`.
    pub fn ring<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        if labels.len() < 2 {
            return Err(Error::InvalidTopology(format!("a ring needs at least 2 nodes, got {}", labels.len())));
        }

        let nodes: Vec<NodeId> = labels.iter().map(|l| NodeId::new(l.as_ref())).collect();
        let links = nodes.iter().zip(nodes.iter().cycle().skip(1)).map(|(from, to)| Link::new(from.clone(), to.clone())).collect();

        Self::new(nodes, links)
    }

    /// The unidirectional ring US → China → UK → US.
    pub fn default_ring() -> Self {
        let nodes: Vec<NodeId> = DEFAULT_RING.iter().map(|l| NodeId::new(*l)).collect();
        let links = vec![
            Link::new(nodes[0].clone(), nodes[1].clone()),
            Link::new(nodes[1].clone(), nodes[2].clone()),
            Link::new(nodes[2].clone(), nodes[0].clone()),
        ];
        Self { nodes, links }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.nodes.contains(node)
    }

    /// True when the links form a single directed cycle visiting every
    /// node exactly once, with each link starting where the previous ended.
    pub fn is_ring(&self) -> bool {
        if self.links.len() != self.nodes.len() {
            return false;
        }

        let mut visited: HashSet<&NodeId> = HashSet::new();
        for (i, link) in self.links.iter().enumerate() {
            let next = &self.links[(i + 1) % self.links.len()];
            if link.to != next.from || !visited.insert(&link.from) {
                return false;
            }
        }
        visited.len() == self.nodes.len()
    }
}

impl Default for NetworkTopology {
    fn default() -> Self {
        Self::default_ring()
    }
}
