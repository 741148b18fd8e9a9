//! Vertex role enum shared across all `dls-*` crates.
//!
//! Roles drive every role-dependent behaviour in the system (battery reset at
//! recharge points, client/order creation, statistics) and are matched
//! exhaustively wherever they appear.

/// The function a network vertex serves in the delivery network.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeRole {
    /// Depot holding inventory; deliveries originate here.
    Storage,
    /// Recharge point; a courier arriving here resets to full battery.
    Recharge,
    /// Client location; deliveries terminate here.
    Client,
}

impl NodeRole {
    /// All roles, in the order used for statistics rendering.
    pub const ALL: [NodeRole; 3] = [NodeRole::Storage, NodeRole::Recharge, NodeRole::Client];

    /// Human-readable label, useful for report/CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeRole::Storage  => "storage",
            NodeRole::Recharge => "recharge",
            NodeRole::Client   => "client",
        }
    }

    /// `true` for the role that restores battery on arrival.
    #[inline]
    pub fn is_recharge(self) -> bool {
        matches!(self, NodeRole::Recharge)
    }
}

impl std::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
