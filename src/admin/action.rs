//! Collections API action discriminators.

use std::fmt;

/// The closed set of Collections API actions.
///
/// Exactly one action goes into each admin request; the uppercase token is
/// the `action` parameter value on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminAction {
    /// Create a collection.
    Create,
    /// Reload a collection.
    Reload,
    /// Split a shard in two.
    SplitShard,
    /// Create a shard in a collection with implicit routing.
    CreateShard,
    /// Delete an inactive shard.
    DeleteShard,
    /// Create or modify an alias.
    CreateAlias,
    /// Delete an alias.
    DeleteAlias,
    /// Delete a collection.
    Delete,
    /// Delete a replica.
    DeleteReplica,
    /// Add a replica to a shard.
    AddReplica,
    /// Set or unset a cluster-wide property.
    ClusterProp,
    /// Migrate documents to another collection.
    Migrate,
    /// Assign a role to a node.
    AddRole,
    /// Remove a role from a node.
    RemoveRole,
    /// Overseer status and statistics.
    OverseerStatus,
    /// Cluster status: collections, shards, replicas.
    ClusterStatus,
    /// Status of an async request.
    RequestStatus,
    /// List collections.
    List,
    /// Add a property to a replica.
    AddReplicaProp,
    /// Delete a property from a replica.
    DeleteReplicaProp,
    /// Distribute a property evenly, one replica per shard.
    BalanceShardUnique,
    /// Rebalance shard leadership to preferred leaders.
    RebalanceLeaders,
}

impl AdminAction {
    /// The uppercase wire token for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminAction::Create => "CREATE",
            AdminAction::Reload => "RELOAD",
            AdminAction::SplitShard => "SPLITSHARD",
            AdminAction::CreateShard => "CREATESHARD",
            AdminAction::DeleteShard => "DELETESHARD",
            AdminAction::CreateAlias => "CREATEALIAS",
            AdminAction::DeleteAlias => "DELETEALIAS",
            AdminAction::Delete => "DELETE",
            AdminAction::DeleteReplica => "DELETEREPLICA",
            AdminAction::AddReplica => "ADDREPLICA",
            AdminAction::ClusterProp => "CLUSTERPROP",
            AdminAction::Migrate => "MIGRATE",
            AdminAction::AddRole => "ADDROLE",
            AdminAction::RemoveRole => "REMOVEROLE",
            AdminAction::OverseerStatus => "OVERSEERSTATUS",
            AdminAction::ClusterStatus => "CLUSTERSTATUS",
            AdminAction::RequestStatus => "REQUESTSTATUS",
            AdminAction::List => "LIST",
            AdminAction::AddReplicaProp => "ADDREPLICAPROP",
            AdminAction::DeleteReplicaProp => "DELETEREPLICAPROP",
            AdminAction::BalanceShardUnique => "BALANCESHARDUNIQUE",
            AdminAction::RebalanceLeaders => "REBALANCELEADERS",
        }
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_tokens() {
        assert_eq!(AdminAction::Create.as_str(), "CREATE");
        assert_eq!(AdminAction::SplitShard.to_string(), "SPLITSHARD");
        assert_eq!(AdminAction::BalanceShardUnique.as_str(), "BALANCESHARDUNIQUE");
        assert_eq!(AdminAction::RebalanceLeaders.as_str(), "REBALANCELEADERS");
    }
}
