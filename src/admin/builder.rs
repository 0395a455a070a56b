//! The collection administration builder.
//!
//! [`CollectionAdmin`] accumulates one Collections API command: a single
//! required action plus that action's named parameters. Fields that were
//! never supplied are simply absent from the output; no required-field or
//! cross-field validation is performed — the server rejects invalid
//! combinations. Finalization is a pure read and may be repeated with
//! identical results.

use crate::admin::action::AdminAction;

/// A collection administration command under construction.
///
/// One constructor per action; optional fields chain fluently. The action
/// token itself is never percent-encoded (the set is closed uppercase
/// tokens); parameter values are.
///
/// # Examples
///
/// ```
/// use solrkit::admin::CollectionAdmin;
///
/// let cmd = CollectionAdmin::create("coll1").num_shards(2);
/// assert_eq!(cmd.to_query_string(), "action=CREATE&name=coll1&numShards=2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionAdmin {
    action: AdminAction,
    pairs: Vec<(String, String)>,
}

impl CollectionAdmin {
    fn with_action(action: AdminAction) -> Self {
        CollectionAdmin {
            action,
            pairs: Vec::new(),
        }
    }

    /// Append a `name=value` parameter for the current action.
    pub fn param<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Append a list-valued parameter, comma-joined before encoding.
    pub fn param_list<K, I, S>(self, key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let joined = values
            .into_iter()
            .map(Into::into)
            .collect::<Vec<_>>()
            .join(",");
        self.param(key, joined)
    }

    // -- constructors, one per action --------------------------------------

    /// CREATE: create a collection.
    pub fn create<S: Into<String>>(name: S) -> Self {
        Self::with_action(AdminAction::Create).param("name", name.into())
    }

    /// RELOAD: reload a collection.
    pub fn reload<S: Into<String>>(name: S) -> Self {
        Self::with_action(AdminAction::Reload).param("name", name.into())
    }

    /// SPLITSHARD: split a shard in two.
    pub fn split_shard<S1: Into<String>, S2: Into<String>>(collection: S1, shard: S2) -> Self {
        Self::with_action(AdminAction::SplitShard)
            .param("collection", collection.into())
            .param("shard", shard.into())
    }

    /// CREATESHARD: create a shard in an implicitly-routed collection.
    pub fn create_shard<S1: Into<String>, S2: Into<String>>(collection: S1, shard: S2) -> Self {
        Self::with_action(AdminAction::CreateShard)
            .param("collection", collection.into())
            .param("shard", shard.into())
    }

    /// DELETESHARD: delete an inactive shard.
    pub fn delete_shard<S1: Into<String>, S2: Into<String>>(collection: S1, shard: S2) -> Self {
        Self::with_action(AdminAction::DeleteShard)
            .param("collection", collection.into())
            .param("shard", shard.into())
    }

    /// CREATEALIAS: create or modify an alias over one or more collections.
    pub fn create_alias<S, I, C>(name: S, collections: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self::with_action(AdminAction::CreateAlias)
            .param("name", name.into())
            .param_list("collections", collections)
    }

    /// DELETEALIAS: delete an alias.
    pub fn delete_alias<S: Into<String>>(name: S) -> Self {
        Self::with_action(AdminAction::DeleteAlias).param("name", name.into())
    }

    /// DELETE: delete a collection.
    pub fn delete<S: Into<String>>(name: S) -> Self {
        Self::with_action(AdminAction::Delete).param("name", name.into())
    }

    /// DELETEREPLICA: delete a replica of a shard.
    pub fn delete_replica<S1, S2, S3>(collection: S1, shard: S2, replica: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self::with_action(AdminAction::DeleteReplica)
            .param("collection", collection.into())
            .param("shard", shard.into())
            .param("replica", replica.into())
    }

    /// ADDREPLICA: add a replica to a shard.
    pub fn add_replica<S1: Into<String>, S2: Into<String>>(collection: S1, shard: S2) -> Self {
        Self::with_action(AdminAction::AddReplica)
            .param("collection", collection.into())
            .param("shard", shard.into())
    }

    /// CLUSTERPROP: set a cluster-wide property.
    pub fn cluster_prop<S1: Into<String>, S2: Into<String>>(name: S1, val: S2) -> Self {
        Self::with_action(AdminAction::ClusterProp)
            .param("name", name.into())
            .param("val", val.into())
    }

    /// MIGRATE: migrate documents matching a routing key to another
    /// collection.
    pub fn migrate<S1, S2, S3>(collection: S1, target: S2, split_key: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self::with_action(AdminAction::Migrate)
            .param("collection", collection.into())
            .param("target.collection", target.into())
            .param("split.key", split_key.into())
    }

    /// ADDROLE: assign a role to a node.
    pub fn add_role<S1: Into<String>, S2: Into<String>>(role: S1, node: S2) -> Self {
        Self::with_action(AdminAction::AddRole)
            .param("role", role.into())
            .param("node", node.into())
    }

    /// REMOVEROLE: remove a role from a node.
    pub fn remove_role<S1: Into<String>, S2: Into<String>>(role: S1, node: S2) -> Self {
        Self::with_action(AdminAction::RemoveRole)
            .param("role", role.into())
            .param("node", node.into())
    }

    /// OVERSEERSTATUS: overseer status and statistics.
    pub fn overseer_status() -> Self {
        Self::with_action(AdminAction::OverseerStatus)
    }

    /// CLUSTERSTATUS: cluster status.
    pub fn cluster_status() -> Self {
        Self::with_action(AdminAction::ClusterStatus)
    }

    /// REQUESTSTATUS: status of a previously submitted async request.
    pub fn request_status<S: Into<String>>(request_id: S) -> Self {
        Self::with_action(AdminAction::RequestStatus).param("requestid", request_id.into())
    }

    /// LIST: list collections.
    pub fn list() -> Self {
        Self::with_action(AdminAction::List)
    }

    /// ADDREPLICAPROP: add a property to a replica.
    pub fn add_replica_prop<S1, S2, S3, S4, S5>(
        collection: S1,
        shard: S2,
        replica: S3,
        property: S4,
        value: S5,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
        S5: Into<String>,
    {
        Self::with_action(AdminAction::AddReplicaProp)
            .param("collection", collection.into())
            .param("shard", shard.into())
            .param("replica", replica.into())
            .param("property", property.into())
            .param("property.value", value.into())
    }

    /// DELETEREPLICAPROP: delete a property from a replica.
    pub fn delete_replica_prop<S1, S2, S3, S4>(
        collection: S1,
        shard: S2,
        replica: S3,
        property: S4,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        Self::with_action(AdminAction::DeleteReplicaProp)
            .param("collection", collection.into())
            .param("shard", shard.into())
            .param("replica", replica.into())
            .param("property", property.into())
    }

    /// BALANCESHARDUNIQUE: distribute a property so exactly one replica per
    /// shard carries it.
    pub fn balance_shard_unique<S1: Into<String>, S2: Into<String>>(
        collection: S1,
        property: S2,
    ) -> Self {
        Self::with_action(AdminAction::BalanceShardUnique)
            .param("collection", collection.into())
            .param("property", property.into())
    }

    /// REBALANCELEADERS: reassign shard leadership to preferred leaders.
    pub fn rebalance_leaders<S: Into<String>>(collection: S) -> Self {
        Self::with_action(AdminAction::RebalanceLeaders).param("collection", collection.into())
    }

    // -- common optional fields --------------------------------------------

    /// Name of the router for CREATE (`compositeId` or `implicit`).
    pub fn router_name<S: Into<String>>(self, name: S) -> Self {
        self.param("router.name", name.into())
    }

    /// Routing field for CREATE.
    pub fn router_field<S: Into<String>>(self, field: S) -> Self {
        self.param("router.field", field.into())
    }

    /// Number of shards for CREATE.
    pub fn num_shards(self, count: u32) -> Self {
        self.param("numShards", count)
    }

    /// Shard names, comma-joined.
    pub fn shards<I, S>(self, shards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.param_list("shards", shards)
    }

    /// Replication factor for CREATE.
    pub fn replication_factor(self, factor: u32) -> Self {
        self.param("replicationFactor", factor)
    }

    /// Maximum shards per node for CREATE.
    pub fn max_shards_per_node(self, count: u32) -> Self {
        self.param("maxShardsPerNode", count)
    }

    /// Node set, comma-joined.
    pub fn create_node_set<I, S>(self, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.param_list("createNodeSet", nodes)
    }

    /// Shuffle the node set before assignment.
    pub fn create_node_set_shuffle(self, shuffle: bool) -> Self {
        self.param("createNodeSet.shuffle", shuffle)
    }

    /// Config set name for CREATE.
    pub fn config_name<S: Into<String>>(self, name: S) -> Self {
        self.param("collection.configName", name.into())
    }

    /// Automatically add replicas when nodes are lost.
    pub fn auto_add_replicas(self, auto: bool) -> Self {
        self.param("autoAddReplicas", auto)
    }

    /// Hash ranges for SPLITSHARD.
    pub fn ranges<S: Into<String>>(self, ranges: S) -> Self {
        self.param("ranges", ranges.into())
    }

    /// Route key for SPLITSHARD.
    pub fn split_key<S: Into<String>>(self, key: S) -> Self {
        self.param("split.key", key.into())
    }

    /// Target node for ADDREPLICA.
    pub fn node<S: Into<String>>(self, node: S) -> Self {
        self.param("node", node.into())
    }

    /// For DELETEREPLICA: only delete if the replica is down.
    pub fn only_if_down(self, only: bool) -> Self {
        self.param("onlyIfDown", only)
    }

    /// Forwarding window in seconds for MIGRATE.
    pub fn forward_timeout(self, seconds: u32) -> Self {
        self.param("forward.timeout", seconds)
    }

    /// For BALANCESHARDUNIQUE: only assign to active nodes.
    pub fn only_active_nodes(self, only: bool) -> Self {
        self.param("onlyactivenodes", only)
    }

    /// For ADDREPLICAPROP/BALANCESHARDUNIQUE: enforce one replica per shard.
    pub fn shard_unique(self, unique: bool) -> Self {
        self.param("shardUnique", unique)
    }

    /// For REBALANCELEADERS: maximum reassignments at once.
    pub fn max_at_once(self, max: u32) -> Self {
        self.param("maxAtOnce", max)
    }

    /// For REBALANCELEADERS: seconds to wait for reassignment.
    pub fn max_wait_seconds(self, seconds: u32) -> Self {
        self.param("maxWaitSeconds", seconds)
    }

    /// Run the command asynchronously under the given request id.
    pub fn async_id<S: Into<String>>(self, id: S) -> Self {
        self.param("async", id.into())
    }

    // -- finalization ------------------------------------------------------

    /// The action this command carries.
    pub fn action(&self) -> AdminAction {
        self.action
    }

    /// Finalize as an ordered flat parameter list, `action` first.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.pairs.len() + 1);
        params.push(("action".to_string(), self.action.as_str().to_string()));
        params.extend(self.pairs.iter().cloned());
        params
    }

    /// Finalize as an `&`-joined parameter string. The action token is
    /// emitted unencoded; values are percent-encoded.
    pub fn to_query_string(&self) -> String {
        let mut fragments = vec![format!("action={}", self.action.as_str())];
        for (key, value) in &self.pairs {
            fragments.push(format!("{key}={}", urlencoding::encode(value)));
        }
        fragments.join("&")
    }
}
