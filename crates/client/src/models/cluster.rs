//! Cluster membership models (`/api/v1/cluster`, `/api/v1/_elastic`).
//!
//! The gossip state is exposed as-is. Node keys are an open map because the
//! service emits one key per indexing task (`indexer.task:<ulid>`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// Cluster membership as seen by the node that answered.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Cluster {
    pub cluster_id: String,
    pub self_node_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ready_nodes: Vec<ChitchatId>,
    #[serde(deserialize_with = "null_as_default")]
    pub live_nodes: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub dead_nodes: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub chitchat_state_snapshot: ChitchatStateSnapshot,
}

/// Identity of a node generation in the gossip protocol.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ChitchatId {
    pub node_id: String,
    pub generation_id: u64,
    pub gossip_advertise_addr: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChitchatStateSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub node_state_snapshots: Vec<NodeStateSnapshot>,
    #[serde(deserialize_with = "null_as_default")]
    pub seed_addrs: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NodeStateSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub chitchat_id: ChitchatId,
    #[serde(deserialize_with = "null_as_default")]
    pub node_state: NodeState,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NodeState {
    #[serde(deserialize_with = "null_as_default")]
    pub chitchat_id: ChitchatId,
    pub heartbeat: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub key_values: BTreeMap<String, VersionedValue>,
    pub max_version: u64,
    pub last_gc_version: u64,
}

impl NodeState {
    /// Value stored under `key`, if the node advertises it.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.key_values.get(key).map(|v| v.value.as_str())
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct VersionedValue {
    pub value: String,
    pub version: u64,
    pub status: String,
}
