use serde::{Deserialize, Serialize};

// 500 nodes drawn from the default 1024-id space.
pub const DEFAULT_COUNT: usize = 500;
pub const DEFAULT_MAX_ID: u64 = 1024;

/// A generation plan: the list of node files to produce.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Plan {
    #[serde(rename = "nodefile")]
    pub nodefiles: Vec<NodefileInfo>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct NodefileInfo {
    pub name: String,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_max_id")]
    pub max_id: u64,
    pub seed: Option<u64>,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_max_id() -> u64 {
    DEFAULT_MAX_ID
}
