//! Input schema definitions for snapshot dumps.
//!
//! These mirror the JSON the snapshot dumper writes. Only the fields the
//! aggregation needs are modelled; anything else in the file is ignored.

use crate::utils::config::{STATE_MINING_IDLE, STATE_MINING_UNRESPONSIVE};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Ordered sequence of snapshots, oldest first
pub type Dataset = Vec<Snapshot>;

/// All workers observed at one block
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Snapshot {
    /// Block the snapshot was taken at
    #[serde(alias = "blockNumber")]
    pub blocknum: u64,

    /// Epoch time in milliseconds
    #[serde(default)]
    pub timestamp: f64,

    /// Worker records valid at this block
    #[serde(default)]
    pub frame: Vec<WorkerRecord>,
}

/// One worker's measurements within a snapshot
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerRecord {
    /// Worker identifier, unique within a frame
    pub worker: String,

    /// Miner identifier
    #[serde(default)]
    pub miner: String,

    /// Reward-rate value
    #[serde(default)]
    pub v: f64,

    /// Cumulative reward
    #[serde(default)]
    pub total_reward: f64,

    #[serde(default)]
    pub state: WorkerState,

    /// Current performance
    #[serde(default)]
    pub p_instant: f64,

    /// Baseline performance, may be zero
    #[serde(default)]
    pub p_init: f64,
}

/// Worker state as reported by the chain
///
/// Only the two states the report counts are distinguished. Everything
/// else keeps its raw name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum WorkerState {
    MiningIdle,
    MiningUnresponsive,
    Other(String),
}

impl Default for WorkerState {
    fn default() -> Self {
        WorkerState::Other(String::new())
    }
}

impl From<String> for WorkerState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            STATE_MINING_IDLE => WorkerState::MiningIdle,
            STATE_MINING_UNRESPONSIVE => WorkerState::MiningUnresponsive,
            _ => WorkerState::Other(raw),
        }
    }
}

impl WorkerState {
    pub fn as_str(&self) -> &str {
        match self {
            WorkerState::MiningIdle => STATE_MINING_IDLE,
            WorkerState::MiningUnresponsive => STATE_MINING_UNRESPONSIVE,
            WorkerState::Other(raw) => raw,
        }
    }
}

/// Pool id -> worker ids belonging to that pool, in file order
///
/// A repeated pool id replaces the earlier worker list but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoolWorkers {
    pools: Vec<(String, Vec<String>)>,
}

impl PoolWorkers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pool_id: impl Into<String>, workers: Vec<String>) {
        let pool_id = pool_id.into();
        match self.pools.iter_mut().find(|(id, _)| *id == pool_id) {
            Some((_, existing)) => *existing = workers,
            None => self.pools.push((pool_id, workers)),
        }
    }

    pub fn get(&self, pool_id: &str) -> Option<&[String]> {
        self.pools
            .iter()
            .find(|(id, _)| id == pool_id)
            .map(|(_, workers)| workers.as_slice())
    }

    /// Pools in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.pools
            .iter()
            .map(|(id, workers)| (id.as_str(), workers.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

impl<'de> Deserialize<'de> for PoolWorkers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PoolWorkersVisitor;

        impl<'de> Visitor<'de> for PoolWorkersVisitor {
            type Value = PoolWorkers;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of pool id to worker ids")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pools = PoolWorkers::new();
                while let Some((pool_id, workers)) = map.next_entry::<String, Vec<String>>()? {
                    pools.insert(pool_id, workers);
                }
                Ok(pools)
            }
        }

        deserializer.deserialize_map(PoolWorkersVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_worker_record() {
        let raw = r#"{
            "worker": "0xw1",
            "miner": "43abc",
            "v": 5.5,
            "totalReward": 10,
            "state": "MiningIdle",
            "pInstant": 2,
            "pInit": 4,
            "benchmark": {"ignored": true}
        }"#;
        let record: WorkerRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(record.worker, "0xw1");
        assert_eq!(record.miner, "43abc");
        assert_eq!(record.v, 5.5);
        assert_eq!(record.total_reward, 10.0);
        assert_eq!(record.state, WorkerState::MiningIdle);
        assert_eq!(record.p_instant, 2.0);
        assert_eq!(record.p_init, 4.0);
    }

    #[test]
    fn test_unknown_state_is_kept() {
        let state = WorkerState::from("CoolingDown".to_string());
        assert_eq!(state, WorkerState::Other("CoolingDown".to_string()));
        assert_eq!(state.as_str(), "CoolingDown");
    }

    #[test]
    fn test_block_number_alias() {
        let raw = r#"{"blockNumber": 42, "timestamp": 1000, "frame": []}"#;
        let snapshot: Snapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.blocknum, 42);
        assert!(snapshot.frame.is_empty());
    }

    #[test]
    fn test_pool_workers_keep_file_order() {
        let raw = r#"{"zeta": ["w1"], "alpha": [], "3": ["w2"], "zeta": ["w3"]}"#;
        let pools: PoolWorkers = serde_json::from_str(raw).unwrap();

        let ids: Vec<&str> = pools.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "3"]);
        assert_eq!(pools.get("zeta"), Some(&["w3".to_string()][..]));
    }
}
