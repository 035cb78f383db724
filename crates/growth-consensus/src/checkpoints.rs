use crate::constants::SECONDS_PER_DAY;
use crate::error::{ChainError, ErrorCode};
use crate::hash::Hash256;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Checkpoint {
    pub height: u32,
    pub hash: Hash256,
}

/// Hardcoded trusted blocks plus the transaction statistics used to estimate
/// sync progress past the last one.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckpointData {
    pub checkpoints: Vec<Checkpoint>,
    /// UNIX timestamp of the last checkpoint block.
    pub last_checkpoint_time: i64,
    /// Transactions between genesis and the last checkpoint.
    pub tx_count_at_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint.
    pub tx_per_day: f64,
}

impl CheckpointData {
    pub fn validate(&self) -> Result<(), ChainError> {
        for pair in self.checkpoints.windows(2) {
            if pair[1].height <= pair[0].height {
                return Err(ChainError::new(
                    ErrorCode::ParamsCheckpointsInvalid,
                    format!(
                        "checkpoint heights not strictly increasing: {} then {}",
                        pair[0].height, pair[1].height
                    ),
                ));
            }
        }
        Ok(())
    }

    pub fn hash_at(&self, height: u32) -> Option<&Hash256> {
        self.checkpoints
            .binary_search_by_key(&height, |c| c.height)
            .ok()
            .map(|i| &self.checkpoints[i].hash)
    }

    pub fn last_checkpoint_height(&self) -> Option<u32> {
        self.checkpoints.last().map(|c| c.height)
    }

    /// Expected total transaction count at `now` if the chain kept the
    /// estimated rate since the last checkpoint.
    pub fn estimated_tx_count(&self, now: i64) -> f64 {
        let elapsed = (now - self.last_checkpoint_time).max(0) as f64;
        self.tx_count_at_checkpoint as f64 + elapsed / SECONDS_PER_DAY as f64 * self.tx_per_day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(heights: &[u32]) -> CheckpointData {
        CheckpointData {
            checkpoints: heights
                .iter()
                .map(|h| Checkpoint {
                    height: *h,
                    hash: [*h as u8; 32],
                })
                .collect(),
            last_checkpoint_time: 1_581_238_800,
            tx_count_at_checkpoint: 10,
            tx_per_day: 500.0,
        }
    }

    #[test]
    fn strictly_increasing_heights_required() {
        data(&[0, 10, 20]).validate().expect("increasing");
        data(&[]).validate().expect("empty");
        assert_eq!(
            data(&[0, 10, 10]).validate().unwrap_err().code,
            ErrorCode::ParamsCheckpointsInvalid
        );
        assert!(data(&[5, 1]).validate().is_err());
    }

    #[test]
    fn lookup_by_height() {
        let d = data(&[0, 10, 20]);
        assert_eq!(d.hash_at(10), Some(&[10u8; 32]));
        assert_eq!(d.hash_at(11), None);
        assert_eq!(d.last_checkpoint_height(), Some(20));
        assert_eq!(data(&[]).last_checkpoint_height(), None);
    }

    #[test]
    fn tx_estimate_grows_with_elapsed_days() {
        let d = data(&[0]);
        assert_eq!(d.estimated_tx_count(d.last_checkpoint_time), 10.0);
        assert_eq!(d.estimated_tx_count(d.last_checkpoint_time + 2 * SECONDS_PER_DAY), 1_010.0);
        // Clock behind the checkpoint does not go negative.
        assert_eq!(d.estimated_tx_count(0), 10.0);
    }
}
