use rand::{distributions::Uniform, seq::SliceRandom, Rng};

use crate::id::NodeId;

#[derive(Debug, PartialEq, Eq)]
pub enum SampleError {
    CountExceedsDomain { count: usize, domain: u64 },
}

impl ToString for SampleError {
    fn to_string(&self) -> String {
        match self {
            SampleError::CountExceedsDomain { count, domain } => format!(
                "cannot draw {} distinct ids from a domain of {}",
                count, domain
            ),
        }
    }
}

/// Draws `count` distinct ids uniformly from `0..domain` and returns them
/// sorted ascending. Every subset of size `count` is equally likely.
///
/// Fails when `count > domain`; sampling without replacement cannot yield
/// more distinct values than the domain holds.
pub fn distinct_ids<R: Rng>(
    rng: &mut R,
    count: usize,
    domain: u64) -> Result<Vec<NodeId>, SampleError>
{
    if count as u64 > domain {
        return Err(SampleError::CountExceedsDomain { count, domain });
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    // if count is <50% of domain
    let low_density = (count as u64) * 2 < domain;
    let mut ids = if low_density {
        rejection_sample(rng, count, domain)
    }
    else {
        let mut everything: Vec<NodeId> = (0..domain).collect();
        everything.shuffle(rng);
        everything.truncate(count);
        everything
    };

    ids.sort_unstable();
    assert!(ids.len() == count);
    Ok(ids)
}

fn rejection_sample<R: Rng>(
    rng: &mut R,
    count: usize,
    domain: u64) -> Vec<NodeId>
{
    let distribution = Uniform::from(0..domain);

    let mut ids: Vec<NodeId> = Vec::new();
    while ids.len() < count {
        let need = count - ids.len();
        ids.extend(rng.sample_iter(distribution).take(need * 2));
        ids.sort_unstable();
        ids.dedup();
    }
    // Shuffle before truncating so the kept subset stays uniform.
    ids.shuffle(rng);
    ids.truncate(count);
    ids
}
