/// Bounds the number of frames in an animation by striding through long sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplePolicy {
    /// Sequences at or below this length pass through unchanged.
    pub threshold: usize,
    /// Approximate number of frames kept from a longer sequence.
    pub target: usize,
}

impl Default for SamplePolicy {
    fn default() -> Self {
        Self {
            threshold: 14,
            target: 12,
        }
    }
}

impl SamplePolicy {
    /// Stride used for a sequence of `len` items.
    pub fn stride(&self, len: usize) -> usize {
        (len / self.target.max(1)).max(1)
    }

    /// Downsample `items`, keeping index 0, every `stride`-th item after it, and the true last
    /// item.
    pub fn sample<T: Clone + PartialEq>(&self, items: &[T]) -> Vec<T> {
        if items.len() <= self.threshold {
            return items.to_vec();
        }

        let stride = self.stride(items.len());
        let mut sampled: Vec<T> = items.iter().step_by(stride).cloned().collect();
        if let Some(last) = items.last()
            && sampled.last() != Some(last)
        {
            sampled.push(last.clone());
        }
        sampled
    }
}

/// Sample an update sequence with the default policy.
pub fn sample_updates(updates: &[String]) -> Vec<String> {
    SamplePolicy::default().sample(updates)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sample.rs"]
mod tests;
