//! Bounded top-K reduction of status counts into pie chart buckets.
//!
//! The first [`SIMPLE_SLOTS`] statuses get their own bucket. Later statuses
//! either fold into the trailing "other" bucket or, when larger than the
//! current smallest simple bucket, take its slot and push it into "other".
//!
//! The outcome depends on encounter order. [`AggregationPolicy::CountDescending`]
//! sorts first for callers that need a representation-independent result.

use serde::Serialize;

use super::counts::StatusCount;

/// Number of statuses that get their own slice before the "other" bucket opens.
pub const SIMPLE_SLOTS: usize = 4;

/// Catch-all bucket merging the statuses that did not keep a slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OtherBucket {
    pub labels: Vec<String>,
    pub count: u64,
}

impl OtherBucket {
    fn absorb(&mut self, status: StatusCount) {
        self.count += status.count;
        self.labels.push(status.label);
    }
}

/// A view on one slice of an [`AggregationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket<'a> {
    Simple(&'a StatusCount),
    Aggregate(&'a OtherBucket),
}

impl<'a> Bucket<'a> {
    pub fn count(&self) -> u64 {
        match self {
            Bucket::Simple(s) => s.count,
            Bucket::Aggregate(o) => o.count,
        }
    }

    /// Display label: the status itself, or the folded statuses joined by `", "`.
    pub fn label(&self) -> String {
        match self {
            Bucket::Simple(s) => s.label.clone(),
            Bucket::Aggregate(o) => o.labels.join(", "),
        }
    }

    pub fn labels(&self) -> Vec<&'a str> {
        match *self {
            Bucket::Simple(s) => vec![s.label.as_str()],
            Bucket::Aggregate(o) => o.labels.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Bucket::Aggregate(_))
    }
}

/// Up to four simple buckets in slot order, then the optional "other" bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregationResult {
    simple: Vec<StatusCount>,
    other: Option<OtherBucket>,
}

impl AggregationResult {
    pub fn simple(&self) -> &[StatusCount] {
        &self.simple
    }

    pub fn other(&self) -> Option<&OtherBucket> {
        self.other.as_ref()
    }

    pub fn len(&self) -> usize {
        self.simple.len() + usize::from(self.other.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, offset: usize) -> Option<Bucket<'_>> {
        self.buckets().nth(offset)
    }

    pub fn buckets(&self) -> impl Iterator<Item = Bucket<'_>> + '_ {
        self.simple
            .iter()
            .map(Bucket::Simple)
            .chain(self.other.iter().map(Bucket::Aggregate))
    }

    pub fn total(&self) -> u64 {
        self.buckets().map(|b| b.count()).sum()
    }
}

/// Order in which statuses are fed to the aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AggregationPolicy {
    /// Source order, as received.
    #[default]
    Encounter,
    /// Largest counts first; equal counts keep their source order.
    CountDescending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MinPointer {
    index: usize,
    count: u64,
}

impl MinPointer {
    /// Later entries win ties.
    fn offer(slot: &mut Option<MinPointer>, index: usize, count: u64) {
        match slot {
            Some(min) if count > min.count => {}
            _ => *slot = Some(MinPointer { index, count }),
        }
    }
}

/// Incremental form of the reduction, fed one status at a time.
#[derive(Debug, Clone, Default)]
pub struct StatusAggregator {
    result: AggregationResult,
    min: Option<MinPointer>,
}

impl StatusAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, status: StatusCount) {
        if self.result.simple.len() < SIMPLE_SLOTS {
            MinPointer::offer(&mut self.min, self.result.simple.len(), status.count);
            self.result.simple.push(status);
            return;
        }

        let other = self.result.other.get_or_insert_with(OtherBucket::default);
        let min = match self.min {
            Some(min) if status.count > min.count => min,
            _ => {
                other.absorb(status);
                return;
            }
        };

        let evicted = std::mem::replace(&mut self.result.simple[min.index], status);
        other.absorb(evicted);
        self.recompute_min();
    }

    fn recompute_min(&mut self) {
        self.min = None;
        for (index, status) in self.result.simple.iter().enumerate() {
            MinPointer::offer(&mut self.min, index, status.count);
        }
    }

    pub fn finish(self) -> AggregationResult {
        self.result
    }
}

/// Reduce statuses in encounter order.
pub fn aggregate<I>(statuses: I) -> AggregationResult
where
    I: IntoIterator<Item = StatusCount>,
{
    let mut aggregator = StatusAggregator::new();
    for status in statuses {
        aggregator.push(status);
    }
    aggregator.finish()
}

pub fn aggregate_with_policy<I>(statuses: I, policy: AggregationPolicy) -> AggregationResult
where
    I: IntoIterator<Item = StatusCount>,
{
    match policy {
        AggregationPolicy::Encounter => aggregate(statuses),
        AggregationPolicy::CountDescending => {
            let mut sorted: Vec<StatusCount> = statuses.into_iter().collect();
            sorted.sort_by(|a, b| b.count.cmp(&a.count));
            aggregate(sorted)
        }
    }
}
