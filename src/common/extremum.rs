use core::cmp::Ordering;

/// A spectrum sample and the bin it was found at.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Extremum {
    /// The intensity of the sample, conceptually in [0, ~1].
    pub intensity: f32,
    /// The index into the spectrum frame.
    pub bin: usize,
}

impl Extremum {
    pub fn new(intensity: f32, bin: usize) -> Self {
        Extremum { intensity, bin }
    }
}

/// An [Extremum] tagged with its insertion sequence number so that
/// queues can break intensity ties by insertion order.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Ranked {
    pub(crate) extremum: Extremum,
    pub(crate) seq: usize,
}

/// Orders the loudest sample first, i.e the top of a `BinaryHeap<Loudest>`
/// is the maximum. Equal intensities pop in insertion order.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Loudest(pub(crate) Ranked);

/// Orders the quietest sample first, i.e the top of a `BinaryHeap<Quietest>`
/// is the minimum. Equal intensities pop in insertion order.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Quietest(pub(crate) Ranked);

impl Ord for Loudest {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .extremum
            .intensity
            .total_cmp(&other.0.extremum.intensity)
            .then_with(|| other.0.seq.cmp(&self.0.seq))
    }
}

impl PartialOrd for Loudest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Loudest {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Loudest {}

impl Ord for Quietest {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .extremum
            .intensity
            .total_cmp(&self.0.extremum.intensity)
            .then_with(|| other.0.seq.cmp(&self.0.seq))
    }
}

impl PartialOrd for Quietest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Quietest {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Quietest {}
