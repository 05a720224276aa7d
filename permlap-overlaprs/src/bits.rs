use num_traits::{
    PrimInt, Unsigned,
    identities::{one, zero},
};

use permlap_core::models::Interval;

/// A Binary Interval Search structure for fast genomic interval overlap queries.
///
/// From the journal article: <https://academic.oup.com/bioinformatics/article/29/1/1/273289>
///
/// BITS keeps the intervals sorted by start position alongside independently
/// sorted lists of all start and all end positions. Queries either walk the
/// sorted intervals from a binary-searched lower bound ([`find_iter`](Bits::find_iter))
/// or count overlaps directly from the position lists without touching the
/// intervals at all ([`count`](Bits::count)).
///
/// # Examples
///
/// ```
/// use permlap_core::models::Interval;
/// use permlap_overlaprs::Bits;
///
/// let catalog = vec![
///     Interval { start: 150u32, end: 170, val: "Height" },
///     Interval { start: 600, end: 620, val: "Asthma" },
/// ];
///
/// let bits = Bits::build(catalog);
///
/// assert_eq!(bits.count(100, 200), 1);
/// assert_eq!(bits.find_iter(100, 200).count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Bits<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Intervals sorted by (start, end)
    intervals: Vec<Interval<I, T>>,
    /// Sorted list of start positions
    starts: Vec<I>,
    /// Sorted list of end positions
    ends: Vec<I>,
    /// The length of the longest interval
    max_len: I,
}

impl<I, T> Bits<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Create a new instance of Bits by passing in a vector of Intervals.
    /// The vector is sorted by start order immediately.
    pub fn build(mut intervals: Vec<Interval<I, T>>) -> Self {
        intervals.sort();

        let (mut starts, mut ends): (Vec<_>, Vec<_>) =
            intervals.iter().map(|iv| (iv.start, iv.end)).unzip();
        starts.sort();
        ends.sort();

        let max_len = intervals
            .iter()
            .map(|iv| iv.end.checked_sub(&iv.start).unwrap_or_else(zero::<I>))
            .max()
            .unwrap_or_else(zero::<I>);

        Bits {
            intervals,
            starts,
            ends,
            max_len,
        }
    }

    /// Get the number of intervals in Bits
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Check if Bits is empty (i.e. has no intervals)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterate over all intervals that overlap `start .. stop`.
    ///
    /// ```
    /// use permlap_core::models::Interval;
    /// use permlap_overlaprs::Bits;
    ///
    /// let bits = Bits::build((0u32..100).step_by(5)
    ///     .map(|x| Interval { start: x, end: x + 2, val: true })
    ///     .collect::<Vec<_>>());
    /// assert_eq!(bits.find_iter(5, 11).count(), 2);
    /// ```
    #[inline]
    pub fn find_iter<'a>(
        &'a self,
        start: I,
        stop: I,
    ) -> impl Iterator<Item = &'a Interval<I, T>> {
        IterFind {
            inner: self,
            off: Self::lower_bound(
                start.checked_sub(&self.max_len).unwrap_or_else(zero::<I>),
                &self.intervals,
            ),
            start,
            stop,
        }
    }

    /// Count all intervals that overlap `start .. stop` without iterating
    /// them. Two binary searches find the intervals that cannot overlap
    /// (those ending at or before `start`, those starting at or after
    /// `stop`); everything else does. See the BITS paper for details.
    ///
    /// ```
    /// use permlap_core::models::Interval;
    /// use permlap_overlaprs::Bits;
    ///
    /// let bits = Bits::build((0u32..100).step_by(5)
    ///     .map(|x| Interval { start: x, end: x + 2, val: true })
    ///     .collect::<Vec<_>>());
    /// assert_eq!(bits.count(5, 11), 2);
    /// ```
    #[inline]
    pub fn count(&self, start: I, stop: I) -> usize {
        let len = self.intervals.len();
        // Plus one to account for half-openness of our intervals compared
        // to the closed intervals in the BITS paper
        let num_cant_before = Self::bsearch_seq(start + one::<I>(), &self.ends);
        let num_cant_after = len - Self::bsearch_seq(stop, &self.starts);
        len - num_cant_before - num_cant_after
    }

    /// Determine the first index that we should start checking for overlaps
    /// at, via a binary search. Assumes the maximum interval length has been
    /// subtracted from `start`, otherwise the result is undefined.
    #[inline]
    fn lower_bound(start: I, intervals: &[Interval<I, T>]) -> usize {
        let mut size = intervals.len();
        let mut low = 0;

        while size > 0 {
            let half = size / 2;
            let other_half = size - half;
            let probe = low + half;
            let other_low = low + other_half;
            let v = &intervals[probe];
            size = half;
            low = if v.start < start { other_low } else { low }
        }
        low
    }

    /// Binary search for the insertion position of a key in a sorted slice:
    /// the first index where `elems[index] >= key`, or `elems.len()` when no
    /// such index exists.
    #[inline]
    fn bsearch_seq(key: I, elems: &[I]) -> usize {
        if elems.is_empty() || elems[0] >= key {
            return 0;
        } else if elems[elems.len() - 1] < key {
            return elems.len();
        }

        let mut cursor = 0;
        let mut length = elems.len();
        while length > 1 {
            let half = length >> 1;
            length -= half;
            cursor += usize::from(elems[cursor + half - 1] < key) * half;
        }
        cursor
    }
}

/// An iterator over the intervals in a [`Bits`] that overlap a query range.
///
/// Created by [`Bits::find_iter`]. Yields references without allocating.
#[derive(Debug)]
struct IterFind<'a, I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync + 'a,
{
    inner: &'a Bits<I, T>,
    off: usize,
    start: I,
    stop: I,
}

impl<'a, I, T> Iterator for IterFind<'a, I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync + 'a,
{
    type Item = &'a Interval<I, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.off < self.inner.intervals.len() {
            let interval = &self.inner.intervals[self.off];
            self.off += 1;
            if interval.overlap(self.start, self.stop) {
                return Some(interval);
            } else if interval.start >= self.stop {
                break;
            }
        }
        None
    }
}
