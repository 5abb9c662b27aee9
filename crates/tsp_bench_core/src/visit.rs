use std::fmt;

/// Set of cities still to be visited in a partial tour. Bit `i` set means
/// city `i` has not been visited yet.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct VisitSet(u64);

impl VisitSet {
    pub const EMPTY: VisitSet = VisitSet(0);

    /// Every city in `[0, num_cities)` except `start`.
    pub fn full_except(num_cities: usize, start: usize) -> Self {
        let all = u64::MAX >> (u64::BITS as usize - num_cities);
        Self(all & !(1 << start))
    }

    pub fn contains(self, city: usize) -> bool {
        self.0 & (1 << city) != 0
    }

    /// Copy of the set with `city`'s bit cleared.
    #[must_use]
    pub fn without(self, city: usize) -> Self {
        Self(self.0 & !(1 << city))
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = usize> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let city = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(city)
        })
    }

    pub(crate) fn bits(self) -> u64 {
        self.0
    }
}

impl fmt::LowerHex for VisitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
