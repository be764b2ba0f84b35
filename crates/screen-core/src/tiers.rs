/// Immutable ordered threshold table, first match wins.
///
/// `at_least` tables list thresholds best-first; an input meeting or
/// exceeding a threshold takes that tier's value. `at_most` tables list
/// ceilings best-first for metrics where lower is better. Inputs
/// matching no tier get the default. Keeping the bands as data rather
/// than inline comparisons lets each table be tested on its own.
#[derive(Debug, Clone, Copy)]
pub struct TierTable<T: Copy + 'static> {
    cmp: TierCmp,
    tiers: &'static [(f64, T)],
    default: T,
}

#[derive(Debug, Clone, Copy)]
enum TierCmp {
    AtLeast,
    AtMost,
}

impl<T: Copy + 'static> TierTable<T> {
    pub const fn at_least(tiers: &'static [(f64, T)], default: T) -> Self {
        Self {
            cmp: TierCmp::AtLeast,
            tiers,
            default,
        }
    }

    pub const fn at_most(tiers: &'static [(f64, T)], default: T) -> Self {
        Self {
            cmp: TierCmp::AtMost,
            tiers,
            default,
        }
    }

    pub fn lookup(&self, value: f64) -> T {
        for (threshold, out) in self.tiers {
            let hit = match self.cmp {
                TierCmp::AtLeast => value >= *threshold,
                TierCmp::AtMost => value <= *threshold,
            };
            if hit {
                return *out;
            }
        }
        self.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORE: TierTable<u32> = TierTable::at_least(&[(20.0, 10), (15.0, 7), (10.0, 5)], 0);
    const CEILING: TierTable<u32> = TierTable::at_most(&[(3.0, 5), (5.0, 3), (8.0, 1)], 0);

    #[test]
    fn at_least_takes_first_match() {
        assert_eq!(SCORE.lookup(25.0), 10);
        assert_eq!(SCORE.lookup(20.0), 10);
        assert_eq!(SCORE.lookup(19.9), 7);
        assert_eq!(SCORE.lookup(10.0), 5);
        assert_eq!(SCORE.lookup(9.9), 0);
    }

    #[test]
    fn at_most_takes_first_match() {
        assert_eq!(CEILING.lookup(0.0), 5);
        assert_eq!(CEILING.lookup(3.0), 5);
        assert_eq!(CEILING.lookup(4.0), 3);
        assert_eq!(CEILING.lookup(8.0), 1);
        assert_eq!(CEILING.lookup(8.1), 0);
    }
}
