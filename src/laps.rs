//! Append-only stopwatch lap log.

/// A recorded split. Numbers start at 1 and follow append order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lap {
    number: usize,
    centis: u64,
}

impl Lap {
    pub fn number(&self) -> usize {
        self.number
    }

    /// Engine value at the moment the lap was taken, in centiseconds.
    pub fn centis(&self) -> u64 {
        self.centis
    }

    pub fn seconds(&self) -> f64 {
        self.centis as f64 / 100.0
    }
}

/// Laps in the order they were recorded (oldest first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LapLog {
    laps: Vec<Lap>,
}

impl LapLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lap numbered `len + 1` and return it.
    pub fn push(&mut self, centis: u64) -> Lap {
        let lap = Lap {
            number: self.laps.len() + 1,
            centis,
        };
        self.laps.push(lap);
        lap
    }

    pub fn clear(&mut self) {
        self.laps.clear();
    }

    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Lap> {
        self.laps.iter()
    }

    /// Presentation order: most recent lap first.
    pub fn newest_first(&self) -> impl Iterator<Item = &Lap> {
        self.laps.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_contiguous_from_one() {
        let mut log = LapLog::new();
        assert_eq!(log.push(120).number(), 1);
        assert_eq!(log.push(250).number(), 2);
        assert_eq!(log.push(251).number(), 3);
        let numbers: Vec<usize> = log.iter().map(Lap::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn newest_first_reverses_storage_order() {
        let mut log = LapLog::new();
        log.push(100);
        log.push(200);
        let shown: Vec<u64> = log.newest_first().map(Lap::centis).collect();
        assert_eq!(shown, vec![200, 100]);
        let stored: Vec<u64> = log.iter().map(Lap::centis).collect();
        assert_eq!(stored, vec![100, 200]);
    }

    #[test]
    fn numbering_restarts_after_clear() {
        let mut log = LapLog::new();
        log.push(1);
        log.push(2);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.push(3).number(), 1);
    }
}
