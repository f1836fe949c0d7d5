use crate::domain::model::Label;
use std::iter::FusedIterator;

/// Bound used when the caller does not pick one.
pub const DEFAULT_BOUND: i64 = 100;

/// Label for a single index. Meaningful for `i >= 1`.
pub fn label(i: u64) -> Label {
    match (i % 3, i % 5) {
        (0, 0) => Label::FizzBuzz,
        (0, _) => Label::Fizz,
        (_, 0) => Label::Buzz,
        _ => Label::Number(i),
    }
}

/// Lazy sequence of labels for `1..=bound`.
///
/// A bound of zero or below produces an empty sequence.
#[derive(Debug, Clone)]
pub struct FizzBuzz {
    next: u64,
    bound: u64,
}

impl FizzBuzz {
    pub fn new(bound: i64) -> Self {
        Self {
            next: 1,
            bound: u64::try_from(bound).unwrap_or(0),
        }
    }

    pub fn bound(&self) -> u64 {
        self.bound
    }

    fn remaining(&self) -> u64 {
        (self.bound + 1).saturating_sub(self.next)
    }
}

impl Default for FizzBuzz {
    fn default() -> Self {
        Self::new(DEFAULT_BOUND)
    }
}

impl Iterator for FizzBuzz {
    type Item = Label;

    fn next(&mut self) -> Option<Label> {
        if self.next > self.bound {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(label(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for FizzBuzz {}

/// Lazy labels for `1..=bound`, ascending.
pub fn fizzbuzz(bound: i64) -> FizzBuzz {
    FizzBuzz::new(bound)
}

/// Eagerly collects the labels for `1..=bound`.
pub fn labels(bound: i64) -> Vec<Label> {
    fizzbuzz(bound).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(bound: i64) -> Vec<String> {
        labels(bound).iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_first_fifteen() {
        assert_eq!(
            rendered(15),
            vec![
                "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz",
                "13", "14", "FizzBuzz"
            ]
        );
    }

    #[test]
    fn test_default_has_one_hundred_labels() {
        let all: Vec<Label> = FizzBuzz::default().collect();
        assert_eq!(all.len(), 100);
        assert_eq!(all[99], Label::Buzz);
        assert_eq!(FizzBuzz::default().size_hint(), (100, Some(100)));
    }

    #[test]
    fn test_classification_law() {
        for (idx, got) in fizzbuzz(300).enumerate() {
            let i = idx as u64 + 1;
            let expected = if i % 15 == 0 {
                Label::FizzBuzz
            } else if i % 3 == 0 {
                Label::Fizz
            } else if i % 5 == 0 {
                Label::Buzz
            } else {
                Label::Number(i)
            };
            assert_eq!(got, expected, "index {}", i);
        }
    }

    #[test]
    fn test_non_positive_bound_is_empty() {
        assert!(labels(0).is_empty());
        assert!(labels(-7).is_empty());
        assert!(labels(i64::MIN).is_empty());
        assert_eq!(fizzbuzz(-1).bound(), 0);
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut seq = fizzbuzz(1);
        assert_eq!(seq.next(), Some(Label::Number(1)));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_large_bound_stays_lazy() {
        let mut seq = fizzbuzz(i64::MAX);
        assert_eq!(seq.nth(14), Some(Label::FizzBuzz));
    }
}
