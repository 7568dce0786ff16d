//! Entropy and information gain over categorical samples.
use crate::data::attribute::Label;
use rayon::prelude::*;

/// Gains below this are rounding noise from subtracting equal entropies.
const GAIN_TOLERANCE: f64 = 1e-12;

/// One attribute's values paired with the labels of their rows.
#[derive(Clone, Debug)]
pub struct AttributeSample<'a, L: Label> {
    pub attribute: usize,
    pub domain_size: usize,
    pub pairs: Vec<(usize, &'a L)>,
}

impl<'a, L: Label> AttributeSample<'a, L> {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn labels(&self) -> impl Iterator<Item = &'a L> + '_ {
        self.pairs.iter().map(|&(_, label)| label)
    }

    fn labels_with_value(&self, value: usize) -> impl Iterator<Item = &'a L> + '_ {
        self.pairs
            .iter()
            .filter(move |&&(v, _)| v == value)
            .map(|&(_, label)| label)
    }
}

/// Counts every label, keeping classes in order of first occurrence.
pub fn class_counts<'a, L: Label>(labels: impl IntoIterator<Item = &'a L>) -> Vec<(&'a L, usize)> {
    let mut counts: Vec<(&L, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(class, _)| *class == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts
}

/// Shannon entropy of a label distribution, in bits.
///
/// Returns `0.0` for an empty sample.
pub fn entropy<'a, L: Label>(labels: impl IntoIterator<Item = &'a L>) -> f64 {
    let counts = class_counts(labels);
    let total: usize = counts.iter().map(|&(_, count)| count).sum();
    if total == 0 {
        return 0.0;
    }

    counts
        .iter()
        .map(|&(_, count)| {
            let p_class = count as f64 / total as f64;
            -p_class * p_class.log2()
        })
        .sum()
}

/// Entropy of the whole sample minus the size-weighted entropy of every
/// partition induced by the attribute's values.
///
/// # Arguments
///
/// * `sample` - The attribute's values paired with their rows' labels.
///
/// # Returns
///
/// The gain in bits. Never negative; `0.0` means the attribute doesn't
/// discriminate.
pub fn information_gain<L: Label>(sample: &AttributeSample<'_, L>) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    let total = sample.len() as f64;

    let remainder: f64 = (0..sample.domain_size)
        .map(|value| {
            let partition = sample.labels_with_value(value).collect::<Vec<_>>();
            if partition.is_empty() {
                return 0.0;
            }
            partition.len() as f64 / total * entropy(partition)
        })
        .sum();

    let gain = entropy(sample.labels()) - remainder;
    if gain < GAIN_TOLERANCE {
        0.0
    } else {
        gain
    }
}

/// Picks the attribute with the strictly largest gain.
///
/// Ties keep the earliest candidate, and when every gain is zero the first
/// candidate comes back with a gain of `0.0`.
///
/// # Arguments
///
/// * `candidates` - One sample per attribute still available for splitting.
///
/// # Returns
///
/// The winning attribute index and its gain, or `None` for an empty
/// candidate list.
pub fn best_attribute<L: Label>(candidates: &[AttributeSample<'_, L>]) -> Option<(usize, f64)> {
    let gains = candidates
        .par_iter()
        .map(|sample| (sample.attribute, information_gain(sample)))
        .collect::<Vec<_>>();

    let mut gains = gains.into_iter();
    let first = gains.next()?;
    Some(gains.fold(first, |best, candidate| {
        if candidate.1 > best.1 {
            candidate
        } else {
            best
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::samples::weather;
    use approx::assert_relative_eq;

    fn sample<'a>(attribute: usize, domain_size: usize, pairs: &[(usize, &'a u8)]) -> AttributeSample<'a, u8> {
        AttributeSample {
            attribute,
            domain_size,
            pairs: pairs.to_vec(),
        }
    }

    #[test]
    fn test_entropy_pure_sample() {
        let labels = vec![1u8, 1, 1, 1];
        assert_eq!(entropy(&labels), 0.0);
    }

    #[test]
    fn test_entropy_empty_sample() {
        let labels: Vec<u8> = vec![];
        assert_eq!(entropy(&labels), 0.0);
    }

    #[test]
    fn test_entropy_uniform_is_maximal() {
        let two = vec![0u8, 1, 0, 1];
        assert_relative_eq!(entropy(&two), 1.0, epsilon = 1e-12);

        let four = vec![0u8, 1, 2, 3, 3, 2, 1, 0];
        assert_relative_eq!(entropy(&four), 2.0, epsilon = 1e-12);

        let skewed = vec![0u8, 0, 0, 1];
        assert!(entropy(&skewed) < 1.0);
    }

    #[test]
    fn test_entropy_weather_labels() {
        let dataset = weather().unwrap();
        assert_relative_eq!(entropy(dataset.y.iter()), 0.940_285_958_670_631, epsilon = 1e-9);
    }

    #[test]
    fn test_class_counts_first_seen_order() {
        let labels = vec![2u8, 0, 2, 1, 0, 2];
        let counts = class_counts(&labels);
        let expected: Vec<(&u8, usize)> = vec![(&2, 3), (&0, 2), (&1, 1)];
        assert_eq!(counts, expected);
    }

    #[test]
    fn test_information_gain_perfect_split() {
        let (a, b) = (0u8, 1u8);
        let split = sample(0, 2, &[(0, &a), (0, &a), (1, &b), (1, &b)]);
        assert_relative_eq!(information_gain(&split), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_information_gain_zero_when_distributions_match() {
        let (a, b) = (0u8, 1u8);
        let split = sample(0, 2, &[(0, &a), (0, &b), (1, &a), (1, &b)]);
        assert_eq!(information_gain(&split), 0.0);
    }

    #[test]
    fn test_information_gain_unseen_values_contribute_nothing() {
        let (a, b) = (0u8, 1u8);
        let narrow = sample(0, 2, &[(0, &a), (1, &b)]);
        let wide = sample(0, 5, &[(0, &a), (1, &b)]);
        assert_relative_eq!(information_gain(&narrow), information_gain(&wide));
    }

    #[test]
    fn test_information_gain_weather_attributes() {
        let dataset = weather().unwrap();
        let gains = (0..dataset.n_attributes())
            .map(|attribute| information_gain(&dataset.project(attribute)))
            .collect::<Vec<_>>();

        // Outlook, Temperature, Humidity, Wind
        assert_relative_eq!(gains[0], 0.246_749_819_774_439, epsilon = 1e-9);
        assert_relative_eq!(gains[1], 0.029_222_565_658_954, epsilon = 1e-9);
        assert_relative_eq!(gains[2], 0.151_835_501_362_341, epsilon = 1e-9);
        assert_relative_eq!(gains[3], 0.048_127_030_408_270, epsilon = 1e-9);
        assert!(gains.iter().all(|&gain| gain >= 0.0));
    }

    #[test]
    fn test_best_attribute_picks_highest_gain() {
        let dataset = weather().unwrap();
        let candidates = (0..dataset.n_attributes())
            .map(|attribute| dataset.project(attribute))
            .collect::<Vec<_>>();

        let (attribute, gain) = best_attribute(&candidates).unwrap();
        assert_eq!(dataset.attribute(attribute).unwrap().name(), "Outlook");
        assert!(gain > 0.24);
    }

    #[test]
    fn test_best_attribute_tie_keeps_first() {
        let (a, b) = (0u8, 1u8);
        let pairs = [(0, &a), (1, &b)];
        let candidates = vec![sample(3, 2, &pairs), sample(1, 2, &pairs), sample(2, 2, &pairs)];

        for _ in 0..10 {
            assert_eq!(best_attribute(&candidates).map(|(attribute, _)| attribute), Some(3));
        }
    }

    #[test]
    fn test_best_attribute_all_zero_returns_first() {
        let a = 0u8;
        let pairs = [(0, &a), (1, &a)];
        let candidates = vec![sample(2, 2, &pairs), sample(0, 2, &pairs)];

        assert_eq!(best_attribute(&candidates), Some((2, 0.0)));
    }

    #[test]
    fn test_best_attribute_no_candidates() {
        let candidates: Vec<AttributeSample<'_, u8>> = vec![];
        assert_eq!(best_attribute(&candidates), None);
    }
}
