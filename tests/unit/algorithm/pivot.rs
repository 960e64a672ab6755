//! Tests for pivot selection

#[cfg(test)]
mod tests {
    use pentacover::CoverError;
    use pentacover::algorithm::pivot::least_common_element;
    use std::collections::BTreeSet;

    fn family(choices: &[&[u32]]) -> Vec<BTreeSet<u32>> {
        choices
            .iter()
            .map(|choice| choice.iter().copied().collect())
            .collect()
    }

    // Picks the element with the fewest covering choices
    #[test]
    fn test_least_common_element() {
        let universe = BTreeSet::from([1, 2, 3]);
        let choices = family(&[&[1, 2], &[2, 3], &[1], &[2]]);

        let (element, count) = least_common_element(&universe, &choices).unwrap();
        assert_eq!((*element, count), (3, 1));
    }

    // Ties go to the smallest element
    #[test]
    fn test_tie_breaks_on_order() {
        let universe = BTreeSet::from([5, 3, 4]);
        let choices = family(&[&[3, 4, 5]]);

        let (element, count) = least_common_element(&universe, &choices).unwrap();
        assert_eq!((*element, count), (3, 1));
    }

    // An uncovered element wins with count zero
    #[test]
    fn test_uncovered_element() {
        let universe = BTreeSet::from([1, 2, 3]);
        let choices = family(&[&[1, 2], &[1]]);

        let (element, count) = least_common_element(&universe, &choices).unwrap();
        assert_eq!((*element, count), (3, 0));
    }

    // Choice elements outside the universe do not count
    #[test]
    fn test_ignores_foreign_elements() {
        let universe = BTreeSet::from([1, 2]);
        let choices = family(&[&[1, 7], &[7], &[7], &[2], &[2]]);

        let (element, count) = least_common_element(&universe, &choices).unwrap();
        assert_eq!((*element, count), (1, 1));
    }

    // Without choices every element has count zero and the first one is chosen
    #[test]
    fn test_no_choices() {
        let universe = BTreeSet::from([4, 2]);
        let choices: Vec<BTreeSet<u32>> = Vec::new();

        let (element, count) = least_common_element(&universe, &choices).unwrap();
        assert_eq!((*element, count), (2, 0));
    }

    // Empty universe is a misuse reported as an error
    #[test]
    fn test_empty_universe_error() {
        let universe: BTreeSet<u32> = BTreeSet::new();
        let choices = family(&[&[1]]);

        let result = least_common_element(&universe, &choices);
        assert!(matches!(result, Err(CoverError::EmptyUniverse)));
    }
}
