use std::collections::{BTreeMap, BTreeSet};

use super::model::{GeoBounds, Sample};

// ---------------------------------------------------------------------------
// Species index
// ---------------------------------------------------------------------------

/// Sorted distinct species labels. Comparison is exact and case-sensitive.
pub fn unique_species(samples: &[Sample]) -> Vec<String> {
    samples
        .iter()
        .map(|s| s.species.as_str())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Samples whose species is in `selected`, in original order.
///
/// An empty selection selects nothing.
pub fn filter_by_species<S: AsRef<str>>(samples: &[Sample], selected: &[S]) -> Vec<Sample> {
    if selected.is_empty() {
        return Vec::new();
    }
    let wanted: BTreeSet<&str> = selected.iter().map(S::as_ref).collect();
    samples
        .iter()
        .filter(|s| wanted.contains(s.species.as_str()))
        .cloned()
        .collect()
}

/// Samples inside `bounds`, or all of them when there are no bounds.
pub fn filter_by_bounds(samples: &[Sample], bounds: Option<&GeoBounds>) -> Vec<Sample> {
    match bounds {
        None => samples.to_vec(),
        Some(b) => samples
            .iter()
            .filter(|s| b.contains(s.latitude, s.longitude))
            .cloned()
            .collect(),
    }
}

/// Group samples by species, keeping row order within each group.
pub fn group_by_species(samples: &[Sample]) -> BTreeMap<&str, Vec<&Sample>> {
    let mut groups: BTreeMap<&str, Vec<&Sample>> = BTreeMap::new();
    for s in samples {
        groups.entry(s.species.as_str()).or_default().push(s);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample(species: &str) -> Sample {
        Sample {
            species: species.to_string(),
            mercury_ppm: 0.5,
            length_mm: 300.0,
            latitude: 37.5,
            longitude: -122.0,
        }
    }

    fn at(species: &str, latitude: f64, longitude: f64) -> Sample {
        Sample {
            latitude,
            longitude,
            ..sample(species)
        }
    }

    #[test]
    fn unique_species_sorted_and_distinct() {
        let data = vec![
            sample("Trout: Rainbow"),
            sample("Bass: Largemouth"),
            sample("Trout: Rainbow"),
            sample("Catfish: Channel"),
            sample("Bass: Largemouth"),
        ];
        assert_eq!(
            unique_species(&data),
            vec!["Bass: Largemouth", "Catfish: Channel", "Trout: Rainbow"]
        );
    }

    #[test]
    fn unique_species_empty_input() {
        assert!(unique_species(&[]).is_empty());
    }

    #[test]
    fn unique_species_is_case_sensitive() {
        let data = vec![
            sample("Bass: Largemouth"),
            sample("bass: largemouth"),
            sample("BASS: LARGEMOUTH"),
        ];
        assert_eq!(
            unique_species(&data),
            vec!["BASS: LARGEMOUTH", "Bass: Largemouth", "bass: largemouth"]
        );
    }

    #[test]
    fn unique_species_with_shared_prefix_and_punctuation() {
        let data = vec![
            sample("Bass: Striped"),
            sample("Shark: Blue (juvenile)"),
            sample("Bass: Largemouth"),
            sample("Trout: Rainbow/Steelhead"),
            sample("Bass: Spotted"),
        ];
        assert_eq!(
            unique_species(&data),
            vec![
                "Bass: Largemouth",
                "Bass: Spotted",
                "Bass: Striped",
                "Shark: Blue (juvenile)",
                "Trout: Rainbow/Steelhead",
            ]
        );
    }

    #[test]
    fn species_filter_keeps_selected_in_order() {
        let data = vec![
            sample("Bass: Largemouth"),
            sample("Trout: Rainbow"),
            sample("Catfish: Channel"),
            sample("Bass: Largemouth"),
        ];
        let result = filter_by_species(&data, &["Bass: Largemouth", "Catfish: Channel"]);
        let names: Vec<_> = result.iter().map(|s| s.species.as_str()).collect();
        assert_eq!(names, vec!["Bass: Largemouth", "Catfish: Channel", "Bass: Largemouth"]);
    }

    #[test]
    fn empty_selection_selects_nothing() {
        let data = vec![sample("Bass: Largemouth"), sample("Trout: Rainbow")];
        let none: [&str; 0] = [];
        assert!(filter_by_species(&data, &none).is_empty());
    }

    #[test]
    fn unknown_species_selects_nothing() {
        let data = vec![sample("Bass: Largemouth"), sample("Trout: Rainbow")];
        assert!(filter_by_species(&data, &["Salmon: Chinook"]).is_empty());
        assert!(filter_by_species(&[], &["Bass: Largemouth"]).is_empty());
    }

    #[test]
    fn no_bounds_returns_everything() {
        let data = vec![at("A", 10.0, 10.0), at("B", -80.0, 170.0)];
        assert_eq!(filter_by_bounds(&data, None), data);
    }

    #[test]
    fn bounds_filter_is_inclusive() {
        let data = vec![
            at("inside", 37.5, -122.0),
            at("north edge", 38.0, -122.0),
            at("west edge", 37.5, -123.0),
            at("too far north", 38.5, -122.0),
            at("too far east", 37.5, -120.0),
        ];
        let b = GeoBounds::new(38.0, 37.0, -121.0, -123.0);
        let names: Vec<_> = filter_by_bounds(&data, Some(&b))
            .into_iter()
            .map(|s| s.species)
            .collect();
        assert_eq!(names, vec!["inside", "north edge", "west edge"]);
    }

    #[test]
    fn inverted_bounds_filter_everything() {
        let data = vec![at("A", 37.5, -122.0)];
        let b = GeoBounds::new(37.0, 38.0, -121.0, -123.0);
        assert!(filter_by_bounds(&data, Some(&b)).is_empty());
    }

    #[test]
    fn grouping_preserves_row_order() {
        let mut a2 = sample("A");
        a2.mercury_ppm = 0.9;
        let data = vec![sample("B"), sample("A"), sample("B"), a2];
        let groups = group_by_species(&data);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(groups["A"].len(), 2);
        assert_eq!(groups["A"][1].mercury_ppm, 0.9);
        assert_eq!(groups["B"].len(), 2);
    }

    proptest! {
        #[test]
        fn species_filter_is_an_ordered_subsequence(
            labels in prop::collection::vec("[a-c]", 0..40),
            selected in prop::collection::vec("[a-c]", 1..3),
        ) {
            let data: Vec<Sample> = labels
                .iter()
                .enumerate()
                .map(|(i, l)| Sample { mercury_ppm: i as f64, ..sample(l) })
                .collect();
            let result = filter_by_species(&data, &selected);

            let expected: Vec<Sample> = data
                .iter()
                .filter(|s| selected.contains(&s.species))
                .cloned()
                .collect();
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn bounds_filter_matches_containment(
            points in prop::collection::vec((-90.0f64..90.0, -180.0f64..180.0), 0..40),
            north in -90.0f64..90.0,
            south in -90.0f64..90.0,
            east in -180.0f64..180.0,
            west in -180.0f64..180.0,
        ) {
            let data: Vec<Sample> = points.iter().map(|&(lat, lon)| at("x", lat, lon)).collect();
            let b = GeoBounds::new(north, south, east, west);
            let result = filter_by_bounds(&data, Some(&b));
            prop_assert!(result.iter().all(|s| b.contains(s.latitude, s.longitude)));
            prop_assert_eq!(
                result.len(),
                data.iter().filter(|s| b.contains(s.latitude, s.longitude)).count()
            );
        }
    }
}
