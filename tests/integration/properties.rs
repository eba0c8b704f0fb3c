// tests/integration/properties.rs
use kanon_domain::analytics::{
    AggregatePolicy, Aggregator, GroupValidator, Merger, Partitioner, Splitter,
    discernability_metric,
};
use kanon_domain::config::{AnonymizationSpec, QuasiIdentifierSet, SensitiveAttribute};
use kanon_domain::model::{ColumnData, ColumnType, Dataset, Group};
use kanon_shared_kernel::KThreshold;
use proptest::prelude::*;

fn numeric_dataset(ages: Vec<f64>, incomes: Vec<String>) -> Dataset {
    Dataset::from_columns(vec![
        ("age".to_string(), ColumnData::Numeric(ages)),
        ("income".to_string(), ColumnData::Categorical(incomes)),
    ])
    .unwrap()
}

fn categorical_dataset(cities: Vec<String>, incomes: Vec<String>) -> Dataset {
    Dataset::from_columns(vec![
        ("city".to_string(), ColumnData::Categorical(cities)),
        ("income".to_string(), ColumnData::Categorical(incomes)),
    ])
    .unwrap()
}

fn spec_over(column: &str, k: usize) -> AnonymizationSpec {
    AnonymizationSpec::new(
        QuasiIdentifierSet::new(vec![column.to_string()]).unwrap(),
        SensitiveAttribute::new("income").unwrap(),
        KThreshold::new(k).unwrap(),
    )
    .unwrap()
}

fn partition(dataset: &Dataset, spec: &AnonymizationSpec) -> Vec<Group> {
    let validator = GroupValidator::new(spec.k());
    Partitioner::new(dataset, spec.quasi(), validator).unwrap().partition().unwrap()
}

fn numeric_rows() -> impl Strategy<Value = Vec<(f64, String)>> {
    prop::collection::vec(
        (0.0..100.0f64, prop::sample::select(vec!["x", "y", "z"]).prop_map(String::from)),
        1..40,
    )
}

fn categorical_rows() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["north", "south", "east", "west"]).prop_map(String::from),
            prop::sample::select(vec!["x", "y", "z"]).prop_map(String::from),
        ),
        1..40,
    )
}

proptest! {
    #[test]
    fn finished_groups_partition_the_universe(
        rows in numeric_rows(),
        k in 1usize..6
    ) {
        let (ages, incomes): (Vec<f64>, Vec<String>) = rows.into_iter().unzip();
        let n = ages.len();
        let dataset = numeric_dataset(ages, incomes);
        let spec = spec_over("age", k);

        let finished = partition(&dataset, &spec);

        let mut indices: Vec<usize> = finished.iter().flat_map(|group| group.iter()).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..n).collect::<Vec<_>>());

        if finished.len() > 1 {
            prop_assert!(finished.iter().all(|group| group.len() >= k));
        } else {
            prop_assert_eq!(finished[0].len(), n);
        }
    }

    #[test]
    fn split_children_cover_the_parent_exactly(rows in numeric_rows()) {
        let (ages, incomes): (Vec<f64>, Vec<String>) = rows.into_iter().unzip();
        let n = ages.len();
        let dataset = numeric_dataset(ages, incomes);

        let parent = Group::universe(n);
        let (left, right) = Splitter::split(&dataset, "age", &parent).unwrap();

        prop_assert_eq!(left.len() + right.len(), n);
        let mut all: Vec<usize> = left.iter().chain(right.iter()).collect();
        all.sort_unstable();
        prop_assert_eq!(all, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn metric_ignores_group_order(rows in numeric_rows(), k in 1usize..6) {
        let (ages, incomes): (Vec<f64>, Vec<String>) = rows.into_iter().unzip();
        let dataset = numeric_dataset(ages, incomes);
        let spec = spec_over("age", k);

        let finished = partition(&dataset, &spec);
        let mut reversed = finished.clone();
        reversed.reverse();

        prop_assert_eq!(discernability_metric(&finished), discernability_metric(&reversed));
    }

    #[test]
    fn published_counts_sum_to_the_input_size(rows in numeric_rows(), k in 1usize..6) {
        let (ages, incomes): (Vec<f64>, Vec<String>) = rows.into_iter().unzip();
        let n = ages.len();
        let dataset = numeric_dataset(ages, incomes);
        let spec = spec_over("age", k);
        let finished = partition(&dataset, &spec);

        let lower = Aggregator::aggregate(&dataset, &spec, &finished, AggregatePolicy::Lower).unwrap();
        let upper = Aggregator::aggregate(&dataset, &spec, &finished, AggregatePolicy::Upper).unwrap();
        let records = Merger::merge(&[ColumnType::Numeric], &lower, &upper).unwrap();

        let published: usize = records.iter().map(|record| record.count).sum();
        prop_assert_eq!(published, n);
        prop_assert_eq!(Merger::expanded(&records).count(), n);
    }

    #[test]
    fn categorical_partitioning_is_deterministic(
        rows in categorical_rows(),
        k in 1usize..6
    ) {
        let (cities, incomes): (Vec<String>, Vec<String>) = rows.into_iter().unzip();
        let dataset = categorical_dataset(cities, incomes);
        let spec = spec_over("city", k);

        let first = partition(&dataset, &spec);
        let second = partition(&dataset, &spec);

        prop_assert_eq!(first, second);
    }
}
