// Unit tests for Restaurant Search

use restaurant_search::core::{
    filters::{compile_filter, Clause, FilterCompiler, FilterError},
    merge::merge_dataset,
    scoring::{rank, score_edit_distance, score_jaro, EditDistanceScorer, JaroScorer, Scorer},
    similarity::{jaro, token_set_ratio},
};
use restaurant_search::models::{Cuisine, Restaurant, RestaurantRecord};

fn record(name: &str, rating: u8, distance: u32, price: u32) -> RestaurantRecord {
    RestaurantRecord {
        name: name.to_string(),
        cuisine: "Indian".to_string(),
        customer_rating: rating,
        distance,
        price,
    }
}

#[test]
fn test_compile_is_deterministic() {
    for input in ["q", "q,3", "q,3,4", "q,3,4,25", "q,3,4,25,thai", "q,,,,"] {
        assert_eq!(compile_filter(input), compile_filter(input));
    }
}

#[test]
fn test_absent_values_default_to_zero() {
    let compiled = compile_filter("q,,,").unwrap();

    assert_eq!(compiled.distance, 0);
    assert_eq!(compiled.rating, 0);
    assert_eq!(compiled.price, 0);
    assert_eq!(compiled.cuisine, None);
    assert!(compiled.predicate.is_empty());
}

#[test]
fn test_low_prices_behave_like_no_price() {
    let unset = compile_filter("q,4,3").unwrap().predicate;

    for price in 1..10 {
        let compiled = compile_filter(&format!("q,4,3,{}", price)).unwrap();
        assert_eq!(compiled.price, 0);
        assert_eq!(compiled.predicate, unset);
    }
}

#[test]
fn test_digit_cuisine_is_absent() {
    for cuisine in ["7", "42", "0123"] {
        let compiled = compile_filter(&format!("q,1,1,10,{}", cuisine)).unwrap();
        assert_eq!(compiled.cuisine, None);
        assert!(!compiled
            .predicate
            .clauses()
            .iter()
            .any(|c| matches!(c, Clause::CuisineContains(_))));
    }
}

#[test]
fn test_distance_and_price_round_trip() {
    let compiled = compile_filter("query,5,,15").unwrap();

    assert_eq!(compiled.expression(), "distance <= 5 and price <= 15");
    assert!(compiled.predicate.matches(&record("A", 1, 5, 15)));
    assert!(compiled.predicate.matches(&record("A", 5, 0, 0)));
    assert!(!compiled.predicate.matches(&record("A", 5, 6, 15)));
    assert!(!compiled.predicate.matches(&record("A", 5, 5, 16)));
}

#[test]
fn test_every_five_segment_combination_is_independent() {
    // distance, rating, price, cuisine each on or off
    for mask in 0u8..16 {
        let distance = if mask & 1 != 0 { "3" } else { "" };
        let rating = if mask & 2 != 0 { "4" } else { "" };
        let price = if mask & 4 != 0 { "20" } else { "5" };
        let cuisine = if mask & 8 != 0 { "indian" } else { "" };

        let input = format!("q,{},{},{},{}", distance, rating, price, cuisine);
        let compiled = compile_filter(&input).unwrap();

        assert_eq!(
            compiled.predicate.clauses().len(),
            mask.count_ones() as usize,
            "unexpected clauses for {:?}",
            input
        );
    }
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        compile_filter("q,1.5"),
        Err(FilterError::InvalidNumber { field: "distance", .. })
    ));
    assert!(matches!(
        compile_filter("q,1,five"),
        Err(FilterError::InvalidNumber { field: "rating", .. })
    ));
    assert!(matches!(
        compile_filter("q,1,2,3,4,5"),
        Err(FilterError::TooManySegments { found: 6, .. })
    ));
}

#[test]
fn test_price_gate_is_configurable() {
    let compiler = FilterCompiler::new(0);
    assert_eq!(compiler.compile("q,,,5").unwrap().expression(), "price <= 5");
    assert!(compiler.compile("q,,,").unwrap().predicate.is_empty());
}

#[test]
fn test_merge_example() {
    let restaurants = vec![Restaurant {
        name: "Hearty ChowClick".to_string(),
        customer_rating: 3,
        distance: 4,
        price: 20,
        cuisine_id: Some(1),
    }];
    let cuisines = vec![Cuisine {
        id: 1,
        name: "Italian".to_string(),
    }];

    let merged = merge_dataset(&restaurants, &cuisines);

    assert_eq!(
        merged,
        vec![RestaurantRecord {
            name: "Hearty Chow Click".to_string(),
            cuisine: "Italian".to_string(),
            customer_rating: 3,
            distance: 4,
            price: 20,
        }]
    );
}

#[test]
fn test_threshold_splits_candidates() {
    let candidates = vec![
        record("Spicy Palace", 4, 2, 15),
        record("Spicy Place", 3, 1, 25),
        record("Deliciousgenix", 5, 9, 40),
        record("Xqbbw", 1, 3, 10),
    ];

    for scorer in [&EditDistanceScorer::default() as &dyn Scorer, &JaroScorer::default()] {
        let results = rank(scorer, "spicy palace", &candidates);

        for candidate in &candidates {
            let score = scorer.similarity("spicy palace", &candidate.name);
            let included = results.iter().any(|r| r.name == candidate.name);
            assert_eq!(included, score > 0.3, "{} scored {}", candidate.name, score);
        }
    }
}

#[test]
fn test_edit_distance_ranking_example() {
    let candidates = vec![
        record("Spicy Place", 5, 1, 40),
        record("Spicy Palace", 4, 2, 15),
    ];

    let results = score_edit_distance("spicy palace", &candidates);

    assert_eq!(results[0].name, "Spicy Palace");
    assert!((results[0].score - 1.0).abs() < 1e-9);
    assert_eq!(results[1].name, "Spicy Place");
    assert!(results[1].score < 1.0);
}

#[test]
fn test_jaro_ranking_example() {
    let candidates = vec![
        record("Spicy Palace", 4, 6, 15),
        record("Spicy Pantry", 4, 2, 15),
    ];

    let results = score_jaro("spicy palace", &candidates);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, "Spicy Pantry");
    assert_eq!(results[1].name, "Spicy Palace");
    assert!(results[1].score > results[0].score);
}

#[test]
fn test_metrics_are_bounded() {
    let pairs = [
        ("spicy palace", "Spicy Palace"),
        ("a", "b"),
        ("", "x"),
        ("bistro", "the french bistro"),
    ];

    for (a, b) in pairs {
        let t = token_set_ratio(a, b);
        let j = jaro(a, b);
        assert!((0.0..=1.0).contains(&t));
        assert!((0.0..=1.0).contains(&j));
    }
}
