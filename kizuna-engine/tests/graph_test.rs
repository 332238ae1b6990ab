//! End-to-end graph build scenarios.

use kizuna_core::config::WeightsConfig;
use kizuna_core::types::collections::FxHashSet;
use kizuna_core::types::Person;
use kizuna_engine::dictionary::{CategoryEntry, Dictionaries};
use kizuna_engine::{build_graph, edge_rows, edge_table_csv, GraphParams};

fn dicts() -> Dictionaries {
    let mut dicts = Dictionaries::default();
    dicts
        .city_to_pref
        .insert("名古屋".to_string(), "愛知県".to_string());
    dicts
        .city_to_pref
        .insert("豊田".to_string(), "愛知県".to_string());
    dicts
        .pref_to_region
        .insert("愛知県".to_string(), "東海".to_string());
    dicts.categories.insert(
        "ランニング".to_string(),
        CategoryEntry {
            category: "hobby".to_string(),
            sub1: "sports".to_string(),
            sub2: "running".to_string(),
        },
    );
    dicts.categories.insert(
        "登山".to_string(),
        CategoryEntry {
            category: "hobby".to_string(),
            sub1: "sports".to_string(),
            sub2: "climbing".to_string(),
        },
    );
    dicts.rebuild_regions();
    dicts
}

fn params(min_edge_score: f64) -> GraphParams {
    GraphParams {
        min_edge_score,
        enable_sub1_link: false,
        enable_sub2_link: false,
        ..GraphParams::default()
    }
}

#[test]
fn test_shared_hobby_edge_is_threshold_inclusive() {
    let people = vec![
        Person::new("佐藤", vec!["ランニング".to_string()]),
        Person::new("鈴木", vec!["ランニング".to_string()]),
    ];

    // hobby base weight 1.0; the threshold is inclusive
    let graph = build_graph(
        &people,
        &dicts(),
        &WeightsConfig::default(),
        &params(1.0),
        None,
    )
    .unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.tie("佐藤", "鈴木").unwrap().score, 1.0);

    let graph = build_graph(
        &people,
        &dicts(),
        &WeightsConfig::default(),
        &params(1.5),
        None,
    )
    .unwrap();
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_city_and_prefecture_meet_at_the_shared_levels() {
    // One person names the city, the other the prefecture. They share the
    // prefecture and region tokens but not the city token.
    let people = vec![
        Person::new("佐藤", vec!["名古屋".to_string()]),
        Person::new("鈴木", vec!["愛知県".to_string()]),
    ];
    let graph = build_graph(
        &people,
        &dicts(),
        &WeightsConfig::default(),
        &params(2.0),
        None,
    )
    .unwrap();

    let tie = graph.tie("佐藤", "鈴木").unwrap();
    // pref 4.0 + region 2.0
    assert_eq!(tie.score, 6.0);
    assert_eq!(tie.common_count, 2);
    assert!(tie.common.contains(&"愛知県".to_string()));
    assert!(tie.common.contains(&"東海".to_string()));
}

#[test]
fn test_two_cities_in_one_prefecture_share_the_upper_levels() {
    let people = vec![
        Person::new("佐藤", vec!["名古屋".to_string()]),
        Person::new("鈴木", vec!["豊田".to_string()]),
    ];
    let graph = build_graph(
        &people,
        &dicts(),
        &WeightsConfig::default(),
        &params(2.0),
        None,
    )
    .unwrap();

    let tie = graph.tie("佐藤", "鈴木").unwrap();
    assert_eq!(tie.score, 6.0);
    assert!(!tie.common.contains(&"名古屋".to_string()));
}

#[test]
fn test_link_tokens_bridge_different_hobbies() {
    let people = vec![
        Person::new("佐藤", vec!["ランニング".to_string()]),
        Person::new("鈴木", vec!["登山".to_string()]),
    ];

    // Without links the pair shares nothing.
    let graph = build_graph(
        &people,
        &dicts(),
        &WeightsConfig::default(),
        &params(0.5),
        None,
    )
    .unwrap();
    assert_eq!(graph.edge_count(), 0);

    // With sub1 links enabled, the shared "sports" subcategory carries a
    // loose tie worth the link weight.
    let mut p = params(0.5);
    p.enable_sub1_link = true;
    let graph = build_graph(&people, &dicts(), &WeightsConfig::default(), &p, None).unwrap();
    let tie = graph.tie("佐藤", "鈴木").unwrap();
    assert_eq!(tie.score, 0.6);
    assert_eq!(tie.common.to_vec(), vec!["sub1:sports".to_string()]);
}

#[test]
fn test_scores_are_symmetric() {
    let people_ab = vec![
        Person::new("佐藤", vec!["名古屋".to_string(), "ランニング".to_string()]),
        Person::new("鈴木", vec!["豊田".to_string()]),
    ];
    let people_ba: Vec<Person> = people_ab.iter().rev().cloned().collect();

    let graph_ab = build_graph(
        &people_ab,
        &dicts(),
        &WeightsConfig::default(),
        &params(1.0),
        None,
    )
    .unwrap();
    let graph_ba = build_graph(
        &people_ba,
        &dicts(),
        &WeightsConfig::default(),
        &params(1.0),
        None,
    )
    .unwrap();

    assert_eq!(
        graph_ab.tie("佐藤", "鈴木").unwrap().score,
        graph_ba.tie("鈴木", "佐藤").unwrap().score,
    );
}

#[test]
fn test_subset_matching_nobody_yields_empty_graph() {
    let people = vec![
        Person::new("佐藤", vec!["温泉".to_string()]),
        Person::new("鈴木", vec!["温泉".to_string()]),
    ];
    let mut p = params(0.5);
    p.subset = Some(
        ["存在しない".to_string()]
            .into_iter()
            .collect::<FxHashSet<String>>(),
    );
    let graph = build_graph(&people, &dicts(), &WeightsConfig::default(), &p, None).unwrap();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_edge_table_ranks_and_joins() {
    let people = vec![
        Person::new("佐藤", vec!["名古屋".to_string(), "ランニング".to_string()]),
        Person::new("鈴木", vec!["名古屋".to_string(), "ランニング".to_string()]),
        Person::new("高橋", vec!["ランニング".to_string()]),
    ];
    let graph = build_graph(
        &people,
        &dicts(),
        &WeightsConfig::default(),
        &params(1.0),
        None,
    )
    .unwrap();

    let rows = edge_rows(&graph);
    assert_eq!(rows.len(), 3);
    // The full-overlap pair ranks first: city 6 + pref 4 + region 2 + hobby 1
    assert_eq!(rows[0].score, 13.0);
    assert_eq!(rows[0].common_count, 4);
    assert!(rows[0].common_features.contains('、'));
    assert!(rows[1].score >= rows[2].score);

    let csv = edge_table_csv(&graph);
    assert!(csv.starts_with("a,b,score,common_count,common_features\n"));
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn test_weight_overrides_scale_plain_tokens() {
    let mut dicts = dicts();
    dicts.subcat_weights.insert(
        (
            "hobby".to_string(),
            "sports".to_string(),
            "*".to_string(),
        ),
        2.0,
    );
    let people = vec![
        Person::new("佐藤", vec!["ランニング".to_string()]),
        Person::new("鈴木", vec!["ランニング".to_string()]),
    ];
    let graph = build_graph(
        &people,
        &dicts,
        &WeightsConfig::default(),
        &params(1.0),
        None,
    )
    .unwrap();
    // hobby base 1.0 × override 2.0
    assert_eq!(graph.tie("佐藤", "鈴木").unwrap().score, 2.0);
}
