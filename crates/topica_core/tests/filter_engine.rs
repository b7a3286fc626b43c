use topica_core::{
    filter_topics, parse_catalog, Catalog, CategoryFilter, FilterParams, SubtopicNarrowing,
    TopicView,
};

fn sample_catalog() -> Catalog {
    parse_catalog(
        r#"{
            "topics": [
                {
                    "name": "Rust",
                    "notes": null,
                    "subTopics": [
                        {"title": "Ownership", "url": null, "notes": null, "tags": ["memory"]},
                        {"title": "Async", "url": null, "notes": null, "tags": ["tokio", "futures"]}
                    ]
                },
                {
                    "name": "Databases",
                    "notes": null,
                    "subTopics": [
                        {"title": "B-Trees", "url": null, "notes": null, "tags": ["storage"]},
                        {"title": "Write-ahead logging", "url": null, "notes": null, "tags": ["durability"]}
                    ]
                },
                {
                    "name": "Networking",
                    "notes": null,
                    "subTopics": [
                        {"title": "TCP", "url": null, "notes": null, "tags": ["transport"]}
                    ]
                }
            ],
            "categories": [
                {
                    "name": "Systems",
                    "notes": null,
                    "subCategories": [
                        {"topic": "Rust", "label": "Rust"},
                        {"topic": "Networking", "label": "Net"}
                    ]
                },
                {
                    "name": "Ghost",
                    "notes": null,
                    "subCategories": [
                        {"topic": "NoSuchTopic", "label": "dangling"}
                    ]
                }
            ]
        }"#,
    )
    .expect("sample document should parse")
}

fn names<'a>(views: &[TopicView<'a>]) -> Vec<&'a str> {
    views.iter().map(|view| view.name()).collect()
}

#[test]
fn all_and_blank_query_pass_the_full_catalog_through() {
    let catalog = sample_catalog();
    let views = filter_topics(&catalog, &FilterParams::new());

    assert_eq!(names(&views), vec!["Rust", "Databases", "Networking"]);
    // Full pass-through keeps every subtopic too.
    assert_eq!(views[0].sub_topics.len(), 2);
    assert_eq!(views[1].sub_topics.len(), 2);
}

#[test]
fn whitespace_query_is_no_search_constraint() {
    let catalog = sample_catalog();
    let params = FilterParams {
        query: "   ".to_string(),
        ..FilterParams::new()
    };

    assert_eq!(names(&filter_topics(&catalog, &params)).len(), 3);
}

#[test]
fn category_stage_keeps_referenced_topics_in_source_order() {
    let catalog = sample_catalog();
    let params = FilterParams {
        category: CategoryFilter::Name("Systems".to_string()),
        ..FilterParams::new()
    };

    assert_eq!(names(&filter_topics(&catalog, &params)), vec!["Rust", "Networking"]);
}

#[test]
fn unknown_category_is_a_no_op_not_an_empty_result() {
    let catalog = sample_catalog();
    let params = FilterParams {
        category: CategoryFilter::Name("No Such Category".to_string()),
        ..FilterParams::new()
    };

    assert_eq!(names(&filter_topics(&catalog, &params)), vec!["Rust", "Databases", "Networking"]);
}

#[test]
fn dangling_topic_reference_contributes_nothing() {
    let catalog = sample_catalog();
    let params = FilterParams {
        category: CategoryFilter::Name("Ghost".to_string()),
        ..FilterParams::new()
    };

    assert!(filter_topics(&catalog, &params).is_empty());
}

#[test]
fn category_filter_parse_folds_the_all_sentinel() {
    assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
    assert_eq!(CategoryFilter::parse(" ALL "), CategoryFilter::All);
    assert_eq!(
        CategoryFilter::parse("Systems"),
        CategoryFilter::Name("Systems".to_string())
    );
}

#[test]
fn query_matches_topic_name_case_insensitively() {
    let catalog = sample_catalog();
    let params = FilterParams {
        query: "rUsT".to_string(),
        ..FilterParams::new()
    };

    assert_eq!(names(&filter_topics(&catalog, &params)), vec!["Rust"]);
}

#[test]
fn query_matches_subtopic_title_and_tag_label() {
    let catalog = sample_catalog();

    let by_title = FilterParams {
        query: "write-ahead".to_string(),
        ..FilterParams::new()
    };
    assert_eq!(names(&filter_topics(&catalog, &by_title)), vec!["Databases"]);

    let by_tag = FilterParams {
        query: "tokio".to_string(),
        ..FilterParams::new()
    };
    assert_eq!(names(&filter_topics(&catalog, &by_tag)), vec!["Rust"]);
}

#[test]
fn query_matching_nothing_yields_empty_result() {
    let catalog = sample_catalog();
    let params = FilterParams {
        query: "zzz".to_string(),
        ..FilterParams::new()
    };

    assert!(filter_topics(&catalog, &params).is_empty());
}

#[test]
fn keep_all_policy_retains_every_subtopic_of_a_tag_matched_topic() {
    let catalog = sample_catalog();
    let params = FilterParams {
        query: "tokio".to_string(),
        narrowing: SubtopicNarrowing::KeepAll,
        ..FilterParams::new()
    };

    let views = filter_topics(&catalog, &params);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].sub_topics.len(), 2);
}

#[test]
fn matches_only_policy_narrows_subtopics_of_subtopic_matched_topics() {
    let catalog = sample_catalog();
    let params = FilterParams {
        query: "tokio".to_string(),
        narrowing: SubtopicNarrowing::MatchesOnly,
        ..FilterParams::new()
    };

    let views = filter_topics(&catalog, &params);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].sub_topics.len(), 1);
    assert_eq!(views[0].sub_topics[0].title, "Async");
}

#[test]
fn matches_only_policy_keeps_all_subtopics_when_the_name_matched() {
    let catalog = sample_catalog();
    let params = FilterParams {
        query: "databases".to_string(),
        narrowing: SubtopicNarrowing::MatchesOnly,
        ..FilterParams::new()
    };

    let views = filter_topics(&catalog, &params);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].sub_topics.len(), 2);
}

#[test]
fn every_survivor_has_a_witnessing_match() {
    let catalog = sample_catalog();
    let needle = "t";
    let params = FilterParams {
        query: needle.to_string(),
        ..FilterParams::new()
    };

    for view in filter_topics(&catalog, &params) {
        let name_hit = view.topic.name.to_lowercase().contains(needle);
        let sub_hit = view.topic.sub_topics.iter().any(|sub| {
            sub.title.to_lowercase().contains(needle)
                || sub.tags.iter().any(|tag| tag.label.to_lowercase().contains(needle))
        });
        assert!(name_hit || sub_hit, "false positive: {}", view.name());
    }
}

#[test]
fn result_is_a_source_order_subsequence() {
    let catalog = sample_catalog();
    let params = FilterParams {
        query: "t".to_string(),
        ..FilterParams::new()
    };

    let result = names(&filter_topics(&catalog, &params));
    let source: Vec<&str> = catalog.topics.iter().map(|t| t.name.as_str()).collect();

    let mut cursor = source.iter();
    for name in &result {
        assert!(
            cursor.any(|candidate| candidate == name),
            "`{name}` out of source order"
        );
    }
}

#[test]
fn category_and_query_compose() {
    // Catalog ["A", "B"], category "X" maps to "A" only.
    let catalog = parse_catalog(
        r#"{
            "topics": [
                {"name": "A", "notes": null, "subTopics": []},
                {"name": "B", "notes": null, "subTopics": []}
            ],
            "categories": [
                {"name": "X", "notes": null, "subCategories": [{"topic": "A", "label": "a"}]}
            ]
        }"#,
    )
    .expect("document should parse");

    let by_category = FilterParams {
        category: CategoryFilter::Name("X".to_string()),
        ..FilterParams::new()
    };
    assert_eq!(names(&filter_topics(&catalog, &by_category)), vec!["A"]);

    let with_dead_query = FilterParams {
        category: CategoryFilter::Name("X".to_string()),
        query: "zzz".to_string(),
        ..FilterParams::new()
    };
    assert!(filter_topics(&catalog, &with_dead_query).is_empty());
}

#[test]
fn identical_invocations_agree() {
    let catalog = sample_catalog();
    let params = FilterParams {
        category: CategoryFilter::Name("Systems".to_string()),
        query: "tcp".to_string(),
        narrowing: SubtopicNarrowing::MatchesOnly,
    };

    let first = filter_topics(&catalog, &params);
    let second = filter_topics(&catalog, &params);
    assert_eq!(first, second);
}

#[test]
fn empty_catalog_filters_to_empty() {
    let catalog = Catalog {
        topics: Vec::new(),
        categories: Vec::new(),
    };
    let params = FilterParams {
        query: "anything".to_string(),
        ..FilterParams::new()
    };

    assert!(filter_topics(&catalog, &FilterParams::new()).is_empty());
    assert!(filter_topics(&catalog, &params).is_empty());
}
