// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Integration tests for the full query pipeline
//!
//! These tests drive the public entry points end to end: interpolation,
//! pattern parsing, filter compilation, and step execution against an
//! in-memory graph.

#[cfg(test)]
mod query_integration {
    use grapple::{
        query, query_with_options, Candidate, MemoryGraph, Param, Properties, QueryError,
        QueryOptions, Value,
    };

    fn props(pairs: &[(&str, Value)]) -> Properties {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    /// The shared scenario graph: two people, an animal, two places, and
    /// a handful of typed edges between them.
    fn sample_graph() -> MemoryGraph {
        let mut g = MemoryGraph::new();
        g.insert_vertex("foo", "Person", props(&[("name", "foo".into())]));
        g.insert_vertex("bar", "Person", props(&[("name", "bar".into())]));
        g.insert_vertex("cat", "Animal", props(&[("name", "cat".into())]));
        g.insert_vertex("home", "Place", props(&[("name", "Home".into())]));
        g.insert_vertex("pt", "Place", props(&[("name", "Petah Tikva".into())]));

        g.insert_edge("foo", "bar", "friend", Properties::new()).unwrap();
        g.insert_edge("bar", "foo", "friend", Properties::new()).unwrap();
        g.insert_edge("bar", "cat", "owns-a", Properties::new()).unwrap();
        g.insert_edge("bar", "cat", "likes-a", Properties::new()).unwrap();
        g.insert_edge("cat", "bar", "hates", props(&[("reason", "meow".into())]))
            .unwrap();
        g.insert_edge("foo", "home", "visited", props(&[("at", 1_700_000_000_000_i64.into())]))
            .unwrap();
        g.insert_edge("bar", "pt", "lives-in", props(&[("at", 1_700_000_000_000_i64.into())]))
            .unwrap();
        g
    }

    #[test]
    fn test_bad_syntax() {
        let g = sample_graph();
        let err = query(&g, &["p:Person)"], vec![]).unwrap_err();
        assert!(matches!(err, QueryError::Syntax(msg) if msg.contains("bad vertex string")));
    }

    #[test]
    fn test_basic_query() {
        let g = sample_graph();
        let result = query(&g, &["(p:Person)"], vec![]).unwrap();
        assert_eq!(result.vertices("p").unwrap().len(), 2);
    }

    #[test]
    fn test_basic_filtered_query() {
        let g = sample_graph();
        let result = query(&g, &[r#"(p:Person{name:"foo"})"#], vec![]).unwrap();
        let people = result.vertices("p").unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(
            people[0].property("name").and_then(Value::as_str),
            Some("foo")
        );
    }

    #[test]
    fn test_advanced_filtered_query() {
        let g = sample_graph();
        let result = query(
            &g,
            &["(p", ")"],
            vec![Param::predicate(|c: &Candidate<'_>| {
                c.property("name")
                    .and_then(Value::as_str)
                    .is_some_and(|name| name.contains('a'))
            })],
        )
        .unwrap();
        // bar, cat, Petah Tikva
        assert_eq!(result.vertices("p").unwrap().len(), 3);
    }

    #[test]
    fn test_match_against_edges() {
        let g = sample_graph();
        let result = query(&g, &["(:Person)-[e]->"], vec![]).unwrap();
        assert_eq!(result.edges("e").unwrap().len(), 6);
    }

    #[test]
    fn test_match_against_edges_with_type() {
        let g = sample_graph();
        let result = query(&g, &["(:Person)-[e:visited]->"], vec![]).unwrap();
        let edges = result.edges("e").unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(
            edges[0].origin.property("name").and_then(Value::as_str),
            Some("foo")
        );
    }

    #[test]
    fn test_match_against_edges_filtered() {
        let g = sample_graph();
        let result = query(
            &g,
            &["(:Person)-[e", "]->"],
            vec![Param::predicate(|c: &Candidate<'_>| c.property("at").is_some())],
        )
        .unwrap();
        // visited and lives-in both carry a timestamp
        assert_eq!(result.edges("e").unwrap().len(), 2);
    }

    #[test]
    fn test_match_against_full_path() {
        let g = sample_graph();
        let result = query(&g, &["(:Person)-->(v)"], vec![]).unwrap();
        assert_eq!(result.vertices("v").unwrap().len(), 5);
    }

    #[test]
    fn test_debug_steps_and_typed_targets() {
        let g = sample_graph();
        let result = query_with_options(
            &g,
            &["(:Person)-->(places:Place)"],
            vec![],
            QueryOptions {
                debug: true,
                ..QueryOptions::default()
            },
        )
        .unwrap();
        assert_eq!(result.steps.as_ref().map(Vec::len), Some(3));
        assert_eq!(result.vertices("places").unwrap().len(), 2);
    }

    #[test]
    fn test_incoming_edge_with_vertex_filter() {
        let g = sample_graph();
        let result = query(
            &g,
            &[r#"(:Place)<-[visits:visited]-(visitors:Person{name:"foo"})"#],
            vec![],
        )
        .unwrap();
        assert_eq!(result.edges("visits").unwrap().len(), 1);
        let visitors = result.vertices("visitors").unwrap();
        assert_eq!(visitors.len(), 1);
        assert_eq!(
            visitors[0].property("name").and_then(Value::as_str),
            Some("foo")
        );
    }

    #[test]
    fn test_anonymous_trailing_vertex() {
        let g = sample_graph();
        let result = query(&g, &["(any)-->()"], vec![]).unwrap();
        assert_eq!(result.vertices("any").unwrap().len(), g.vertex_count());
    }

    #[test]
    fn test_delayed_evaluation_incoming() {
        let g = sample_graph();
        let result = query(&g, &[r#"(?hated)<-[:hates{reason:"meow"}]-(haters)"#], vec![])
            .unwrap();

        let haters = result.vertices("haters").unwrap();
        assert_eq!(haters.len(), 1);
        assert_eq!(
            haters[0].property("name").and_then(Value::as_str),
            Some("cat")
        );

        let hated = result.vertices("hated").unwrap();
        assert_eq!(hated.len(), 1);
        assert_eq!(
            hated[0].property("name").and_then(Value::as_str),
            Some("bar")
        );
    }

    #[test]
    fn test_delayed_evaluation_outgoing() {
        let g = sample_graph();
        let result = query(&g, &[r#"(?haters)-[:hates{reason:"meow"}]->(hated)"#], vec![])
            .unwrap();

        let haters = result.vertices("haters").unwrap();
        assert_eq!(haters.len(), 1);
        assert_eq!(
            haters[0].property("name").and_then(Value::as_str),
            Some("cat")
        );

        let hated = result.vertices("hated").unwrap();
        assert_eq!(hated.len(), 1);
        assert_eq!(
            hated[0].property("name").and_then(Value::as_str),
            Some("bar")
        );
    }

    #[test]
    fn test_delayed_binding_excludes_unvisited_predecessors() {
        let g = sample_graph();
        // without the delayed marker, x would bind every vertex in the
        // store; with it, only the endpoints the hates-edge came through
        let result = query(&g, &["(?x)<-[:hates]-(y)"], vec![]).unwrap();
        let xs = result.vertices("x").unwrap();
        assert_eq!(xs.len(), 1);
        assert_eq!(xs[0].id, "bar");
    }

    #[test]
    fn test_injecting_non_functions() {
        let g = sample_graph();
        let name = "foo";
        let result = query(&g, &["({name:", "})-->(v)"], vec![Param::value(name)]).unwrap();
        assert_eq!(result.vertices("v").unwrap().len(), 2);
    }

    #[test]
    fn test_long_query() {
        let g = sample_graph();
        let result = query(
            &g,
            &["
            ()-[:friend]->(withFriends:Person)
              -[:owns-a]->(haters)
              -[:hates]->(hated)
            "],
            vec![],
        )
        .unwrap();

        assert_eq!(result.vertices("withFriends").unwrap().len(), 2);

        let haters = result.vertices("haters").unwrap();
        assert_eq!(haters.len(), 1);
        assert_eq!(
            haters[0].property("name").and_then(Value::as_str),
            Some("cat")
        );

        let hated = result.vertices("hated").unwrap();
        assert_eq!(hated.len(), 1);
        assert_eq!(
            hated[0].property("name").and_then(Value::as_str),
            Some("bar")
        );
    }

    #[test]
    fn test_directionality_swaps_endpoints() {
        let mut g = MemoryGraph::new();
        g.insert_vertex("a", "Node", Properties::new());
        g.insert_vertex("b", "Node", Properties::new());
        g.insert_edge("a", "b", "T", Properties::new()).unwrap();

        let result = query(&g, &["(?x)-[:T]->(y)"], vec![]).unwrap();
        assert_eq!(result.vertices("x").unwrap()[0].id, "a");
        assert_eq!(result.vertices("y").unwrap()[0].id, "b");

        let result = query(&g, &["(?x)<-[:T]-(y)"], vec![]).unwrap();
        assert_eq!(result.vertices("x").unwrap()[0].id, "b");
        assert_eq!(result.vertices("y").unwrap()[0].id, "a");
    }

    #[test]
    fn test_single_vertex_binds_store_enumeration() {
        let mut g = MemoryGraph::new();
        g.insert_vertex("c", "T", Properties::new());
        g.insert_vertex("a", "T", Properties::new());
        g.insert_vertex("x", "Other", Properties::new());
        g.insert_vertex("b", "T", Properties::new());

        let result = query(&g, &["(v:T)"], vec![]).unwrap();
        let ids: Vec<_> = result
            .vertices("v")
            .unwrap()
            .iter()
            .map(|v| v.id.clone())
            .collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_nested_literal_filter_round_trip() {
        let mut g = MemoryGraph::new();
        let mut meta = Properties::new();
        meta.insert("tags".to_string(), vec!["a", "b"].into());
        meta.insert("depth".to_string(), Value::Int(2));
        g.insert_vertex(
            "v1",
            "Doc",
            props(&[("meta", Value::Map(meta))]),
        );
        g.insert_vertex("v2", "Doc", Properties::new());

        let result = query(&g, &[r#"(d:Doc{meta:{tags:["a","b"]}})"#], vec![]).unwrap();
        let docs = result.vertices("d").unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "v1");

        // a list that is not deeply equal does not match
        let result = query(&g, &[r#"(d:Doc{meta:{tags:["a"]}})"#], vec![]).unwrap();
        assert!(result.vertices("d").unwrap().is_empty());
    }

    #[test]
    fn test_filter_grammar_violations_are_rejected() {
        let g = sample_graph();
        for clause in [
            "(p{name:someIdentifier})",
            r#"(p{name:lookup("foo")})"#,
            "(p{[computed]:1})",
            "(p{n:1+2})",
        ] {
            let err = query(&g, &[clause], vec![]).unwrap_err();
            assert!(
                matches!(err, QueryError::Syntax(_)),
                "clause {clause} should be rejected"
            );
        }
    }

    #[test]
    fn test_spec_scenario_counts() {
        let mut g = MemoryGraph::new();
        g.insert_vertex("foo", "Person", props(&[("name", "foo".into())]));
        g.insert_vertex("bar", "Person", props(&[("name", "bar".into())]));
        g.insert_vertex("cat", "Animal", props(&[("name", "cat".into())]));
        g.insert_edge("foo", "bar", "friend", Properties::new()).unwrap();
        g.insert_edge("bar", "foo", "friend", Properties::new()).unwrap();
        g.insert_edge("bar", "cat", "owns-a", Properties::new()).unwrap();

        let result = query(&g, &["(p:Person)"], vec![]).unwrap();
        assert_eq!(result.vertices("p").unwrap().len(), 2);

        let result = query(&g, &[r#"(p:Person{name:"foo"})"#], vec![]).unwrap();
        let people = result.vertices("p").unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(
            people[0].property("name").and_then(Value::as_str),
            Some("foo")
        );

        let result = query(&g, &["(:Person)-[e]->"], vec![]).unwrap();
        assert_eq!(result.edges("e").unwrap().len(), 3);
    }
}
