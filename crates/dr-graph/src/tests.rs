//! Unit tests for dr-graph.
//!
//! All tests use hand-built graphs; the delivery map mirrors the seven-node
//! layout the courier demo ships with.

#[cfg(test)]
mod helpers {
    use dr_core::{CostModel, Point, RouteConfig};
    use crate::{RouteEnumerator, RouteGraph, RouteGraphBuilder};

    /// The seven-node delivery map: seven simple routes from A to G.
    ///
    /// Edge insertion order (fixes neighbour order):
    /// AB, AC, BD, CD, CF, BE, DE, FG, EG.
    pub fn delivery_map() -> RouteGraph {
        let mut b = RouteGraphBuilder::new();
        for (name, x, y) in [
            ("A", 100.0, 250.0),
            ("B", 300.0, 100.0),
            ("C", 300.0, 400.0),
            ("D", 500.0, 250.0),
            ("E", 700.0, 100.0),
            ("F", 700.0, 400.0),
            ("G", 900.0, 250.0),
        ] {
            b.add_node(name, Point::new(x, y));
        }
        for (s, t, w, label) in [
            ("A", "B", 49.0, "49cm"),
            ("A", "C", 65.0, "65cm"),
            ("B", "D", 60.0, "60cm"),
            ("C", "D", 62.0, "62cm"),
            ("C", "F", 61.0, "61cm"),
            ("B", "E", 64.5, "64,5cm"),
            ("D", "E", 45.0, "45cm"),
            ("F", "G", 55.0, "55cm"),
            ("E", "G", 44.0, "44cm"),
        ] {
            b.add_edge_by_name(s, t, w, Some(label.to_owned()));
        }
        b.build()
    }

    pub fn enumerator(model: CostModel) -> RouteEnumerator {
        RouteEnumerator::new(delivery_map(), RouteConfig::with_model(model))
    }

    pub fn names(graph: &RouteGraph, route: &crate::Route) -> String {
        route.node_names(graph).concat()
    }

    pub fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
    }
}

// ── Builder & graph structure ──────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use dr_core::{EdgeId, Point};
    use crate::RouteGraphBuilder;

    #[test]
    fn require_reports_unknown_names() {
        let graph = super::helpers::delivery_map();
        assert_eq!(graph.require("D").unwrap(), graph.node("D").unwrap());
        assert!(matches!(graph.require("Z"), Err(dr_core::DrError::NodeNotFound(n)) if n == "Z"));
    }

    #[test]
    fn empty_build() {
        let graph = RouteGraphBuilder::new().build();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn single_edge_is_undirected() {
        let mut b = RouteGraphBuilder::new();
        let a = b.add_node("A", Point::new(0.0, 0.0));
        let c = b.add_node("C", Point::new(1.0, 0.0));
        let e = b.add_edge(a, c, 12.0, None);
        let graph = b.build();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), vec![(c, e)]);
        assert_eq!(graph.neighbors(c).collect::<Vec<_>>(), vec![(a, e)]);
        assert_eq!(graph.edge_weight(e), 12.0);
    }

    #[test]
    fn neighbours_follow_insertion_order() {
        let graph = super::helpers::delivery_map();
        let d = graph.node("D").unwrap();
        let order: Vec<&str> = graph.neighbors(d).map(|(n, _)| graph.node_name(n)).collect();
        // BD, CD, DE in insertion order
        assert_eq!(order, ["B", "C", "E"]);
    }

    #[test]
    fn degrees() {
        let graph = super::helpers::delivery_map();
        let degree = |name: &str| graph.neighbors(graph.node(name).unwrap()).count();
        assert_eq!(degree("A"), 2);
        assert_eq!(degree("B"), 3);
        assert_eq!(degree("C"), 3);
        assert_eq!(degree("E"), 3);
        assert_eq!(degree("G"), 2);
    }

    #[test]
    fn self_loop_has_one_arc() {
        let mut b = RouteGraphBuilder::new();
        let a = b.add_node("A", Point::new(0.0, 0.0));
        b.add_edge(a, a, 1.0, None);
        let graph = b.build();
        assert_eq!(graph.neighbors(a).count(), 1);
    }

    #[test]
    fn redeclared_node_keeps_id_and_first_position() {
        let mut b = RouteGraphBuilder::new();
        let first = b.add_node("A", Point::new(1.0, 2.0));
        let again = b.add_node("A", Point::new(9.0, 9.0));
        assert_eq!(first, again);
        let graph = b.build();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node_pos(first), Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn unknown_endpoint_is_interned_without_position() {
        let mut b = RouteGraphBuilder::new();
        b.add_node("A", Point::new(0.0, 0.0));
        b.add_edge_by_name("A", "Z", 3.0, None);
        let graph = b.build();

        let z = graph.node("Z").expect("Z interned");
        assert_eq!(graph.node_pos(z), None);
        assert_eq!(graph.neighbors(z).count(), 1);

        // Declaring it afterwards fills in the position.
        let mut b = RouteGraphBuilder::new();
        b.add_edge_by_name("A", "Z", 3.0, None);
        let z = b.add_node("Z", Point::new(5.0, 5.0));
        assert_eq!(b.build().node_pos(z), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn out_of_range_edge_is_not_traversable() {
        let mut b = RouteGraphBuilder::new();
        let a = b.add_node("A", Point::new(0.0, 0.0));
        b.add_edge(a, dr_core::NodeId(42), 1.0, None);
        let graph = b.build();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(a).count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn edge_key_and_label() {
        let graph = super::helpers::delivery_map();
        // BE was the sixth edge inserted.
        let be = EdgeId(5);
        assert_eq!(graph.edge_key(be), "BE");
        assert_eq!(graph.edge_label(be), Some("64,5cm"));

        // Travelled from E the key still says "BE".
        let e = graph.node("E").unwrap();
        let (_, from_e) = graph.neighbors(e).find(|&(n, _)| graph.node_name(n) == "B").unwrap();
        assert_eq!(graph.edge_key(from_e), "BE");
    }

    #[test]
    fn lookup_by_key() {
        let graph = super::helpers::delivery_map();
        assert_eq!(graph.edge_by_key("BE"), Some(EdgeId(5)));
        assert_eq!(graph.edge_by_key("AB"), Some(EdgeId(0)));
        // Declared order only.
        assert_eq!(graph.edge_by_key("EB"), None);
        assert_eq!(graph.edge_by_key("BG"), None);

        let keys: Vec<String> = graph.edges().map(|e| graph.edge_key(e)).collect();
        assert_eq!(keys, ["AB", "AC", "BD", "CD", "CF", "BE", "DE", "FG", "EG"]);
    }

    #[test]
    fn parallel_edges_share_first_key() {
        let mut b = RouteGraphBuilder::new();
        let a = b.add_node("A", Point::new(0.0, 0.0));
        let c = b.add_node("C", Point::new(1.0, 0.0));
        let first = b.add_edge(a, c, 5.0, None);
        b.add_edge(a, c, 7.0, None);
        let graph = b.build();
        assert_eq!(graph.edge_by_key("AC"), Some(first));
        assert_eq!(graph.edges().count(), 2);
    }

    #[test]
    fn empty_label_is_absent() {
        let mut b = RouteGraphBuilder::new();
        let a = b.add_node("A", Point::new(0.0, 0.0));
        let c = b.add_node("C", Point::new(1.0, 0.0));
        let e = b.add_edge(a, c, 1.0, Some(String::new()));
        assert_eq!(b.build().edge_label(e), None);
    }
}

// ── Enumeration ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod enumeration {
    use dr_core::{CostModel, Point, RouteConfig};
    use crate::{RouteEnumerator, RouteGraphBuilder};
    use super::helpers::{assert_close, enumerator, names};

    #[test]
    fn delivery_map_all_routes_by_distance() {
        let en = enumerator(CostModel::Distance);
        let routes = en.enumerate("A", "G");
        let got: Vec<(String, f64)> = routes
            .iter()
            .map(|r| (names(en.graph(), r), r.cost.distance))
            .collect();

        assert_eq!(
            got,
            vec![
                ("ABEG".to_owned(), 157.5),
                ("ACFG".to_owned(), 181.0),
                ("ABDEG".to_owned(), 198.0),
                ("ACDEG".to_owned(), 216.0),
                ("ABDCFG".to_owned(), 287.0),
                ("ACDBEG".to_owned(), 295.5),
                ("ABEDCFG".to_owned(), 336.5),
            ]
        );
    }

    #[test]
    fn shortest_route_edges_and_time() {
        let en = enumerator(CostModel::Distance);
        let best = &en.enumerate("A", "G")[0];
        assert_eq!(best.edge_keys(en.graph()), ["AB", "BE", "EG"]);
        assert_eq!(best.node_names(en.graph()), ["A", "B", "E", "G"]);
        // 60 units/hour: one unit per minute, no penalty.
        assert_eq!(best.cost.time_min, 157.5);
        assert_eq!(best.cost.penalty_min, 0.0);
    }

    #[test]
    fn reverse_direction_finds_same_paths() {
        let en = enumerator(CostModel::Distance);
        let forward = en.enumerate("A", "G");
        let backward = en.enumerate("G", "A");
        assert_eq!(forward.len(), backward.len());
        for (f, b) in forward.iter().zip(&backward) {
            assert_eq!(f.cost.distance, b.cost.distance);
        }
        assert_eq!(names(en.graph(), &backward[0]), "GEBA");
    }

    #[test]
    fn every_route_is_simple_and_connected() {
        let en = enumerator(CostModel::Distance);
        let graph = en.graph();
        for route in en.enumerate("B", "F") {
            let mut seen = route.nodes.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), route.nodes.len(), "repeated node");

            assert_eq!(route.edges.len() + 1, route.nodes.len());
            let mut total = 0.0;
            for (pair, &edge) in route.nodes.windows(2).zip(&route.edges) {
                let (a, b) = graph.edge_ends[edge.index()];
                assert!((a, b) == (pair[0], pair[1]) || (b, a) == (pair[0], pair[1]));
                total += graph.edge_weight(edge);
            }
            assert_close(route.cost.distance, total);
            assert_eq!(graph.node_name(route.nodes[0]), "B");
            assert_eq!(graph.node_name(*route.nodes.last().unwrap()), "F");
        }
    }

    #[test]
    fn sorted_ascending() {
        for model in [CostModel::Distance, CostModel::turn_angle(), CostModel::turn_count()] {
            let en = enumerator(model);
            let routes = en.enumerate("C", "E");
            assert!(!routes.is_empty());
            for w in routes.windows(2) {
                assert!(w[0].cost.metric(model) <= w[1].cost.metric(model), "{model}");
            }
        }
    }

    #[test]
    fn same_node_is_excluded() {
        let en = enumerator(CostModel::Distance);
        assert!(en.enumerate("A", "A").is_empty());
    }

    #[test]
    fn unknown_names_yield_nothing() {
        let en = enumerator(CostModel::Distance);
        assert!(en.enumerate("A", "Q").is_empty());
        assert!(en.enumerate("Q", "G").is_empty());
    }

    #[test]
    fn isolated_start_and_unreachable_end() {
        let mut b = RouteGraphBuilder::new();
        let a = b.add_node("A", Point::new(0.0, 0.0));
        let c = b.add_node("C", Point::new(1.0, 0.0));
        let lone = b.add_node("L", Point::new(5.0, 5.0));
        b.add_edge(a, c, 1.0, None);
        let en = RouteEnumerator::new(b.build(), RouteConfig::default());

        assert!(en.enumerate_nodes(lone, a).is_empty());
        assert!(en.enumerate_nodes(a, lone).is_empty());
        assert_eq!(en.enumerate_nodes(a, c).len(), 1);
    }

    #[test]
    fn sibling_branches_reuse_nodes() {
        // S─A─C─T and S─B─C─T share C.
        let mut b = RouteGraphBuilder::new();
        for (s, t) in [("S", "A"), ("S", "B"), ("A", "C"), ("B", "C"), ("C", "T")] {
            b.add_edge_by_name(s, t, 1.0, None);
        }
        let en = RouteEnumerator::new(b.build(), RouteConfig::default());
        let got: Vec<String> = en.enumerate("S", "T").iter().map(|r| names(en.graph(), r)).collect();
        assert_eq!(got, ["SACT", "SBCT"]);
    }

    #[test]
    fn end_is_not_a_pass_through() {
        // S─E─X─S: routes to E must stop at E, never continue to X.
        let mut b = RouteGraphBuilder::new();
        for (s, t) in [("S", "E"), ("E", "X"), ("X", "S")] {
            b.add_edge_by_name(s, t, 1.0, None);
        }
        let en = RouteEnumerator::new(b.build(), RouteConfig::default());
        let got: Vec<String> = en.enumerate("S", "E").iter().map(|r| names(en.graph(), r)).collect();
        assert_eq!(got, ["SE", "SXE"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        // Two equal-length branches; the one whose first edge was inserted
        // first is discovered, and therefore listed, first.
        let mut b = RouteGraphBuilder::new();
        for (s, t) in [("S", "Y"), ("Y", "T"), ("S", "X"), ("X", "T")] {
            b.add_edge_by_name(s, t, 5.0, None);
        }
        let en = RouteEnumerator::new(b.build(), RouteConfig::default());
        let got: Vec<String> = en.enumerate("S", "T").iter().map(|r| names(en.graph(), r)).collect();
        assert_eq!(got, ["SYT", "SXT"]);
    }

    #[test]
    fn parallel_edges_are_distinct_routes() {
        let mut b = RouteGraphBuilder::new();
        b.add_edge_by_name("S", "T", 7.0, Some("slow".into()));
        b.add_edge_by_name("S", "T", 3.0, Some("fast".into()));
        let en = RouteEnumerator::new(b.build(), RouteConfig::default());
        let routes = en.enumerate("S", "T");
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].cost.distance, 3.0);
        assert_eq!(en.graph().edge_label(routes[0].edges[0]), Some("fast"));
    }

    #[test]
    fn dangling_endpoint_is_a_dead_end() {
        let mut b = RouteGraphBuilder::new();
        b.add_node("A", Point::new(0.0, 0.0));
        b.add_node("G", Point::new(1.0, 0.0));
        b.add_edge_by_name("A", "G", 1.0, None);
        b.add_edge_by_name("A", "ghost", 1.0, None);
        let en = RouteEnumerator::new(b.build(), RouteConfig::default());
        assert_eq!(en.enumerate("A", "G").len(), 1);
    }

    #[test]
    fn enumerator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RouteEnumerator>();
    }
}

// ── Cost models ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod cost {
    use dr_core::{CostModel, Point, RouteConfig};
    use crate::cost::{angle_severity, turn_count};
    use crate::{RouteEnumerator, RouteGraphBuilder};
    use super::helpers::{assert_close, enumerator, names};

    #[test]
    fn turn_count_adds_per_intermediate_node() {
        let en = enumerator(CostModel::turn_count());
        let routes = en.enumerate("A", "G");
        let abeg = routes.iter().find(|r| names(en.graph(), r) == "ABEG").unwrap();
        // two intermediate nodes × 0.5 min
        assert_close(abeg.cost.penalty_min, 1.0);
        assert_close(abeg.cost.time_min, 158.5);
    }

    #[test]
    fn turn_angle_on_delivery_map() {
        let en = enumerator(CostModel::turn_angle());
        let routes = en.enumerate("A", "G");
        let abeg = routes.iter().find(|r| names(en.graph(), r) == "ABEG").unwrap();

        // Both bends (at B and at E) have cos θ = -0.8.
        let angle = (-0.8f64).acos().to_degrees();
        let severity = 2.0 * 0.3 * (180.0 - angle) / 180.0;
        assert_close(abeg.cost.time_min, 157.5 * (1.0 + severity));
        assert_close(abeg.cost.penalty_min, 157.5 * severity);
    }

    #[test]
    fn short_paths_carry_no_penalty() {
        fn two_nodes() -> crate::RouteGraph {
            let mut b = RouteGraphBuilder::new();
            let s = b.add_node("S", Point::new(0.0, 0.0));
            let t = b.add_node("T", Point::new(0.0, 9.0));
            b.add_edge(s, t, 30.0, None);
            b.build()
        }

        let graph = two_nodes();
        let (s, t) = (graph.node("S").unwrap(), graph.node("T").unwrap());
        assert_eq!(turn_count(&[s, t]), 0);
        assert_eq!(turn_count(&[s]), 0);
        assert_eq!(angle_severity(&graph, &[s, t], 0.3), 0.0);

        for model in [CostModel::turn_angle(), CostModel::turn_count()] {
            let en = RouteEnumerator::new(two_nodes(), RouteConfig::with_model(model));
            let r = &en.enumerate("S", "T")[0];
            assert_eq!(r.cost.penalty_min, 0.0);
            assert_eq!(r.cost.time_min, 30.0);
        }
    }

    #[test]
    fn more_turns_sort_later() {
        // S─Y─Z─T (3+3+4) and S─X─T (5+5): same distance, the longer one is
        // inserted (and discovered) first.
        fn detour() -> crate::RouteGraph {
            let mut b = RouteGraphBuilder::new();
            for (s, t, w) in [("S", "Y", 3.0), ("Y", "Z", 3.0), ("Z", "T", 4.0), ("S", "X", 5.0), ("X", "T", 5.0)] {
                b.add_edge_by_name(s, t, w, None);
            }
            b.build()
        }

        let by_distance = RouteEnumerator::new(detour(), RouteConfig::default());
        let got: Vec<String> = by_distance
            .enumerate("S", "T")
            .iter()
            .map(|r| names(by_distance.graph(), r))
            .collect();
        assert_eq!(got, ["SYZT", "SXT"]);

        let by_turns = RouteEnumerator::new(detour(), RouteConfig::with_model(CostModel::turn_count()));
        let got: Vec<String> = by_turns
            .enumerate("S", "T")
            .iter()
            .map(|r| names(by_turns.graph(), r))
            .collect();
        assert_eq!(got, ["SXT", "SYZT"]);
    }

    #[test]
    fn sharper_angles_sort_later() {
        // Bent S─M─T (90° at M) inserted before straight S─N─T; equal weights.
        let mut b = RouteGraphBuilder::new();
        b.add_node("S", Point::new(0.0, 0.0));
        b.add_node("M", Point::new(10.0, 10.0));
        b.add_node("N", Point::new(10.0, 0.0));
        b.add_node("T", Point::new(20.0, 0.0));
        for (s, t) in [("S", "M"), ("M", "T"), ("S", "N"), ("N", "T")] {
            b.add_edge_by_name(s, t, 10.0, None);
        }
        let en = RouteEnumerator::new(b.build(), RouteConfig::with_model(CostModel::turn_angle()));
        let routes = en.enumerate("S", "T");

        assert_eq!(names(en.graph(), &routes[0]), "SNT");
        assert_close(routes[0].cost.penalty_min, 0.0);
        assert_eq!(names(en.graph(), &routes[1]), "SMT");
        // 90° → severity 0.3 * 0.5
        assert_close(routes[1].cost.time_min, 20.0 * 1.15);
    }

    #[test]
    fn missing_positions_contribute_nothing() {
        let mut b = RouteGraphBuilder::new();
        b.add_node("S", Point::new(0.0, 0.0));
        b.add_node("T", Point::new(0.0, 10.0));
        // "V" is never declared, so it has no position.
        b.add_edge_by_name("S", "V", 5.0, None);
        b.add_edge_by_name("V", "T", 5.0, None);
        let en = RouteEnumerator::new(b.build(), RouteConfig::with_model(CostModel::turn_angle()));
        let r = &en.enumerate("S", "T")[0];
        assert_eq!(r.cost.penalty_min, 0.0);
    }

    #[test]
    fn speed_scales_base_time() {
        let config = RouteConfig { average_speed: 30.0, cost_model: CostModel::turn_count() };
        let en = RouteEnumerator::new(super::helpers::delivery_map(), config);
        let best = &en.enumerate("A", "G")[0];
        // 157.5 / 30 * 60 = 315 min, plus 2 × 0.5
        assert_close(best.cost.time_min, 316.0);
    }
}

// ── Completeness against brute force ──────────────────────────────────────────

#[cfg(test)]
mod completeness {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use dr_core::{NodeId, Point, RouteConfig};
    use crate::{RouteEnumerator, RouteGraphBuilder};

    /// Every ordered sequence of distinct nodes from `s` to `t` whose
    /// consecutive pairs are adjacent.  Generated without looking at the
    /// adjacency until the sequence is complete.
    fn brute_force(adj: &[Vec<bool>], s: usize, t: usize) -> Vec<Vec<usize>> {
        fn extend(adj: &[Vec<bool>], t: usize, seq: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
            let last = *seq.last().unwrap();
            if last == t {
                if seq.windows(2).all(|w| adj[w[0]][w[1]]) {
                    out.push(seq.clone());
                }
                return;
            }
            for n in 0..adj.len() {
                if !used[n] {
                    used[n] = true;
                    seq.push(n);
                    extend(adj, t, seq, used, out);
                    seq.pop();
                    used[n] = false;
                }
            }
        }
        let mut used = vec![false; adj.len()];
        used[s] = true;
        let mut out = Vec::new();
        extend(adj, t, &mut vec![s], &mut used, &mut out);
        out
    }

    #[test]
    fn matches_brute_force_on_random_graphs() {
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..40 {
            let n = rng.gen_range(2..=7);
            let mut adj = vec![vec![false; n]; n];
            let mut b = RouteGraphBuilder::new();
            for i in 0..n {
                b.add_node(format!("n{i}"), Point::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)));
            }
            for i in 0..n {
                for j in (i + 1)..n {
                    if rng.gen_bool(0.5) {
                        adj[i][j] = true;
                        adj[j][i] = true;
                        b.add_edge(NodeId(i as u32), NodeId(j as u32), rng.gen_range(1..20) as f64, None);
                    }
                }
            }
            let en = RouteEnumerator::new(b.build(), RouteConfig::default());

            let s = 0;
            let t = n - 1;
            let mut expected = brute_force(&adj, s, t);
            let mut got: Vec<Vec<usize>> = en
                .enumerate_nodes(NodeId(s as u32), NodeId(t as u32))
                .into_iter()
                .map(|r| r.nodes.iter().map(|id| id.index()).collect())
                .collect();

            expected.sort();
            got.sort();
            assert_eq!(got, expected, "graph with {n} nodes: {adj:?}");
        }
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use dr_core::{CostModel, RouteConfig};
    use crate::{
        GraphData, GraphError, RouteEnumerator, load_graph_csv, load_graph_csv_readers,
        load_graph_json, load_graph_json_reader,
    };

    const NODES_CSV: &str = "\
id,x,y\n\
A,100,250\n\
B,300,100\n\
E,700,100\n\
G,900,250\n\
";

    const EDGES_CSV: &str = "\
source,target,weight,label\n\
A,B,49,49cm\n\
B,E,64.5,\"64,5cm\"\n\
E,G,44,\n\
";

    #[test]
    fn csv_round_trip_through_enumeration() {
        let graph = load_graph_csv_readers(Cursor::new(NODES_CSV), Cursor::new(EDGES_CSV)).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);

        let be = graph.edge_by_key("BE").unwrap();
        assert_eq!(graph.edge_label(be), Some("64,5cm"));
        let eg = graph.edge_by_key("EG").unwrap();
        assert_eq!(graph.edge_label(eg), None);

        let en = RouteEnumerator::new(graph, RouteConfig::default());
        let routes = en.enumerate("A", "G");
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].cost.distance, 157.5);
    }

    #[test]
    fn json_reader() {
        let json = r#"{
            "nodes": [{"id": "A", "x": 0, "y": 0}, {"id": "B", "x": 10, "y": 0}],
            "edges": [{"source": "A", "target": "B", "weight": 4.5}]
        }"#;
        let graph = load_graph_json_reader(json.as_bytes()).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_label(dr_core::EdgeId(0)), None);
    }

    #[test]
    fn json_file() {
        let data = GraphData {
            nodes: vec![
                crate::NodeRecord { id: "A".into(), x: 0.0, y: 0.0 },
                crate::NodeRecord { id: "B".into(), x: 3.0, y: 4.0 },
            ],
            edges: vec![crate::EdgeRecord {
                source: "A".into(),
                target: "B".into(),
                weight: 5.0,
                label: Some("5cm".into()),
            }],
        };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&data).unwrap().as_bytes()).unwrap();

        let graph = load_graph_json(file.path()).unwrap();
        let en = RouteEnumerator::new(graph, RouteConfig::with_model(CostModel::turn_count()));
        assert_eq!(en.enumerate("B", "A")[0].cost.distance, 5.0);
    }

    #[test]
    fn csv_files() {
        let dir = tempfile::tempdir().unwrap();
        let nodes = dir.path().join("nodes.csv");
        let edges = dir.path().join("edges.csv");
        std::fs::write(&nodes, NODES_CSV).unwrap();
        std::fs::write(&edges, EDGES_CSV).unwrap();
        assert_eq!(load_graph_csv(&nodes, &edges).unwrap().node_count(), 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_graph_json(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(GraphError::Io(_))));
    }

    #[test]
    fn duplicate_node_rejected() {
        let nodes = "id,x,y\nA,0,0\nA,1,1\n";
        let result = load_graph_csv_readers(Cursor::new(nodes), Cursor::new("source,target,weight\n"));
        assert!(matches!(result, Err(GraphError::DuplicateNode(id)) if id == "A"));
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let edges = "source,target,weight,label\nA,B,49,\nB,Q,1,\n";
        let result = load_graph_csv_readers(Cursor::new(NODES_CSV), Cursor::new(edges));
        assert!(matches!(result, Err(GraphError::UnknownNode { edge: 1, node }) if node == "Q"));
    }

    #[test]
    fn negative_weight_rejected() {
        let edges = "source,target,weight,label\nA,B,-3,\n";
        let result = load_graph_csv_readers(Cursor::new(NODES_CSV), Cursor::new(edges));
        assert!(matches!(result, Err(GraphError::InvalidWeight { edge: 0, .. })));
    }

    #[test]
    fn non_numeric_weight_is_csv_error() {
        let edges = "source,target,weight,label\nA,B,far,\n";
        let result = load_graph_csv_readers(Cursor::new(NODES_CSV), Cursor::new(edges));
        assert!(matches!(result, Err(GraphError::Csv(_))));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let result = load_graph_json_reader("{ nodes: ".as_bytes());
        assert!(matches!(result, Err(GraphError::Json(_))));
    }
}
