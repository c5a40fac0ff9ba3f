mod common;

use std::collections::HashMap;

use common::{default_network, FixedDistances};
use panther_lib::{
    verify_constraints, AirportCatalog, CodePair, FlightEdge, HubSet, NetworkConfig,
    NetworkGenerator, MAJOR_HUBS, US_AIRPORTS,
};

#[test]
fn every_generated_flight_meets_the_minimum_distance() {
    let (_, edges) = default_network();
    assert!(!edges.is_empty());
    for edge in &edges {
        assert!(edge.distance_miles >= 150.0, "{edge}");
        assert!(edge.is_direct);
        assert!(edge.via_hub.is_none());
        assert_ne!(edge.origin, edge.destination);
    }
    let report = verify_constraints(&edges);
    assert!(report.valid);
    assert!(report.violations.is_empty());
}

#[test]
fn generation_is_deterministic() {
    let (_, first) = default_network();
    let (_, second) = default_network();
    assert_eq!(first, second);
}

#[test]
fn hubs_are_connected_in_both_directions() {
    let (_, edges) = default_network();
    for a in MAJOR_HUBS {
        for b in MAJOR_HUBS {
            if a == b {
                continue;
            }
            assert!(
                edges.iter().any(|e| e.origin == a && e.destination == b),
                "missing {a} -> {b}"
            );
        }
    }
}

#[test]
fn hub_pass_comes_first() {
    let (_, edges) = default_network();
    // four hubs give six pairs, twelve directed edges
    assert!(edges[..12]
        .iter()
        .all(|e| MAJOR_HUBS.contains(&e.origin.as_str())
            && MAJOR_HUBS.contains(&e.destination.as_str())));
    assert_eq!((edges[0].origin.as_str(), edges[0].destination.as_str()), ("ATL", "DFW"));
    assert_eq!((edges[1].origin.as_str(), edges[1].destination.as_str()), ("DFW", "ATL"));
}

#[test]
fn every_spoke_has_eight_hub_edges() {
    let (_, edges) = default_network();
    for spoke in US_AIRPORTS.iter().filter(|code| !MAJOR_HUBS.contains(code)) {
        let hub_edges: Vec<&FlightEdge> = edges
            .iter()
            .filter(|e| {
                (e.origin == *spoke && MAJOR_HUBS.contains(&e.destination.as_str()))
                    || (e.destination == *spoke && MAJOR_HUBS.contains(&e.origin.as_str()))
            })
            .collect();
        assert_eq!(hub_edges.len(), 8, "{spoke}");
        for hub in MAJOR_HUBS {
            assert_eq!(
                hub_edges.iter().filter(|e| e.origin == *spoke && e.destination == hub).count(),
                1
            );
            assert_eq!(
                hub_edges.iter().filter(|e| e.origin == hub && e.destination == *spoke).count(),
                1
            );
        }
    }
}

#[test]
fn no_unordered_pair_is_emitted_twice() {
    let (_, edges) = default_network();
    let mut per_pair: HashMap<CodePair, usize> = HashMap::new();
    for edge in &edges {
        *per_pair.entry(edge.pair()).or_default() += 1;
    }
    assert!(per_pair.values().all(|&count| count == 2));
}

#[test]
fn production_network_has_expected_shape() {
    let catalog = AirportCatalog::builtin();
    let network = NetworkGenerator::new(&catalog, HubSet::major()).generate(&US_AIRPORTS);
    assert_eq!(network.report.hub_pairs, 6);
    assert_eq!(network.report.spoke_hub_pairs, 104);
    assert_eq!(network.report.direct_pairs, 134);
    assert_eq!(network.report.rejected_direct_pairs, 175);
    assert_eq!(network.report.below_minimum_pairs, 16);
    assert_eq!(network.report.unresolved_pairs, 0);
    assert_eq!(network.edges.len(), 488);
}

#[test]
fn nearby_airports_never_get_direct_flights() {
    let (_, edges) = default_network();
    for (a, b) in [("JFK", "LGA"), ("EWR", "LGA"), ("MIA", "FLL"), ("IAD", "DCA")] {
        assert!(
            !edges.iter().any(|e| e.pair() == CodePair::new(a, b)),
            "{a}/{b} should be too close"
        );
    }
}

#[test]
fn long_haul_direct_requires_efficiency_over_hubs() {
    let (_, edges) = default_network();
    let has = |a: &str, b: &str| edges.iter().any(|e| e.origin == a && e.destination == b);
    // Hawaii to the West Coast beats any mainland hub by a wide margin.
    assert!(has("HNL", "LAX"));
    assert!(has("LAX", "HNL"));
    // Coast-to-coast is nearly as short through ORD or DEN.
    assert!(!has("LAX", "JFK"));
    assert!(!has("BOS", "SAN"));
}

#[test]
fn cdg_is_held_out_of_the_default_network() {
    let (_, edges) = default_network();
    assert!(!edges.iter().any(|e| e.touches("CDG")));
}

#[test]
fn threshold_is_inclusive_at_exactly_the_minimum() {
    let distances = FixedDistances::new(&[
        ("HUB", "AAA", 150.0),
        ("HUB", "BBB", 149.99),
        ("AAA", "BBB", 300.0),
    ]);
    let hubs = HubSet::from_codes(["HUB"]).unwrap();
    let network = NetworkGenerator::new(&distances, hubs).generate(&["HUB", "AAA", "BBB"]);

    let pairs: Vec<(&str, &str)> = network
        .edges
        .iter()
        .map(|e| (e.origin.as_str(), e.destination.as_str()))
        .collect();
    assert_eq!(
        pairs,
        [("AAA", "HUB"), ("HUB", "AAA"), ("AAA", "BBB"), ("BBB", "AAA")]
    );
    assert_eq!(network.report.below_minimum_pairs, 1);
}

#[test]
fn long_pair_without_any_hub_path_gets_no_direct_flight() {
    // The only hub cannot reach BBB, so no hub path exists for AAA/BBB.
    let distances = FixedDistances::new(&[("HUB", "AAA", 500.0), ("AAA", "BBB", 1500.0)]);
    let hubs = HubSet::from_codes(["HUB"]).unwrap();
    let generator = NetworkGenerator::new(&distances, hubs);

    assert!(generator.min_distance_through_hubs("AAA", "BBB").is_none());
    assert!(!generator.should_create_direct("AAA", "BBB", 1500.0));

    let network = generator.generate(&["AAA", "BBB"]);
    assert!(!network.edges.iter().any(|e| e.pair() == CodePair::new("AAA", "BBB")));
    assert_eq!(network.report.rejected_direct_pairs, 1);
    assert_eq!(network.report.unresolved_pairs, 1);
}

#[test]
fn efficiency_ratio_boundary_is_inclusive() {
    // direct 1700 / hub 2000 = 0.85 exactly
    let distances = FixedDistances::new(&[
        ("HUB", "AAA", 1000.0),
        ("HUB", "BBB", 1000.0),
        ("AAA", "BBB", 1700.0),
    ]);
    let hubs = HubSet::from_codes(["HUB"]).unwrap();
    let generator = NetworkGenerator::new(&distances, hubs);
    assert!(generator.should_create_direct("AAA", "BBB", 1700.0));
    assert!(!generator.should_create_direct("AAA", "BBB", 1700.5));
}

#[test]
fn short_pairs_below_ceiling_are_always_direct() {
    let distances = FixedDistances::new(&[
        ("HUB", "AAA", 200.0),
        ("HUB", "BBB", 200.0),
        ("AAA", "BBB", 999.0),
    ]);
    let hubs = HubSet::from_codes(["HUB"]).unwrap();
    let generator = NetworkGenerator::new(&distances, hubs);
    assert!(generator.should_create_direct("AAA", "BBB", 999.0));
    assert!(!generator.should_create_direct("AAA", "BBB", 1000.0));
}

#[test]
fn overridden_minimum_changes_the_network() {
    let catalog = AirportCatalog::builtin();
    let strict = NetworkConfig::default().with_min_distance(500.0);
    let network = NetworkGenerator::new(&catalog, HubSet::major())
        .with_config(strict)
        .generate(&US_AIRPORTS);
    assert!(network.edges.iter().all(|e| e.distance_miles >= 500.0));
    // BNA is about 214 miles from ATL
    assert!(!network
        .edges
        .iter()
        .any(|e| e.pair() == CodePair::new("ATL", "BNA")));
}

#[test]
fn unknown_codes_are_skipped_without_panicking() {
    let catalog = AirportCatalog::builtin();
    let network = NetworkGenerator::new(&catalog, HubSet::major()).generate(&["ATL", "BNA", "XYZ"]);
    assert!(!network.edges.iter().any(|e| e.touches("XYZ")));
    assert_eq!(network.report.unresolved_pairs, 5);
    assert!(network
        .edges
        .iter()
        .any(|e| e.origin == "BNA" && e.destination == "ATL"));
}

#[test]
fn input_codes_are_normalised() {
    let catalog = AirportCatalog::builtin();
    let lower = NetworkGenerator::new(&catalog, HubSet::major()).generate(&["bos", "sea"]);
    let upper = NetworkGenerator::new(&catalog, HubSet::major()).generate(&["BOS", "SEA"]);
    assert_eq!(lower, upper);
}
