use std::collections::HashMap;

use searchkit::problems::route_graph::{RouteGraph, RouteProblem, table_heuristic};
use searchkit::search::{Solution, astar_search, greedy_best_first_search, uniform_cost_search};

fn main() {
    env_logger::init();

    let map = us_city_map();

    // Dallas-bound query: the straight-line table applies, so A* and greedy
    // best-first can both use it.
    let to_dallas = RouteProblem::new(&map, "Los Angeles", "Dallas");
    let table = flight_distances_to_dallas();

    println!("Los Angeles -> Dallas");
    report("uniform-cost", uniform_cost_search(&to_dallas));
    report(
        "A*          ",
        astar_search(&to_dallas, table_heuristic(table.clone())),
    );
    report(
        "greedy      ",
        greedy_best_first_search(&to_dallas, table_heuristic(table)),
    );

    // No straight-line table toward Newark, so uniform-cost it is.
    let to_newark = RouteProblem::new(&map, "Dallas", "Newark");
    println!("\nDallas -> Newark");
    report("uniform-cost", uniform_cost_search(&to_newark));
}

fn report(label: &str, solution: Option<Solution<String>>) {
    match solution {
        Some(solution) => println!(
            "  {label}: {} km over {} legs, {} states expanded\n      via {}",
            solution.cost,
            solution.actions.len(),
            solution.expanded,
            solution.actions.join(" -> "),
        ),
        None => println!("  {label}: no route"),
    }
}

/// Direct flight distances (km) from each city to Dallas.
fn flight_distances_to_dallas() -> HashMap<String, f64> {
    [
        ("Los Angeles", 1238.0),
        ("Dallas", 0.0),
        ("Denver", 663.0),
        ("Houston", 225.0),
        ("Indianapolis", 764.0),
        ("Jacksonville", 907.0),
        ("Las Vegas", 1069.0),
        ("Memphis", 420.0),
        ("Miami", 1111.0),
        ("New Orleans", 443.0),
        ("New York", 1371.0),
        ("Newark", 1363.0),
        ("Oakland", 1473.0),
        ("Philadelphia", 1298.0),
        ("Phoenix", 885.0),
        ("Portland", 1632.0),
        ("San Antonio", 253.0),
        ("San Diego", 1182.0),
        ("San Francisco", 1481.0),
        ("San Jose", 1449.0),
        ("Seattle", 1680.0),
        ("Tampa", 917.0),
        ("Tucson", 824.0),
        ("Washington DC", 1182.0),
    ]
    .into_iter()
    .map(|(name, distance)| (name.to_owned(), distance))
    .collect()
}

/// Road distances (km) between major US cities.
fn us_city_map() -> RouteGraph {
    let mut map = RouteGraph::new();
    map.link("Atlanta", "Austin", 1315.0);
    map.link("Atlanta", "Baltimore", 927.0);
    map.link("Atlanta", "Chicago", 944.0);
    map.link("Atlanta", "Dallas", 1157.0);
    map.link("Atlanta", "Houston", 1126.0);
    map.link("Atlanta", "Indianapolis", 687.0);
    map.link("Atlanta", "Jacksonville", 458.0);
    map.link("Atlanta", "Memphis", 541.0);
    map.link("Atlanta", "Miami", 973.0);
    map.link("Atlanta", "New Orleans", 682.0);
    map.link("Atlanta", "New York", 1199.0);
    map.link("Atlanta", "Newark", 1189.0);
    map.link("Atlanta", "Philadelphia", 1070.0);
    map.link("Atlanta", "San Antonio", 1417.0);
    map.link("Atlanta", "Tampa", 670.0);
    map.link("Atlanta", "Washington DC", 871.0);
    map.link("Austin", "Dallas", 293.0);
    map.link("Austin", "Denver", 1240.0);
    map.link("Austin", "Houston", 235.0);
    map.link("Austin", "Indianapolis", 1489.0);
    map.link("Austin", "Memphis", 900.0);
    map.link("Austin", "New Orleans", 737.0);
    map.link("Austin", "Phoenix", 1396.0);
    map.link("Austin", "San Antonio", 118.0);
    map.link("Austin", "Tucson", 1270.0);
    map.link("Baltimore", "Boston", 577.0);
    map.link("Baltimore", "Chicago", 973.0);
    map.link("Baltimore", "Indianapolis", 819.0);
    map.link("Baltimore", "Jacksonville", 1096.0);
    map.link("Baltimore", "Memphis", 1273.0);
    map.link("Baltimore", "New York", 272.0);
    map.link("Baltimore", "Newark", 262.0);
    map.link("Baltimore", "Philadelphia", 144.0);
    map.link("Baltimore", "Tampa", 1370.0);
    map.link("Baltimore", "Washington DC", 57.0);
    map.link("Boston", "Chicago", 1366.0);
    map.link("Boston", "Indianapolis", 1295.0);
    map.link("Boston", "New York", 305.0);
    map.link("Boston", "Newark", 315.0);
    map.link("Boston", "Philadelphia", 435.0);
    map.link("Boston", "Washington DC", 633.0);
    map.link("Chicago", "Dallas", 1290.0);
    map.link("Chicago", "Denver", 1474.0);
    map.link("Chicago", "Indianapolis", 263.0);
    map.link("Chicago", "Jacksonville", 1387.0);
    map.link("Chicago", "Memphis", 773.0);
    map.link("Chicago", "New Orleans", 1339.0);
    map.link("Chicago", "New York", 1144.0);
    map.link("Chicago", "Newark", 1130.0);
    map.link("Chicago", "Philadelphia", 1068.0);
    map.link("Chicago", "Washington DC", 955.0);
    map.link("Dallas", "Denver", 1064.0);
    map.link("Dallas", "Houston", 362.0);
    map.link("Dallas", "Indianapolis", 1227.0);
    map.link("Dallas", "Jacksonville", 1458.0);
    map.link("Dallas", "Memphis", 675.0);
    map.link("Dallas", "New Orleans", 711.0);
    map.link("Dallas", "San Antonio", 406.0);
    map.link("Dallas", "Tampa", 1474.0);
    map.link("Dallas", "Tucson", 1324.0);
    map.link("Denver", "Houston", 1412.0);
    map.link("Denver", "Las Vegas", 972.0);
    map.link("Denver", "Los Angeles", 1334.0);
    map.link("Denver", "Memphis", 1410.0);
    map.link("Denver", "Phoenix", 941.0);
    map.link("Denver", "San Antonio", 1289.0);
    map.link("Denver", "San Diego", 1339.0);
    map.link("Denver", "San Jose", 1491.0);
    map.link("Denver", "Tucson", 990.0);
    map.link("Houston", "Indianapolis", 1391.0);
    map.link("Houston", "Jacksonville", 1319.0);
    map.link("Houston", "Memphis", 778.0);
    map.link("Houston", "New Orleans", 509.0);
    map.link("Houston", "San Antonio", 304.0);
    map.link("Houston", "Tampa", 1271.0);
    map.link("Los Angeles", "Las Vegas", 367.0);
    map.link("Los Angeles", "Oakland", 552.0);
    map.link("Los Angeles", "Phoenix", 573.0);
    map.link("Los Angeles", "Portland", 1329.0);
    map.link("Los Angeles", "San Diego", 179.0);
    map.link("Los Angeles", "San Francisco", 558.0);
    map.link("Los Angeles", "San Jose", 491.0);
    map.link("Los Angeles", "Tucson", 710.0);
    map.link("Newark", "Philadelphia", 120.0);
    map.link("Newark", "Washington DC", 318.0);
    map.link("Philadelphia", "Tampa", 1492.0);
    map.link("Philadelphia", "Washington DC", 199.0);
    map.link("Phoenix", "Las Vegas", 412.0);
    map.link("Phoenix", "San Antonio", 1361.0);
    map.link("Phoenix", "San Diego", 480.0);
    map.link("Phoenix", "San Francisco", 1050.0);
    map.link("Phoenix", "San Jose", 988.0);
    map.link("Phoenix", "Tucson", 173.0);
    map.link("San Antonio", "Tucson", 1225.0);
    map.link("San Diego", "Las Vegas", 426.0);
    map.link("San Diego", "San Francisco", 737.0);
    map.link("San Diego", "San Jose", 670.0);
    map.link("San Diego", "Tucson", 586.0);
    map.link("San Francisco", "Las Vegas", 670.0);
    map.link("San Francisco", "San Jose", 66.0);
    map.link("San Francisco", "Tucson", 1213.0);
    map.link("Indianapolis", "Jacksonville", 1125.0);
    map.link("Indianapolis", "Memphis", 617.0);
    map.link("Indianapolis", "New Orleans", 1147.0);
    map.link("Indianapolis", "New York", 1035.0);
    map.link("Indianapolis", "Newark", 1021.0);
    map.link("Indianapolis", "Philadelphia", 937.0);
    map.link("Indianapolis", "Tampa", 1356.0);
    map.link("Indianapolis", "Washington DC", 789.0);
    map.link("Jacksonville", "Memphis", 949.0);
    map.link("Jacksonville", "Miami", 526.0);
    map.link("Jacksonville", "New Orleans", 809.0);
    map.link("Jacksonville", "New York", 1343.0);
    map.link("Jacksonville", "Newark", 1338.0);
    map.link("Jacksonville", "Philadelphia", 1220.0);
    map.link("Jacksonville", "Tampa", 276.0);
    map.link("Jacksonville", "Washington DC", 1040.0);
    map.link("Las Vegas", "Oakland", 658.0);
    map.link("Las Vegas", "Portland", 1215.0);
    map.link("Las Vegas", "San Jose", 615.0);
    map.link("Las Vegas", "Seattle", 1401.0);
    map.link("Las Vegas", "Tucson", 590.0);
    map.link("Memphis", "Miami", 1404.0);
    map.link("Memphis", "New Orleans", 577.0);
    map.link("Memphis", "Philadelphia", 1413.0);
    map.link("Memphis", "San Antonio", 1016.0);
    map.link("Memphis", "Tampa", 1074.0);
    map.link("Memphis", "Washington DC", 1225.0);
    map.link("Miami", "New Orleans", 1075.0);
    map.link("Miami", "Tampa", 329.0);
    map.link("Miami", "Washington DC", 1487.0);
    map.link("New Orleans", "San Antonio", 814.0);
    map.link("New Orleans", "Tampa", 773.0);
    map.link("New York", "Newark", 14.0);
    map.link("New York", "Philadelphia", 129.0);
    map.link("New York", "Washington DC", 328.0);
    map.link("Oakland", "Phoenix", 1039.0);
    map.link("Oakland", "Portland", 858.0);
    map.link("Oakland", "San Diego", 731.0);
    map.link("Oakland", "San Francisco", 13.0);
    map.link("Oakland", "San Jose", 61.0);
    map.link("Oakland", "Seattle", 1089.0);
    map.link("Oakland", "Tucson", 1203.0);
    map.link("Portland", "San Diego", 1499.0);
    map.link("Portland", "San Francisco", 861.0);
    map.link("Portland", "San Jose", 911.0);
    map.link("Portland", "Seattle", 232.0);
    map.link("San Jose", "Seattle", 1141.0);
    map.link("San Jose", "Tucson", 1150.0);
    map.link("Tampa", "Washington DC", 1315.0);
    map
}
