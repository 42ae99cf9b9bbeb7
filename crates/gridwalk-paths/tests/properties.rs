use std::collections::VecDeque;

use gridwalk_core::{Cell, GridMap, MazeConfig};
use gridwalk_paths::{
    Algorithm, HybridSearch, NullSink, Search, SearchOptions, SearchRequest, SearchResult,
    StepEvent, Strategy, manhattan,
};

const OPEN_4: &str = "\
S...
....
....
...G";

const DETOUR_5: &str = "\
S....
.....
.....
.....
...#G";

const GAP_4: &str = "\
S...
....
...#
.#.G";

const SPLIT_3: &str = "\
S.#..
..#..
..#.G";

const DETOURS_6: &str = "\
S.###.
#.....
......
.#.#..
...###
.#.#.G";

const MAZE_6: &str = "\
S.#...
.##.#.
....#.
#.#...
..#.#.
....#G";

fn grid(text: &str) -> GridMap {
    GridMap::parse(text).unwrap()
}

fn cells(v: &[(i32, i32)]) -> Vec<Cell> {
    v.iter().map(|&(r, c)| Cell::new(r, c)).collect()
}

/// Shortest distance from start to every cell, by plain level-order BFS.
fn distances(g: &GridMap) -> Vec<Option<usize>> {
    let mut dist = vec![None; g.bounds().len()];
    let mut queue = VecDeque::new();
    dist[g.index(g.start()).unwrap()] = Some(0);
    queue.push_back(g.start());
    while let Some(c) = queue.pop_front() {
        let d = dist[g.index(c).unwrap()].unwrap();
        for n in g.neighbors(c).unwrap() {
            let slot = &mut dist[g.index(n).unwrap()];
            if slot.is_none() {
                *slot = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

fn shortest(g: &GridMap) -> Option<usize> {
    distances(g)[g.index(g.goal()).unwrap()]
}

fn path_of(g: &GridMap, alg: Algorithm) -> Vec<Cell> {
    Search::new(g, alg)
        .run(&mut NullSink)
        .into_path()
        .unwrap_or_else(|| panic!("{alg} found no path"))
        .into_cells()
}

fn visited(events: &[StepEvent]) -> Vec<Cell> {
    events.iter().filter_map(StepEvent::visited).collect()
}

#[test]
fn optimal_algorithms_match_shortest_distance() {
    for text in [OPEN_4, DETOUR_5, GAP_4, MAZE_6] {
        let g = grid(text);
        let best = shortest(&g).unwrap();
        for alg in [Algorithm::Bfs, Algorithm::Ucs, Algorithm::AStar] {
            assert_eq!(path_of(&g, alg).len(), best, "{alg} on\n{g}");
        }
    }
}

#[test]
fn astar_never_expands_beyond_optimal_cost() {
    for text in [OPEN_4, DETOUR_5, GAP_4, MAZE_6] {
        let g = grid(text);
        let best = shortest(&g).unwrap() as i32;
        let mut search = Search::new(&g, Algorithm::AStar);
        while let Some(event) = search.next() {
            let StepEvent::Visited(c) = event else {
                continue;
            };
            // Cost at the moment of expansion.
            let f = search.cost_of(c).unwrap() + manhattan(c, g.goal());
            assert!(f <= best, "A* expanded {c} with f = {f} > {best}");
        }
    }
}

#[test]
fn greedy_is_never_shorter_than_optimal() {
    for text in [OPEN_4, GAP_4, MAZE_6] {
        let g = grid(text);
        assert!(path_of(&g, Algorithm::Greedy).len() >= shortest(&g).unwrap());
    }
}

#[test]
fn greedy_can_be_strictly_worse() {
    let g = grid(DETOUR_5);
    let greedy = path_of(&g, Algorithm::Greedy);
    assert_eq!(shortest(&g), Some(8));
    assert_eq!(greedy.len(), 10);
    assert_eq!(
        greedy,
        cells(&[
            (1, 0),
            (2, 0),
            (3, 0),
            (4, 0),
            (4, 1),
            (4, 2),
            (3, 2),
            (3, 3),
            (3, 4),
            (4, 4),
        ])
    );
}

#[test]
fn runs_are_idempotent() {
    let g = grid(MAZE_6);
    for alg in Algorithm::ALL {
        let a: Vec<_> = Search::new(&g, alg).collect();
        let b: Vec<_> = Search::new(&g, alg).collect();
        assert_eq!(a, b, "{alg}");
    }
}

#[test]
fn paths_are_connected_walks_to_the_goal() {
    for text in [OPEN_4, DETOUR_5, GAP_4, MAZE_6] {
        let g = grid(text);
        for alg in Algorithm::ALL {
            let path = Search::new(&g, alg).run(&mut NullSink).into_path().unwrap();
            assert!(path.is_connected_from(g.start()), "{alg}: {path}");
            assert_eq!(path.cells().last(), Some(&g.goal()), "{alg}");
            assert!(!path.contains(g.start()), "{alg}");
            assert!(path.iter().all(|&c| g.is_passable(c)), "{alg}");
        }
    }
}

#[test]
fn open_four_by_four() {
    let g = grid(OPEN_4);
    let expected = cells(&[(1, 0), (2, 0), (3, 0), (3, 1), (3, 2), (3, 3)]);
    for alg in [Algorithm::Bfs, Algorithm::AStar] {
        let path = Search::new(&g, alg).run(&mut NullSink).into_path().unwrap();
        assert_eq!(path.cells(), expected.as_slice());
        assert_eq!(path.cost(), 6);
    }
    assert_eq!(
        path_of(&g, Algorithm::Dfs),
        cells(&[(0, 1), (0, 2), (0, 3), (1, 3), (2, 3), (3, 3)])
    );
}

#[test]
fn dfs_exploration_order() {
    let g = grid(OPEN_4);
    let events: Vec<_> = Search::new(&g, Algorithm::Dfs).collect();
    assert_eq!(
        visited(&events),
        cells(&[
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 3),
            (2, 3),
            (2, 2),
            (2, 1),
            (2, 0),
            (3, 0),
            (3, 1),
            (3, 2),
        ])
    );
}

#[test]
fn enclosed_goal_is_reached_through_the_gap() {
    let g = grid(GAP_4);
    let gap = Cell::new(3, 2);
    for alg in [Algorithm::Bfs, Algorithm::Ucs, Algorithm::AStar, Algorithm::Greedy] {
        assert_eq!(
            path_of(&g, alg),
            cells(&[(1, 0), (2, 0), (2, 1), (2, 2), (3, 2), (3, 3)]),
            "{alg}"
        );
    }
    let dfs = path_of(&g, Algorithm::Dfs);
    assert!(dfs.contains(&gap));
    assert_eq!(dfs.last(), Some(&g.goal()));
}

#[test]
fn cost_tracking_variants_expand_each_cell_once() {
    for text in [DETOURS_6, MAZE_6, OPEN_4] {
        let g = grid(text);
        for alg in [Algorithm::Ucs, Algorithm::AStar] {
            let mut search = Search::new(&g, alg);
            let events: Vec<_> = search.by_ref().collect();
            let v = visited(&events);
            let mut unique = v.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), v.len(), "{alg} revisited a cell on\n{g}");
            // Start and, when reached, the goal are expanded without a Visited event.
            let silent = if search.result().is_some_and(SearchResult::is_found) {
                2
            } else {
                1
            };
            assert_eq!(search.stats().expanded, v.len() + silent, "{alg}");
        }
    }
}

#[test]
fn every_algorithm_reports_no_path_on_a_split_grid() {
    let g = grid(SPLIT_3);
    for alg in Algorithm::ALL {
        let events: Vec<_> = Search::new(&g, alg).collect();
        assert_eq!(visited(&events).len(), 5, "{alg}");
        assert_eq!(events.last(), Some(&StepEvent::Finished(SearchResult::NoPath)));
    }
}

#[test]
fn hybrid_falls_through_in_fixed_order() {
    let g = grid(SPLIT_3);
    let mut hybrid = HybridSearch::new(&g);
    let order: Vec<Algorithm> = hybrid
        .by_ref()
        .filter_map(|e| match e {
            StepEvent::AttemptStarted(alg) => Some(alg),
            _ => None,
        })
        .collect();
    assert_eq!(order, Algorithm::HYBRID_ORDER.to_vec());
    assert_eq!(hybrid.result(), Some(&SearchResult::NoPath));
}

#[test]
fn start_equals_goal_emits_no_steps() {
    let cfg = MazeConfig::new(3, 3, Cell::new(1, 1), Cell::new(1, 1));
    let g = GridMap::from_config(&cfg).unwrap();
    for alg in Algorithm::ALL {
        let out = SearchRequest::new(alg).run(&g);
        assert_eq!(out.events.len(), 1, "{alg}");
        assert_eq!(out.result.path().map(|p| p.len()), Some(0));
    }
}

#[test]
fn recorded_costs_never_undercut_true_distance() {
    let g = grid(MAZE_6);
    let dist = distances(&g);
    let opts = SearchOptions {
        trace_relaxations: true,
    };
    for alg in [Algorithm::Ucs, Algorithm::AStar] {
        let mut search = Search::with_options(&g, alg, opts);
        search.run(&mut NullSink);
        for c in g.cells() {
            if let Some(cost) = search.cost_of(c) {
                assert!(search.predecessors().is_reached(c));
                assert!(cost as usize >= dist[g.index(c).unwrap()].unwrap());
            }
        }
        assert_eq!(
            search.cost_of(g.goal()).map(|c| c as usize),
            shortest(&g),
            "{alg}"
        );
    }
}

#[test]
fn strategy_names_drive_requests() {
    let g = grid(DETOUR_5);
    let astar = SearchRequest::new("a*".parse::<Strategy>().unwrap()).run(&g);
    let greedy = SearchRequest::new("Greedy".parse::<Strategy>().unwrap()).run(&g);
    assert_eq!(astar.stats.path_len, Some(8));
    assert_eq!(greedy.stats.path_len, Some(10));
}
