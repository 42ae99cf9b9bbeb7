//! Side-by-side run of every algorithm on one grid.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use gridwalk_core::GridMap;
use gridwalk_paths::{Algorithm, NullSink, Search, SearchStats};

pub struct Row {
    pub algorithm: Algorithm,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Run each algorithm once, in menu order, without recording events.
pub fn compare(grid: &GridMap) -> Vec<Row> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let started = Instant::now();
            let mut search = Search::new(grid, algorithm);
            search.run(&mut NullSink);
            let elapsed = started.elapsed();
            Row {
                algorithm,
                stats: search.stats(),
                elapsed,
            }
        })
        .collect()
}

pub fn write_table<W: Write>(out: &mut W, rows: &[Row]) -> io::Result<()> {
    writeln!(
        out,
        "{:<10}{:>10}{:>10}{:>10}{:>14}",
        "algorithm", "expanded", "frontier", "path", "time"
    )?;
    for row in rows {
        let path = row
            .stats
            .path_len
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        writeln!(
            out,
            "{:<10}{:>10}{:>10}{:>10}{:>14}",
            row.algorithm.name(),
            row.stats.expanded,
            row.stats.max_frontier,
            path,
            format!("{:.1?}", row.elapsed)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_all_five_in_menu_order() {
        let g = GridMap::parse("S....\n.....\n.....\n.....\n...#G").unwrap();
        let rows = compare(&g);
        let names: Vec<_> = rows.iter().map(|r| r.algorithm).collect();
        assert_eq!(names, Algorithm::ALL.to_vec());
        let path = |alg| {
            rows.iter()
                .find(|r| r.algorithm == alg)
                .and_then(|r| r.stats.path_len)
        };
        assert_eq!(path(Algorithm::Bfs), Some(8));
        assert_eq!(path(Algorithm::AStar), Some(8));
        assert_eq!(path(Algorithm::Greedy), Some(10));
    }

    #[test]
    fn table_layout() {
        let g = GridMap::parse("S#\n#G").unwrap();
        let mut out = Vec::new();
        write_table(&mut out, &compare(&g)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("algorithm"));
        assert!(lines[1].starts_with("BFS"));
        assert!(lines[3].starts_with("A*"));
        // No path anywhere.
        for line in &lines[1..] {
            let cols: Vec<_> = line.split_whitespace().collect();
            assert_eq!(cols[3], "-");
        }
    }
}
