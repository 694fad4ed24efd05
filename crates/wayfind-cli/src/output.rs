//! Result formatting. `-1` stands for "unreachable" in plain output and
//! `null` in JSON output; nowhere else.

use serde::Serialize;
use wayfind_paths::Distances;

/// Sentinel printed for an unreachable target.
pub const UNREACHABLE: &str = "-1";

#[derive(Serialize)]
struct GridAnswer {
    steps: Option<u32>,
}

#[derive(Serialize)]
struct GraphAnswer {
    /// 1-indexed, as in the input.
    source: usize,
    distances: Vec<Option<u64>>,
}

/// Format the answer of a grid instance.
pub fn grid_answer(steps: Option<u32>, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string(&GridAnswer { steps });
    }
    Ok(match steps {
        Some(d) => d.to_string(),
        None => UNREACHABLE.to_string(),
    })
}

/// Format the answer of a graph instance, one value per vertex in order.
pub fn graph_answer(dist: &Distances, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string(&GraphAnswer {
            source: dist.source() + 1,
            distances: dist.iter().collect(),
        });
    }
    let parts: Vec<String> = dist
        .iter()
        .map(|d| match d {
            Some(d) => d.to_string(),
            None => UNREACHABLE.to_string(),
        })
        .collect();
    Ok(parts.join(" "))
}
