//! `wayfind` — read a shortest-path instance from stdin and print the answer.
//!
//! ```text
//! wayfind grid            # h w, then h rows over . # S G
//! wayfind graph           # n m, then m lines "u v w" (1-indexed)
//! wayfind graph --source 3 --json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

mod input;
mod output;

use std::error::Error;
use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Print the result as JSON, with `null` for unreachable.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Minimum number of orthogonal steps from S to G.
    Grid,
    /// Minimum cost from one vertex to every vertex.
    Graph {
        /// Source vertex, 1-indexed.
        #[arg(long, default_value_t = 1)]
        source: usize,
    },
}

/// Solve the instance in `text`. `Ok(None)` means there was no instance
/// and nothing should be printed.
fn run(args: &Args, text: &str) -> Result<Option<String>, Box<dyn Error>> {
    match &args.command {
        Command::Grid => {
            let Some(grid) = input::parse_grid(text)? else {
                return Ok(None);
            };
            let steps = wayfind_paths::shortest_steps(&grid);
            log::debug!("grid {}x{}: steps = {steps:?}", grid.height(), grid.width());
            Ok(Some(output::grid_answer(steps, args.json)?))
        }
        Command::Graph { source } => {
            let Some(graph) = input::parse_graph(text)? else {
                return Ok(None);
            };
            let source = input::source_vertex(*source, graph.vertex_count())?;
            let dist = wayfind_paths::dijkstra(&graph, source)?;
            log::debug!(
                "graph: {} of {} vertices reachable",
                dist.reachable_count(),
                dist.len()
            );
            Ok(Some(output::graph_answer(&dist, args.json)?))
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut text = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut text) {
        eprintln!("wayfind: failed to read stdin: {e}");
        return ExitCode::FAILURE;
    }

    match run(&args, &text) {
        Ok(Some(line)) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:?}");
            eprintln!("wayfind: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("wayfind").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn grid_reachable_and_unreachable() {
        let a = args(&["grid"]);
        assert_eq!(run(&a, "1 3\nS.G\n").unwrap().as_deref(), Some("2"));
        assert_eq!(run(&a, "3 3\nS..\n###\n..G\n").unwrap().as_deref(), Some("-1"));
    }

    #[test]
    fn graph_with_isolated_vertex() {
        let a = args(&["graph"]);
        let out = run(&a, "4 3\n1 2 5\n2 3 1\n1 3 1\n").unwrap();
        assert_eq!(out.as_deref(), Some("0 2 1 -1"));
    }

    #[test]
    fn graph_from_other_source_as_json() {
        let a = args(&["graph", "--source", "3", "--json"]);
        let out = run(&a, "3 2\n1 2 4\n2 3 6\n").unwrap();
        assert_eq!(
            out.as_deref(),
            Some(r#"{"source":3,"distances":[10,6,0]}"#)
        );
    }

    #[test]
    fn json_flag_is_global() {
        let a = args(&["--json", "grid"]);
        assert_eq!(run(&a, "1 2\nGS").unwrap().as_deref(), Some(r#"{"steps":1}"#));
    }

    #[test]
    fn empty_input_prints_nothing() {
        assert_eq!(run(&args(&["grid"]), "").unwrap(), None);
        assert_eq!(run(&args(&["graph"]), "").unwrap(), None);
    }

    #[test]
    fn bad_source_is_an_error() {
        let input = "2 1\n1 2 3\n";
        let err = run(&args(&["graph", "--source", "0"]), input).unwrap_err();
        assert_eq!(err.to_string(), "source vertex 0 is out of range, expected 1..=2");
        assert!(run(&args(&["graph", "--source", "3"]), input).is_err());
    }

    #[test]
    fn malformed_input_is_an_error() {
        let err = run(&args(&["grid"]), "1 3\nS.S\n").unwrap_err();
        assert!(err.to_string().contains("more than one start"));
        let err = run(&args(&["graph"]), "2 1\n1 2 -1\n").unwrap_err();
        assert!(err.to_string().contains("negative weight"));
    }
}
