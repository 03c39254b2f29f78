use crate::{algo::GraphAlgo, errors::GraphError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub graph: Option<String>,
    pub command: String,
    pub command_args: Vec<String>,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut graph = None;
        let mut command = String::from("status");
        let mut command_args = Vec::new();
        let mut command_set = false;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            if command_set {
                command_args.push(arg.to_string());
                continue;
            }
            match *arg {
                "--graph" => {
                    graph = Some(
                        iter.next()
                            .ok_or_else(|| "--graph requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--command" => {
                    command = iter
                        .next()
                        .ok_or_else(|| "--command requires a value".to_string())?
                        .to_string();
                    command_set = true;
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    command = arg.to_string();
                    command_set = true;
                }
            }
        }
        Ok(Self {
            graph,
            command,
            command_args,
        })
    }

    /// True when a help flag appears before the command. Arguments after the
    /// command belong to it and are never read as flags.
    pub fn wants_help(args: &[&str]) -> bool {
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--help" | "-h" => return true,
                "--graph" => {
                    iter.next();
                }
                "--command" => return false,
                other if other.starts_with('-') => {}
                _ => return false,
            }
        }
        false
    }

    pub fn help() -> &'static str {
        "Usage: wgraph [--graph PATH] [--command status|connected|distance|path] [SRC DST]\n"
    }
}

/// Runs one command against `algo` and returns the line to print.
pub fn run_command(algo: &GraphAlgo, config: &CommandLineConfig) -> Result<String, GraphError> {
    match config.command.as_str() {
        "status" => {
            let graph = algo
                .graph()
                .ok_or_else(|| GraphError::not_found("no graph bound"))?;
            Ok(format!(
                "vertices={} edges={} modifications={}",
                graph.vertex_count(),
                graph.edge_count(),
                graph.modification_count()
            ))
        }
        "connected" => Ok(format!("connected={}", algo.is_connected())),
        "distance" => {
            let (src, dst) = endpoints(&config.command_args)?;
            Ok(match algo.shortest_path_distance(src, dst) {
                Some(distance) => format!("distance={distance}"),
                None => "distance=none".to_string(),
            })
        }
        "path" => {
            let (src, dst) = endpoints(&config.command_args)?;
            Ok(match algo.shortest_path(src, dst) {
                Some(path) => {
                    let keys: Vec<String> =
                        path.iter().map(|vertex| vertex.key().to_string()).collect();
                    format!("path={}", keys.join(","))
                }
                None => "path=none".to_string(),
            })
        }
        other => Err(GraphError::invalid_input(format!("unknown command {other}"))),
    }
}

fn endpoints(args: &[String]) -> Result<(i64, i64), GraphError> {
    match args {
        [src, dst] => Ok((parse_key(src)?, parse_key(dst)?)),
        _ => Err(GraphError::invalid_input("expected SRC and DST vertex keys")),
    }
}

fn parse_key(raw: &str) -> Result<i64, GraphError> {
    raw.parse()
        .map_err(|_| GraphError::invalid_input(format!("invalid vertex key {raw}")))
}
