use std::{env, process};

use tracing_subscriber::EnvFilter;
use wgraph::{
    GraphAlgo,
    client::{CommandLineConfig, run_command},
    recovery::load_graph_from_path,
};

fn main() {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    if CommandLineConfig::wants_help(&arg_refs) {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let algo = match open_graph(&config) {
        Ok(algo) => algo,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    match run_command(&algo, &config) {
        Ok(line) => println!("{line}"),
        Err(err) => {
            eprintln!("command failed: {err}");
            process::exit(1);
        }
    }
}

fn open_graph(config: &CommandLineConfig) -> Result<GraphAlgo, String> {
    match config.graph.as_deref() {
        Some(path) => load_graph_from_path(path)
            .map(GraphAlgo::from_graph)
            .map_err(|e| e.to_string()),
        None => Ok(GraphAlgo::new()),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "wgraph=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
