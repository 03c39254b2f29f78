//! JSON-lines dump and restore of a whole [`WeightedGraph`].
//!
//! A dump is one header record followed by vertex records sorted by key and
//! one edge record per unordered pair sorted by `(a, b)` with `a < b`.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{errors::GraphError, graph::WeightedGraph};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum DumpRecord {
    Header {
        version: u32,
        modification_count: u64,
        vertex_count: usize,
        edge_count: usize,
    },
    Vertex {
        key: i64,
        #[serde(with = "tag_encoding")]
        tag: f64,
        info: Option<String>,
    },
    Edge {
        a: i64,
        b: i64,
        weight: f64,
    },
}

/// Tags are free caller payload, so non-finite values are written as the
/// strings `"inf"`, `"-inf"` and `"NaN"`, which JSON numbers cannot hold.
mod tag_encoding {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Encoded {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(tag: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if tag.is_finite() {
            serializer.serialize_f64(*tag)
        } else if tag.is_nan() {
            serializer.serialize_str("NaN")
        } else if *tag > 0.0 {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Encoded::deserialize(deserializer)? {
            Encoded::Number(tag) => Ok(tag),
            Encoded::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!("invalid tag {other:?}"))),
            },
        }
    }
}

/// Writes `graph` to `path`, truncating whatever was there.
pub fn dump_graph_to_path<P: AsRef<Path>>(
    graph: &WeightedGraph,
    path: P,
) -> Result<(), GraphError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| GraphError::io(format!("{}: {e}", path.display())))?;
    dump_graph_to_writer(graph, BufWriter::new(file))?;
    debug!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph saved"
    );
    Ok(())
}

pub fn dump_graph_to_writer<W: Write>(
    graph: &WeightedGraph,
    mut writer: W,
) -> Result<(), GraphError> {
    write_record(
        &mut writer,
        &DumpRecord::Header {
            version: FORMAT_VERSION,
            modification_count: graph.modification_count(),
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
        },
    )?;

    let mut vertices: Vec<_> = graph.vertices().collect();
    vertices.sort_by_key(|vertex| vertex.key());
    for vertex in vertices {
        write_record(
            &mut writer,
            &DumpRecord::Vertex {
                key: vertex.key(),
                tag: vertex.tag(),
                info: vertex.info().map(str::to_owned),
            },
        )?;
    }

    let mut edges: Vec<_> = graph.edges().collect();
    edges.sort_by(|x, y| x.0.cmp(&y.0).then_with(|| x.1.cmp(&y.1)));
    for (a, b, weight) in edges {
        write_record(&mut writer, &DumpRecord::Edge { a, b, weight })?;
    }

    writer.flush().map_err(|e| GraphError::io(e.to_string()))
}

pub fn load_graph_from_path<P: AsRef<Path>>(path: P) -> Result<WeightedGraph, GraphError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| GraphError::io(format!("{}: {e}", path.display())))?;
    let graph = load_graph_from_reader(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Rebuilds a graph from a dump. The input is validated in full before the
/// graph is handed back, so a failed load never yields a partial graph.
pub fn load_graph_from_reader<R: BufRead>(reader: R) -> Result<WeightedGraph, GraphError> {
    let mut graph = WeightedGraph::new();
    let mut header: Option<(u64, usize, usize)> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| GraphError::io(e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }
        let record: DumpRecord = serde_json::from_str(&line)
            .map_err(|e| GraphError::encoding(format!("line {line_no}: {e}")))?;
        match record {
            DumpRecord::Header {
                version,
                modification_count,
                vertex_count,
                edge_count,
            } => {
                if header.is_some() {
                    return Err(GraphError::encoding(format!(
                        "line {line_no}: duplicate header"
                    )));
                }
                if version != FORMAT_VERSION {
                    return Err(GraphError::encoding(format!(
                        "unsupported format version {version}"
                    )));
                }
                header = Some((modification_count, vertex_count, edge_count));
            }
            _ if header.is_none() => {
                return Err(GraphError::encoding(format!(
                    "line {line_no}: record before header"
                )));
            }
            DumpRecord::Vertex { key, tag, info } => {
                if graph.contains_vertex(key) {
                    return Err(GraphError::encoding(format!(
                        "line {line_no}: duplicate vertex {key}"
                    )));
                }
                graph.add_vertex(key);
                if let Some(vertex) = graph.get_vertex_mut(key) {
                    vertex.set_tag(tag);
                    if let Some(info) = info {
                        vertex.set_info(info);
                    }
                }
            }
            DumpRecord::Edge { a, b, weight } => {
                validate_edge(&graph, a, b, weight)
                    .map_err(|msg| GraphError::encoding(format!("line {line_no}: {msg}")))?;
                graph.connect(a, b, weight);
            }
        }
    }

    let (modification_count, vertex_count, edge_count) =
        header.ok_or_else(|| GraphError::encoding("missing header"))?;
    if graph.vertex_count() != vertex_count || graph.edge_count() != edge_count {
        return Err(GraphError::encoding(format!(
            "header declares {vertex_count} vertices and {edge_count} edges, found {} and {}",
            graph.vertex_count(),
            graph.edge_count()
        )));
    }
    graph.restore_modification_count(modification_count);
    Ok(graph)
}

fn validate_edge(graph: &WeightedGraph, a: i64, b: i64, weight: f64) -> Result<(), String> {
    if a == b {
        return Err(format!("self loop on vertex {a}"));
    }
    if !graph.contains_vertex(a) || !graph.contains_vertex(b) {
        return Err(format!("edge {a}-{b} references an unknown vertex"));
    }
    if !weight.is_finite() || weight < 0.0 {
        return Err(format!("edge {a}-{b} has invalid weight {weight}"));
    }
    if graph.has_edge(a, b) {
        return Err(format!("duplicate edge {a}-{b}"));
    }
    Ok(())
}

fn write_record<W: Write>(writer: &mut W, record: &DumpRecord) -> Result<(), GraphError> {
    serde_json::to_writer(&mut *writer, record).map_err(|e| GraphError::encoding(e.to_string()))?;
    writer
        .write_all(b"\n")
        .map_err(|e| GraphError::io(e.to_string()))
}
