//! Reads whitespace-delimited (source, destination) word pairs into a graph.

use std::borrow::Cow;
use std::io::BufRead;
use std::path::Path;

use crate::graph::Digraph;
use crate::types::DigraphResult;

/// Reader for word-reference dictionaries.
///
/// The input is a stream of tokens separated by any whitespace, newlines
/// included. Consecutive tokens form `(source, destination)` pairs and each
/// pair becomes the edge `source -> destination`.
pub struct PairReader;

impl PairReader {
    /// Read a dictionary file into a Digraph.
    pub fn read_from_file(path: &Path) -> DigraphResult<Digraph<String>> {
        let file = std::fs::File::open(path)?;
        Self::read_from(std::io::BufReader::new(file))
    }

    /// Read from any buffered reader into a Digraph.
    ///
    /// Tokens are split on ASCII whitespace and taken as raw bytes. A token
    /// that is not valid UTF-8 is decoded lossily and logged.
    pub fn read_from(mut reader: impl BufRead) -> DigraphResult<Digraph<String>> {
        let mut graph = Digraph::new();
        let mut pending: Option<String> = None;
        let mut pairs = 0usize;
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            let tokens = line
                .split(u8::is_ascii_whitespace)
                .filter(|token| !token.is_empty());
            for token in tokens {
                let word = decode_token(token);
                match pending.take() {
                    None => pending = Some(word),
                    Some(source) => {
                        graph.insert_vertex(source.clone());
                        graph.insert_vertex(word.clone());
                        graph.insert_edge(source, word);
                        pairs += 1;
                    }
                }
            }
        }

        if let Some(dangling) = pending {
            log::warn!("Ignoring unpaired trailing token {:?}", dangling);
        }
        log::debug!(
            "Read {} pairs: {} vertices, {} edges",
            pairs,
            graph.vertex_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    /// Read pairs from a string.
    pub fn read_str(input: &str) -> DigraphResult<Digraph<String>> {
        Self::read_from(input.as_bytes())
    }
}

fn decode_token(token: &[u8]) -> String {
    match String::from_utf8_lossy(token) {
        Cow::Borrowed(word) => word.to_owned(),
        Cow::Owned(word) => {
            log::warn!("Token {:?} is not valid UTF-8, read as {:?}", token, word);
            word
        }
    }
}
