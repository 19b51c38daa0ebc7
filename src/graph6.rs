//! graph6 encoding and decoding.
//!
//! The compact ASCII format of McKay's nauty tools for unlabeled simple
//! graphs: a size prefix followed by the upper-triangle adjacency bits
//! packed six per printable character. Results are always written
//! *without* the optional `>>graph6<<` header so downstream filters can
//! consume one bare line per graph.

use crate::graph::AdjacencyMatrix;

/// Encodes a graph as a headerless graph6 string.
pub fn encode(matrix: &AdjacencyMatrix) -> String {
    let n = matrix.n();
    let mut out = Vec::new();
    encode_size(n, &mut out);

    let mut group = 0u8;
    let mut filled = 0;
    for v in 1..n {
        for u in 0..v {
            group <<= 1;
            if matrix.has_edge(u, v) {
                group |= 1;
            }
            filled += 1;
            if filled == 6 {
                out.push(group + 63);
                group = 0;
                filled = 0;
            }
        }
    }
    if filled > 0 {
        group <<= 6 - filled;
        out.push(group + 63);
    }

    // All bytes are 63..=126, always valid ASCII.
    String::from_utf8(out).expect("graph6 bytes are printable ASCII")
}

/// Decodes a headerless graph6 string.
pub fn decode(s: &str) -> Result<AdjacencyMatrix, String> {
    let bytes = s.trim_end().as_bytes();
    if let Some(&b) = bytes.iter().find(|&&b| !(63..=126).contains(&b)) {
        return Err(format!("invalid graph6 byte {b:#04x}"));
    }
    let (n, rest) = decode_size(bytes)?;

    let bit_count = n * n.saturating_sub(1) / 2;
    let needed = bit_count.div_ceil(6);
    if rest.len() < needed {
        return Err(format!(
            "truncated graph6 string: {} data bytes, need {needed} for n = {n}",
            rest.len()
        ));
    }

    let mut matrix = AdjacencyMatrix::new(n);
    let mut bit = 0;
    'outer: for v in 1..n {
        for u in 0..v {
            if bit >= bit_count {
                break 'outer;
            }
            let byte = rest[bit / 6] - 63;
            if byte & (1 << (5 - bit % 6)) != 0 {
                matrix.set_edge(u, v, true);
            }
            bit += 1;
        }
    }
    Ok(matrix)
}

fn encode_size(n: usize, out: &mut Vec<u8>) {
    if n <= 62 {
        out.push(n as u8 + 63);
    } else if n <= 258_047 {
        out.push(126);
        for shift in [12, 6, 0] {
            out.push(((n >> shift) & 0x3f) as u8 + 63);
        }
    } else {
        out.push(126);
        out.push(126);
        for shift in [30, 24, 18, 12, 6, 0] {
            out.push(((n >> shift) & 0x3f) as u8 + 63);
        }
    }
}

fn decode_size(bytes: &[u8]) -> Result<(usize, &[u8]), String> {
    match bytes {
        [] => Err("empty graph6 string".into()),
        [126, 126, rest @ ..] => {
            if rest.len() < 6 {
                return Err("truncated graph6 size prefix".into());
            }
            let n = rest[..6]
                .iter()
                .fold(0usize, |acc, &b| (acc << 6) | usize::from(b - 63));
            Ok((n, &rest[6..]))
        }
        [126, rest @ ..] => {
            if rest.len() < 3 {
                return Err("truncated graph6 size prefix".into());
            }
            let n = rest[..3]
                .iter()
                .fold(0usize, |acc, &b| (acc << 6) | usize::from(b - 63));
            Ok((n, &rest[3..]))
        }
        [first, rest @ ..] => Ok((usize::from(first - 63), rest)),
    }
}
