//! Result emission.
//!
//! Discovered graphs are streamed as headerless graph6 lines, one per
//! discovery, flushed immediately so a consuming pipeline sees results as
//! they are found rather than at run completion. A downstream consumer
//! closing the stream early is an orderly-termination signal, not an
//! error.

use std::io::{self, ErrorKind, Write};

use crate::graph::AdjacencyMatrix;
use crate::graph6;

/// Outcome of an emission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutcome {
    /// The line was written and flushed.
    Written,
    /// The downstream consumer closed the stream; stop emitting.
    Closed,
}

/// Writes discovered graphs to an output stream as graph6 lines.
#[derive(Debug)]
pub struct ResultEmitter<W: Write> {
    writer: W,
    emitted: usize,
}

impl<W: Write> ResultEmitter<W> {
    /// Wraps an output stream.
    pub fn new(writer: W) -> Self {
        Self { writer, emitted: 0 }
    }

    /// Encodes `matrix`, writes one line, and flushes.
    ///
    /// `BrokenPipe` from the write or the flush maps to
    /// [`EmitOutcome::Closed`]; any other I/O error propagates.
    pub fn emit(&mut self, matrix: &AdjacencyMatrix) -> io::Result<EmitOutcome> {
        let line = graph6::encode(matrix);
        let result = writeln!(self.writer, "{line}").and_then(|()| self.writer.flush());
        match result {
            Ok(()) => {
                self.emitted += 1;
                Ok(EmitOutcome::Written)
            }
            Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(EmitOutcome::Closed),
            Err(e) => Err(e),
        }
    }

    /// Number of lines successfully written.
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k4() -> AdjacencyMatrix {
        let mut m = AdjacencyMatrix::new(4);
        for (u, v) in AdjacencyMatrix::all_pairs(4) {
            m.set_edge(u, v, true);
        }
        m
    }

    #[test]
    fn test_emit_writes_flushed_line() {
        let mut buf = Vec::new();
        let mut emitter = ResultEmitter::new(&mut buf);
        assert_eq!(emitter.emit(&k4()).unwrap(), EmitOutcome::Written);
        assert_eq!(emitter.emitted(), 1);
        assert_eq!(String::from_utf8(buf).unwrap(), "C~\n");
    }

    struct BrokenPipeWriter;

    impl Write for BrokenPipeWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "pipe closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_broken_pipe_is_orderly() {
        let mut emitter = ResultEmitter::new(BrokenPipeWriter);
        assert_eq!(emitter.emit(&k4()).unwrap(), EmitOutcome::Closed);
        assert_eq!(emitter.emitted(), 0);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_other_io_errors_propagate() {
        let mut emitter = ResultEmitter::new(FailingWriter);
        assert!(emitter.emit(&k4()).is_err());
    }
}
