//! Filtration Ingestion
//!
//! A filtration is the list of simplices sorted by
//! (value, dimension, vertices). The position of a simplex in this order
//! is its id for the rest of the pipeline, and the sort is what places
//! faces before their cofaces.
//!
//! ## Record Format
//!
//! One simplex per line, whitespace separated:
//!
//! ```text
//! <value> <dimension> <vertex_0> ... <vertex_dimension>
//! ```
//!
//! Lines that cannot supply a valid simplex are skipped with a warning.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use super::simplex::{Simplex, VertexId};
use crate::error::{PersistenceError, Result};

/// An ordered, immutable sequence of simplices
#[derive(Debug, Clone, Default)]
pub struct Filtration {
    simplices: Vec<Simplex>,
}

impl Filtration {
    /// Sort simplices into filtration order.
    ///
    /// A vertex set that occurs more than once keeps only its earliest
    /// occurrence in that order.
    pub fn from_simplices(mut simplices: Vec<Simplex>) -> Self {
        simplices.sort_by(|a, b| a.filtration_cmp(b));

        let before = simplices.len();
        let mut seen: HashMap<Vec<VertexId>, f64> = HashMap::with_capacity(before);
        simplices.retain(|s| match seen.get(s.vertices()) {
            Some(&first) => {
                warn!(
                    "duplicate simplex {:?} at {} (first seen at {}), dropped",
                    s.vertices(),
                    s.value(),
                    first
                );
                false
            }
            None => {
                seen.insert(s.vertices().to_vec(), s.value());
                true
            }
        });
        if simplices.len() < before {
            debug!("{} duplicate simplices removed", before - simplices.len());
        }

        Self { simplices }
    }

    /// Parse records from a reader. Malformed lines are logged and skipped.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut simplices = Vec::new();
        let mut skipped = 0usize;

        for (idx, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let record = std::str::from_utf8(&bytes)
                .map_err(|_| PersistenceError::malformed(idx + 1, "invalid UTF-8"))
                .and_then(|line| parse_record(line, idx + 1));
            match record {
                Ok(Some(simplex)) => simplices.push(simplex),
                Ok(None) => {}
                Err(e) => {
                    warn!("{}", e);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            warn!("{} malformed records skipped", skipped);
        }
        Ok(Self::from_simplices(simplices))
    }

    /// Read a filtration file
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ingest_err = |source| PersistenceError::Ingest {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(ingest_err)?;
        Self::parse(BufReader::new(file)).map_err(|e| match e {
            PersistenceError::Io(source) => ingest_err(source),
            other => other,
        })
    }

    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// Simplex with the given id
    pub fn get(&self, id: usize) -> Option<&Simplex> {
        self.simplices.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Simplex> {
        self.simplices.iter()
    }

    pub fn simplices(&self) -> &[Simplex] {
        &self.simplices
    }

    /// Dimension of every simplex, indexed by id
    pub fn dimensions(&self) -> Vec<usize> {
        self.simplices.iter().map(Simplex::dimension).collect()
    }

    /// Filtration value of every simplex, indexed by id
    pub fn values(&self) -> Vec<f64> {
        self.simplices.iter().map(Simplex::value).collect()
    }

    pub fn max_dimension(&self) -> Option<usize> {
        self.simplices.iter().map(Simplex::dimension).max()
    }

    /// Vertex set to id lookup, built fresh for each caller
    pub fn index(&self) -> HashMap<&[VertexId], usize> {
        self.simplices
            .iter()
            .enumerate()
            .map(|(id, s)| (s.vertices(), id))
            .collect()
    }

    /// Id of the simplex with exactly these (ascending) vertices
    pub fn index_of(&self, vertices: &[VertexId]) -> Option<usize> {
        self.simplices.iter().position(|s| s.vertices() == vertices)
    }

    /// Codimension-1 faces that are absent or do not precede their coface,
    /// as (coface id, face vertices).
    pub fn missing_faces(&self) -> Vec<(usize, Vec<VertexId>)> {
        let index = self.index();
        let mut missing = Vec::new();
        for (id, simplex) in self.simplices.iter().enumerate() {
            for face in simplex.faces() {
                match index.get(face.as_slice()) {
                    Some(&face_id) if face_id < id => {}
                    _ => missing.push((id, face)),
                }
            }
        }
        missing
    }

    /// Is every face present at a smaller index than its coface?
    pub fn is_closed(&self) -> bool {
        self.missing_faces().is_empty()
    }
}

impl<'a> IntoIterator for &'a Filtration {
    type Item = &'a Simplex;
    type IntoIter = std::slice::Iter<'a, Simplex>;

    fn into_iter(self) -> Self::IntoIter {
        self.simplices.iter()
    }
}

/// Parse one record. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_record(line: &str, line_no: usize) -> Result<Option<Simplex>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    let value: f64 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| PersistenceError::malformed(line_no, "invalid filtration value"))?;
    if !value.is_finite() {
        return Err(PersistenceError::malformed(line_no, "filtration value is not finite"));
    }

    let dimension: usize = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| PersistenceError::malformed(line_no, "invalid dimension"))?;
    let expected = dimension
        .checked_add(1)
        .ok_or_else(|| PersistenceError::malformed(line_no, "dimension out of range"))?;

    let vertices = fields
        .take(expected)
        .map(|f| {
            f.parse::<VertexId>().map_err(|_| {
                PersistenceError::malformed(line_no, format!("invalid vertex id {f:?}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    if vertices.len() != expected {
        return Err(PersistenceError::malformed(
            line_no,
            format!("expected {} vertex ids, found {}", expected, vertices.len()),
        ));
    }

    Simplex::new(value, vertices)
        .map(Some)
        .ok_or_else(|| PersistenceError::malformed(line_no, "repeated vertex id"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse_str(text: &str) -> Filtration {
        Filtration::parse(Cursor::new(text)).unwrap()
    }

    #[test]
    fn test_parse_and_sort() {
        let f = parse_str("1.0 1 0 1\n0.0 0 1\n0.0 0 0\n");
        assert_eq!(f.len(), 3);
        assert_eq!(f.get(0).unwrap().vertices(), &[0]);
        assert_eq!(f.get(1).unwrap().vertices(), &[1]);
        assert_eq!(f.get(2).unwrap().vertices(), &[0, 1]);
        assert!(f.is_closed());
    }

    #[test]
    fn test_ties_broken_by_dimension_then_vertices() {
        let f = parse_str("0 1 0 1\n0 0 1\n0 0 0\n0 1 0 2\n0 0 2\n");
        let order: Vec<Vec<usize>> = f.iter().map(|s| s.vertices().to_vec()).collect();
        assert_eq!(order, vec![vec![0], vec![1], vec![2], vec![0, 1], vec![0, 2]]);
    }

    #[test]
    fn test_malformed_records_skipped() {
        let f = parse_str("0 0 0\n1 1 0\nabc 0 1\n0 x 1\n1 1 2 2\n0 0 -3\nnan 0 7\n0 0 1 99\n");
        // only "0 0 0" and "0 0 1 99" (trailing token ignored) survive
        assert_eq!(f.len(), 2);
        assert_eq!(f.get(1).unwrap().vertices(), &[1]);
    }

    #[test]
    fn test_infinite_values_rejected() {
        let f = parse_str("0 0 0\n0 0 1\ninf 1 0 1\n-inf 0 2\n");
        assert_eq!(f.len(), 2);
        assert!(f.values().iter().all(|v| v.is_finite()));
        assert!(matches!(
            parse_record("inf 1 0 1", 3),
            Err(PersistenceError::MalformedRecord { line: 3, .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_line_skipped() {
        let bytes: &[u8] = b"0 0 0\n0 0 1\n\xff\xfe garbage\n1 1 0 1\n";
        let f = Filtration::parse(Cursor::new(bytes)).unwrap();
        assert_eq!(f.len(), 3);
        assert_eq!(f.index_of(&[0, 1]), Some(2));
        assert!(f.is_closed());
    }

    #[test]
    fn test_parse_record_errors() {
        let err = parse_record("1.5 2 0 1", 7).unwrap_err();
        assert!(matches!(err, PersistenceError::MalformedRecord { line: 7, .. }));
        assert!(parse_record("   ", 1).unwrap().is_none());
        assert!(parse_record("# comment", 1).unwrap().is_none());
    }

    #[test]
    fn test_empty_source() {
        let f = parse_str("");
        assert!(f.is_empty());
        assert_eq!(f.max_dimension(), None);
    }

    #[test]
    fn test_duplicates_keep_earliest() {
        let f = parse_str("0 0 0\n0 0 1\n2 1 0 1\n1 1 1 0\n");
        assert_eq!(f.len(), 3);
        assert_eq!(f.get(2).unwrap().value(), 1.0);
    }

    #[test]
    fn test_missing_faces() {
        let f = parse_str("0 0 0\n0 0 1\n1 2 0 1 2\n");
        assert!(!f.is_closed());
        let missing = f.missing_faces();
        assert_eq!(missing.len(), 3);
        assert!(missing.iter().all(|(id, _)| *id == 2));
    }

    #[test]
    fn test_read_missing_file() {
        let err = Filtration::read("/nonexistent/filtration.txt").unwrap_err();
        assert!(matches!(err, PersistenceError::Ingest { .. }));
    }

    #[test]
    fn test_index_of() {
        let f = parse_str("0 0 0\n0 0 1\n1 1 0 1\n");
        assert_eq!(f.index_of(&[0, 1]), Some(2));
        assert_eq!(f.index_of(&[0, 2]), None);
        assert_eq!(f.dimensions(), vec![0, 0, 1]);
        assert_eq!(f.values(), vec![0.0, 0.0, 1.0]);
    }
}
