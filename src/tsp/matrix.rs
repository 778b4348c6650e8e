//! Symmetric distance matrix and its text loader.
//!
//! Input rows may be given either in full (`n` entries each) or as a lower
//! triangle (row `i` holds columns `0..=i`). Both are stored as one fully
//! populated, symmetric, row-major table.

use crate::error::{EvoError, EvoResult};
use std::path::Path;
use std::str::FromStr;

/// Square, symmetric table of non-negative integer distances between
/// cities `0..n`.
///
/// Immutable once built.
///
/// # Examples
///
/// ```
/// use tsp_tournament::tsp::DistanceMatrix;
///
/// let m = DistanceMatrix::from_rows(vec![vec![0], vec![2, 0], vec![9, 6, 0]]).unwrap();
/// assert_eq!(m.len(), 3);
/// assert_eq!(m.dist(0, 2), 9);
/// assert_eq!(m.dist(2, 0), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Full,
    Lower,
}

/// Determines the row layout, or returns the index of the first row whose
/// length fits neither layout.
fn detect_layout(lens: &[usize]) -> Result<Layout, (usize, String)> {
    let n = lens.len();
    let layout = match lens.first() {
        None => return Ok(Layout::Full),
        Some(&len) if len == n => Layout::Full,
        Some(&1) => Layout::Lower,
        Some(&len) => {
            return Err((
                0,
                format!("first row has {len} entries, expected {n} (full) or 1 (lower triangle)"),
            ))
        }
    };
    for (i, &len) in lens.iter().enumerate() {
        let expected = match layout {
            Layout::Full => n,
            Layout::Lower => i + 1,
        };
        if len != expected {
            return Err((i, format!("row {i} has {len} entries, expected {expected}")));
        }
    }
    Ok(layout)
}

impl DistanceMatrix {
    /// Builds a matrix from full or lower-triangular rows.
    ///
    /// # Errors
    ///
    /// Returns [`EvoError::InvalidArgument`] if the rows are neither all of
    /// length `n` nor lower-triangular, or if a full matrix is not
    /// symmetric.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> EvoResult<Self> {
        let lens: Vec<usize> = rows.iter().map(Vec::len).collect();
        let layout = detect_layout(&lens).map_err(|(_, msg)| EvoError::invalid_argument(msg))?;
        Self::build(rows, layout)
    }

    fn build(rows: Vec<Vec<u64>>, layout: Layout) -> EvoResult<Self> {
        let n = rows.len();
        let mut data = vec![0u64; n * n];
        for (i, row) in rows.iter().enumerate() {
            for (j, &d) in row.iter().enumerate() {
                data[i * n + j] = d;
                if layout == Layout::Lower {
                    data[j * n + i] = d;
                }
            }
        }

        if layout == Layout::Full {
            for i in 0..n {
                for j in 0..i {
                    let (lower, upper) = (data[i * n + j], data[j * n + i]);
                    if lower != upper {
                        return Err(EvoError::invalid_argument(format!(
                            "distance matrix is not symmetric: d({i},{j}) = {lower} but d({j},{i}) = {upper}"
                        )));
                    }
                }
            }
        }

        Ok(Self { n, data })
    }

    /// Parses the distance-file text format.
    ///
    /// The first line is a header and is discarded. Each following
    /// non-blank line is one row of whitespace-separated non-negative
    /// integers.
    ///
    /// # Errors
    ///
    /// Returns [`EvoError::Parse`] for a malformed token or row shape, and
    /// [`EvoError::InvalidArgument`] for an asymmetric full matrix.
    pub fn parse(text: &str) -> EvoResult<Self> {
        let mut rows = Vec::new();
        let mut line_numbers = Vec::new();
        for (idx, line) in text.lines().enumerate().skip(1) {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|tok| {
                    tok.parse::<u64>().map_err(|e| {
                        EvoError::parse(line_no, format!("invalid distance {tok:?}: {e}"))
                    })
                })
                .collect::<EvoResult<Vec<u64>>>()?;
            rows.push(row);
            line_numbers.push(line_no);
        }

        let lens: Vec<usize> = rows.iter().map(Vec::len).collect();
        let layout =
            detect_layout(&lens).map_err(|(row, msg)| EvoError::parse(line_numbers[row], msg))?;
        let matrix = Self::build(rows, layout)?;
        log::debug!("parsed {} cities ({:?} layout)", matrix.n, layout);
        Ok(matrix)
    }

    /// Reads and parses a distance file.
    ///
    /// # Errors
    ///
    /// Returns [`EvoError::Io`] if the file cannot be read, otherwise the
    /// errors of [`parse`](Self::parse).
    pub fn load<P: AsRef<Path>>(path: P) -> EvoResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| EvoError::io(path, e))?;
        let matrix = Self::parse(&text)?;
        log::info!("loaded {} cities from {}", matrix.n, path.display());
        Ok(matrix)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix has no cities.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between cities `a` and `b`.
    ///
    /// Always reads the lower triangle (larger index first).
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn dist(&self, a: usize, b: usize) -> u64 {
        let (hi, lo) = if a > b { (a, b) } else { (b, a) };
        self.data[hi * self.n + lo]
    }
}

impl FromStr for DistanceMatrix {
    type Err = EvoError;

    fn from_str(s: &str) -> EvoResult<Self> {
        Self::parse(s)
    }
}
