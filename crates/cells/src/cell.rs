//! Cell value and type definitions.

use std::fmt;

/// A typed scalar value as stored inside an encoded row.
///
/// `Str` holds raw bytes; the codec never assumes UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Null,
    I64(i64),
    Str(Vec<u8>),
}

/// The schema-side type of a [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Null,
    I64,
    Str,
}

impl Cell {
    /// Build a `Str` cell from text.
    pub fn str_from(s: &str) -> Self {
        Cell::Str(s.as_bytes().to_vec())
    }

    /// The [`CellType`] this value belongs to.
    pub fn cell_type(&self) -> CellType {
        match self {
            Cell::Null => CellType::Null,
            Cell::I64(_) => CellType::I64,
            Cell::Str(_) => CellType::Str,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&[u8]> {
        match self {
            Cell::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellType::Null => "null",
            CellType::I64 => "i64",
            CellType::Str => "str",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variants() {
        assert!(Cell::Null.is_null());
        assert_eq!(Cell::Null.as_i64(), None);
        assert_eq!(Cell::Null.as_str(), None);

        let n = Cell::I64(-5);
        assert!(!n.is_null());
        assert_eq!(n.as_i64(), Some(-5));
        assert_eq!(n.as_str(), None);

        let s = Cell::str_from("abc");
        assert_eq!(s.as_str(), Some(&b"abc"[..]));
        assert_eq!(s.as_i64(), None);
    }

    #[test]
    fn cell_type_reports_variant() {
        assert_eq!(Cell::Null.cell_type(), CellType::Null);
        assert_eq!(Cell::I64(0).cell_type(), CellType::I64);
        assert_eq!(Cell::Str(Vec::new()).cell_type(), CellType::Str);
    }
}
