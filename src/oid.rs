//! Object Identifier (OID) type.
//!
//! OIDs are stored as `SmallVec<[u32; 16]>` to avoid heap allocation for common OIDs.
//! Every OID in the Ambari alert schema has 13 arcs or fewer.

use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;

/// Object Identifier.
///
/// Stored as a sequence of arc values (u32). Uses SmallVec to avoid
/// heap allocation for OIDs with 16 or fewer arcs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: SmallVec<[u32; 16]>,
}

impl Oid {
    /// Create an empty OID.
    pub fn empty() -> Self {
        Self {
            arcs: SmallVec::new(),
        }
    }

    /// Create an OID from arc values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambari_snmp_trap::oid::Oid;
    ///
    /// let oid = Oid::new([1, 3, 6, 1, 4, 1, 18060, 16]);
    /// assert_eq!(oid.len(), 8);
    /// ```
    pub fn new(arcs: impl IntoIterator<Item = u32>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of arcs.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambari_snmp_trap::oid::Oid;
    ///
    /// let oid = Oid::from_slice(&[1, 3, 6, 1, 4, 1, 18060, 16, 0]);
    /// assert_eq!(oid.to_string(), "1.3.6.1.4.1.18060.16.0");
    /// ```
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse an OID from dotted string notation (e.g., "1.3.6.1.4.1.18060.16").
    ///
    /// Empty segments are skipped, so a leading dot (".1.3.6") is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambari_snmp_trap::oid::Oid;
    ///
    /// let oid = Oid::parse("1.3.6.1.4.1.18060.16.1").unwrap();
    /// assert_eq!(oid.arcs(), &[1, 3, 6, 1, 4, 1, 18060, 16, 1]);
    ///
    /// assert!(Oid::parse("1.3.six").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::empty());
        }

        let mut arcs = SmallVec::new();

        for part in s.split('.') {
            if part.is_empty() {
                continue;
            }

            let arc: u32 = part
                .parse()
                .map_err(|_| Error::invalid_oid(s))?;

            arcs.push(arc);
        }

        Ok(Self { arcs })
    }

    /// Get the arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Get the number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check if this OID starts with another OID.
    ///
    /// An OID always starts with itself, and any OID starts with an empty OID.
    pub fn starts_with(&self, other: &Oid) -> bool {
        self.arcs.len() >= other.arcs.len() && self.arcs[..other.arcs.len()] == other.arcs[..]
    }

    /// Check if this OID lies strictly below `ancestor` in the tree.
    pub fn is_descendant_of(&self, ancestor: &Oid) -> bool {
        self.arcs.len() > ancestor.arcs.len() && self.starts_with(ancestor)
    }

    /// Get the parent OID (all arcs except the last).
    ///
    /// Returns `None` if the OID is empty.
    pub fn parent(&self) -> Option<Oid> {
        if self.arcs.is_empty() {
            None
        } else {
            Some(Oid {
                arcs: SmallVec::from_slice(&self.arcs[..self.arcs.len() - 1]),
            })
        }
    }

    /// Create a child OID by appending an arc.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambari_snmp_trap::oid::Oid;
    ///
    /// let entry = Oid::parse("1.3.6.1.4.1.18060.16.1.1.1").unwrap();
    /// assert_eq!(entry.child(2).to_string(), "1.3.6.1.4.1.18060.16.1.1.1.2");
    /// ```
    pub fn child(&self, arc: u32) -> Oid {
        let mut arcs = self.arcs.clone();
        arcs.push(arc);
        Oid { arcs }
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", arc)?;
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for Oid {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Self::from_slice(arcs)
    }
}

impl<const N: usize> From<[u32; N]> for Oid {
    fn from(arcs: [u32; N]) -> Self {
        Self::new(arcs)
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Oid {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.arcs.cmp(&other.arcs)
    }
}

/// Macro to create an OID from literal arcs.
///
/// # Examples
///
/// ```
/// use ambari_snmp_trap::oid;
///
/// let traps = oid!(1, 3, 6, 1, 4, 1, 18060, 16, 0);
/// assert_eq!(traps.to_string(), "1.3.6.1.4.1.18060.16.0");
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),* $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let oid = Oid::parse("1.3.6.1.4.1.18060.16").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1, 4, 1, 18060, 16]);
    }

    #[test]
    fn test_parse_leading_dot() {
        let oid = Oid::parse(".1.3.6.1").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(Oid::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_arc() {
        let err = Oid::parse("1.3.x.1").unwrap_err();
        assert!(matches!(err, Error::InvalidOid { ref input } if &**input == "1.3.x.1"));
    }

    #[test]
    fn test_parse_arc_overflow() {
        assert!(Oid::parse("1.3.4294967296").is_err());
    }

    #[test]
    fn test_display() {
        let oid = oid!(1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1, 9);
        assert_eq!(oid.to_string(), "1.3.6.1.4.1.18060.16.1.1.1.9");
        assert_eq!(format!("{:?}", oid), "Oid(1.3.6.1.4.1.18060.16.1.1.1.9)");
    }

    #[test]
    fn test_starts_with() {
        let field = oid!(1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1, 2);
        let alerts = oid!(1, 3, 6, 1, 4, 1, 18060, 16, 1);
        let traps = oid!(1, 3, 6, 1, 4, 1, 18060, 16, 0);

        assert!(field.starts_with(&alerts));
        assert!(!field.starts_with(&traps));
        assert!(field.starts_with(&field));
        assert!(field.starts_with(&Oid::empty()));
    }

    #[test]
    fn test_is_descendant_of_is_strict() {
        let alerts = oid!(1, 3, 6, 1, 4, 1, 18060, 16, 1);
        assert!(alerts.child(1).is_descendant_of(&alerts));
        assert!(!alerts.is_descendant_of(&alerts));
        assert!(!alerts.parent().unwrap().is_descendant_of(&alerts));
    }

    #[test]
    fn test_parent_and_child() {
        let entry = oid!(1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1);
        let field = entry.child(5);
        assert_eq!(field.parent(), Some(entry));
        assert!(Oid::empty().parent().is_none());
    }

    #[test]
    fn test_ordering() {
        let a = oid!(1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1, 2);
        let b = oid!(1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1, 10);
        assert!(a < b);
        assert!(a.parent().unwrap() < a);
    }

    #[test]
    fn test_fromstr_and_conversions() {
        let parsed: Oid = "1.3.6.1".parse().unwrap();
        assert_eq!(parsed, Oid::from([1, 3, 6, 1]));
        assert_eq!(parsed, Oid::from(&[1u32, 3, 6, 1][..]));
        assert!("1.3.bad".parse::<Oid>().is_err());
    }
}
