use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Four-component assembly version: `major.minor.build.revision`.
///
/// Ordering is component-wise (major, then minor, then build, then revision),
/// which the derived `Ord` gives us from field order. Components missing from
/// a parsed string are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssemblyVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

/// Everything below this is the deprecated Harmony v1 release line.
pub const HARMONY_V2_BOUNDARY: AssemblyVersion = AssemblyVersion::new(2, 0, 0, 0);

impl AssemblyVersion {
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid assembly version: {input}")]
pub struct ParseVersionError {
    pub input: String,
}

impl FromStr for AssemblyVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError {
            input: s.to_string(),
        };

        let mut parts = [0u32; 4];
        let mut count = 0;
        for piece in s.split('.') {
            if count == parts.len() {
                return Err(err());
            }
            parts[count] = piece.trim().parse().map_err(|_| err())?;
            count += 1;
        }
        if count == 0 {
            return Err(err());
        }

        Ok(AssemblyVersion::new(parts[0], parts[1], parts[2], parts[3]))
    }
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl Serialize for AssemblyVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AssemblyVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
