use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Sortable columns of the sales table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Customer,
    Quantity,
    Date,
}

impl SortKey {
    /// Code used as the prefix of the wire token
    pub fn code(&self) -> &'static str {
        match self {
            SortKey::Customer => "customer",
            SortKey::Quantity => "quantity",
            SortKey::Date => "date",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Customer => "Customer",
            SortKey::Quantity => "Quantity",
            SortKey::Date => "Date",
        }
    }

    pub fn all() -> Vec<SortKey> {
        vec![SortKey::Customer, SortKey::Quantity, SortKey::Date]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|key| key.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn code(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Sort key and direction sent to the backend as one token, e.g. `date_desc`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SalesSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SalesSort {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Every key starts out descending when first selected
    pub fn default_for(key: SortKey) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == SortDirection::Asc
    }

    pub fn token(&self) -> String {
        format!("{}_{}", self.key.code(), self.direction.code())
    }
}

impl Default for SalesSort {
    fn default() -> Self {
        Self::default_for(SortKey::Date)
    }
}

impl fmt::Display for SalesSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.key.code(), self.direction.code())
    }
}

impl FromStr for SalesSort {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((key, direction)) = s.rsplit_once('_') else {
            anyhow::bail!("sort token without direction: {s}");
        };
        let key = SortKey::from_code(key)
            .ok_or_else(|| anyhow::anyhow!("unknown sort key: {key}"))?;
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => anyhow::bail!("unknown sort direction: {other}"),
        };
        Ok(Self::new(key, direction))
    }
}

impl Serialize for SalesSort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SalesSort {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
