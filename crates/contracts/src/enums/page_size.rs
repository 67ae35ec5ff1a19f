use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Page sizes the sales endpoint accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageSize {
    Five,
    Ten,
    Twenty,
    Fifty,
}

impl PageSize {
    pub fn value(&self) -> u32 {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
        }
    }

    pub fn all() -> Vec<PageSize> {
        vec![PageSize::Five, PageSize::Ten, PageSize::Twenty, PageSize::Fifty]
    }

    pub fn from_value(value: u32) -> Option<Self> {
        match value {
            5 => Some(PageSize::Five),
            10 => Some(PageSize::Ten),
            20 => Some(PageSize::Twenty),
            50 => Some(PageSize::Fifty),
            _ => None,
        }
    }

    /// Label for the page-size selector
    pub fn label(&self) -> String {
        format!("{} per page", self.value())
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Ten
    }
}

impl Serialize for PageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.value())
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u32::deserialize(deserializer)?;
        PageSize::from_value(value)
            .ok_or_else(|| serde::de::Error::custom(format!("unsupported page size: {value}")))
    }
}
