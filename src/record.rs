// Data shapes read from the JSON source files.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One product entry. Only `name` is typed; every other property is kept
/// as-is so the uploaded body matches what was read from disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Record {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// A (file, category) pair: one batch of records to upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub file: &'static str,
    pub category: &'static str,
}

/// Sources processed by the binary, in upload order.
pub const DEFAULT_SOURCES: [Source; 4] = [
    Source {
        file: "prescribed-medicines.json",
        category: "Prescribed Medicines",
    },
    Source {
        file: "otc-medicines.json",
        category: "OTC Medicines",
    },
    Source {
        file: "supplements.json",
        category: "Supplements",
    },
    Source {
        file: "healthcare-supplies.json",
        category: "Healthcare Supplies",
    },
];
