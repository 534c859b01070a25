use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Native instructions keyed by mnemonic, in document order.
pub type InstructionTable = IndexMap<String, Instruction>;

/// Pseudo-instruction rules keyed by mnemonic, in document order.
pub type PseudoTable = IndexMap<String, Vec<PseudoRule>>;

/// Merged catalog keyed by mnemonic.
pub type MergedTable = IndexMap<String, MergedEntry>;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Instruction {
    pub format: String,
    pub variants: Vec<Variant>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    pub description: String,
    pub operands: Vec<String>,
    pub code: Value,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PseudoRule {
    pub pattern: String,
    pub description: String,
    pub replacement: Value,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MergedEntry {
    pub format: String,
    pub native: Vec<NativeForm>,
    pub pseudo: Vec<PseudoForm>,
}

impl MergedEntry {
    /// Entry with no format and no forms, used before native data is known.
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NativeForm {
    pub description: String,
    pub operands: Vec<String>,
    pub code: Value,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PseudoForm {
    pub description: String,
    pub operands: Vec<String>,
    pub replacement: Value,
}

/// Counts describing a finished merge.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct MergeStats {
    pub entries: usize,
    pub native_only: usize,
    pub pseudo_only: usize,
    pub shared: usize,
    pub native_forms: usize,
    pub pseudo_forms: usize,
}

impl MergeStats {
    pub fn from_table(table: &MergedTable) -> Self {
        let mut stats = Self {
            entries: table.len(),
            ..Self::default()
        };
        for entry in table.values() {
            stats.native_forms += entry.native.len();
            stats.pseudo_forms += entry.pseudo.len();
            match (entry.native.is_empty(), entry.pseudo.is_empty()) {
                (false, true) => stats.native_only += 1,
                (true, false) => stats.pseudo_only += 1,
                (false, false) => stats.shared += 1,
                (true, true) => {}
            }
        }
        stats
    }
}
