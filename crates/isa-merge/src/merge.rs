use tracing::debug;

use crate::model::{
    InstructionTable, MergedEntry, MergedTable, NativeForm, PseudoForm, PseudoTable,
};
use crate::normalize::{Identity, OperandNormalizer};
use crate::pattern::operand_tokens;

/// Builds the merged catalog from a native table and a pseudo table.
///
/// The passes run in a fixed order: pseudo placeholders, then native
/// entries (which replace placeholders for shared mnemonics), then pseudo
/// rules. Reordering them drops pseudo data for shared mnemonics.
#[derive(Debug, Default)]
pub struct Merger<N = Identity> {
    normalizer: N,
    table: MergedTable,
}

impl Merger<Identity> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: OperandNormalizer> Merger<N> {
    pub fn with_normalizer(normalizer: N) -> Self {
        Self {
            normalizer,
            table: MergedTable::new(),
        }
    }

    pub fn init_from_pseudo(&mut self, pseudo: &PseudoTable) {
        for mnemonic in pseudo.keys() {
            self.table.insert(mnemonic.clone(), MergedEntry::placeholder());
        }
    }

    /// Replaces the entry of every native mnemonic. An existing key keeps
    /// its position in the table.
    pub fn fill_from_native(&mut self, instructions: &InstructionTable) {
        for (mnemonic, instruction) in instructions {
            let mut entry = MergedEntry::with_format(instruction.format.clone());
            entry.native = instruction
                .variants
                .iter()
                .map(|variant| NativeForm {
                    description: variant.description.clone(),
                    operands: self
                        .normalizer
                        .normalize_all(variant.operands.iter().map(String::as_str)),
                    code: variant.code.clone(),
                })
                .collect();
            debug!(%mnemonic, variants = entry.native.len(), "native entry");
            self.table.insert(mnemonic.clone(), entry);
        }
    }

    pub fn fill_from_pseudo(&mut self, pseudo: &PseudoTable) {
        for (mnemonic, rules) in pseudo {
            let entry = self
                .table
                .entry(mnemonic.clone())
                .or_insert_with(MergedEntry::placeholder);
            for rule in rules {
                let tokens = operand_tokens(&rule.pattern);
                entry.pseudo.push(PseudoForm {
                    description: rule.description.clone(),
                    operands: self
                        .normalizer
                        .normalize_all(tokens.iter().map(String::as_str)),
                    replacement: rule.replacement.clone(),
                });
            }
            debug!(%mnemonic, rules = rules.len(), "pseudo rules");
        }
    }

    pub fn finish(self) -> MergedTable {
        self.table
    }
}

/// Runs all three passes with the identity normalizer.
pub fn merge(instructions: &InstructionTable, pseudo: &PseudoTable) -> MergedTable {
    merge_with(Identity, instructions, pseudo)
}

pub fn merge_with<N: OperandNormalizer>(
    normalizer: N,
    instructions: &InstructionTable,
    pseudo: &PseudoTable,
) -> MergedTable {
    let mut merger = Merger::with_normalizer(normalizer);
    merger.init_from_pseudo(pseudo);
    merger.fill_from_native(instructions);
    merger.fill_from_pseudo(pseudo);
    merger.finish()
}
