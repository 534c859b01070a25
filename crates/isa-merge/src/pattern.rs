//! Operand extraction from pseudo-instruction patterns.
//!
//! A pattern looks like `"mnemonic op1, op2,op3"`. Everything after the
//! first space is the operand list; spaces inside it are dropped and the
//! rest is split on commas.
//!
//! A pattern with no operand list (`"nop"`) yields a single empty token,
//! not an empty list. Downstream consumers of the merged catalog read that
//! shape, so it is kept as is.

/// Returns the operand-list part of `pattern`, or `""` when there is none.
pub fn operand_list(pattern: &str) -> &str {
    pattern.split_once(' ').map_or("", |(_, rest)| rest)
}

/// Splits `pattern` into its operand tokens.
pub fn operand_tokens(pattern: &str) -> Vec<String> {
    let compact = operand_list(pattern).replace(' ', "");
    compact.split(',').map(str::to_string).collect()
}
