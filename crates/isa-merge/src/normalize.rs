/// Maps one operand token to the form stored in the merged catalog.
///
/// Implementations must be pure: the same token always yields the same
/// output, regardless of mnemonic or position.
pub trait OperandNormalizer {
    fn normalize(&self, token: &str) -> String;

    fn normalize_all<'a, I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens.into_iter().map(|token| self.normalize(token)).collect()
    }
}

/// Leaves every token untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl OperandNormalizer for Identity {
    fn normalize(&self, token: &str) -> String {
        token.to_string()
    }
}

impl<F> OperandNormalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, token: &str) -> String {
        self(token)
    }
}
