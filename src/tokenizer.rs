use anyhow::Result;

pub trait Tokenizer {
    fn count_tokens(&self, text: &str) -> usize;
}

#[cfg(feature = "token-counting")]
pub struct O200kTokenizer {
    bpe: tiktoken_rs::CoreBPE,
}

#[cfg(feature = "token-counting")]
impl O200kTokenizer {
    pub fn new() -> Result<Self> {
        use anyhow::Context;
        let bpe = tiktoken_rs::o200k_base().context("Failed to initialize o200k_base tokenizer")?;
        Ok(Self { bpe })
    }
}

#[cfg(feature = "token-counting")]
impl Tokenizer for O200kTokenizer {
    fn count_tokens(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }
}

/// Counts nothing; used when token counting is compiled out.
pub struct NullTokenizer;

impl Tokenizer for NullTokenizer {
    fn count_tokens(&self, _text: &str) -> usize {
        0
    }
}

#[cfg(feature = "token-counting")]
pub fn default_tokenizer() -> Result<Box<dyn Tokenizer>> {
    Ok(Box::new(O200kTokenizer::new()?))
}

#[cfg(not(feature = "token-counting"))]
pub fn default_tokenizer() -> Result<Box<dyn Tokenizer>> {
    Ok(Box::new(NullTokenizer))
}
