use harbor_shared_contracts::id::IdService;
use rand::{distributions::Uniform, Rng};

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy)]
pub struct IdServiceImpl {
    token_length: usize,
}

impl IdServiceImpl {
    pub const DEFAULT_TOKEN_LENGTH: usize = 9;

    pub fn new(token_length: usize) -> Self {
        Self { token_length }
    }
}

impl Default for IdServiceImpl {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOKEN_LENGTH)
    }
}

impl IdService for IdServiceImpl {
    #[tracing::instrument(level = "trace", skip(self), ret)]
    fn generate_token(&self) -> String {
        rand::thread_rng()
            .sample_iter(Uniform::new(0, TOKEN_ALPHABET.len()))
            .take(self.token_length)
            .map(|i| TOKEN_ALPHABET[i] as char)
            .collect()
    }
}
