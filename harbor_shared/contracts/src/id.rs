#[cfg_attr(feature = "mock", mockall::automock)]
pub trait IdService: Send + Sync + 'static {
    /// Generates a short random token which is unique within this process
    /// with high probability.
    fn generate_token(&self) -> String;
}

#[cfg(feature = "mock")]
impl MockIdService {
    pub fn with_generate_token(mut self, token: impl Into<String>) -> Self {
        self.expect_generate_token()
            .once()
            .return_const(token.into());
        self
    }
}
