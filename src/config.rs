use std::env;

#[derive(Clone)]
pub struct Config {
    pub preview_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            preview_limit: env::var("PREVIEW_LIMIT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("PREVIEW_LIMIT must be a number"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { preview_limit: 10 }
    }
}
