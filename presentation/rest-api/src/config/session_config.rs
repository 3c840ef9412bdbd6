use anyhow::Context;
use persistence::scan_session::repository::DEFAULT_SESSION_CAPACITY;

/// Limits for the in-memory session store
///
/// Environment variables:
/// - SESSION_CAPACITY: maximum number of live sessions (default: 10000)
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub capacity: usize,
}

impl SessionConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var("SESSION_CAPACITY") {
            Ok(raw) => Self::parse(&raw),
            Err(_) => Ok(Self {
                capacity: DEFAULT_SESSION_CAPACITY,
            }),
        }
    }

    fn parse(raw: &str) -> anyhow::Result<Self> {
        let capacity = raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("SESSION_CAPACITY must be a number, got {raw:?}"))?;
        anyhow::ensure!(capacity > 0, "SESSION_CAPACITY must be greater than zero");
        Ok(Self { capacity })
    }
}
