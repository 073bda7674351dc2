/// Capability seam over user-agent generation so tests can pin a fixed
/// string instead of depending on a random pool.
pub trait UserAgentProvider {
    fn next(&self) -> String;
}

pub struct RandomUserAgent;

impl UserAgentProvider for RandomUserAgent {
    fn next(&self) -> String {
        fake_user_agent::get_chrome_rua().to_string()
    }
}

pub struct FixedUserAgent(pub String);

impl UserAgentProvider for FixedUserAgent {
    fn next(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedUserAgent, RandomUserAgent, UserAgentProvider};

    #[test]
    fn random_provider_returns_a_plausible_agent() {
        let agent = RandomUserAgent.next();

        assert!(agent.contains("Mozilla"));
    }

    #[test]
    fn fixed_provider_repeats_its_string() {
        let provider = FixedUserAgent("Mozilla/5.0 (test)".to_string());

        assert_eq!(provider.next(), provider.next());
    }
}
