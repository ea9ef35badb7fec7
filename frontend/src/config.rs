use common::models::PublicConfig;
use std::rc::Rc;

/// Where the site config load has got to.

#[derive(Clone, PartialEq, Debug, Default)]
pub enum ConfigStatus {
    #[default]
    Loading,
    Ready(Rc<PublicConfig>),
    Failed,
}

/// What to do with an attempt that is waiting to be sent.

#[derive(PartialEq, Debug)]
pub enum Launch<'a> {
    Wait,
    Send(&'a PublicConfig),
    Unavailable,
}

impl ConfigStatus {
    pub fn launch(&self) -> Launch<'_> {
        match self {
            ConfigStatus::Loading => Launch::Wait,
            ConfigStatus::Ready(config) => Launch::Send(config),
            ConfigStatus::Failed => Launch::Unavailable,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, ConfigStatus::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::DEFAULT_DASHBOARD_PATH;

    fn config() -> PublicConfig {
        PublicConfig {
            auth_url: "https://auth.example.com".into(),
            anon_key: "anon".into(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.into(),
        }
    }

    #[test]
    fn attempts_wait_while_config_is_loading() {
        assert_eq!(ConfigStatus::default().launch(), Launch::Wait);
        assert!(!ConfigStatus::Loading.is_settled());
    }

    #[test]
    fn only_a_failed_load_is_unavailable() {
        let ready = ConfigStatus::Ready(Rc::new(config()));
        assert_eq!(ready.launch(), Launch::Send(&config()));
        assert!(ready.is_settled());
        assert_eq!(ConfigStatus::Failed.launch(), Launch::Unavailable);
        assert!(ConfigStatus::Failed.is_settled());
    }
}
