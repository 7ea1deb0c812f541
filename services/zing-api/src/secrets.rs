// secrets
use std::collections::HashMap;
use std::env;
use tracing::info;

/// Keys the service reads. Anything else in the environment is ignored.
pub const KEYS: &[&str] = &[
    "HOST",
    "PORT",
    "ZING_URL",
    "ZING_VERSION",
    "ZING_SECRET_KEY",
    "ZING_API_KEY",
    "UPSTREAM_TIMEOUT_MS",
];

enum MODE {
    DEV,
    PROD,
}

pub struct SecretManager {
    secrets: HashMap<String, String>,
}

impl SecretManager {
    pub fn from_env() -> Self {
        let mode = match env::var("MODE") {
            Ok(mode) if mode.to_lowercase() == "prod" => MODE::PROD,
            _ => MODE::DEV,
        };
        let mut secrets = match mode {
            MODE::DEV => Self::dev_defaults(),
            MODE::PROD => HashMap::new(),
        };

        // Explicit environment always wins, in either mode
        for key in KEYS {
            if let Ok(value) = env::var(key) {
                secrets.insert(key.to_string(), value);
            }
        }

        let manager = SecretManager { secrets };
        manager.log_configured();
        manager
    }

    /// Builds a manager from explicit pairs on top of the dev defaults.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut secrets = Self::dev_defaults();
        for (k, v) in pairs {
            secrets.insert(k.to_string(), v.to_string());
        }
        SecretManager { secrets }
    }

    fn dev_defaults() -> HashMap<String, String> {
        let mut secrets: HashMap<String, String> = HashMap::new();
        secrets.insert("HOST".to_string(), "0.0.0.0".to_string());
        secrets.insert("PORT".to_string(), "5555".to_string());
        secrets.insert("ZING_URL".to_string(), "https://zingmp3.vn".to_string());
        secrets.insert("ZING_VERSION".to_string(), "1.6.34".to_string());
        // Public keys shipped with the zingmp3.vn web player
        secrets.insert(
            "ZING_SECRET_KEY".to_string(),
            "2aa2d1c561e809b267f3638c4a307aab".to_string(),
        );
        secrets.insert(
            "ZING_API_KEY".to_string(),
            "88265e23d4284f25963e6eedac8fbfa3".to_string(),
        );
        secrets.insert("UPSTREAM_TIMEOUT_MS".to_string(), "10000".to_string());
        secrets
    }

    fn log_configured(&self) {
        // Log which secrets are configured (NOT their values!)
        let mut configured: Vec<&str> = self
            .secrets
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| k.as_str())
            .collect();
        configured.sort_unstable();
        info!("Secrets configured: {:?}", configured);
    }

    pub fn get(&self, key: &str) -> String {
        self.secrets.get(key).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn pairs_override_dev_defaults() {
        let secrets = SecretManager::from_pairs([("PORT", "8080")]);
        assert_eq!(secrets.get("PORT"), "8080");
        assert_eq!(secrets.get("HOST"), "0.0.0.0");
        assert_eq!(secrets.get("ZING_URL"), "https://zingmp3.vn");
    }

    // The process environment is shared by every test thread
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<T>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let names: Vec<&str> = vars.iter().map(|(k, _)| *k).chain(KEYS.iter().copied()).collect();
        let saved: Vec<(&str, Option<String>)> =
            names.iter().map(|k| (*k, env::var(k).ok())).collect();

        // SAFETY: every test touching the environment holds ENV_LOCK
        unsafe {
            for key in KEYS {
                env::remove_var(key);
            }
            for (k, v) in vars {
                match v {
                    Some(v) => env::set_var(k, v),
                    None => env::remove_var(k),
                }
            }
        }
        let out = f();
        unsafe {
            for (k, v) in saved {
                match v {
                    Some(v) => env::set_var(k, v),
                    None => env::remove_var(k),
                }
            }
        }
        out
    }

    #[test]
    fn prod_mode_has_no_defaults() {
        with_env(&[("MODE", Some("prod")), ("PORT", Some("7000"))], || {
            let secrets = SecretManager::from_env();
            assert_eq!(secrets.get("PORT"), "7000");
            assert_eq!(secrets.get("HOST"), "");
            assert_eq!(secrets.get("ZING_URL"), "");
        });
    }

    #[test]
    fn dev_mode_env_overrides_defaults() {
        with_env(&[("MODE", None), ("PORT", Some("7001"))], || {
            let secrets = SecretManager::from_env();
            assert_eq!(secrets.get("PORT"), "7001");
            assert_eq!(secrets.get("ZING_URL"), "https://zingmp3.vn");
        });
    }

    #[test]
    fn unknown_key_is_empty() {
        let secrets = SecretManager::from_pairs([]);
        assert_eq!(secrets.get("NOPE"), "");
    }
}
