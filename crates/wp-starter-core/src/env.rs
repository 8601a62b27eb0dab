//! Bedrock `.env` rendering and WordPress salt generation

use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Characters salts are drawn from
pub const SALT_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#%^&*()-_[]{}<>~+=,.;:/?|";

/// WordPress security keys and salts, in the order wp-config expects them
pub const SALT_KEYS: [&str; 8] = [
    "AUTH_KEY",
    "SECURE_AUTH_KEY",
    "LOGGED_IN_KEY",
    "NONCE_KEY",
    "AUTH_SALT",
    "SECURE_AUTH_SALT",
    "LOGGED_IN_SALT",
    "NONCE_SALT",
];

const SALTS_HEADER: &str = "# WordPress Security Keys and Salts";
const SITEURL_LINE: &str = "WP_SITEURL=${WP_HOME}/wp";

/// Value of `WP_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WpEnv {
    #[default]
    Development,
    Staging,
    Production,
}

impl WpEnv {
    pub const ALL: [WpEnv; 3] = [WpEnv::Development, WpEnv::Staging, WpEnv::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            WpEnv::Development => "development",
            WpEnv::Staging => "staging",
            WpEnv::Production => "production",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WpEnv::Development => "Development",
            WpEnv::Staging => "Staging",
            WpEnv::Production => "Production",
        }
    }
}

impl fmt::Display for WpEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WpEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WpEnv::ALL
            .into_iter()
            .find(|env| env.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown environment '{}'", s))
    }
}

/// Answers collected by the `.env` prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSettings {
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub wp_env: WpEnv,
    pub wp_home: String,
}

/// The eight generated key/salt values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salts {
    values: Vec<(&'static str, String)>,
}

impl Salts {
    /// Draw a fresh value of `length` characters for every key
    pub fn generate(length: usize) -> Self {
        let mut rng = rand::rng();
        let values = SALT_KEYS
            .iter()
            .map(|key| {
                let value: String = (0..length)
                    .map(|_| SALT_ALPHABET[rng.random_range(0..SALT_ALPHABET.len())] as char)
                    .collect();
                (*key, value)
            })
            .collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn line(key: &str, value: &str) -> String {
        format!("{}=\"{}\"", key, value)
    }
}

/// Key of a `KEY=value` line, if the line is one
fn line_key(line: &str) -> Option<&str> {
    let (key, _) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() || key.starts_with('#') {
        None
    } else {
        Some(key)
    }
}

/// Render a `.env` from `template`, replacing whole `KEY=...` lines
pub fn render_env(template: &str, settings: &EnvSettings, salts: &Salts) -> String {
    let has_key = |wanted: &str| template.lines().any(|l| line_key(l) == Some(wanted));
    let has_host = has_key("DB_HOST");
    let has_siteurl = has_key("WP_SITEURL");
    let has_salts = SALT_KEYS.iter().any(|k| has_key(k));

    let mut lines: Vec<String> = Vec::new();
    for line in template.lines() {
        match line_key(line) {
            Some("DB_NAME") => lines.push(format!("DB_NAME={}", settings.db_name)),
            Some("DB_USER") => lines.push(format!("DB_USER={}", settings.db_user)),
            Some("DB_PASSWORD") => {
                lines.push(format!("DB_PASSWORD={}", settings.db_password));
                if !has_host {
                    lines.push(format!("DB_HOST={}", settings.db_host));
                }
            }
            Some("DB_HOST") => lines.push(format!("DB_HOST={}", settings.db_host)),
            Some("WP_ENV") => lines.push(format!("WP_ENV={}", settings.wp_env)),
            Some("WP_HOME") => {
                lines.push(format!("WP_HOME={}", settings.wp_home));
                if !has_siteurl {
                    lines.push(SITEURL_LINE.to_string());
                }
            }
            Some(key) => match salts.get(key) {
                Some(value) => lines.push(Salts::line(key, value)),
                None => lines.push(line.to_string()),
            },
            None => lines.push(line.to_string()),
        }
    }

    if has_salts {
        for (key, value) in salts.iter() {
            if !has_key(key) {
                lines.push(Salts::line(key, value));
            }
        }
    } else {
        lines.push(String::new());
        lines.push(SALTS_HEADER.to_string());
        lines.extend(salts.iter().map(|(k, v)| Salts::line(k, v)));
    }

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::BEDROCK_ENV_EXAMPLE;
    use std::collections::HashSet;

    fn settings() -> EnvSettings {
        EnvSettings {
            db_name: "acme".to_string(),
            db_user: "acme_user".to_string(),
            db_password: "s3cret".to_string(),
            db_host: "127.0.0.1".to_string(),
            wp_env: WpEnv::Staging,
            wp_home: "https://acme.test".to_string(),
        }
    }

    fn count_key(rendered: &str, key: &str) -> usize {
        rendered
            .lines()
            .filter(|l| line_key(l) == Some(key))
            .count()
    }

    #[test]
    fn test_placeholders_replaced() {
        let rendered = render_env(BEDROCK_ENV_EXAMPLE, &settings(), &Salts::generate(64));

        assert!(rendered.contains("DB_NAME=acme\n"));
        assert!(!rendered.contains("database_name"));
        assert!(rendered.contains("DB_USER=acme_user\n"));
        assert!(rendered.contains("DB_PASSWORD=s3cret\n"));
        assert!(rendered.contains("WP_ENV=staging\n"));
        assert!(rendered.contains("WP_HOME=https://acme.test\n"));
        assert!(!rendered.contains("example.com"));
    }

    #[test]
    fn test_db_host_inserted_after_password() {
        let rendered = render_env(BEDROCK_ENV_EXAMPLE, &settings(), &Salts::generate(64));
        assert!(rendered.contains("DB_PASSWORD=s3cret\nDB_HOST=127.0.0.1\n"));
        assert_eq!(count_key(&rendered, "DB_HOST"), 1);
    }

    #[test]
    fn test_existing_db_host_replaced() {
        let template = "DB_NAME=x\nDB_PASSWORD=y\nDB_HOST=somewhere\n";
        let rendered = render_env(template, &settings(), &Salts::generate(64));
        assert!(rendered.contains("DB_HOST=127.0.0.1\n"));
        assert!(!rendered.contains("somewhere"));
        assert_eq!(count_key(&rendered, "DB_HOST"), 1);
    }

    #[test]
    fn test_siteurl_added_when_missing() {
        let template = "WP_ENV=development\nWP_HOME=http://example.com\n";
        let rendered = render_env(template, &settings(), &Salts::generate(64));
        assert!(rendered.contains("WP_HOME=https://acme.test\nWP_SITEURL=${WP_HOME}/wp\n"));
    }

    #[test]
    fn test_siteurl_kept_when_present() {
        let rendered = render_env(BEDROCK_ENV_EXAMPLE, &settings(), &Salts::generate(64));
        assert_eq!(count_key(&rendered, "WP_SITEURL"), 1);
    }

    #[test]
    fn test_salt_section_appended() {
        let salts = Salts::generate(64);
        let rendered = render_env(BEDROCK_ENV_EXAMPLE, &settings(), &salts);

        assert!(rendered.contains("# WordPress Security Keys and Salts\n"));
        for key in SALT_KEYS {
            assert_eq!(count_key(&rendered, key), 1, "{} should appear once", key);
            let expected = format!("{}=\"{}\"\n", key, salts.get(key).unwrap());
            assert!(rendered.contains(&expected));
        }
    }

    #[test]
    fn test_existing_salts_replaced_not_duplicated() {
        let first = render_env(BEDROCK_ENV_EXAMPLE, &settings(), &Salts::generate(64));
        let second_salts = Salts::generate(64);
        let second = render_env(&first, &settings(), &second_salts);

        assert_eq!(second.matches(SALTS_HEADER).count(), 1);
        for key in SALT_KEYS {
            assert_eq!(count_key(&second, key), 1);
            let expected = format!("{}=\"{}\"", key, second_salts.get(key).unwrap());
            assert!(second.contains(&expected));
        }
    }

    #[test]
    fn test_missing_salts_appended_when_some_present() {
        let template = "DB_NAME=x\nAUTH_KEY=old\nNONCE_SALT='old'\n";
        let salts = Salts::generate(64);
        let rendered = render_env(template, &settings(), &salts);

        assert!(!rendered.contains(SALTS_HEADER));
        assert!(!rendered
            .lines()
            .any(|l| l == "AUTH_KEY=old" || l == "NONCE_SALT='old'"));
        for key in SALT_KEYS {
            assert_eq!(count_key(&rendered, key), 1);
        }
    }

    #[test]
    fn test_other_lines_preserved() {
        let template = "# comment\nCUSTOM=value\n\nDB_NAME=database_name\n";
        let rendered = render_env(template, &settings(), &Salts::generate(64));
        assert!(rendered.starts_with("# comment\nCUSTOM=value\n\nDB_NAME=acme\n"));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_salts_are_long_distinct_and_in_alphabet() {
        let alphabet: HashSet<char> = SALT_ALPHABET.iter().map(|b| *b as char).collect();
        let first = Salts::generate(64);
        let second = Salts::generate(64);

        let mut seen = HashSet::new();
        for salts in [&first, &second] {
            let values: Vec<&str> = salts.iter().map(|(_, v)| v).collect();
            assert_eq!(values.len(), 8);
            for value in values {
                assert!(value.chars().count() >= 64);
                assert!(value.chars().all(|c| alphabet.contains(&c)));
                assert!(seen.insert(value.to_string()), "duplicate salt");
            }
        }
    }

    #[test]
    fn test_salt_keys_in_wordpress_order() {
        let salts = Salts::generate(64);
        let keys: Vec<&str> = salts.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, SALT_KEYS.to_vec());
    }

    #[test]
    fn test_wp_env_parse() {
        assert_eq!("staging".parse::<WpEnv>().unwrap(), WpEnv::Staging);
        assert_eq!("Production".parse::<WpEnv>().unwrap(), WpEnv::Production);
        assert!("qa".parse::<WpEnv>().is_err());
    }
}
