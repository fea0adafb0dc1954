// src/config.rs
use crate::constants::{
    ENV_API_BASE_URL, ENV_INTEGRATION_SECRET, ENV_ROOT_PAGE_URL, NOTION_API_BASE_URL,
};
use crate::error::AppError;
use crate::formatting::SEARCH_ALL;
use crate::types::{ApiKey, NotionId, ValidatedUrl};
use clap::{Parser, Subcommand};

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about = "Browse Notion databases as tables", long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON API
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = 5000)]
        port: u16,

        /// Serve the built-in demo database instead of calling Notion
        #[arg(long, default_value_t = false)]
        mock: bool,
    },

    /// Print a database as a table
    Table {
        /// Notion database URL or ID
        target: String,

        /// Only show records whose values contain this text (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Property to search in, or "all"
        #[arg(short = 'P', long, default_value = SEARCH_ALL)]
        property: String,

        /// Prefix column names with a glyph for their property type
        #[arg(long, default_value_t = false)]
        icons: bool,

        /// Use the built-in demo database instead of calling Notion
        #[arg(long, default_value_t = false)]
        mock: bool,
    },

    /// Print the database ID embedded in a Notion URL
    ExtractId {
        /// Notion page or database URL
        url: String,
    },
}

/// Everything needed to talk to the real Notion API.
#[derive(Debug, Clone)]
pub struct NotionConfig {
    pub api_key: ApiKey,
    pub base_url: ValidatedUrl,
}

/// Where database reads are served from.
#[derive(Debug, Clone)]
pub enum Backend {
    Notion(NotionConfig),
    Mock,
}

/// Resolved configuration shared by the server and the CLI viewer.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub backend: Backend,
    /// Page whose child databases `/api/databases` lists.
    pub root_page: Option<NotionId>,
}

impl ViewerConfig {
    /// Resolves configuration from the process environment.
    pub fn resolve(mock: bool) -> Result<Self, AppError> {
        Self::from_lookup(mock, |key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, which returns an environment
    /// variable's value. Empty values count as unset.
    pub fn from_lookup<F>(mock: bool, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let backend = if mock {
            log::info!("Using the built-in demo workspace");
            Backend::Mock
        } else {
            let secret = var(ENV_INTEGRATION_SECRET).ok_or_else(|| {
                AppError::MissingConfiguration(format!(
                    "{} environment variable not set",
                    ENV_INTEGRATION_SECRET
                ))
            })?;
            let base_url = var(ENV_API_BASE_URL).unwrap_or_else(|| NOTION_API_BASE_URL.to_string());
            Backend::Notion(NotionConfig {
                api_key: ApiKey::new(secret)?,
                base_url: ValidatedUrl::parse(&base_url)?,
            })
        };

        let root_page = var(ENV_ROOT_PAGE_URL).and_then(|url| match NotionId::parse(&url) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("Ignoring {}: {}", ENV_ROOT_PAGE_URL, e);
                None
            }
        });

        Ok(Self { backend, root_page })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "secret_abcdefghijklmnopqrstuvwxyz";

    fn resolve(mock: bool, vars: &[(&str, &str)]) -> Result<ViewerConfig, AppError> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ViewerConfig::from_lookup(mock, |key| env.get(key).cloned())
    }

    #[test]
    fn test_missing_secret() {
        let err = resolve(false, &[]).unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));
        assert!(err.to_string().contains(ENV_INTEGRATION_SECRET));

        let err = resolve(false, &[(ENV_INTEGRATION_SECRET, "  ")]).unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));
    }

    #[test]
    fn test_mock_needs_no_secret() {
        let config = resolve(true, &[]).unwrap();
        assert!(matches!(config.backend, Backend::Mock));
        assert!(config.root_page.is_none());
    }

    #[test]
    fn test_secret_is_redacted() {
        let config = resolve(false, &[(ENV_INTEGRATION_SECRET, SECRET)]).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains(SECRET));
        assert!(debug.contains("secret_***"));
    }

    #[test]
    fn test_base_url_override_and_root_page() {
        let config = resolve(
            false,
            &[
                (ENV_INTEGRATION_SECRET, SECRET),
                (ENV_API_BASE_URL, "http://127.0.0.1:9000/v1/"),
                (
                    ENV_ROOT_PAGE_URL,
                    "https://www.notion.so/Home-266643093bdf802faacfd5da710ccf15",
                ),
            ],
        )
        .unwrap();

        match config.backend {
            Backend::Notion(notion) => assert_eq!(notion.base_url.as_base(), "http://127.0.0.1:9000/v1"),
            Backend::Mock => panic!("expected the Notion backend"),
        }
        assert_eq!(
            config.root_page.unwrap().to_hyphenated(),
            "26664309-3bdf-802f-aacf-d5da710ccf15"
        );
    }

    #[test]
    fn test_bad_root_page_is_ignored() {
        let config = resolve(true, &[(ENV_ROOT_PAGE_URL, "not a url")]).unwrap();
        assert!(config.root_page.is_none());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = CommandLineInput::parse_from([
            "notion-viewer",
            "--verbose",
            "table",
            "266643093bdf802faacfd5da710ccf15",
            "--search",
            "gro",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Command::Table {
                target,
                search,
                property,
                mock,
                ..
            } => {
                assert_eq!(target, "266643093bdf802faacfd5da710ccf15");
                assert_eq!(search, "gro");
                assert_eq!(property, "all");
                assert!(!mock);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
