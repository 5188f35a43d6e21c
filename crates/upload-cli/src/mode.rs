use crate::error::CliError;
use clap::Args;
use upload_config::DatabaseConfig;
use upload_store::Credentials;

#[derive(Debug, Default, Args)]
pub struct ModeArgs {
    /// Database username
    #[arg(short = 'u', value_name = "USER")]
    pub username: Option<String>,
    /// Database password
    #[arg(short = 'p', value_name = "PASSWORD")]
    pub password: Option<String>,
    /// Database host (an SQLite file, or a directory holding users.sqlite3)
    #[arg(short = 'h', value_name = "HOST")]
    pub host: Option<String>,
    /// Read, validate and format the file without touching the database
    #[arg(long = "dry_run")]
    pub dry_run: bool,
    /// Print the list of directives
    #[arg(long)]
    pub help: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RunMode {
    Help,
    DryRun,
    Live(Credentials),
}

impl RunMode {
    /// Flags win over the config file; a live run needs all three credentials.
    pub fn resolve(args: ModeArgs, config: &DatabaseConfig) -> Result<Self, CliError> {
        if args.help {
            return Ok(RunMode::Help);
        }
        if args.dry_run {
            return Ok(RunMode::DryRun);
        }

        let username = args.username.or_else(|| config.username.clone());
        let password = args.password.or_else(|| config.password.clone());
        let host = args.host.or_else(|| config.host.clone());
        match (username, password, host) {
            (Some(username), Some(password), Some(host)) => Ok(RunMode::Live(Credentials {
                host,
                username,
                password,
            })),
            _ => Err(CliError::MissingArguments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ModeArgs, RunMode};
    use crate::error::CliError;
    use upload_config::DatabaseConfig;
    use upload_store::Credentials;

    fn full_args() -> ModeArgs {
        ModeArgs {
            username: Some("root".to_string()),
            password: Some("pw".to_string()),
            host: Some("users.sqlite3".to_string()),
            ..ModeArgs::default()
        }
    }

    #[test]
    fn help_wins_over_everything() {
        let args = ModeArgs {
            help: true,
            dry_run: true,
            ..ModeArgs::default()
        };
        assert_eq!(
            RunMode::resolve(args, &DatabaseConfig::default()).unwrap(),
            RunMode::Help
        );
    }

    #[test]
    fn dry_run_needs_no_credentials() {
        let args = ModeArgs {
            dry_run: true,
            ..ModeArgs::default()
        };
        assert_eq!(
            RunMode::resolve(args, &DatabaseConfig::default()).unwrap(),
            RunMode::DryRun
        );
    }

    #[test]
    fn live_run_requires_each_credential() {
        let missing_user = ModeArgs {
            username: None,
            ..full_args()
        };
        let missing_password = ModeArgs {
            password: None,
            ..full_args()
        };
        let missing_host = ModeArgs {
            host: None,
            ..full_args()
        };
        for args in [missing_user, missing_password, missing_host] {
            let err = RunMode::resolve(args, &DatabaseConfig::default()).unwrap_err();
            assert!(matches!(err, CliError::MissingArguments));
        }
    }

    #[test]
    fn live_run_collects_credentials() {
        let mode = RunMode::resolve(full_args(), &DatabaseConfig::default()).unwrap();
        assert_eq!(
            mode,
            RunMode::Live(Credentials {
                host: "users.sqlite3".to_string(),
                username: "root".to_string(),
                password: "pw".to_string(),
            })
        );
    }

    #[test]
    fn config_fills_missing_flags_and_flags_override() {
        let config = DatabaseConfig {
            host: Some("/srv/users".to_string()),
            username: Some("importer".to_string()),
            password: Some("from-config".to_string()),
        };
        let args = ModeArgs {
            password: Some("from-flag".to_string()),
            ..ModeArgs::default()
        };
        let RunMode::Live(credentials) = RunMode::resolve(args, &config).unwrap() else {
            panic!("expected live mode");
        };
        assert_eq!(credentials.host, "/srv/users");
        assert_eq!(credentials.username, "importer");
        assert_eq!(credentials.password, "from-flag");
    }
}
