use crate::app_config::Meshify;
use std::fmt::{Debug, Formatter};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::info;

#[derive(Clone, PartialEq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Uses the configured username and password, asking on the terminal when either is missing.
pub fn resolve(config: &Meshify) -> Result<Credentials, CredentialsError> {
    resolve_with(config, prompt)
}

fn resolve_with<F>(config: &Meshify, prompt: F) -> Result<Credentials, CredentialsError>
where
    F: FnOnce() -> io::Result<Credentials>,
{
    match (config.username(), config.password()) {
        (Some(username), Some(password)) => Ok(Credentials::new(username, password)),
        _ => {
            info!("💡 Set MESHIFY_USERNAME and MESHIFY_PASSWORD to skip this prompt");
            let credentials = prompt().map_err(CredentialsError::Prompt)?;
            if credentials.username.is_empty() {
                return Err(CredentialsError::EmptyUsername);
            }
            Ok(credentials)
        }
    }
}

fn prompt() -> io::Result<Credentials> {
    print!("Meshify Username: ");
    io::stdout().flush()?;

    let mut username = String::new();
    io::stdin().lock().read_line(&mut username)?;

    let password = rpassword::prompt_password("Meshify Password: ")?;
    Ok(Credentials::new(username.trim(), password))
}

#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("unable to read credentials: {0}")]
    Prompt(#[source] io::Error),
    #[error("no Meshify username given")]
    EmptyUsername,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn configured_credentials_are_used_without_prompting() -> Result<(), CredentialsError> {
        let config = AppConfigBuilder::new().build();

        let credentials = resolve_with(config.meshify(), || panic!("should not prompt"))?;

        assert_eq!(credentials, Credentials::new("user", "pass"));
        Ok(())
    }

    #[test]
    fn missing_password_prompts_for_both_values() -> Result<(), CredentialsError> {
        let config = AppConfigBuilder::new().password(None).build();

        let credentials = resolve_with(config.meshify(), || Ok(Credentials::new("typed", "secret")))?;

        assert_eq!(credentials, Credentials::new("typed", "secret"));
        Ok(())
    }

    #[test]
    fn an_empty_prompted_username_is_rejected() {
        let config = AppConfigBuilder::new().username(None).build();

        let result = resolve_with(config.meshify(), || Ok(Credentials::new("", "secret")));

        assert!(matches!(result, Err(CredentialsError::EmptyUsername)));
    }

    #[test]
    fn debug_output_hides_the_password() {
        let credentials = Credentials::new("user", "hunter2");

        let debug = format!("{:?}", credentials);

        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
    }
}
