use anyhow::{Context, Result, bail};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{COOKIE, SET_COOKIE};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::{ApplicationPatch, JobApplication, NewApplication};

pub const DEFAULT_API: &str = "https://job-application-tracker-5kjd.onrender.com";

/// How a read can fail. Mutations are fire-and-forget by contract: the
/// reload that follows them is what surfaces server truth.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("session expired or not logged in")]
    Unauthorized,
    #[error("could not reach the server")]
    Unreachable(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
pub struct Session {
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
}

/// One HTTP request per operation, session cookie attached. No retries,
/// caching, or queueing.
pub struct ApiClient {
    base: String,
    http: Client,
    cookie: Option<String>,
}

impl ApiClient {
    /// Builds a client, picking up any session stored by a previous login.
    pub fn connect(base: &str) -> Result<Self> {
        let cookie = Self::session_path()
            .ok()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            http: Client::new(),
            cookie,
        })
    }

    fn session_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "apptrack") {
            Ok(proj_dirs.data_dir().join("session"))
        } else {
            Ok(PathBuf::from(".apptrack-session"))
        }
    }

    fn with_session(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.cookie {
            Some(cookie) => req.header(COOKIE, cookie),
            None => req,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    // --- Auth ---

    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        let resp = self
            .http
            .post(self.url("/register"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .context("Could not reach the server")?;
        match resp.status() {
            StatusCode::CONFLICT => bail!("Username '{}' already exists", username),
            s if s.is_client_error() || s.is_server_error() => {
                bail!("Registration failed ({})", s)
            }
            _ => Ok(()),
        }
    }

    /// Logs in, stores the session cookie for later invocations, and
    /// returns the server-confirmed username.
    pub fn login(&mut self, username: &str, password: &str) -> Result<String> {
        let resp = self
            .http
            .post(self.url("/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .context("Could not reach the server")?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            bail!("Invalid username or password");
        }

        let cookie = find_session_cookie(
            resp.headers()
                .get_all(SET_COOKIE)
                .iter()
                .filter_map(|v| v.to_str().ok()),
        );
        let Some(cookie) = cookie else {
            bail!("Server did not return a session cookie");
        };

        let path = Self::session_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &cookie)
            .with_context(|| format!("Failed to store session at {}", path.display()))?;
        self.cookie = Some(cookie);

        #[derive(Deserialize)]
        struct LoginReply {
            username: String,
        }
        let reply: LoginReply = resp.json().context("Unexpected login response")?;
        Ok(reply.username)
    }

    /// Invalidates the session server-side. The stored cookie is forgotten
    /// even when the request fails.
    pub fn logout(&mut self) -> Result<()> {
        let _ = self.with_session(self.http.post(self.url("/logout"))).send();
        self.cookie = None;
        if let Ok(path) = Self::session_path() {
            let _ = fs::remove_file(path);
        }
        Ok(())
    }

    pub fn me(&self) -> Result<Session, ApiError> {
        let resp = self.with_session(self.http.get(self.url("/me"))).send()?;
        Ok(resp.json()?)
    }

    // --- Records ---

    pub fn list(&self) -> Result<Vec<JobApplication>, ApiError> {
        let resp = self.with_session(self.http.get(self.url("/jobs"))).send()?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        Ok(resp.json()?)
    }

    /// The server assigns the new id; the caller reloads to see it.
    pub fn create(&self, new: &NewApplication) -> Result<(), ApiError> {
        self.with_session(self.http.post(self.url("/jobs")))
            .json(new)
            .send()?;
        Ok(())
    }

    /// Partial update of the two mutable fields. Company, role and date are
    /// immutable after creation.
    pub fn update(&self, id: i64, patch: &ApplicationPatch) -> Result<(), ApiError> {
        self.with_session(self.http.put(self.url(&format!("/jobs/{}", id))))
            .json(patch)
            .send()?;
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.with_session(self.http.delete(self.url(&format!("/jobs/{}", id))))
            .send()?;
        Ok(())
    }
}

/// Picks the `session=` pair out of Set-Cookie header values, dropping
/// attributes like Path and HttpOnly.
fn find_session_cookie<'a>(values: impl Iterator<Item = &'a str>) -> Option<String> {
    values
        .filter_map(|v| v.split(';').next())
        .map(str::trim)
        .find(|v| v.starts_with("session="))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_is_extracted_without_attributes() {
        let headers = [
            "other=1; Path=/",
            "session=abc123; HttpOnly; Path=/; SameSite=None; Secure",
        ];
        assert_eq!(
            find_session_cookie(headers.into_iter()),
            Some("session=abc123".to_string())
        );
    }

    #[test]
    fn missing_session_cookie_is_none() {
        let headers = ["tracking=xyz; Path=/"];
        assert_eq!(find_session_cookie(headers.into_iter()), None);
    }
}
