//! HMC logon session
//!
//! A [`Session`] owns one HTTP client with its own TLS trust policy and cookie
//! jar. [`Session::login`] performs the LogonRequest handshake; the HMC
//! answers with a session cookie that the jar stores and attaches to every
//! later request made through the same session. There is no token field: the
//! cookie jar is the only trace of being logged in.

use super::paths::{
    AUDIT_MEMENTO_HEADER, LOGON_PATH, LOGON_REQUEST_MEDIA_TYPE, LOGON_RESPONSE_MEDIA_TYPE,
    UOM_ROOT,
};
use crate::config::{HmcConfig, SecretString};
use crate::domain::errors::{AuthError, FetchError, HmcError};
use crate::domain::Result;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Namespace of the LogonRequest document
const LOGON_NAMESPACE: &str = "http://www.ibm.com/xmlns/systems/power/firmware/web/mc/2012_10/";

/// Construction options for a [`Session`]
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Skip TLS certificate verification (HMCs use self-signed certificates)
    pub accept_invalid_certs: bool,

    /// Deadline for each request, from connect to the end of the body
    pub timeout: Duration,

    /// Deadline for establishing the TCP/TLS connection
    pub connect_timeout: Duration,

    /// `X-Audit-Memento` header value sent with the logon
    pub audit_memento: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            accept_invalid_certs: true,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            audit_memento: "hmctest".to_string(),
        }
    }
}

impl SessionOptions {
    /// Build options from the `[hmc]` configuration section
    pub fn from_config(config: &HmcConfig) -> Self {
        Self {
            accept_invalid_certs: !config.tls_verify,
            timeout: Duration::from_secs(config.timeout_seconds),
            connect_timeout: Duration::from_secs(config.connect_timeout_seconds),
            audit_memento: config.audit_memento.clone(),
        }
    }
}

/// An HMC REST API session
///
/// Sessions are not meant to be shared between concurrent callers: each
/// caller that wants parallel requests needs its own `Session`, and with it
/// its own client and cookie jar.
///
/// # Example
///
/// ```no_run
/// use hmc_client::adapters::hmc::{paths, Session, SessionOptions};
/// use hmc_client::config::secret_string;
///
/// # async fn example() -> hmc_client::domain::Result<()> {
/// let mut session = Session::new(
///     "hscroot",
///     secret_string("abc123".to_string()),
///     "https://myhmc:12443",
///     SessionOptions::default(),
/// )?;
///
/// session.login().await?;
/// let feed = session
///     .fetch(&paths::resource_path(paths::LOGICAL_PARTITION), paths::FEED_ACCEPT)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct Session {
    client: Client,
    cookies: Arc<Jar>,
    base_url: String,
    cookie_scope: Url,
    user: String,
    password: SecretString,
    options: SessionOptions,
    logged_in: bool,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("user", &self.user)
            .field("audit_memento", &self.options.audit_memento)
            .field("logged_in", &self.logged_in)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session. No network I/O happens here.
    ///
    /// A trailing `/` on `base_url` is dropped so that paths can be appended
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`HmcError::Configuration`] if the base URL does not parse or
    /// the HTTP client cannot be built.
    pub fn new(
        user: impl Into<String>,
        password: SecretString,
        base_url: &str,
        options: SessionOptions,
    ) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let cookie_scope = Url::parse(&format!("{base_url}{UOM_ROOT}/")).map_err(|e| {
            HmcError::Configuration(format!("Invalid HMC base URL '{base_url}': {e}"))
        })?;

        let (client, cookies) = build_client(&options)
            .map_err(|e| HmcError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        if options.accept_invalid_certs {
            tracing::debug!(base_url = %base_url, "TLS certificate verification disabled");
        }

        Ok(Self {
            client,
            cookies,
            base_url,
            cookie_scope,
            user: user.into(),
            password,
            options,
            logged_in: false,
        })
    }

    /// Create a session from the `[hmc]` configuration section
    pub fn from_config(config: &HmcConfig) -> Result<Self> {
        Self::new(
            config.username.clone(),
            config.password.clone(),
            &config.base_url,
            SessionOptions::from_config(config),
        )
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// HMC user this session logs on as
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Whether [`login`](Self::login) has succeeded on this session
    ///
    /// For diagnostics only; [`fetch`](Self::fetch) does not consult it.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// `Cookie` header value the jar would send to the resource API, if any
    pub fn session_cookie(&self) -> Option<String> {
        self.cookies
            .cookies(&self.cookie_scope)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    /// Log on to the HMC
    ///
    /// Sends one `PUT /rest/api/web/Logon` carrying the rendered
    /// LogonRequest. Only status 200 counts as success; the response body is
    /// drained but not interpreted. There is no retry.
    ///
    /// Any failure after the request is sent leaves the session with an
    /// empty cookie jar, including a session that was logged on before.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidCredential`] - a credential cannot be encoded in XML; nothing is sent
    /// - [`AuthError::Rejected`] - the HMC answered with a non-200 status
    /// - [`AuthError::Transport`] / [`AuthError::Timeout`] - no usable response
    pub async fn login(&mut self) -> std::result::Result<(), AuthError> {
        let url = format!("{}{}", self.base_url, LOGON_PATH);
        let body = render_logon_request(&self.user, self.password.expose_secret().as_ref())?;

        tracing::debug!(url = %url, user = %self.user, "Sending logon request");

        match self.send_logon(&url, body).await {
            Ok(()) => {
                self.logged_in = true;
                tracing::info!(base_url = %self.base_url, user = %self.user, "Logged on to HMC");
                Ok(())
            }
            Err(e) => {
                self.logged_in = false;
                self.discard_cookies(&url)?;
                Err(e)
            }
        }
    }

    async fn send_logon(&self, url: &str, body: String) -> std::result::Result<(), AuthError> {
        let response = self
            .client
            .put(url)
            .header(CONTENT_TYPE, LOGON_REQUEST_MEDIA_TYPE)
            .header(ACCEPT, LOGON_RESPONSE_MEDIA_TYPE)
            .header(AUDIT_MEMENTO_HEADER, &self.options.audit_memento)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AuthError::Timeout {
                        url: url.to_string(),
                    }
                } else {
                    AuthError::Transport {
                        url: url.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if let Err(e) = response.bytes().await {
            tracing::debug!(url = %url, error = %e, "Failed to drain logon response body");
        }
        crate::log_exchange!("PUT", url, status.as_u16());

        if status != StatusCode::OK {
            return Err(AuthError::Rejected {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    /// Replace the client and its jar so no cookie from a failed logon survives
    fn discard_cookies(&mut self, url: &str) -> std::result::Result<(), AuthError> {
        let (client, cookies) = build_client(&self.options).map_err(|e| AuthError::Transport {
            url: url.to_string(),
            message: format!("Failed to rebuild HTTP client: {e}"),
        })?;
        self.client = client;
        self.cookies = cookies;
        Ok(())
    }

    /// GET `{base_url}{path}` with the given Accept header
    ///
    /// The body is always read to the end, whatever the status, so the
    /// connection goes back to the pool.
    ///
    /// This method does not check [`is_logged_in`](Self::is_logged_in).
    /// Authentication is enforced by the HMC itself: without the session
    /// cookie set by [`login`](Self::login) it rejects the request (usually
    /// with 401), which surfaces as [`FetchError::Status`].
    ///
    /// # Errors
    ///
    /// - [`FetchError::Status`] - any status other than 200
    /// - [`FetchError::Transport`] / [`FetchError::Timeout`] - no usable response
    /// - [`FetchError::Body`] - the 200 body could not be read
    pub async fn fetch(&self, path: &str, accept: &str) -> std::result::Result<Vec<u8>, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        if !self.logged_in {
            tracing::debug!(url = %url, "Fetching on a session without a successful logon");
        }

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout { url: url.clone() }
                } else {
                    FetchError::Transport {
                        url: url.clone(),
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        let body = response.bytes().await;
        crate::log_exchange!("GET", url, status.as_u16());

        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = body.map_err(|e| FetchError::Body {
            url: url.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(url = %url, bytes = body.len(), "Fetched resource");
        Ok(body.to_vec())
    }
}

fn build_client(options: &SessionOptions) -> reqwest::Result<(Client, Arc<Jar>)> {
    let cookies = Arc::new(Jar::default());
    let client = Client::builder()
        .cookie_provider(Arc::clone(&cookies))
        .danger_accept_invalid_certs(options.accept_invalid_certs)
        .timeout(options.timeout)
        .connect_timeout(options.connect_timeout)
        .build()?;
    Ok((client, cookies))
}

/// Render the LogonRequest document
///
/// Credentials are XML-escaped. Characters XML 1.0 cannot represent at all
/// are rejected rather than sent.
pub(crate) fn render_logon_request(
    user: &str,
    password: &str,
) -> std::result::Result<String, AuthError> {
    check_xml_chars("user", user)?;
    check_xml_chars("password", password)?;

    let user = quick_xml::escape::escape(user);
    let password = quick_xml::escape::escape(password);

    Ok(format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<LogonRequest xmlns="{LOGON_NAMESPACE}" schemaVersion="V1_1_0">
  <Metadata>
    <Atom/>
  </Metadata>
  <UserID kb="CUR" kxe="false">{user}</UserID>
  <Password kb="CUR" kxe="false">{password}</Password>
</LogonRequest>"#
    ))
}

fn check_xml_chars(what: &str, value: &str) -> std::result::Result<(), AuthError> {
    let is_xml_char = |c: char| {
        matches!(c, '\t' | '\n' | '\r')
            || ('\u{20}'..='\u{FFFD}').contains(&c)
            || c >= '\u{10000}'
    };

    match value.chars().position(|c| !is_xml_char(c)) {
        Some(index) => Err(AuthError::InvalidCredential(format!(
            "{what} contains a character XML cannot carry at position {index}"
        ))),
        None => Ok(()),
    }
}
