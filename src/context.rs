use crate::accept::AcceptList;
use crate::authority::TrustedHostAuthority;
use crate::constants::{environment, header, method, server};
use crate::error::RequestError;
use crate::options::{OptionsError, RequestOptions};
use crate::property::{Property, PropertyValue};
use crate::snapshot::RequestSnapshot;
use crate::util::{host_without_port, is_all_digits};
use crate::validation;
use once_cell::sync::OnceCell;
use tracing::debug;

const HTTP_PORT: u16 = 80;
const HTTPS_PORT: u16 = 443;
const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Validated, read-mostly view of a single inbound request.
///
/// Validation runs while the context is built: header and cookie values with
/// bytes outside printable US-ASCII are rewritten with `?`, and
/// `X-Forwarded-*` headers from an untrusted peer are removed. The outcome is
/// kept and reported by [`RequestContext::validate`]; the scrubbed snapshot is
/// what every accessor reads. Derived values are computed on first access and
/// cached for the lifetime of the context.
#[derive(Debug)]
pub struct RequestContext {
    snapshot: RequestSnapshot,
    options: RequestOptions,
    validation: Result<(), RequestError>,
    method: OnceCell<String>,
    is_secure_channel: OnceCell<bool>,
    port: OnceCell<Result<u16, RequestError>>,
    hostname: OnceCell<Option<String>>,
    absolute_url: OnceCell<Result<String, RequestError>>,
    accept_content_types: OnceCell<AcceptList>,
    accept_encodings: OnceCell<AcceptList>,
    accept_languages: OnceCell<AcceptList>,
}

impl RequestContext {
    pub fn new(snapshot: RequestSnapshot, authority: &dyn TrustedHostAuthority) -> Self {
        Self::build(snapshot, authority, RequestOptions::default())
    }

    pub fn with_options(
        snapshot: RequestSnapshot,
        authority: &dyn TrustedHostAuthority,
        options: RequestOptions,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::build(snapshot, authority, options))
    }

    fn build(
        mut snapshot: RequestSnapshot,
        authority: &dyn TrustedHostAuthority,
        options: RequestOptions,
    ) -> Self {
        let validation = validation::validate(&mut snapshot, authority);

        Self {
            snapshot,
            options,
            validation,
            method: OnceCell::new(),
            is_secure_channel: OnceCell::new(),
            port: OnceCell::new(),
            hostname: OnceCell::new(),
            absolute_url: OnceCell::new(),
            accept_content_types: OnceCell::new(),
            accept_encodings: OnceCell::new(),
            accept_languages: OnceCell::new(),
        }
    }

    /// Outcome of the validation performed at construction.
    ///
    /// A failure leaves the context usable: scrubbed values stay readable and
    /// stripped forwarded headers stay absent.
    pub fn validate(&self) -> Result<(), RequestError> {
        self.validation.clone()
    }

    pub fn snapshot(&self) -> &RequestSnapshot {
        &self.snapshot
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    pub fn server(&self, key: &str) -> Option<&str> {
        self.snapshot.server(key)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.snapshot.header(name)
    }

    pub fn mandatory_header(&self, name: &str) -> Result<&str, RequestError> {
        self.header(name)
            .ok_or_else(|| RequestError::bad_request(format!("Header '{name}' is not set")))
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.snapshot.cookie(name)
    }

    pub fn mandatory_cookie(&self, name: &str) -> Result<&str, RequestError> {
        self.cookie(name)
            .ok_or_else(|| RequestError::bad_request(format!("Cookie '{name}' is not set")))
    }

    /// Request method, upper-cased. `X-HTTP-Method-Override` wins over
    /// `REQUEST_METHOD`; `GET` when neither is set.
    pub fn method(&self) -> &str {
        self.method.get_or_init(|| {
            let overridden = if self.options.allow_method_override {
                self.non_empty(server::HTTP_X_HTTP_METHOD_OVERRIDE)
            } else {
                None
            };

            overridden
                .or_else(|| self.non_empty(server::REQUEST_METHOD))
                .map(str::to_ascii_uppercase)
                .unwrap_or_else(|| method::GET.to_string())
        })
    }

    pub fn is_get(&self) -> bool {
        self.method() == method::GET
    }

    pub fn is_post(&self) -> bool {
        self.method() == method::POST
    }

    pub fn is_put(&self) -> bool {
        self.method() == method::PUT
    }

    pub fn is_patch(&self) -> bool {
        self.method() == method::PATCH
    }

    pub fn is_delete(&self) -> bool {
        self.method() == method::DELETE
    }

    pub fn is_head(&self) -> bool {
        self.method() == method::HEAD
    }

    pub fn is_options(&self) -> bool {
        self.method() == method::OPTIONS
    }

    /// The raw request target. Every real front-end supplies one, so its
    /// absence is a [`RequestError::Logic`].
    pub fn request_uri(&self) -> Result<&str, RequestError> {
        self.server(server::REQUEST_URI)
            .ok_or_else(|| RequestError::logic(format!("{} is not set", server::REQUEST_URI)))
    }

    pub fn is_ajax(&self) -> bool {
        self.server(server::HTTP_X_REQUESTED_WITH)
            .is_some_and(|value| value.eq_ignore_ascii_case(XML_HTTP_REQUEST))
    }

    pub fn is_secure_channel(&self) -> bool {
        *self.is_secure_channel.get_or_init(|| {
            let tls = self
                .server(server::HTTPS)
                .is_some_and(|value| value.eq_ignore_ascii_case("on") || value == "1");
            let forwarded = self
                .server(server::HTTP_X_FORWARDED_PROTO)
                .is_some_and(|value| value.eq_ignore_ascii_case("https"));
            tls || forwarded
        })
    }

    /// Port the client connected to: `X-Forwarded-Port`, then `SERVER_PORT`,
    /// then the default port of the scheme.
    pub fn port(&self) -> Result<u16, RequestError> {
        self.port.get_or_init(|| self.resolve_port()).clone()
    }

    fn resolve_port(&self) -> Result<u16, RequestError> {
        let raw = self
            .server(server::HTTP_X_FORWARDED_PORT)
            .or_else(|| self.server(server::SERVER_PORT));

        let Some(raw) = raw else {
            return Ok(self.default_port());
        };

        if !is_all_digits(raw) {
            debug!("Rejected non-numeric port '{raw}'");
            return Err(RequestError::bad_request("Port must be an integer"));
        }

        raw.parse::<u16>().map_err(|_| {
            debug!("Rejected out of range port '{raw}'");
            RequestError::bad_request("Port must be an integer")
        })
    }

    fn default_port(&self) -> u16 {
        if self.is_secure_channel() {
            HTTPS_PORT
        } else {
            HTTP_PORT
        }
    }

    /// Host name from `X-Forwarded-Host` or `Host`, lower-cased and trimmed.
    pub fn hostname(&self) -> Option<&str> {
        self.hostname
            .get_or_init(|| {
                self.server(server::HTTP_X_FORWARDED_HOST)
                    .or_else(|| self.server(server::HTTP_HOST))
                    .map(|host| host.trim().to_ascii_lowercase())
            })
            .as_deref()
    }

    /// Absolute URL of the request, e.g. `https://www.example.com:4433/path`.
    /// The port is omitted when it is the default for the scheme. A port
    /// carried by the host header is replaced by the resolved port.
    pub fn absolute_url(&self) -> Result<&str, RequestError> {
        match self.absolute_url.get_or_init(|| self.build_absolute_url()) {
            Ok(url) => Ok(url.as_str()),
            Err(error) => Err(error.clone()),
        }
    }

    fn build_absolute_url(&self) -> Result<String, RequestError> {
        let secure = self.is_secure_channel();
        let hostname = self.hostname().map(host_without_port).ok_or_else(|| {
            RequestError::bad_request(format!("Header '{}' is not set", header::HOST))
        })?;
        let port = self.port()?;
        let path = match self.request_uri()? {
            "/" => "",
            path => path,
        };

        let (scheme, default_port) = if secure {
            ("https", HTTPS_PORT)
        } else {
            ("http", HTTP_PORT)
        };

        if port == default_port {
            Ok(format!("{scheme}://{hostname}{path}"))
        } else {
            Ok(format!("{scheme}://{hostname}:{port}{path}"))
        }
    }

    pub fn accept_content_types(&self) -> &AcceptList {
        self.accept_content_types
            .get_or_init(|| self.parse_accept(server::HTTP_ACCEPT))
    }

    pub fn accept_encodings(&self) -> &AcceptList {
        self.accept_encodings
            .get_or_init(|| self.parse_accept(server::HTTP_ACCEPT_ENCODING))
    }

    pub fn accept_languages(&self) -> &AcceptList {
        self.accept_languages
            .get_or_init(|| self.parse_accept(server::HTTP_ACCEPT_LANGUAGE))
    }

    fn parse_accept(&self, key: &str) -> AcceptList {
        AcceptList::parse(self.server(key).unwrap_or_default())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.non_empty(server::CONTENT_TYPE)
    }

    pub fn environment(&self) -> Option<&str> {
        self.server(&self.options.environment_key)
    }

    pub fn is_env_dev(&self) -> bool {
        self.environment() == Some(environment::DEV)
    }

    pub fn is_env_prod(&self) -> bool {
        self.environment() == Some(environment::PROD)
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.server(server::HTTP_USER_AGENT)
    }

    pub fn referrer(&self) -> Option<&str> {
        self.server(server::HTTP_REFERER)
    }

    pub fn remote_ip(&self) -> Option<&str> {
        self.server(server::REMOTE_ADDR)
    }

    /// Request start as seconds since the Unix epoch.
    pub fn request_time(&self) -> Option<f64> {
        self.server(server::REQUEST_TIME_FLOAT)
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite())
    }

    /// Resolves a derived property by name, e.g. `"absolute_url"`.
    pub fn property(&self, name: &str) -> Result<PropertyValue<'_>, RequestError> {
        let property: Property = name.parse()?;
        self.value(property)
    }

    pub fn value(&self, property: Property) -> Result<PropertyValue<'_>, RequestError> {
        let value: PropertyValue<'_> = match property {
            Property::Method => PropertyValue::Text(self.method()),
            Property::RequestUri => PropertyValue::Text(self.request_uri()?),
            Property::IsAjax => PropertyValue::Flag(self.is_ajax()),
            Property::IsSecureChannel => PropertyValue::Flag(self.is_secure_channel()),
            Property::Port => PropertyValue::Port(self.port()?),
            Property::Hostname => self.hostname().into(),
            Property::AbsoluteUrl => PropertyValue::Text(self.absolute_url()?),
            Property::AcceptContentTypes => PropertyValue::Accept(self.accept_content_types()),
            Property::AcceptEncodings => PropertyValue::Accept(self.accept_encodings()),
            Property::AcceptLanguages => PropertyValue::Accept(self.accept_languages()),
            Property::ContentType => self.content_type().into(),
            Property::IsEnvDev => PropertyValue::Flag(self.is_env_dev()),
            Property::IsEnvProd => PropertyValue::Flag(self.is_env_prod()),
            Property::UserAgent => self.user_agent().into(),
            Property::Referrer => self.referrer().into(),
            Property::RemoteIp => self.remote_ip().into(),
            Property::RequestTime => self
                .request_time()
                .map_or(PropertyValue::Absent, PropertyValue::Time),
        };

        Ok(value)
    }

    fn non_empty(&self, key: &str) -> Option<&str> {
        self.server(key).filter(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
