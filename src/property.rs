use crate::accept::AcceptList;
use crate::error::RequestError;
use std::fmt;
use std::str::FromStr;

/// Derived properties reachable through [`crate::RequestContext::property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Method,
    RequestUri,
    IsAjax,
    IsSecureChannel,
    Port,
    Hostname,
    AbsoluteUrl,
    AcceptContentTypes,
    AcceptEncodings,
    AcceptLanguages,
    ContentType,
    IsEnvDev,
    IsEnvProd,
    UserAgent,
    Referrer,
    RemoteIp,
    RequestTime,
}

impl Property {
    pub const ALL: [Property; 17] = [
        Property::Method,
        Property::RequestUri,
        Property::IsAjax,
        Property::IsSecureChannel,
        Property::Port,
        Property::Hostname,
        Property::AbsoluteUrl,
        Property::AcceptContentTypes,
        Property::AcceptEncodings,
        Property::AcceptLanguages,
        Property::ContentType,
        Property::IsEnvDev,
        Property::IsEnvProd,
        Property::UserAgent,
        Property::Referrer,
        Property::RemoteIp,
        Property::RequestTime,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Property::Method => "method",
            Property::RequestUri => "request_uri",
            Property::IsAjax => "is_ajax",
            Property::IsSecureChannel => "is_secure_channel",
            Property::Port => "port",
            Property::Hostname => "hostname",
            Property::AbsoluteUrl => "absolute_url",
            Property::AcceptContentTypes => "accept_content_types",
            Property::AcceptEncodings => "accept_encodings",
            Property::AcceptLanguages => "accept_languages",
            Property::ContentType => "content_type",
            Property::IsEnvDev => "is_env_dev",
            Property::IsEnvProd => "is_env_prod",
            Property::UserAgent => "user_agent",
            Property::Referrer => "referrer",
            Property::RemoteIp => "remote_ip",
            Property::RequestTime => "request_time",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = RequestError;

    /// Accepts the snake_case name as well as its camelCase spelling
    /// (`absolute_url` or `absoluteUrl`).
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Property::ALL
            .into_iter()
            .find(|property| property.name() == name || camel_case(property.name()) == name)
            .ok_or_else(|| RequestError::logic(format!("Unknown property '{name}'")))
    }
}

fn camel_case(name: &str) -> String {
    let mut words = name.split('_');
    let mut camel = words.next().unwrap_or_default().to_string();
    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            camel.push(first.to_ascii_uppercase());
            camel.push_str(chars.as_str());
        }
    }
    camel
}

/// Value of a [`Property`] resolved on a context.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue<'a> {
    Text(&'a str),
    Flag(bool),
    Port(u16),
    Time(f64),
    Accept(&'a AcceptList),
    Absent,
}

impl<'a> PropertyValue<'a> {
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            PropertyValue::Text(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Flag(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, PropertyValue::Absent)
    }
}

impl<'a> From<Option<&'a str>> for PropertyValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(PropertyValue::Absent, PropertyValue::Text)
    }
}

#[cfg(test)]
#[path = "property_test.rs"]
mod property_test;
