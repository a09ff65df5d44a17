pub mod server {
    pub const HEADER_PREFIX: &str = "HTTP_";

    pub const REQUEST_METHOD: &str = "REQUEST_METHOD";
    pub const REQUEST_URI: &str = "REQUEST_URI";
    pub const REQUEST_TIME_FLOAT: &str = "REQUEST_TIME_FLOAT";
    pub const REMOTE_ADDR: &str = "REMOTE_ADDR";
    pub const SERVER_PORT: &str = "SERVER_PORT";
    pub const HTTPS: &str = "HTTPS";
    pub const CONTENT_TYPE: &str = "CONTENT_TYPE";
    pub const CONTENT_LENGTH: &str = "CONTENT_LENGTH";
    pub const ENVIRONMENT: &str = "PLAISIO_ENV";

    pub const HTTP_HOST: &str = "HTTP_HOST";
    pub const HTTP_ACCEPT: &str = "HTTP_ACCEPT";
    pub const HTTP_ACCEPT_ENCODING: &str = "HTTP_ACCEPT_ENCODING";
    pub const HTTP_ACCEPT_LANGUAGE: &str = "HTTP_ACCEPT_LANGUAGE";
    pub const HTTP_USER_AGENT: &str = "HTTP_USER_AGENT";
    pub const HTTP_REFERER: &str = "HTTP_REFERER";
    pub const HTTP_X_REQUESTED_WITH: &str = "HTTP_X_REQUESTED_WITH";
    pub const HTTP_X_HTTP_METHOD_OVERRIDE: &str = "HTTP_X_HTTP_METHOD_OVERRIDE";
    pub const HTTP_X_FORWARDED_FOR: &str = "HTTP_X_FORWARDED_FOR";
    pub const HTTP_X_FORWARDED_HOST: &str = "HTTP_X_FORWARDED_HOST";
    pub const HTTP_X_FORWARDED_PROTO: &str = "HTTP_X_FORWARDED_PROTO";
    pub const HTTP_X_FORWARDED_PORT: &str = "HTTP_X_FORWARDED_PORT";

    /// Forwarded headers that are only honoured when the peer is a trusted proxy.
    pub const FORWARDED: [&str; 4] = [
        HTTP_X_FORWARDED_FOR,
        HTTP_X_FORWARDED_HOST,
        HTTP_X_FORWARDED_PROTO,
        HTTP_X_FORWARDED_PORT,
    ];
}

pub mod header {
    pub const ACCEPT: &str = "Accept";
    pub const ACCEPT_ENCODING: &str = "Accept-Encoding";
    pub const ACCEPT_LANGUAGE: &str = "Accept-Language";
    pub const CONTENT_LENGTH: &str = "Content-Length";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const COOKIE: &str = "Cookie";
    pub const HOST: &str = "Host";
    pub const REFERER: &str = "Referer";
    pub const USER_AGENT: &str = "User-Agent";
    pub const X_FORWARDED_FOR: &str = "X-Forwarded-For";
    pub const X_FORWARDED_HOST: &str = "X-Forwarded-Host";
    pub const X_FORWARDED_PORT: &str = "X-Forwarded-Port";
    pub const X_FORWARDED_PROTO: &str = "X-Forwarded-Proto";
    pub const X_HTTP_METHOD_OVERRIDE: &str = "X-HTTP-Method-Override";
    pub const X_REQUESTED_WITH: &str = "X-Requested-With";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod environment {
    pub const DEV: &str = "dev";
    pub const PROD: &str = "prod";
}
