use bunner_request_rs::{
    RequestContext, RequestOptions, RequestSnapshot, TrustNone, TrustedHostAuthority,
    TrustedHosts,
};

pub const PEER: &str = "10.0.0.1";

pub struct RequestBuilder {
    snapshot: RequestSnapshot,
    options: Option<RequestOptions>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            snapshot: RequestSnapshot::new()
                .with_server("REMOTE_ADDR", PEER)
                .with_server("REQUEST_URI", "/"),
            options: None,
        }
    }

    pub fn method(mut self, method: &str) -> Self {
        self.snapshot.insert_server("REQUEST_METHOD", method);
        self
    }

    pub fn uri(mut self, uri: &str) -> Self {
        self.snapshot.insert_server("REQUEST_URI", uri);
        self
    }

    pub fn without_uri(mut self) -> Self {
        self.snapshot.remove_server("REQUEST_URI");
        self
    }

    pub fn host(self, host: &str) -> Self {
        self.header("Host", host)
    }

    pub fn secure(mut self) -> Self {
        self.snapshot.insert_server("HTTPS", "on");
        self
    }

    pub fn server_port(mut self, port: &str) -> Self {
        self.snapshot.insert_server("SERVER_PORT", port);
        self
    }

    pub fn remote_addr(mut self, addr: &str) -> Self {
        self.snapshot.insert_server("REMOTE_ADDR", addr);
        self
    }

    pub fn without_remote_addr(mut self) -> Self {
        self.snapshot.remove_server("REMOTE_ADDR");
        self
    }

    pub fn server(mut self, key: &str, value: &str) -> Self {
        self.snapshot.insert_server(key, value);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.snapshot = self.snapshot.with_header(name, value);
        self
    }

    pub fn cookie(mut self, name: &str, value: &str) -> Self {
        self.snapshot.insert_cookie(name, value);
        self
    }

    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn snapshot(self) -> RequestSnapshot {
        self.snapshot
    }

    pub fn build_with(self, authority: &dyn TrustedHostAuthority) -> RequestContext {
        match self.options {
            Some(options) => RequestContext::with_options(self.snapshot, authority, options)
                .expect("valid request options"),
            None => RequestContext::new(self.snapshot, authority),
        }
    }

    /// Builds a context whose immediate peer is not trusted.
    pub fn untrusted(self) -> RequestContext {
        self.build_with(&TrustNone)
    }

    /// Builds a context whose immediate peer is the trusted [`PEER`].
    pub fn trusted(self) -> RequestContext {
        self.build_with(&TrustedHosts::list([PEER]))
    }
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}
