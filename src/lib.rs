mod accept;
mod authority;
pub mod constants;
mod context;
mod error;
mod options;
mod property;
mod snapshot;
mod util;
mod validation;

pub use accept::{AcceptEntry, AcceptList};
pub use authority::{TrustNone, TrustedHostAuthority, TrustedHosts};
pub use context::RequestContext;
pub use error::{ErrorKind, RequestError};
pub use options::{OptionsError, RequestOptions};
pub use property::{Property, PropertyValue};
pub use snapshot::{RequestSnapshot, Variables};
pub use util::header_key;
