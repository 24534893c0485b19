//! Client for an identity-verification web service.
//!
//! Requests are built with [`request::RequestBuilder`], signed with the
//! application's RSA key, and dispatched through an
//! [`request::executor::Executor`]. Responses are parsed into typed results
//! that validate only the fields callers depend on.
//!
//! Two service clients sit on top:
//! - [`DocScanService`] for document scan sessions and their media
//! - [`ShareClient`] for dynamic share URLs and the profiles shared through them

#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod config;
pub mod doc_scan;
pub mod error;
pub mod media;
mod parse;
pub mod profile;
pub mod request;
pub mod share;

pub use config::ClientConfig;
pub use doc_scan::DocScanService;
pub use error::{SdkError, SdkResult};
pub use media::{Media, MediaKind};
pub use profile::{ActivityDetails, Profile};
pub use share::ShareClient;
