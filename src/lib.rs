//! Model bindings for a slice of the OCI Core Services API.
//!
//! Records serialize to and from the service's JSON wire format, string enums
//! tolerate unknown tokens and report them through [`Validate`], and request
//! records bind to an [`HttpRequest`] through [`OciRequest`]. Nothing here
//! sends requests; a transport takes the bound request (or
//! [`HttpRequest::into_reqwest`]) from there.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::result_large_err)]

mod binding;
pub mod codec;
mod config;
pub mod enums;
mod errors;
mod http;
pub mod models;
pub mod operations;
pub mod schema;
pub mod sdk_time;
mod validate;

pub use binding::{read_response, OciRequest, OciResponse, RequestMetadata};
pub use codec::Polymorphic;
pub use config::{Config, API_VERSION};
pub use enums::{enum_registry, string_values_of, EnumDescriptor, OciEnum};
pub use errors::{ApiError, EnumViolation, Error, Result, ValidationError};
pub use http::{HeaderEntry, HeaderList, HttpRequest, RawResponse, RetryPolicy};
pub use models::HasId;
pub use schema::{FieldSpec, FieldType, Position, Record};
pub use validate::Validate;
