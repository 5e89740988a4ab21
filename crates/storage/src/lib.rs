#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cached;
pub mod rest;


pub use cached::CachedRest;
pub use rest::{HttpResponse, ReqwestSendRequest, Rest, SendRequest, TransportError};
