//! # Mail Relay
//!
//! Delivers contact form submissions to the site administrator.
//!
//! The HTTP handler only sees the [`MailRelay`] trait, so the route can be
//! exercised without a live SMTP server. [`smtp::SmtpRelay`] is the production
//! implementation.

pub mod smtp;

use common::requests::ContactRequest;
use futures_util::future::BoxFuture;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("could not build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp transport failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

pub trait MailRelay: Send + Sync {
    /// Sends one contact message. The request is expected to be validated already.
    fn send<'a>(&'a self, request: &'a ContactRequest) -> BoxFuture<'a, Result<(), RelayError>>;
}
