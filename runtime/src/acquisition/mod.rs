//! Network-side collaborators: redirect expansion for shortened map links.

pub mod domains;
pub mod expander;

pub use domains::DomainAllowlist;
pub use expander::{ExpandError, HttpExpander, NoopExpander, RedirectExpander};
