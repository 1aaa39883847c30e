//! Graph representation and construction module

pub mod algorithms;
pub mod builder;
pub mod social;

pub use social::{EdgeAttrs, SocialGraph};
