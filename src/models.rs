//! Structs describing request and response data of the supported app APIs.

pub mod bookmark;
pub mod deck;
pub mod general;
pub mod notes;
pub mod ocs;
