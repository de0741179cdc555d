//! NewTypes for values exchanged with a Nextcloud server.

mod ids;
mod server_url;
mod strings;

pub use ids::*;
pub use server_url::*;
pub use strings::*;
