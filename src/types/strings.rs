use aliri_braid::braid;

/// Nextcloud user id / login name.
#[braid(serde)]
pub struct Username;

/// App password issued at the end of the anonymous login flow.
#[braid(serde)]
pub struct AppPassword;

/// Token identifying one run of the anonymous login flow.
#[braid(serde)]
pub struct LoginToken;
