//! Browser-equivalent client layer: the data gateway the public pages and
//! the admin console consume, the persistent session store, and the admin
//! form data mapping.

pub mod forms;
pub mod gateway;
pub mod session;
