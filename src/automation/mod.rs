pub mod capture;
pub mod device;
pub mod session;

#[cfg(feature = "desktop")]
pub mod desktop;
