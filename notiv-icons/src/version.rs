pub const APP_VERSION: &str = match option_env!("NOTIV_BUILD_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};
