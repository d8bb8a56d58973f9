//! Target URL composition for the storage endpoint.
//!
//! The destination is `base_url + output_directory + "/" + name` by plain
//! string concatenation (the contract of the upstream pipeline; no path
//! normalization), plus a fixed query parameter set.

use crate::config::UploaderConfig;

/// Value of the fixed `op` query parameter sent with every PUT.
const OP_HOMEDIR: &str = "homedir";

/// Composes the target path URL (no query string) for a record name.
pub fn compose_target(base_url: &str, output_directory: &str, name: &str) -> String {
    format!("{}{}/{}", base_url, output_directory, name)
}

/// Full request URL: composed target plus `user.name=<user>&op=homedir`,
/// form-urlencoded. The query set is fixed per configuration and does not
/// depend on the payload.
pub fn target_url(cfg: &UploaderConfig, name: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("user.name", &cfg.user)
        .append_pair("op", OP_HOMEDIR)
        .finish();
    format!(
        "{}?{}",
        compose_target(&cfg.base_url, &cfg.output_directory, name),
        query
    )
}
