//! Paths of every HTTP endpoint the dashboard talks to.

pub const CREDENTIAL_SET: &str = "/api/v1/ga/cred_set";
pub const CREDENTIAL_CHECK: &str = "/api/v1/ga/check_cred";
pub const CREDENTIAL_REMOVE: &str = "/api/v1/ga/cred_remove";
pub const PROFILES: &str = "/api/v1/ga/profiles/all";
pub const DATA_TEMPLATE: &str = "/api/v1/data_template/details";
pub const DATA_TEMPLATE_UPDATE: &str = "/api/v1/data_template/update";
pub const MODEL_BUILD: &str = "/api/v1/model/build";
pub const EXPORT_TO_EXCEL: &str = "/api/v1/model/export_to_excel";
