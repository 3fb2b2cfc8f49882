use common::error::ApiError;
use common::model::analytics::Profile;
use common::model::field::TemplateEntry;
use common::model::result::ResultRow;

pub enum Msg {
    // CSV upload and field types
    CsvSelected(web_sys::File),
    HeaderParsed(Vec<String>),
    HeaderReadFailed(String),
    TemplateLoaded(Result<Vec<TemplateEntry>, ApiError>),
    SetFieldType { index: usize, code: i32 },
    SetFieldVisible { index: usize, visible: bool },

    // Model build and export
    Build,
    BuildFinished(Result<Vec<ResultRow>, ApiError>),
    Export,
    TemplateSaved(Result<(), ApiError>),

    // Google Analytics credentials
    CheckCredentials,
    CredentialsChecked(Result<bool, ApiError>),
    ProfilesLoaded(Result<Vec<Profile>, ApiError>),
    SelectProfile(String),
    CredentialFileSelected(web_sys::File),
    CredentialsUploaded(Result<(), ApiError>),
    RemoveCredentials,
    CredentialsRemoved(Result<(), ApiError>),
    ShowCredentialUpload(bool),
}
