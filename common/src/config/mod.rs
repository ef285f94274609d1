/// Connection settings for the managed file, constructed once at startup and
/// handed to the client as a value. Nothing reads these from ambient state,
/// so the client can be pointed at fake values in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Static access token sent in the `Authorization` header.
    pub token: String,
    pub owner: String,
    pub repo: String,
    /// Path of the managed JSON file inside the repository.
    pub file_path: String,
}

impl AppConfig {
    /// URL of the contents resource both operations target.
    pub fn contents_url(&self, api_root: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            api_root, self.owner, self.repo, self.file_path
        )
    }
}
