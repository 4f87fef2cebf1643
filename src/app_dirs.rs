use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "focusboard")
    }

    pub fn config_path() -> PathBuf {
        Self::project()
            .map(|pd| pd.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("focusboard_config.json"))
    }

    pub fn log_path() -> PathBuf {
        Self::project()
            .map(|pd| pd.data_local_dir().join("focusboard.log"))
            .unwrap_or_else(|| PathBuf::from("focusboard.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_have_expected_file_names() {
        assert!(AppDirs::config_path().ends_with("config.json")
            || AppDirs::config_path().ends_with("focusboard_config.json"));
        assert!(AppDirs::log_path().ends_with("focusboard.log"));
    }
}
