use std::path::PathBuf;

pub(crate) const DEFAULT_USER_AGENT: &str =
    concat!("loadsweep/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_CONCURRENCY_VALUES: &str = "1,10,20,50,100,1000";
pub(crate) const DEFAULT_POSTS_VALUES: &str = "10,100,1000";
pub(crate) const DEFAULT_FOLLOWS_VALUES: &str = "10,50,100";

pub(crate) fn default_output_path() -> String {
    default_base_dir()
        .join("results")
        .to_string_lossy()
        .into_owned()
}

fn default_base_dir() -> PathBuf {
    if let Some(home) = user_home_dir() {
        return home.join(".loadsweep");
    }

    PathBuf::from(".loadsweep")
}

fn user_home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        if let Some(value) = std::env::var_os("USERPROFILE") {
            return Some(PathBuf::from(value));
        }
    }

    std::env::var_os("HOME").map(PathBuf::from)
}
