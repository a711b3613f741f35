use crate::api::LibraryApi;
use crate::auth::Auth;
use crate::config::BiblioConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::DataStore;
use directories::ProjectDirs;
use std::path::PathBuf;

pub struct LibraryContext {
    pub api: LibraryApi<FileStore>,
    pub config: BiblioConfig,
    pub data_dir: PathBuf,
}

/// Wire up a file-backed library rooted at `data_dir`, or at the platform
/// data directory when none is given.
///
/// Store initialization failure is fatal here: the system cannot run
/// without a readable store, so the error propagates to the caller.
pub fn initialize(data_dir: Option<PathBuf>) -> Result<LibraryContext> {
    let data_dir = data_dir.unwrap_or_else(|| {
        ProjectDirs::from("com", "biblio", "biblio")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./data"))
    });

    let store = FileStore::new(data_dir.clone());
    store.init()?;

    let config = BiblioConfig::load(&data_dir)?;
    let auth = Auth::new(&config)?;

    Ok(LibraryContext {
        api: LibraryApi::new(store, auth),
        config,
        data_dir,
    })
}
