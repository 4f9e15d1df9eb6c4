// src/script.rs
// =============================================================================
// Writes expand.sh into the mirror.
//
// Running the script inside the mirror directory clones the full repository
// next to the mirrored files, moves it over them, and resets to the upstream
// state, turning the lightweight mirror into a normal working copy.
// =============================================================================

use std::path::{Path, PathBuf};

use crate::error::MirrorError;

pub const SCRIPT_NAME: &str = "expand.sh";

fn render(clone_url: &str) -> String {
    format!(
        "#!/bin/bash\n\
         git clone {} .repo\n\
         mv -f .repo/* .repo/.* ./\n\
         rm -rf .repo\n\
         rm {}\n\
         git reset --hard\n",
        clone_url, SCRIPT_NAME
    )
}

// Writes the script into `destination` and marks it executable (unix)
//
// Returns: full path of the written script
pub fn write_expand_script(destination: &Path, clone_url: &str) -> Result<PathBuf, MirrorError> {
    let path = destination.join(SCRIPT_NAME);
    let persist_error = |source| MirrorError::Persist {
        path: path.clone(),
        source,
    };

    std::fs::write(&path, render(clone_url)).map_err(persist_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .map_err(persist_error)?;
    }

    Ok(path)
}
