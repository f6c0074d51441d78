use std::io::Write;

use crate::prelude::*;

/// Base name of the input file without its extension.
pub fn model_name(in_file: &Path) -> AnyResult<String> {
    let Some(stem) = in_file.file_stem() else {
        bail!("Input path {} has no file name", in_file.display());
    };
    Ok(stem.to_string_lossy().into_owned())
}

pub fn default_output_path(model_name: &str) -> PathBuf {
    PathBuf::from(format!("{model_name}.json"))
}

/// Create (or truncate) `path` and write `data` to it.
///
/// If writing fails, the partial file is removed.
pub fn write_output(path: &Path, data: &[u8]) -> AnyResult<()> {
    let mut outfile = std::fs::File::create(path)
        .context("Could not open output file")?;
    let result = outfile.write_all(data)
        .and_then(|_| outfile.flush())
        .and_then(|_| outfile.sync_all());
    if let Err(e) = result {
        drop(outfile);
        if let Err(rm) = std::fs::remove_file(path) {
            tracing::warn!(
                path = %path.display(),
                error = %rm,
                "could not remove partial output file"
            );
        }
        return Err(e).context("Could not write output");
    }
    Ok(())
}
