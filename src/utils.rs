use anyhow::{bail, Context, Result};
use std::{fs, path::PathBuf};

/// Checks that `output` carries one of `extensions` and creates its parent
/// directory.
pub fn prepare_output_path(output: &str, extensions: &[&str]) -> Result<PathBuf> {
    let outpath = PathBuf::from(output);

    match outpath.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if extensions.contains(&ext) => {}
        Some(ext) => bail!(
            "Incorrect file extension {:?}. Should be one of: {}",
            ext,
            extensions.join(", ")
        ),
        None => bail!(
            "No filename provided for output. Should be a .{} file.",
            extensions[0]
        ),
    }

    if let Some(parent) = outpath.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create parent directory: {:?}", parent))?;
    }

    Ok(outpath)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_prepare_output_path_creates_parent() -> Result<()> {
        let dir = tempdir()?;
        let output = dir.path().join("nested").join("out.tsv");

        let outpath = prepare_output_path(output.to_str().unwrap(), &["tsv"])?;

        assert_eq!(outpath, output);
        assert!(dir.path().join("nested").is_dir());
        Ok(())
    }

    #[test]
    fn test_prepare_output_path_wrong_extension() {
        let result = prepare_output_path("out.csv", &["fasta", "fa"]);
        assert_eq!(
            result.unwrap_err().to_string(),
            "Incorrect file extension \"csv\". Should be one of: fasta, fa"
        );
    }

    #[test]
    fn test_prepare_output_path_without_extension() {
        let result = prepare_output_path("out", &["tsv"]);
        assert_eq!(
            result.unwrap_err().to_string(),
            "No filename provided for output. Should be a .tsv file."
        );
    }
}
