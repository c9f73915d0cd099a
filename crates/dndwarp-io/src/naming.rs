use std::path::{Component, Path, PathBuf};

/// Directory name of the inputs that is swapped for [`OUTPUT_DIR`].
pub const INPUT_DIR: &str = "Images";

/// Directory name the outputs are written to.
pub const OUTPUT_DIR: &str = "Output";

/// Where to write the result of warping `input` into `frame_count` frames.
///
/// Every `Images` directory of the path becomes `Output`. A single frame keeps
/// the input format as `<stem>_warped.<ext>`; several frames are written as a GIF
/// named `<stem>_<ext>.gif`. Inputs without extension default to PNG for stills.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use dndwarp_io::naming::output_path_for;
///
/// let input = Path::new("Images/castle.jpg");
/// assert_eq!(output_path_for(input, 1), Path::new("Output/castle_warped.jpg"));
/// assert_eq!(output_path_for(input, 12), Path::new("Output/castle_jpg.gif"));
/// ```
pub fn output_path_for(input: &Path, frame_count: usize) -> PathBuf {
    let mut dir = PathBuf::new();
    if let Some(parent) = input.parent() {
        for component in parent.components() {
            match component {
                Component::Normal(name) if name == INPUT_DIR => dir.push(OUTPUT_DIR),
                other => dir.push(other),
            }
        }
    }

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input.extension().map(|e| e.to_string_lossy().into_owned());

    let file_name = match (frame_count, ext) {
        (0 | 1, Some(ext)) => format!("{stem}_warped.{ext}"),
        (0 | 1, None) => format!("{stem}_warped.png"),
        (_, Some(ext)) => format!("{stem}_{ext}.gif"),
        (_, None) => format!("{stem}.gif"),
    };

    dir.join(file_name)
}
