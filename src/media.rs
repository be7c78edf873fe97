//! Host-neutral description of user-picked image files.
//!
//! The browser fills [`ImageFile::image_ref`] with an object URL, the terminal
//! frontend with a path on disk. Neither game looks inside the reference.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A file chosen by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFile {
    /// File name including extension
    pub name: String,
    /// MIME type reported by the host
    pub mime: String,
    /// URL or path used to display the image
    pub image_ref: String,
}

impl ImageFile {
    pub fn new(
        name: impl Into<String>,
        mime: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Describe a file on disk, guessing the MIME type from its extension
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = mime_for_path(path).unwrap_or("application/octet-stream");
        Self::new(name, mime, path.to_string_lossy())
    }

    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime)
    }

    /// File name without its last extension, or the whole name when that
    /// would leave nothing
    pub fn display_name(&self) -> &str {
        display_name(&self.name)
    }
}

pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Keep only the files the host reported as images, in their original order
pub fn only_images(files: &[ImageFile]) -> Vec<&ImageFile> {
    files.iter().filter(|f| f.is_image()).collect()
}

pub fn display_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(pos) if pos > 0 => &file_name[..pos],
        _ => file_name,
    }
}

/// MIME type for common image extensions
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("cat.png"), "cat");
        assert_eq!(display_name("my.dog.jpeg"), "my.dog");
        assert_eq!(display_name("README"), "README");
        assert_eq!(display_name(".hidden"), ".hidden");
    }

    #[test]
    fn test_from_path() {
        let file = ImageFile::from_path(Path::new("/pics/Owl.JPG"));
        assert_eq!(file.name, "Owl.JPG");
        assert_eq!(file.mime, "image/jpeg");
        assert!(file.is_image());

        let notes = ImageFile::from_path(Path::new("/pics/notes.txt"));
        assert_eq!(notes.mime, "application/octet-stream");
        assert!(!notes.is_image());
        assert_eq!(mime_for_path(Path::new("/pics/notes.txt")), None);
    }

    #[test]
    fn test_only_images_keeps_order() {
        let files = vec![
            ImageFile::new("b.png", "image/png", "b"),
            ImageFile::new("notes.txt", "text/plain", "n"),
            ImageFile::new("a.gif", "image/gif", "a"),
        ];
        let names: Vec<_> = only_images(&files).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["b.png", "a.gif"]);
    }
}
