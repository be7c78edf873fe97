//! Tournament candidates

use serde::{Deserialize, Serialize};

use super::{TournamentError, TournamentResult};
use crate::media::{only_images, ImageFile};

/// Minimum number of candidates for a bracket
pub const MIN_CANDIDATES: usize = 2;

/// One image competing in the bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    /// URL or path of the image
    pub image: String,
    /// Display rotation in degrees (0, 90, 180 or 270)
    #[serde(default)]
    pub rotation: u16,
}

impl Candidate {
    pub fn new(index: usize, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: format!("cand-{}", index),
            name: name.into(),
            image: image.into(),
            rotation: 0,
        }
    }

    /// Candidate for the `index`-th image file
    pub fn from_file(index: usize, file: &ImageFile) -> Self {
        Self::new(index, file.display_name(), file.image_ref.clone())
    }

    /// The name, or `None` while names are hidden
    pub fn visible_name(&self, show_names: bool) -> Option<&str> {
        show_names.then_some(self.name.as_str())
    }

    /// Turn the image a quarter clockwise
    pub fn rotate(&mut self) -> u16 {
        self.rotation = (self.rotation + 90) % 360;
        self.rotation
    }
}

/// Build candidates from picked files, ignoring anything that isn't an image
pub fn candidates_from_files(files: &[ImageFile]) -> TournamentResult<Vec<Candidate>> {
    let images = only_images(files);
    if images.len() < MIN_CANDIDATES {
        return Err(TournamentError::NotEnoughCandidates {
            found: images.len(),
        });
    }

    Ok(images
        .into_iter()
        .enumerate()
        .map(|(idx, file)| Candidate::from_file(idx, file))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: &str) -> ImageFile {
        ImageFile::new(name, mime, format!("blob:{}", name))
    }

    #[test]
    fn test_from_files_skips_non_images() {
        let files = vec![
            file("notes.txt", "text/plain"),
            file("cat.png", "image/png"),
            file("dog.jpg", "image/jpeg"),
        ];

        let candidates = candidates_from_files(&files).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id, "cand-0");
        assert_eq!(candidates[0].name, "cat");
        assert_eq!(candidates[0].image, "blob:cat.png");
        assert_eq!(candidates[1].id, "cand-1");
    }

    #[test]
    fn test_needs_two_images() {
        let files = vec![file("cat.png", "image/png"), file("a.txt", "text/plain")];
        assert_eq!(
            candidates_from_files(&files),
            Err(TournamentError::NotEnoughCandidates { found: 1 })
        );
    }

    #[test]
    fn test_hidden_names() {
        let c = Candidate::new(3, "owl", "pics/owl.png");
        assert_eq!(c.visible_name(true), Some("owl"));
        assert_eq!(c.visible_name(false), None);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut c = Candidate::new(0, "owl", "owl.png");
        let turns: Vec<u16> = (0..4).map(|_| c.rotate()).collect();
        assert_eq!(turns, [90, 180, 270, 0]);
    }
}
