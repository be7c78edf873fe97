//! Picked-file handling
//!
//! Turns a file input's selection into [`ImageFile`]s backed by object URLs,
//! and releases those URLs again.

use leptos::event_target;
use web_sys::{File, HtmlInputElement, Url};

use classroom_arcade::media::{is_image_mime, ImageFile};

/// Files chosen in the input that fired `ev`. Only images get an object URL.
pub fn picked_files(ev: &web_sys::Event) -> Vec<ImageFile> {
    let input: HtmlInputElement = event_target(ev);
    let Some(list) = input.files() else {
        return Vec::new();
    };

    let files = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| to_image_file(&file))
        .collect();

    // Allow picking the same folder again
    input.set_value("");
    files
}

/// The first picked file, if it is an image
pub fn picked_image(ev: &web_sys::Event) -> Option<ImageFile> {
    let mut files = picked_files(ev);
    if files.is_empty() {
        return None;
    }
    let file = files.swap_remove(0);
    revoke(files.iter().map(|f| f.image_ref.as_str()));
    file.is_image().then_some(file)
}

fn to_image_file(file: &File) -> ImageFile {
    let mime = file.type_();
    let image_ref = if is_image_mime(&mime) {
        Url::create_object_url_with_blob(file).unwrap_or_default()
    } else {
        String::new()
    };
    ImageFile::new(file.name(), mime, image_ref)
}

/// Release object URLs. Anything that isn't a `blob:` URL is ignored.
pub fn revoke<'a>(urls: impl IntoIterator<Item = &'a str>) {
    for url in urls {
        if url.starts_with("blob:") {
            let _ = Url::revoke_object_url(url);
        }
    }
}
