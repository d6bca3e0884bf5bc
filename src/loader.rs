use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;

use crate::events::{Event, EventSink};
use crate::gallery::{Catalog, WallpaperDescriptor};

/// Fetches wallpaper images in the background and reports each completion
/// through the event sink. Completions arrive in whatever order the
/// individual loads finish and are tagged with the gallery they belong to.
pub struct ResourceLoader {
    base: PathBuf,
    sink: EventSink,
    gallery: u64,
}

impl ResourceLoader {
    pub fn new(base: &Path, sink: EventSink, gallery: u64) -> Self {
        ResourceLoader {
            base: base.to_owned(),
            sink,
            gallery,
        }
    }

    pub fn resolve(&self, src: &str) -> PathBuf {
        self.base.join(src)
    }

    pub fn load_all(&self, catalog: &Catalog) -> Vec<thread::JoinHandle<()>> {
        catalog.iter().map(|entry| self.load(entry)).collect()
    }

    pub fn load(&self, entry: &WallpaperDescriptor) -> thread::JoinHandle<()> {
        let path = self.resolve(&entry.src);
        let id = entry.id;
        let gallery = self.gallery;
        let sink = self.sink.clone();

        thread::spawn(move || {
            let event = match read_image(&path) {
                Ok(size) => {
                    log::debug!("Loaded {} ({} bytes)", path.display(), size);
                    Event::ImageLoaded { gallery, id }
                }
                Err(e) => {
                    log::warn!("Could not load {}: {}", path.display(), e);
                    Event::ImageFailed { gallery, id }
                }
            };

            // The gallery may be gone already; nothing is waiting then
            let _ = sink.send(event);
        })
    }
}

fn read_image(path: &Path) -> io::Result<usize> {
    let content = fs::read(path)?;
    if content.is_empty() {
        Err(io::Error::new(io::ErrorKind::InvalidData, "image is empty"))
    } else {
        Ok(content.len())
    }
}
