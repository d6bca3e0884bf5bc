use std::rc::Rc;

use unsegen::input::{Key, Navigatable, OperationResult};

use super::catalog::{Catalog, WallpaperDescriptor, WallpaperId};
use super::loading::{LoadState, LoadingMap};
use crate::host::{Document, KeyListener, ScrollLock};

pub const GALLERY_COLUMNS: usize = 3;

/// Collaborators the gallery reports to. Persisting the choice and closing
/// the window are up to the implementor.
pub trait GalleryHandler {
    fn select_wallpaper(&self, src: &str);
    fn close_window(&self);
}

pub struct WallpaperGallery {
    catalog: Catalog,
    loading: LoadingMap,
    focus: usize,
}

impl WallpaperGallery {
    pub fn new(catalog: Catalog) -> Self {
        let loading = LoadingMap::from_catalog(&catalog);
        WallpaperGallery {
            catalog,
            loading,
            focus: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn loading(&self) -> &LoadingMap {
        &self.loading
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn is_loading(&self, id: WallpaperId) -> bool {
        self.loading.is_loading(id)
    }

    pub fn on_image_load(&mut self, id: WallpaperId) {
        self.loading.mark_loaded(id);
    }

    pub fn on_image_error(&mut self, id: WallpaperId) {
        if self.loading.is_loading(id) {
            log::warn!("Wallpaper {} failed to load", id);
        }
        self.loading.mark_failed(id);
    }

    /// Each catalog entry paired with its current load state.
    pub fn tiles(&self) -> impl Iterator<Item = (&WallpaperDescriptor, LoadState)> + '_ {
        self.catalog.iter().map(move |entry| {
            (
                entry,
                self.loading.state(entry.id).unwrap_or(LoadState::Loading),
            )
        })
    }

    /// Registers the gallery with `document`: Escape closes through
    /// `handler` and background scrolling is locked. Both are undone when
    /// the returned value is dropped.
    pub fn mount<H>(self, document: &Document, handler: Rc<H>) -> MountedGallery<H>
    where
        H: GalleryHandler + 'static,
    {
        let escape_handler = handler.clone();
        let listener = document.add_key_listener(move |key| {
            if *key == Key::Esc {
                escape_handler.close_window();
            }
        });
        let scroll_lock = document.lock_scroll();

        log::debug!("Mounted gallery with {} wallpapers", self.catalog.len());

        MountedGallery {
            gallery: self,
            handler,
            _listener: listener,
            _scroll_lock: scroll_lock,
        }
    }
}

impl Navigatable for WallpaperGallery {
    fn move_down(&mut self) -> OperationResult {
        if self.focus + GALLERY_COLUMNS < self.catalog.len() {
            self.focus += GALLERY_COLUMNS;
            Ok(())
        } else {
            Err(())
        }
    }

    fn move_left(&mut self) -> OperationResult {
        if self.focus > 0 {
            self.focus -= 1;
            Ok(())
        } else {
            Err(())
        }
    }

    fn move_right(&mut self) -> OperationResult {
        if self.focus + 1 < self.catalog.len() {
            self.focus += 1;
            Ok(())
        } else {
            Err(())
        }
    }

    fn move_up(&mut self) -> OperationResult {
        if self.focus >= GALLERY_COLUMNS {
            self.focus -= GALLERY_COLUMNS;
            Ok(())
        } else {
            Err(())
        }
    }
}

/// A gallery that is currently shown.
pub struct MountedGallery<H: GalleryHandler> {
    gallery: WallpaperGallery,
    handler: Rc<H>,
    _listener: KeyListener,
    _scroll_lock: ScrollLock,
}

impl<H: GalleryHandler> MountedGallery<H> {
    pub fn gallery(&self) -> &WallpaperGallery {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut WallpaperGallery {
        &mut self.gallery
    }

    /// Reports the wallpaper at `index`. The gallery stays open.
    pub fn select(&self, index: usize) {
        if let Some(entry) = self.gallery.catalog.get(index) {
            log::info!("Wallpaper '{}' chosen", entry.alt);
            self.handler.select_wallpaper(&entry.src);
        }
    }

    pub fn activate(&self) {
        self.select(self.gallery.focus)
    }

    pub fn close(&self) {
        self.handler.close_window();
    }

    pub fn unmount(self) -> WallpaperGallery {
        log::debug!("Unmounted gallery");
        self.gallery
    }
}
