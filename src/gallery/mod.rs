pub mod catalog;
pub mod loading;
pub mod selector;

pub use catalog::{Catalog, WallpaperDescriptor, WallpaperId};
pub use loading::{LoadState, LoadingMap};
pub use selector::{GalleryHandler, MountedGallery, WallpaperGallery, GALLERY_COLUMNS};
