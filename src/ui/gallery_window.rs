use std::fmt::Write;
use unsegen::base::*;
use unsegen::widget::*;

use crate::gallery::{LoadState, WallpaperDescriptor, WallpaperGallery, GALLERY_COLUMNS};

use super::Context;

const SPINNER: &[char] = &['|', '/', '-', '\\'];
const TITLE: &str = "Select Wallpaper";
const CLOSE_HINT: &str = "[x] close";

/// Caption shown for a wallpaper tile. Loading tiles show a busy indicator
/// instead of the caption.
pub fn tile_label(entry: &WallpaperDescriptor, state: LoadState, tick: usize) -> String {
    match state {
        LoadState::Loading => format!("{} Loading...", SPINNER[tick % SPINNER.len()]),
        LoadState::Loaded => entry.alt.clone(),
        LoadState::Failed => format!("! {}", entry.alt),
    }
}

/// Modal grid over the wallpaper catalog.
pub struct GalleryWindow<'a> {
    context: &'a Context,
    gallery: &'a WallpaperGallery,
}

impl<'a> GalleryWindow<'a> {
    const TILE_WIDTH: usize = 22;
    const HEADER_ROWS: usize = 2;
    const WIDTH: usize = GALLERY_COLUMNS * Self::TILE_WIDTH;

    pub fn new(context: &'a Context, gallery: &'a WallpaperGallery) -> Self {
        GalleryWindow { context, gallery }
    }

    fn rows(&self) -> usize {
        let len = self.gallery.catalog().len();
        ((len + GALLERY_COLUMNS - 1) / GALLERY_COLUMNS).max(1)
    }
}

impl Widget for GalleryWindow<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(Self::WIDTH),
            height: RowDemand::exact(Self::HEADER_ROWS + self.rows()),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.context.theme();
        let mut cursor = Cursor::new(&mut window).style_modifier(theme.gallery_title_style);

        let _ = write!(
            &mut cursor,
            "{}{:>width$}",
            TITLE,
            CLOSE_HINT,
            width = Self::WIDTH - TITLE.len()
        );

        if self.gallery.catalog().is_empty() {
            cursor.move_to(ColIndex::new(0), RowIndex::new(Self::HEADER_ROWS as i32));
            cursor.set_style_modifier(theme.tile_loading_style);
            let _ = write!(&mut cursor, "No wallpapers available");
            return;
        }

        for (idx, (entry, state)) in self.gallery.tiles().enumerate() {
            let row = idx / GALLERY_COLUMNS;
            let col = idx % GALLERY_COLUMNS;
            cursor.move_to(
                ColIndex::new((col * Self::TILE_WIDTH) as i32),
                RowIndex::new((Self::HEADER_ROWS + row) as i32),
            );

            cursor.set_style_modifier(match state {
                LoadState::Loading => theme.tile_loading_style,
                LoadState::Loaded => theme.tile_style,
                LoadState::Failed => theme.tile_failed_style,
            });
            if idx == self.gallery.focus() {
                cursor.apply_style_modifier(theme.tile_focus_style);
            }

            let label = tile_label(entry, state, self.context.ticks());
            let inner = Self::TILE_WIDTH - 4;
            if let Err(e) = write!(&mut cursor, "[ {:<inner$.inner$} ]", label, inner = inner) {
                log::warn!("Error while writing wallpaper tile: {}", e);
            }
        }
    }
}
