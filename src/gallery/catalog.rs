use derive_more::{Constructor, Display, From};
use itertools::Itertools;
use serde::Deserialize;
use std::collections::BTreeSet;

use crate::error::{Error, ErrorKind, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Deserialize)]
#[serde(transparent)]
pub struct WallpaperId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq, Constructor, Deserialize)]
pub struct WallpaperDescriptor {
    pub id: WallpaperId,
    pub src: String,
    pub alt: String,
}

/// Ordered, fixed list of selectable wallpapers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<WallpaperDescriptor>,
}

const BUILTIN: &[(u32, &str, &str)] = &[
    (1, "wallpaper1.jpg", "Sunrise"),
    (2, "wallpaper2.jpg", "G-Metallic"),
    (3, "wallpaper3.jpg", "Red blur"),
    (4, "wallpaper4.jpg", "Ventura"),
    (5, "wallpaper5.jpg", "Sequria"),
    (6, "wallpaper7.jpg", "Mountains"),
    (7, "wallpaper8.jpg", "Car"),
    (8, "wallpaper9.jpg", "Rskull"),
    (9, "wallpaper10.jpg", "Djoker"),
];

impl Catalog {
    pub fn new(entries: Vec<WallpaperDescriptor>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        let duplicates = entries
            .iter()
            .filter(|entry| !seen.insert(entry.id))
            .map(|entry| entry.id)
            .unique()
            .join(", ");

        if !duplicates.is_empty() {
            return Err(Error::new(
                ErrorKind::DuplicateWallpaper,
                &format!("ids {}", duplicates),
            ));
        }

        Ok(Catalog { entries })
    }

    /// The nine wallpapers shipped with the desktop.
    pub fn builtin() -> Self {
        Catalog {
            entries: BUILTIN
                .iter()
                .map(|&(id, src, alt)| {
                    WallpaperDescriptor::new(WallpaperId(id), src.to_owned(), alt.to_owned())
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WallpaperDescriptor> {
        self.entries.get(index)
    }

    pub fn by_id(&self, id: WallpaperId) -> Option<&WallpaperDescriptor> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WallpaperDescriptor> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a WallpaperDescriptor;
    type IntoIter = std::slice::Iter<'a, WallpaperDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
