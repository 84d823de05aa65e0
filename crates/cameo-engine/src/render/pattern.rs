use std::collections::{HashMap, HashSet};

use tiny_skia::Pixmap;

use crate::image::{ImageId, rgba_to_pixmap};
use crate::paint::Paint;
use crate::scene::DrawList;

/// Premultiplied pixmaps for the images referenced by the current draw stream.
#[derive(Default)]
pub(crate) struct PatternCache {
    pixmaps: HashMap<ImageId, Pixmap>,
}

impl PatternCache {
    /// Converts images first seen in `list` and drops those no longer referenced.
    pub(crate) fn prepare(&mut self, list: &DrawList) {
        let mut live = HashSet::new();

        for cmd in list.iter() {
            let Paint::Image(img) = cmd.paint() else { continue };
            let id = img.image.id();
            live.insert(id);

            if self.pixmaps.contains_key(&id) {
                continue;
            }
            match rgba_to_pixmap(img.image.pixels()) {
                Some(pixmap) => {
                    log::debug!("pattern cache miss for {:?} ({}x{})", id, pixmap.width(), pixmap.height());
                    self.pixmaps.insert(id, pixmap);
                }
                None => log::debug!("skipping empty image {:?}", id),
            }
        }

        self.pixmaps.retain(|id, _| live.contains(id));
    }

    #[inline]
    pub(crate) fn get(&self, id: ImageId) -> Option<&Pixmap> {
        self.pixmaps.get(&id)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.pixmaps.len()
    }
}
