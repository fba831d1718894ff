use crate::types::BufferId;

/// What the minimap's full-range bitmap depends on. Pan/zoom is not part
/// of it: the window overlay is drawn on top of the cached bitmap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapKey {
    pub buffer: BufferId,
    pub backing_width: u32,
    pub backing_height: u32,
    pub grid_spacing_px: Option<f64>,
}

/// Single-slot cache for an expensive bitmap, rebuilt only when its key changes.
pub struct BitmapCache<K, B> {
    slot: Option<(K, B)>,
    #[cfg(test)]
    builds: u64,
}

impl<K, B> Default for BitmapCache<K, B> {
    fn default() -> Self {
        Self {
            slot: None,
            #[cfg(test)]
            builds: 0,
        }
    }
}

impl<K: PartialEq, B> BitmapCache<K, B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached bitmap for `key`, building it with `build` on a
    /// miss. A failed build leaves the cache empty.
    pub fn get_or_try_build<E>(
        &mut self,
        key: K,
        build: impl FnOnce() -> Result<B, E>,
    ) -> Result<&B, E> {
        match self.slot.take() {
            Some((cached, bitmap)) if cached == key => Ok(&self.slot.insert((cached, bitmap)).1),
            _ => {
                let bitmap = build()?;
                #[cfg(test)]
                {
                    self.builds += 1;
                }
                Ok(&self.slot.insert((key, bitmap)).1)
            }
        }
    }

    /// Drop the cached bitmap.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    #[cfg(test)]
    pub fn is_cached(&self, key: &K) -> bool {
        matches!(&self.slot, Some((cached, _)) if cached == key)
    }

    /// Number of bitmaps built so far.
    #[cfg(test)]
    pub fn builds(&self) -> u64 {
        self.builds
    }
}
