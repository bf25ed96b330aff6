// src/listing/drafts.rs
use parking_lot::Mutex;
use std::collections::HashMap;

use crate::listing::previews::PreviewRegistry;
use crate::storage::ImageFile;

/// Images chosen in the add-listing form. `files[i]` is shown through
/// `previews[i]`; the two lists never drift apart.
#[derive(Debug, Default)]
pub struct ImageSelection {
    files: Vec<ImageFile>,
    previews: Vec<String>,
}

impl ImageSelection {
    pub fn add(&mut self, registry: &PreviewRegistry, file: ImageFile) -> String {
        let url = registry.create(&file.content_type, file.bytes.clone());
        self.files.push(file);
        self.previews.push(url.clone());
        url
    }

    /// Adds files until the selection holds `cap` images. Returns how many
    /// did not fit.
    pub fn add_up_to(
        &mut self,
        registry: &PreviewRegistry,
        files: impl IntoIterator<Item = ImageFile>,
        cap: usize,
    ) -> usize {
        let mut rejected = 0;
        for file in files {
            if self.len() >= cap {
                rejected += 1;
            } else {
                self.add(registry, file);
            }
        }
        rejected
    }

    /// Drops the file at `index` and revokes exactly its preview URL.
    pub fn remove(&mut self, registry: &PreviewRegistry, index: usize) -> Option<ImageFile> {
        if index >= self.files.len() {
            return None;
        }
        let url = self.previews.remove(index);
        registry.revoke(&url);
        Some(self.files.remove(index))
    }

    pub fn clear(&mut self, registry: &PreviewRegistry) {
        for url in self.previews.drain(..) {
            registry.revoke(&url);
        }
        self.files.clear();
    }

    pub fn files(&self) -> &[ImageFile] {
        &self.files
    }

    pub fn previews(&self) -> &[String] {
        &self.previews
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[derive(Debug)]
struct Draft {
    selection: ImageSelection,
    /// Latest expiry of the owner's sessions that touched this draft.
    expires_at: i64,
}

/// One in-progress image selection per signed-in user. A draft lives no
/// longer than the session that last used it.
#[derive(Default)]
pub struct DraftStore {
    drafts: Mutex<HashMap<String, Draft>>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` on the user's selection, creating it if needed, and extend
    /// the draft's lifetime to `expires_at`.
    pub fn with_selection<T>(
        &self,
        user_id: &str,
        expires_at: i64,
        f: impl FnOnce(&mut ImageSelection) -> T,
    ) -> T {
        let mut drafts = self.drafts.lock();
        let draft = drafts.entry(user_id.to_string()).or_insert_with(|| Draft {
            selection: ImageSelection::default(),
            expires_at,
        });
        draft.expires_at = draft.expires_at.max(expires_at);
        f(&mut draft.selection)
    }

    /// Preview URLs of the user's selection, without creating a draft.
    pub fn previews(&self, user_id: &str) -> Vec<String> {
        self.drafts
            .lock()
            .get(user_id)
            .map(|d| d.selection.previews().to_vec())
            .unwrap_or_default()
    }

    /// Remove the user's selection so it can be used without holding the
    /// lock. Hand it back with [`DraftStore::put_back`] if it is still needed.
    ///
    /// Until then the user has no draft: a concurrent submit sees an empty
    /// selection, and images added meanwhile start a new one.
    pub fn take(&self, user_id: &str) -> ImageSelection {
        self.drafts
            .lock()
            .remove(user_id)
            .map(|d| d.selection)
            .unwrap_or_default()
    }

    /// Reinstate a taken selection. Images added in the meantime go after it.
    /// An empty result leaves no draft behind.
    pub fn put_back(&self, user_id: &str, expires_at: i64, mut selection: ImageSelection) {
        let mut drafts = self.drafts.lock();
        let mut expires_at = expires_at;
        if let Some(newer) = drafts.remove(user_id) {
            selection.files.extend(newer.selection.files);
            selection.previews.extend(newer.selection.previews);
            expires_at = expires_at.max(newer.expires_at);
        }
        if selection.is_empty() {
            return;
        }
        drafts.insert(
            user_id.to_string(),
            Draft {
                selection,
                expires_at,
            },
        );
    }

    /// Forget the user's draft and release its previews.
    pub fn discard(&self, user_id: &str, registry: &PreviewRegistry) {
        if let Some(mut draft) = self.drafts.lock().remove(user_id) {
            draft.selection.clear(registry);
        }
    }

    /// Drop every draft whose session has expired by `now`, releasing its
    /// previews. Returns how many were dropped.
    pub fn sweep_expired(&self, registry: &PreviewRegistry, now: i64) -> usize {
        let mut drafts = self.drafts.lock();
        let before = drafts.len();
        drafts.retain(|_, draft| {
            if draft.expires_at > now {
                return true;
            }
            draft.selection.clear(registry);
            false
        });
        before - drafts.len()
    }
}
