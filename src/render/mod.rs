//! Sanitized rendering of the current component
//!
//! `Preview` owns the one mounted component together with the style slot.
//! Both live behind a single lock so a reader always sees a matching
//! markup/stylesheet pair.

pub mod html_renderers;
pub mod sanitize;
pub mod style;

use log::{debug, info};
use std::sync::{Arc, RwLock};

use crate::component::GeneratedComponent;

pub use sanitize::sanitize_markup;
pub use style::{StyleSlot, STYLE_SLOT_ID};

/// A component ready for display: the raw source plus its sanitized markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedPreview {
    pub component: GeneratedComponent,
    pub safe_markup: String,
}

impl MountedPreview {
    /// Sanitizes once, up front. Nothing else produces `safe_markup`.
    pub fn new(component: GeneratedComponent) -> Self {
        let safe_markup = sanitize_markup(&component.markup);
        Self {
            component,
            safe_markup,
        }
    }

    pub fn empty() -> Self {
        Self::new(GeneratedComponent::empty())
    }

    pub fn is_empty(&self) -> bool {
        self.component.is_blank()
    }
}

/// Consistent view handed to the page renderer.
#[derive(Debug, Clone)]
pub struct PreviewSnapshot {
    pub mounted: Arc<MountedPreview>,
    pub style: StyleSlot,
}

#[derive(Debug)]
struct PreviewState {
    mounted: Arc<MountedPreview>,
    style: StyleSlot,
}

#[derive(Debug)]
pub struct Preview {
    state: RwLock<PreviewState>,
}

impl Default for Preview {
    fn default() -> Self {
        Self::new()
    }
}

impl Preview {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(PreviewState {
                mounted: Arc::new(MountedPreview::empty()),
                style: StyleSlot::new(),
            }),
        }
    }

    /// Replaces the displayed component. The new value is fully built
    /// before the lock is taken.
    pub fn mount(&self, component: GeneratedComponent) -> Arc<MountedPreview> {
        let mounted = Arc::new(MountedPreview::new(component));

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if mounted.is_empty() {
            state.style.release();
        } else {
            state.style.acquire(&mounted.component.stylesheet);
        }
        state.mounted = Arc::clone(&mounted);
        drop(state);

        info!(
            "Mounted component '{}' ({} bytes markup, {} bytes css)",
            mounted.component.name,
            mounted.safe_markup.len(),
            mounted.component.stylesheet.len()
        );
        mounted
    }

    /// Tears the preview down to the empty state and releases the style slot.
    pub fn unmount(&self) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.style.release();
        state.mounted = Arc::new(MountedPreview::empty());
        debug!("Preview unmounted, style slot released");
    }

    pub fn current(&self) -> Arc<MountedPreview> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&state.mounted)
    }

    pub fn snapshot(&self) -> PreviewSnapshot {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        PreviewSnapshot {
            mounted: Arc::clone(&state.mounted),
            style: state.style.clone(),
        }
    }
}
