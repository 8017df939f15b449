use alloc::sync::Arc;

use crate::AutoScrollConfig;
use crate::carousel::Carousel;

/// A callback fired after an observable state update (position, phase, count, auto-scroll).
pub type OnChangeCallback = Arc<dyn Fn(&Carousel) + Send + Sync>;

/// A callback fired when the logical page changes.
///
/// This is the outward half of an external page-index binding; the inward half is
/// [`Carousel::jump_to_page`].
pub type OnPageChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
#[derive(Clone, Default)]
pub struct CarouselOptions {
    pub auto_scroll: AutoScrollConfig,

    /// Logical page shown when the first subview count is observed.
    ///
    /// `None` starts on the first item.
    pub initial_page: Option<usize>,

    pub on_change: Option<OnChangeCallback>,
    pub on_page_change: Option<OnPageChangeCallback>,
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auto_scroll(mut self, auto_scroll: AutoScrollConfig) -> Self {
        self.auto_scroll = auto_scroll;
        self
    }

    pub fn with_auto_scroll_enabled(mut self, enabled: bool) -> Self {
        self.auto_scroll = self.auto_scroll.with_enabled(enabled);
        self
    }

    pub fn with_initial_page(mut self, initial_page: Option<usize>) -> Self {
        self.initial_page = initial_page;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_page_change(
        mut self,
        on_page_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_page_change = on_page_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("auto_scroll", &self.auto_scroll)
            .field("initial_page", &self.initial_page)
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .field("on_page_change", &self.on_page_change.as_ref().map(|_| ".."))
            .finish()
    }
}
