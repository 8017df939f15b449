/// One dot of a paging indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dot {
    pub index: usize,
    pub selected: bool,
}

/// Selection and tap logic of a paging-dots indicator.
///
/// The indicator is bound to a nullable logical position; an unset position selects the first
/// dot. Positions past the end wrap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DotsIndicator {
    items_count: usize,
}

impl DotsIndicator {
    pub fn new(items_count: usize) -> Self {
        Self { items_count }
    }

    pub fn items_count(&self) -> usize {
        self.items_count
    }

    pub fn set_items_count(&mut self, items_count: usize) {
        self.items_count = items_count;
    }

    /// The selected dot for `position`, or `None` without dots.
    pub fn selected_index(&self, position: Option<usize>) -> Option<usize> {
        if self.items_count == 0 {
            return None;
        }
        Some(position.unwrap_or(0) % self.items_count)
    }

    /// `index == (position ?? 0) mod items_count`. Always `false` without dots.
    pub fn is_selected(&self, index: usize, position: Option<usize>) -> bool {
        self.selected_index(position) == Some(index)
    }

    /// Tapping dot `index` requests a jump to that logical page.
    ///
    /// Returns `None` for an index outside the indicator.
    pub fn tap(&self, index: usize) -> Option<usize> {
        if index >= self.items_count {
            cwarn!(index, items_count = self.items_count, "tap on out-of-range dot");
            return None;
        }
        Some(index)
    }

    pub fn for_each_dot(&self, position: Option<usize>, mut f: impl FnMut(Dot)) {
        let selected = self.selected_index(position);
        for index in 0..self.items_count {
            f(Dot {
                index,
                selected: selected == Some(index),
            });
        }
    }

    pub fn dots(&self, position: Option<usize>) -> impl Iterator<Item = Dot> {
        let selected = self.selected_index(position);
        (0..self.items_count).map(move |index| Dot {
            index,
            selected: selected == Some(index),
        })
    }
}
