use twilight_model::channel::message::{
    component::{ActionRow, Button, ButtonStyle},
    Component,
};

pub use self::session::SightingsPagination;

mod session;

/// Navigation requested through a pagination button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PageAction {
    First,
    Previous,
    Next,
    Last,
}

impl PageAction {
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            "sightings_first" => Some(Self::First),
            "sightings_prev" => Some(Self::Previous),
            "sightings_next" => Some(Self::Next),
            "sightings_last" => Some(Self::Last),
            _ => None,
        }
    }

    pub fn custom_id(self) -> &'static str {
        match self {
            Self::First => "sightings_first",
            Self::Previous => "sightings_prev",
            Self::Next => "sightings_next",
            Self::Last => "sightings_last",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::First => "⏮️ Eerste",
            Self::Previous => "◀️ Vorige",
            Self::Next => "Volgende ▶️",
            Self::Last => "Laatste ⏭️",
        }
    }

    fn style(self) -> ButtonStyle {
        match self {
            Self::First | Self::Last => ButtonStyle::Secondary,
            Self::Previous | Self::Next => ButtonStyle::Primary,
        }
    }
}

/// Page position within a fixed amount of entries.
///
/// The amount of pages is determined on creation and never recomputed, even
/// if entries are added in the meantime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pages {
    index: usize,
    last_index: usize,
    per_page: usize,
}

impl Pages {
    /// `per_page`: How many entries per page
    ///
    /// `amount`: How many entries in total
    pub fn new(per_page: usize, amount: u64) -> Self {
        let per_page = per_page.max(1);
        let total_pages = (amount as usize).div_ceil(per_page).max(1);

        Self {
            index: 0,
            last_index: total_pages - 1,
            per_page,
        }
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Amount of entries before the current page
    pub fn offset(&self) -> usize {
        self.index * self.per_page
    }

    /// One-based current page
    pub fn curr_page(&self) -> usize {
        self.index + 1
    }

    pub fn last_page(&self) -> usize {
        self.last_index + 1
    }

    pub fn update(&mut self, action: PageAction) {
        self.index = match action {
            PageAction::First => 0,
            PageAction::Previous => self.index.saturating_sub(1),
            PageAction::Next => self.last_index.min(self.index + 1),
            PageAction::Last => self.last_index,
        };
    }

    /// Navigation buttons with the ones leading nowhere disabled.
    pub fn components(&self) -> Vec<Component> {
        let at_start = self.index == 0;
        let at_end = self.index == self.last_index;

        Self::button_row(|action| match action {
            PageAction::First | PageAction::Previous => at_start,
            PageAction::Next | PageAction::Last => at_end,
        })
    }

    /// Navigation buttons that can no longer be used.
    pub fn disabled_components() -> Vec<Component> {
        Self::button_row(|_| true)
    }

    fn button_row(disabled: impl Fn(PageAction) -> bool) -> Vec<Component> {
        let components = [
            PageAction::First,
            PageAction::Previous,
            PageAction::Next,
            PageAction::Last,
        ]
        .into_iter()
        .map(|action| {
            Component::Button(Button {
                custom_id: Some(action.custom_id().to_owned()),
                disabled: disabled(action),
                emoji: None,
                label: Some(action.label().to_owned()),
                style: action.style(),
                url: None,
            })
        })
        .collect();

        vec![Component::ActionRow(ActionRow { components })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disabled_ids(components: &[Component]) -> Vec<&str> {
        let Some(Component::ActionRow(row)) = components.first() else {
            panic!("expected action row");
        };

        row.components
            .iter()
            .filter_map(|component| match component {
                Component::Button(button) if button.disabled => button.custom_id.as_deref(),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn page_count() {
        assert_eq!(Pages::new(5, 12).last_page(), 3);
        assert_eq!(Pages::new(5, 10).last_page(), 2);
        assert_eq!(Pages::new(5, 1).last_page(), 1);
        assert_eq!(Pages::new(5, 0).last_page(), 1);
    }

    #[test]
    fn transitions() {
        let mut pages = Pages::new(5, 12);

        pages.update(PageAction::Next);
        assert_eq!(pages.curr_page(), 2);
        assert_eq!(pages.offset(), 5);

        pages.update(PageAction::Last);
        assert_eq!(pages.curr_page(), 3);
        assert_eq!(pages.offset(), 10);

        pages.update(PageAction::Previous);
        assert_eq!(pages.curr_page(), 2);

        pages.update(PageAction::First);
        assert_eq!(pages.curr_page(), 1);
    }

    #[test]
    fn transitions_at_edges_are_idempotent() {
        let mut pages = Pages::new(5, 12);

        pages.update(PageAction::Previous);
        assert_eq!(pages.curr_page(), 1);
        pages.update(PageAction::First);
        assert_eq!(pages.curr_page(), 1);

        pages.update(PageAction::Last);
        pages.update(PageAction::Next);
        assert_eq!(pages.curr_page(), 3);
        pages.update(PageAction::Last);
        assert_eq!(pages.curr_page(), 3);
    }

    #[test]
    fn edge_buttons_disabled() {
        let mut pages = Pages::new(5, 12);
        assert_eq!(
            disabled_ids(&pages.components()),
            ["sightings_first", "sightings_prev"]
        );

        pages.update(PageAction::Next);
        assert!(disabled_ids(&pages.components()).is_empty());

        pages.update(PageAction::Last);
        assert_eq!(
            disabled_ids(&pages.components()),
            ["sightings_next", "sightings_last"]
        );
    }

    #[test]
    fn single_page_disables_everything() {
        let pages = Pages::new(5, 3);

        assert_eq!(disabled_ids(&pages.components()).len(), 4);
        assert_eq!(disabled_ids(&Pages::disabled_components()).len(), 4);
    }

    #[test]
    fn custom_ids() {
        for action in [
            PageAction::First,
            PageAction::Previous,
            PageAction::Next,
            PageAction::Last,
        ] {
            assert_eq!(PageAction::from_custom_id(action.custom_id()), Some(action));
        }

        assert_eq!(PageAction::from_custom_id("pagination_start"), None);
    }
}
