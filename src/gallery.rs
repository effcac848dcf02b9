// SPDX-License-Identifier: MPL-2.0
//! Gallery filter and pagination controller.
//!
//! Owns the `visible` flag on every card. Filtering and the show-more
//! pagination are a single pass over the card list: `apply_filter` recomputes
//! visibility from scratch each time, so applying the same selection twice is
//! harmless.

use crate::portfolio::Card;

/// Number of cards shown under the collapsed "all" view.
pub const INITIAL_COUNT: usize = 3;

/// Active filter chip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    /// Checks whether a card matches this filter.
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(tag) => card.category.as_deref() == Some(tag.as_str()),
        }
    }
}

/// Show-more control model. `expanded` only exists while the control is
/// rendered; with three or fewer matches there is nothing to page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowMore {
    #[default]
    Hidden,
    Visible {
        expanded: bool,
    },
}

/// Filter and pagination state for one loaded portfolio.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    current_filter: Filter,
    all_expanded: bool,
    show_more: ShowMore,
    total_matched: usize,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_filter(&self) -> &Filter {
        &self.current_filter
    }

    /// True while the "all" view shows every card past the initial page.
    pub fn is_expanded(&self) -> bool {
        self.all_expanded
    }

    pub fn show_more(&self) -> ShowMore {
        self.show_more
    }

    /// Number of cards matching the current filter.
    pub fn total_matched(&self) -> usize {
        self.total_matched
    }

    /// Recomputes every card's visibility for `filter`.
    ///
    /// Under `All`, `expanded = false` limits the view to the first
    /// [`INITIAL_COUNT`] cards; a category filter shows every match. The
    /// show-more control is only rendered when `All` has more matches than
    /// the initial page, and `all_expanded` is forced off whenever the
    /// control is hidden.
    pub fn apply_filter(&mut self, cards: &mut [Card], filter: Filter, expanded: bool) {
        let mut matched_so_far = 0;

        for card in cards.iter_mut() {
            let is_match = filter.matches(card);
            if is_match {
                matched_so_far += 1;
            }
            card.visible =
                is_match && (!filter.is_all() || expanded || matched_so_far <= INITIAL_COUNT);
        }

        self.show_more = if filter.is_all() && matched_so_far > INITIAL_COUNT {
            ShowMore::Visible { expanded }
        } else {
            ShowMore::Hidden
        };
        self.all_expanded = matches!(self.show_more, ShowMore::Visible { expanded: true });
        self.total_matched = matched_so_far;
        self.current_filter = filter;
    }

    /// Applies a chip selection: `All` restores the collapsed paginated view,
    /// a category shows every match unpaginated.
    pub fn select(&mut self, cards: &mut [Card], filter: Filter) {
        let expanded = !filter.is_all();
        self.apply_filter(cards, filter, expanded);
    }

    /// Flips the "all" view between its paginated and full form.
    ///
    /// No-op under a category filter. Returns `true` when the gallery just
    /// expanded, so the caller can scroll back to the gallery top.
    pub fn toggle_expanded(&mut self, cards: &mut [Card]) -> bool {
        if !self.current_filter.is_all() {
            return false;
        }
        let expanding = !self.all_expanded;
        self.apply_filter(cards, Filter::All, expanding);
        expanding
    }
}

/// Indices of currently visible cards, in card order.
pub fn visible_indices(cards: &[Card]) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.visible)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn card(title: &str, category: Option<&str>) -> Card {
        Card {
            title: title.to_string(),
            category: category.map(str::to_string),
            image: PathBuf::from(format!("{title}.jpg")),
            visible: false,
        }
    }

    fn five_mixed_cards() -> Vec<Card> {
        vec![
            card("one", Some("street")),
            card("two", Some("street")),
            card("three", Some("portrait")),
            card("four", Some("street")),
            card("five", Some("portrait")),
        ]
    }

    fn visible_titles(cards: &[Card]) -> Vec<&str> {
        cards
            .iter()
            .filter(|card| card.visible)
            .map(|card| card.title.as_str())
            .collect()
    }

    #[test]
    fn collapsed_all_shows_first_three_cards() {
        let mut cards = five_mixed_cards();
        let mut state = State::new();

        state.apply_filter(&mut cards, Filter::All, false);

        assert_eq!(visible_titles(&cards), vec!["one", "two", "three"]);
        assert_eq!(state.show_more(), ShowMore::Visible { expanded: false });
        assert!(!state.is_expanded());
        assert_eq!(state.total_matched(), 5);
    }

    #[test]
    fn expanded_all_shows_every_card() {
        let mut cards = five_mixed_cards();
        let mut state = State::new();

        state.apply_filter(&mut cards, Filter::All, true);

        assert_eq!(
            visible_titles(&cards),
            vec!["one", "two", "three", "four", "five"]
        );
        assert_eq!(state.show_more(), ShowMore::Visible { expanded: true });
        assert!(state.is_expanded());
    }

    #[test]
    fn three_or_fewer_cards_hide_show_more() {
        let mut cards = vec![card("one", None), card("two", None), card("three", None)];
        let mut state = State::new();

        state.apply_filter(&mut cards, Filter::All, false);

        assert_eq!(visible_titles(&cards), vec!["one", "two", "three"]);
        assert_eq!(state.show_more(), ShowMore::Hidden);
    }

    #[test]
    fn hidden_show_more_forces_expanded_off() {
        let mut cards = vec![card("one", None), card("two", None)];
        let mut state = State::new();

        // Requesting the expanded view of a gallery with nothing to page
        // still lands in the collapsed state.
        state.apply_filter(&mut cards, Filter::All, true);

        assert_eq!(state.show_more(), ShowMore::Hidden);
        assert!(!state.is_expanded());
        assert_eq!(visible_titles(&cards), vec!["one", "two"]);
    }

    #[test]
    fn category_filter_shows_all_matches_unpaginated() {
        let mut cards = vec![
            card("one", Some("street")),
            card("two", Some("street")),
            card("three", Some("street")),
            card("four", Some("street")),
            card("five", Some("portrait")),
        ];
        let mut state = State::new();

        state.select(&mut cards, Filter::Category("street".to_string()));

        assert_eq!(visible_titles(&cards), vec!["one", "two", "three", "four"]);
        assert_eq!(state.show_more(), ShowMore::Hidden);
        assert!(!state.is_expanded());
        assert_eq!(state.total_matched(), 4);
    }

    #[test]
    fn category_selection_then_all_restores_pagination() {
        let mut cards = five_mixed_cards();
        let mut state = State::new();

        state.select(&mut cards, Filter::Category("portrait".to_string()));
        assert_eq!(visible_titles(&cards), vec!["three", "five"]);
        assert_eq!(state.show_more(), ShowMore::Hidden);

        state.select(&mut cards, Filter::All);
        assert_eq!(visible_titles(&cards), vec!["one", "two", "three"]);
        assert_eq!(state.show_more(), ShowMore::Visible { expanded: false });
    }

    #[test]
    fn unmatched_category_hides_everything() {
        let mut cards = five_mixed_cards();
        let mut state = State::new();

        state.select(&mut cards, Filter::Category("wildlife".to_string()));

        assert!(visible_titles(&cards).is_empty());
        assert_eq!(state.total_matched(), 0);
        assert_eq!(state.show_more(), ShowMore::Hidden);
    }

    #[test]
    fn cards_without_category_match_only_all() {
        let mut cards = vec![card("one", None), card("two", Some("street"))];
        let mut state = State::new();

        state.select(&mut cards, Filter::Category("street".to_string()));
        assert_eq!(visible_titles(&cards), vec!["two"]);

        state.select(&mut cards, Filter::All);
        assert_eq!(visible_titles(&cards), vec!["one", "two"]);
    }

    #[test]
    fn apply_filter_is_idempotent() {
        let mut cards = five_mixed_cards();
        let mut state = State::new();

        state.apply_filter(&mut cards, Filter::All, false);
        let first_pass: Vec<bool> = cards.iter().map(|card| card.visible).collect();
        let first_state = state.clone();

        state.apply_filter(&mut cards, Filter::All, false);
        let second_pass: Vec<bool> = cards.iter().map(|card| card.visible).collect();

        assert_eq!(first_pass, second_pass);
        assert_eq!(first_state, state);
    }

    #[test]
    fn toggle_expands_then_collapses() {
        let mut cards = five_mixed_cards();
        let mut state = State::new();
        state.select(&mut cards, Filter::All);

        assert!(state.toggle_expanded(&mut cards), "first toggle expands");
        assert!(state.is_expanded());
        assert_eq!(visible_titles(&cards).len(), 5);

        assert!(!state.toggle_expanded(&mut cards), "second toggle collapses");
        assert!(!state.is_expanded());
        assert_eq!(visible_titles(&cards), vec!["one", "two", "three"]);
    }

    #[test]
    fn toggle_is_noop_under_category_filter() {
        let mut cards = five_mixed_cards();
        let mut state = State::new();
        state.select(&mut cards, Filter::Category("street".to_string()));
        let before: Vec<bool> = cards.iter().map(|card| card.visible).collect();

        assert!(!state.toggle_expanded(&mut cards));

        let after: Vec<bool> = cards.iter().map(|card| card.visible).collect();
        assert_eq!(before, after);
        assert_eq!(
            state.current_filter(),
            &Filter::Category("street".to_string())
        );
    }

    #[test]
    fn visible_indices_follow_card_order() {
        let mut cards = five_mixed_cards();
        let mut state = State::new();

        state.select(&mut cards, Filter::Category("street".to_string()));

        assert_eq!(visible_indices(&cards), vec![0, 1, 3]);
    }

    #[test]
    fn visible_indices_of_collapsed_all_are_first_page() {
        let mut cards = five_mixed_cards();
        let mut state = State::new();

        state.select(&mut cards, Filter::All);

        assert_eq!(visible_indices(&cards), vec![0, 1, 2]);
    }
}
