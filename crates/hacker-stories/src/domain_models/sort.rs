//! Client-side sorting of the story list
//!
//! The sorted list is a view over the stories in arrival order and is
//! recomputed on every render.

use hn_search_client::Story;
use strum::Display;

/// Column the story list is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum SortKey {
    /// Arrival order
    #[default]
    None,
    Title,
    Author,
    Comments,
    Points,
}

impl SortKey {
    /// Sortable table columns, in display order
    pub fn columns() -> [SortKey; 4] {
        [Self::Title, Self::Author, Self::Comments, Self::Points]
    }

    fn apply<'a>(self, stories: &'a [Story]) -> Vec<&'a Story> {
        let mut sorted: Vec<&Story> = stories.iter().collect();
        match self {
            Self::None => {}
            Self::Title => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
            Self::Author => sorted.sort_by(|a, b| a.author.cmp(&b.author)),
            // Numeric columns read best-first
            Self::Comments => {
                sorted.sort_by_key(|s| s.num_comments);
                sorted.reverse();
            }
            Self::Points => {
                sorted.sort_by_key(|s| s.points);
                sorted.reverse();
            }
        }
        sorted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub is_reverse: bool,
}

impl SortState {
    /// Sort by `key`; selecting the current key again flips the direction
    pub fn select(self, key: SortKey) -> Self {
        Self {
            key,
            is_reverse: self.key == key && !self.is_reverse,
        }
    }
}

/// The stories as the list shows them
pub fn sorted_stories(stories: &[Story], sort: SortState) -> Vec<&Story> {
    let mut sorted = sort.key.apply(stories);
    if sort.is_reverse {
        sorted.reverse();
    }
    sorted
}

/// Highlight state of the column headers
///
/// At most one column is highlighted. Selecting the highlighted column
/// clears the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnToggle {
    active: Option<SortKey>,
}

impl ColumnToggle {
    pub fn toggle(self, key: SortKey) -> Self {
        let active = match (self.active, key) {
            (_, SortKey::None) => None,
            (Some(current), key) if current == key => None,
            (_, key) => Some(key),
        };
        Self { active }
    }

    pub fn is_active(&self, key: SortKey) -> bool {
        self.active == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stories() -> Vec<Story> {
        vec![
            Story::new("0", "https://a", "Beta", "carol", 5, 10),
            Story::new("1", "https://b", "Alpha", "bob", 5, 30),
            Story::new("2", "https://c", "Gamma", "alice", 9, 20),
        ]
    }

    fn ids(sorted: &[&Story]) -> Vec<String> {
        sorted.iter().map(|s| s.object_id.clone()).collect()
    }

    #[test]
    fn test_none_keeps_arrival_order() {
        let list = stories();
        assert_eq!(ids(&sorted_stories(&list, SortState::default())), vec!["0", "1", "2"]);
    }

    #[test]
    fn test_title_and_author_ascending() {
        let list = stories();
        let by_title = SortState::default().select(SortKey::Title);
        assert_eq!(ids(&sorted_stories(&list, by_title)), vec!["1", "0", "2"]);

        let by_author = SortState::default().select(SortKey::Author);
        assert_eq!(ids(&sorted_stories(&list, by_author)), vec!["2", "1", "0"]);
    }

    #[test]
    fn test_numeric_columns_descending() {
        let list = stories();
        let by_points = SortState::default().select(SortKey::Points);
        assert_eq!(ids(&sorted_stories(&list, by_points)), vec!["1", "2", "0"]);

        // Ties come out in reverse arrival order
        let by_comments = SortState::default().select(SortKey::Comments);
        assert_eq!(ids(&sorted_stories(&list, by_comments)), vec!["2", "1", "0"]);
    }

    #[test]
    fn test_selecting_same_key_reverses() {
        let list = stories();
        let once = SortState::default().select(SortKey::Title);
        let twice = once.select(SortKey::Title);
        let thrice = twice.select(SortKey::Title);

        assert!(!once.is_reverse);
        assert!(twice.is_reverse);
        assert!(!thrice.is_reverse);
        assert_eq!(ids(&sorted_stories(&list, twice)), vec!["2", "0", "1"]);
    }

    #[test]
    fn test_switching_key_resets_direction() {
        let reversed = SortState::default()
            .select(SortKey::Title)
            .select(SortKey::Title);
        let by_author = reversed.select(SortKey::Author);
        assert_eq!(
            by_author,
            SortState {
                key: SortKey::Author,
                is_reverse: false
            }
        );
    }

    #[test]
    fn test_column_toggle() {
        let toggle = ColumnToggle::default().toggle(SortKey::Title);
        assert!(toggle.is_active(SortKey::Title));
        assert!(!toggle.is_active(SortKey::Author));

        let toggle = toggle.toggle(SortKey::Author);
        assert!(!toggle.is_active(SortKey::Title));
        assert!(toggle.is_active(SortKey::Author));

        let toggle = toggle.toggle(SortKey::Author);
        assert_eq!(toggle, ColumnToggle::default());

        let toggle = toggle.toggle(SortKey::Points).toggle(SortKey::None);
        assert_eq!(toggle, ColumnToggle::default());
    }
}
