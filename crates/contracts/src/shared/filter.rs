//! Filter composition for list pages.
//!
//! A list page narrows a registry with three predicate groups combined with
//! AND: the active tab, the categorical filters, and a free-text search term.
//! Any group left at its catch-all value admits every record, so the default
//! [`ListQuery`] is the identity filter.

use crate::enums::ClosedSet;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Debug;

/// Single-record predicate. Implemented by tabs and by the per-domain
/// categorical filter structs.
pub trait Predicate<R> {
    fn admits(&self, record: &R) -> bool;
}

/// A record type that can be listed, searched and filtered.
pub trait Resource: Clone + Debug + PartialEq + 'static {
    /// Tab strip for this resource. [`NoTab`] when the page has none.
    type Tab: Predicate<Self> + Copy + PartialEq + Default + Debug + 'static;

    /// Categorical (select) filters for this resource.
    type Filters: Predicate<Self> + Clone + PartialEq + Default + Debug + 'static;

    /// Resource name used in logs and errors.
    const RESOURCE: &'static str;

    /// Stable identifier used by lookups and mutations.
    fn record_id(&self) -> Cow<'_, str>;

    /// Fields the search box looks at, OR-combined.
    fn search_fields(&self) -> Vec<&str>;
}

/// Tab that maps onto a fixed set of underlying field values.
///
/// `members() == None` is the catch-all tab.
pub trait TabBucket: Copy + PartialEq + 'static {
    type Key: PartialEq + 'static;

    fn tabs() -> &'static [Self];

    fn label(&self) -> &'static str;

    fn members(&self) -> Option<&'static [Self::Key]>;

    fn contains(&self, key: &Self::Key) -> bool {
        match self.members() {
            None => true,
            Some(set) => set.contains(key),
        }
    }
}

/// Tab type for pages without a tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoTab;

impl<R> Predicate<R> for NoTab {
    fn admits(&self, _record: &R) -> bool {
        true
    }
}

/// Value of a categorical filter: either the catch-all or one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

pub const ALL_CODE: &str = "all";

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl<T: ClosedSet> Choice<T> {
    /// Option value for a `<select>`.
    pub fn code(&self) -> &'static str {
        match self {
            Choice::All => ALL_CODE,
            Choice::Only(value) => value.code(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Choice::All => "All",
            Choice::Only(value) => value.display_name(),
        }
    }

    /// Unknown codes fall back to `All`.
    pub fn from_code(code: &str) -> Self {
        T::from_code(code).map(Choice::Only).unwrap_or(Choice::All)
    }

    /// `All` followed by every member.
    pub fn options() -> Vec<Self> {
        std::iter::once(Choice::All)
            .chain(T::all().into_iter().map(Choice::Only))
            .collect()
    }
}

/// Case-insensitive substring match over several fields. Only the empty
/// term matches everything; whitespace in the term is matched literally.
pub fn matches_search(fields: &[&str], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Active tab, categorical filters and search term of one list page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<R: Resource> {
    pub tab: R::Tab,
    pub filters: R::Filters,
    pub search: String,
}

impl<R: Resource> Default for ListQuery<R> {
    fn default() -> Self {
        Self {
            tab: R::Tab::default(),
            filters: R::Filters::default(),
            search: String::new(),
        }
    }
}

impl<R: Resource> ListQuery<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tab(mut self, tab: R::Tab) -> Self {
        self.tab = tab;
        self
    }

    pub fn with_filters(mut self, filters: R::Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn matches(&self, record: &R) -> bool {
        self.tab.admits(record)
            && self.filters.admits(record)
            && matches_search(&record.search_fields(), &self.search)
    }

    /// True when no predicate group narrows the list.
    pub fn is_identity(&self) -> bool {
        self.tab == R::Tab::default()
            && self.filters == R::Filters::default()
            && self.search.is_empty()
    }
}

/// Records matching `query`, in registry order.
pub fn filter_records<R: Resource>(records: &[R], query: &ListQuery<R>) -> Vec<R> {
    records
        .iter()
        .filter(|record| query.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::RoomType;

    #[test]
    fn test_empty_search_matches_everything() {
        assert!(matches_search(&["PS5-001"], ""));
        assert!(matches_search(&[], ""));
    }

    #[test]
    fn test_search_whitespace_is_literal() {
        assert!(!matches_search(&["PS5-001"], "   "));
        assert!(!matches_search(&["BK001"], "1 "));
        assert!(matches_search(&["John Smith"], "n s"));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        assert!(matches_search(&["John Smith"], "john"));
        assert!(matches_search(&["John Smith"], "SMITH"));
        assert!(matches_search(&["BK001", "Emma Davis"], "emma"));
        assert!(!matches_search(&["BK001", "Emma Davis"], "lisa"));
    }

    #[test]
    fn test_choice_admits() {
        let all: Choice<RoomType> = Choice::All;
        assert!(all.admits(&RoomType::Ps4));
        assert!(Choice::Only(RoomType::Vip).admits(&RoomType::Vip));
        assert!(!Choice::Only(RoomType::Vip).admits(&RoomType::Ps5));
    }

    #[test]
    fn test_choice_codes() {
        assert_eq!(Choice::<RoomType>::from_code("ps5"), Choice::Only(RoomType::Ps5));
        assert_eq!(Choice::<RoomType>::from_code("all"), Choice::All);
        assert_eq!(Choice::<RoomType>::from_code("garbage"), Choice::All);
        assert_eq!(Choice::Only(RoomType::Vip).label(), "VIP");
        assert_eq!(Choice::<RoomType>::All.code(), ALL_CODE);

        let options = Choice::<RoomType>::options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], Choice::All);
    }
}
