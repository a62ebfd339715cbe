use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// A dietary filter. Declaration order is the canonical order used when
/// facets are written back into a query string.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    DairyFree,
    GlutenFree,
    Vegetarian,
    Vegan,
}

impl Facet {
    pub const ALL: [Facet; 4] = [
        Facet::DairyFree,
        Facet::GlutenFree,
        Facet::Vegetarian,
        Facet::Vegan,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Facet::DairyFree => "dairyFree",
            Facet::GlutenFree => "glutenFree",
            Facet::Vegetarian => "vegetarian",
            Facet::Vegan => "vegan",
        }
    }

    /// Tokens are matched exactly; anything else is not a facet.
    pub fn from_token(token: &str) -> Option<Facet> {
        Facet::ALL.into_iter().find(|facet| facet.token() == token)
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.enabled().next().is_none()
    }

    pub fn contains(&self, facet: Facet) -> bool {
        match facet {
            Facet::DairyFree => self.dairy_free,
            Facet::GlutenFree => self.gluten_free,
            Facet::Vegetarian => self.vegetarian,
            Facet::Vegan => self.vegan,
        }
    }

    pub fn set(&mut self, facet: Facet, on: bool) {
        let slot = match facet {
            Facet::DairyFree => &mut self.dairy_free,
            Facet::GlutenFree => &mut self.gluten_free,
            Facet::Vegetarian => &mut self.vegetarian,
            Facet::Vegan => &mut self.vegan,
        };
        *slot = on;
    }

    pub fn with(mut self, facet: Facet) -> Self {
        self.set(facet, true);
        self
    }

    pub fn toggle(&mut self, facet: Facet) {
        self.set(facet, !self.contains(facet));
    }

    /// Enabled facets in canonical order.
    pub fn enabled(&self) -> impl Iterator<Item = Facet> + '_ {
        Facet::ALL.into_iter().filter(|facet| self.contains(*facet))
    }

    /// A recipe passes when it satisfies every enabled facet.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.enabled().all(|facet| recipe.satisfies(facet))
    }
}

impl FromIterator<Facet> for SearchFilters {
    fn from_iter<I: IntoIterator<Item = Facet>>(iter: I) -> Self {
        iter.into_iter()
            .fold(SearchFilters::default(), |filters, facet| filters.with(facet))
    }
}

/// What the user is currently looking for. Never mutated in place: every
/// user action derives a fresh request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_text: String,
    pub result_limit: NonZeroU32,
    pub filters: SearchFilters,
}

impl SearchRequest {
    pub fn new(
        search_text: impl Into<String>,
        result_limit: NonZeroU32,
        filters: SearchFilters,
    ) -> Self {
        Self {
            search_text: search_text.into(),
            result_limit,
            filters,
        }
    }

    /// No text, no filters, first page.
    pub fn initial(result_limit: NonZeroU32) -> Self {
        Self::new(String::new(), result_limit, SearchFilters::default())
    }

    pub fn show_more(&self, delta: NonZeroU32) -> Self {
        Self {
            result_limit: self.result_limit.saturating_add(delta.get()),
            ..self.clone()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecipePreview {
    pub id: u64,
    pub title: String,
    pub image: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub dairy_free: bool,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Recipe {
    pub fn satisfies(&self, facet: Facet) -> bool {
        match facet {
            Facet::DairyFree => self.dairy_free,
            Facet::GlutenFree => self.gluten_free,
            Facet::Vegetarian => self.vegetarian,
            Facet::Vegan => self.vegan,
        }
    }

    pub fn preview(&self) -> RecipePreview {
        RecipePreview {
            id: self.id,
            title: self.title.clone(),
            image: self.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_tokens() {
        for facet in Facet::ALL {
            assert_eq!(Facet::from_token(facet.token()), Some(facet));
        }
        assert_eq!(Facet::from_token("Vegan"), None);
        assert_eq!(Facet::from_token(""), None);
    }

    #[test]
    fn test_enabled_is_canonical() {
        let filters: SearchFilters = [Facet::Vegan, Facet::DairyFree, Facet::Vegetarian]
            .into_iter()
            .collect();
        let enabled: Vec<Facet> = filters.enabled().collect();
        assert_eq!(enabled, vec![Facet::DairyFree, Facet::Vegetarian, Facet::Vegan]);
    }

    #[test]
    fn test_toggle() {
        let mut filters = SearchFilters::default();
        filters.toggle(Facet::GlutenFree);
        assert!(filters.gluten_free);
        assert!(!filters.is_empty());
        filters.toggle(Facet::GlutenFree);
        assert!(filters.is_empty());
    }

    #[test]
    fn test_show_more_saturates() {
        let request = SearchRequest::initial(NonZeroU32::MAX);
        let next = request.show_more(NonZeroU32::new(5).unwrap());
        assert_eq!(next.result_limit, NonZeroU32::MAX);
    }
}
