use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::path::Path;

use thiserror::Error;

use crate::analyzer::TextAnalyzer;
use crate::data_models::{Recipe, RecipePreview, SearchRequest};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read recipe catalog {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse recipe catalog")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate recipe id {0}")]
    DuplicateId(u64),
}

/// Anything that can answer a [`SearchRequest`] with recipe previews.
pub trait RecipeCatalogService: Send + Sync {
    /// At most `request.result_limit` previews, in catalog order. An empty
    /// list is a valid answer.
    fn load_previews(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<Vec<RecipePreview>, CatalogError>> + Send;

    fn recipe(&self, id: u64) -> impl Future<Output = Result<Option<Recipe>, CatalogError>> + Send;
}

pub fn intersect_two_postings<'a, T>(
    posting_list1: &'a [T],
    posting_list2: &'a [T],
    out: &mut Vec<T>,
) where
    T: Ord + Clone,
{
    let (mut p1i, mut p2i) = (0usize, 0usize);
    while p1i < posting_list1.len() && p2i < posting_list2.len() {
        match posting_list1[p1i].cmp(&posting_list2[p2i]) {
            std::cmp::Ordering::Equal => {
                out.push(posting_list1[p1i].clone());
                p1i += 1;
                p2i += 1;
            }
            std::cmp::Ordering::Less => p1i += 1,
            std::cmp::Ordering::Greater => p2i += 1,
        }
    }
}

/// Intersects sorted posting lists, starting from the shortest one.
pub fn intersect_postings<T>(posting_lists: &[&[T]]) -> Vec<T>
where
    T: Ord + Clone,
{
    let Some(smallest_idx) = posting_lists
        .iter()
        .enumerate()
        .min_by_key(|(_, pl)| pl.len())
        .map(|(idx, _)| idx)
    else {
        return Vec::new();
    };

    let mut result: Vec<T> = posting_lists[smallest_idx].to_vec();
    let mut scratch: Vec<T> = Vec::new();
    for (idx, pl) in posting_lists.iter().enumerate() {
        if idx == smallest_idx {
            continue;
        }
        scratch.clear();
        intersect_two_postings(&result, pl, &mut scratch);
        std::mem::swap(&mut result, &mut scratch);
        if result.is_empty() {
            break;
        }
    }

    result
}

/// A catalog held entirely in memory, with an inverted index over recipe
/// titles and ingredients.
pub struct InMemoryCatalog {
    recipes: Vec<Recipe>,
    by_id: HashMap<u64, usize>,
    // term -> ascending positions in `recipes`
    index: HashMap<String, Vec<usize>>,
    analyzer: TextAnalyzer,
}

impl InMemoryCatalog {
    pub fn new(recipes: Vec<Recipe>, analyzer: TextAnalyzer) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(recipes.len());
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();

        for (pos, recipe) in recipes.iter().enumerate() {
            if by_id.insert(recipe.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(recipe.id));
            }

            let mut recipe_terms = HashSet::new();
            let searchable = std::iter::once(&recipe.title).chain(recipe.ingredients.iter());
            for text in searchable {
                recipe_terms.extend(analyzer.terms(text));
            }
            // positions are visited in ascending order, so postings stay sorted
            for term in recipe_terms {
                index.entry(term).or_default().push(pos);
            }
        }

        log::info!(
            "Indexed {} recipes under {} distinct terms",
            recipes.len(),
            index.len()
        );

        Ok(Self {
            recipes,
            by_id,
            index,
            analyzer,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes, TextAnalyzer::english())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Positions of recipes whose indexed text contains every term of
    /// `search_text`. Text that analyzes to nothing matches everything.
    fn matching_positions(&self, search_text: &str) -> Vec<usize> {
        let terms = self.analyzer.terms(search_text);
        if terms.is_empty() {
            return (0..self.recipes.len()).collect();
        }

        let mut posting_lists: Vec<&[usize]> = Vec::with_capacity(terms.len());
        for term in &terms {
            match self.index.get(term) {
                Some(postings) => posting_lists.push(postings),
                // a term nobody has means nobody matches
                None => return Vec::new(),
            }
        }
        intersect_postings(&posting_lists)
    }

    pub fn search(&self, request: &SearchRequest) -> Vec<RecipePreview> {
        let limit = request.result_limit.get() as usize;
        self.matching_positions(&request.search_text)
            .into_iter()
            .map(|pos| &self.recipes[pos])
            .filter(|recipe| request.filters.matches(recipe))
            .take(limit)
            .map(Recipe::preview)
            .collect()
    }

    pub fn get(&self, id: u64) -> Option<&Recipe> {
        self.by_id.get(&id).map(|&pos| &self.recipes[pos])
    }
}

impl RecipeCatalogService for InMemoryCatalog {
    async fn load_previews(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<RecipePreview>, CatalogError> {
        let previews = self.search(request);
        log::debug!(
            "search {:?} with {:?} returned {} previews",
            request.search_text,
            request.filters,
            previews.len()
        );
        Ok(previews)
    }

    async fn recipe(&self, id: u64) -> Result<Option<Recipe>, CatalogError> {
        Ok(self.get(id).cloned())
    }
}
