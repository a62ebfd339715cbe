use porter_stemmer::stem;
use std::collections::HashSet;
use std::sync::OnceLock;

static STOP_WORDS: OnceLock<HashSet<String>> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<String> {
    STOP_WORDS.get_or_init(|| {
        stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .map(|x| x.to_string())
            .collect()
    })
}

/// A tokenizer receives a string and breaks it up into individual tokens (usually individual words).
/// A whitespace tokenizer converts "Creamy tomato soup!" into [Creamy, tomato, soup!].
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

pub struct WhiteSpaceTokenizer;

impl Tokenizer for WhiteSpaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|w| w.to_string())
            .collect::<Vec<String>>()
    }
}

/// A token filter receives the token stream and may add, remove, or change tokens.
/// Recipe titles and search text go through the same filters, so both sides
/// of a match agree on spelling.
pub trait TokenFilter: Send + Sync {
    fn filter(&self, tokens: Vec<TextToken>) -> Vec<TextToken>;
}

pub struct LowerCaseTokenFilter;

impl TokenFilter for LowerCaseTokenFilter {
    fn filter(&self, tokens: Vec<TextToken>) -> Vec<TextToken> {
        tokens
            .into_iter()
            .map(|mut t| {
                t.term = t.term.to_lowercase();
                t
            })
            .collect()
    }
}

pub struct StopWordTokenFilter;

impl TokenFilter for StopWordTokenFilter {
    fn filter(&self, mut tokens: Vec<TextToken>) -> Vec<TextToken> {
        let stop_words = get_stop_words();
        tokens.retain(|w| !stop_words.contains(&w.term));
        tokens
    }
}

pub struct PorterStemmerTokenFilter;

impl TokenFilter for PorterStemmerTokenFilter {
    fn filter(&self, tokens: Vec<TextToken>) -> Vec<TextToken> {
        tokens
            .into_iter()
            .map(|mut w| {
                // the stemmer only understands ASCII English
                if w.term.is_ascii() {
                    w.term = stem(&w.term);
                }
                w
            })
            .collect::<Vec<TextToken>>()
    }
}

/// Strips leading and trailing punctuation and drops tokens that end up too short.
pub struct PunctuationStripFilter {
    min_length: usize,
}

impl PunctuationStripFilter {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Default for PunctuationStripFilter {
    fn default() -> Self {
        Self { min_length: 2 }
    }
}

impl TokenFilter for PunctuationStripFilter {
    fn filter(&self, tokens: Vec<TextToken>) -> Vec<TextToken> {
        tokens
            .into_iter()
            .filter_map(|mut token| {
                let trimmed = token.term.trim_matches(|c: char| !c.is_alphanumeric());
                if trimmed.chars().count() >= self.min_length {
                    token.term = trimmed.to_string();
                    Some(token)
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Drops tokens without a single letter, like "350" or "1.5".
pub struct NumericTokenFilter;

impl TokenFilter for NumericTokenFilter {
    fn filter(&self, tokens: Vec<TextToken>) -> Vec<TextToken> {
        tokens
            .into_iter()
            .filter(|token| token.term.chars().any(|c| c.is_alphabetic()))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextToken {
    pub term: String,
}

/// Pure text analysis pipeline: tokenizer followed by token filters.
pub struct TextAnalyzer {
    tokenizer: Box<dyn Tokenizer>,
    token_filters: Vec<Box<dyn TokenFilter>>,
}

impl TextAnalyzer {
    pub fn new(tokenizer: Box<dyn Tokenizer>, token_filters: Vec<Box<dyn TokenFilter>>) -> Self {
        Self {
            tokenizer,
            token_filters,
        }
    }

    /// The pipeline used for recipe titles, ingredients and search text.
    pub fn english() -> Self {
        Self::new(
            Box::new(WhiteSpaceTokenizer),
            vec![
                Box::new(PunctuationStripFilter::default()),
                Box::new(LowerCaseTokenFilter),
                Box::new(NumericTokenFilter),
                Box::new(StopWordTokenFilter),
                Box::new(PorterStemmerTokenFilter),
            ],
        )
    }

    pub fn tokenize(&self, content: &str) -> Vec<TextToken> {
        self.tokenizer
            .tokenize(content)
            .into_iter()
            .map(|term| TextToken { term })
            .collect()
    }

    pub fn token_filter(&self, mut tokens: Vec<TextToken>) -> Vec<TextToken> {
        for filter in self.token_filters.iter() {
            tokens = filter.filter(tokens);
        }
        tokens
    }

    pub fn analyze(&self, content: &str) -> Vec<TextToken> {
        let tokens = self.tokenize(content);
        self.token_filter(tokens)
    }

    /// Distinct analyzed terms, in first-seen order.
    pub fn terms(&self, content: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.analyze(content)
            .into_iter()
            .map(|t| t.term)
            .filter(|term| seen.insert(term.clone()))
            .collect()
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::english()
    }
}
