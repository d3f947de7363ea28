//! Post model shared by the scroll collector and the analysis pipeline.

use std::collections::HashSet;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Serialize, Serializer};

use crate::CoreError;

/// Characters left unescaped when a handle is substituted into a URL path.
const HANDLE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'_').remove(b'-').remove(b'.');

/// One unit of scraped text. Identity is exact text equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Post(String);

impl Post {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Post {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, duplicate-free, size-bounded sequence of posts.
///
/// Posts keep the order in which they were first discovered. Inserting a
/// text that is already present, or inserting once `max_len` is reached,
/// leaves the collection unchanged.
#[derive(Debug, Clone)]
pub struct PostCollection {
    posts: Vec<Post>,
    seen: HashSet<String>,
    max_len: usize,
}

impl PostCollection {
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self {
            posts: Vec::new(),
            seen: HashSet::new(),
            max_len,
        }
    }

    /// Builds a collection from `texts`, dropping duplicates and anything past `max_len`.
    pub fn from_texts<I, S>(texts: I, max_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collection = Self::new(max_len);
        for text in texts {
            if collection.is_full() {
                break;
            }
            collection.insert(text);
        }
        collection
    }

    /// Appends `text` if it is new and there is room. Returns `true` when added.
    pub fn insert(&mut self, text: impl Into<String>) -> bool {
        if self.is_full() {
            return false;
        }
        let text = text.into();
        if self.seen.contains(&text) {
            return false;
        }
        self.seen.insert(text.clone());
        self.posts.push(Post(text));
        true
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.seen.contains(text)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.posts.len() >= self.max_len
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Post> {
        self.posts
    }
}

impl<'a> IntoIterator for &'a PostCollection {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

impl Serialize for PostCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.posts.serialize(serializer)
    }
}

/// A validated profile handle, e.g. `nasa` for `@nasa`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceHandle(String);

impl SourceHandle {
    /// Validates user input as a handle.
    ///
    /// Surrounding whitespace and a single leading `@` are removed.
    ///
    /// # Errors
    ///
    /// - [`CoreError::EmptyInput`] if nothing remains after trimming.
    /// - [`CoreError::InvalidHandle`] if the handle contains whitespace or `/`.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        let handle = trimmed.strip_prefix('@').unwrap_or(trimmed);
        if handle.is_empty() {
            return Err(CoreError::EmptyInput);
        }
        if handle.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(CoreError::InvalidHandle {
                handle: handle.to_string(),
                reason: "handles cannot contain whitespace or '/'".to_string(),
            });
        }
        Ok(Self(handle.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitutes the percent-encoded handle into every `{handle}` in `template`.
    #[must_use]
    pub fn target_url(&self, template: &str) -> String {
        let encoded = utf8_percent_encode(&self.0, HANDLE_ENCODE_SET).to_string();
        template.replace("{handle}", &encoded)
    }
}

impl std::fmt::Display for SourceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
