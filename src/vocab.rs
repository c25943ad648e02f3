/*! Bidirectional id/token tables.

A [Vocabulary] assigns contiguous ids to distinct tokens, in insertion order, starting at an `offset`.
Ids below the offset are reserved and never handed out (the character vocabulary keeps `0` for padding and `1` for unknown tokens).

Serialized as a two-element array `[id_to_token, token_to_id]`, both objects listing their entries in id order.
!*/
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary<T>
where
    T: Eq + Hash,
{
    offset: usize,
    tokens: Vec<T>,
    ids: HashMap<T, usize>,
}

impl<T> Vocabulary<T>
where
    T: Eq + Hash + Clone,
{
    /// Create an empty vocabulary whose first id will be `offset`.
    pub fn new(offset: usize) -> Self {
        Self {
            offset,
            tokens: Vec::new(),
            ids: HashMap::new(),
        }
    }

    /// Build a vocabulary from tokens. Duplicates keep the id of their first occurrence.
    pub fn from_tokens<I>(offset: usize, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut vocab = Self::new(offset);
        for token in tokens {
            vocab.insert(token);
        }
        vocab
    }

    /// Add a token, returning its id (existing or new).
    pub fn insert(&mut self, token: T) -> usize {
        if let Some(id) = self.ids.get(&token) {
            return *id;
        }
        let id = self.offset + self.tokens.len();
        self.ids.insert(token.clone(), id);
        self.tokens.push(token);
        id
    }

    pub fn id(&self, token: &T) -> Option<usize> {
        self.ids.get(token).copied()
    }

    pub fn token(&self, id: usize) -> Option<&T> {
        id.checked_sub(self.offset)
            .and_then(|idx| self.tokens.get(idx))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over `(id, token)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(move |(idx, token)| (idx + self.offset, token))
    }
}

struct IdToToken<'a, T: Eq + Hash>(&'a Vocabulary<T>);
struct TokenToId<'a, T: Eq + Hash>(&'a Vocabulary<T>);

impl<T> Serialize for IdToToken<'_, T>
where
    T: Serialize + Eq + Hash + Clone,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter())
    }
}

impl<T> Serialize for TokenToId<'_, T>
where
    T: Serialize + Eq + Hash + Clone,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(id, token)| (token, id)))
    }
}

impl<T> Serialize for Vocabulary<T>
where
    T: Serialize + Eq + Hash + Clone,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (IdToToken(self), TokenToId(self)).serialize(serializer)
    }
}
