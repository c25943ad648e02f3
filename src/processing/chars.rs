/*! Character vocabulary

Ids start at [FIRST_CHAR_ID]: [PAD_ID] and [UNK_ID] are reserved for padding and unknown characters.

The filtered view (characters seen at least `min_count` times) is always computed.
Depending on [VocabSource], ids are assigned either to every counted character (the default, which is
what existing vocabulary files were built with) or only to the filtered ones.
!*/
use std::path::Path;

use log::info;

use crate::config::{VocabOptions, VocabSource};
use crate::error::Error;
use crate::io::{write_json, WriteMode};
use crate::processing::CharCounts;
use crate::vocab::Vocabulary;

pub const PAD_ID: usize = 0;
pub const UNK_ID: usize = 1;
pub const FIRST_CHAR_ID: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharVocab {
    vocab: Vocabulary<char>,
    filtered: CharCounts,
}

impl CharVocab {
    pub fn vocab(&self) -> &Vocabulary<char> {
        &self.vocab
    }

    /// Characters whose count reached `min_count`.
    pub fn filtered(&self) -> &CharCounts {
        &self.filtered
    }
}

/// Number characters of `chars` in first-seen order.
pub fn build_char_vocab(chars: &CharCounts, options: &VocabOptions) -> CharVocab {
    let filtered = chars.filtered(options.min_count);
    let vocab = match options.source {
        VocabSource::All => Vocabulary::from_tokens(FIRST_CHAR_ID, chars.chars()),
        VocabSource::Filtered => Vocabulary::from_tokens(FIRST_CHAR_ID, filtered.chars()),
    };
    CharVocab { vocab, filtered }
}

/// Build the character vocabulary and write it to `dst` as `[id_to_char, char_to_id]`.
pub fn write_char_vocab(
    chars: &CharCounts,
    dst: &Path,
    options: &VocabOptions,
) -> Result<CharVocab, Error> {
    let char_vocab = build_char_vocab(chars, options);
    write_json(dst, char_vocab.vocab(), WriteMode::Truncate)?;
    info!(
        "{} chars written to {:?} ({} of {} with count >= {}, ids from {:?})",
        char_vocab.vocab().len(),
        dst,
        char_vocab.filtered().len(),
        chars.len(),
        options.min_count,
        options.source
    );
    Ok(char_vocab)
}
