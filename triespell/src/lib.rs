/*! Spelling suggestions ranked by word frequency.

Candidates are generated by single-character edits (deletion, adjacent
transposition, replacement and insertion) of the input word. Replacements
and insertions are guided by a prefix trie of the dictionary so that only
characters which actually continue a known prefix are tried, instead of the
whole alphabet. If no single edit yields a known word, the edits are applied
a second time.

# Usage examples

```
use std::sync::Arc;
use triespell::dictionary::MemoryDictionary;
use triespell::speller::{Speller, TrieSpeller};

let dict: MemoryDictionary = vec![("cat", 100), ("cats", 50), ("bat", 10)]
    .into_iter()
    .collect();
let speller = TrieSpeller::new(Arc::new(dict));

assert_eq!(speller.suggest_words("cot"), vec!["cat"]);
assert!(speller.suggest("xyz").is_empty());
```

Further examples of how to use the triespell library can be found in
`triespell-bin` in the same repository.
*/

pub mod dictionary;
pub mod index;
pub mod speller;

pub(crate) mod types;

pub use crate::types::Frequency;
