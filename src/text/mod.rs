//! Text → vector conversion for short headlines.
//!
//! Headlines are tokenized, filtered against a fixed English stop-word list
//! and turned into an L2-normalized TF-IDF matrix. The vocabulary returned
//! alongside the matrix maps columns back to terms.
//!
//! ## Tokenization policy
//!
//! | Step | Rule |
//! |------|------|
//! | Case | lower-cased before matching |
//! | Token | `\b\w\w+\b` (two or more word characters) |
//! | Alphabetic filter | at least one alphabetic character (`"2024"` dropped) |
//! | Stop words | [`ENGLISH_STOP_WORDS`] removed |
//!
//! ```rust
//! use headline_cluster::text::vectorize;
//!
//! let m = vectorize(&["Markets rally", "Film festival opens"]).unwrap();
//! assert_eq!(m.weights.nrows(), 2);
//! assert_eq!(m.vocabulary.len(), 5);
//! ```

mod stopwords;
mod tokenize;
mod vectorize;

pub use stopwords::{is_stop_word, ENGLISH_STOP_WORDS};
pub use tokenize::tokenize;
pub use vectorize::{vectorize, TermMatrix, Vocabulary};
