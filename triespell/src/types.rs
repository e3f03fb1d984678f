/// Occurrence count of a dictionary word. Only positive values mark known words.
pub type Frequency = i64;
