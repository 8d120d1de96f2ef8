use crate::sentinel::{
    COMMENT_KEY_SUFFIX, SPREAD_KEY_PREFIX, VARIABLE_KEY_SUFFIX,
};

/// Key of one object entry.
///
/// Everything that distinguishes an entry's syntactic form on the key side is
/// carried here, so the serializer never has to re-parse marker text out of
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectKey {
    /// Plain property name, written bare or quoted in the source.
    Ident(String),
    /// Computed key `[path]`; holds the identifier path verbatim.
    Computed(String),
    /// Spread element `...path`. The ordinal is 1-based, scoped to the
    /// enclosing object, and counts spread elements only, in source order.
    Spread { ordinal: u32, path: String },
    /// Synthetic entry for a comment that precedes the entry keyed `anchor`.
    Comment { anchor: String },
}

impl ObjectKey {
    /// The key string used in the encoded JSON form.
    pub fn encoded(&self) -> String {
        match self {
            ObjectKey::Ident(name) => name.clone(),
            ObjectKey::Computed(path) => format!("{path}{VARIABLE_KEY_SUFFIX}"),
            ObjectKey::Spread { ordinal, path } => {
                format!("{SPREAD_KEY_PREFIX}{ordinal}{path}")
            }
            ObjectKey::Comment { anchor } => format!("{anchor}{COMMENT_KEY_SUFFIX}"),
        }
    }

    /// Decode an encoded JSON object key. Keys carrying no recognizable
    /// marker decode as [`ObjectKey::Ident`].
    pub fn decode(raw: &str) -> ObjectKey {
        if let Some(anchor) = raw.strip_suffix(COMMENT_KEY_SUFFIX) {
            return ObjectKey::Comment {
                anchor: anchor.to_string(),
            };
        }
        if let Some(path) = raw.strip_suffix(VARIABLE_KEY_SUFFIX) {
            return ObjectKey::Computed(path.to_string());
        }
        if let Some(rest) = raw.strip_prefix(SPREAD_KEY_PREFIX) {
            let digits = rest.chars().take_while(char::is_ascii_digit).count();
            if digits > 0
                && let Ok(ordinal) = rest[..digits].parse::<u32>()
                && !rest[digits..].is_empty()
            {
                return ObjectKey::Spread {
                    ordinal,
                    path: rest[digits..].to_string(),
                };
            }
        }
        ObjectKey::Ident(raw.to_string())
    }

    /// The string the default sort policy compares entries by.
    ///
    /// Spread keys sort by their encoded form: the `!!!` prefix places them
    /// ahead of alphabetic keys and the ordinal keeps their original
    /// relative order. Comment keys sort by their anchor so a stable sort
    /// keeps them immediately before the entry they precede.
    pub fn sort_key(&self) -> String {
        match self {
            ObjectKey::Ident(name) => name.clone(),
            ObjectKey::Computed(path) => path.clone(),
            ObjectKey::Spread { .. } => self.encoded(),
            ObjectKey::Comment { anchor } => anchor.clone(),
        }
    }
}
