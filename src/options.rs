//! Driver-specific device options.
//!
//! libao takes options as a linked list of key/value C strings. An
//! `OptionList` is only ever produced whole: if any pair is unusable, no list
//! exists at all.

use std::ffi::{CStr, CString};

use crate::error::{AoError, AoResult};

/// An immutable, ordered sequence of option pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    pairs: Vec<(CString, CString)>,
}

impl OptionList {
    pub fn builder() -> OptionListBuilder {
        OptionListBuilder::default()
    }

    /// Builds a list from key/value pairs, failing on the first bad pair.
    pub fn from_pairs<I, K, V>(pairs: I) -> AoResult<OptionList>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut builder = OptionList::builder();
        for (key, value) in pairs {
            builder = builder.option(key, value);
        }
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CStr, &CStr)> {
        self.pairs.iter().map(|(k, v)| (k.as_c_str(), v.as_c_str()))
    }

    /// Looks up the value of the last pair with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k.as_bytes() == key.as_bytes())
            .and_then(|(_, v)| v.to_str().ok())
    }
}

/// Accumulates option pairs, committing only if every pair was valid.
#[derive(Debug, Default)]
pub struct OptionListBuilder {
    pending: Vec<(CString, CString)>,
    error: Option<AoError>,
}

impl OptionListBuilder {
    pub fn option<K: AsRef<str>, V: AsRef<str>>(mut self, key: K, value: V) -> OptionListBuilder {
        if self.error.is_some() {
            return self;
        }
        match pair(key.as_ref(), value.as_ref()) {
            Ok(p) => self.pending.push(p),
            Err(e) => {
                self.pending.clear();
                self.error = Some(e);
            }
        }
        self
    }

    pub fn build(self) -> AoResult<OptionList> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(OptionList { pairs: self.pending }),
        }
    }
}

fn pair(key: &str, value: &str) -> AoResult<(CString, CString)> {
    let invalid = |reason| AoError::InvalidOption { key: key.to_owned(), reason };

    let k = CString::new(key).map_err(|_| invalid("key contains a NUL byte"))?;
    let v = CString::new(value).map_err(|_| invalid("value contains a NUL byte"))?;
    Ok((k, v))
}
