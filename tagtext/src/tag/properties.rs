use std::collections::BTreeMap;
use std::collections::btree_map;

/// A generic representation of tag metadata
///
/// This is a mapping from canonical, format-independent tag keys (`TITLE`,
/// `GENRE`, ...) to one or more values, distinct from any format-specific
/// frame ID. Keys are unique; each key holds its values in insertion order.
///
/// Frames that cannot be translated into this model record their identifier
/// in the unsupported list instead (see [`PropertyMap::unsupported`]), so a
/// round-trip writer can keep the original frames around rather than silently
/// dropping them.
///
/// A `PropertyMap` is always built fresh per translation call and returned by
/// value; it is never retained by a frame.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PropertyMap {
	mapping: BTreeMap<String, Vec<String>>,
	unsupported: Vec<String>,
}

impl PropertyMap {
	/// Create a new empty `PropertyMap`
	pub fn new() -> Self {
		Self::default()
	}

	/// Normalize a proposed key for use in a `PropertyMap`
	///
	/// A valid key consists of printable ASCII (0x20..=0x7E) excluding `'='`
	/// and `'~'`, and is at least one character long. The normalized key is
	/// ASCII uppercased.
	///
	/// Returns `None` if the proposed key cannot be normalized.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagtext::tag::PropertyMap;
	///
	/// assert_eq!(PropertyMap::prepare_key("Mood"), Some(String::from("MOOD")));
	/// assert_eq!(PropertyMap::prepare_key("A=B"), None);
	/// assert_eq!(PropertyMap::prepare_key(""), None);
	/// ```
	pub fn prepare_key(proposed: &str) -> Option<String> {
		if proposed.is_empty() {
			return None;
		}

		for c in proposed.chars() {
			if !(' '..='\u{7e}').contains(&c) || c == '=' || c == '~' {
				return None;
			}
		}

		Some(proposed.to_ascii_uppercase())
	}

	/// Insert values under a key, appending to any existing entry
	///
	/// NOTE: The key is used as-is, it is up to the caller to run it through
	/// [`PropertyMap::prepare_key`] first.
	pub fn insert(&mut self, key: String, values: Vec<String>) {
		self.mapping.entry(key).or_default().extend(values);
	}

	/// Get the values for a key
	pub fn get(&self, key: &str) -> Option<&[String]> {
		self.mapping.get(key).map(Vec::as_slice)
	}

	/// Whether the map contains an entry for `key`
	pub fn contains_key(&self, key: &str) -> bool {
		self.mapping.contains_key(key)
	}

	/// An iterator over the keys in the map
	pub fn keys(&self) -> btree_map::Keys<'_, String, Vec<String>> {
		self.mapping.keys()
	}

	/// An iterator over the (key, values) entries in the map
	pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
		self.mapping.iter()
	}

	/// The number of keys in the map
	///
	/// The unsupported list is not counted.
	pub fn len(&self) -> usize {
		self.mapping.len()
	}

	/// Whether the map has no value entries
	///
	/// The unsupported list may still be non-empty.
	pub fn is_empty(&self) -> bool {
		self.mapping.is_empty()
	}

	/// The identifiers of frames that could not be translated
	///
	/// Entries are raw frame IDs, or `"TXXX/<description>"` for user-defined
	/// text frames.
	pub fn unsupported(&self) -> &[String] {
		&self.unsupported
	}

	/// Record a frame identifier as untranslatable
	pub fn mark_unsupported(&mut self, id: impl Into<String>) {
		self.unsupported.push(id.into());
	}

	/// Absorb another `PropertyMap`
	///
	/// Value lists are concatenated per key, and the unsupported lists are
	/// concatenated.
	pub fn merge(&mut self, other: PropertyMap) {
		for (key, values) in other.mapping {
			self.insert(key, values);
		}
		self.unsupported.extend(other.unsupported);
	}
}

impl IntoIterator for PropertyMap {
	type Item = (String, Vec<String>);
	type IntoIter = btree_map::IntoIter<String, Vec<String>>;

	fn into_iter(self) -> Self::IntoIter {
		self.mapping.into_iter()
	}
}

impl<'a> IntoIterator for &'a PropertyMap {
	type Item = (&'a String, &'a Vec<String>);
	type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

	fn into_iter(self) -> Self::IntoIter {
		self.mapping.iter()
	}
}
