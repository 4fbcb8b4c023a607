//! Translation of paired (role, names) field lists
//!
//! `TIPL` and `TMCL` store their fields as alternating role and name entries,
//! where a name entry may hold several comma-separated names.

use crate::id3::v2::FrameId;
use crate::id3::v2::util::mappings::TIPL_MAPPINGS;
use crate::tag::PropertyMap;

/// Translate a `TIPL` field list into properties
///
/// Roles come from a closed vocabulary (see [`TIPL_MAPPINGS`]). Translation
/// is all-or-nothing: an odd field count or an unknown role records the frame
/// ID as unsupported and returns no value entries.
pub(crate) fn involved_people_properties(id: &FrameId<'_>, fields: &[String]) -> PropertyMap {
	paired_properties(id, fields, |role| {
		TIPL_MAPPINGS
			.iter()
			.find(|(tipl_role, _)| *tipl_role == role)
			.map(|(_, key)| (*key).to_string())
	})
}

/// Translate a `TMCL` field list into properties
///
/// Unlike `TIPL`, any instrument name that normalizes to a valid property key
/// is accepted as a role. Translation is all-or-nothing, as with
/// [`involved_people_properties`].
pub(crate) fn musician_credits_properties(id: &FrameId<'_>, fields: &[String]) -> PropertyMap {
	paired_properties(id, fields, |role| PropertyMap::prepare_key(role))
}

fn paired_properties(
	id: &FrameId<'_>,
	fields: &[String],
	mut role_key: impl FnMut(&str) -> Option<String>,
) -> PropertyMap {
	let mut properties = PropertyMap::new();

	// The ID3 spec requires an even number of entries
	if fields.len() % 2 != 0 {
		properties.mark_unsupported(id.as_str());
		return properties;
	}

	for pair in fields.chunks_exact(2) {
		let (role, names) = (&pair[0], &pair[1]);

		let Some(key) = role_key(role) else {
			// One bad role discards the whole frame, consistent with writing
			return unsupported_only(id);
		};

		properties.insert(key, names.split(',').map(str::to_string).collect());
	}

	properties
}

fn unsupported_only(id: &FrameId<'_>) -> PropertyMap {
	let mut properties = PropertyMap::new();
	properties.mark_unsupported(id.as_str());
	properties
}
