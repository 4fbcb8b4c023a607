//! Mappings between frame IDs and canonical property keys

/// The allowed `TIPL` roles and the property keys they map to
pub(crate) const TIPL_MAPPINGS: &[(&str, &str)] = &[
	("ARRANGER", "ARRANGER"),
	("ENGINEER", "ENGINEER"),
	("PRODUCER", "PRODUCER"),
	("DJ-MIX", "DJMIXER"),
	("MIX", "MIXER"),
];

static TAG_NAME_MAPPINGS: &[(&str, &str)] = &[
	("TALB", "ALBUM"),
	("TBPM", "BPM"),
	("TCOM", "COMPOSER"),
	("TCON", "GENRE"),
	("TCOP", "COPYRIGHT"),
	("TDEN", "ENCODINGTIME"),
	("TDLY", "PLAYLISTDELAY"),
	("TDOR", "ORIGINALDATE"),
	("TDRC", "DATE"),
	("TDRL", "RELEASEDATE"),
	("TDTG", "TAGGINGDATE"),
	("TENC", "ENCODEDBY"),
	("TEXT", "LYRICIST"),
	("TFLT", "FILETYPE"),
	("TIT1", "CONTENTGROUP"),
	("TIT2", "TITLE"),
	("TIT3", "SUBTITLE"),
	("TKEY", "INITIALKEY"),
	("TLAN", "LANGUAGE"),
	("TLEN", "LENGTH"),
	("TMED", "MEDIA"),
	("TMOO", "MOOD"),
	("TOAL", "ORIGINALALBUM"),
	("TOFN", "ORIGINALFILENAME"),
	("TOLY", "ORIGINALLYRICIST"),
	("TOPE", "ORIGINALARTIST"),
	("TOWN", "OWNER"),
	("TPE1", "ARTIST"),
	("TPE2", "ALBUMARTIST"),
	("TPE3", "CONDUCTOR"),
	("TPE4", "REMIXER"),
	("TPOS", "DISCNUMBER"),
	("TPRO", "PRODUCEDNOTICE"),
	("TPUB", "LABEL"),
	("TRCK", "TRACKNUMBER"),
	("TRSN", "RADIOSTATION"),
	("TRSO", "RADIOSTATIONOWNER"),
	("TSOA", "ALBUMSORT"),
	("TSOP", "ARTISTSORT"),
	("TSOT", "TITLESORT"),
	("TSRC", "ISRC"),
	("TSSE", "ENCODING"),
	("TSST", "DISCSUBTITLE"),
];

/// The canonical property key for a text frame ID, if one exists
pub(crate) fn tag_name_for_id(id: &str) -> Option<&'static str> {
	TAG_NAME_MAPPINGS
		.iter()
		.find(|(frame_id, _)| *frame_id == id)
		.map(|(_, tag_name)| *tag_name)
}
