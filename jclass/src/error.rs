//! The typed error surfaced at this crate's public API boundary.
//!
//! Internal plumbing uses [`anyhow::Result`] throughout, exactly like the rest of this crate;
//! this type exists only so that callers of [`crate::read_class`], [`crate::read_class_multi`]
//! and [`crate::write_class`] can match on *why* something failed instead of parsing a message.

/// An error produced while reading, writing, or otherwise processing a class file.
#[derive(Debug, thiserror::Error)]
pub enum ClassFileError {
	#[error("malformed class file at offset {offset}: {reason}")]
	MalformedClassFile { offset: u64, reason: String },

	#[error("unsupported class file major version {major}")]
	UnsupportedVersion { major: u16 },

	#[error("class {class_name} has too many constant pool entries ({cp_count})")]
	ClassTooLarge { class_name: String, cp_count: usize },

	#[error("method {class_name}.{method_name}{descriptor} is too large ({code_size} bytes)")]
	MethodTooLarge {
		class_name: String,
		method_name: String,
		descriptor: String,
		code_size: usize,
	},

	#[error("unsupported operation: {reason}")]
	UnsupportedOperation { reason: String },

	#[error("frame merge failed at block offset {block_offset}")]
	FrameMergeFailure { block_offset: u32 },
}
