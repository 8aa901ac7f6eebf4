//! Reader/writer configuration bitsets and the host-supplied type hierarchy used by the frame
//! engine, mirroring the way [`crate::tree::class::ClassAccess`] and friends model `access_flags`.

use std::fmt::{Debug, Formatter};
use std::ops::BitOr;
use anyhow::Result;
use crate::tree::class::ClassName;

/// Flags controlling how much of a class file [`crate::read_class`]/[`crate::read_class_multi`]
/// actually parses.
///
/// Combine flags with `|`, e.g. `ParsingOptions::SKIP_DEBUG | ParsingOptions::SKIP_FRAMES`.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct ParsingOptions(u16);

impl ParsingOptions {
	pub const NONE: ParsingOptions = ParsingOptions(0);

	/// Skips the `Code` attribute of every method entirely.
	pub const SKIP_CODE: ParsingOptions = ParsingOptions(1);
	/// Skips `LineNumberTable`, `LocalVariableTable` and `LocalVariableTypeTable`.
	pub const SKIP_DEBUG: ParsingOptions = ParsingOptions(2);
	/// Skips `StackMapTable`/`StackMap`, instead of decoding it into [`crate::visitor::method::code::StackMapData`].
	pub const SKIP_FRAMES: ParsingOptions = ParsingOptions(4);
	/// Expands compact stack-map frames, so that every instruction that has a frame carries a
	/// [`crate::visitor::method::code::StackMapData::Full`] rather than the on-disk compact form.
	pub const EXPAND_FRAMES: ParsingOptions = ParsingOptions(8);

	/// Internal: normalizes the synthetic `ASM_GOTO`/`ASM_IFxx`/`ASM_GOTO_W` opcodes a writer may
	/// emit while widening a forward jump back into ordinary jumps plus a `goto_w`. Not meant to
	/// be set by callers reading real class files; it's only ever turned on by the writer itself
	/// when it re-reads its own just-emitted bytes to finish a widening pass.
	pub(crate) const EXPAND_ASM_INSNS: ParsingOptions = ParsingOptions(256);

	pub fn contains(self, other: ParsingOptions) -> bool {
		self.0 & other.0 == other.0
	}
}

impl BitOr for ParsingOptions {
	type Output = ParsingOptions;
	fn bitor(self, rhs: Self) -> Self::Output {
		ParsingOptions(self.0 | rhs.0)
	}
}

impl Debug for ParsingOptions {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("ParsingOptions { ")?;
		if self.contains(Self::SKIP_CODE) { f.write_str("SKIP_CODE ")?; }
		if self.contains(Self::SKIP_DEBUG) { f.write_str("SKIP_DEBUG ")?; }
		if self.contains(Self::SKIP_FRAMES) { f.write_str("SKIP_FRAMES ")?; }
		if self.contains(Self::EXPAND_FRAMES) { f.write_str("EXPAND_FRAMES ")?; }
		if self.contains(Self::EXPAND_ASM_INSNS) { f.write_str("EXPAND_ASM_INSNS ")?; }
		f.write_str("}")
	}
}

/// Flags controlling what [`crate::write_class`] computes on the caller's behalf.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct WriterOptions(u16);

impl WriterOptions {
	pub const NONE: WriterOptions = WriterOptions(0);

	/// Computes `max_stack` and `max_locals` for every `Code` that doesn't already carry them.
	/// Implied by [`Self::COMPUTE_FRAMES`].
	pub const COMPUTE_MAXS: WriterOptions = WriterOptions(1);
	/// Computes the `StackMapTable` entries (and `max_stack`/`max_locals`) for every `Code` whose
	/// instructions don't already carry frames, by running the frame engine's fixed-point
	/// abstract interpretation over the method's control-flow graph.
	pub const COMPUTE_FRAMES: WriterOptions = WriterOptions(2);

	pub fn contains(self, other: WriterOptions) -> bool {
		self.0 & other.0 == other.0
	}
}

impl BitOr for WriterOptions {
	type Output = WriterOptions;
	fn bitor(self, rhs: Self) -> Self::Output {
		WriterOptions(self.0 | rhs.0)
	}
}

impl Debug for WriterOptions {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("WriterOptions { ")?;
		if self.contains(Self::COMPUTE_MAXS) { f.write_str("COMPUTE_MAXS ")?; }
		if self.contains(Self::COMPUTE_FRAMES) { f.write_str("COMPUTE_FRAMES ")?; }
		f.write_str("}")
	}
}

/// Host-provided knowledge about the class hierarchy being woven, needed by the frame engine to
/// compute the common supertype of two reference types when merging stack map frames at a
/// control-flow join.
///
/// Implementations are handed to [`crate::write_class`] and may be called from the worklist loop
/// of every method being compiled with [`WriterOptions::COMPUTE_FRAMES`], so they should be cheap
/// and side-effect free.
pub trait TypeHierarchy: Send + Sync {
	/// Returns the narrowest common supertype of `a` and `b`. Must always succeed, falling back to
	/// `java/lang/Object` for unrelated types.
	fn common_supertype(&self, a: &ClassName, b: &ClassName) -> Result<ClassName>;

	/// Returns whether `class` is known to be an interface.
	fn is_interface(&self, class: &ClassName) -> Result<bool>;
}

/// A [`TypeHierarchy`] that knows nothing: every pair of distinct reference types merges to
/// `java/lang/Object`, and nothing is ever reported as an interface.
///
/// Correct (per JVMS 4.10.1.4, a verifier is always allowed to fall back to `java/lang/Object`),
/// just imprecise: frames computed against it may carry a wider type than a real classpath-aware
/// verifier would pick.
pub struct NoHierarchy;

impl TypeHierarchy for NoHierarchy {
	fn common_supertype(&self, a: &ClassName, b: &ClassName) -> Result<ClassName> {
		if a == b {
			Ok(a.clone())
		} else {
			Ok(ClassName::JAVA_LANG_OBJECT.to_owned_name())
		}
	}

	fn is_interface(&self, _class: &ClassName) -> Result<bool> {
		Ok(false)
	}
}
