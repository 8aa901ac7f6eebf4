//! The frame engine's scratch type table.
//!
//! Distinct from the constant pool: entries here are never written out as `CONSTANT_Class` infos
//! by themselves, they just give `AbstractType::Reference`/`AbstractType::Uninitialized` a small
//! packed index to carry around instead of cloning a `ClassName` (and, for uninitialized types, a
//! `Label`) into every stack slot. The constant pool entry is only created once a `VerificationTypeInfo`
//! is actually about to be serialized, via `PoolWrite::put_class`.

use indexmap::IndexSet;
use crate::tree::class::ClassName;
use crate::tree::method::code::Label;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum TypeTableEntry {
	/// A plain (possibly array) reference type, identified by the class it was created/merged as.
	Reference(ClassName),
	/// The not-yet-initialized result of a `new` at the given label, in the given class.
	Uninitialized(ClassName, Label),
}

/// Insertion-ordered, deduplicated table of reference types seen while computing one method's
/// frames. Mirrors the bootstrap-methods table in `PoolWrite`: insertion order is the index.
#[derive(Debug, Default)]
pub(crate) struct FrameTypeTable {
	entries: IndexSet<TypeTableEntry>,
}

impl FrameTypeTable {
	pub(crate) fn new() -> FrameTypeTable {
		FrameTypeTable::default()
	}

	pub(crate) fn add_type(&mut self, class: ClassName) -> u32 {
		let (index, _) = self.entries.insert_full(TypeTableEntry::Reference(class));
		index as u32
	}

	pub(crate) fn add_uninitialized_type(&mut self, class: ClassName, new_site: Label) -> u32 {
		let (index, _) = self.entries.insert_full(TypeTableEntry::Uninitialized(class, new_site));
		index as u32
	}

	/// Interns the merge result of two existing entries, as computed by the caller.
	pub(crate) fn add_merged_type(&mut self, merged: ClassName) -> u32 {
		self.add_type(merged)
	}

	pub(crate) fn get(&self, index: u32) -> &TypeTableEntry {
		self.entries.get_index(index as usize).expect("type table index out of bounds")
	}
}
