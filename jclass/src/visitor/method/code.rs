use anyhow::Result;
use crate::tree::class::ClassName;
use crate::tree::method::code::{Exception, Instruction, Label, Lv};
use crate::tree::type_annotation::TargetInfoCode;
use crate::visitor::annotation::TypeAnnotationsVisitor;
use crate::visitor::attribute::UnknownAttributeVisitor;

/// The per-method-body visitor, driven while replaying a `Code` attribute's bytecode.
///
/// Instructions are visited in bytecode order, interleaved with `visit_instruction`'s `label`
/// and `frame` arguments whenever a label or a stack-map frame starts at that instruction.
pub trait CodeVisitor
where
	Self: Sized,
	Self::TypeAnnotationsVisitor: TypeAnnotationsVisitor<TargetInfoCode>,
	Self::UnknownAttribute: UnknownAttributeVisitor,
{
	type TypeAnnotationsVisitor;
	type TypeAnnotationsResidual;
	type UnknownAttribute;

	fn interests(&self) -> CodeInterests;

	fn visit_max_stack_and_max_locals(&mut self, max_stack: u16, max_locals: u16) -> Result<()>;

	fn visit_exception_table(&mut self, exception_table: Vec<Exception>) -> Result<()>;

	/// Visits one instruction, along with the label and/or stack-map frame that starts at it, if any.
	///
	/// Defaults to doing nothing, so visitors that only care about the method header don't need
	/// to override it.
	#[allow(unused_variables)]
	fn visit_instruction(
		&mut self,
		label: Option<Label>,
		frame: Option<StackMapData>,
		instruction: Instruction,
	) -> Result<()> {
		Ok(())
	}

	/// Visits the label one past the last instruction.
	///
	/// Needed because [`LabelRange`](crate::tree::method::code::LabelRange)s use an exclusive
	/// end index, so they may reference a label that doesn't sit on any real instruction.
	fn visit_last_label(&mut self, last_label: Label) -> Result<()>;

	/// Visits the method body's raw bytecode, exactly as it appeared on the wire.
	///
	/// Only called when [`CodeInterests::raw_bytecode`] is set; lets a tree-building visitor keep
	/// a copy of the untouched bytes so the writer can fast-copy a method it never needs to touch.
	/// Defaults to doing nothing.
	#[allow(unused_variables)]
	fn visit_raw_bytecode(&mut self, bytecode: Vec<u8>) -> Result<()> {
		Ok(())
	}

	fn visit_line_numbers(&mut self, line_number_table: Vec<(Label, u16)>) -> Result<()>;
	fn visit_local_variables(&mut self, local_variables: Vec<Lv>) -> Result<()>;

	fn visit_type_annotations(self, visible: bool) -> Result<(Self::TypeAnnotationsResidual, Self::TypeAnnotationsVisitor)>;
	fn finish_type_annotations(this: Self::TypeAnnotationsResidual, type_annotations_visitor: Self::TypeAnnotationsVisitor) -> Result<Self>;

	fn visit_unknown_attribute(&mut self, unknown_attribute: Self::UnknownAttribute) -> Result<()>;
}

/// Which of [`CodeVisitor`]'s optional `Code`-attribute contents an implementation cares about.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct CodeInterests {
	pub stack_map_table: bool,

	pub line_number_table: bool,

	pub local_variable_table: bool,
	pub local_variable_type_table: bool,

	pub runtime_visible_type_annotations: bool,
	pub runtime_invisible_type_annotations: bool,

	pub unknown_attributes: bool,

	/// Whether the reader should hand back the method's untouched raw bytecode via
	/// [`CodeVisitor::visit_raw_bytecode`]. Off by default since most visitors never need it; the
	/// tree builder turns it on so the writer can fast-copy methods it doesn't need to touch.
	pub raw_bytecode: bool,
}

impl CodeInterests {
	pub fn none() -> CodeInterests {
		Self::default()
	}
	pub fn all() -> CodeInterests {
		CodeInterests {
			stack_map_table: true,

			line_number_table: true,

			local_variable_table: true,
			local_variable_type_table: true,

			runtime_visible_type_annotations: true,
			runtime_invisible_type_annotations: true,

			unknown_attributes: true,

			raw_bytecode: true,
		}
	}
}

/// A single verification type, as found in a `StackMapTable` entry.
#[derive(Debug, Clone, PartialEq)]
pub enum VerificationTypeInfo {
	Top,
	Integer,
	Float,
	Long,
	Double,
	Null,
	UninitializedThis,
	Object(ClassName),
	/// An object created by a `new` instruction that hasn't had its constructor called yet.
	Uninitialized(Label),
}

/// The decoded form of a single `StackMapTable`/`StackMap` entry, independent of its compressed
/// on-disk encoding (`same`, `chop`, `append`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum StackMapData {
	Same,
	SameLocals1StackItem {
		stack: VerificationTypeInfo,
	},
	Chop {
		k: u8,
	},
	Append {
		locals: Vec<VerificationTypeInfo>,
	},
	Full {
		locals: Vec<VerificationTypeInfo>,
		stack: Vec<VerificationTypeInfo>,
	},
}
