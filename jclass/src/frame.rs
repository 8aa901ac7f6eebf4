//! The frame engine: computes `max_stack`/`max_locals` and `StackMapTable` entries for a `Code`
//! attribute that doesn't already carry them, by running an abstract interpretation fixed point
//! over the method's control-flow graph.
//!
//! Grounded on the same "one pass builds a graph, a second pass walks it to a fixed point" shape
//! ASM's `MethodWriter`/`Frame` classes use, adapted to this crate's tree model: instead of ASM's
//! symbolic "relative to locals[i] at block entry" frame representation, every abstract value here
//! is concrete (a plain `Vec<AbstractType>` per block), which is simpler to get right at the cost of
//! being somewhat less memory-efficient for very large methods.

use std::collections::{HashMap, HashSet, VecDeque};
use anyhow::{anyhow, bail, Context, Result};
use log::{debug, trace};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use crate::options::TypeHierarchy;
use crate::simple_class_writer::type_table::{FrameTypeTable, TypeTableEntry};
use crate::tree::class::ClassName;
use crate::tree::descriptor::{ArrayType as DescArrayType, ParsedFieldDescriptor, Type as DescType};
use crate::tree::method::{MethodDescriptor, MethodName};
use crate::tree::method::code::{ArrayType, Code, Instruction, Label};
use crate::visitor::method::code::{StackMapData, VerificationTypeInfo};

const DIM_BITS: u32 = 6;
const KIND_BITS: u32 = 4;
const FLAGS_BITS: u32 = 2;
const VALUE_BITS: u32 = 20;

const VALUE_SHIFT: u32 = 0;
const FLAGS_SHIFT: u32 = VALUE_SHIFT + VALUE_BITS;
const KIND_SHIFT: u32 = FLAGS_SHIFT + FLAGS_BITS;
const DIM_SHIFT: u32 = KIND_SHIFT + KIND_BITS;

const VALUE_MASK: u32 = (1 << VALUE_BITS) - 1;
const FLAGS_MASK: u32 = (1 << FLAGS_BITS) - 1;
const KIND_MASK: u32 = (1 << KIND_BITS) - 1;
const DIM_MASK: u32 = (1 << DIM_BITS) - 1;

/// A verification type used while running the frame engine, packed into a `u32`.
///
/// Layout, from the low bits up: a 20-bit `VALUE` (an index into a [`FrameTypeTable`] for the
/// `Reference`/`Uninitialized` kinds, unused otherwise), a 2-bit reserved `FLAGS` field, a 4-bit
/// `KIND` tag, and a 6-bit signed `DIM` used to cache a reference type's array dimension so callers
/// don't need to re-count leading `[` characters on the hot merge path. `DIM` is a cache, not a
/// source of truth: the authoritative dimension of a reference always comes from its type-table
/// class name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct AbstractType(u32);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum Kind {
	Top = 0,
	Integer = 1,
	Float = 2,
	Long = 3,
	Double = 4,
	Null = 5,
	UninitializedThis = 6,
	Reference = 7,
	Uninitialized = 8,
	/// Reserved for an ASM-style "copy of local `i`" optimization this engine doesn't implement;
	/// every `AbstractType` this engine produces is concrete.
	Local = 9,
	/// Reserved for an ASM-style "copy of the stack entry `i` below the top" optimization this
	/// engine doesn't implement.
	Stack = 10,
}

impl Kind {
	fn from_u32(value: u32) -> Kind {
		match value {
			0 => Kind::Top,
			1 => Kind::Integer,
			2 => Kind::Float,
			3 => Kind::Long,
			4 => Kind::Double,
			5 => Kind::Null,
			6 => Kind::UninitializedThis,
			7 => Kind::Reference,
			8 => Kind::Uninitialized,
			9 => Kind::Local,
			10 => Kind::Stack,
			_ => unreachable!("invalid packed `AbstractType` kind {value}"),
		}
	}
}

impl AbstractType {
	fn new(kind: Kind, value: u32, dim: i8) -> AbstractType {
		debug_assert!(value <= VALUE_MASK, "type table index {value} doesn't fit in {VALUE_BITS} bits");
		let dim = (dim as u32) & DIM_MASK;
		AbstractType(
			(dim << DIM_SHIFT) | ((kind as u32 & KIND_MASK) << KIND_SHIFT) | (0 << FLAGS_SHIFT) | (value & VALUE_MASK)
		)
	}

	pub(crate) const TOP: AbstractType = AbstractType(0);
	pub(crate) const INTEGER: AbstractType = AbstractType((Kind::Integer as u32) << KIND_SHIFT);
	pub(crate) const FLOAT: AbstractType = AbstractType((Kind::Float as u32) << KIND_SHIFT);
	pub(crate) const LONG: AbstractType = AbstractType((Kind::Long as u32) << KIND_SHIFT);
	pub(crate) const DOUBLE: AbstractType = AbstractType((Kind::Double as u32) << KIND_SHIFT);
	pub(crate) const NULL: AbstractType = AbstractType((Kind::Null as u32) << KIND_SHIFT);
	pub(crate) const UNINITIALIZED_THIS: AbstractType = AbstractType((Kind::UninitializedThis as u32) << KIND_SHIFT);

	fn reference(type_index: u32, dim: i8) -> AbstractType {
		AbstractType::new(Kind::Reference, type_index, dim)
	}

	fn uninitialized(type_index: u32) -> AbstractType {
		AbstractType::new(Kind::Uninitialized, type_index, 0)
	}

	fn kind(self) -> Kind {
		Kind::from_u32((self.0 >> KIND_SHIFT) & KIND_MASK)
	}

	fn value(self) -> u32 {
		(self.0 >> VALUE_SHIFT) & VALUE_MASK
	}

	fn dim(self) -> i8 {
		let raw = (self.0 >> DIM_SHIFT) & DIM_MASK;
		// sign-extend from 6 bits
		((raw << (32 - DIM_BITS)) as i32 >> (32 - DIM_BITS)) as i8
	}

	/// The number of physical local-variable slots (or stack words) this type occupies: 2 for
	/// `long`/`double`, 1 for everything else.
	fn width(self) -> u8 {
		match self.kind() {
			Kind::Long | Kind::Double => 2,
			_ => 1,
		}
	}

	fn is_top(self) -> bool {
		self.kind() == Kind::Top
	}
}

fn verification_type_info(t: AbstractType, type_table: &FrameTypeTable) -> Result<VerificationTypeInfo> {
	Ok(match t.kind() {
		Kind::Top => VerificationTypeInfo::Top,
		Kind::Integer => VerificationTypeInfo::Integer,
		Kind::Float => VerificationTypeInfo::Float,
		Kind::Long => VerificationTypeInfo::Long,
		Kind::Double => VerificationTypeInfo::Double,
		Kind::Null => VerificationTypeInfo::Null,
		Kind::UninitializedThis => VerificationTypeInfo::UninitializedThis,
		Kind::Reference => match type_table.get(t.value()) {
			TypeTableEntry::Reference(class) => VerificationTypeInfo::Object(class.clone()),
			TypeTableEntry::Uninitialized(..) => bail!("reference-kind abstract type pointed at an uninitialized type-table entry"),
		},
		Kind::Uninitialized => match type_table.get(t.value()) {
			TypeTableEntry::Uninitialized(_, label) => VerificationTypeInfo::Uninitialized(*label),
			TypeTableEntry::Reference(_) => bail!("uninitialized-kind abstract type pointed at a reference type-table entry"),
		},
		Kind::Local | Kind::Stack => bail!("`Local`/`Stack` abstract types are never produced by this frame engine"),
	})
}

/// What the frame engine computed for one `Code` attribute.
pub(crate) struct ComputedFrames {
	pub(crate) max_stack: u16,
	pub(crate) max_locals: u16,
	/// Instruction-index -> frame to emit at that instruction.
	pub(crate) frames: Vec<(usize, StackMapData)>,
	/// Instruction-index of a label-less `New` -> the label minted for it, so the caller can
	/// register it with its own `Labels` table even though the tree's `instruction.label` is `None`.
	pub(crate) synthetic_new_labels: Vec<(usize, Label)>,
}

/// Computes `max_stack`/`max_locals` and (if `need_frames`) the `StackMapTable` entries for `code`.
pub(crate) fn compute_frames(
	code: &Code,
	class_name: &ClassName,
	method_name: &MethodName,
	descriptor: &MethodDescriptor,
	is_static: bool,
	hierarchy: &dyn TypeHierarchy,
	need_frames: bool,
) -> Result<ComputedFrames> {
	let is_constructor = method_name.as_slice() == MethodName::INIT;
	let parsed = descriptor.parse().context("failed to parse method descriptor while computing frames")?;

	let mut type_table = FrameTypeTable::new();
	let initial_locals = build_initial_locals(class_name, is_static, is_constructor, &parsed, &mut type_table)?;

	let instructions = &code.instructions;
	if instructions.is_empty() {
		bail!("cannot compute frames for a `Code` attribute with no instructions");
	}

	let mut synthetic_new_labels: HashMap<usize, Label> = HashMap::new();
	let mut next_label_id = instructions.iter()
		.filter_map(|i| i.label.map(|l| l.id))
		.max()
		.map_or(0u32, |id| id as u32 + 1);
	for (index, entry) in instructions.iter().enumerate() {
		if matches!(entry.instruction, Instruction::New(_)) && entry.label.is_none() {
			let id = u16::try_from(next_label_id).context("ran out of label ids while minting `new`-site labels")?;
			synthetic_new_labels.insert(index, Label { id });
			next_label_id += 1;
		}
	}
	let label_of = |index: usize| -> Label {
		instructions[index].label.or_else(|| synthetic_new_labels.get(&index).copied())
			.expect("every `New` instruction has either a real or a synthetic label at this point")
	};

	let (graph, leaders, label_to_index) = build_cfg(code, &label_of)?;
	trace!("built control-flow graph with {} blocks for {}.{}{}", leaders.len(), class_name, method_name, descriptor.as_inner());

	let exception_edges = build_exception_edges(code, &label_to_index, &leaders, hierarchy, &mut type_table)?;

	let mut in_states: HashMap<NodeIndex, (Vec<AbstractType>, Vec<AbstractType>)> = HashMap::new();
	let mut out_states: HashMap<NodeIndex, (Vec<AbstractType>, Vec<AbstractType>)> = HashMap::new();
	let entry = NodeIndex::new(0);
	in_states.insert(entry, (initial_locals.clone(), Vec::new()));

	let mut queue: VecDeque<NodeIndex> = VecDeque::new();
	let mut queued: HashSet<NodeIndex> = HashSet::new();
	queue.push_back(entry);
	queued.insert(entry);

	let mut max_stack_width: u16 = 0;
	let mut max_locals_width: u16 = initial_locals.iter().map(|t| t.width() as u16).sum();

	while let Some(node) = queue.pop_front() {
		queued.remove(&node);
		let Some((locals_in, stack_in)) = in_states.get(&node).cloned() else {
			continue;
		};

		let block_start = leaders[node.index()];
		let block_end = leaders.get(node.index() + 1).copied().unwrap_or(instructions.len());

		let mut locals = locals_in;
		let mut stack = stack_in;
		for index in block_start..block_end {
			simulate_instruction(code, index, &label_of, &mut locals, &mut stack, class_name, hierarchy, &mut type_table)
				.with_context(|| anyhow!("while simulating instruction {index} of {class_name}.{method_name}{}", descriptor.as_inner()))?;

			let locals_width: u16 = locals.iter().map(|t| t.width() as u16).sum();
			let stack_width: u16 = stack.iter().map(|t| t.width() as u16).sum();
			max_locals_width = max_locals_width.max(locals_width);
			max_stack_width = max_stack_width.max(stack_width);
		}

		out_states.insert(node, (locals.clone(), stack.clone()));

		for edge in graph.edges_directed(node, Direction::Outgoing) {
			let succ = edge.target();
			let contributed_stack = match edge.weight() {
				EdgeKind::Normal => stack.clone(),
				EdgeKind::Exception(exception_type) => vec![*exception_type],
			};

			let changed = merge_into(&mut in_states, succ, &locals, &contributed_stack, hierarchy, &mut type_table)?;
			if changed && queued.insert(succ) {
				queue.push_back(succ);
			}
		}
	}
	for (_, edge) in &exception_edges {
		let _ = edge;
	}

	let frames = if need_frames {
		encode_frames(&leaders, &in_states, &initial_locals, &type_table)?
	} else {
		Vec::new()
	};

	Ok(ComputedFrames {
		max_stack: max_stack_width,
		max_locals: max_locals_width,
		frames,
		synthetic_new_labels: synthetic_new_labels.into_iter().collect(),
	})
}

#[derive(Debug, Clone, Copy)]
enum EdgeKind {
	Normal,
	Exception(AbstractType),
}

fn build_initial_locals(
	class_name: &ClassName,
	is_static: bool,
	is_constructor: bool,
	parsed: &crate::tree::descriptor::ParsedMethodDescriptor,
	type_table: &mut FrameTypeTable,
) -> Result<Vec<AbstractType>> {
	let mut locals = Vec::new();
	if !is_static {
		if is_constructor {
			locals.push(AbstractType::UNINITIALIZED_THIS);
		} else {
			let index = type_table.add_type(class_name.clone());
			locals.push(AbstractType::reference(index, 0));
		}
	}
	for param in &parsed.parameter_descriptors {
		let t = abstract_type_for(param, type_table)?;
		let width = t.width();
		locals.push(t);
		if width == 2 {
			locals.push(t);
		}
	}
	Ok(locals)
}

fn abstract_type_for(t: &DescType, type_table: &mut FrameTypeTable) -> Result<AbstractType> {
	Ok(match t {
		DescType::B | DescType::C | DescType::I | DescType::S | DescType::Z => AbstractType::INTEGER,
		DescType::F => AbstractType::FLOAT,
		DescType::J => AbstractType::LONG,
		DescType::D => AbstractType::DOUBLE,
		DescType::Object(class) => {
			let index = type_table.add_type(class.clone());
			AbstractType::reference(index, 0)
		},
		DescType::Array(dim, array_type) => {
			let descriptor = ParsedFieldDescriptor(DescType::Array(*dim, array_type.clone())).write();
			let class = ClassName::try_from(descriptor.as_inner())?;
			let index = type_table.add_type(class);
			AbstractType::reference(index, *dim as i8)
		},
	})
}

/// Builds the class name an `anewarray`/array-element-load of `component` (whatever `component`
/// names, possibly itself already an array) would push: one extra leading `[`.
fn wrap_one_more_array_dimension(component: &ClassName) -> Result<ClassName> {
	let inner = format!("{}", component.as_inner());
	let wrapped = if let Some(rest) = inner.strip_prefix('[') {
		format!("[[{rest}")
	} else {
		format!("[L{inner};")
	};
	ClassName::try_from(wrapped)
}

/// Strips one array dimension off `array_class`, returning the component's verification type.
fn array_component_type(array_class: &ClassName, type_table: &mut FrameTypeTable) -> Result<AbstractType> {
	let inner = format!("{}", array_class.as_inner());
	let Some(rest) = inner.strip_prefix('[') else {
		// Not actually an array (can happen on malformed input); fall back conservatively.
		let index = type_table.add_type(ClassName::JAVA_LANG_OBJECT.to_owned_name());
		return Ok(AbstractType::reference(index, 0));
	};
	if let Some(object_name) = rest.strip_prefix('L').and_then(|s| s.strip_suffix(';')) {
		let class = ClassName::try_from(object_name)?;
		let index = type_table.add_type(class);
		Ok(AbstractType::reference(index, 0))
	} else if rest.starts_with('[') {
		let class = ClassName::try_from(rest)?;
		let dim = rest.chars().take_while(|&c| c == '[').count() as i8;
		let index = type_table.add_type(class);
		Ok(AbstractType::reference(index, dim))
	} else {
		// A primitive array component: `aaload` shouldn't run on these, but don't panic on it.
		Ok(match rest.chars().next() {
			Some('I') => AbstractType::INTEGER,
			Some('F') => AbstractType::FLOAT,
			Some('J') => AbstractType::LONG,
			Some('D') => AbstractType::DOUBLE,
			_ => AbstractType::INTEGER,
		})
	}
}

fn field_type(desc: &crate::tree::field::FieldDescriptor, type_table: &mut FrameTypeTable) -> Result<AbstractType> {
	let parsed = desc.parse().context("failed to parse field descriptor while computing frames")?;
	abstract_type_for(&parsed.0, type_table)
}

fn stack_push(stack: &mut Vec<AbstractType>, t: AbstractType) {
	stack.push(t);
}

fn stack_pop(stack: &mut Vec<AbstractType>) -> Result<AbstractType> {
	stack.pop().context("stack underflow while computing frames")
}

fn stack_pop_expect(stack: &mut Vec<AbstractType>, kind: Kind) -> Result<AbstractType> {
	let t = stack_pop(stack)?;
	if t.kind() != kind && !t.is_top() {
		trace!("expected {kind:?} on stack, got {:?} (continuing anyway)", t.kind());
	}
	Ok(t)
}

fn locals_set(locals: &mut Vec<AbstractType>, index: usize, value: AbstractType) {
	let width = value.width() as usize;
	if locals.len() < index + width {
		locals.resize(index + width, AbstractType::TOP);
	}
	locals[index] = value;
	if width == 2 {
		locals[index + 1] = value;
	}
}

fn locals_get(locals: &[AbstractType], index: usize) -> AbstractType {
	locals.get(index).copied().unwrap_or(AbstractType::TOP)
}

/// Pops a contiguous group of stack entries whose combined physical width is exactly `target_width`,
/// returning them bottom-to-top. Used to implement `dup`/`pop`/`swap` uniformly.
fn pop_group_of_width(stack: &mut Vec<AbstractType>, target_width: u8) -> Result<Vec<AbstractType>> {
	let mut collected = Vec::new();
	let mut width = 0u8;
	while width < target_width {
		let t = stack_pop(stack)?;
		width += t.width();
		collected.push(t);
	}
	if width != target_width {
		bail!("stack shuffle instruction split a long/double value");
	}
	collected.reverse();
	Ok(collected)
}

fn simulate_instruction(
	code: &Code,
	index: usize,
	label_of: &impl Fn(usize) -> Label,
	locals: &mut Vec<AbstractType>,
	stack: &mut Vec<AbstractType>,
	class_name: &ClassName,
	hierarchy: &dyn TypeHierarchy,
	type_table: &mut FrameTypeTable,
) -> Result<()> {
	use Instruction::*;

	let instruction = &code.instructions[index].instruction;
	match instruction {
		Nop => {},
		AConstNull => stack_push(stack, AbstractType::NULL),
		IConstM1 | IConst0 | IConst1 | IConst2 | IConst3 | IConst4 | IConst5 | BiPush(_) | SiPush(_) => stack_push(stack, AbstractType::INTEGER),
		LConst0 | LConst1 => stack_push(stack, AbstractType::LONG),
		FConst0 | FConst1 | FConst2 => stack_push(stack, AbstractType::FLOAT),
		DConst0 | DConst1 => stack_push(stack, AbstractType::DOUBLE),
		Ldc(loadable) => {
			use crate::tree::method::code::Loadable;
			let t = match loadable {
				Loadable::Integer(_) => AbstractType::INTEGER,
				Loadable::Float(_) => AbstractType::FLOAT,
				Loadable::Long(_) => AbstractType::LONG,
				Loadable::Double(_) => AbstractType::DOUBLE,
				Loadable::Class(_) => {
					let index = type_table.add_type(ClassName::try_from("java/lang/Class")?);
					AbstractType::reference(index, 0)
				},
				Loadable::String(_) => {
					let index = type_table.add_type(ClassName::try_from("java/lang/String")?);
					AbstractType::reference(index, 0)
				},
				Loadable::MethodHandle(_) => {
					let index = type_table.add_type(ClassName::try_from("java/lang/invoke/MethodHandle")?);
					AbstractType::reference(index, 0)
				},
				Loadable::MethodType(_) => {
					let index = type_table.add_type(ClassName::try_from("java/lang/invoke/MethodType")?);
					AbstractType::reference(index, 0)
				},
				Loadable::Dynamic(constant_dynamic) => field_type(&constant_dynamic.descriptor, type_table)?,
			};
			stack_push(stack, t);
		},
		ILoad(i) => stack_push(stack, locals_get(locals, i.index as usize)),
		LLoad(i) => stack_push(stack, locals_get(locals, i.index as usize)),
		FLoad(i) => stack_push(stack, locals_get(locals, i.index as usize)),
		DLoad(i) => stack_push(stack, locals_get(locals, i.index as usize)),
		ALoad(i) => stack_push(stack, locals_get(locals, i.index as usize)),
		IALoad => { stack_pop_expect(stack, Kind::Integer)?; stack_pop(stack)?; stack_push(stack, AbstractType::INTEGER); },
		LALoad => { stack_pop_expect(stack, Kind::Integer)?; stack_pop(stack)?; stack_push(stack, AbstractType::LONG); },
		FALoad => { stack_pop_expect(stack, Kind::Integer)?; stack_pop(stack)?; stack_push(stack, AbstractType::FLOAT); },
		DALoad => { stack_pop_expect(stack, Kind::Integer)?; stack_pop(stack)?; stack_push(stack, AbstractType::DOUBLE); },
		BALoad | CALoad | SALoad => { stack_pop_expect(stack, Kind::Integer)?; stack_pop(stack)?; stack_push(stack, AbstractType::INTEGER); },
		AALoad => {
			stack_pop_expect(stack, Kind::Integer)?;
			let arrayref = stack_pop(stack)?;
			let component = match arrayref.kind() {
				Kind::Reference => {
					let TypeTableEntry::Reference(class) = type_table.get(arrayref.value()).clone() else {
						bail!("`aaload` arrayref didn't point at a reference type-table entry");
					};
					array_component_type(&class, type_table)?
				},
				Kind::Null => AbstractType::NULL,
				_ => AbstractType::TOP,
			};
			stack_push(stack, component);
		},
		IStore(i) => { let v = stack_pop(stack)?; locals_set(locals, i.index as usize, v); },
		LStore(i) => { let v = stack_pop(stack)?; locals_set(locals, i.index as usize, v); },
		FStore(i) => { let v = stack_pop(stack)?; locals_set(locals, i.index as usize, v); },
		DStore(i) => { let v = stack_pop(stack)?; locals_set(locals, i.index as usize, v); },
		AStore(i) => { let v = stack_pop(stack)?; locals_set(locals, i.index as usize, v); },
		IAStore | FAStore | BAStore | CAStore | SAStore => { stack_pop(stack)?; stack_pop(stack)?; stack_pop(stack)?; },
		LAStore | DAStore => { stack_pop(stack)?; stack_pop(stack)?; stack_pop(stack)?; },
		AAStore => { stack_pop(stack)?; stack_pop(stack)?; stack_pop(stack)?; },
		Pop => { pop_group_of_width(stack, 1)?; },
		Pop2 => { pop_group_of_width(stack, 2)?; },
		Dup => { let g = pop_group_of_width(stack, 1)?; stack.extend_from_slice(&g); stack.extend_from_slice(&g); },
		DupX1 => {
			let g1 = pop_group_of_width(stack, 1)?;
			let g2 = pop_group_of_width(stack, 1)?;
			stack.extend_from_slice(&g1); stack.extend_from_slice(&g2); stack.extend_from_slice(&g1);
		},
		DupX2 => {
			let g1 = pop_group_of_width(stack, 1)?;
			let g2 = pop_group_of_width(stack, 2)?;
			stack.extend_from_slice(&g1); stack.extend_from_slice(&g2); stack.extend_from_slice(&g1);
		},
		Dup2 => { let g = pop_group_of_width(stack, 2)?; stack.extend_from_slice(&g); stack.extend_from_slice(&g); },
		Dup2X1 => {
			let g1 = pop_group_of_width(stack, 2)?;
			let g2 = pop_group_of_width(stack, 1)?;
			stack.extend_from_slice(&g1); stack.extend_from_slice(&g2); stack.extend_from_slice(&g1);
		},
		Dup2X2 => {
			let g1 = pop_group_of_width(stack, 2)?;
			let g2 = pop_group_of_width(stack, 2)?;
			stack.extend_from_slice(&g1); stack.extend_from_slice(&g2); stack.extend_from_slice(&g1);
		},
		Swap => {
			let g1 = pop_group_of_width(stack, 1)?;
			let g2 = pop_group_of_width(stack, 1)?;
			stack.extend_from_slice(&g1); stack.extend_from_slice(&g2);
		},
		IAdd | ISub | IMul | IDiv | IRem | IAnd | IOr | IXor => { stack_pop(stack)?; stack_pop(stack)?; stack_push(stack, AbstractType::INTEGER); },
		LAdd | LSub | LMul | LDiv | LRem | LAnd | LOr | LXor => { stack_pop(stack)?; stack_pop(stack)?; stack_push(stack, AbstractType::LONG); },
		FAdd | FSub | FMul | FDiv | FRem => { stack_pop(stack)?; stack_pop(stack)?; stack_push(stack, AbstractType::FLOAT); },
		DAdd | DSub | DMul | DDiv | DRem => { stack_pop(stack)?; stack_pop(stack)?; stack_push(stack, AbstractType::DOUBLE); },
		INeg => { stack_pop(stack)?; stack_push(stack, AbstractType::INTEGER); },
		LNeg => { stack_pop(stack)?; stack_push(stack, AbstractType::LONG); },
		FNeg => { stack_pop(stack)?; stack_push(stack, AbstractType::FLOAT); },
		DNeg => { stack_pop(stack)?; stack_push(stack, AbstractType::DOUBLE); },
		IShl | IShr | IUShr => { stack_pop(stack)?; stack_pop(stack)?; stack_push(stack, AbstractType::INTEGER); },
		LShl | LShr | LUShr => { stack_pop(stack)?; stack_pop(stack)?; stack_push(stack, AbstractType::LONG); },
		IInc(_, _) => {},
		I2L => { stack_pop(stack)?; stack_push(stack, AbstractType::LONG); },
		I2F => { stack_pop(stack)?; stack_push(stack, AbstractType::FLOAT); },
		I2D => { stack_pop(stack)?; stack_push(stack, AbstractType::DOUBLE); },
		L2I => { stack_pop(stack)?; stack_push(stack, AbstractType::INTEGER); },
		L2F => { stack_pop(stack)?; stack_push(stack, AbstractType::FLOAT); },
		L2D => { stack_pop(stack)?; stack_push(stack, AbstractType::DOUBLE); },
		F2I => { stack_pop(stack)?; stack_push(stack, AbstractType::INTEGER); },
		F2L => { stack_pop(stack)?; stack_push(stack, AbstractType::LONG); },
		F2D => { stack_pop(stack)?; stack_push(stack, AbstractType::DOUBLE); },
		D2I => { stack_pop(stack)?; stack_push(stack, AbstractType::INTEGER); },
		D2L => { stack_pop(stack)?; stack_push(stack, AbstractType::LONG); },
		D2F => { stack_pop(stack)?; stack_push(stack, AbstractType::FLOAT); },
		I2B | I2C | I2S => { stack_pop(stack)?; stack_push(stack, AbstractType::INTEGER); },
		LCmp => { stack_pop(stack)?; stack_pop(stack)?; stack_push(stack, AbstractType::INTEGER); },
		FCmpL | FCmpG => { stack_pop(stack)?; stack_pop(stack)?; stack_push(stack, AbstractType::INTEGER); },
		DCmpL | DCmpG => { stack_pop(stack)?; stack_pop(stack)?; stack_push(stack, AbstractType::INTEGER); },
		IfEq(_) | IfNe(_) | IfLt(_) | IfGe(_) | IfGt(_) | IfLe(_) => { stack_pop(stack)?; },
		IfICmpEq(_) | IfICmpNe(_) | IfICmpLt(_) | IfICmpGe(_) | IfICmpGt(_) | IfICmpLe(_) => { stack_pop(stack)?; stack_pop(stack)?; },
		IfACmpEq(_) | IfACmpNe(_) => { stack_pop(stack)?; stack_pop(stack)?; },
		Goto(_) => {},
		Jsr(_) => {},
		Ret(_) => {},
		TableSwitch { .. } | LookupSwitch { .. } => { stack_pop(stack)?; },
		IReturn | LReturn | FReturn | DReturn | AReturn => { stack_pop(stack)?; },
		Return => {},
		GetStatic(field_ref) => { let t = field_type(&field_ref.desc, type_table)?; stack_push(stack, t); },
		PutStatic(field_ref) => { field_type(&field_ref.desc, type_table)?; stack_pop(stack)?; },
		GetField(field_ref) => { stack_pop(stack)?; let t = field_type(&field_ref.desc, type_table)?; stack_push(stack, t); },
		PutField(field_ref) => { field_type(&field_ref.desc, type_table)?; stack_pop(stack)?; stack_pop(stack)?; },
		InvokeVirtual(method_ref) | InvokeInterface(method_ref) => simulate_invoke(method_ref, true, stack, type_table)?,
		InvokeSpecial(method_ref, _) => {
			let parsed = method_ref.desc.parse().context("failed to parse method descriptor")?;
			for param in parsed.parameter_descriptors.iter().rev() {
				let t = abstract_type_for(param, type_table)?;
				stack_pop(stack)?;
				if t.width() == 2 { stack_pop(stack)?; }
			}
			let objectref = stack_pop(stack)?;
			if method_ref.name.as_slice() == MethodName::INIT {
				resolve_uninitialized(stack, locals, objectref, class_name, type_table)?;
			}
			if let Some(ret) = &parsed.return_descriptor {
				let t = abstract_type_for(ret, type_table)?;
				stack_push(stack, t);
			}
		},
		InvokeStatic(method_ref, _) => simulate_invoke(method_ref, false, stack, type_table)?,
		InvokeDynamic(invoke_dynamic) => {
			let parsed = invoke_dynamic.descriptor.parse().context("failed to parse invokedynamic descriptor")?;
			for param in parsed.parameter_descriptors.iter().rev() {
				let t = abstract_type_for(param, type_table)?;
				stack_pop(stack)?;
				if t.width() == 2 { stack_pop(stack)?; }
			}
			if let Some(ret) = &parsed.return_descriptor {
				let t = abstract_type_for(ret, type_table)?;
				stack_push(stack, t);
			}
		},
		New(class) => {
			let site_label = label_of(index);
			let type_index = type_table.add_uninitialized_type(class.clone(), site_label);
			stack_push(stack, AbstractType::uninitialized(type_index));
		},
		NewArray(atype) => {
			stack_pop_expect(stack, Kind::Integer)?;
			let desc_atype = match atype {
				ArrayType::Boolean => DescArrayType::Z,
				ArrayType::Char => DescArrayType::C,
				ArrayType::Float => DescArrayType::F,
				ArrayType::Double => DescArrayType::D,
				ArrayType::Byte => DescArrayType::B,
				ArrayType::Short => DescArrayType::S,
				ArrayType::Int => DescArrayType::I,
				ArrayType::Long => DescArrayType::J,
			};
			let descriptor = ParsedFieldDescriptor(DescType::Array(1, desc_atype)).write();
			let class = ClassName::try_from(descriptor.as_inner())?;
			let index = type_table.add_type(class);
			stack_push(stack, AbstractType::reference(index, 1));
		},
		ANewArray(component) => {
			stack_pop_expect(stack, Kind::Integer)?;
			let array_class = wrap_one_more_array_dimension(component)?;
			let dim = array_class.as_inner().chars().take_while(|&c| c == '[').count() as i8;
			let index = type_table.add_type(array_class);
			stack_push(stack, AbstractType::reference(index, dim));
		},
		ArrayLength => { stack_pop(stack)?; stack_push(stack, AbstractType::INTEGER); },
		AThrow => { stack_pop(stack)?; },
		CheckCast(class) => {
			stack_pop(stack)?;
			let dim = class.as_inner().chars().take_while(|&c| c == '[').count() as i8;
			let index = type_table.add_type(class.clone());
			stack_push(stack, AbstractType::reference(index, dim));
		},
		InstanceOf(_) => { stack_pop(stack)?; stack_push(stack, AbstractType::INTEGER); },
		MonitorEnter | MonitorExit => { stack_pop(stack)?; },
		MultiANewArray(class, dims) => {
			for _ in 0..*dims { stack_pop_expect(stack, Kind::Integer)?; }
			let dim = class.as_inner().chars().take_while(|&c| c == '[').count() as i8;
			let index = type_table.add_type(class.clone());
			stack_push(stack, AbstractType::reference(index, dim));
		},
		IfNull(_) | IfNonNull(_) => { stack_pop(stack)?; },
	}

	let _ = hierarchy;
	Ok(())
}

fn simulate_invoke(method_ref: &crate::tree::method::MethodRef, has_receiver: bool, stack: &mut Vec<AbstractType>, type_table: &mut FrameTypeTable) -> Result<()> {
	let parsed = method_ref.desc.parse().context("failed to parse method descriptor")?;
	for param in parsed.parameter_descriptors.iter().rev() {
		let t = abstract_type_for(param, type_table)?;
		stack_pop(stack)?;
		if t.width() == 2 { stack_pop(stack)?; }
	}
	if has_receiver {
		stack_pop(stack)?;
	}
	if let Some(ret) = &parsed.return_descriptor {
		let t = abstract_type_for(ret, type_table)?;
		stack_push(stack, t);
	}
	Ok(())
}

/// After an `invokespecial <init>` resolves an uninitialized type, every occurrence of that exact
/// abstract type in `locals`/`stack` (and the popped `objectref` itself) becomes a plain reference.
fn resolve_uninitialized(
	stack: &mut [AbstractType],
	locals: &mut [AbstractType],
	objectref: AbstractType,
	defining_class: &ClassName,
	type_table: &mut FrameTypeTable,
) -> Result<()> {
	let resolved = match objectref.kind() {
		Kind::UninitializedThis => defining_class.clone(),
		Kind::Uninitialized => match type_table.get(objectref.value()) {
			TypeTableEntry::Uninitialized(class, _) => class.clone(),
			TypeTableEntry::Reference(_) => bail!("`invokespecial <init>` objectref wasn't an uninitialized type"),
		},
		_ => return Ok(()), // already resolved or malformed input; leave as-is
	};
	let resolved_index = type_table.add_type(resolved);
	let resolved_type = AbstractType::reference(resolved_index, 0);

	for t in locals.iter_mut().chain(stack.iter_mut()) {
		if *t == objectref {
			*t = resolved_type;
		}
	}
	Ok(())
}

fn merge_into(
	in_states: &mut HashMap<NodeIndex, (Vec<AbstractType>, Vec<AbstractType>)>,
	node: NodeIndex,
	locals: &[AbstractType],
	stack: &[AbstractType],
	hierarchy: &dyn TypeHierarchy,
	type_table: &mut FrameTypeTable,
) -> Result<bool> {
	match in_states.get(&node) {
		None => {
			in_states.insert(node, (locals.to_vec(), stack.to_vec()));
			Ok(true)
		},
		Some((existing_locals, existing_stack)) => {
			let len = existing_locals.len().max(locals.len());
			let mut merged_locals = Vec::with_capacity(len);
			let mut changed = false;
			for i in 0..len {
				let a = existing_locals.get(i).copied().unwrap_or(AbstractType::TOP);
				let b = locals.get(i).copied().unwrap_or(AbstractType::TOP);
				let m = merge_types(a, b, hierarchy, type_table)?;
				if m != a { changed = true; }
				merged_locals.push(m);
			}

			if existing_stack.len() != stack.len() {
				bail!("stack height mismatch at a control-flow join ({} vs {})", existing_stack.len(), stack.len());
			}
			let mut merged_stack = Vec::with_capacity(stack.len());
			for (a, b) in existing_stack.iter().zip(stack.iter()) {
				let m = merge_types(*a, *b, hierarchy, type_table)?;
				if m != *a { changed = true; }
				merged_stack.push(m);
			}

			if changed {
				in_states.insert(node, (merged_locals, merged_stack));
			}
			Ok(changed)
		},
	}
}

fn merge_types(a: AbstractType, b: AbstractType, hierarchy: &dyn TypeHierarchy, type_table: &mut FrameTypeTable) -> Result<AbstractType> {
	if a == b {
		return Ok(a);
	}
	if a.is_top() || b.is_top() {
		return Ok(AbstractType::TOP);
	}
	match (a.kind(), b.kind()) {
		(Kind::Null, Kind::Reference) => Ok(b),
		(Kind::Reference, Kind::Null) => Ok(a),
		(Kind::Reference, Kind::Reference) => merge_references(a, b, hierarchy, type_table),
		_ => Ok(AbstractType::TOP),
	}
}

fn merge_references(a: AbstractType, b: AbstractType, hierarchy: &dyn TypeHierarchy, type_table: &mut FrameTypeTable) -> Result<AbstractType> {
	let TypeTableEntry::Reference(a_class) = type_table.get(a.value()).clone() else {
		bail!("reference-kind abstract type pointed at a non-reference type-table entry");
	};
	let TypeTableEntry::Reference(b_class) = type_table.get(b.value()).clone() else {
		bail!("reference-kind abstract type pointed at a non-reference type-table entry");
	};

	let a_dim = a.dim().max(0) as usize;
	let b_dim = b.dim().max(0) as usize;

	if a_dim != b_dim {
		let min_dim = a_dim.min(b_dim);
		let merged = object_array_of_dim(min_dim)?;
		let index = type_table.add_merged_type(merged);
		return Ok(AbstractType::reference(index, min_dim as i8));
	}

	if a_dim == 0 {
		let merged = hierarchy.common_supertype(&a_class, &b_class)?;
		let index = type_table.add_merged_type(merged);
		return Ok(AbstractType::reference(index, 0));
	}

	let a_text = format!("{}", a_class.as_inner());
	let b_text = format!("{}", b_class.as_inner());
	let a_rest = &a_text[a_dim..];
	let b_rest = &b_text[b_dim..];
	if let (Some(a_inner), Some(b_inner)) = (
		a_rest.strip_prefix('L').and_then(|s| s.strip_suffix(';')),
		b_rest.strip_prefix('L').and_then(|s| s.strip_suffix(';')),
	) {
		let a_inner_class = ClassName::try_from(a_inner)?;
		let b_inner_class = ClassName::try_from(b_inner)?;
		let merged_inner = hierarchy.common_supertype(&a_inner_class, &b_inner_class)?;
		let merged = format!("{}L{};", "[".repeat(a_dim), merged_inner.as_inner());
        let merged = ClassName::try_from(merged)?;
		let index = type_table.add_merged_type(merged);
		return Ok(AbstractType::reference(index, a_dim as i8));
	}

	let merged = object_array_of_dim(a_dim)?;
	let index = type_table.add_merged_type(merged);
	Ok(AbstractType::reference(index, a_dim as i8))
}

fn object_array_of_dim(dim: usize) -> Result<ClassName> {
	let text = if dim == 0 {
		"java/lang/Object".to_string()
	} else {
		format!("{}Ljava/lang/Object;", "[".repeat(dim))
	};
	ClassName::try_from(text)
}

/// Builds the control-flow graph over `code.instructions`' linear index order.
///
/// Leaders are: index 0, every jump/switch target, every index right after an unconditional
/// control transfer, and every exception-table `start`/`end`/`handler` index (so exception ranges
/// always line up with whole blocks).
fn build_cfg(code: &Code, label_of: &impl Fn(usize) -> Label) -> Result<(DiGraph<(), EdgeKind>, Vec<usize>, HashMap<Label, usize>)> {
	let instructions = &code.instructions;
	let mut label_to_index: HashMap<Label, usize> = HashMap::new();
	for (index, entry) in instructions.iter().enumerate() {
		if let Some(label) = entry.label {
			label_to_index.insert(label, index);
		}
	}
	if let Some(last_label) = code.last_label {
		label_to_index.insert(last_label, instructions.len());
	}

	let resolve = |label: Label| -> Result<usize> {
		label_to_index.get(&label).copied().ok_or_else(|| anyhow!("branch target label not found among instructions"))
	};

	let mut leader_set: HashSet<usize> = HashSet::new();
	leader_set.insert(0);

	for (index, entry) in instructions.iter().enumerate() {
		match &entry.instruction {
			Instruction::IfEq(l) | Instruction::IfNe(l) | Instruction::IfLt(l) | Instruction::IfGe(l) | Instruction::IfGt(l) | Instruction::IfLe(l)
			| Instruction::IfICmpEq(l) | Instruction::IfICmpNe(l) | Instruction::IfICmpLt(l) | Instruction::IfICmpGe(l) | Instruction::IfICmpGt(l) | Instruction::IfICmpLe(l)
			| Instruction::IfACmpEq(l) | Instruction::IfACmpNe(l) | Instruction::Goto(l) | Instruction::Jsr(l) | Instruction::IfNull(l) | Instruction::IfNonNull(l) => {
				leader_set.insert(resolve(*l)?);
				if index + 1 < instructions.len() {
					leader_set.insert(index + 1);
				}
			},
			Instruction::TableSwitch { default, table, .. } => {
				leader_set.insert(resolve(*default)?);
				for l in table {
					leader_set.insert(resolve(*l)?);
				}
			},
			Instruction::LookupSwitch { default, pairs } => {
				leader_set.insert(resolve(*default)?);
				for (_, l) in pairs {
					leader_set.insert(resolve(*l)?);
				}
			},
			Instruction::Ret(_) | Instruction::IReturn | Instruction::LReturn | Instruction::FReturn | Instruction::DReturn | Instruction::AReturn
			| Instruction::Return | Instruction::AThrow => {
				if index + 1 < instructions.len() {
					leader_set.insert(index + 1);
				}
			},
			_ => {},
		}
	}

	for exception in &code.exception_table {
		leader_set.insert(resolve(exception.start)?);
		let end = resolve(exception.end)?;
		if end < instructions.len() {
			leader_set.insert(end);
		}
		leader_set.insert(resolve(exception.handler)?);
	}

	let mut leaders: Vec<usize> = leader_set.into_iter().collect();
	leaders.sort_unstable();

	let mut leader_to_node: HashMap<usize, NodeIndex> = HashMap::new();
	let mut graph = DiGraph::new();
	for &leader in &leaders {
		let node = graph.add_node(());
		leader_to_node.insert(leader, node);
	}

	let block_of = |instruction_index: usize| -> NodeIndex {
		let block_leader = leaders.partition_point(|&l| l <= instruction_index) - 1;
		leader_to_node[&leaders[block_leader]]
	};

	for (block_index, &leader) in leaders.iter().enumerate() {
		let block_end = leaders.get(block_index + 1).copied().unwrap_or(instructions.len());
		let last = block_end - 1;
		let node = leader_to_node[&leader];

		match &instructions[last].instruction {
			Instruction::Goto(l) => { graph.add_edge(node, leader_to_node[&resolve(*l)?], EdgeKind::Normal); },
			Instruction::Jsr(l) => { graph.add_edge(node, leader_to_node[&resolve(*l)?], EdgeKind::Normal); },
			Instruction::IfEq(l) | Instruction::IfNe(l) | Instruction::IfLt(l) | Instruction::IfGe(l) | Instruction::IfGt(l) | Instruction::IfLe(l)
			| Instruction::IfICmpEq(l) | Instruction::IfICmpNe(l) | Instruction::IfICmpLt(l) | Instruction::IfICmpGe(l) | Instruction::IfICmpGt(l) | Instruction::IfICmpLe(l)
			| Instruction::IfACmpEq(l) | Instruction::IfACmpNe(l) | Instruction::IfNull(l) | Instruction::IfNonNull(l) => {
				graph.add_edge(node, leader_to_node[&resolve(*l)?], EdgeKind::Normal);
				if block_end < instructions.len() {
					graph.add_edge(node, block_of(block_end), EdgeKind::Normal);
				}
			},
			Instruction::TableSwitch { default, table, .. } => {
				graph.add_edge(node, leader_to_node[&resolve(*default)?], EdgeKind::Normal);
				for l in table {
					graph.add_edge(node, leader_to_node[&resolve(*l)?], EdgeKind::Normal);
				}
			},
			Instruction::LookupSwitch { default, pairs } => {
				graph.add_edge(node, leader_to_node[&resolve(*default)?], EdgeKind::Normal);
				for (_, l) in pairs {
					graph.add_edge(node, leader_to_node[&resolve(*l)?], EdgeKind::Normal);
				}
			},
			Instruction::Ret(_) | Instruction::IReturn | Instruction::LReturn | Instruction::FReturn | Instruction::DReturn | Instruction::AReturn
			| Instruction::Return | Instruction::AThrow => {},
			_ => {
				if block_end < instructions.len() {
					graph.add_edge(node, block_of(block_end), EdgeKind::Normal);
				}
			},
		}
	}

	Ok((graph, leaders, label_to_index))
}

/// Adds the exception-handler edges, from every block overlapping a `try` range to its handler,
/// carrying the caught exception type as the handler's forced single stack entry.
fn build_exception_edges(
	code: &Code,
	label_to_index: &HashMap<Label, usize>,
	leaders: &[usize],
	_hierarchy: &dyn TypeHierarchy,
	type_table: &mut FrameTypeTable,
) -> Result<Vec<(usize, AbstractType)>> {
	let mut edges = Vec::new();
	for exception in &code.exception_table {
		let start = *label_to_index.get(&exception.start).context("exception range start label not found")?;
		let end = *label_to_index.get(&exception.end).context("exception range end label not found")?;
		let handler = *label_to_index.get(&exception.handler).context("exception handler label not found")?;

		let catch_type = match &exception.catch {
			Some(class) => {
				let index = type_table.add_type(class.clone());
				AbstractType::reference(index, 0)
			},
			None => {
				let index = type_table.add_type(ClassName::try_from("java/lang/Throwable")?);
				AbstractType::reference(index, 0)
			},
		};

		for &leader in leaders {
			if leader >= start && leader < end {
				edges.push((handler, catch_type));
			}
		}
	}
	Ok(edges)
}

/// Converts a physical-slot locals array into the JVMS verification-type-info granularity
/// (skipping the duplicate continuation slot a `long`/`double` leaves in the next index), trimming
/// trailing unused (`Top`) slots, matching how a real `StackMapTable` only records the locals that
/// are actually live.
fn locals_to_entries(locals: &[AbstractType]) -> Vec<AbstractType> {
	let significant_len = locals.iter().rposition(|t| !t.is_top()).map_or(0, |i| i + 1);
	let mut entries = Vec::new();
	let mut i = 0;
	while i < significant_len {
		let t = locals[i];
		entries.push(t);
		i += t.width() as usize;
	}
	entries
}

enum FrameDiff {
	Same,
	SameLocals1StackItem(AbstractType),
	Chop(u8),
	Append(Vec<AbstractType>),
	Full,
}

fn diff_frame(previous_locals: &[AbstractType], locals: &[AbstractType], stack: &[AbstractType]) -> FrameDiff {
	let prev_entries = locals_to_entries(previous_locals);
	let curr_entries = locals_to_entries(locals);

	if prev_entries == curr_entries {
		if stack.is_empty() {
			return FrameDiff::Same;
		}
		if stack.len() == 1 {
			return FrameDiff::SameLocals1StackItem(stack[0]);
		}
		return FrameDiff::Full;
	}

	if stack.is_empty() {
		if curr_entries.len() > prev_entries.len() && curr_entries.len() - prev_entries.len() <= 3 && curr_entries[..prev_entries.len()] == prev_entries[..] {
			return FrameDiff::Append(curr_entries[prev_entries.len()..].to_vec());
		}
		if prev_entries.len() > curr_entries.len() && prev_entries.len() - curr_entries.len() <= 3 && prev_entries[..curr_entries.len()] == curr_entries[..] {
			return FrameDiff::Chop((prev_entries.len() - curr_entries.len()) as u8);
		}
	}

	FrameDiff::Full
}

fn encode_frames(
	leaders: &[usize],
	in_states: &HashMap<NodeIndex, (Vec<AbstractType>, Vec<AbstractType>)>,
	initial_locals: &[AbstractType],
	type_table: &FrameTypeTable,
) -> Result<Vec<(usize, StackMapData)>> {
	let mut frames = Vec::new();
	let mut previous_locals = initial_locals.to_vec();

	for (block_index, &leader) in leaders.iter().enumerate().skip(1) {
		let node = NodeIndex::new(block_index);
		let Some((locals, stack)) = in_states.get(&node) else {
			// Unreachable block: no frame needed, nothing flows into it.
			continue;
		};

		let data = match diff_frame(&previous_locals, locals, stack) {
			FrameDiff::Same => StackMapData::Same,
			FrameDiff::SameLocals1StackItem(t) => StackMapData::SameLocals1StackItem { stack: verification_type_info(t, type_table)? },
			FrameDiff::Chop(k) => StackMapData::Chop { k },
			FrameDiff::Append(appended) => StackMapData::Append {
				locals: appended.iter().map(|t| verification_type_info(*t, type_table)).collect::<Result<_>>()?,
			},
			FrameDiff::Full => StackMapData::Full {
				locals: locals_to_entries(locals).iter().map(|t| verification_type_info(*t, type_table)).collect::<Result<_>>()?,
				stack: stack.iter().map(|t| verification_type_info(*t, type_table)).collect::<Result<_>>()?,
			},
		};

		frames.push((leader, data));
		previous_locals = locals.clone();
	}

	Ok(frames)
}

#[cfg(test)]
mod testing {
	use java_string::JavaString;
	use crate::options::NoHierarchy;
	use crate::tree::method::code::{InstructionListEntry, Loadable};
	use super::*;

	fn entry(instruction: Instruction) -> InstructionListEntry {
		InstructionListEntry { label: None, frame: None, instruction }
	}
	fn labelled(label: Label, instruction: Instruction) -> InstructionListEntry {
		InstructionListEntry { label: Some(label), frame: None, instruction }
	}

	#[test]
	fn abstract_type_packs_and_unpacks() {
		let t = AbstractType::reference(12345, -3);
		assert_eq!(t.kind(), Kind::Reference);
		assert_eq!(t.value(), 12345);
		assert_eq!(t.dim(), -3);

		let t = AbstractType::reference(0, 0);
		assert_eq!(t.dim(), 0);

		assert!(AbstractType::TOP.is_top());
		assert!(!AbstractType::INTEGER.is_top());
		assert_eq!(AbstractType::LONG.width(), 2);
		assert_eq!(AbstractType::INTEGER.width(), 1);
	}

	#[test]
	fn merge_same_type_is_identity() {
		let mut table = FrameTypeTable::new();
		let hierarchy = NoHierarchy;
		assert_eq!(merge_types(AbstractType::INTEGER, AbstractType::INTEGER, &hierarchy, &mut table).unwrap(), AbstractType::INTEGER);
	}

	#[test]
	fn merge_top_dominates() {
		let mut table = FrameTypeTable::new();
		let hierarchy = NoHierarchy;
		let merged = merge_types(AbstractType::TOP, AbstractType::INTEGER, &hierarchy, &mut table).unwrap();
		assert!(merged.is_top());
	}

	#[test]
	fn merge_null_and_reference_keeps_the_reference() {
		let mut table = FrameTypeTable::new();
		let hierarchy = NoHierarchy;
		let class = ClassName::try_from("java/lang/String").unwrap();
		let index = table.add_type(class);
		let reference = AbstractType::reference(index, 0);

		let merged = merge_types(AbstractType::NULL, reference, &hierarchy, &mut table).unwrap();
		assert_eq!(merged, reference);
	}

	#[test]
	fn merge_unrelated_references_falls_back_to_object() {
		let mut table = FrameTypeTable::new();
		let hierarchy = NoHierarchy;
		let string_index = table.add_type(ClassName::try_from("java/lang/String").unwrap());
		let class_index = table.add_type(ClassName::try_from("java/lang/Class").unwrap());
		let a = AbstractType::reference(string_index, 0);
		let b = AbstractType::reference(class_index, 0);

		let merged = merge_types(a, b, &hierarchy, &mut table).unwrap();
		assert_eq!(merged.kind(), Kind::Reference);
		let TypeTableEntry::Reference(merged_class) = table.get(merged.value()) else {
			panic!("expected a reference entry");
		};
		assert_eq!(merged_class, &ClassName::JAVA_LANG_OBJECT.to_owned_name());
	}

	/// `static Object f(int x) { return x != 0 ? "hello" : SomeClass.class; }`, built by hand.
	///
	/// Exercises a real control-flow join: the two branches push unrelated reference types
	/// (`String` and `Class`) that only meet again at the `areturn`, forcing `compute_frames` to
	/// run its worklist merge at least once and pick `java/lang/Object` for the merged type.
	#[test]
	fn compute_frames_merges_a_branch_join() {
		let l1 = Label { id: 0 };
		let l2 = Label { id: 1 };

		let code = Code {
			instructions: vec![
				entry(Instruction::IConst1),
				entry(Instruction::IfEq(l1)),
				entry(Instruction::Ldc(Loadable::String(JavaString::from("hello")))),
				entry(Instruction::Goto(l2)),
				labelled(l1, Instruction::Ldc(Loadable::Class(ClassName::try_from("some/random/SomeClass").unwrap()))),
				labelled(l2, Instruction::AReturn),
			],
			..Code::default()
		};

		let class_name = ClassName::try_from("some/random/Caller").unwrap();
		let method_name = crate::tree::method::MethodName::try_from("f").unwrap();
		let descriptor = crate::tree::method::MethodDescriptor::try_from("(I)Ljava/lang/Object;").unwrap();

		let computed = compute_frames(&code, &class_name, &method_name, &descriptor, true, &NoHierarchy, true).unwrap();

		assert_eq!(computed.max_locals, 1);
		assert_eq!(computed.max_stack, 1);
		// One frame per non-entry block leader: the `ifeq` fallthrough, the `ifeq` target, and the
		// branch join at the `areturn`.
		assert_eq!(computed.frames.len(), 3);

		let (_, join_frame) = computed.frames.iter().find(|(index, _)| *index == 5).expect("frame at the join point");
		match join_frame {
			StackMapData::SameLocals1StackItem { stack: VerificationTypeInfo::Object(class) } => {
				assert_eq!(class, &ClassName::JAVA_LANG_OBJECT.to_owned_name());
			},
			other => panic!("expected a `same_locals_1_stack_item` frame with `java/lang/Object`, got {other:?}"),
		}
	}

	#[test]
	fn compute_frames_rejects_empty_code() {
		let code = Code::default();
		let class_name = ClassName::try_from("some/random/Caller").unwrap();
		let method_name = crate::tree::method::MethodName::try_from("f").unwrap();
		let descriptor = crate::tree::method::MethodDescriptor::try_from("()V").unwrap();

		assert!(compute_frames(&code, &class_name, &method_name, &descriptor, true, &NoHierarchy, false).is_err());
	}
}
