//! Named constants from the class file format, as specified by the JVM specification.
//!
//! Grouped into the same sub-modules the spec itself uses, so a constant's full path
//! (e.g. `class_constants::opcode::GETSTATIC`) reads like the table it comes from.

/// The magic number every class file starts with, see JVMS 4.1.
pub const MAGIC: u32 = 0xCAFE_BABE;

/// Constant pool tags, see JVMS 4.4, Table 4.4-A.
pub mod pool {
	pub const UTF8: u8 = 1;
	pub const INTEGER: u8 = 3;
	pub const FLOAT: u8 = 4;
	pub const LONG: u8 = 5;
	pub const DOUBLE: u8 = 6;
	pub const CLASS: u8 = 7;
	pub const STRING: u8 = 8;
	pub const FIELD_REF: u8 = 9;
	pub const METHOD_REF: u8 = 10;
	pub const INTERFACE_METHOD_REF: u8 = 11;
	pub const NAME_AND_TYPE: u8 = 12;
	pub const METHOD_HANDLE: u8 = 15;
	pub const METHOD_TYPE: u8 = 16;
	pub const DYNAMIC: u8 = 17;
	pub const INVOKE_DYNAMIC: u8 = 18;
	pub const MODULE: u8 = 19;
	pub const PACKAGE: u8 = 20;

	/// The `reference_kind` of a `CONSTANT_MethodHandle_info`, see JVMS 4.4.8, Table 5.4.3.5-A.
	pub mod method_handle_reference {
		pub const GET_FIELD: u8 = 1;
		pub const GET_STATIC: u8 = 2;
		pub const PUT_FIELD: u8 = 3;
		pub const PUT_STATIC: u8 = 4;
		pub const INVOKE_VIRTUAL: u8 = 5;
		pub const INVOKE_STATIC: u8 = 6;
		pub const INVOKE_SPECIAL: u8 = 7;
		pub const NEW_INVOKE_SPECIAL: u8 = 8;
		pub const INVOKE_INTERFACE: u8 = 9;
	}
}

/// The `newarray` array type codes, see JVMS 6.5 `newarray`.
pub mod atype {
	pub const T_BOOLEAN: u8 = 4;
	pub const T_CHAR: u8 = 5;
	pub const T_FLOAT: u8 = 6;
	pub const T_DOUBLE: u8 = 7;
	pub const T_BYTE: u8 = 8;
	pub const T_SHORT: u8 = 9;
	pub const T_INT: u8 = 10;
	pub const T_LONG: u8 = 11;
}

/// The names of the attributes defined by the JVM spec, see JVMS 4.7.
pub mod attribute {
	pub const CONSTANT_VALUE: &str = "ConstantValue";
	pub const CODE: &str = "Code";
	pub const STACK_MAP_TABLE: &str = "StackMapTable";
	pub const EXCEPTIONS: &str = "Exceptions";
	pub const INNER_CLASSES: &str = "InnerClasses";
	pub const ENCLOSING_METHOD: &str = "EnclosingMethod";
	pub const SYNTHETIC: &str = "Synthetic";
	pub const SIGNATURE: &str = "Signature";
	pub const SOURCE_FILE: &str = "SourceFile";
	pub const SOURCE_DEBUG_EXTENSION: &str = "SourceDebugExtension";
	pub const LINE_NUMBER_TABLE: &str = "LineNumberTable";
	pub const LOCAL_VARIABLE_TABLE: &str = "LocalVariableTable";
	pub const LOCAL_VARIABLE_TYPE_TABLE: &str = "LocalVariableTypeTable";
	pub const DEPRECATED: &str = "Deprecated";
	pub const RUNTIME_VISIBLE_ANNOTATIONS: &str = "RuntimeVisibleAnnotations";
	pub const RUNTIME_INVISIBLE_ANNOTATIONS: &str = "RuntimeInvisibleAnnotations";
	pub const RUNTIME_VISIBLE_PARAMETER_ANNOTATIONS: &str = "RuntimeVisibleParameterAnnotations";
	pub const RUNTIME_INVISIBLE_PARAMETER_ANNOTATIONS: &str = "RuntimeInvisibleParameterAnnotations";
	pub const RUNTIME_VISIBLE_TYPE_ANNOTATIONS: &str = "RuntimeVisibleTypeAnnotations";
	pub const RUNTIME_INVISIBLE_TYPE_ANNOTATIONS: &str = "RuntimeInvisibleTypeAnnotations";
	pub const ANNOTATION_DEFAULT: &str = "AnnotationDefault";
	pub const BOOTSTRAP_METHODS: &str = "BootstrapMethods";
	pub const METHOD_PARAMETERS: &str = "MethodParameters";
	pub const MODULE: &str = "Module";
	pub const MODULE_PACKAGES: &str = "ModulePackages";
	pub const MODULE_MAIN_CLASS: &str = "ModuleMainClass";
	pub const NEST_HOST: &str = "NestHost";
	pub const NEST_MEMBERS: &str = "NestMembers";
	pub const RECORD: &str = "Record";
	pub const PERMITTED_SUBCLASSES: &str = "PermittedSubclasses";
	/// The legacy, pre-JVMS-6 `StackMap` attribute used by some CLDC class files.
	pub const STACK_MAP: &str = "StackMap";
}

/// The `target_type` of a type annotation, see JVMS 4.7.20, Table 4.7.20-A and 4.7.20-B.
pub mod type_annotation {
	pub const CLASS_TYPE_PARAMETER: u8 = 0x00;
	pub const METHOD_TYPE_PARAMETER: u8 = 0x01;
	pub const CLASS_EXTENDS: u8 = 0x10;
	pub const CLASS_TYPE_PARAMETER_BOUND: u8 = 0x11;
	pub const METHOD_TYPE_PARAMETER_BOUND: u8 = 0x12;
	pub const FIELD: u8 = 0x13;
	pub const METHOD_RETURN: u8 = 0x14;
	pub const METHOD_RECEIVER: u8 = 0x15;
	pub const METHOD_FORMAL_PARAMETER: u8 = 0x16;
	pub const THROWS: u8 = 0x17;
	pub const LOCAL_VARIABLE: u8 = 0x40;
	pub const RESOURCE_VARIABLE: u8 = 0x41;
	pub const EXCEPTION_PARAMETER: u8 = 0x42;
	pub const INSTANCE_OF: u8 = 0x43;
	pub const NEW: u8 = 0x44;
	pub const CONSTRUCTOR_REFERENCE: u8 = 0x45;
	pub const METHOD_REFERENCE: u8 = 0x46;
	pub const CAST: u8 = 0x47;
	pub const CONSTRUCTOR_INVOCATION_TYPE_ARGUMENT: u8 = 0x48;
	pub const METHOD_INVOCATION_TYPE_ARGUMENT: u8 = 0x49;
	pub const CONSTRUCTOR_REFERENCE_TYPE_ARGUMENT: u8 = 0x4A;
	pub const METHOD_REFERENCE_TYPE_ARGUMENT: u8 = 0x4B;
}

/// The JVM bytecode instruction opcodes, see JVMS 6.5.
pub mod opcode {
	pub const NOP: u8 = 0x00;
	pub const ACONST_NULL: u8 = 0x01;
	pub const ICONST_M1: u8 = 0x02;
	pub const ICONST_0: u8 = 0x03;
	pub const ICONST_1: u8 = 0x04;
	pub const ICONST_2: u8 = 0x05;
	pub const ICONST_3: u8 = 0x06;
	pub const ICONST_4: u8 = 0x07;
	pub const ICONST_5: u8 = 0x08;
	pub const LCONST_0: u8 = 0x09;
	pub const LCONST_1: u8 = 0x0A;
	pub const FCONST_0: u8 = 0x0B;
	pub const FCONST_1: u8 = 0x0C;
	pub const FCONST_2: u8 = 0x0D;
	pub const DCONST_0: u8 = 0x0E;
	pub const DCONST_1: u8 = 0x0F;
	pub const BIPUSH: u8 = 0x10;
	pub const SIPUSH: u8 = 0x11;
	pub const LDC: u8 = 0x12;
	pub const LDC_W: u8 = 0x13;
	pub const LDC2_W: u8 = 0x14;
	pub const ILOAD: u8 = 0x15;
	pub const LLOAD: u8 = 0x16;
	pub const FLOAD: u8 = 0x17;
	pub const DLOAD: u8 = 0x18;
	pub const ALOAD: u8 = 0x19;
	pub const ILOAD_0: u8 = 0x1A;
	pub const ILOAD_1: u8 = 0x1B;
	pub const ILOAD_2: u8 = 0x1C;
	pub const ILOAD_3: u8 = 0x1D;
	pub const LLOAD_0: u8 = 0x1E;
	pub const LLOAD_1: u8 = 0x1F;
	pub const LLOAD_2: u8 = 0x20;
	pub const LLOAD_3: u8 = 0x21;
	pub const FLOAD_0: u8 = 0x22;
	pub const FLOAD_1: u8 = 0x23;
	pub const FLOAD_2: u8 = 0x24;
	pub const FLOAD_3: u8 = 0x25;
	pub const DLOAD_0: u8 = 0x26;
	pub const DLOAD_1: u8 = 0x27;
	pub const DLOAD_2: u8 = 0x28;
	pub const DLOAD_3: u8 = 0x29;
	pub const ALOAD_0: u8 = 0x2A;
	pub const ALOAD_1: u8 = 0x2B;
	pub const ALOAD_2: u8 = 0x2C;
	pub const ALOAD_3: u8 = 0x2D;
	pub const IALOAD: u8 = 0x2E;
	pub const LALOAD: u8 = 0x2F;
	pub const FALOAD: u8 = 0x30;
	pub const DALOAD: u8 = 0x31;
	pub const AALOAD: u8 = 0x32;
	pub const BALOAD: u8 = 0x33;
	pub const CALOAD: u8 = 0x34;
	pub const SALOAD: u8 = 0x35;
	pub const ISTORE: u8 = 0x36;
	pub const LSTORE: u8 = 0x37;
	pub const FSTORE: u8 = 0x38;
	pub const DSTORE: u8 = 0x39;
	pub const ASTORE: u8 = 0x3A;
	pub const ISTORE_0: u8 = 0x3B;
	pub const ISTORE_1: u8 = 0x3C;
	pub const ISTORE_2: u8 = 0x3D;
	pub const ISTORE_3: u8 = 0x3E;
	pub const LSTORE_0: u8 = 0x3F;
	pub const LSTORE_1: u8 = 0x40;
	pub const LSTORE_2: u8 = 0x41;
	pub const LSTORE_3: u8 = 0x42;
	pub const FSTORE_0: u8 = 0x43;
	pub const FSTORE_1: u8 = 0x44;
	pub const FSTORE_2: u8 = 0x45;
	pub const FSTORE_3: u8 = 0x46;
	pub const DSTORE_0: u8 = 0x47;
	pub const DSTORE_1: u8 = 0x48;
	pub const DSTORE_2: u8 = 0x49;
	pub const DSTORE_3: u8 = 0x4A;
	pub const ASTORE_0: u8 = 0x4B;
	pub const ASTORE_1: u8 = 0x4C;
	pub const ASTORE_2: u8 = 0x4D;
	pub const ASTORE_3: u8 = 0x4E;
	pub const IASTORE: u8 = 0x4F;
	pub const LASTORE: u8 = 0x50;
	pub const FASTORE: u8 = 0x51;
	pub const DASTORE: u8 = 0x52;
	pub const AASTORE: u8 = 0x53;
	pub const BASTORE: u8 = 0x54;
	pub const CASTORE: u8 = 0x55;
	pub const SASTORE: u8 = 0x56;
	pub const POP: u8 = 0x57;
	pub const POP2: u8 = 0x58;
	pub const DUP: u8 = 0x59;
	pub const DUP_X1: u8 = 0x5A;
	pub const DUP_X2: u8 = 0x5B;
	pub const DUP2: u8 = 0x5C;
	pub const DUP2_X1: u8 = 0x5D;
	pub const DUP2_X2: u8 = 0x5E;
	pub const SWAP: u8 = 0x5F;
	pub const IADD: u8 = 0x60;
	pub const LADD: u8 = 0x61;
	pub const FADD: u8 = 0x62;
	pub const DADD: u8 = 0x63;
	pub const ISUB: u8 = 0x64;
	pub const LSUB: u8 = 0x65;
	pub const FSUB: u8 = 0x66;
	pub const DSUB: u8 = 0x67;
	pub const IMUL: u8 = 0x68;
	pub const LMUL: u8 = 0x69;
	pub const FMUL: u8 = 0x6A;
	pub const DMUL: u8 = 0x6B;
	pub const IDIV: u8 = 0x6C;
	pub const LDIV: u8 = 0x6D;
	pub const FDIV: u8 = 0x6E;
	pub const DDIV: u8 = 0x6F;
	pub const IREM: u8 = 0x70;
	pub const LREM: u8 = 0x71;
	pub const FREM: u8 = 0x72;
	pub const DREM: u8 = 0x73;
	pub const INEG: u8 = 0x74;
	pub const LNEG: u8 = 0x75;
	pub const FNEG: u8 = 0x76;
	pub const DNEG: u8 = 0x77;
	pub const ISHL: u8 = 0x78;
	pub const LSHL: u8 = 0x79;
	pub const ISHR: u8 = 0x7A;
	pub const LSHR: u8 = 0x7B;
	pub const IUSHR: u8 = 0x7C;
	pub const LUSHR: u8 = 0x7D;
	pub const IAND: u8 = 0x7E;
	pub const LAND: u8 = 0x7F;
	pub const IOR: u8 = 0x80;
	pub const LOR: u8 = 0x81;
	pub const IXOR: u8 = 0x82;
	pub const LXOR: u8 = 0x83;
	pub const IINC: u8 = 0x84;
	pub const I2L: u8 = 0x85;
	pub const I2F: u8 = 0x86;
	pub const I2D: u8 = 0x87;
	pub const L2I: u8 = 0x88;
	pub const L2F: u8 = 0x89;
	pub const L2D: u8 = 0x8A;
	pub const F2I: u8 = 0x8B;
	pub const F2L: u8 = 0x8C;
	pub const F2D: u8 = 0x8D;
	pub const D2I: u8 = 0x8E;
	pub const D2L: u8 = 0x8F;
	pub const D2F: u8 = 0x90;
	pub const I2B: u8 = 0x91;
	pub const I2C: u8 = 0x92;
	pub const I2S: u8 = 0x93;
	pub const LCMP: u8 = 0x94;
	pub const FCMPL: u8 = 0x95;
	pub const FCMPG: u8 = 0x96;
	pub const DCMPL: u8 = 0x97;
	pub const DCMPG: u8 = 0x98;
	pub const IFEQ: u8 = 0x99;
	pub const IFNE: u8 = 0x9A;
	pub const IFLT: u8 = 0x9B;
	pub const IFGE: u8 = 0x9C;
	pub const IFGT: u8 = 0x9D;
	pub const IFLE: u8 = 0x9E;
	pub const IF_ICMPEQ: u8 = 0x9F;
	pub const IF_ICMPNE: u8 = 0xA0;
	pub const IF_ICMPLT: u8 = 0xA1;
	pub const IF_ICMPGE: u8 = 0xA2;
	pub const IF_ICMPGT: u8 = 0xA3;
	pub const IF_ICMPLE: u8 = 0xA4;
	pub const IF_ACMPEQ: u8 = 0xA5;
	pub const IF_ACMPNE: u8 = 0xA6;
	pub const GOTO: u8 = 0xA7;
	pub const JSR: u8 = 0xA8;
	pub const RET: u8 = 0xA9;
	pub const TABLESWITCH: u8 = 0xAA;
	pub const LOOKUPSWITCH: u8 = 0xAB;
	pub const IRETURN: u8 = 0xAC;
	pub const LRETURN: u8 = 0xAD;
	pub const FRETURN: u8 = 0xAE;
	pub const DRETURN: u8 = 0xAF;
	pub const ARETURN: u8 = 0xB0;
	pub const RETURN: u8 = 0xB1;
	pub const GETSTATIC: u8 = 0xB2;
	pub const PUTSTATIC: u8 = 0xB3;
	pub const GETFIELD: u8 = 0xB4;
	pub const PUTFIELD: u8 = 0xB5;
	pub const INVOKEVIRTUAL: u8 = 0xB6;
	pub const INVOKESPECIAL: u8 = 0xB7;
	pub const INVOKESTATIC: u8 = 0xB8;
	pub const INVOKEINTERFACE: u8 = 0xB9;
	pub const INVOKEDYNAMIC: u8 = 0xBA;
	pub const NEW: u8 = 0xBB;
	pub const NEWARRAY: u8 = 0xBC;
	pub const ANEWARRAY: u8 = 0xBD;
	/// Note: this name keeps the spelling used throughout this crate's reader/writer, not the
	/// JVMS name `arraylength`.
	pub const ARRAYLENGHT: u8 = 0xBE;
	pub const ATHROW: u8 = 0xBF;
	pub const CHECKCAST: u8 = 0xC0;
	pub const INSTANCEOF: u8 = 0xC1;
	pub const MONITORENTER: u8 = 0xC2;
	pub const MONITOREXIT: u8 = 0xC3;
	pub const WIDE: u8 = 0xC4;
	pub const MULTIANEWARRAY: u8 = 0xC5;
	pub const IFNULL: u8 = 0xC6;
	pub const IFNONNULL: u8 = 0xC7;
	pub const GOTO_W: u8 = 0xC8;
	pub const JSR_W: u8 = 0xC9;
	/// Reserved opcode, see JVMS 6.2.
	pub const BREAKPOINT: u8 = 0xCA;
	/// Reserved opcode, see JVMS 6.2.
	pub const IMPDEP1: u8 = 0xFE;
	/// Reserved opcode, see JVMS 6.2.
	pub const IMPDEP2: u8 = 0xFF;
}
