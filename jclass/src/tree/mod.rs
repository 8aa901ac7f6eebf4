pub mod class;
pub mod field;
pub mod method;
pub mod attribute;
pub mod version;
pub mod module;
pub mod annotation;
pub mod descriptor;
pub mod record;
pub mod type_annotation;

mod names {
	use java_string::JavaStr;

	/// Checks if a class name is valid according to JVMS 4.2.1 (also accepting array class names).
	pub(super) fn is_valid_class_name(x: &JavaStr) -> bool {
		if x.starts_with('[') {
			// TODO: max 255 [ are allowed
			// TODO: must be a field desc
			true
		} else {
			// a list of identifiers split by /
			// each identifier must be an unqualified name
			x.split('/').all(is_valid_unqualified_name)
			// TODO: explicitly note that "" is not valid (tests?!)
		}
	}

	/// Checks if a class name is a valid object (non-array) class name according to JVMS 4.2.1.
	pub(super) fn is_valid_obj_class_name(x: &JavaStr) -> bool {
		!x.starts_with('[') && x.split('/').all(is_valid_unqualified_name)
	}

	/// Checks if a name is an unqualified name according to JVMS 4.2.2
	///
	/// This is used for field names, formal parameter names, local variable names.
	pub(super) fn is_valid_unqualified_name(x: &JavaStr) -> bool {
		// must contain at least one unicode codepoint
		!x.is_empty() &&
			// must not contain any of . ; [ /
			!x.contains(['.', ';', '[', '/'])
	}

	/// Checks if a method name is valid according to JVMS 4.2.2
	pub(super) fn is_valid_method_name(x: &JavaStr) -> bool {
		// either one of the special names or an unqualified name with special < > restriction
		x == "<init>" || x == "<clinit>" || (
			// must contain at least one unicode codepoint
			!x.is_empty() &&
				!x.contains(['.', ';', '[', '/', '<', '>'])
		)
	}

	// TODO: 4.2.3 module and package names

	#[cfg(test)]
	mod testing {
		use java_string::JavaStr;
		use crate::tree::names::*;

		fn s(x: &str) -> &JavaStr {
			JavaStr::from_str(x)
		}

		#[test]
		fn class_names() {
			assert!(is_valid_class_name(s("java/lang/Object")));
			assert!(is_valid_class_name(s("java/lang/Thread")));
			assert!(is_valid_class_name(s("[[[D")));
			assert!(is_valid_class_name(s("An$Inner$Class")));

			assert!(!is_valid_class_name(s(""))); // it may come as a surprise, but an empty class name is not valid
			assert!(!is_valid_class_name(s("/")));
			assert!(!is_valid_class_name(s("/a")));
			assert!(!is_valid_class_name(s("a/")));
			assert!(!is_valid_class_name(s("//a")));
			assert!(!is_valid_class_name(s("a//")));
			assert!(!is_valid_class_name(s("a.b")));
			assert!(!is_valid_class_name(s("a;b")));
			assert!(!is_valid_class_name(s("a[b")));
		}

		#[test]
		fn obj_class_names() {
			assert!(is_valid_obj_class_name(s("java/lang/Object")));
			assert!(is_valid_obj_class_name(s("An$Inner$Class")));

			assert!(!is_valid_obj_class_name(s("[[[D"))); // arrays are not object classes
			assert!(!is_valid_obj_class_name(s("")));
			assert!(!is_valid_obj_class_name(s("a.b")));
		}

		#[test]
		fn unqualified_names() {
			assert!(is_valid_unqualified_name(s("foo")));
			assert!(is_valid_unqualified_name(s("bar")));
			assert!(is_valid_unqualified_name(s("FOO")));
			assert!(is_valid_unqualified_name(s("1234567"))); // yes numbers are valid here, but not in java source code
			assert!(is_valid_unqualified_name(s("---")));
			assert!(is_valid_unqualified_name(s("a$name")));

			assert!(!is_valid_unqualified_name(s("")));
			assert!(!is_valid_unqualified_name(s(".")));
			assert!(!is_valid_unqualified_name(s(";")));
			assert!(!is_valid_unqualified_name(s("[")));
			assert!(!is_valid_unqualified_name(s("/")));
		}

		#[test]
		fn method_names() {
			assert!(is_valid_method_name(s("foo")));
			assert!(is_valid_method_name(s("bar")));
			assert!(is_valid_method_name(s("FOO")));
			assert!(is_valid_method_name(s("1234567"))); // yes numbers are valid here, but not in java source code
			assert!(is_valid_method_name(s("---")));
			assert!(is_valid_method_name(s("a$name")));

			assert!(!is_valid_method_name(s("")));
			assert!(!is_valid_method_name(s(".")));
			assert!(!is_valid_method_name(s(";")));
			assert!(!is_valid_method_name(s("[")));
			assert!(!is_valid_method_name(s("/")));
			assert!(!is_valid_method_name(s("<NotClinit>")));
			assert!(!is_valid_method_name(s("<>")));
			assert!(!is_valid_method_name(s("<")));
			assert!(!is_valid_method_name(s(">")));
		}
	}
}