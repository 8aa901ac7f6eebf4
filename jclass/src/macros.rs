/// Declares a pair of string-like types: an owned `$name(JavaString)` and a borrowed, unsized
/// `$slice(JavaStr)`, mirroring the relationship between `String` and `str`.
///
/// Two forms:
/// - `make_string_str_like!(pub Name(JavaString); pub NameSlice(JavaStr); is_valid(s) = <expr>;);`
///   generates a `check_valid` using the given expression.
/// - `make_string_str_like!(pub Name(JavaString); pub NameSlice(JavaStr););` leaves `check_valid`
///   to be defined in a separate `impl Name { fn check_valid(inner: &JavaStr) -> Result<()> }`.
/// - `make_string_str_like!(Name, NameSlice);` is shorthand for the above with validation that
///   always succeeds.
macro_rules! make_string_str_like {
	(
		$(#[$name_attr:meta])*
		pub $name:ident(JavaString);
		$(#[$slice_attr:meta])*
		pub $slice:ident(JavaStr);
		$(is_valid($var:ident) = $valid_expr:expr;)?
	) => {
		$(#[$name_attr])*
		#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
		pub struct $name(java_string::JavaString);

		$(#[$slice_attr])*
		#[derive(Eq, PartialEq, Ord, PartialOrd, Hash)]
		#[repr(transparent)]
		pub struct $slice(java_string::JavaStr);

		impl $name {
			$(
				fn check_valid($var: &java_string::JavaStr) -> anyhow::Result<()> {
					$valid_expr
				}
			)?

			/// Borrows the inner [`JavaStr`](java_string::JavaStr).
			pub fn as_inner(&self) -> &java_string::JavaStr {
				&self.0
			}

			/// Borrows `self` as the corresponding slice type.
			pub fn as_slice(&self) -> &$slice {
				// SAFETY: `self.0` was validated by `check_valid` when this value was constructed.
				unsafe { $slice::from_inner_unchecked(&self.0) }
			}
		}

		impl $slice {
			/// # Safety
			/// `inner` must already satisfy this type's validity invariant (see `check_valid`).
			pub unsafe fn from_inner_unchecked(inner: &java_string::JavaStr) -> &$slice {
				// SAFETY: `$slice` is `#[repr(transparent)]` over `JavaStr`, so the layouts match.
				unsafe { &*(inner as *const java_string::JavaStr as *const $slice) }
			}

			pub fn as_inner(&self) -> &java_string::JavaStr {
				&self.0
			}

			pub fn to_owned_name(&self) -> $name {
				$name(self.0.to_owned())
			}
		}

		impl std::ops::Deref for $name {
			type Target = $slice;
			fn deref(&self) -> &$slice {
				self.as_slice()
			}
		}

		impl std::borrow::Borrow<$slice> for $name {
			fn borrow(&self) -> &$slice {
				self.as_slice()
			}
		}

		impl ToOwned for $slice {
			type Owned = $name;
			fn to_owned(&self) -> $name {
				self.to_owned_name()
			}
		}

		impl TryFrom<java_string::JavaString> for $name {
			type Error = anyhow::Error;
			fn try_from(value: java_string::JavaString) -> anyhow::Result<Self> {
				$name::check_valid(&value)?;
				Ok($name(value))
			}
		}
		impl TryFrom<&java_string::JavaStr> for $name {
			type Error = anyhow::Error;
			fn try_from(value: &java_string::JavaStr) -> anyhow::Result<Self> {
				$name::try_from(value.to_owned())
			}
		}
		impl TryFrom<String> for $name {
			type Error = anyhow::Error;
			fn try_from(value: String) -> anyhow::Result<Self> {
				$name::try_from(java_string::JavaString::from(value))
			}
		}
		impl TryFrom<&str> for $name {
			type Error = anyhow::Error;
			fn try_from(value: &str) -> anyhow::Result<Self> {
				$name::try_from(java_string::JavaString::from(value))
			}
		}
		impl From<$name> for java_string::JavaString {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl AsRef<java_string::JavaStr> for $name {
			fn as_ref(&self) -> &java_string::JavaStr {
				&self.0
			}
		}
	};

	($name:ident, $slice:ident) => {
		make_string_str_like!(
			pub $name(JavaString);
			pub $slice(JavaStr);
			is_valid(_s) = Ok(());
		);
	};
}

/// Generates `Display` for a `make_string_str_like!` pair by delegating to the inner `JavaStr`.
macro_rules! make_display {
	($name:ident, $slice:ident) => {
		impl std::fmt::Display for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				std::fmt::Display::fmt(self.as_slice(), f)
			}
		}
		impl std::fmt::Display for $slice {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				std::fmt::Display::fmt(self.as_inner(), f)
			}
		}
	};
}

pub(crate) use make_string_str_like;
pub(crate) use make_display;
