//! Target-language type handles.
//!
//! A `TypeRef` identifies a type in the generated target language. It is a
//! structural handle, not a reflection object: the configuration loader
//! resolves real types and hands the generator these descriptors.

use std::fmt;

/// A reference to a target-language type.
///
/// Two shapes cover everything the generator needs:
/// - `Named`: a (possibly generic) named type, e.g. `decimal` or
///   `List<OrderLine>`
/// - `Array`: an array of some element type, e.g. `OrderLine[]`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeRef {
    Named { name: String, args: Vec<TypeRef> },
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// Create a non-generic named type.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a generic named type with type arguments.
    pub fn generic(name: impl Into<String>, args: impl IntoIterator<Item = TypeRef>) -> Self {
        TypeRef::Named {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Create an array type.
    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    /// The element type, if this is an array.
    pub fn array_element(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(element) => Some(element),
            TypeRef::Named { .. } => None,
        }
    }

    /// The `index`-th generic argument, if present.
    pub fn generic_arg(&self, index: usize) -> Option<&TypeRef> {
        match self {
            TypeRef::Named { args, .. } => args.get(index),
            TypeRef::Array(_) => None,
        }
    }
}

impl fmt::Display for TypeRef {
    /// Renders the handle as a target-language type name, e.g.
    /// `List<OrderLine>` or `decimal[]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named { name, args } => {
                write!(f, "{name}")?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            TypeRef::Array(element) => write!(f, "{element}[]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn named_type_formats_plain() {
        assert_eq!(TypeRef::named("decimal").to_string(), "decimal");
    }

    #[test]
    fn generic_type_formats_with_angle_brackets() {
        let list = TypeRef::generic("List", [TypeRef::named("OrderLine")]);
        assert_eq!(list.to_string(), "List<OrderLine>");
    }

    #[test]
    fn nested_generic_formats_recursively() {
        let map = TypeRef::generic(
            "Dictionary",
            [
                TypeRef::named("string"),
                TypeRef::generic("List", [TypeRef::named("int")]),
            ],
        );
        assert_eq!(map.to_string(), "Dictionary<string, List<int>>");
    }

    #[test]
    fn array_type_formats_with_suffix() {
        let arr = TypeRef::array(TypeRef::named("OrderLine"));
        assert_eq!(arr.to_string(), "OrderLine[]");
    }

    #[test]
    fn array_element_access() {
        let arr = TypeRef::array(TypeRef::named("int"));
        assert_eq!(arr.array_element(), Some(&TypeRef::named("int")));
        assert_eq!(TypeRef::named("int").array_element(), None);
    }

    #[test]
    fn generic_arg_access() {
        let list = TypeRef::generic("List", [TypeRef::named("int")]);
        assert_eq!(list.generic_arg(0), Some(&TypeRef::named("int")));
        assert_eq!(list.generic_arg(1), None);
    }
}
