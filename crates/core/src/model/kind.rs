use std::fmt;

/// Every node kind of the output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Namespace,
    Class,
    InterfaceInvoker,
    Interface,
    Enum,
    Field,
    Method,
    Constructor,
    Implements,
    TypeParameter,
    TypeParameterGenericConstraint,
    MethodParameter,
    Exception,
}

impl ElementKind {
    pub const ALL: [ElementKind; 13] = [
        ElementKind::Namespace,
        ElementKind::Class,
        ElementKind::InterfaceInvoker,
        ElementKind::Interface,
        ElementKind::Enum,
        ElementKind::Field,
        ElementKind::Method,
        ElementKind::Constructor,
        ElementKind::Implements,
        ElementKind::TypeParameter,
        ElementKind::TypeParameterGenericConstraint,
        ElementKind::MethodParameter,
        ElementKind::Exception,
    ];

    /// Prefix used to re-key symbol index entries that collide with an
    /// entry of another kind (`"<prefix>:<name>"`).
    pub fn index_prefix(&self) -> &'static str {
        match self {
            ElementKind::Namespace => "namespace",
            ElementKind::Class => "class",
            ElementKind::InterfaceInvoker => "invoker",
            ElementKind::Interface => "interface",
            ElementKind::Enum => "enum",
            ElementKind::Field => "field",
            ElementKind::Method => "method",
            ElementKind::Constructor => "constructor",
            ElementKind::Implements => "implements",
            ElementKind::TypeParameter => "typeParameter",
            ElementKind::TypeParameterGenericConstraint => "typeParameterGenericConstraint",
            ElementKind::MethodParameter => "methodParameter",
            ElementKind::Exception => "exception",
        }
    }

    /// Label used by the hierarchy dump.
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Namespace => "Namespace",
            ElementKind::Class => "Class",
            ElementKind::InterfaceInvoker => "Class (invoker)",
            ElementKind::Interface => "Interface",
            ElementKind::Enum => "Enum",
            ElementKind::Field => "Field",
            ElementKind::Method => "Method",
            ElementKind::Constructor => "Constructor",
            ElementKind::Implements => "Implements",
            ElementKind::TypeParameter => "Type Parameter",
            ElementKind::TypeParameterGenericConstraint => "Type Parameter Generic Constraint",
            ElementKind::MethodParameter => "Method Parameter",
            ElementKind::Exception => "Exception",
        }
    }

    /// Types that take part in base type resolution and live in the index.
    pub fn is_object(&self) -> bool {
        matches!(
            self,
            ElementKind::Class
                | ElementKind::InterfaceInvoker
                | ElementKind::Interface
                | ElementKind::Enum
        )
    }

    pub fn is_class(&self) -> bool {
        matches!(self, ElementKind::Class | ElementKind::InterfaceInvoker)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.index_prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_prefixes_are_unique() {
        let prefixes: HashSet<_> = ElementKind::ALL.iter().map(|k| k.index_prefix()).collect();
        assert_eq!(prefixes.len(), ElementKind::ALL.len());
    }

    #[test]
    fn test_object_kinds() {
        let objects: Vec<_> = ElementKind::ALL.iter().filter(|k| k.is_object()).collect();
        assert_eq!(objects.len(), 4);
        assert!(!ElementKind::Namespace.is_object());
        assert!(ElementKind::InterfaceInvoker.is_class());
    }
}
