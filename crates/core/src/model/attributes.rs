use std::fmt;

/// Annotation attached to an element for the code generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomAttribute {
    Register(RegisterAttribute),
    NamespaceMapping(NamespaceMappingAttribute),
}

/// Binds a managed member to its JNI counterpart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterAttribute {
    /// JNI name: `/` between packages, `$` between nested types.
    pub name: String,
    pub signature: Option<String>,
    pub connector: Option<String>,
    pub do_not_generate_acw: bool,
    pub api_since: Option<u32>,
}

impl RegisterAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceMappingAttribute {
    pub java: String,
    pub managed: String,
}

impl CustomAttribute {
    pub fn register(&self) -> Option<&RegisterAttribute> {
        match self {
            CustomAttribute::Register(r) => Some(r),
            _ => None,
        }
    }

    pub fn namespace_mapping(&self) -> Option<&NamespaceMappingAttribute> {
        match self {
            CustomAttribute::NamespaceMapping(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for CustomAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomAttribute::Register(r) => {
                write!(f, "[Register (\"{}\"", r.name)?;
                match (r.signature.as_deref(), r.connector.as_deref()) {
                    (Some(sig), Some(conn)) => write!(f, ", \"{}\", \"{}\"", sig, conn)?,
                    (sig, conn) => {
                        if let Some(sig) = sig {
                            write!(f, ", Signature=\"{}\"", sig)?;
                        }
                        if let Some(conn) = conn {
                            write!(f, ", Connector=\"{}\"", conn)?;
                        }
                    }
                }
                if r.do_not_generate_acw {
                    f.write_str(", DoNotGenerateAcw=true")?;
                }
                if let Some(level) = r.api_since.filter(|l| *l > 0) {
                    write!(f, ", ApiSince={}", level)?;
                }
                f.write_str(")]")
            }
            CustomAttribute::NamespaceMapping(m) => {
                write!(f, "[NamespaceMapping (Java=\"{}\", Managed=\"{}\")]", m.java, m.managed)
            }
        }
    }
}
