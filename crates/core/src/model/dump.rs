//! Human-readable tree dump, one line per element:
//!
//! ```text
//! Namespace: [native: android.os (android.os)] [managed: Android.OS (Android.OS)]
//! 	Class: [native: Process (android.os.Process)] [managed: Process (Android.OS.Process)]
//! ```

use super::element::ElementId;
use super::hierarchy::Hierarchy;
use crate::error::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

impl Hierarchy {
    /// Writes namespaces, then root-level enums, tab-indented per level.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for ns in self.namespaces() {
            self.dump_element(out, *ns, 0)?;
        }
        for e in self.root_enums() {
            self.dump_element(out, e, 0)?;
        }
        Ok(())
    }

    fn dump_element<W: Write>(&self, out: &mut W, id: ElementId, depth: usize) -> io::Result<()> {
        writeln!(out, "{}{}", "\t".repeat(depth), self.dump_line(id))?;
        for member in self[id].members() {
            self.dump_element(out, *member, depth + 1)?;
        }
        Ok(())
    }

    /// The dump line of a single element, without indentation.
    pub fn dump_line(&self, id: ElementId) -> String {
        let e = &self[id];
        format!(
            "{}: [native: {} ({})] [managed: {} ({})]",
            e.kind().label(),
            e.name,
            e.full_name,
            e.managed_name_str(),
            e.full_managed_name_str()
        )
    }

    pub fn dump_to_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.dump(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn dump_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.dump(&mut out)?;
        out.flush()?;
        tracing::info!("Hierarchy dumped to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{ElementData, ElementKind, Hierarchy, ObjectData};
    use bindscope_api::ApiNamespace;

    #[test]
    fn test_dump_format() {
        let mut h = Hierarchy::new();
        let ns = h.alloc(
            ElementKind::Namespace,
            "android.os",
            ElementData::Namespace(ApiNamespace::default()),
        );
        h.push_namespace(ns);
        h[ns].managed_name = Some("Android.OS".to_string());
        h[ns].full_managed_name = Some("Android.OS".to_string());

        let class = h.alloc(
            ElementKind::Class,
            "Process",
            ElementData::Object(ObjectData::default()),
        );
        h[class].full_name = "android.os.Process".to_string();
        h.add_member(ns, class).unwrap();

        let dump = h.dump_to_string();
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Namespace: [native: android.os (android.os)] [managed: Android.OS (Android.OS)]",
                "\tClass: [native: Process (android.os.Process)] [managed:  ()]",
            ]
        );
    }
}
