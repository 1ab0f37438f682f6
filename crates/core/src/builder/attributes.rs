use super::BuildContext;
use crate::model::{
    CustomAttribute, ElementId, ElementKind, NamespaceMappingAttribute, RegisterAttribute,
};

impl BuildContext<'_> {
    /// Attaches `Register` to bound types and members and `NamespaceMapping`
    /// to bound namespaces.
    pub(super) fn add_custom_attributes(&mut self) {
        let mut added = 0usize;
        for id in self.hierarchy.walk_all() {
            let element = &self.hierarchy[id];
            if !element.is_bound_api {
                continue;
            }

            let attribute = match element.kind() {
                ElementKind::Namespace => {
                    CustomAttribute::NamespaceMapping(NamespaceMappingAttribute {
                        java: element.full_name.clone(),
                        managed: element.full_managed_name_str().to_string(),
                    })
                }
                ElementKind::Class | ElementKind::Interface => {
                    let mut register = RegisterAttribute::new(self.jni_type_name(id));
                    register.do_not_generate_acw = true;
                    register.api_since = api_level(element.api_since.as_deref());
                    CustomAttribute::Register(register)
                }
                ElementKind::Method | ElementKind::Constructor | ElementKind::Field => {
                    let name = if element.kind() == ElementKind::Constructor {
                        "<init>".to_string()
                    } else {
                        element.name.clone()
                    };
                    let mut register = RegisterAttribute::new(name);
                    register.signature = element.jni_signature.clone();
                    register.api_since = api_level(element.api_since.as_deref());
                    CustomAttribute::Register(register)
                }
                _ => continue,
            };

            if self.hierarchy[id].add_custom_attribute(attribute) {
                added += 1;
            }
        }
        tracing::debug!("Added {} custom attributes", added);
    }

    /// JNI name of a type: package segments joined by `/`, nested types by `$`.
    fn jni_type_name(&self, id: ElementId) -> String {
        let mut types = vec![self.hierarchy[id].name.replace('.', "$")];
        let mut package = None;
        for ancestor in self.hierarchy.ancestors(id) {
            let a = &self.hierarchy[ancestor];
            if a.kind() == ElementKind::Namespace {
                package = Some(a.full_name.replace('.', "/"));
                break;
            }
            types.push(a.name.replace('.', "$"));
        }
        types.reverse();

        let nested = types.join("$");
        match package {
            Some(p) if !p.is_empty() => format!("{}/{}", p, nested),
            _ => nested,
        }
    }
}

fn api_level(api_since: Option<&str>) -> Option<u32> {
    api_since
        .and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|l| *l > 0)
}
