mod common;

use bindscope_core::diagnostics::DiagnosticKind;
use bindscope_core::model::{CustomAttribute, Parent};
use bindscope_core::naming::PlainTranslator;
use bindscope_core::{BindscopeError, BuilderConfig, ElementKind};
use common::*;
use std::sync::Arc;

#[test]
fn test_nested_interface_gets_invoker() {
    let h = build(&process_api());

    let ns = by_managed(&h, "Android.OS");
    assert_eq!(h[ns].full_name, "android.os");

    let process = by_managed(&h, "Android.OS.Process");
    assert_eq!(h[process].kind(), ElementKind::Class);
    assert_eq!(h[process].parent(), Parent::Element(ns));

    let listener = by_managed(&h, "Android.OS.Process.IOnUidImportanceListener");
    assert_eq!(h[listener].kind(), ElementKind::Interface);
    assert_eq!(h[listener].parent(), Parent::Element(process));
    assert_eq!(h[listener].name, "OnUidImportanceListener");
    assert_eq!(h[listener].full_name, "android.os.Process.OnUidImportanceListener");

    let invoker = by_managed(&h, "Android.OS.Process.OnUidImportanceListenerInvoker");
    assert_eq!(h[invoker].kind(), ElementKind::InterfaceInvoker);
    assert_eq!(h[invoker].parent(), Parent::Element(process));
    assert_eq!(
        base_types(&h, invoker),
        vec!["Java.Lang.Object", "Android.OS.Process.IOnUidImportanceListener"]
    );

    let invoker_data = h[invoker].object().unwrap();
    assert_eq!(invoker_data.visibility, bindscope_api::ApiVisibility::Internal);
    assert_eq!(invoker_data.invoked_interface, Some(listener));
    assert_eq!(h[listener].object().unwrap().invoker, Some(invoker));
}

#[test]
fn test_default_base_types() {
    let h = build(&process_api());

    let process = by_managed(&h, "Android.OS.Process");
    assert_eq!(base_types(&h, process), vec!["Java.Lang.Object"]);

    let listener = by_managed(&h, "Android.OS.Process.IOnUidImportanceListener");
    assert_eq!(base_types(&h, listener), vec!["Android.Runtime.IJavaObject"]);
}

#[test]
fn test_bootstrap_types_are_synthesized() {
    let h = build(&process_api());

    let runtime = h.find_namespace("Android.Runtime").unwrap();
    assert!(h[runtime].ignore_for_code_generation);
    assert_eq!(h[runtime].managed_name.as_deref(), Some("Android.Runtime"));

    let java_object = by_managed(&h, "Android.Runtime.IJavaObject");
    let element = &h[java_object];
    assert_eq!(element.kind(), ElementKind::Interface);
    assert!(element.ignore_for_code_generation);
    assert!(element.use_global);
    assert!(!element.is_bound_api);
    assert!(element.object().unwrap().invoker.is_none());

    let object = by_managed(&h, "Java.Lang.Object");
    assert_eq!(h[object].full_name, "java.lang.Object");
    assert!(h[object].base_types().is_empty());
}

#[test]
fn test_existing_root_object_is_reused() {
    let forest = vec![
        namespace("java.lang", vec![class("Object")]),
        namespace("a", vec![class("B")]),
    ];
    let h = build(&forest);

    let objects: Vec<_> = h
        .iter()
        .filter(|e| e.full_name == "java.lang.Object")
        .collect();
    assert_eq!(objects.len(), 1);
    assert!(objects[0].is_bound_api);

    let b = by_managed(&h, "A.B");
    assert_eq!(base_types(&h, b), vec!["Java.Lang.Object"]);
    // The root object falls back to itself, which is never kept.
    assert!(h[objects[0].id()].base_types().is_empty());
}

#[test]
fn test_full_names_follow_ancestor_chain() {
    let forest = vec![namespace(
        "android.os",
        vec![
            class("Process")
                .with_child(field("FIRST_APPLICATION_UID"))
                .with_child(
                    method("setThreadPriority", "(II)V").with_child(parameter("tid", "int")),
                ),
            class("Process.Inner").with_child(constructor("Inner")),
            interface("Process.OnUidImportanceListener")
                .with_child(method("onUidImportance", "(II)V")),
        ],
    )];
    let h = build(&forest);

    for id in h.walk_all() {
        let element = &h[id];
        let Some(parent) = element.parent().element() else {
            continue;
        };
        assert_eq!(element.full_name, h.chain_full_name(id), "native chain of {}", element);
        assert_eq!(
            element.full_managed_name_str(),
            format!("{}.{}", h[parent].full_managed_name_str(), element.managed_name_str()),
            "managed chain of {}",
            element
        );
    }

    let field = by_managed(&h, "Android.OS.Process.FirstApplicationUid");
    assert_eq!(h[field].kind(), ElementKind::Field);
    let param = by_managed(&h, "Android.OS.Process.SetThreadPriority.Tid");
    assert_eq!(h[param].kind(), ElementKind::MethodParameter);
    let ctor = by_managed(&h, "Android.OS.Process.Inner.Inner");
    assert_eq!(h[ctor].kind(), ElementKind::Constructor);
}

#[test]
fn test_implements_are_resolved_and_removed() {
    let forest = vec![
        namespace("java.lang", vec![interface("Runnable")]),
        namespace(
            "a",
            vec![
                class_extending("Worker", "java.lang.Object")
                    .with_child(implements("java.lang.Runnable"))
                    .with_child(implements("java.lang.Runnable")),
                interface("Task").with_child(implements("java.lang.Runnable")),
            ],
        ),
    ];
    let h = build(&forest);

    let worker = by_managed(&h, "A.Worker");
    assert_eq!(base_types(&h, worker), vec!["Java.Lang.Object", "Java.Lang.IRunnable"]);
    assert!(
        h[worker]
            .members()
            .iter()
            .all(|m| h[*m].kind() != ElementKind::Implements)
    );

    let task = by_managed(&h, "A.ITask");
    assert_eq!(base_types(&h, task), vec!["Java.Lang.IRunnable"]);
    assert_eq!(h.count(ElementKind::Implements), 0);
}

#[test]
fn test_generic_base_names_are_erased() {
    let forest = vec![
        namespace("java.lang", vec![interface("Comparable")]),
        namespace(
            "a",
            vec![class("Version").with_child(implements("java.lang.Comparable<a.Version>"))],
        ),
    ];
    let h = build(&forest);

    let version = by_managed(&h, "A.Version");
    assert_eq!(base_types(&h, version), vec!["Java.Lang.IComparable"]);
}

#[test]
fn test_invoker_name_is_not_doubled() {
    let forest = vec![namespace("a", vec![interface("CallbackInvoker")])];
    let (builder, sink) = builder(BuilderConfig::default());
    let h = builder.build(&forest).unwrap();

    let iface = by_managed(&h, "A.ICallbackInvoker");
    let invoker = by_managed(&h, "A.CallbackInvoker");
    assert_eq!(h[invoker].kind(), ElementKind::InterfaceInvoker);
    assert_eq!(h[invoker].name, "CallbackInvoker");
    assert_eq!(base_types(&h, invoker), vec!["Java.Lang.Object", "A.ICallbackInvoker"]);
    assert_eq!(h[iface].object().unwrap().invoker, Some(invoker));

    // Same native name as its interface, so the invoker is indexed under a prefix.
    assert_eq!(sink.count_of(DiagnosticKind::DuplicateIndexEntry), 1);
}

#[test]
fn test_enums_are_nested_after_naming() {
    let forest = vec![
        namespace("android.os", vec![class("Process")]),
        enumeration("Android.OS.ProcessState"),
        enumeration("Android.OS.Process.Importance"),
        enumeration("Standalone"),
    ];
    let h = build(&forest);

    let ns = h.find_namespace("android.os").unwrap();
    let state = by_managed(&h, "Android.OS.ProcessState");
    assert_eq!(h[state].kind(), ElementKind::Enum);
    assert_eq!(h[state].parent(), Parent::Element(ns));
    assert_eq!(h[state].full_name, "android.os.ProcessState");

    let process = by_managed(&h, "Android.OS.Process");
    let importance = by_managed(&h, "Android.OS.Process.Importance");
    assert_eq!(h[importance].parent(), Parent::Element(process));

    let standalone = by_managed(&h, "Standalone");
    assert_eq!(h[standalone].parent(), Parent::Root);
    assert_eq!(h.enums().len(), 3);
    assert_eq!(h.root_enums().collect::<Vec<_>>(), vec![standalone]);
    assert!(h[state].base_types().is_empty());
}

#[test]
fn test_nested_enum_drops_its_root_level_names() {
    let forest = vec![
        namespace("android.os", vec![class("Process")]),
        enumeration("Android.OS.ProcessState"),
    ];
    let h = build(&forest);
    let state = by_managed(&h, "Android.OS.ProcessState");
    assert_eq!(h[state].full_name, "android.os.ProcessState");

    // The bare enum name was only valid while the enum sat at the root.
    let forest = vec![
        namespace("android.os", vec![class("Process").with_child(implements("ProcessState"))]),
        enumeration("Android.OS.ProcessState"),
    ];
    let (builder, _) = builder(BuilderConfig::default());
    let err = builder.build(&forest).unwrap_err();
    assert!(matches!(err, BindscopeError::TypeNotFound { ref name, .. } if name == "ProcessState"));
}

#[test]
fn test_same_named_enums_in_different_packages() {
    let forest = vec![
        namespace("android.os", vec![class("Process")]),
        namespace("android.app", vec![class("Activity")]),
        enumeration("Android.OS.State"),
        enumeration("Android.App.State"),
    ];
    let h = build(&forest);

    let os_state = by_managed(&h, "Android.OS.State");
    let app_state = by_managed(&h, "Android.App.State");
    assert_ne!(os_state, app_state);
    assert_eq!(h[os_state].full_name, "android.os.State");
    assert_eq!(h[app_state].full_name, "android.app.State");
}

#[test]
fn test_managed_name_override_is_literal() {
    let forest = vec![namespace(
        "android.os",
        vec![
            class("Process").with_managed_name("OSProcess"),
            class("Process.Inner"),
        ],
    )];
    let h = build(&forest);

    let process = by_managed(&h, "Android.OS.OSProcess");
    assert_eq!(h[process].managed_name.as_deref(), Some("OSProcess"));
    let inner = by_managed(&h, "Android.OS.OSProcess.Inner");
    assert_eq!(h[inner].parent(), Parent::Element(process));
    assert_eq!(h.managed_name_or_derive(inner, true).unwrap(), "Android.OS.OSProcess.Inner");
}

#[test]
fn test_location_comments() {
    let forest = vec![namespace(
        "a",
        vec![at(class("B"), 10, Some(5)).with_child(at(method("run", "()V"), 12, None))],
    )];
    let h = build(&forest);

    let b = by_managed(&h, "A.B");
    assert_eq!(h[b].comments, vec!["api.xml [10:5]"]);
    let run = by_managed(&h, "A.B.Run");
    assert_eq!(h[run].comments, vec!["api.xml:12"]);
}

#[test]
fn test_unprocessed_attributes_are_kept() {
    let mut b = class("B");
    b.merge_source_file = Some("api-21.xml".to_string());
    b.other_attributes
        .insert("deprecated-since".to_string(), "23".to_string());
    let h = build(&[namespace("a", vec![b])]);

    let b = by_managed(&h, "A.B");
    let attributes = &h[b].unprocessed_attributes;
    assert_eq!(attributes.get("merge.SourceFile").map(String::as_str), Some("api-21.xml"));
    assert_eq!(attributes.get("deprecated-since").map(String::as_str), Some("23"));
}

#[test]
fn test_custom_attributes() {
    let forest = vec![namespace(
        "android.os",
        vec![
            class("Process").with_child(method("myPid", "()I")),
            interface("Process.OnUidImportanceListener"),
        ],
    )];
    let h = build(&forest);

    let ns = h.find_namespace("android.os").unwrap();
    let mapping = h[ns].custom_attributes()[0].namespace_mapping().unwrap();
    assert_eq!((mapping.java.as_str(), mapping.managed.as_str()), ("android.os", "Android.OS"));

    let listener = by_managed(&h, "Android.OS.Process.IOnUidImportanceListener");
    let register = h[listener].custom_attributes()[0].register().unwrap();
    assert_eq!(register.name, "android/os/Process$OnUidImportanceListener");
    assert!(register.do_not_generate_acw);

    let pid = by_managed(&h, "Android.OS.Process.MyPid");
    assert_eq!(h[pid].custom_attributes().len(), 1);
    assert_eq!(
        h[pid].custom_attributes()[0].to_string(),
        "[Register (\"myPid\", Signature=\"()I\")]"
    );

    let invoker = by_managed(&h, "Android.OS.Process.OnUidImportanceListenerInvoker");
    assert!(h[invoker].custom_attributes().is_empty());
    let runtime = h.find_namespace("Android.Runtime").unwrap();
    assert!(h[runtime].custom_attributes().is_empty());
    assert!(matches!(
        h[by_managed(&h, "Android.OS.Process")].custom_attributes(),
        [CustomAttribute::Register(_)]
    ));
}

#[test]
fn test_unsupported_elements_are_skipped() {
    let annotation =
        bindscope_api::ApiElement::new(bindscope_api::ApiElementKind::Unsupported, "Keep");
    let forest = vec![
        namespace("a", vec![class("B"), annotation, field("stray")]),
        class("TopLevel"),
    ];
    let (builder, sink) = builder(BuilderConfig::default());
    let h = builder.build(&forest).unwrap();

    assert_eq!(sink.count_of(DiagnosticKind::UnsupportedElementKind), 3);
    assert!(h.find_by_full_name("a.B").is_some());
    assert!(h.find_by_full_name("a.stray").is_none());
    assert!(h.find_by_full_name("TopLevel").is_none());
}

#[test]
fn test_unknown_base_type_is_fatal() {
    let forest = vec![namespace(
        "a",
        vec![at(class_extending("B", "com.missing.Base"), 4, Some(2))],
    )];
    let (builder, _) = builder(BuilderConfig::default());

    let err = builder.build(&forest).unwrap_err();
    assert!(
        matches!(err, BindscopeError::TypeNotFound { ref name, .. } if name == "com.missing.Base")
    );
    assert!(err.to_string().contains("Called on behalf of: a.B at api.xml [4:2]"));
    assert!(err.is_fatal_build_error());
}

#[test]
fn test_unknown_enclosing_type_is_fatal() {
    let forest = vec![namespace("a", vec![class("Outer.Inner")])];
    let (builder, _) = builder(BuilderConfig::default());

    let err = builder.build(&forest).unwrap_err();
    assert!(matches!(err, BindscopeError::TypeNotFound { ref name, .. } if name == "a.Outer"));
}

#[test]
fn test_invalid_identifier_is_fatal() {
    let forest = vec![namespace("a", vec![class("B").with_child(method("access$000", "()V"))])];
    let (builder, _) = builder(BuilderConfig::default());

    let err = builder.build(&forest).unwrap_err();
    assert!(matches!(err, BindscopeError::InvalidIdentifier { .. }));
}

#[test]
fn test_empty_input_is_rejected() {
    let (builder, _) = builder(BuilderConfig::default());
    assert!(matches!(builder.build(&[]), Err(BindscopeError::EmptyInput)));
}

#[test]
fn test_custom_translator() {
    let (builder, _) = builder(BuilderConfig::default());
    let builder = builder.with_translator(Arc::new(PlainTranslator::default()));
    let h = builder.build(&process_api()).unwrap();

    assert!(h.find_by_full_managed_name("Android.Os.Process").is_some());
    assert!(h.find_by_full_managed_name("Android.OS.Process").is_none());
}
