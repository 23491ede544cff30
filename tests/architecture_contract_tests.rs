//! Architecture contract tests.

mod support;

use support::architecture::{check, mod_files_with_logic, module_names, LayerRule, Violation};

const DOMAIN: LayerRule = LayerRule {
    layer: "src/domain",
    forbidden: &[
        "crate::adapter",
        "crate::infrastructure",
        "crate::application",
        "crate::port",
        "tracing::",
    ],
};

const APPLICATION: LayerRule = LayerRule {
    layer: "src/application",
    forbidden: &["crate::adapter", "crate::infrastructure"],
};

const LESSON_OUTPUT: LayerRule = LayerRule {
    layer: "src/application",
    forbidden: &["println!", "eprintln!", "print!("],
};

const CLI: LayerRule = LayerRule {
    layer: "src/adapter/inbound/cli",
    forbidden: &["crate::infrastructure"],
};

const OUTBOUND: LayerRule = LayerRule {
    layer: "src/adapter/outbound",
    forbidden: &["crate::adapter::inbound"],
};

const OPERATOR_PORTS: LayerRule = LayerRule {
    layer: "src/port/inbound/operator",
    forbidden: &["std::path::Path", "PathBuf"],
};

fn assert_clean(what: &str, violations: Vec<Violation>) {
    assert!(violations.is_empty(), "{what}: {violations:#?}");
}

#[test]
fn domain_has_no_outer_layer_imports() {
    assert_clean("domain reaches outward", check(&DOMAIN));
}

#[test]
fn application_layer_has_no_adapter_or_infrastructure_imports() {
    assert_clean("application reaches outward", check(&APPLICATION));
}

#[test]
fn lessons_never_print_directly() {
    assert_clean(
        "lessons should narrate through the Narrator port",
        check(&LESSON_OUTPUT),
    );
}

#[test]
fn cli_has_no_direct_infrastructure_imports() {
    assert_clean("CLI bypasses the operator bridge", check(&CLI));
}

#[test]
fn outbound_adapters_do_not_depend_on_the_cli() {
    assert_clean("outbound adapter imports the inbound CLI", check(&OUTBOUND));
}

#[test]
fn operator_ports_are_transport_agnostic() {
    assert_clean(
        "operator ports expose filesystem path types",
        check(&OPERATOR_PORTS),
    );
}

#[test]
fn mod_rs_is_export_only() {
    assert_clean("mod.rs carries logic", mod_files_with_logic("src"));
}

#[test]
fn each_lesson_has_its_own_module() {
    let modules = module_names("src/application/lesson");
    for lesson in ["srp", "ocp", "lsp", "isp", "dip"] {
        assert!(
            modules.iter().any(|m| m == lesson),
            "expected lesson module `{lesson}` in {modules:?}"
        );
    }
}
