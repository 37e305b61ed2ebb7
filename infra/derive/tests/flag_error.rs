#[test]
fn flag_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/flag_error_pass.rs");
    t.compile_fail("tests/ui/flag_error_no_context.rs");
    t.compile_fail("tests/ui/flag_error_from_without_context.rs");
    t.compile_fail("tests/ui/flag_error_bad_context_type.rs");
    t.compile_fail("tests/ui/flag_error_tuple_variant.rs");
}
