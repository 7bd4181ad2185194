//! Integration tests exercising the renderer on hand-built declaration trees.
use kotskel_render::{Declaration, Parameter, Renderer, SourceFile, render, select_visible};
use pretty_assertions::assert_eq;

fn fun(name: &str, modifier: Option<&str>, params: &[Option<&str>]) -> Declaration {
	Declaration::function(
		Some(name),
		modifier,
		params.iter().map(|name| Parameter::new(*name)).collect(),
	)
}

#[test]
fn public_function() {
	assert_eq!(render(&fun("foo", None, &[Some("a"), Some("b")])), "fun foo(a, b)");
}

#[test]
fn private_function_is_not_selected() {
	let decls = vec![fun("bar", Some("private"), &[])];
	assert!(select_visible(&decls).is_empty());
}

#[test]
fn class_with_mixed_members() {
	let class = Declaration::class(
		Some("C"),
		None,
		vec![fun("m1", None, &[]), fun("m2", Some("private"), &[])],
	);
	assert_eq!(render(&class), "class C {\n   fun m1()\n}");
}

#[test]
fn class_without_visible_members() {
	let class = Declaration::class(Some("Empty"), None, vec![fun("hidden", Some("private"), &[])]);
	assert_eq!(render(&class), "class Empty");
}

#[test]
fn unnamed_parameter_placeholder() {
	assert_eq!(render(&fun("f", None, &[None])), "fun f(_)");
}

#[test]
fn anonymous_class_placeholder() {
	let class = Declaration::class(None::<String>, None, vec![fun("m", None, &[None, Some("b")])]);
	assert_eq!(render(&class), "class <anonymous> {\n   fun m(_, b)\n}");
}

#[test]
fn other_kind_is_verbatim() {
	let text = "typealias Handler = (String) -> Unit";
	assert_eq!(render(&Declaration::other(Some("Handler"), None, text)), text);
}

#[test]
fn file_output_follows_declaration_order() {
	let names = ["zeta", "alpha", "mid", "beta"];
	let file = SourceFile::new(
		names
			.iter()
			.enumerate()
			.map(|(idx, name)| fun(name, (idx == 2).then_some("internal"), &[]))
			.collect(),
	);
	assert_eq!(
		Renderer::new().render_file(&file),
		"fun zeta()\nfun alpha()\nfun beta()\n"
	);
}
